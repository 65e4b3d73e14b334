mod model;
mod server;

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method},
};
use chrono::Duration;
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config, router, service::auth::token::TokenService, startup, state::AppState,
};

/// Request body cap, sized above the 5 MB image limit so oversized uploads
/// reach the handler and get a proper error message.
const BODY_LIMIT_BYTES: usize = 10 * 1024 * 1024;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db).await?;
    let http_client = startup::setup_reqwest_client()?;
    startup::ensure_upload_dir(&config).await?;

    let google_oauth = config
        .google
        .as_ref()
        .map(startup::setup_oauth_client)
        .transpose()?;
    let facebook_oauth = config
        .facebook
        .as_ref()
        .map(startup::setup_oauth_client)
        .transpose()?;

    let token_service = TokenService::new(
        &config.jwt_secret,
        Duration::days(config.jwt_expires_in_days),
    );

    let cors = CorsLayer::new()
        .allow_origin(config.client_url.parse::<HeaderValue>()?)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true);

    let state = AppState::new(
        db,
        http_client,
        token_service,
        google_oauth,
        facebook_oauth,
        config.client_url.clone(),
        config.upload.clone(),
    );

    let app = router::router()
        .with_state(state)
        .layer(session)
        .layer(cors)
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES));

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
