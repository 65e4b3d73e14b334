use oauth2::{basic::BasicClient, AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use sea_orm::DatabaseConnection;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::{Config, OAuthProviderConfig},
    error::AppError,
    state::OAuth2Client,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by the Sqlite database.
///
/// Sessions exist only to carry the CSRF token across the OAuth redirect
/// round trip, so the inactivity window is kept short.
///
/// # Arguments
/// - `db` - Database connection whose underlying pool backs the session store
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Session layer ready to attach to the router
/// - `Err(AppError)` - Failed to run the session store migration
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool().clone();

    let store = SqliteStore::new(pool);
    store.migrate().await?;

    Ok(SessionManagerLayer::new(store)
        .with_secure(false)
        .with_expiry(Expiry::OnInactivity(time::Duration::minutes(10))))
}

/// Builds the shared HTTP client for external API calls.
///
/// Redirects are disabled so a compromised OAuth provider or image host
/// response cannot bounce requests to arbitrary targets.
///
/// # Returns
/// - `Ok(reqwest::Client)` - Configured HTTP client
/// - `Err(AppError)` - Failed to initialize the TLS backend
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}

/// Builds an OAuth2 client for one provider from its configuration.
///
/// # Arguments
/// - `provider` - Client credentials and endpoint URLs for the provider
///
/// # Returns
/// - `Ok(OAuth2Client)` - Client with authorization and token endpoints set
/// - `Err(AppError::ConfigErr)` - One of the configured URLs failed to parse
pub fn setup_oauth_client(provider: &OAuthProviderConfig) -> Result<OAuth2Client, AppError> {
    use crate::server::error::config::ConfigError;

    let client = BasicClient::new(ClientId::new(provider.client_id.clone()))
        .set_client_secret(ClientSecret::new(provider.client_secret.clone()))
        .set_auth_uri(AuthUrl::new(provider.auth_url.clone()).map_err(ConfigError::from)?)
        .set_token_uri(TokenUrl::new(provider.token_url.clone()).map_err(ConfigError::from)?)
        .set_redirect_uri(
            RedirectUrl::new(provider.redirect_url.clone()).map_err(ConfigError::from)?,
        );

    Ok(client)
}

/// Ensures the upload spool directory exists.
///
/// # Arguments
/// - `config` - Application configuration containing the upload directory path
///
/// # Returns
/// - `Ok(())` - Directory exists or was created
/// - `Err(AppError::IoErr)` - Failed to create the directory
pub async fn ensure_upload_dir(config: &Config) -> Result<(), AppError> {
    tokio::fs::create_dir_all(&config.upload.dir).await?;
    Ok(())
}
