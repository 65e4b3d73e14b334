use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Redirect},
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::error;

use crate::{
    model::user::{AuthResponseDto, MeResponseDto},
    server::{
        error::{auth::AuthError, AppError},
        middleware::auth::AuthGuard,
        model::user::{user_dto, user_summary_dto, Provider, RegisterParams},
        service::{auth::AuthService, oauth::OAuthService},
        state::{AppState, OAuth2Client},
    },
};

/// Session key for the OAuth CSRF token.
static SESSION_OAUTH_CSRF_TOKEN: &str = "oauth:csrf_token";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Query parameters for the OAuth callback endpoint.
#[derive(Deserialize)]
pub struct CallbackParams {
    /// CSRF state token to be validated against the session value.
    pub state: String,
    /// Authorization code from the provider for token exchange.
    pub code: String,
}

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(&state.db, &state.token_service);

    let (token, user) = auth_service
        .register(RegisterParams {
            username: body.username,
            email: body.email,
            password: body.password,
            first_name: body.first_name,
            last_name: body.last_name,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponseDto {
            success: true,
            message: "User registered successfully".to_string(),
            token,
            user: user_dto(&user),
        }),
    ))
}

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(&state.db, &state.token_service);

    let (token, user) = auth_service.login(&body.email, &body.password).await?;

    Ok(Json(AuthResponseDto {
        success: true,
        message: "Login successful".to_string(),
        token,
        user: user_dto(&user),
    }))
}

pub async fn me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.token_service, &headers)
        .require()
        .await?;

    let me = AuthService::new(&state.db, &state.token_service)
        .me(user)
        .await?;

    Ok(Json(MeResponseDto {
        success: true,
        user: user_dto(&me.user),
        followers_count: me.followers.len() as u64,
        following_count: me.following.len() as u64,
        followers: me.followers.iter().map(user_summary_dto).collect(),
        following: me.following.iter().map(user_summary_dto).collect(),
    }))
}

pub async fn refresh(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.token_service, &headers)
        .require()
        .await?;

    let token = AuthService::new(&state.db, &state.token_service).refresh(user.id)?;

    Ok(Json(AuthResponseDto {
        success: true,
        message: "Token refreshed".to_string(),
        token,
        user: user_dto(&user),
    }))
}

pub async fn google_login(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    oauth_login(&state, &session, Provider::Google).await
}

pub async fn facebook_login(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    oauth_login(&state, &session, Provider::Facebook).await
}

pub async fn google_callback(
    State(state): State<AppState>,
    session: Session,
    params: Query<CallbackParams>,
) -> impl IntoResponse {
    oauth_callback(&state, &session, params.0, Provider::Google).await
}

pub async fn facebook_callback(
    State(state): State<AppState>,
    session: Session,
    params: Query<CallbackParams>,
) -> impl IntoResponse {
    oauth_callback(&state, &session, params.0, Provider::Facebook).await
}

/// Starts the OAuth flow: stash a CSRF token and bounce to the provider.
async fn oauth_login(
    state: &AppState,
    session: &Session,
    provider: Provider,
) -> Result<Redirect, AppError> {
    let oauth_client = provider_client(state, provider)?;
    let oauth_service =
        OAuthService::new(&state.db, &state.http_client, oauth_client, provider);

    let (url, csrf_token) = oauth_service.authorization_url();

    session
        .insert(SESSION_OAUTH_CSRF_TOKEN, csrf_token.secret())
        .await?;

    Ok(Redirect::temporary(url.as_ref()))
}

/// Finishes the OAuth flow.
///
/// Every failure redirects the browser back to the login page rather than
/// rendering a JSON error, since this endpoint is only reached by redirect.
async fn oauth_callback(
    state: &AppState,
    session: &Session,
    params: CallbackParams,
    provider: Provider,
) -> Redirect {
    match complete_callback(state, session, params, provider).await {
        Ok(token) => Redirect::temporary(&format!(
            "{}/auth/callback?token={}",
            state.client_url, token
        )),
        Err(err) => {
            error!("{} callback failed: {}", provider.as_str(), err);
            Redirect::temporary(&format!("{}/login?error=auth_failed", state.client_url))
        }
    }
}

async fn complete_callback(
    state: &AppState,
    session: &Session,
    params: CallbackParams,
    provider: Provider,
) -> Result<String, AppError> {
    validate_csrf(session, &params.state).await?;

    let oauth_client = provider_client(state, provider)?;
    let oauth_service =
        OAuthService::new(&state.db, &state.http_client, oauth_client, provider);

    let user = oauth_service.handle_callback(params.code).await?;

    state.token_service.issue(user.id)
}

fn provider_client(state: &AppState, provider: Provider) -> Result<&OAuth2Client, AppError> {
    let client = match provider {
        Provider::Google => state.google_oauth.as_ref(),
        Provider::Facebook => state.facebook_oauth.as_ref(),
    };

    client.ok_or_else(|| AuthError::ProviderNotConfigured(provider.as_str().to_string()).into())
}

async fn validate_csrf(session: &Session, csrf_state: &str) -> Result<(), AppError> {
    let stored_state: Option<String> = session.remove(SESSION_OAUTH_CSRF_TOKEN).await?;

    if let Some(state) = stored_state {
        if state == csrf_state {
            return Ok(());
        }
    }

    Err(AppError::AuthErr(AuthError::CsrfValidationFailed))
}
