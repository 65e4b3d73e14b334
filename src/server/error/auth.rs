use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::debug;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization: Bearer` header was present on a protected route.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("No bearer token in Authorization header")]
    MissingToken,

    /// The bearer token failed signature or structural validation.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Bearer token is invalid")]
    InvalidToken,

    /// The bearer token signature was valid but the token has expired.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Bearer token has expired")]
    TokenExpired,

    /// The token referenced a user id that no longer exists.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("User {0} from token not found in database")]
    UserNotInDatabase(i32),

    /// The account referenced by the token has been deactivated by an admin.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("User {0} account is deactivated")]
    AccountDeactivated(i32),

    /// The authenticated user lacks the role required by the endpoint.
    ///
    /// Results in a 403 Forbidden response.
    ///
    /// # Fields
    /// - User id and a description of the attempted action for logging
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// Login failed because the account is missing, inactive, passwordless,
    /// or the password did not match. The reasons are deliberately collapsed
    /// into a single variant so the response never reveals which check failed.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// CSRF state validation failed during OAuth callback.
    ///
    /// The CSRF state token in the OAuth callback URL does not match the token stored
    /// in the session, indicating a potential CSRF attack or an invalid callback request.
    /// Results in a 400 Bad Request response.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// An OAuth login was requested for a provider that is not configured.
    ///
    /// Results in a 400 Bad Request response.
    #[error("OAuth provider {0} is not configured")]
    ProviderNotConfigured(String),
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to appropriate HTTP status codes and user-facing messages:
/// - Token problems and deactivated or missing accounts → 401 Unauthorized
/// - `InvalidCredentials` → 401 Unauthorized with "Invalid credentials"
/// - `AccessDenied` → 403 Forbidden
/// - `CsrfValidationFailed` / `ProviderNotConfigured` → 400 Bad Request
///
/// All errors are logged at debug level for diagnostics while keeping client-facing
/// messages generic to avoid information leakage.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        debug!("{}", self);

        match self {
            Self::MissingToken | Self::InvalidToken | Self::TokenExpired => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto::new("Not authorized, token failed")),
            )
                .into_response(),
            Self::UserNotInDatabase(_) | Self::AccountDeactivated(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto::new("Not authorized, token failed")),
            )
                .into_response(),
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto::new("Invalid credentials")),
            )
                .into_response(),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto::new("Not authorized for this action")),
            )
                .into_response(),
            Self::CsrfValidationFailed => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto::new(
                    "There was an issue logging you in, please try again.",
                )),
            )
                .into_response(),
            Self::ProviderNotConfigured(provider) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto::new(format!(
                    "{} login is not available",
                    provider
                ))),
            )
                .into_response(),
        }
    }
}
