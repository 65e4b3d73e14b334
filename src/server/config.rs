use std::path::PathBuf;

use crate::server::error::{config::ConfigError, AppError};

const GOOGLE_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";

const FACEBOOK_AUTH_URL: &str = "https://www.facebook.com/v18.0/dialog/oauth";
const FACEBOOK_TOKEN_URL: &str = "https://graph.facebook.com/v18.0/oauth/access_token";

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_JWT_EXPIRES_IN_DAYS: i64 = 7;
const DEFAULT_UPLOAD_DIR: &str = "uploads";

/// Credentials and endpoints for one OAuth provider.
///
/// A provider is only enabled when all three of its environment variables are
/// set; otherwise the login endpoint for it returns an error.
#[derive(Clone)]
pub struct OAuthProviderConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_url: String,
    pub auth_url: String,
    pub token_url: String,
}

/// Configuration for spooling and forwarding image uploads.
#[derive(Clone)]
pub struct UploadConfig {
    /// Local directory where multipart files are spooled before forwarding.
    pub dir: PathBuf,
    /// External image host endpoint; uploads are disabled when unset.
    pub media_upload_url: Option<String>,
    /// API key sent along with forwarded uploads.
    pub media_api_key: Option<String>,
}

pub struct Config {
    pub database_url: String,
    pub port: u16,

    /// Frontend origin used for CORS and OAuth redirects back to the browser.
    pub client_url: String,

    pub jwt_secret: String,
    pub jwt_expires_in_days: i64,

    pub google: Option<OAuthProviderConfig>,
    pub facebook: Option<OAuthProviderConfig>,

    pub upload: UploadConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: require_var("DATABASE_URL")?,
            port: optional_parsed("PORT")?.unwrap_or(DEFAULT_PORT),
            client_url: require_var("CLIENT_URL")?,
            jwt_secret: require_var("JWT_SECRET")?,
            jwt_expires_in_days: optional_parsed("JWT_EXPIRES_IN_DAYS")?
                .unwrap_or(DEFAULT_JWT_EXPIRES_IN_DAYS),
            google: provider_from_env(
                "GOOGLE_CLIENT_ID",
                "GOOGLE_CLIENT_SECRET",
                "GOOGLE_REDIRECT_URL",
                GOOGLE_AUTH_URL,
                GOOGLE_TOKEN_URL,
            ),
            facebook: provider_from_env(
                "FACEBOOK_CLIENT_ID",
                "FACEBOOK_CLIENT_SECRET",
                "FACEBOOK_REDIRECT_URL",
                FACEBOOK_AUTH_URL,
                FACEBOOK_TOKEN_URL,
            ),
            upload: UploadConfig {
                dir: PathBuf::from(
                    std::env::var("UPLOAD_DIR").unwrap_or_else(|_| DEFAULT_UPLOAD_DIR.to_string()),
                ),
                media_upload_url: std::env::var("MEDIA_UPLOAD_URL").ok(),
                media_api_key: std::env::var("MEDIA_API_KEY").ok(),
            },
        })
    }
}

fn require_var(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional_parsed<T: std::str::FromStr>(name: &str) -> Result<Option<T>, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidEnvVar(name.to_string(), value)),
        Err(_) => Ok(None),
    }
}

/// Builds a provider config when all of its credentials are present.
fn provider_from_env(
    id_var: &str,
    secret_var: &str,
    redirect_var: &str,
    auth_url: &str,
    token_url: &str,
) -> Option<OAuthProviderConfig> {
    let client_id = std::env::var(id_var).ok()?;
    let client_secret = std::env::var(secret_var).ok()?;
    let redirect_url = std::env::var(redirect_var).ok()?;

    Some(OAuthProviderConfig {
        client_id,
        client_secret,
        redirect_url,
        auth_url: auth_url.to_string(),
        token_url: token_url.to_string(),
    })
}
