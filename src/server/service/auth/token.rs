//! JWT issuance and verification.

use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};

use crate::server::error::{auth::AuthError, AppError};

/// Claims carried by an access token.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User id as a string, per JWT convention.
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

/// Issues and verifies the bearer tokens used for API authentication.
///
/// Keys are derived once from the configured secret at startup and cloned
/// into the application state.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    lifetime: Duration,
}

impl TokenService {
    /// Creates a new TokenService instance.
    ///
    /// # Arguments
    /// - `secret` - HMAC secret the tokens are signed with
    /// - `lifetime` - How long issued tokens stay valid
    ///
    /// # Returns
    /// - `TokenService` - New token service
    pub fn new(secret: &str, lifetime: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            lifetime,
        }
    }

    /// Issues a signed token for a user.
    ///
    /// # Arguments
    /// - `user_id` - The authenticated user's id
    ///
    /// # Returns
    /// - `Ok(String)` - Encoded token
    /// - `Err(AppError)` - Token encoding failed
    pub fn issue(&self, user_id: i32) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + self.lifetime).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|err| AppError::InternalError(format!("Failed to encode token: {}", err)))
    }

    /// Verifies a token and extracts the user id.
    ///
    /// # Arguments
    /// - `token` - Encoded token from the Authorization header
    ///
    /// # Returns
    /// - `Ok(i32)` - The token subject's user id
    /// - `Err(AuthError::TokenExpired)` - Token is past its expiry
    /// - `Err(AuthError::InvalidToken)` - Signature or claims are invalid
    pub fn verify(&self, token: &str) -> Result<i32, AuthError> {
        let data = decode::<Claims>(token, &self.decoding_key, &Validation::default()).map_err(
            |err| match err.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken,
            },
        )?;

        data.claims.sub.parse().map_err(|_| AuthError::InvalidToken)
    }
}
