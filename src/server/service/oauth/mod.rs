//! OAuth federation with Google and Facebook.
//!
//! The login half builds the provider authorization URL with a CSRF token;
//! the callback half exchanges the returned code, fetches the provider
//! profile, and resolves it to a local account.

mod callback;
mod login;

use sea_orm::DatabaseConnection;

use crate::server::{model::user::Provider, state::OAuth2Client};

/// Service handling the OAuth login flow for one provider.
pub struct OAuthService<'a> {
    db: &'a DatabaseConnection,
    http_client: &'a reqwest::Client,
    oauth_client: &'a OAuth2Client,
    provider: Provider,
}

impl<'a> OAuthService<'a> {
    /// Creates a new OAuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `http_client` - HTTP client for token exchange and profile fetches
    /// - `oauth_client` - Configured OAuth2 client for the provider
    /// - `provider` - Which provider this service talks to
    ///
    /// # Returns
    /// - `OAuthService` - New service instance
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        oauth_client: &'a OAuth2Client,
        provider: Provider,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            provider,
        }
    }
}
