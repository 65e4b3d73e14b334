//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - HTTP client for OAuth userinfo calls and image forwarding
//! - OAuth2 clients for Google and Facebook federation (when configured)
//! - Token service for issuing and verifying bearer JWTs
//! - Client URL and upload configuration

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use sea_orm::DatabaseConnection;

use crate::server::{config::UploadConfig, service::auth::token::TokenService};

/// Type alias for an OAuth2 client with authorization and token endpoints set.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// Application state containing shared resources and dependencies.
///
/// This struct holds all the shared state that needs to be accessible across
/// request handlers. It is initialized once during server startup and then
/// cloned (cheaply, as it contains reference-counted or cloneable types) for
/// each incoming request via Axum's state extraction.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `reqwest::Client` uses an `Arc` internally
/// - `OAuth2Client` is designed to be cloned
/// - `TokenService` holds pre-built signing keys
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    ///
    /// This connection is shared across all requests and manages a pool of
    /// connections to the SQLite database.
    pub db: DatabaseConnection,

    /// HTTP client for making external API requests.
    ///
    /// Configured with security settings (no redirects) to prevent SSRF
    /// vulnerabilities. Used for OAuth userinfo calls and forwarding image
    /// uploads to the external image host.
    pub http_client: reqwest::Client,

    /// Service for issuing and verifying bearer JWTs.
    pub token_service: TokenService,

    /// OAuth2 client for Google login, if configured.
    pub google_oauth: Option<OAuth2Client>,

    /// OAuth2 client for Facebook login, if configured.
    pub facebook_oauth: Option<OAuth2Client>,

    /// Frontend origin used to build OAuth redirect URLs back to the browser.
    pub client_url: String,

    /// Spool directory and image host settings for multipart uploads.
    pub upload: UploadConfig,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// This constructor is called once during server startup after all
    /// dependencies have been initialized. The resulting state is then
    /// provided to the Axum router for use in request handlers.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `http_client` - HTTP client for external API requests
    /// - `token_service` - JWT issuing and verification service
    /// - `google_oauth` - OAuth2 client for Google, if configured
    /// - `facebook_oauth` - OAuth2 client for Facebook, if configured
    /// - `client_url` - Frontend origin for OAuth redirects
    /// - `upload` - Upload spool and image host configuration
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        token_service: TokenService,
        google_oauth: Option<OAuth2Client>,
        facebook_oauth: Option<OAuth2Client>,
        client_url: String,
        upload: UploadConfig,
    ) -> Self {
        Self {
            db,
            http_client,
            token_service,
            google_oauth,
            facebook_oauth,
            client_url,
            upload,
        }
    }
}
