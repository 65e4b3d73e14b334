use oauth2::{CsrfToken, Scope};
use url::Url;

use super::OAuthService;
use crate::server::model::user::Provider;

impl OAuthService<'_> {
    /// Builds the provider authorization URL to redirect the browser to.
    ///
    /// The returned CSRF token must be stored in the session and compared
    /// against the `state` parameter on the callback.
    ///
    /// # Returns
    /// - `(Url, CsrfToken)` - Authorization URL and the CSRF token it carries
    pub fn authorization_url(&self) -> (Url, CsrfToken) {
        let request = self.oauth_client.authorize_url(CsrfToken::new_random);

        let request = match self.provider {
            Provider::Google => request
                .add_scope(Scope::new("openid".to_string()))
                .add_scope(Scope::new("email".to_string()))
                .add_scope(Scope::new("profile".to_string())),
            Provider::Facebook => request
                .add_scope(Scope::new("email".to_string()))
                .add_scope(Scope::new("public_profile".to_string())),
        };

        request.url()
    }
}
