use chrono::Utc;
use oauth2::{AuthorizationCode, TokenResponse};
use serde::Deserialize;

use super::OAuthService;
use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{CreateUserParams, OAuthProfile, Provider},
};

const GOOGLE_USERINFO_URL: &str = "https://www.googleapis.com/oauth2/v2/userinfo";
const FACEBOOK_PROFILE_URL: &str = "https://graph.facebook.com/me";

#[derive(Deserialize)]
struct GoogleUserInfo {
    id: String,
    email: Option<String>,
    given_name: Option<String>,
    family_name: Option<String>,
    picture: Option<String>,
}

#[derive(Deserialize)]
struct FacebookProfile {
    id: String,
    email: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
    picture: Option<FacebookPicture>,
}

#[derive(Deserialize)]
struct FacebookPicture {
    data: FacebookPictureData,
}

#[derive(Deserialize)]
struct FacebookPictureData {
    url: String,
}

impl OAuthService<'_> {
    /// Completes the OAuth flow after the provider redirects back.
    ///
    /// Exchanges the authorization code for an access token, fetches the
    /// provider profile, and resolves it to a local account.
    ///
    /// # Arguments
    /// - `code` - Authorization code from the callback query string
    ///
    /// # Returns
    /// - `Ok(Model)` - The signed-in (possibly newly created) account
    /// - `Err(AppError)` - Exchange, profile fetch, or account lookup failed
    pub async fn handle_callback(&self, code: String) -> Result<entity::user::Model, AppError> {
        let token = self
            .oauth_client
            .exchange_code(AuthorizationCode::new(code))
            .request_async(self.http_client)
            .await
            .map_err(|err| {
                AppError::InternalError(format!("OAuth code exchange failed: {}", err))
            })?;

        let profile = self.fetch_profile(token.access_token().secret()).await?;

        self.resolve_user(profile).await
    }

    /// Fetches the user's profile from the provider API.
    async fn fetch_profile(&self, access_token: &str) -> Result<OAuthProfile, AppError> {
        match self.provider {
            Provider::Google => {
                let info: GoogleUserInfo = self
                    .http_client
                    .get(GOOGLE_USERINFO_URL)
                    .bearer_auth(access_token)
                    .send()
                    .await?
                    .error_for_status()?
                    .json()
                    .await?;

                Ok(OAuthProfile {
                    provider: Provider::Google,
                    provider_id: info.id,
                    email: info.email,
                    first_name: info.given_name.unwrap_or_default(),
                    last_name: info.family_name.unwrap_or_default(),
                    avatar: info.picture,
                })
            }
            Provider::Facebook => {
                let profile: FacebookProfile = self
                    .http_client
                    .get(FACEBOOK_PROFILE_URL)
                    .query(&[
                        ("fields", "id,email,first_name,last_name,picture.type(large)"),
                        ("access_token", access_token),
                    ])
                    .send()
                    .await?
                    .error_for_status()?
                    .json()
                    .await?;

                Ok(OAuthProfile {
                    provider: Provider::Facebook,
                    provider_id: profile.id,
                    email: profile.email,
                    first_name: profile.first_name.unwrap_or_default(),
                    last_name: profile.last_name.unwrap_or_default(),
                    avatar: profile.picture.map(|p| p.data.url),
                })
            }
        }
    }

    /// Resolves a provider profile to a local account.
    ///
    /// Resolution order: an account already linked to this provider id, then
    /// an account with the same email (which gets the provider linked), then
    /// a freshly created account.
    async fn resolve_user(&self, profile: OAuthProfile) -> Result<entity::user::Model, AppError> {
        let user_repository = UserRepository::new(self.db);

        if let Some(user) = user_repository
            .find_by_provider(profile.provider, &profile.provider_id)
            .await?
        {
            user_repository.touch_last_login(user.id).await?;
            return Ok(user);
        }

        let email = profile
            .email
            .as_deref()
            .map(|e| e.trim().to_lowercase())
            .filter(|e| !e.is_empty());

        if let Some(email) = &email {
            if let Some(user) = user_repository.find_by_email(email).await? {
                let linked = user_repository
                    .link_provider(
                        user,
                        profile.provider,
                        &profile.provider_id,
                        profile.avatar.as_deref(),
                    )
                    .await?;
                user_repository.touch_last_login(linked.id).await?;
                return Ok(linked);
            }
        }

        let username = derive_username(&user_repository, email.as_deref(), &profile.provider_id)
            .await?;
        let has_email = email.is_some();
        // The email column is unique and non-null, so accounts arriving
        // without one get a placeholder under the reserved .invalid TLD.
        let email = email.unwrap_or_else(|| {
            format!(
                "{}_{}@no-email.invalid",
                profile.provider.as_str(),
                profile.provider_id
            )
        });

        let (google_id, facebook_id) = match profile.provider {
            Provider::Google => (Some(profile.provider_id.clone()), None),
            Provider::Facebook => (None, Some(profile.provider_id.clone())),
        };

        let user = user_repository
            .create(CreateUserParams {
                username,
                email,
                password_hash: None,
                first_name: profile.first_name,
                last_name: profile.last_name,
                avatar: profile.avatar.unwrap_or_default(),
                google_id,
                facebook_id,
                is_email_verified: has_email,
            })
            .await?;

        Ok(user)
    }
}

/// Derives a unique username from the email local part.
///
/// Accounts without an email get `user_<provider id>`; a taken local part
/// gets a millisecond timestamp suffix.
async fn derive_username(
    user_repository: &UserRepository<'_>,
    email: Option<&str>,
    provider_id: &str,
) -> Result<String, AppError> {
    let Some(email) = email else {
        return Ok(format!("user_{}", provider_id));
    };

    let base: String = email
        .split('@')
        .next()
        .unwrap_or_default()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect();
    let base = if base.is_empty() {
        "user".to_string()
    } else {
        base
    };

    if !user_repository.username_taken(&base).await? {
        return Ok(base);
    }

    Ok(format!("{}_{}", base, Utc::now().timestamp_millis()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use entity::prelude::*;
    use test_utils::{builder::TestBuilder, error::TestError, factory::user::UserFactory};

    fn google_profile(provider_id: &str, email: Option<&str>) -> OAuthProfile {
        OAuthProfile {
            provider: Provider::Google,
            provider_id: provider_id.to_string(),
            email: email.map(str::to_string),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            avatar: Some("https://example.com/ada.png".to_string()),
        }
    }

    async fn service_parts() -> Result<
        (
            test_utils::context::TestContext,
            reqwest::Client,
            crate::server::state::OAuth2Client,
        ),
        TestError,
    > {
        use crate::server::{config::OAuthProviderConfig, startup::setup_oauth_client};

        let test = TestBuilder::new().with_table(User).build().await?;
        let http_client = reqwest::Client::new();
        let oauth_client = setup_oauth_client(&OAuthProviderConfig {
            client_id: "client-id".to_string(),
            client_secret: "client-secret".to_string(),
            redirect_url: "https://localhost/api/auth/google/callback".to_string(),
            auth_url: "https://accounts.google.com/o/oauth2/v2/auth".to_string(),
            token_url: "https://oauth2.googleapis.com/token".to_string(),
        })
        .unwrap();

        Ok((test, http_client, oauth_client))
    }

    #[tokio::test]
    async fn creates_account_for_new_profile() -> Result<(), TestError> {
        let (test, http_client, oauth_client) = service_parts().await?;
        let db = test.db.as_ref().unwrap();
        let service = OAuthService::new(db, &http_client, &oauth_client, Provider::Google);

        let user = service
            .resolve_user(google_profile("g-123", Some("ada@example.com")))
            .await
            .unwrap();

        assert_eq!(user.username, "ada");
        assert_eq!(user.email, "ada@example.com");
        assert_eq!(user.google_id.as_deref(), Some("g-123"));
        assert!(user.password_hash.is_none());
        assert!(user.is_email_verified);

        Ok(())
    }

    #[tokio::test]
    async fn links_provider_to_existing_email_account() -> Result<(), TestError> {
        let (test, http_client, oauth_client) = service_parts().await?;
        let db = test.db.as_ref().unwrap();
        let service = OAuthService::new(db, &http_client, &oauth_client, Provider::Google);

        let existing = UserFactory::new(db)
            .email("ada@example.com")
            .build()
            .await?;

        let user = service
            .resolve_user(google_profile("g-456", Some("ada@example.com")))
            .await
            .unwrap();

        assert_eq!(user.id, existing.id);
        assert_eq!(user.google_id.as_deref(), Some("g-456"));
        assert!(user.is_email_verified);

        Ok(())
    }

    #[tokio::test]
    async fn returns_already_linked_account() -> Result<(), TestError> {
        let (test, http_client, oauth_client) = service_parts().await?;
        let db = test.db.as_ref().unwrap();
        let service = OAuthService::new(db, &http_client, &oauth_client, Provider::Google);

        let first = service
            .resolve_user(google_profile("g-789", Some("ada@example.com")))
            .await
            .unwrap();
        let second = service
            .resolve_user(google_profile("g-789", Some("ada@example.com")))
            .await
            .unwrap();

        assert_eq!(first.id, second.id);

        Ok(())
    }

    #[tokio::test]
    async fn suffixes_username_when_local_part_is_taken() -> Result<(), TestError> {
        let (test, http_client, oauth_client) = service_parts().await?;
        let db = test.db.as_ref().unwrap();
        let service = OAuthService::new(db, &http_client, &oauth_client, Provider::Google);

        UserFactory::new(db)
            .username("ada")
            .email("other@example.com")
            .build()
            .await?;

        let user = service
            .resolve_user(google_profile("g-321", Some("ada@example.com")))
            .await
            .unwrap();

        assert_ne!(user.username, "ada");
        assert!(user.username.starts_with("ada_"));

        Ok(())
    }

    #[tokio::test]
    async fn handles_profile_without_email() -> Result<(), TestError> {
        let (test, http_client, oauth_client) = service_parts().await?;
        let db = test.db.as_ref().unwrap();
        let service = OAuthService::new(db, &http_client, &oauth_client, Provider::Facebook);

        let mut profile = google_profile("fb-1", None);
        profile.provider = Provider::Facebook;

        let user = service.resolve_user(profile).await.unwrap();

        assert_eq!(user.username, "user_fb-1");
        assert_eq!(user.facebook_id.as_deref(), Some("fb-1"));
        assert!(!user.is_email_verified);

        Ok(())
    }
}
