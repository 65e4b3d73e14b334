//! Account registration and password login.

pub mod token;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{follow::FollowRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParams, RegisterParams, UserWithFollows},
    service::auth::token::TokenService,
    util::password::{hash_password, verify_password},
};

const USERNAME_MIN: usize = 3;
const USERNAME_MAX: usize = 20;
const PASSWORD_MIN: usize = 6;
const NAME_MAX: usize = 50;

/// Service handling local-password authentication.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService) -> Self {
        Self { db, tokens }
    }

    /// Registers a new account and issues a token for it.
    ///
    /// Emails are stored lowercase. Duplicate email and username checks run
    /// before the insert so the caller gets a specific message.
    ///
    /// # Arguments
    /// - `params` - Registration fields from the request
    ///
    /// # Returns
    /// - `Ok((token, user))` - Access token and the created account
    /// - `Err(AppError::BadRequest)` - Validation failure or duplicate identity
    pub async fn register(
        &self,
        params: RegisterParams,
    ) -> Result<(String, entity::user::Model), AppError> {
        validate_register(&params)?;

        let user_repository = UserRepository::new(self.db);
        let email = params.email.trim().to_lowercase();

        if user_repository.email_taken(&email).await? {
            return Err(AppError::BadRequest("Email already registered".to_string()));
        }
        if user_repository.username_taken(&params.username).await? {
            return Err(AppError::BadRequest("Username already taken".to_string()));
        }

        let password_hash = hash_password(&params.password)?;

        let user = user_repository
            .create(CreateUserParams {
                username: params.username,
                email,
                password_hash: Some(password_hash),
                first_name: params.first_name,
                last_name: params.last_name,
                avatar: String::new(),
                google_id: None,
                facebook_id: None,
                is_email_verified: false,
            })
            .await?;

        let token = self.tokens.issue(user.id)?;

        Ok((token, user))
    }

    /// Authenticates an email and password pair.
    ///
    /// Every failure collapses to `InvalidCredentials` so responses do not
    /// reveal whether the email exists, whether the account is deactivated,
    /// or whether it is OAuth-only.
    ///
    /// # Arguments
    /// - `email` - Login email (matched case-insensitively)
    /// - `password` - Plaintext password to verify
    ///
    /// # Returns
    /// - `Ok((token, user))` - Access token and the authenticated account
    /// - `Err(AppError::AuthErr)` - Credentials rejected
    pub async fn login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<(String, entity::user::Model), AppError> {
        let user_repository = UserRepository::new(self.db);

        let user = user_repository
            .find_by_email(&email.trim().to_lowercase())
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !user.is_active {
            return Err(AuthError::InvalidCredentials.into());
        }

        let Some(hash) = &user.password_hash else {
            return Err(AuthError::InvalidCredentials.into());
        };
        if !verify_password(password, hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        user_repository.touch_last_login(user.id).await?;
        let token = self.tokens.issue(user.id)?;

        Ok((token, user))
    }

    /// Assembles the current-user payload with follow lists.
    pub async fn me(&self, user: entity::user::Model) -> Result<UserWithFollows, AppError> {
        let follow_repository = FollowRepository::new(self.db);

        let followers = follow_repository.followers(user.id).await?;
        let following = follow_repository.following(user.id).await?;

        Ok(UserWithFollows {
            user,
            followers,
            following,
        })
    }

    /// Issues a fresh token for an already-authenticated user.
    pub fn refresh(&self, user_id: i32) -> Result<String, AppError> {
        self.tokens.issue(user_id)
    }
}

/// Validates registration fields, returning the first failure.
fn validate_register(params: &RegisterParams) -> Result<(), AppError> {
    let username = params.username.trim();
    if username.len() < USERNAME_MIN || username.len() > USERNAME_MAX {
        return Err(AppError::BadRequest(
            "Username must be between 3 and 20 characters".to_string(),
        ));
    }
    if !username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return Err(AppError::BadRequest(
            "Username can only contain letters, numbers, and underscores".to_string(),
        ));
    }

    let email = params.email.trim();
    if email.is_empty() || !email.contains('@') || !email.contains('.') {
        return Err(AppError::BadRequest(
            "Please provide a valid email".to_string(),
        ));
    }

    if params.password.len() < PASSWORD_MIN {
        return Err(AppError::BadRequest(
            "Password must be at least 6 characters".to_string(),
        ));
    }

    for name in [&params.first_name, &params.last_name] {
        if name.trim().is_empty() || name.len() > NAME_MAX {
            return Err(AppError::BadRequest(
                "First and last name are required and must be 50 characters or less".to_string(),
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use entity::prelude::*;
    use test_utils::{builder::TestBuilder, error::TestError, factory::create_user};

    fn register_params() -> RegisterParams {
        RegisterParams {
            username: "alice".to_string(),
            email: "Alice@Example.com".to_string(),
            password: "hunter22".to_string(),
            first_name: "Alice".to_string(),
            last_name: "Example".to_string(),
        }
    }

    fn tokens() -> TokenService {
        TokenService::new("test-secret", Duration::days(7))
    }

    #[tokio::test]
    async fn register_then_login_roundtrip() -> Result<(), TestError> {
        let test = TestBuilder::new().with_table(User).build().await?;
        let db = test.db.as_ref().unwrap();
        let tokens = tokens();
        let service = AuthService::new(db, &tokens);

        let (token, user) = service.register(register_params()).await.unwrap();

        assert!(!token.is_empty());
        assert_eq!(user.email, "alice@example.com");

        let (_, logged_in) = service
            .login("alice@example.com", "hunter22")
            .await
            .unwrap();
        assert_eq!(logged_in.id, user.id);

        Ok(())
    }

    #[tokio::test]
    async fn register_rejects_duplicate_email() -> Result<(), TestError> {
        let test = TestBuilder::new().with_table(User).build().await?;
        let db = test.db.as_ref().unwrap();
        let tokens = tokens();
        let service = AuthService::new(db, &tokens);

        service.register(register_params()).await.unwrap();

        let mut second = register_params();
        second.username = "alice2".to_string();
        let result = service.register(second).await;

        assert!(
            matches!(result, Err(AppError::BadRequest(msg)) if msg == "Email already registered")
        );

        Ok(())
    }

    #[tokio::test]
    async fn register_rejects_duplicate_username() -> Result<(), TestError> {
        let test = TestBuilder::new().with_table(User).build().await?;
        let db = test.db.as_ref().unwrap();
        let tokens = tokens();
        let service = AuthService::new(db, &tokens);

        service.register(register_params()).await.unwrap();

        let mut second = register_params();
        second.email = "other@example.com".to_string();
        let result = service.register(second).await;

        assert!(matches!(result, Err(AppError::BadRequest(msg)) if msg == "Username already taken"));

        Ok(())
    }

    #[tokio::test]
    async fn register_rejects_short_password() -> Result<(), TestError> {
        let test = TestBuilder::new().with_table(User).build().await?;
        let db = test.db.as_ref().unwrap();
        let tokens = tokens();
        let service = AuthService::new(db, &tokens);

        let mut params = register_params();
        params.password = "abc".to_string();
        let result = service.register(params).await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));

        Ok(())
    }

    #[tokio::test]
    async fn register_rejects_invalid_username_characters() -> Result<(), TestError> {
        let test = TestBuilder::new().with_table(User).build().await?;
        let db = test.db.as_ref().unwrap();
        let tokens = tokens();
        let service = AuthService::new(db, &tokens);

        let mut params = register_params();
        params.username = "alice smith!".to_string();
        let result = service.register(params).await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));

        Ok(())
    }

    #[tokio::test]
    async fn login_rejects_wrong_password() -> Result<(), TestError> {
        let test = TestBuilder::new().with_table(User).build().await?;
        let db = test.db.as_ref().unwrap();
        let tokens = tokens();
        let service = AuthService::new(db, &tokens);

        service.register(register_params()).await.unwrap();

        let result = service.login("alice@example.com", "wrong-password").await;

        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::InvalidCredentials))
        ));

        Ok(())
    }

    #[tokio::test]
    async fn login_rejects_unknown_email() -> Result<(), TestError> {
        let test = TestBuilder::new().with_table(User).build().await?;
        let db = test.db.as_ref().unwrap();
        let tokens = tokens();
        let service = AuthService::new(db, &tokens);

        let result = service.login("nobody@example.com", "whatever").await;

        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::InvalidCredentials))
        ));

        Ok(())
    }

    #[tokio::test]
    async fn login_rejects_oauth_only_account() -> Result<(), TestError> {
        let test = TestBuilder::new().with_table(User).build().await?;
        let db = test.db.as_ref().unwrap();
        let tokens = tokens();
        let service = AuthService::new(db, &tokens);

        let user = create_user(db).await?;

        let result = service.login(&user.email, "whatever").await;

        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::InvalidCredentials))
        ));

        Ok(())
    }
}
