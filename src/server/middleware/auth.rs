use axum::http::{header, HeaderMap};
use entity::sea_orm_active_enums::UserRole;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    service::auth::token::TokenService,
};

/// Guard resolving the bearer token on a request to a user account.
///
/// Controllers construct one per request from state and headers, then call
/// `require`, `optional`, or `require_role` depending on the route's access
/// rule.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        tokens: &'a TokenService,
        headers: &'a HeaderMap,
    ) -> Self {
        Self {
            db,
            tokens,
            headers,
        }
    }

    /// Requires a valid token belonging to an active account.
    ///
    /// # Returns
    /// - `Ok(Model)` - The authenticated user
    /// - `Err(AppError::AuthErr)` - Missing/invalid/expired token, unknown
    ///   user, or deactivated account
    pub async fn require(&self) -> Result<entity::user::Model, AppError> {
        let token = self.bearer_token().ok_or(AuthError::MissingToken)?;
        let user_id = self.tokens.verify(token)?;

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        if !user.is_active {
            return Err(AuthError::AccountDeactivated(user_id).into());
        }

        Ok(user)
    }

    /// Resolves the user if a valid token is present.
    ///
    /// Authentication failures yield `None` so public routes can serve
    /// anonymous readers; database errors still propagate.
    pub async fn optional(&self) -> Result<Option<entity::user::Model>, AppError> {
        let Some(token) = self.bearer_token() else {
            return Ok(None);
        };
        let Ok(user_id) = self.tokens.verify(token) else {
            return Ok(None);
        };

        let user = UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .filter(|u| u.is_active);

        Ok(user)
    }

    /// Requires an authenticated user holding one of the given roles.
    ///
    /// # Arguments
    /// - `roles` - Roles permitted on this route
    ///
    /// # Returns
    /// - `Ok(Model)` - The authenticated user
    /// - `Err(AppError::AuthErr)` - Not authenticated, or role not permitted
    pub async fn require_role(&self, roles: &[UserRole]) -> Result<entity::user::Model, AppError> {
        let user = self.require().await?;

        if !roles.contains(&user.role) {
            return Err(AuthError::AccessDenied(
                user.id,
                format!("requires one of roles {:?}", roles),
            )
            .into());
        }

        Ok(user)
    }

    /// Extracts the bearer token from the Authorization header.
    fn bearer_token(&self) -> Option<&str> {
        self.headers
            .get(header::AUTHORIZATION)?
            .to_str()
            .ok()?
            .strip_prefix("Bearer ")
    }
}
