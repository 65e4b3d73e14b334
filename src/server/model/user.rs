//! User domain models and parameters.
//!
//! Provides parameter types for registration, OAuth federation, and profile updates,
//! plus conversion helpers from user entities to the wire DTOs.

use crate::model::user::{PublicProfileDto, SocialLinksDto, UserDto, UserSummaryDto};

/// OAuth provider a federated account is linked through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Google,
    Facebook,
}

impl Provider {
    /// Lowercase provider name used in routes and log lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::Facebook => "facebook",
        }
    }
}

/// Profile fields fetched from an OAuth provider after token exchange.
///
/// Facebook accounts may lack an email when the user denies the email
/// permission, so the field is optional.
#[derive(Debug, Clone)]
pub struct OAuthProfile {
    pub provider: Provider,
    pub provider_id: String,
    pub email: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub avatar: Option<String>,
}

/// Parameters for registering a local-password account.
#[derive(Debug, Clone)]
pub struct RegisterParams {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

/// Parameters for inserting a user row.
///
/// `password_hash` is None for OAuth-only accounts.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub username: String,
    pub email: String,
    pub password_hash: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub avatar: String,
    pub google_id: Option<String>,
    pub facebook_id: Option<String>,
    pub is_email_verified: bool,
}

/// Parameters for updating profile fields.
///
/// `None` fields are left untouched. Social link fields treat an empty string
/// as clearing the link.
#[derive(Debug, Clone, Default)]
pub struct UpdateProfileParams {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub bio: Option<String>,
    pub website: Option<String>,
    pub twitter: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub avatar: Option<String>,
}

/// A user together with their follower and following lists.
#[derive(Debug, Clone)]
pub struct UserWithFollows {
    pub user: entity::user::Model,
    pub followers: Vec<entity::user::Model>,
    pub following: Vec<entity::user::Model>,
}

/// Aggregated publishing stats shown on a public profile.
#[derive(Debug, Clone, Copy)]
pub struct ProfileStats {
    pub total_blogs: u64,
    pub total_views: u64,
    pub total_likes: u64,
}

/// A public profile with follow lists, latest published blogs, and stats.
#[derive(Debug, Clone)]
pub struct PublicProfile {
    pub user: entity::user::Model,
    pub followers: Vec<entity::user::Model>,
    pub following: Vec<entity::user::Model>,
    pub blogs: Vec<crate::server::model::blog::BlogWithMeta>,
    pub stats: ProfileStats,
}

/// Filters for the admin user listing.
#[derive(Debug, Clone)]
pub struct AdminUserQuery {
    /// Case-insensitive substring over username, email, and names.
    pub search: Option<String>,
    pub role: Option<entity::sea_orm_active_enums::UserRole>,
    pub is_active: Option<bool>,
    /// One-indexed page number.
    pub page: u64,
    pub per_page: u64,
}

/// Parses a role value from a request body.
pub fn parse_role(value: &str) -> Option<entity::sea_orm_active_enums::UserRole> {
    use entity::sea_orm_active_enums::UserRole;

    match value.to_lowercase().as_str() {
        "user" => Some(UserRole::User),
        "admin" => Some(UserRole::Admin),
        "moderator" => Some(UserRole::Moderator),
        _ => None,
    }
}

/// Builds the social links DTO from a user entity.
pub fn social_links_dto(user: &entity::user::Model) -> SocialLinksDto {
    SocialLinksDto {
        website: user.website.clone(),
        twitter: user.twitter.clone(),
        linkedin: user.linkedin.clone(),
        github: user.github.clone(),
    }
}

/// Converts a user entity to the full user DTO (owner/admin view).
pub fn user_dto(user: &entity::user::Model) -> UserDto {
    UserDto {
        id: user.id,
        username: user.username.clone(),
        email: user.email.clone(),
        first_name: user.first_name.clone(),
        last_name: user.last_name.clone(),
        avatar: user.avatar.clone(),
        bio: user.bio.clone(),
        role: user.role.clone(),
        is_active: user.is_active,
        is_email_verified: user.is_email_verified,
        social_links: social_links_dto(user),
        last_login: user.last_login,
        created_at: user.created_at,
    }
}

/// Converts a user entity to the compact summary DTO.
pub fn user_summary_dto(user: &entity::user::Model) -> UserSummaryDto {
    UserSummaryDto {
        id: user.id,
        username: user.username.clone(),
        first_name: user.first_name.clone(),
        last_name: user.last_name.clone(),
        avatar: user.avatar.clone(),
    }
}

/// Converts a user entity to the public profile DTO.
pub fn public_profile_dto(user: &entity::user::Model) -> PublicProfileDto {
    PublicProfileDto {
        id: user.id,
        username: user.username.clone(),
        first_name: user.first_name.clone(),
        last_name: user.last_name.clone(),
        avatar: user.avatar.clone(),
        bio: user.bio.clone(),
        social_links: social_links_dto(user),
        created_at: user.created_at,
    }
}
