use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::UserRole;
use serde::{Deserialize, Serialize};

use crate::model::{api::UserPaginationDto, blog::BlogListItemDto};

/// Social profile links attached to a user account.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SocialLinksDto {
    pub website: Option<String>,
    pub twitter: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
}

/// Full user representation returned to the account owner and admins.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub avatar: String,
    pub bio: String,
    pub role: UserRole,
    pub is_active: bool,
    pub is_email_verified: bool,
    pub social_links: SocialLinksDto,
    pub last_login: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Compact user representation embedded in other resources.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserSummaryDto {
    pub id: i32,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub avatar: String,
}

/// Response for register, login and token refresh.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponseDto {
    pub success: bool,
    pub message: String,
    pub token: String,
    pub user: UserDto,
}

/// Response for the current-user endpoint, with follow summaries populated.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeResponseDto {
    pub success: bool,
    pub user: UserDto,
    pub followers: Vec<UserSummaryDto>,
    pub following: Vec<UserSummaryDto>,
    pub followers_count: u64,
    pub following_count: u64,
}

/// Aggregate publishing stats shown on a public profile.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileStatsDto {
    pub total_blogs: u64,
    pub total_views: u64,
    pub total_likes: u64,
}

/// Public profile fields exposed for any user.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PublicProfileDto {
    pub id: i32,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub avatar: String,
    pub bio: String,
    pub social_links: SocialLinksDto,
    pub created_at: DateTime<Utc>,
}

/// Response for the public profile endpoint.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponseDto {
    pub success: bool,
    pub user: PublicProfileDto,
    pub followers: Vec<UserSummaryDto>,
    pub following: Vec<UserSummaryDto>,
    pub blogs: Vec<BlogListItemDto>,
    pub stats: ProfileStatsDto,
}

/// Response for the profile update endpoint.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileResponseDto {
    pub success: bool,
    pub message: String,
    pub user: UserDto,
}

/// Response for the follow toggle endpoint.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowResponseDto {
    pub success: bool,
    pub message: String,
    pub is_following: bool,
    pub followers_count: u64,
}

/// Response for follower and following listings.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserListResponseDto {
    pub success: bool,
    pub users: Vec<UserSummaryDto>,
}

/// Response for the admin user listing.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedUsersDto {
    pub success: bool,
    pub users: Vec<UserDto>,
    pub pagination: UserPaginationDto,
}
