use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{BlogCategory, BlogStatus};
use serde::{Deserialize, Serialize};

use crate::model::{
    api::{BlogPaginationDto, PaginationDto},
    blog::BlogListItemDto,
    user::UserSummaryDto,
};

/// Compact blog row for admin dashboards and recent-activity lists.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdminBlogDto {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub author: UserSummaryDto,
    pub category: BlogCategory,
    pub status: BlogStatus,
    pub views: i64,
    pub created_at: DateTime<Utc>,
}

/// Compact user row for admin dashboards and recent-activity lists.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdminUserDto {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub avatar: String,
    pub created_at: DateTime<Utc>,
}

/// Comment row for admin listings, with the blog it belongs to.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdminCommentDto {
    pub id: i32,
    pub content: String,
    pub author: UserSummaryDto,
    pub blog_id: i32,
    pub blog_title: String,
    pub blog_slug: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Dashboard totals and recent activity.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStatsDto {
    pub total_users: u64,
    pub total_blogs: u64,
    pub total_comments: u64,
    pub published_blogs: u64,
    pub draft_blogs: u64,
    pub recent_users: Vec<AdminUserDto>,
    pub recent_blogs: Vec<AdminBlogDto>,
}

/// Response for the admin dashboard endpoint.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponseDto {
    pub success: bool,
    pub stats: DashboardStatsDto,
}

/// Rows of a detailed stats listing, shaped by the requested type.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum DetailedStatsDataDto {
    Users(Vec<AdminUserDto>),
    Blogs(Vec<AdminBlogDto>),
    Comments(Vec<AdminCommentDto>),
}

/// Response for the detailed stats endpoint.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedStatsResponseDto {
    pub success: bool,
    #[serde(rename = "type")]
    pub stats_type: String,
    pub data: DetailedStatsDataDto,
    pub pagination: PaginationDto,
}

/// Response for the admin blog listing.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminBlogListResponseDto {
    pub success: bool,
    pub blogs: Vec<BlogListItemDto>,
    pub pagination: BlogPaginationDto,
}
