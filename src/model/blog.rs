use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{BlogCategory, BlogStatus};
use serde::{Deserialize, Serialize};

use crate::model::{
    api::BlogPaginationDto,
    comment::CommentDto,
    user::{SocialLinksDto, UserSummaryDto},
};

/// Author fields embedded in a blog detail response.
///
/// Extends the compact summary with bio and social links so the article page
/// can render an author card without a second request.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuthorProfileDto {
    pub id: i32,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub avatar: String,
    pub bio: String,
    pub social_links: SocialLinksDto,
}

/// Blog fields returned in listings (content omitted).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BlogListItemDto {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub featured_image: String,
    pub author: UserSummaryDto,
    pub category: BlogCategory,
    pub tags: Vec<String>,
    pub status: BlogStatus,
    pub is_published: bool,
    pub views: i64,
    pub read_time: i32,
    pub likes_count: u64,
    pub is_liked: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Full blog representation returned by detail endpoints.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BlogDto {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: String,
    pub featured_image: String,
    pub author: AuthorProfileDto,
    pub category: BlogCategory,
    pub tags: Vec<String>,
    pub status: BlogStatus,
    pub is_published: bool,
    pub views: i64,
    pub read_time: i32,
    pub likes_count: u64,
    pub is_liked: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Response for the published blog listing and per-author listings.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogListResponseDto {
    pub success: bool,
    pub blogs: Vec<BlogListItemDto>,
    pub pagination: BlogPaginationDto,
}

/// Response for the blog detail endpoint.
///
/// Comments are only populated for published posts.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogDetailResponseDto {
    pub success: bool,
    pub blog: BlogDto,
    pub comments: Vec<CommentDto>,
}

/// Response for blog create and update endpoints.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogResponseDto {
    pub success: bool,
    pub message: String,
    pub blog: BlogDto,
}

/// Response for the blog like toggle endpoint.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogLikeResponseDto {
    pub success: bool,
    pub message: String,
    pub is_liked: bool,
    pub likes_count: u64,
}
