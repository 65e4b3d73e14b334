use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::user::UserSummaryDto;

/// Comment representation with populated author and one level of replies.
///
/// Replies are only populated on top-level comments; nested replies always
/// carry an empty list.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    pub id: i32,
    pub content: String,
    pub author: UserSummaryDto,
    pub blog_id: i32,
    pub parent_id: Option<i32>,
    pub likes_count: u64,
    pub is_liked: bool,
    pub is_edited: bool,
    pub edited_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub replies: Vec<CommentDto>,
}

/// Response for the per-blog comment listing.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentListResponseDto {
    pub success: bool,
    pub comments: Vec<CommentDto>,
}

/// Response for comment create and update endpoints.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponseDto {
    pub success: bool,
    pub message: String,
    pub comment: CommentDto,
}

/// Response for the comment like toggle endpoint.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentLikeResponseDto {
    pub success: bool,
    pub message: String,
    pub is_liked: bool,
    pub likes_count: u64,
}
