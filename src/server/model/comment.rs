//! Comment domain models and parameters.

use crate::{model::comment::CommentDto, server::model::user::user_summary_dto};

/// Parameters for posting a comment or reply.
#[derive(Debug, Clone)]
pub struct CreateCommentParams {
    pub content: String,
    pub blog_id: i32,
    /// Present for replies; must reference a top-level comment on the same blog.
    pub parent_id: Option<i32>,
    pub author_id: i32,
}

/// Comment aggregate with author, like metadata, and one level of replies.
#[derive(Debug, Clone)]
pub struct CommentWithMeta {
    pub comment: entity::comment::Model,
    pub author: entity::user::Model,
    pub likes_count: u64,
    pub is_liked: bool,
    /// Populated only for top-level comments.
    pub replies: Vec<CommentWithMeta>,
}

impl CommentWithMeta {
    /// Converts the aggregate (and its replies) to the wire DTO.
    pub fn into_dto(self) -> CommentDto {
        CommentDto {
            id: self.comment.id,
            content: self.comment.content,
            author: user_summary_dto(&self.author),
            blog_id: self.comment.blog_id,
            parent_id: self.comment.parent_id,
            likes_count: self.likes_count,
            is_liked: self.is_liked,
            is_edited: self.comment.is_edited,
            edited_at: self.comment.edited_at,
            created_at: self.comment.created_at,
            replies: self
                .replies
                .into_iter()
                .map(CommentWithMeta::into_dto)
                .collect(),
        }
    }
}
