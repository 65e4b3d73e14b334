//! Comment thread business logic.
//!
//! Handles posting, editing, soft deleting, and liking comments, plus
//! assembling the one-level reply threads shown under a blog.

use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{blog::BlogRepository, comment::CommentRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::comment::{CommentWithMeta, CreateCommentParams},
};

const COMMENT_MAX_LEN: usize = 1000;

/// Service handling comment operations.
pub struct CommentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Assembles the comment thread for a blog.
    ///
    /// Top-level comments come newest first, each carrying its replies oldest
    /// first. Soft-deleted comments are excluded entirely.
    ///
    /// # Arguments
    /// - `blog_id` - The blog whose thread to assemble
    /// - `viewer_id` - Requesting user for is_liked flags, if authenticated
    ///
    /// # Returns
    /// - `Ok(Vec<CommentWithMeta>)` - Thread with authors and like metadata
    /// - `Err(AppError)` - Database error during assembly
    pub async fn thread_for_blog(
        &self,
        blog_id: i32,
        viewer_id: Option<i32>,
    ) -> Result<Vec<CommentWithMeta>, AppError> {
        let comment_repository = CommentRepository::new(self.db);
        let user_repository = UserRepository::new(self.db);

        let top_level = comment_repository.top_level_for_blog(blog_id).await?;
        let parent_ids: Vec<i32> = top_level.iter().map(|c| c.id).collect();
        let replies = comment_repository.replies_for(&parent_ids).await?;

        let mut all_ids = parent_ids;
        all_ids.extend(replies.iter().map(|r| r.id));

        let mut author_ids: Vec<i32> = top_level
            .iter()
            .chain(replies.iter())
            .map(|c| c.author_id)
            .collect();
        author_ids.sort_unstable();
        author_ids.dedup();

        let authors: HashMap<i32, entity::user::Model> = user_repository
            .find_by_ids(&author_ids)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        let likes = comment_repository.likes_counts(&all_ids).await?;
        let liked = match viewer_id {
            Some(user_id) => comment_repository.liked_comment_ids(&all_ids, user_id).await?,
            None => Default::default(),
        };

        let mut replies_by_parent: HashMap<i32, Vec<CommentWithMeta>> = HashMap::new();
        for reply in replies {
            let Some(author) = authors.get(&reply.author_id).cloned() else {
                continue;
            };
            let Some(parent_id) = reply.parent_id else {
                continue;
            };

            replies_by_parent
                .entry(parent_id)
                .or_default()
                .push(CommentWithMeta {
                    likes_count: likes.get(&reply.id).copied().unwrap_or(0),
                    is_liked: liked.contains(&reply.id),
                    author,
                    comment: reply,
                    replies: Vec::new(),
                });
        }

        let mut thread = Vec::with_capacity(top_level.len());
        for comment in top_level {
            let Some(author) = authors.get(&comment.author_id).cloned() else {
                continue;
            };

            thread.push(CommentWithMeta {
                likes_count: likes.get(&comment.id).copied().unwrap_or(0),
                is_liked: liked.contains(&comment.id),
                replies: replies_by_parent.remove(&comment.id).unwrap_or_default(),
                author,
                comment,
            });
        }

        Ok(thread)
    }

    /// Posts a comment or reply.
    ///
    /// Replies must reference a top-level comment on the same blog.
    ///
    /// # Arguments
    /// - `params` - Comment fields from the create request
    ///
    /// # Returns
    /// - `Ok(CommentWithMeta)` - The created comment with its author
    /// - `Err(AppError::NotFound)` - Blog or parent comment does not exist
    /// - `Err(AppError::BadRequest)` - Empty or oversized content, or invalid parent
    pub async fn create(&self, params: CreateCommentParams) -> Result<CommentWithMeta, AppError> {
        validate_content(&params.content)?;

        let comment_repository = CommentRepository::new(self.db);
        let user_repository = UserRepository::new(self.db);

        if BlogRepository::new(self.db)
            .find_by_id(params.blog_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Blog not found".to_string()));
        }

        if let Some(parent_id) = params.parent_id {
            let parent = comment_repository
                .find_by_id(parent_id)
                .await?
                .filter(|p| p.is_active)
                .ok_or_else(|| AppError::NotFound("Comment not found".to_string()))?;

            if parent.blog_id != params.blog_id {
                return Err(AppError::BadRequest(
                    "Parent comment belongs to a different blog".to_string(),
                ));
            }
            if parent.parent_id.is_some() {
                return Err(AppError::BadRequest(
                    "Replies can only be added to top-level comments".to_string(),
                ));
            }
        }

        let author_id = params.author_id;
        let comment = comment_repository.create(params).await?;

        let author = user_repository
            .find_by_id(author_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        Ok(CommentWithMeta {
            comment,
            author,
            likes_count: 0,
            is_liked: false,
            replies: Vec::new(),
        })
    }

    /// Edits a comment's content.
    ///
    /// Only the author may edit; the comment is marked edited with a
    /// timestamp.
    ///
    /// # Arguments
    /// - `id` - The comment to edit
    /// - `user` - The acting user
    /// - `content` - New comment body
    ///
    /// # Returns
    /// - `Ok(CommentWithMeta)` - The updated comment
    /// - `Err(AppError::NotFound)` - Comment missing or soft-deleted
    /// - `Err(AppError::AuthErr)` - Acting user is not the author
    pub async fn update(
        &self,
        id: i32,
        user: &entity::user::Model,
        content: String,
    ) -> Result<CommentWithMeta, AppError> {
        validate_content(&content)?;

        let comment_repository = CommentRepository::new(self.db);

        let comment = comment_repository
            .find_by_id(id)
            .await?
            .filter(|c| c.is_active)
            .ok_or_else(|| AppError::NotFound("Comment not found".to_string()))?;

        if comment.author_id != user.id {
            return Err(AuthError::AccessDenied(user.id, "edit comment".to_string()).into());
        }

        let updated = comment_repository.update_content(comment, content).await?;
        let likes = comment_repository.likes_counts(&[updated.id]).await?;

        Ok(CommentWithMeta {
            likes_count: likes.get(&updated.id).copied().unwrap_or(0),
            is_liked: false,
            comment: updated,
            author: user.clone(),
            replies: Vec::new(),
        })
    }

    /// Soft deletes a comment.
    ///
    /// The author or an admin may delete. The row is retained so replies
    /// keep their anchor; it simply disappears from threads.
    pub async fn delete(&self, id: i32, user: &entity::user::Model) -> Result<(), AppError> {
        let comment_repository = CommentRepository::new(self.db);

        let comment = comment_repository
            .find_by_id(id)
            .await?
            .filter(|c| c.is_active)
            .ok_or_else(|| AppError::NotFound("Comment not found".to_string()))?;

        let is_admin = user.role == entity::sea_orm_active_enums::UserRole::Admin;
        if comment.author_id != user.id && !is_admin {
            return Err(AuthError::AccessDenied(user.id, "delete comment".to_string()).into());
        }

        comment_repository.soft_delete(comment).await?;

        Ok(())
    }

    /// Toggles the acting user's like on a comment.
    ///
    /// # Returns
    /// - `Ok((is_liked, likes_count))` - New like state and total
    /// - `Err(AppError::NotFound)` - Comment missing or soft-deleted
    pub async fn toggle_like(&self, id: i32, user_id: i32) -> Result<(bool, u64), AppError> {
        let comment_repository = CommentRepository::new(self.db);

        let comment = comment_repository
            .find_by_id(id)
            .await?
            .filter(|c| c.is_active)
            .ok_or_else(|| AppError::NotFound("Comment not found".to_string()))?;

        let is_liked = comment_repository.toggle_like(comment.id, user_id).await?;
        let likes = comment_repository.likes_counts(&[comment.id]).await?;

        Ok((is_liked, likes.get(&comment.id).copied().unwrap_or(0)))
    }
}

fn validate_content(content: &str) -> Result<(), AppError> {
    if content.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Comment content is required".to_string(),
        ));
    }
    if content.len() > COMMENT_MAX_LEN {
        return Err(AppError::BadRequest(
            "Comment must be 1000 characters or less".to_string(),
        ));
    }
    Ok(())
}
