//! Comment factory for creating test comment entities.
//!
//! This module provides factory methods for creating comment entities attached
//! to a blog and author, including one-level reply threads via `parent_id`.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test comments with customizable fields.
///
/// Comments require both a blog and an author. Replies are created by setting
/// the parent comment id.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::comment::CommentFactory;
///
/// let reply = CommentFactory::new(&db, blog.id, user.id)
///     .parent_id(comment.id)
///     .content("Agreed!")
///     .build()
///     .await?;
/// ```
pub struct CommentFactory<'a> {
    db: &'a DatabaseConnection,
    content: String,
    author_id: i32,
    blog_id: i32,
    parent_id: Option<i32>,
    is_active: bool,
}

impl<'a> CommentFactory<'a> {
    /// Creates a new CommentFactory with default values.
    ///
    /// Defaults:
    /// - content: `"Test comment {id}"` where id is auto-incremented
    /// - top-level (no parent), active, not edited
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `blog_id` - Blog the comment belongs to
    /// - `author_id` - User id of the comment author
    ///
    /// # Returns
    /// - `CommentFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, blog_id: i32, author_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            content: format!("Test comment {}", id),
            author_id,
            blog_id,
            parent_id: None,
            is_active: true,
        }
    }

    /// Sets the content for the comment.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Sets the parent comment id, making this comment a reply.
    pub fn parent_id(mut self, parent_id: i32) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    /// Sets whether the comment is active (not soft deleted).
    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Builds and inserts the comment entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::comment::Model)` - Created comment entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::comment::Model, DbErr> {
        let now = Utc::now();
        entity::comment::ActiveModel {
            content: ActiveValue::Set(self.content),
            author_id: ActiveValue::Set(self.author_id),
            blog_id: ActiveValue::Set(self.blog_id),
            parent_id: ActiveValue::Set(self.parent_id),
            is_edited: ActiveValue::Set(false),
            edited_at: ActiveValue::Set(None),
            is_active: ActiveValue::Set(self.is_active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a top-level comment with default values.
///
/// Shorthand for `CommentFactory::new(db, blog_id, author_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `blog_id` - Blog the comment belongs to
/// - `author_id` - User id of the comment author
///
/// # Returns
/// - `Ok(entity::comment::Model)` - Created comment entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_comment(
    db: &DatabaseConnection,
    blog_id: i32,
    author_id: i32,
) -> Result<entity::comment::Model, DbErr> {
    CommentFactory::new(db, blog_id, author_id).build().await
}

/// Creates a reply to an existing comment.
///
/// Shorthand for `CommentFactory::new(db, blog_id, author_id).parent_id(parent_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `blog_id` - Blog the comment belongs to
/// - `author_id` - User id of the comment author
/// - `parent_id` - Comment being replied to
///
/// # Returns
/// - `Ok(entity::comment::Model)` - Created reply entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_reply(
    db: &DatabaseConnection,
    blog_id: i32,
    author_id: i32,
    parent_id: i32,
) -> Result<entity::comment::Model, DbErr> {
    CommentFactory::new(db, blog_id, author_id)
        .parent_id(parent_id)
        .build()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use crate::factory::blog::create_published_blog;
    use crate::factory::user::create_user;

    #[tokio::test]
    async fn creates_top_level_comment() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_comment_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let user = create_user(db).await?;
        let blog = create_published_blog(db, user.id).await?;
        let comment = create_comment(db, blog.id, user.id).await?;

        assert_eq!(comment.blog_id, blog.id);
        assert_eq!(comment.author_id, user.id);
        assert!(comment.parent_id.is_none());
        assert!(comment.is_active);

        Ok(())
    }

    #[tokio::test]
    async fn creates_reply_with_parent() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_comment_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let user = create_user(db).await?;
        let blog = create_published_blog(db, user.id).await?;
        let comment = create_comment(db, blog.id, user.id).await?;
        let reply = create_reply(db, blog.id, user.id, comment.id).await?;

        assert_eq!(reply.parent_id, Some(comment.id));

        Ok(())
    }
}
