//! Blog factory for creating test blog entities.
//!
//! This module provides factory methods for creating blog entities with sensible
//! defaults. Blogs require an author, so the author's user id must be supplied.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::sea_orm_active_enums::{BlogCategory, BlogStatus};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test blogs with customizable fields.
///
/// Provides a builder pattern for creating blog entities with default values
/// that can be overridden as needed for specific test scenarios. Blogs default
/// to draft status with no publication timestamp.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::blog::BlogFactory;
///
/// let blog = BlogFactory::new(&db, user.id)
///     .title("My Trip")
///     .slug("my-trip")
///     .published()
///     .build()
///     .await?;
/// ```
pub struct BlogFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    slug: String,
    content: String,
    excerpt: String,
    author_id: i32,
    category: BlogCategory,
    status: BlogStatus,
    views: i64,
    read_time: i32,
    published_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl<'a> BlogFactory<'a> {
    /// Creates a new BlogFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Blog Post {id}"` with a matching unique slug
    /// - category: `BlogCategory::Technology`, status: `BlogStatus::Draft`
    /// - views: 0, read_time: 1, not published
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `author_id` - User id of the blog author
    ///
    /// # Returns
    /// - `BlogFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, author_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Blog Post {}", id),
            slug: format!("blog-post-{}", id),
            content: "Some example content for testing.".to_string(),
            excerpt: "Some example content".to_string(),
            author_id,
            category: BlogCategory::Technology,
            status: BlogStatus::Draft,
            views: 0,
            read_time: 1,
            published_at: None,
        }
    }

    /// Sets the title for the blog.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the slug for the blog.
    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    /// Sets the body content for the blog.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Sets the category for the blog.
    pub fn category(mut self, category: BlogCategory) -> Self {
        self.category = category;
        self
    }

    /// Sets the status for the blog.
    pub fn status(mut self, status: BlogStatus) -> Self {
        self.status = status;
        self
    }

    /// Marks the blog as published with the publication timestamp set to now.
    pub fn published(mut self) -> Self {
        self.status = BlogStatus::Published;
        self.published_at = Some(Utc::now());
        self
    }

    /// Sets the view count for the blog.
    pub fn views(mut self, views: i64) -> Self {
        self.views = views;
        self
    }

    /// Builds and inserts the blog entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::blog::Model)` - Created blog entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::blog::Model, DbErr> {
        let now = Utc::now();
        entity::blog::ActiveModel {
            title: ActiveValue::Set(self.title),
            slug: ActiveValue::Set(self.slug),
            content: ActiveValue::Set(self.content),
            excerpt: ActiveValue::Set(self.excerpt),
            featured_image: ActiveValue::Set(String::new()),
            author_id: ActiveValue::Set(self.author_id),
            category: ActiveValue::Set(self.category),
            status: ActiveValue::Set(self.status),
            views: ActiveValue::Set(self.views),
            read_time: ActiveValue::Set(self.read_time),
            published_at: ActiveValue::Set(self.published_at),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a draft blog with default values.
///
/// Shorthand for `BlogFactory::new(db, author_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `author_id` - User id of the blog author
///
/// # Returns
/// - `Ok(entity::blog::Model)` - Created blog entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_blog(
    db: &DatabaseConnection,
    author_id: i32,
) -> Result<entity::blog::Model, DbErr> {
    BlogFactory::new(db, author_id).build().await
}

/// Creates a published blog with default values.
///
/// Shorthand for `BlogFactory::new(db, author_id).published().build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `author_id` - User id of the blog author
///
/// # Returns
/// - `Ok(entity::blog::Model)` - Created published blog entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_published_blog(
    db: &DatabaseConnection,
    author_id: i32,
) -> Result<entity::blog::Model, DbErr> {
    BlogFactory::new(db, author_id).published().build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use crate::factory::user::create_user;

    #[tokio::test]
    async fn creates_draft_blog_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = create_user(db).await?;
        let blog = create_blog(db, user.id).await?;

        assert_eq!(blog.author_id, user.id);
        assert_eq!(blog.status, BlogStatus::Draft);
        assert_eq!(blog.views, 0);
        assert!(blog.published_at.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn creates_published_blog() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = create_user(db).await?;
        let blog = create_published_blog(db, user.id).await?;

        assert_eq!(blog.status, BlogStatus::Published);
        assert!(blog.published_at.is_some());

        Ok(())
    }

    #[tokio::test]
    async fn creates_blogs_with_unique_slugs() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = create_user(db).await?;
        let blog1 = create_blog(db, user.id).await?;
        let blog2 = create_blog(db, user.id).await?;

        assert_ne!(blog1.slug, blog2.slug);

        Ok(())
    }
}
