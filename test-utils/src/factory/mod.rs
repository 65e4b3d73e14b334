//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle dependencies and foreign
//! key relationships, making tests more concise and maintainable.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let blog = factory::blog::create_blog(&db, user.id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let blog = factory::blog::BlogFactory::new(&db, user.id)
//!     .title("Hello World")
//!     .slug("hello-world")
//!     .published()
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `blog` - Create blog entities
//! - `comment` - Create comment entities
//! - `helpers` - Unique-ID generation shared by all factories

pub mod blog;
pub mod comment;
pub mod helpers;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use blog::{create_blog, create_published_blog};
pub use comment::{create_comment, create_reply};
pub use user::{create_admin, create_user};
