pub use super::blog::Entity as Blog;
pub use super::blog_like::Entity as BlogLike;
pub use super::blog_tag::Entity as BlogTag;
pub use super::comment::Entity as Comment;
pub use super::comment_like::Entity as CommentLike;
pub use super::follow::Entity as Follow;
pub use super::user::Entity as User;
