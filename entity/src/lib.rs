pub mod prelude;

pub mod blog;
pub mod blog_like;
pub mod blog_tag;
pub mod comment;
pub mod comment_like;
pub mod follow;
pub mod sea_orm_active_enums;
pub mod user;
