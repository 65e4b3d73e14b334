use crate::server::data::comment::CommentRepository;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory::{create_comment, create_published_blog, create_reply, create_user};

mod delete_by_author;
mod replies_for;
mod soft_delete;
mod top_level_for_blog;
