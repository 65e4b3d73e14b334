use crate::server::{
    data::blog::BlogRepository,
    model::blog::{BlogQuery, BlogSort, CreateBlogParams, UpdateBlogParams},
};
use entity::sea_orm_active_enums::{BlogCategory, BlogStatus};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod author_stats;
mod create;
mod delete;
mod get_published_paginated;
mod toggle_like;
mod update;

/// Default params for inserting a blog through the repository.
fn blog_params(title: &str, author_id: i32, status: BlogStatus) -> CreateBlogParams {
    CreateBlogParams {
        title: title.to_string(),
        content: "Example content for repository tests.".to_string(),
        excerpt: None,
        category: BlogCategory::Technology,
        status,
        tags: Vec::new(),
        featured_image: None,
        author_id,
    }
}

/// Listing query with no filters, newest first.
fn listing() -> BlogQuery {
    BlogQuery {
        category: None,
        tags: Vec::new(),
        author_id: None,
        search: None,
        sort_by: BlogSort::CreatedAt,
        ascending: false,
        page: 1,
        per_page: 10,
    }
}
