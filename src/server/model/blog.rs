//! Blog domain models and parameters.
//!
//! Provides the blog aggregate (entity plus assembled author, tags, and like
//! metadata), listing filters, and parameter types for create and update
//! operations.

use entity::sea_orm_active_enums::{BlogCategory, BlogStatus};

use crate::{
    model::{
        api::BlogPaginationDto,
        blog::{AuthorProfileDto, BlogDto, BlogListItemDto},
    },
    server::model::user::{social_links_dto, user_summary_dto},
};

/// Parses a category query value, case-insensitively.
pub fn parse_category(value: &str) -> Option<BlogCategory> {
    match value.to_lowercase().as_str() {
        "technology" => Some(BlogCategory::Technology),
        "lifestyle" => Some(BlogCategory::Lifestyle),
        "travel" => Some(BlogCategory::Travel),
        "food" => Some(BlogCategory::Food),
        "health" => Some(BlogCategory::Health),
        "business" => Some(BlogCategory::Business),
        "education" => Some(BlogCategory::Education),
        "entertainment" => Some(BlogCategory::Entertainment),
        "sports" => Some(BlogCategory::Sports),
        "other" => Some(BlogCategory::Other),
        _ => None,
    }
}

/// Parses a status value from a query string or form field.
pub fn parse_status(value: &str) -> Option<BlogStatus> {
    match value.to_lowercase().as_str() {
        "draft" => Some(BlogStatus::Draft),
        "published" => Some(BlogStatus::Published),
        "archived" => Some(BlogStatus::Archived),
        _ => None,
    }
}

/// Sort key for the published blog listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlogSort {
    CreatedAt,
    Views,
    Likes,
}

impl BlogSort {
    /// Parses the sortBy query value, defaulting to creation time.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("views") => Self::Views,
            Some("likes") => Self::Likes,
            _ => Self::CreatedAt,
        }
    }
}

/// Filters for the published blog listing.
#[derive(Debug, Clone)]
pub struct BlogQuery {
    pub category: Option<BlogCategory>,
    /// Blogs must carry at least one of these tags when non-empty.
    pub tags: Vec<String>,
    pub author_id: Option<i32>,
    /// Case-insensitive substring over title and content.
    pub search: Option<String>,
    pub sort_by: BlogSort,
    pub ascending: bool,
    /// One-indexed page number.
    pub page: u64,
    pub per_page: u64,
}

/// Filters for the admin blog listing (drafts included).
#[derive(Debug, Clone)]
pub struct AdminBlogQuery {
    pub search: Option<String>,
    pub status: Option<BlogStatus>,
    pub category: Option<BlogCategory>,
    pub page: u64,
    pub per_page: u64,
}

/// Parameters for creating a blog.
///
/// Slug and read time are computed by the service, not supplied by callers.
#[derive(Debug, Clone)]
pub struct CreateBlogParams {
    pub title: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub category: BlogCategory,
    pub status: BlogStatus,
    pub tags: Vec<String>,
    pub featured_image: Option<String>,
    pub author_id: i32,
}

/// Parameters for updating a blog.
///
/// `None` fields are left untouched. The slug never changes after creation;
/// read time is recomputed when content is present.
#[derive(Debug, Clone, Default)]
pub struct UpdateBlogParams {
    pub title: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub category: Option<BlogCategory>,
    pub status: Option<BlogStatus>,
    pub tags: Option<Vec<String>>,
    pub featured_image: Option<String>,
}

/// Blog aggregate with assembled author, tags, and like metadata.
#[derive(Debug, Clone)]
pub struct BlogWithMeta {
    pub blog: entity::blog::Model,
    pub author: entity::user::Model,
    pub tags: Vec<String>,
    pub likes_count: u64,
    /// Whether the requesting user has liked this blog (false for anonymous).
    pub is_liked: bool,
}

impl BlogWithMeta {
    /// Converts the aggregate to a listing row DTO (content omitted).
    pub fn into_list_dto(self) -> BlogListItemDto {
        let is_published = self.blog.status == BlogStatus::Published;

        BlogListItemDto {
            id: self.blog.id,
            title: self.blog.title,
            slug: self.blog.slug,
            excerpt: self.blog.excerpt,
            featured_image: self.blog.featured_image,
            author: user_summary_dto(&self.author),
            category: self.blog.category,
            tags: self.tags,
            status: self.blog.status,
            is_published,
            views: self.blog.views,
            read_time: self.blog.read_time,
            likes_count: self.likes_count,
            is_liked: self.is_liked,
            published_at: self.blog.published_at,
            created_at: self.blog.created_at,
            updated_at: self.blog.updated_at,
        }
    }

    /// Converts the aggregate to the full detail DTO with the author card.
    pub fn into_detail_dto(self) -> BlogDto {
        let is_published = self.blog.status == BlogStatus::Published;

        let author = AuthorProfileDto {
            id: self.author.id,
            username: self.author.username.clone(),
            first_name: self.author.first_name.clone(),
            last_name: self.author.last_name.clone(),
            avatar: self.author.avatar.clone(),
            bio: self.author.bio.clone(),
            social_links: social_links_dto(&self.author),
        };

        BlogDto {
            id: self.blog.id,
            title: self.blog.title,
            slug: self.blog.slug,
            content: self.blog.content,
            excerpt: self.blog.excerpt,
            featured_image: self.blog.featured_image,
            author,
            category: self.blog.category,
            tags: self.tags,
            status: self.blog.status,
            is_published,
            views: self.blog.views,
            read_time: self.blog.read_time,
            likes_count: self.likes_count,
            is_liked: self.is_liked,
            published_at: self.blog.published_at,
            created_at: self.blog.created_at,
            updated_at: self.blog.updated_at,
        }
    }
}

/// Paginated collection of blog aggregates with metadata.
#[derive(Debug, Clone)]
pub struct PaginatedBlogs {
    pub blogs: Vec<BlogWithMeta>,
    /// Total number of blogs matching the filters across all pages.
    pub total: u64,
    /// One-indexed page number.
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedBlogs {
    /// Builds the pagination metadata DTO for the listing envelope.
    pub fn pagination_dto(&self) -> BlogPaginationDto {
        BlogPaginationDto {
            current_page: self.page,
            total_pages: self.total_pages,
            total_blogs: self.total,
            has_next: self.page < self.total_pages,
            has_prev: self.page > 1,
        }
    }

    /// Converts every row to a listing DTO.
    pub fn into_list_dtos(self) -> Vec<BlogListItemDto> {
        self.blogs
            .into_iter()
            .map(BlogWithMeta::into_list_dto)
            .collect()
    }
}
