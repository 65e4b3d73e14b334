//! Admin dashboard domain models.

use crate::{
    model::admin::{
        AdminBlogDto, AdminCommentDto, AdminUserDto, DashboardStatsDto, DetailedStatsDataDto,
    },
    server::model::user::user_summary_dto,
};

/// Listing type for the detailed stats endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsType {
    Users,
    Blogs,
    PublishedBlogs,
    Comments,
}

impl StatsType {
    /// Parses the path segment of `GET /api/admin/stats/{type}`.
    ///
    /// # Returns
    /// - `Some(StatsType)` - Recognized listing type
    /// - `None` - Unknown type (caller responds 400)
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "users" => Some(Self::Users),
            "blogs" => Some(Self::Blogs),
            "published-blogs" => Some(Self::PublishedBlogs),
            "comments" => Some(Self::Comments),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::Blogs => "blogs",
            Self::PublishedBlogs => "published-blogs",
            Self::Comments => "comments",
        }
    }
}

/// Dashboard totals and recent activity.
#[derive(Debug, Clone)]
pub struct DashboardStats {
    pub total_users: u64,
    pub total_blogs: u64,
    pub total_comments: u64,
    pub published_blogs: u64,
    pub draft_blogs: u64,
    pub recent_users: Vec<entity::user::Model>,
    pub recent_blogs: Vec<(entity::blog::Model, entity::user::Model)>,
}

impl DashboardStats {
    pub fn into_dto(self) -> DashboardStatsDto {
        DashboardStatsDto {
            total_users: self.total_users,
            total_blogs: self.total_blogs,
            total_comments: self.total_comments,
            published_blogs: self.published_blogs,
            draft_blogs: self.draft_blogs,
            recent_users: self.recent_users.iter().map(admin_user_dto).collect(),
            recent_blogs: self
                .recent_blogs
                .iter()
                .map(|(blog, author)| admin_blog_dto(blog, author))
                .collect(),
        }
    }
}

/// One page of a detailed stats listing, shaped by the requested type.
#[derive(Debug, Clone)]
pub enum DetailedStatsRows {
    Users(Vec<entity::user::Model>),
    Blogs(Vec<(entity::blog::Model, entity::user::Model)>),
    Comments(
        Vec<(
            entity::comment::Model,
            entity::user::Model,
            entity::blog::Model,
        )>,
    ),
}

impl DetailedStatsRows {
    pub fn into_dto(self) -> DetailedStatsDataDto {
        match self {
            Self::Users(users) => {
                DetailedStatsDataDto::Users(users.iter().map(admin_user_dto).collect())
            }
            Self::Blogs(blogs) => DetailedStatsDataDto::Blogs(
                blogs
                    .iter()
                    .map(|(blog, author)| admin_blog_dto(blog, author))
                    .collect(),
            ),
            Self::Comments(comments) => DetailedStatsDataDto::Comments(
                comments
                    .iter()
                    .map(|(comment, author, blog)| AdminCommentDto {
                        id: comment.id,
                        content: comment.content.clone(),
                        author: user_summary_dto(author),
                        blog_id: blog.id,
                        blog_title: blog.title.clone(),
                        blog_slug: blog.slug.clone(),
                        is_active: comment.is_active,
                        created_at: comment.created_at,
                    })
                    .collect(),
            ),
        }
    }
}

/// Detailed stats listing with its total row count.
#[derive(Debug, Clone)]
pub struct DetailedStats {
    pub stats_type: StatsType,
    pub rows: DetailedStatsRows,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

fn admin_user_dto(user: &entity::user::Model) -> AdminUserDto {
    AdminUserDto {
        id: user.id,
        username: user.username.clone(),
        email: user.email.clone(),
        first_name: user.first_name.clone(),
        last_name: user.last_name.clone(),
        avatar: user.avatar.clone(),
        created_at: user.created_at,
    }
}

fn admin_blog_dto(blog: &entity::blog::Model, author: &entity::user::Model) -> AdminBlogDto {
    AdminBlogDto {
        id: blog.id,
        title: blog.title.clone(),
        slug: blog.slug.clone(),
        author: user_summary_dto(author),
        category: blog.category.clone(),
        status: blog.status.clone(),
        views: blog.views,
        created_at: blog.created_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_stats_types() {
        assert_eq!(StatsType::parse("users"), Some(StatsType::Users));
        assert_eq!(StatsType::parse("blogs"), Some(StatsType::Blogs));
        assert_eq!(
            StatsType::parse("published-blogs"),
            Some(StatsType::PublishedBlogs)
        );
        assert_eq!(StatsType::parse("comments"), Some(StatsType::Comments));
    }

    #[test]
    fn rejects_unknown_stats_type() {
        assert_eq!(StatsType::parse("likes"), None);
        assert_eq!(StatsType::parse(""), None);
    }
}
