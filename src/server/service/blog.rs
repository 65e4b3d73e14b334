//! Blog business logic.
//!
//! Owns slug generation, read-time estimation, draft visibility rules, view
//! counting, and assembly of blog aggregates with their authors, tags, and
//! like metadata.

use std::collections::HashMap;

use chrono::Utc;
use entity::sea_orm_active_enums::{BlogStatus, UserRole};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{blog::BlogRepository, comment::CommentRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::{
        blog::{AdminBlogQuery, BlogQuery, BlogWithMeta, CreateBlogParams, PaginatedBlogs, UpdateBlogParams},
        comment::CommentWithMeta,
    },
    service::comment::CommentService,
    util::{read_time::estimate_read_time, slug::slugify},
};

const TITLE_MAX_LEN: usize = 100;
const EXCERPT_MAX_LEN: usize = 300;

/// Service handling blog operations.
pub struct BlogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BlogService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a blog with a unique slug and computed read time.
    ///
    /// # Arguments
    /// - `params` - Blog fields from the create request
    ///
    /// # Returns
    /// - `Ok(BlogWithMeta)` - The created blog with its author
    /// - `Err(AppError::BadRequest)` - Validation failure
    pub async fn create(&self, params: CreateBlogParams) -> Result<BlogWithMeta, AppError> {
        validate_title(&params.title)?;
        validate_content(&params.content)?;
        if let Some(excerpt) = &params.excerpt {
            validate_excerpt(excerpt)?;
        }

        let blog_repository = BlogRepository::new(self.db);

        let slug = self.unique_slug(&blog_repository, &params.title).await?;
        let read_time = estimate_read_time(&params.content);
        let author_id = params.author_id;
        let tags = params.tags.clone();

        let blog = blog_repository.create(params, slug, read_time).await?;

        let author = UserRepository::new(self.db)
            .find_by_id(author_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        Ok(BlogWithMeta {
            blog,
            author,
            tags,
            likes_count: 0,
            is_liked: false,
        })
    }

    /// Lists published blogs with filters, sort, and pagination.
    ///
    /// # Arguments
    /// - `query` - Filters, sort, and one-indexed pagination
    /// - `viewer_id` - Requesting user for is_liked flags, if authenticated
    ///
    /// # Returns
    /// - `Ok(PaginatedBlogs)` - One page of assembled blog aggregates
    /// - `Err(AppError)` - Database error during query or assembly
    pub async fn list(
        &self,
        query: &BlogQuery,
        viewer_id: Option<i32>,
    ) -> Result<PaginatedBlogs, AppError> {
        let blog_repository = BlogRepository::new(self.db);

        let (blogs, total) = blog_repository.get_published_paginated(query).await?;
        let blogs = self.assemble_many(blogs, viewer_id).await?;

        Ok(paginate(blogs, total, query.page, query.per_page))
    }

    /// Lists the authenticated user's own blogs, drafts included.
    pub async fn my_blogs(
        &self,
        user_id: i32,
        status: Option<BlogStatus>,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedBlogs, AppError> {
        let blog_repository = BlogRepository::new(self.db);

        let (blogs, total) = blog_repository
            .get_by_author(user_id, status, page, per_page)
            .await?;
        let blogs = self.assemble_many(blogs, Some(user_id)).await?;

        Ok(paginate(blogs, total, page, per_page))
    }

    /// Lists blogs for the admin panel, drafts included.
    pub async fn admin_list(
        &self,
        query: &AdminBlogQuery,
        viewer_id: i32,
    ) -> Result<PaginatedBlogs, AppError> {
        let blog_repository = BlogRepository::new(self.db);

        let (blogs, total) = blog_repository.get_all_paginated(query).await?;
        let blogs = self.assemble_many(blogs, Some(viewer_id)).await?;

        Ok(paginate(blogs, total, query.page, query.per_page))
    }

    /// Fetches a blog by slug with its comment thread.
    ///
    /// Drafts and archived blogs are visible only to their author and to
    /// admins. Views are counted once per fetch, and only for published
    /// blogs; the comment thread is likewise only assembled when published.
    ///
    /// # Arguments
    /// - `slug` - The blog's slug
    /// - `viewer` - Requesting user, if authenticated
    ///
    /// # Returns
    /// - `Ok((BlogWithMeta, Vec<CommentWithMeta>))` - Blog and its thread
    /// - `Err(AppError::NotFound)` - Missing, or hidden from this viewer
    pub async fn get_by_slug(
        &self,
        slug: &str,
        viewer: Option<&entity::user::Model>,
    ) -> Result<(BlogWithMeta, Vec<CommentWithMeta>), AppError> {
        let blog_repository = BlogRepository::new(self.db);

        let mut blog = blog_repository
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::NotFound("Blog not found".to_string()))?;

        let published = blog.status == BlogStatus::Published;
        if !published && !can_manage(viewer, blog.author_id) {
            // Hidden drafts are indistinguishable from missing blogs.
            return Err(AppError::NotFound("Blog not found".to_string()));
        }

        let viewer_id = viewer.map(|u| u.id);
        let mut comments = Vec::new();

        if published {
            blog_repository.increment_views(blog.id).await?;
            blog.views += 1;

            comments = CommentService::new(self.db)
                .thread_for_blog(blog.id, viewer_id)
                .await?;
        }

        let blog = self.assemble_one(blog, viewer_id).await?;

        Ok((blog, comments))
    }

    /// Fetches a blog by id for the edit form, without counting a view.
    ///
    /// # Returns
    /// - `Ok(BlogWithMeta)` - The blog with its metadata
    /// - `Err(AppError::NotFound)` - No blog with that id
    /// - `Err(AppError::AuthErr)` - Viewer is neither the author nor an admin
    pub async fn get_for_edit(
        &self,
        id: i32,
        user: &entity::user::Model,
    ) -> Result<BlogWithMeta, AppError> {
        let blog = BlogRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Blog not found".to_string()))?;

        if !can_manage(Some(user), blog.author_id) {
            return Err(AuthError::AccessDenied(user.id, "edit blog".to_string()).into());
        }

        self.assemble_one(blog, Some(user.id)).await
    }

    /// Updates a blog.
    ///
    /// The slug never changes; read time is recomputed when content is
    /// present; `published_at` is set on the first transition to published
    /// and preserved afterwards.
    ///
    /// # Arguments
    /// - `id` - The blog to update
    /// - `user` - The acting user (author or admin)
    /// - `params` - Field changes from the update request
    ///
    /// # Returns
    /// - `Ok(BlogWithMeta)` - The updated blog
    /// - `Err(AppError::NotFound)` - No blog with that id
    /// - `Err(AppError::AuthErr)` - Acting user may not edit this blog
    pub async fn update(
        &self,
        id: i32,
        user: &entity::user::Model,
        params: UpdateBlogParams,
    ) -> Result<BlogWithMeta, AppError> {
        if let Some(title) = &params.title {
            validate_title(title)?;
        }
        if let Some(content) = &params.content {
            validate_content(content)?;
        }
        if let Some(excerpt) = &params.excerpt {
            validate_excerpt(excerpt)?;
        }

        let blog_repository = BlogRepository::new(self.db);

        let blog = blog_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Blog not found".to_string()))?;

        if !can_manage(Some(user), blog.author_id) {
            return Err(AuthError::AccessDenied(user.id, "update blog".to_string()).into());
        }

        let read_time = params.content.as_deref().map(estimate_read_time);
        let set_published_at = (params.status == Some(BlogStatus::Published)
            && blog.published_at.is_none())
        .then(Utc::now);

        let updated = blog_repository
            .update(blog, params, read_time, set_published_at)
            .await?;

        self.assemble_one(updated, Some(user.id)).await
    }

    /// Deletes a blog along with its comments, likes, and tags.
    pub async fn delete(&self, id: i32, user: &entity::user::Model) -> Result<(), AppError> {
        let blog_repository = BlogRepository::new(self.db);

        let blog = blog_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Blog not found".to_string()))?;

        if !can_manage(Some(user), blog.author_id) {
            return Err(AuthError::AccessDenied(user.id, "delete blog".to_string()).into());
        }

        CommentRepository::new(self.db).delete_for_blog(blog.id).await?;
        blog_repository.delete(blog.id).await?;

        Ok(())
    }

    /// Toggles the acting user's like on a blog.
    ///
    /// # Returns
    /// - `Ok((is_liked, likes_count))` - New like state and total
    /// - `Err(AppError::NotFound)` - No blog with that id
    pub async fn toggle_like(&self, id: i32, user_id: i32) -> Result<(bool, u64), AppError> {
        let blog_repository = BlogRepository::new(self.db);

        let blog = blog_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Blog not found".to_string()))?;

        let is_liked = blog_repository.toggle_like(blog.id, user_id).await?;
        let likes = blog_repository.likes_counts(&[blog.id]).await?;

        Ok((is_liked, likes.get(&blog.id).copied().unwrap_or(0)))
    }

    /// Assembles one blog with its author, tags, and like metadata.
    pub async fn assemble_one(
        &self,
        blog: entity::blog::Model,
        viewer_id: Option<i32>,
    ) -> Result<BlogWithMeta, AppError> {
        let mut assembled = self.assemble_many(vec![blog], viewer_id).await?;

        assembled
            .pop()
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Assembles a batch of blogs with authors, tags, and like metadata.
    ///
    /// Blogs whose author row is missing are dropped rather than failing the
    /// whole page.
    pub async fn assemble_many(
        &self,
        blogs: Vec<entity::blog::Model>,
        viewer_id: Option<i32>,
    ) -> Result<Vec<BlogWithMeta>, AppError> {
        let blog_repository = BlogRepository::new(self.db);
        let user_repository = UserRepository::new(self.db);

        let blog_ids: Vec<i32> = blogs.iter().map(|b| b.id).collect();

        let mut author_ids: Vec<i32> = blogs.iter().map(|b| b.author_id).collect();
        author_ids.sort_unstable();
        author_ids.dedup();

        let authors: HashMap<i32, entity::user::Model> = user_repository
            .find_by_ids(&author_ids)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        let mut tags = blog_repository.tags_for(&blog_ids).await?;
        let likes = blog_repository.likes_counts(&blog_ids).await?;
        let liked = match viewer_id {
            Some(user_id) => blog_repository.liked_blog_ids(&blog_ids, user_id).await?,
            None => Default::default(),
        };

        let mut assembled = Vec::with_capacity(blogs.len());
        for blog in blogs {
            let Some(author) = authors.get(&blog.author_id).cloned() else {
                continue;
            };

            assembled.push(BlogWithMeta {
                tags: tags.remove(&blog.id).unwrap_or_default(),
                likes_count: likes.get(&blog.id).copied().unwrap_or(0),
                is_liked: liked.contains(&blog.id),
                author,
                blog,
            });
        }

        Ok(assembled)
    }

    /// Derives a unique slug from a title by suffixing a counter.
    async fn unique_slug(
        &self,
        blog_repository: &BlogRepository<'_>,
        title: &str,
    ) -> Result<String, AppError> {
        let base = slugify(title);
        let base = if base.is_empty() {
            "post".to_string()
        } else {
            base
        };

        if !blog_repository.slug_exists(&base).await? {
            return Ok(base);
        }

        let mut n = 1;
        loop {
            let candidate = format!("{}-{}", base, n);
            if !blog_repository.slug_exists(&candidate).await? {
                return Ok(candidate);
            }
            n += 1;
        }
    }
}

/// Whether a viewer may manage (edit, delete, see drafts of) a blog.
fn can_manage(viewer: Option<&entity::user::Model>, author_id: i32) -> bool {
    match viewer {
        Some(user) => user.id == author_id || user.role == UserRole::Admin,
        None => false,
    }
}

fn validate_title(title: &str) -> Result<(), AppError> {
    if title.trim().is_empty() {
        return Err(AppError::BadRequest("Title is required".to_string()));
    }
    if title.len() > TITLE_MAX_LEN {
        return Err(AppError::BadRequest(
            "Title must be 100 characters or less".to_string(),
        ));
    }
    Ok(())
}

fn validate_content(content: &str) -> Result<(), AppError> {
    if content.trim().is_empty() {
        return Err(AppError::BadRequest("Content is required".to_string()));
    }
    Ok(())
}

fn validate_excerpt(excerpt: &str) -> Result<(), AppError> {
    if excerpt.len() > EXCERPT_MAX_LEN {
        return Err(AppError::BadRequest(
            "Excerpt must be 300 characters or less".to_string(),
        ));
    }
    Ok(())
}

/// Builds a paginated collection from one fetched page.
fn paginate(blogs: Vec<BlogWithMeta>, total: u64, page: u64, per_page: u64) -> PaginatedBlogs {
    let total_pages = total.div_ceil(per_page.max(1));

    PaginatedBlogs {
        blogs,
        total,
        page,
        per_page,
        total_pages,
    }
}
