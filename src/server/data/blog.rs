//! Blog data repository for database operations.
//!
//! This module provides the `BlogRepository` for managing blog records, their tag
//! sets, and their like rows. Listing queries handle the public filter set
//! (category, tags, author, search, sort) as well as the admin variants.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::BlogStatus;
use sea_orm::{
    sea_query::{Expr, ExprTrait, Order},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    JoinType, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::server::model::blog::{AdminBlogQuery, BlogQuery, BlogSort, CreateBlogParams, UpdateBlogParams};

/// Repository providing database operations for blogs, tags, and likes.
pub struct BlogRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BlogRepository<'a> {
    /// Creates a new BlogRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `BlogRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a blog row and its tag set.
    ///
    /// The slug and read time are computed by the service before calling.
    /// `published_at` is set when the blog is created already published.
    ///
    /// # Arguments
    /// - `params` - Blog fields from the create request
    /// - `slug` - Unique slug derived from the title
    /// - `read_time` - Estimated read time in minutes
    ///
    /// # Returns
    /// - `Ok(Model)` - The created blog
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        params: CreateBlogParams,
        slug: String,
        read_time: i32,
    ) -> Result<entity::blog::Model, DbErr> {
        let now = Utc::now();
        let published_at = (params.status == BlogStatus::Published).then_some(now);

        let blog = entity::blog::ActiveModel {
            title: ActiveValue::Set(params.title),
            slug: ActiveValue::Set(slug),
            content: ActiveValue::Set(params.content),
            excerpt: ActiveValue::Set(params.excerpt.unwrap_or_default()),
            featured_image: ActiveValue::Set(params.featured_image.unwrap_or_default()),
            author_id: ActiveValue::Set(params.author_id),
            category: ActiveValue::Set(params.category),
            status: ActiveValue::Set(params.status),
            views: ActiveValue::Set(0),
            read_time: ActiveValue::Set(read_time),
            published_at: ActiveValue::Set(published_at),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.replace_tags(blog.id, &params.tags).await?;

        Ok(blog)
    }

    /// Checks whether a slug is already in use.
    pub async fn slug_exists(&self, slug: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Blog::find()
            .filter(entity::blog::Column::Slug.eq(slug))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Finds a blog by primary key.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::blog::Model>, DbErr> {
        entity::prelude::Blog::find_by_id(id).one(self.db).await
    }

    /// Finds a blog by slug.
    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<entity::blog::Model>, DbErr> {
        entity::prelude::Blog::find()
            .filter(entity::blog::Column::Slug.eq(slug))
            .one(self.db)
            .await
    }

    /// Gets published blogs matching the public listing filters.
    ///
    /// Tag filtering joins the tag table and keeps blogs carrying at least one
    /// of the requested tags. The likes sort orders by a per-row like count
    /// subquery.
    ///
    /// # Arguments
    /// - `query` - Filters, sort, and one-indexed pagination
    ///
    /// # Returns
    /// - `Ok((blogs, total))` - Blogs for the requested page and total match count
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_published_paginated(
        &self,
        query: &BlogQuery,
    ) -> Result<(Vec<entity::blog::Model>, u64), DbErr> {
        let mut select = entity::prelude::Blog::find()
            .filter(entity::blog::Column::Status.eq(BlogStatus::Published));

        if let Some(category) = &query.category {
            select = select.filter(entity::blog::Column::Category.eq(category.clone()));
        }
        if let Some(author_id) = query.author_id {
            select = select.filter(entity::blog::Column::AuthorId.eq(author_id));
        }
        if let Some(search) = &query.search {
            select = select.filter(
                Condition::any()
                    .add(entity::blog::Column::Title.contains(search))
                    .add(entity::blog::Column::Content.contains(search)),
            );
        }
        if !query.tags.is_empty() {
            select = select
                .join(JoinType::InnerJoin, entity::blog::Relation::BlogTag.def())
                .filter(entity::blog_tag::Column::Tag.is_in(query.tags.clone()))
                .distinct();
        }

        let order = if query.ascending { Order::Asc } else { Order::Desc };
        select = match query.sort_by {
            BlogSort::CreatedAt => select.order_by(entity::blog::Column::CreatedAt, order),
            BlogSort::Views => select.order_by(entity::blog::Column::Views, order),
            BlogSort::Likes => select.order_by(
                Expr::cust("(SELECT COUNT(*) FROM blog_like WHERE blog_like.blog_id = blog.id)"),
                order,
            ),
        };

        let paginator = select.paginate(self.db, query.per_page);
        let total = paginator.num_items().await?;
        let blogs = paginator.fetch_page(query.page.saturating_sub(1)).await?;

        Ok((blogs, total))
    }

    /// Gets an author's blogs, newest first, optionally filtered by status.
    ///
    /// # Arguments
    /// - `author_id` - The author's user id
    /// - `status` - Restrict to one status when present
    /// - `page` - One-indexed page number
    /// - `per_page` - Page size
    ///
    /// # Returns
    /// - `Ok((blogs, total))` - Blogs for the requested page and total count
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_author(
        &self,
        author_id: i32,
        status: Option<BlogStatus>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::blog::Model>, u64), DbErr> {
        let mut select = entity::prelude::Blog::find()
            .filter(entity::blog::Column::AuthorId.eq(author_id))
            .order_by_desc(entity::blog::Column::CreatedAt);

        if let Some(status) = status {
            select = select.filter(entity::blog::Column::Status.eq(status));
        }

        let paginator = select.paginate(self.db, per_page);
        let total = paginator.num_items().await?;
        let blogs = paginator.fetch_page(page.saturating_sub(1)).await?;

        Ok((blogs, total))
    }

    /// Gets blogs for the admin listing (drafts included), newest first.
    ///
    /// # Arguments
    /// - `query` - Filters plus one-indexed pagination
    ///
    /// # Returns
    /// - `Ok((blogs, total))` - Blogs for the requested page and total match count
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all_paginated(
        &self,
        query: &AdminBlogQuery,
    ) -> Result<(Vec<entity::blog::Model>, u64), DbErr> {
        let mut select =
            entity::prelude::Blog::find().order_by_desc(entity::blog::Column::CreatedAt);

        if let Some(search) = &query.search {
            select = select.filter(
                Condition::any()
                    .add(entity::blog::Column::Title.contains(search))
                    .add(entity::blog::Column::Content.contains(search)),
            );
        }
        if let Some(status) = &query.status {
            select = select.filter(entity::blog::Column::Status.eq(status.clone()));
        }
        if let Some(category) = &query.category {
            select = select.filter(entity::blog::Column::Category.eq(category.clone()));
        }

        let paginator = select.paginate(self.db, query.per_page);
        let total = paginator.num_items().await?;
        let blogs = paginator.fetch_page(query.page.saturating_sub(1)).await?;

        Ok((blogs, total))
    }

    /// Applies update params to a blog.
    ///
    /// `None` params are left untouched; the slug never changes. The tag set
    /// is replaced when present. `set_published_at` is filled by the service
    /// on the first transition to published only.
    ///
    /// # Arguments
    /// - `blog` - The blog to update
    /// - `params` - Field changes from the update request
    /// - `read_time` - New read time when content changed
    /// - `set_published_at` - Publication timestamp to set, if any
    ///
    /// # Returns
    /// - `Ok(Model)` - The updated blog
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        blog: entity::blog::Model,
        params: UpdateBlogParams,
        read_time: Option<i32>,
        set_published_at: Option<DateTime<Utc>>,
    ) -> Result<entity::blog::Model, DbErr> {
        let blog_id = blog.id;
        let mut active: entity::blog::ActiveModel = blog.into();

        if let Some(title) = params.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(content) = params.content {
            active.content = ActiveValue::Set(content);
        }
        if let Some(excerpt) = params.excerpt {
            active.excerpt = ActiveValue::Set(excerpt);
        }
        if let Some(category) = params.category {
            active.category = ActiveValue::Set(category);
        }
        if let Some(status) = params.status {
            active.status = ActiveValue::Set(status);
        }
        if let Some(featured_image) = params.featured_image {
            active.featured_image = ActiveValue::Set(featured_image);
        }
        if let Some(read_time) = read_time {
            active.read_time = ActiveValue::Set(read_time);
        }
        if let Some(published_at) = set_published_at {
            active.published_at = ActiveValue::Set(Some(published_at));
        }

        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = active.update(self.db).await?;

        if let Some(tags) = params.tags {
            self.replace_tags(blog_id, &tags).await?;
        }

        Ok(updated)
    }

    /// Overwrites a blog's status.
    ///
    /// # Arguments
    /// - `blog` - The blog to update
    /// - `status` - New status
    /// - `set_published_at` - Publication timestamp on first publish, if any
    ///
    /// # Returns
    /// - `Ok(Model)` - The updated blog
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_status(
        &self,
        blog: entity::blog::Model,
        status: BlogStatus,
        set_published_at: Option<DateTime<Utc>>,
    ) -> Result<entity::blog::Model, DbErr> {
        let mut active: entity::blog::ActiveModel = blog.into();

        active.status = ActiveValue::Set(status);
        if let Some(published_at) = set_published_at {
            active.published_at = ActiveValue::Set(Some(published_at));
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        active.update(self.db).await
    }

    /// Increments the view counter by exactly one.
    pub async fn increment_views(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Blog::update_many()
            .filter(entity::blog::Column::Id.eq(id))
            .col_expr(
                entity::blog::Column::Views,
                Expr::col(entity::blog::Column::Views).add(1),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Toggles a user's like on a blog.
    ///
    /// # Arguments
    /// - `blog_id` - The blog being liked or unliked
    /// - `user_id` - The acting user
    ///
    /// # Returns
    /// - `Ok(true)` - Like was added
    /// - `Ok(false)` - Existing like was removed
    /// - `Err(DbErr)` - Database error during toggle
    pub async fn toggle_like(&self, blog_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let existing = entity::prelude::BlogLike::find()
            .filter(entity::blog_like::Column::BlogId.eq(blog_id))
            .filter(entity::blog_like::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        match existing {
            Some(like) => {
                entity::prelude::BlogLike::delete_by_id(like.id)
                    .exec(self.db)
                    .await?;
                Ok(false)
            }
            None => {
                entity::blog_like::ActiveModel {
                    blog_id: ActiveValue::Set(blog_id),
                    user_id: ActiveValue::Set(user_id),
                    created_at: ActiveValue::Set(Utc::now()),
                    ..Default::default()
                }
                .insert(self.db)
                .await?;
                Ok(true)
            }
        }
    }

    /// Gets like counts for a set of blogs.
    ///
    /// # Arguments
    /// - `blog_ids` - Blogs to count likes for
    ///
    /// # Returns
    /// - `Ok(HashMap)` - Map of blog id to like count (absent means zero)
    /// - `Err(DbErr)` - Database error during query
    pub async fn likes_counts(&self, blog_ids: &[i32]) -> Result<HashMap<i32, u64>, DbErr> {
        if blog_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let likes = entity::prelude::BlogLike::find()
            .filter(entity::blog_like::Column::BlogId.is_in(blog_ids.to_vec()))
            .all(self.db)
            .await?;

        let mut counts = HashMap::new();
        for like in likes {
            *counts.entry(like.blog_id).or_insert(0) += 1;
        }

        Ok(counts)
    }

    /// Gets which of the given blogs a user has liked.
    ///
    /// # Arguments
    /// - `blog_ids` - Candidate blogs
    /// - `user_id` - The user whose likes to look up
    ///
    /// # Returns
    /// - `Ok(HashSet)` - Ids of blogs the user has liked
    /// - `Err(DbErr)` - Database error during query
    pub async fn liked_blog_ids(
        &self,
        blog_ids: &[i32],
        user_id: i32,
    ) -> Result<HashSet<i32>, DbErr> {
        if blog_ids.is_empty() {
            return Ok(HashSet::new());
        }

        let likes = entity::prelude::BlogLike::find()
            .filter(entity::blog_like::Column::BlogId.is_in(blog_ids.to_vec()))
            .filter(entity::blog_like::Column::UserId.eq(user_id))
            .all(self.db)
            .await?;

        Ok(likes.into_iter().map(|l| l.blog_id).collect())
    }

    /// Gets tag sets for a set of blogs.
    ///
    /// # Arguments
    /// - `blog_ids` - Blogs to fetch tags for
    ///
    /// # Returns
    /// - `Ok(HashMap)` - Map of blog id to its tags (absent means none)
    /// - `Err(DbErr)` - Database error during query
    pub async fn tags_for(&self, blog_ids: &[i32]) -> Result<HashMap<i32, Vec<String>>, DbErr> {
        if blog_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = entity::prelude::BlogTag::find()
            .filter(entity::blog_tag::Column::BlogId.is_in(blog_ids.to_vec()))
            .all(self.db)
            .await?;

        let mut tags: HashMap<i32, Vec<String>> = HashMap::new();
        for row in rows {
            tags.entry(row.blog_id).or_default().push(row.tag);
        }

        Ok(tags)
    }

    /// Deletes a blog and its likes and tags.
    ///
    /// Comments are removed by the blog service through the comment
    /// repository before this is called.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::BlogLike::delete_many()
            .filter(entity::blog_like::Column::BlogId.eq(id))
            .exec(self.db)
            .await?;

        entity::prelude::BlogTag::delete_many()
            .filter(entity::blog_tag::Column::BlogId.eq(id))
            .exec(self.db)
            .await?;

        entity::prelude::Blog::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }

    /// Deletes every blog like placed by a user.
    ///
    /// Used when an admin removes an account.
    pub async fn delete_likes_by_user(&self, user_id: i32) -> Result<(), DbErr> {
        entity::prelude::BlogLike::delete_many()
            .filter(entity::blog_like::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Lists ids of every blog by an author.
    pub async fn ids_by_author(&self, author_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::Blog::find()
            .select_only()
            .column(entity::blog::Column::Id)
            .filter(entity::blog::Column::AuthorId.eq(author_id))
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Counts all blogs.
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Blog::find().count(self.db).await
    }

    /// Counts blogs with the given status.
    pub async fn count_by_status(&self, status: BlogStatus) -> Result<u64, DbErr> {
        entity::prelude::Blog::find()
            .filter(entity::blog::Column::Status.eq(status))
            .count(self.db)
            .await
    }

    /// Gets the most recently created blogs with their authors.
    pub async fn recent_with_authors(
        &self,
        limit: u64,
    ) -> Result<Vec<(entity::blog::Model, Option<entity::user::Model>)>, DbErr> {
        entity::prelude::Blog::find()
            .find_also_related(entity::prelude::User)
            .order_by_desc(entity::blog::Column::CreatedAt)
            .limit(limit)
            .all(self.db)
            .await
    }

    /// Gets blogs with authors for the detailed stats listing.
    ///
    /// # Arguments
    /// - `published_only` - Restrict to published blogs
    /// - `page` - One-indexed page number
    /// - `per_page` - Page size
    ///
    /// # Returns
    /// - `Ok((rows, total))` - Blog/author pairs and total count
    /// - `Err(DbErr)` - Database error during query
    pub async fn paginated_with_authors(
        &self,
        published_only: bool,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<(entity::blog::Model, Option<entity::user::Model>)>, u64), DbErr> {
        let mut select = entity::prelude::Blog::find()
            .find_also_related(entity::prelude::User)
            .order_by_desc(entity::blog::Column::CreatedAt);

        if published_only {
            select = select.filter(entity::blog::Column::Status.eq(BlogStatus::Published));
        }

        let paginator = select.paginate(self.db, per_page);
        let total = paginator.num_items().await?;
        let rows = paginator.fetch_page(page.saturating_sub(1)).await?;

        Ok((rows, total))
    }

    /// Aggregates publishing stats for a public profile.
    ///
    /// # Arguments
    /// - `author_id` - The profile owner's user id
    ///
    /// # Returns
    /// - `Ok((blogs, views, likes))` - Published blog count, summed views, summed likes
    /// - `Err(DbErr)` - Database error during query
    pub async fn author_stats(&self, author_id: i32) -> Result<(u64, u64, u64), DbErr> {
        let published = entity::prelude::Blog::find()
            .filter(entity::blog::Column::AuthorId.eq(author_id))
            .filter(entity::blog::Column::Status.eq(BlogStatus::Published))
            .all(self.db)
            .await?;

        let total_blogs = published.len() as u64;
        let total_views: u64 = published.iter().map(|b| b.views.max(0) as u64).sum();

        let ids: Vec<i32> = published.iter().map(|b| b.id).collect();
        let total_likes: u64 = self.likes_counts(&ids).await?.values().sum();

        Ok((total_blogs, total_views, total_likes))
    }

    /// Replaces the tag set of a blog.
    async fn replace_tags(&self, blog_id: i32, tags: &[String]) -> Result<(), DbErr> {
        entity::prelude::BlogTag::delete_many()
            .filter(entity::blog_tag::Column::BlogId.eq(blog_id))
            .exec(self.db)
            .await?;

        for tag in tags {
            entity::blog_tag::ActiveModel {
                blog_id: ActiveValue::Set(blog_id),
                tag: ActiveValue::Set(tag.clone()),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        Ok(())
    }
}
