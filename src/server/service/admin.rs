//! Admin dashboard and management business logic.
//!
//! Covers dashboard totals, the detailed stats listings, user management
//! (status, role, removal with full cleanup), and blog status overrides.

use std::collections::HashMap;

use chrono::Utc;
use entity::sea_orm_active_enums::{BlogStatus, UserRole};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        blog::BlogRepository, comment::CommentRepository, follow::FollowRepository,
        user::UserRepository,
    },
    error::AppError,
    model::{
        admin::{DashboardStats, DetailedStats, DetailedStatsRows, StatsType},
        blog::BlogWithMeta,
        user::AdminUserQuery,
    },
    service::blog::BlogService,
};

/// How many recent users and blogs the dashboard shows.
const DASHBOARD_RECENT_LIMIT: u64 = 5;

/// Service handling admin operations.
pub struct AdminService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdminService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gathers dashboard totals and recent activity.
    pub async fn dashboard(&self) -> Result<DashboardStats, AppError> {
        let user_repository = UserRepository::new(self.db);
        let blog_repository = BlogRepository::new(self.db);
        let comment_repository = CommentRepository::new(self.db);

        let total_users = user_repository.count().await?;
        let total_blogs = blog_repository.count().await?;
        let total_comments = comment_repository.count().await?;
        let published_blogs = blog_repository.count_by_status(BlogStatus::Published).await?;
        let draft_blogs = blog_repository.count_by_status(BlogStatus::Draft).await?;

        let recent_users = user_repository.recent(DASHBOARD_RECENT_LIMIT).await?;
        let recent_blogs = blog_repository
            .recent_with_authors(DASHBOARD_RECENT_LIMIT)
            .await?
            .into_iter()
            .filter_map(|(blog, author)| author.map(|a| (blog, a)))
            .collect();

        Ok(DashboardStats {
            total_users,
            total_blogs,
            total_comments,
            published_blogs,
            draft_blogs,
            recent_users,
            recent_blogs,
        })
    }

    /// Gathers one page of a detailed stats listing.
    ///
    /// # Arguments
    /// - `stats_type` - Which listing to produce
    /// - `page` - One-indexed page number
    /// - `per_page` - Page size
    ///
    /// # Returns
    /// - `Ok(DetailedStats)` - Rows shaped by the requested type plus totals
    /// - `Err(AppError)` - Database error during query
    pub async fn detailed_stats(
        &self,
        stats_type: StatsType,
        page: u64,
        per_page: u64,
    ) -> Result<DetailedStats, AppError> {
        let (rows, total) = match stats_type {
            StatsType::Users => {
                let (users, total) = UserRepository::new(self.db)
                    .get_all_paginated(&AdminUserQuery {
                        search: None,
                        role: None,
                        is_active: None,
                        page,
                        per_page,
                    })
                    .await?;

                (DetailedStatsRows::Users(users), total)
            }
            StatsType::Blogs | StatsType::PublishedBlogs => {
                let published_only = stats_type == StatsType::PublishedBlogs;
                let (rows, total) = BlogRepository::new(self.db)
                    .paginated_with_authors(published_only, page, per_page)
                    .await?;

                let blogs = rows
                    .into_iter()
                    .filter_map(|(blog, author)| author.map(|a| (blog, a)))
                    .collect();

                (DetailedStatsRows::Blogs(blogs), total)
            }
            StatsType::Comments => {
                let (comments, total) = CommentRepository::new(self.db)
                    .get_all_paginated(page, per_page)
                    .await?;

                let rows = self.attach_comment_context(comments).await?;

                (DetailedStatsRows::Comments(rows), total)
            }
        };

        Ok(DetailedStats {
            stats_type,
            rows,
            total,
            page,
            per_page,
            total_pages: total.div_ceil(per_page.max(1)),
        })
    }

    /// Lists users for the admin panel.
    ///
    /// # Returns
    /// - `Ok((users, total))` - Users for the page and total match count
    pub async fn users(
        &self,
        query: &AdminUserQuery,
    ) -> Result<(Vec<entity::user::Model>, u64), AppError> {
        let result = UserRepository::new(self.db).get_all_paginated(query).await?;

        Ok(result)
    }

    /// Activates or deactivates an account.
    ///
    /// # Returns
    /// - `Ok(Model)` - The updated user
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn set_user_status(
        &self,
        id: i32,
        is_active: bool,
    ) -> Result<entity::user::Model, AppError> {
        UserRepository::new(self.db)
            .set_active(id, is_active)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Changes an account's role.
    ///
    /// Admins cannot change their own role, so there is always at least one
    /// admin who did not lock themselves out.
    ///
    /// # Arguments
    /// - `acting_admin_id` - The admin performing the change
    /// - `id` - The target account
    /// - `role` - New role
    ///
    /// # Returns
    /// - `Ok(Model)` - The updated user
    /// - `Err(AppError::BadRequest)` - Attempted self role change
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn set_user_role(
        &self,
        acting_admin_id: i32,
        id: i32,
        role: UserRole,
    ) -> Result<entity::user::Model, AppError> {
        if acting_admin_id == id {
            return Err(AppError::BadRequest(
                "You cannot change your own role".to_string(),
            ));
        }

        UserRepository::new(self.db)
            .set_role(id, role)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Removes an account and everything it owns.
    ///
    /// Deletes the user's blogs (with their comments, likes, and tags), the
    /// user's comments elsewhere along with replies under them, every like
    /// the user placed, and every follow edge touching the account.
    ///
    /// # Arguments
    /// - `acting_admin_id` - The admin performing the removal
    /// - `id` - The account to remove
    ///
    /// # Returns
    /// - `Ok(())` - Account and dependents removed
    /// - `Err(AppError::BadRequest)` - Attempted self deletion
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn delete_user(&self, acting_admin_id: i32, id: i32) -> Result<(), AppError> {
        if acting_admin_id == id {
            return Err(AppError::BadRequest(
                "You cannot delete your own account".to_string(),
            ));
        }

        let user_repository = UserRepository::new(self.db);
        let blog_repository = BlogRepository::new(self.db);
        let comment_repository = CommentRepository::new(self.db);
        let follow_repository = FollowRepository::new(self.db);

        if user_repository.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        for blog_id in blog_repository.ids_by_author(id).await? {
            comment_repository.delete_for_blog(blog_id).await?;
            blog_repository.delete(blog_id).await?;
        }

        comment_repository.delete_by_author(id).await?;
        comment_repository.delete_likes_by_user(id).await?;
        blog_repository.delete_likes_by_user(id).await?;
        follow_repository.delete_for_user(id).await?;

        user_repository.delete(id).await?;

        Ok(())
    }

    /// Overwrites a blog's status, regardless of who authored it.
    ///
    /// `published_at` is set on the first transition to published and
    /// preserved afterwards.
    ///
    /// # Arguments
    /// - `id` - The blog to update
    /// - `status` - New status
    /// - `viewer_id` - The acting admin, for is_liked flags in the response
    ///
    /// # Returns
    /// - `Ok(BlogWithMeta)` - The updated blog
    /// - `Err(AppError::NotFound)` - No blog with that id
    pub async fn set_blog_status(
        &self,
        id: i32,
        status: BlogStatus,
        viewer_id: i32,
    ) -> Result<BlogWithMeta, AppError> {
        let blog_repository = BlogRepository::new(self.db);

        let blog = blog_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Blog not found".to_string()))?;

        let set_published_at =
            (status == BlogStatus::Published && blog.published_at.is_none()).then(Utc::now);

        let updated = blog_repository
            .update_status(blog, status, set_published_at)
            .await?;

        BlogService::new(self.db)
            .assemble_one(updated, Some(viewer_id))
            .await
    }

    /// Joins comments with their authors and blogs for the stats listing.
    ///
    /// Rows whose author or blog has since disappeared are dropped.
    async fn attach_comment_context(
        &self,
        comments: Vec<entity::comment::Model>,
    ) -> Result<
        Vec<(
            entity::comment::Model,
            entity::user::Model,
            entity::blog::Model,
        )>,
        AppError,
    > {
        let user_repository = UserRepository::new(self.db);
        let blog_repository = BlogRepository::new(self.db);

        let mut author_ids: Vec<i32> = comments.iter().map(|c| c.author_id).collect();
        author_ids.sort_unstable();
        author_ids.dedup();

        let authors: HashMap<i32, entity::user::Model> = user_repository
            .find_by_ids(&author_ids)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        let mut rows = Vec::with_capacity(comments.len());
        for comment in comments {
            let Some(author) = authors.get(&comment.author_id).cloned() else {
                continue;
            };
            let Some(blog) = blog_repository.find_by_id(comment.blog_id).await? else {
                continue;
            };

            rows.push((comment, author, blog));
        }

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use entity::prelude::*;
    use test_utils::{
        builder::TestBuilder,
        error::TestError,
        factory::{
            blog::BlogFactory, create_admin, create_comment, create_published_blog, create_user,
        },
    };

    async fn full_context() -> Result<test_utils::context::TestContext, TestError> {
        TestBuilder::new()
            .with_comment_tables()
            .with_table(Follow)
            .build()
            .await
    }

    #[tokio::test]
    async fn dashboard_counts_totals() -> Result<(), TestError> {
        let test = full_context().await?;
        let db = test.db.as_ref().unwrap();
        let service = AdminService::new(db);

        let author = create_user(db).await?;
        create_published_blog(db, author.id).await?;
        let draft = BlogFactory::new(db, author.id).build().await?;
        create_comment(db, draft.id, author.id).await?;

        let stats = service.dashboard().await.unwrap();

        assert_eq!(stats.total_users, 1);
        assert_eq!(stats.total_blogs, 2);
        assert_eq!(stats.total_comments, 1);
        assert_eq!(stats.published_blogs, 1);
        assert_eq!(stats.draft_blogs, 1);
        assert_eq!(stats.recent_users.len(), 1);
        assert_eq!(stats.recent_blogs.len(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn detailed_stats_filters_published_blogs() -> Result<(), TestError> {
        let test = full_context().await?;
        let db = test.db.as_ref().unwrap();
        let service = AdminService::new(db);

        let author = create_user(db).await?;
        create_published_blog(db, author.id).await?;
        BlogFactory::new(db, author.id).build().await?;

        let stats = service
            .detailed_stats(StatsType::PublishedBlogs, 1, 20)
            .await
            .unwrap();

        assert_eq!(stats.total, 1);
        match stats.rows {
            DetailedStatsRows::Blogs(rows) => assert_eq!(rows.len(), 1),
            _ => panic!("expected blog rows"),
        }

        Ok(())
    }

    #[tokio::test]
    async fn admin_cannot_change_own_role() -> Result<(), TestError> {
        let test = full_context().await?;
        let db = test.db.as_ref().unwrap();
        let service = AdminService::new(db);

        let admin = create_admin(db).await?;

        let result = service
            .set_user_role(admin.id, admin.id, UserRole::User)
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));

        Ok(())
    }

    #[tokio::test]
    async fn admin_cannot_delete_own_account() -> Result<(), TestError> {
        let test = full_context().await?;
        let db = test.db.as_ref().unwrap();
        let service = AdminService::new(db);

        let admin = create_admin(db).await?;

        let result = service.delete_user(admin.id, admin.id).await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));

        Ok(())
    }

    #[tokio::test]
    async fn deleting_user_removes_owned_content() -> Result<(), TestError> {
        let test = full_context().await?;
        let db = test.db.as_ref().unwrap();
        let service = AdminService::new(db);

        let admin = create_admin(db).await?;
        let target = create_user(db).await?;
        let bystander = create_user(db).await?;

        let blog = create_published_blog(db, target.id).await?;
        create_comment(db, blog.id, bystander.id).await?;

        let other_blog = create_published_blog(db, bystander.id).await?;
        create_comment(db, other_blog.id, target.id).await?;

        let user_service = crate::server::service::user::UserService::new(db);
        user_service.toggle_follow(bystander.id, target.id).await.unwrap();

        service.delete_user(admin.id, target.id).await.unwrap();

        let user_repository = UserRepository::new(db);
        let blog_repository = BlogRepository::new(db);
        let comment_repository = CommentRepository::new(db);
        let follow_repository = FollowRepository::new(db);

        assert!(user_repository.find_by_id(target.id).await?.is_none());
        assert!(blog_repository.find_by_id(blog.id).await?.is_none());
        assert_eq!(comment_repository.count().await?, 0);
        assert_eq!(follow_repository.followers_count(target.id).await?, 0);

        // The bystander's own blog survives.
        assert!(blog_repository.find_by_id(other_blog.id).await?.is_some());

        Ok(())
    }

    #[tokio::test]
    async fn status_override_sets_published_at_once() -> Result<(), TestError> {
        let test = full_context().await?;
        let db = test.db.as_ref().unwrap();
        let service = AdminService::new(db);

        let admin = create_admin(db).await?;
        let author = create_user(db).await?;
        let draft = BlogFactory::new(db, author.id).build().await?;

        let published = service
            .set_blog_status(draft.id, BlogStatus::Published, admin.id)
            .await
            .unwrap();
        let first_published_at = published.blog.published_at.unwrap();

        service
            .set_blog_status(draft.id, BlogStatus::Archived, admin.id)
            .await
            .unwrap();
        let republished = service
            .set_blog_status(draft.id, BlogStatus::Published, admin.id)
            .await
            .unwrap();

        assert_eq!(republished.blog.published_at, Some(first_published_at));

        Ok(())
    }

    #[tokio::test]
    async fn missing_user_yields_not_found() -> Result<(), TestError> {
        let test = full_context().await?;
        let db = test.db.as_ref().unwrap();
        let service = AdminService::new(db);

        let admin = create_admin(db).await?;

        assert!(matches!(
            service.set_user_status(9999, false).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            service.set_user_role(admin.id, 9999, UserRole::Moderator).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            service.delete_user(admin.id, 9999).await,
            Err(AppError::NotFound(_))
        ));

        Ok(())
    }
}
