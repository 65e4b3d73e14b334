//! Comment data repository for database operations.
//!
//! This module provides the `CommentRepository` for managing comment threads and
//! comment likes. Deletion of user comments is a soft delete (is_active flag);
//! hard deletes only happen when the parent blog or account is removed.

use std::collections::{HashMap, HashSet};

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::comment::CreateCommentParams;

/// Repository providing database operations for comments and comment likes.
pub struct CommentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentRepository<'a> {
    /// Creates a new CommentRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `CommentRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a comment row.
    ///
    /// Blog and parent existence are validated by the comment service.
    ///
    /// # Arguments
    /// - `params` - Comment fields from the create request
    ///
    /// # Returns
    /// - `Ok(Model)` - The created comment
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        params: CreateCommentParams,
    ) -> Result<entity::comment::Model, DbErr> {
        let now = Utc::now();

        entity::comment::ActiveModel {
            content: ActiveValue::Set(params.content),
            author_id: ActiveValue::Set(params.author_id),
            blog_id: ActiveValue::Set(params.blog_id),
            parent_id: ActiveValue::Set(params.parent_id),
            is_edited: ActiveValue::Set(false),
            edited_at: ActiveValue::Set(None),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds a comment by primary key.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::comment::Model>, DbErr> {
        entity::prelude::Comment::find_by_id(id).one(self.db).await
    }

    /// Gets active top-level comments for a blog, newest first.
    pub async fn top_level_for_blog(
        &self,
        blog_id: i32,
    ) -> Result<Vec<entity::comment::Model>, DbErr> {
        entity::prelude::Comment::find()
            .filter(entity::comment::Column::BlogId.eq(blog_id))
            .filter(entity::comment::Column::ParentId.is_null())
            .filter(entity::comment::Column::IsActive.eq(true))
            .order_by_desc(entity::comment::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Gets active replies to a set of comments, oldest first.
    ///
    /// # Arguments
    /// - `parent_ids` - Top-level comment ids to fetch replies for
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - Replies in chronological order
    /// - `Err(DbErr)` - Database error during query
    pub async fn replies_for(
        &self,
        parent_ids: &[i32],
    ) -> Result<Vec<entity::comment::Model>, DbErr> {
        if parent_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Comment::find()
            .filter(entity::comment::Column::ParentId.is_in(parent_ids.to_vec()))
            .filter(entity::comment::Column::IsActive.eq(true))
            .order_by_asc(entity::comment::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Updates a comment's content and marks it edited.
    ///
    /// # Arguments
    /// - `comment` - The comment to update
    /// - `content` - New comment body
    ///
    /// # Returns
    /// - `Ok(Model)` - The updated comment
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_content(
        &self,
        comment: entity::comment::Model,
        content: String,
    ) -> Result<entity::comment::Model, DbErr> {
        let now = Utc::now();
        let mut active: entity::comment::ActiveModel = comment.into();

        active.content = ActiveValue::Set(content);
        active.is_edited = ActiveValue::Set(true);
        active.edited_at = ActiveValue::Set(Some(now));
        active.updated_at = ActiveValue::Set(now);

        active.update(self.db).await
    }

    /// Soft deletes a comment by clearing its active flag.
    ///
    /// The row is retained so existing replies keep their anchor.
    pub async fn soft_delete(&self, comment: entity::comment::Model) -> Result<(), DbErr> {
        let mut active: entity::comment::ActiveModel = comment.into();

        active.is_active = ActiveValue::Set(false);
        active.updated_at = ActiveValue::Set(Utc::now());

        active.update(self.db).await?;
        Ok(())
    }

    /// Toggles a user's like on a comment.
    ///
    /// # Arguments
    /// - `comment_id` - The comment being liked or unliked
    /// - `user_id` - The acting user
    ///
    /// # Returns
    /// - `Ok(true)` - Like was added
    /// - `Ok(false)` - Existing like was removed
    /// - `Err(DbErr)` - Database error during toggle
    pub async fn toggle_like(&self, comment_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let existing = entity::prelude::CommentLike::find()
            .filter(entity::comment_like::Column::CommentId.eq(comment_id))
            .filter(entity::comment_like::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        match existing {
            Some(like) => {
                entity::prelude::CommentLike::delete_by_id(like.id)
                    .exec(self.db)
                    .await?;
                Ok(false)
            }
            None => {
                entity::comment_like::ActiveModel {
                    comment_id: ActiveValue::Set(comment_id),
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

    /// Gets like counts for a set of comments.
    ///
    /// # Arguments
    /// - `comment_ids` - Comments to count likes for
    ///
    /// # Returns
    /// - `Ok(HashMap)` - Map of comment id to like count (absent means zero)
    /// - `Err(DbErr)` - Database error during query
    pub async fn likes_counts(&self, comment_ids: &[i32]) -> Result<HashMap<i32, u64>, DbErr> {
        if comment_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let likes = entity::prelude::CommentLike::find()
            .filter(entity::comment_like::Column::CommentId.is_in(comment_ids.to_vec()))
            .all(self.db)
            .await?;

        let mut counts = HashMap::new();
        for like in likes {
            *counts.entry(like.comment_id).or_insert(0) += 1;
        }

        Ok(counts)
    }

    /// Gets which of the given comments a user has liked.
    pub async fn liked_comment_ids(
        &self,
        comment_ids: &[i32],
        user_id: i32,
    ) -> Result<HashSet<i32>, DbErr> {
        if comment_ids.is_empty() {
            return Ok(HashSet::new());
        }

        let likes = entity::prelude::CommentLike::find()
            .filter(entity::comment_like::Column::CommentId.is_in(comment_ids.to_vec()))
            .filter(entity::comment_like::Column::UserId.eq(user_id))
            .all(self.db)
            .await?;

        Ok(likes.into_iter().map(|l| l.comment_id).collect())
    }

    /// Hard deletes every comment on a blog along with their likes.
    ///
    /// Used when the parent blog is deleted.
    pub async fn delete_for_blog(&self, blog_id: i32) -> Result<(), DbErr> {
        let ids: Vec<i32> = entity::prelude::Comment::find()
            .select_only()
            .column(entity::comment::Column::Id)
            .filter(entity::comment::Column::BlogId.eq(blog_id))
            .into_tuple::<i32>()
            .all(self.db)
            .await?;

        if ids.is_empty() {
            return Ok(());
        }

        entity::prelude::CommentLike::delete_many()
            .filter(entity::comment_like::Column::CommentId.is_in(ids.clone()))
            .exec(self.db)
            .await?;

        entity::prelude::Comment::delete_many()
            .filter(entity::comment::Column::Id.is_in(ids))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Hard deletes a user's comments, replies under them, and all their likes.
    ///
    /// Used when an admin removes an account. Replies by other users lose
    /// their anchor, so they are removed as well.
    pub async fn delete_by_author(&self, author_id: i32) -> Result<(), DbErr> {
        let own_ids: Vec<i32> = entity::prelude::Comment::find()
            .select_only()
            .column(entity::comment::Column::Id)
            .filter(entity::comment::Column::AuthorId.eq(author_id))
            .into_tuple::<i32>()
            .all(self.db)
            .await?;

        if own_ids.is_empty() {
            return Ok(());
        }

        let reply_ids: Vec<i32> = entity::prelude::Comment::find()
            .select_only()
            .column(entity::comment::Column::Id)
            .filter(entity::comment::Column::ParentId.is_in(own_ids.clone()))
            .into_tuple::<i32>()
            .all(self.db)
            .await?;

        let mut all_ids = own_ids;
        all_ids.extend(reply_ids);

        entity::prelude::CommentLike::delete_many()
            .filter(entity::comment_like::Column::CommentId.is_in(all_ids.clone()))
            .exec(self.db)
            .await?;

        entity::prelude::Comment::delete_many()
            .filter(entity::comment::Column::Id.is_in(all_ids))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Deletes every comment like placed by a user.
    ///
    /// Used when an admin removes an account.
    pub async fn delete_likes_by_user(&self, user_id: i32) -> Result<(), DbErr> {
        entity::prelude::CommentLike::delete_many()
            .filter(entity::comment_like::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Counts all comments (soft-deleted rows included).
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Comment::find().count(self.db).await
    }

    /// Gets comments for the detailed stats listing, newest first.
    ///
    /// # Arguments
    /// - `page` - One-indexed page number
    /// - `per_page` - Page size
    ///
    /// # Returns
    /// - `Ok((comments, total))` - Comments for the page and total count
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::comment::Model>, u64), DbErr> {
        let paginator = entity::prelude::Comment::find()
            .order_by_desc(entity::comment::Column::CreatedAt)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let comments = paginator.fetch_page(page.saturating_sub(1)).await?;

        Ok((comments, total))
    }
}
