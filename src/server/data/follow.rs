//! Follow graph repository for database operations.
//!
//! This module provides the `FollowRepository` for managing follower
//! relationships between users.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

/// Repository providing database operations for the follow graph.
pub struct FollowRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FollowRepository<'a> {
    /// Creates a new FollowRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `FollowRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Toggles a follow edge between two users.
    ///
    /// Self-follow prevention is enforced by the user service.
    ///
    /// # Arguments
    /// - `follower_id` - The acting user
    /// - `following_id` - The user being followed or unfollowed
    ///
    /// # Returns
    /// - `Ok(true)` - Follow edge was added
    /// - `Ok(false)` - Existing edge was removed
    /// - `Err(DbErr)` - Database error during toggle
    pub async fn toggle(&self, follower_id: i32, following_id: i32) -> Result<bool, DbErr> {
        let existing = entity::prelude::Follow::find()
            .filter(entity::follow::Column::FollowerId.eq(follower_id))
            .filter(entity::follow::Column::FollowingId.eq(following_id))
            .one(self.db)
            .await?;

        match existing {
            Some(edge) => {
                entity::prelude::Follow::delete_by_id(edge.id)
                    .exec(self.db)
                    .await?;
                Ok(false)
            }
            None => {
                entity::follow::ActiveModel {
                    follower_id: ActiveValue::Set(follower_id),
                    following_id: ActiveValue::Set(following_id),
                    created_at: ActiveValue::Set(Utc::now()),
                    ..Default::default()
                }
                .insert(self.db)
                .await?;
                Ok(true)
            }
        }
    }

    /// Checks whether one user follows another.
    pub async fn is_following(&self, follower_id: i32, following_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Follow::find()
            .filter(entity::follow::Column::FollowerId.eq(follower_id))
            .filter(entity::follow::Column::FollowingId.eq(following_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Counts a user's followers.
    pub async fn followers_count(&self, user_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Follow::find()
            .filter(entity::follow::Column::FollowingId.eq(user_id))
            .count(self.db)
            .await
    }

    /// Counts how many users a user follows.
    pub async fn following_count(&self, user_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Follow::find()
            .filter(entity::follow::Column::FollowerId.eq(user_id))
            .count(self.db)
            .await
    }

    /// Gets the users following the given user.
    ///
    /// # Arguments
    /// - `user_id` - The user whose followers to list
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - Follower accounts
    /// - `Err(DbErr)` - Database error during query
    pub async fn followers(&self, user_id: i32) -> Result<Vec<entity::user::Model>, DbErr> {
        let edges = entity::prelude::Follow::find()
            .filter(entity::follow::Column::FollowingId.eq(user_id))
            .all(self.db)
            .await?;

        let follower_ids: Vec<i32> = edges.into_iter().map(|e| e.follower_id).collect();

        if follower_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(follower_ids))
            .all(self.db)
            .await
    }

    /// Gets the users the given user follows.
    ///
    /// # Arguments
    /// - `user_id` - The user whose following list to fetch
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - Followed accounts
    /// - `Err(DbErr)` - Database error during query
    pub async fn following(&self, user_id: i32) -> Result<Vec<entity::user::Model>, DbErr> {
        let edges = entity::prelude::Follow::find()
            .filter(entity::follow::Column::FollowerId.eq(user_id))
            .all(self.db)
            .await?;

        let following_ids: Vec<i32> = edges.into_iter().map(|e| e.following_id).collect();

        if following_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(following_ids))
            .all(self.db)
            .await
    }

    /// Removes every follow edge touching a user.
    ///
    /// Used when an admin removes an account.
    pub async fn delete_for_user(&self, user_id: i32) -> Result<(), DbErr> {
        entity::prelude::Follow::delete_many()
            .filter(
                Condition::any()
                    .add(entity::follow::Column::FollowerId.eq(user_id))
                    .add(entity::follow::Column::FollowingId.eq(user_id)),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }
}
