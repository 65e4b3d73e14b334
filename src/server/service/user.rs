//! User profile and follow graph business logic.

use entity::sea_orm_active_enums::BlogStatus;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{blog::BlogRepository, follow::FollowRepository, user::UserRepository},
    error::AppError,
    model::user::{ProfileStats, PublicProfile, UpdateProfileParams},
    service::blog::BlogService,
};

/// Number of latest published blogs shown on a public profile.
const PROFILE_BLOG_LIMIT: u64 = 10;

/// Service handling profiles and the follow graph.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Assembles a public profile by username.
    ///
    /// Includes follow lists, the author's latest published blogs, and
    /// aggregate publishing stats. Draft blogs never appear here, even for
    /// the profile owner.
    ///
    /// # Arguments
    /// - `username` - Profile owner's username
    /// - `viewer_id` - Requesting user for is_liked flags, if authenticated
    ///
    /// # Returns
    /// - `Ok(PublicProfile)` - The assembled profile
    /// - `Err(AppError::NotFound)` - No user with that username
    pub async fn public_profile(
        &self,
        username: &str,
        viewer_id: Option<i32>,
    ) -> Result<PublicProfile, AppError> {
        let user_repository = UserRepository::new(self.db);
        let follow_repository = FollowRepository::new(self.db);
        let blog_repository = BlogRepository::new(self.db);

        let user = user_repository
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let followers = follow_repository.followers(user.id).await?;
        let following = follow_repository.following(user.id).await?;

        let (blogs, _) = blog_repository
            .get_by_author(user.id, Some(BlogStatus::Published), 1, PROFILE_BLOG_LIMIT)
            .await?;
        let blogs = BlogService::new(self.db)
            .assemble_many(blogs, viewer_id)
            .await?;

        let (total_blogs, total_views, total_likes) =
            blog_repository.author_stats(user.id).await?;

        Ok(PublicProfile {
            user,
            followers,
            following,
            blogs,
            stats: ProfileStats {
                total_blogs,
                total_views,
                total_likes,
            },
        })
    }

    /// Updates the authenticated user's profile fields.
    pub async fn update_profile(
        &self,
        user: entity::user::Model,
        params: UpdateProfileParams,
    ) -> Result<entity::user::Model, AppError> {
        let updated = UserRepository::new(self.db)
            .update_profile(user, params)
            .await?;

        Ok(updated)
    }

    /// Toggles a follow edge from the acting user to a target.
    ///
    /// # Arguments
    /// - `user_id` - The acting user
    /// - `target_id` - The user being followed or unfollowed
    ///
    /// # Returns
    /// - `Ok((is_following, followers_count))` - New state and the target's follower total
    /// - `Err(AppError::NotFound)` - Target does not exist
    /// - `Err(AppError::BadRequest)` - Attempted self-follow
    pub async fn toggle_follow(
        &self,
        user_id: i32,
        target_id: i32,
    ) -> Result<(bool, u64), AppError> {
        if user_id == target_id {
            return Err(AppError::BadRequest(
                "You cannot follow yourself".to_string(),
            ));
        }

        let user_repository = UserRepository::new(self.db);
        let follow_repository = FollowRepository::new(self.db);

        if user_repository.find_by_id(target_id).await?.is_none() {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        let is_following = follow_repository.toggle(user_id, target_id).await?;
        let followers_count = follow_repository.followers_count(target_id).await?;

        Ok((is_following, followers_count))
    }

    /// Lists the users following the given user.
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - Follower accounts
    /// - `Err(AppError::NotFound)` - Target does not exist
    pub async fn followers(&self, user_id: i32) -> Result<Vec<entity::user::Model>, AppError> {
        self.require_user(user_id).await?;

        let followers = FollowRepository::new(self.db).followers(user_id).await?;

        Ok(followers)
    }

    /// Lists the users the given user follows.
    pub async fn following(&self, user_id: i32) -> Result<Vec<entity::user::Model>, AppError> {
        self.require_user(user_id).await?;

        let following = FollowRepository::new(self.db).following(user_id).await?;

        Ok(following)
    }

    async fn require_user(&self, user_id: i32) -> Result<(), AppError> {
        if UserRepository::new(self.db).find_by_id(user_id).await?.is_none() {
            return Err(AppError::NotFound("User not found".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use entity::prelude::*;
    use test_utils::{
        builder::TestBuilder,
        error::TestError,
        factory::{blog::BlogFactory, create_published_blog, create_user},
    };

    #[tokio::test]
    async fn follow_toggle_is_an_involution() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_table(User)
            .with_table(Follow)
            .build()
            .await?;
        let db = test.db.as_ref().unwrap();
        let service = UserService::new(db);

        let alice = create_user(db).await?;
        let bob = create_user(db).await?;

        let (following, count) = service.toggle_follow(alice.id, bob.id).await.unwrap();
        assert!(following);
        assert_eq!(count, 1);

        let (following, count) = service.toggle_follow(alice.id, bob.id).await.unwrap();
        assert!(!following);
        assert_eq!(count, 0);

        Ok(())
    }

    #[tokio::test]
    async fn rejects_self_follow() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_table(User)
            .with_table(Follow)
            .build()
            .await?;
        let db = test.db.as_ref().unwrap();
        let service = UserService::new(db);

        let alice = create_user(db).await?;

        let result = service.toggle_follow(alice.id, alice.id).await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));

        Ok(())
    }

    #[tokio::test]
    async fn rejects_follow_of_missing_user() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_table(User)
            .with_table(Follow)
            .build()
            .await?;
        let db = test.db.as_ref().unwrap();
        let service = UserService::new(db);

        let alice = create_user(db).await?;

        let result = service.toggle_follow(alice.id, 9999).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));

        Ok(())
    }

    #[tokio::test]
    async fn public_profile_lists_only_published_blogs() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_comment_tables()
            .with_table(Follow)
            .build()
            .await?;
        let db = test.db.as_ref().unwrap();
        let service = UserService::new(db);

        let author = create_user(db).await?;
        create_published_blog(db, author.id).await?;
        BlogFactory::new(db, author.id).build().await?;

        let profile = service
            .public_profile(&author.username, None)
            .await
            .unwrap();

        assert_eq!(profile.blogs.len(), 1);
        assert_eq!(profile.stats.total_blogs, 1);

        Ok(())
    }

    #[tokio::test]
    async fn missing_profile_returns_not_found() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_comment_tables()
            .with_table(Follow)
            .build()
            .await?;
        let db = test.db.as_ref().unwrap();
        let service = UserService::new(db);

        let result = service.public_profile("ghost", None).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));

        Ok(())
    }
}
