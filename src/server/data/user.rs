//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! It handles account creation, lookup by the various identity keys (id, email,
//! username, OAuth provider id), profile updates, and the admin management operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::user::{AdminUserQuery, CreateUserParams, Provider, UpdateProfileParams};

/// Repository providing database operations for user management.
///
/// This struct holds a reference to the database connection and provides methods
/// for creating, reading, updating, and querying user records.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user row.
    ///
    /// Timestamps and last_login are set to now. Role defaults to `user` and
    /// the account starts active.
    ///
    /// # Arguments
    /// - `params` - Account fields; password_hash is None for OAuth-only accounts
    ///
    /// # Returns
    /// - `Ok(Model)` - The created user
    /// - `Err(DbErr)` - Database error during insert (including unique violations)
    pub async fn create(&self, params: CreateUserParams) -> Result<entity::user::Model, DbErr> {
        let now = Utc::now();

        entity::user::ActiveModel {
            username: ActiveValue::Set(params.username),
            email: ActiveValue::Set(params.email),
            password_hash: ActiveValue::Set(params.password_hash),
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            avatar: ActiveValue::Set(params.avatar),
            bio: ActiveValue::Set(String::new()),
            role: ActiveValue::Set(entity::sea_orm_active_enums::UserRole::User),
            is_active: ActiveValue::Set(true),
            is_email_verified: ActiveValue::Set(params.is_email_verified),
            website: ActiveValue::Set(None),
            twitter: ActiveValue::Set(None),
            linkedin: ActiveValue::Set(None),
            github: ActiveValue::Set(None),
            google_id: ActiveValue::Set(params.google_id),
            facebook_id: ActiveValue::Set(params.facebook_id),
            last_login: ActiveValue::Set(now),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds a user by primary key.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id).one(self.db).await
    }

    /// Finds all users matching the given ids.
    ///
    /// # Arguments
    /// - `ids` - User ids to fetch (returns empty for an empty slice)
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - Users found (missing ids are silently skipped)
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<entity::user::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(ids.to_vec()))
            .all(self.db)
            .await
    }

    /// Finds a user by email (exact match, callers lowercase first).
    pub async fn find_by_email(&self, email: &str) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Finds a user by username.
    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await
    }

    /// Checks whether an email is already registered.
    pub async fn email_taken(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether a username is already taken.
    pub async fn username_taken(&self, username: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Finds a user by linked OAuth provider id.
    ///
    /// # Arguments
    /// - `provider` - Which provider column to match
    /// - `provider_id` - The provider's stable account id
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - A user has this provider id linked
    /// - `Ok(None)` - No linked account
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_provider(
        &self,
        provider: Provider,
        provider_id: &str,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        let column = match provider {
            Provider::Google => entity::user::Column::GoogleId,
            Provider::Facebook => entity::user::Column::FacebookId,
        };

        entity::prelude::User::find()
            .filter(column.eq(provider_id))
            .one(self.db)
            .await
    }

    /// Links an OAuth provider id to an existing account.
    ///
    /// Backfills the avatar from the provider when the account has none and
    /// marks the email verified (the provider vouched for it).
    ///
    /// # Arguments
    /// - `user` - The account to link
    /// - `provider` - Which provider column to set
    /// - `provider_id` - The provider's stable account id
    /// - `avatar` - Provider avatar URL, used only when the account has none
    ///
    /// # Returns
    /// - `Ok(Model)` - The updated user
    /// - `Err(DbErr)` - Database error during update
    pub async fn link_provider(
        &self,
        user: entity::user::Model,
        provider: Provider,
        provider_id: &str,
        avatar: Option<&str>,
    ) -> Result<entity::user::Model, DbErr> {
        let backfill_avatar = user.avatar.is_empty();
        let mut active: entity::user::ActiveModel = user.into();

        match provider {
            Provider::Google => {
                active.google_id = ActiveValue::Set(Some(provider_id.to_string()));
            }
            Provider::Facebook => {
                active.facebook_id = ActiveValue::Set(Some(provider_id.to_string()));
            }
        }

        if backfill_avatar {
            if let Some(avatar) = avatar {
                active.avatar = ActiveValue::Set(avatar.to_string());
            }
        }

        active.is_email_verified = ActiveValue::Set(true);
        active.updated_at = ActiveValue::Set(Utc::now());

        active.update(self.db).await
    }

    /// Sets last_login to now.
    pub async fn touch_last_login(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(id))
            .col_expr(
                entity::user::Column::LastLogin,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Updates profile fields on an account.
    ///
    /// `None` params are left untouched. Social link fields treat an empty
    /// string as clearing the link.
    ///
    /// # Arguments
    /// - `user` - The account to update
    /// - `params` - Profile field changes
    ///
    /// # Returns
    /// - `Ok(Model)` - The updated user
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_profile(
        &self,
        user: entity::user::Model,
        params: UpdateProfileParams,
    ) -> Result<entity::user::Model, DbErr> {
        let mut active: entity::user::ActiveModel = user.into();

        if let Some(first_name) = params.first_name {
            active.first_name = ActiveValue::Set(first_name);
        }
        if let Some(last_name) = params.last_name {
            active.last_name = ActiveValue::Set(last_name);
        }
        if let Some(bio) = params.bio {
            active.bio = ActiveValue::Set(bio);
        }
        if let Some(website) = params.website {
            active.website = ActiveValue::Set(non_empty(website));
        }
        if let Some(twitter) = params.twitter {
            active.twitter = ActiveValue::Set(non_empty(twitter));
        }
        if let Some(linkedin) = params.linkedin {
            active.linkedin = ActiveValue::Set(non_empty(linkedin));
        }
        if let Some(github) = params.github {
            active.github = ActiveValue::Set(non_empty(github));
        }
        if let Some(avatar) = params.avatar {
            active.avatar = ActiveValue::Set(avatar);
        }

        active.updated_at = ActiveValue::Set(Utc::now());

        active.update(self.db).await
    }

    /// Sets the role for a user.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The updated user
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_role(
        &self,
        id: i32,
        role: entity::sea_orm_active_enums::UserRole,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        let Some(user) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active: entity::user::ActiveModel = user.into();
        active.role = ActiveValue::Set(role);
        active.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(active.update(self.db).await?))
    }

    /// Sets the active flag for a user.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The updated user
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_active(
        &self,
        id: i32,
        is_active: bool,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        let Some(user) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active: entity::user::ActiveModel = user.into();
        active.is_active = ActiveValue::Set(is_active);
        active.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(active.update(self.db).await?))
    }

    /// Deletes a user row.
    ///
    /// Dependent rows (blogs, comments, likes, follows) are removed by the
    /// admin service before this is called.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::User::delete_by_id(id).exec(self.db).await?;
        Ok(())
    }

    /// Gets users for the admin listing with filters and pagination.
    ///
    /// Search matches a case-insensitive substring of username, email, first
    /// name, or last name. Results are newest first.
    ///
    /// # Arguments
    /// - `query` - Filters plus one-indexed page and page size
    ///
    /// # Returns
    /// - `Ok((users, total))` - Users for the requested page and total match count
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all_paginated(
        &self,
        query: &AdminUserQuery,
    ) -> Result<(Vec<entity::user::Model>, u64), DbErr> {
        let mut select =
            entity::prelude::User::find().order_by_desc(entity::user::Column::CreatedAt);

        if let Some(search) = &query.search {
            select = select.filter(
                Condition::any()
                    .add(entity::user::Column::Username.contains(search))
                    .add(entity::user::Column::Email.contains(search))
                    .add(entity::user::Column::FirstName.contains(search))
                    .add(entity::user::Column::LastName.contains(search)),
            );
        }
        if let Some(role) = &query.role {
            select = select.filter(entity::user::Column::Role.eq(role.clone()));
        }
        if let Some(is_active) = query.is_active {
            select = select.filter(entity::user::Column::IsActive.eq(is_active));
        }

        let paginator = select.paginate(self.db, query.per_page);
        let total = paginator.num_items().await?;
        let users = paginator.fetch_page(query.page.saturating_sub(1)).await?;

        Ok((users, total))
    }

    /// Counts all users.
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::User::find().count(self.db).await
    }

    /// Gets the most recently registered users.
    pub async fn recent(&self, limit: u64) -> Result<Vec<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .order_by_desc(entity::user::Column::CreatedAt)
            .limit(limit)
            .all(self.db)
            .await
    }
}

/// Maps an empty string to None for nullable social link columns.
fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}
