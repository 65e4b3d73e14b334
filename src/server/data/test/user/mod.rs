use crate::server::{
    data::user::UserRepository,
    model::user::{AdminUserQuery, CreateUserParams, Provider, UpdateProfileParams},
};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod create;
mod find_by_provider;
mod get_all_paginated;
mod link_provider;
mod update_profile;

/// Default params for inserting a user through the repository.
fn user_params(username: &str, email: &str) -> CreateUserParams {
    CreateUserParams {
        username: username.to_string(),
        email: email.to_string(),
        password_hash: Some("hash".to_string()),
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
        avatar: String::new(),
        google_id: None,
        facebook_id: None,
        is_email_verified: false,
    }
}
