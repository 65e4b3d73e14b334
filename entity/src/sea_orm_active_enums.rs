use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Access level of a user account.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[sea_orm(string_value = "user")]
    User,
    #[sea_orm(string_value = "admin")]
    Admin,
    #[sea_orm(string_value = "moderator")]
    Moderator,
}

/// Publication state of a blog post.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "lowercase")]
pub enum BlogStatus {
    #[sea_orm(string_value = "draft")]
    Draft,
    #[sea_orm(string_value = "published")]
    Published,
    #[sea_orm(string_value = "archived")]
    Archived,
}

/// Closed set of blog categories.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum BlogCategory {
    #[sea_orm(string_value = "Technology")]
    Technology,
    #[sea_orm(string_value = "Lifestyle")]
    Lifestyle,
    #[sea_orm(string_value = "Travel")]
    Travel,
    #[sea_orm(string_value = "Food")]
    Food,
    #[sea_orm(string_value = "Health")]
    Health,
    #[sea_orm(string_value = "Business")]
    Business,
    #[sea_orm(string_value = "Education")]
    Education,
    #[sea_orm(string_value = "Entertainment")]
    Entertainment,
    #[sea_orm(string_value = "Sports")]
    Sports,
    #[sea_orm(string_value = "Other")]
    Other,
}
