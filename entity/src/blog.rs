use sea_orm::entity::prelude::*;

use crate::sea_orm_active_enums::{BlogCategory, BlogStatus};

/// Blog post. `slug` is assigned once at creation and never changes;
/// `published_at` is set on the first transition to `Published` and kept.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "blog")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(unique)]
    pub slug: String,
    pub content: String,
    pub excerpt: String,
    pub featured_image: String,
    pub author_id: i32,
    pub category: BlogCategory,
    pub status: BlogStatus,
    pub views: i64,
    pub read_time: i32,
    pub published_at: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::AuthorId",
        to = "super::user::Column::Id"
    )]
    User,
    #[sea_orm(has_many = "super::comment::Entity")]
    Comment,
    #[sea_orm(has_many = "super::blog_like::Entity")]
    BlogLike,
    #[sea_orm(has_many = "super::blog_tag::Entity")]
    BlogTag,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comment.def()
    }
}

impl Related<super::blog_like::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BlogLike.def()
    }
}

impl Related<super::blog_tag::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BlogTag.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
