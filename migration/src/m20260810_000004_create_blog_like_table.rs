use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260810_000001_create_user_table::User, m20260810_000002_create_blog_table::Blog,
};

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BlogLike::Table)
                    .if_not_exists()
                    .col(pk_auto(BlogLike::Id))
                    .col(integer(BlogLike::BlogId))
                    .col(integer(BlogLike::UserId))
                    .col(timestamp_with_time_zone(BlogLike::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_blog_like_blog")
                            .from(BlogLike::Table, BlogLike::BlogId)
                            .to(Blog::Table, Blog::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_blog_like_user")
                            .from(BlogLike::Table, BlogLike::UserId)
                            .to(User::Table, User::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_blog_like_unique")
                    .table(BlogLike::Table)
                    .col(BlogLike::BlogId)
                    .col(BlogLike::UserId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BlogLike::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum BlogLike {
    Table,
    Id,
    BlogId,
    UserId,
    CreatedAt,
}
