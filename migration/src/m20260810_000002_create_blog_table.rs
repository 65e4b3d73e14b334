use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260810_000001_create_user_table::User;

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Blog::Table)
                    .if_not_exists()
                    .col(pk_auto(Blog::Id))
                    .col(string_len(Blog::Title, 100))
                    .col(string_uniq(Blog::Slug))
                    .col(text(Blog::Content))
                    .col(string_len(Blog::Excerpt, 300).default(""))
                    .col(string(Blog::FeaturedImage).default(""))
                    .col(integer(Blog::AuthorId))
                    .col(string_len(Blog::Category, 20))
                    .col(string_len(Blog::Status, 20).default("draft"))
                    .col(big_integer(Blog::Views).default(0))
                    .col(integer(Blog::ReadTime).default(1))
                    .col(timestamp_with_time_zone_null(Blog::PublishedAt))
                    .col(timestamp_with_time_zone(Blog::CreatedAt))
                    .col(timestamp_with_time_zone(Blog::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_blog_author")
                            .from(Blog::Table, Blog::AuthorId)
                            .to(User::Table, User::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_blog_author_created_at")
                    .table(Blog::Table)
                    .col(Blog::AuthorId)
                    .col(Blog::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_blog_category_status")
                    .table(Blog::Table)
                    .col(Blog::Category)
                    .col(Blog::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Blog::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum Blog {
    Table,
    Id,
    Title,
    Slug,
    Content,
    Excerpt,
    FeaturedImage,
    AuthorId,
    Category,
    Status,
    Views,
    ReadTime,
    PublishedAt,
    CreatedAt,
    UpdatedAt,
}
