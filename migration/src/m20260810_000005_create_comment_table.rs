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
                    .table(Comment::Table)
                    .if_not_exists()
                    .col(pk_auto(Comment::Id))
                    .col(string_len(Comment::Content, 1000))
                    .col(integer(Comment::AuthorId))
                    .col(integer(Comment::BlogId))
                    .col(integer_null(Comment::ParentId))
                    .col(boolean(Comment::IsEdited).default(false))
                    .col(timestamp_with_time_zone_null(Comment::EditedAt))
                    .col(boolean(Comment::IsActive).default(true))
                    .col(timestamp_with_time_zone(Comment::CreatedAt))
                    .col(timestamp_with_time_zone(Comment::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comment_author")
                            .from(Comment::Table, Comment::AuthorId)
                            .to(User::Table, User::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comment_blog")
                            .from(Comment::Table, Comment::BlogId)
                            .to(Blog::Table, Blog::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comment_parent")
                            .from(Comment::Table, Comment::ParentId)
                            .to(Comment::Table, Comment::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_comment_blog_created_at")
                    .table(Comment::Table)
                    .col(Comment::BlogId)
                    .col(Comment::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Comment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum Comment {
    Table,
    Id,
    Content,
    AuthorId,
    BlogId,
    ParentId,
    IsEdited,
    EditedAt,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
