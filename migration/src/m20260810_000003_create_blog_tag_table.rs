use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260810_000002_create_blog_table::Blog;

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BlogTag::Table)
                    .if_not_exists()
                    .col(pk_auto(BlogTag::Id))
                    .col(integer(BlogTag::BlogId))
                    .col(string(BlogTag::Tag))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_blog_tag_blog")
                            .from(BlogTag::Table, BlogTag::BlogId)
                            .to(Blog::Table, Blog::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_blog_tag_tag")
                    .table(BlogTag::Table)
                    .col(BlogTag::Tag)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BlogTag::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum BlogTag {
    Table,
    Id,
    BlogId,
    Tag,
}
