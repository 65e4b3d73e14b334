use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_auto(User::Id))
                    .col(string_uniq(User::Username))
                    .col(string_uniq(User::Email))
                    .col(string_null(User::PasswordHash))
                    .col(string(User::FirstName))
                    .col(string(User::LastName))
                    .col(string(User::Avatar).default(""))
                    .col(string(User::Bio).default(""))
                    .col(string_len(User::Role, 20).default("user"))
                    .col(boolean(User::IsActive).default(true))
                    .col(boolean(User::IsEmailVerified).default(false))
                    .col(string_null(User::Website))
                    .col(string_null(User::Twitter))
                    .col(string_null(User::Linkedin))
                    .col(string_null(User::Github))
                    .col(string_null(User::GoogleId))
                    .col(string_null(User::FacebookId))
                    .col(timestamp_with_time_zone(User::LastLogin))
                    .col(timestamp_with_time_zone(User::CreatedAt))
                    .col(timestamp_with_time_zone(User::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum User {
    Table,
    Id,
    Username,
    Email,
    PasswordHash,
    FirstName,
    LastName,
    Avatar,
    Bio,
    Role,
    IsActive,
    IsEmailVerified,
    Website,
    Twitter,
    Linkedin,
    Github,
    GoogleId,
    FacebookId,
    LastLogin,
    CreatedAt,
    UpdatedAt,
}
