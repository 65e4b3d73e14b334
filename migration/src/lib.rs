pub use sea_orm_migration::prelude::*;

mod m20260810_000001_create_user_table;
mod m20260810_000002_create_blog_table;
mod m20260810_000003_create_blog_tag_table;
mod m20260810_000004_create_blog_like_table;
mod m20260810_000005_create_comment_table;
mod m20260810_000006_create_comment_like_table;
mod m20260810_000007_create_follow_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260810_000001_create_user_table::Migration),
            Box::new(m20260810_000002_create_blog_table::Migration),
            Box::new(m20260810_000003_create_blog_tag_table::Migration),
            Box::new(m20260810_000004_create_blog_like_table::Migration),
            Box::new(m20260810_000005_create_comment_table::Migration),
            Box::new(m20260810_000006_create_comment_like_table::Migration),
            Box::new(m20260810_000007_create_follow_table::Migration),
        ]
    }
}
