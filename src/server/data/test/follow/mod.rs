use crate::server::data::follow::FollowRepository;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory::create_user;

mod delete_for_user;
mod followers;
mod toggle;

async fn follow_context() -> test_utils::context::TestContext {
    TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Follow)
        .build()
        .await
        .unwrap()
}
