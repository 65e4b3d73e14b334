use super::*;
use test_utils::factory::user::UserFactory;

/// Tests finding a user by linked Google id.
///
/// Expected: Ok(Some(Model)) for the linked account
#[tokio::test]
async fn finds_user_by_google_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db).google_id("g-123").build().await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_provider(Provider::Google, "g-123").await?;

    assert_eq!(found.map(|u| u.id), Some(user.id));

    Ok(())
}

/// Tests that provider columns do not match across providers.
///
/// Expected: Ok(None) when the id is linked under the other provider
#[tokio::test]
async fn does_not_match_other_provider() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db).google_id("shared-id").build().await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_provider(Provider::Facebook, "shared-id").await?;

    assert!(found.is_none());

    Ok(())
}
