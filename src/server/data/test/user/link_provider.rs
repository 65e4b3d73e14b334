use super::*;
use test_utils::factory::create_user;

/// Tests linking a Facebook id to an existing account.
///
/// Expected: Ok(Model) with the provider id set and email marked verified
#[tokio::test]
async fn links_provider_and_verifies_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    assert!(!user.is_email_verified);

    let repo = UserRepository::new(db);
    let linked = repo
        .link_provider(user, Provider::Facebook, "fb-42", None)
        .await?;

    assert_eq!(linked.facebook_id.as_deref(), Some("fb-42"));
    assert!(linked.is_email_verified);

    Ok(())
}

/// Tests that the provider avatar backfills an empty avatar only.
///
/// Expected: empty avatar replaced, existing avatar preserved
#[tokio::test]
async fn backfills_avatar_only_when_empty() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    let user = create_user(db).await?;
    let linked = repo
        .link_provider(user, Provider::Google, "g-1", Some("http://img/a.png"))
        .await?;
    assert_eq!(linked.avatar, "http://img/a.png");

    let other = create_user(db).await?;
    let other = repo
        .update_profile(
            other,
            UpdateProfileParams {
                avatar: Some("http://img/custom.png".to_string()),
                ..Default::default()
            },
        )
        .await?;
    let linked = repo
        .link_provider(other, Provider::Google, "g-2", Some("http://img/b.png"))
        .await?;
    assert_eq!(linked.avatar, "http://img/custom.png");

    Ok(())
}
