use super::*;
use test_utils::factory::create_user;

/// Tests that None fields are left untouched.
///
/// Expected: only the provided fields change
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    let original_last_name = user.last_name.clone();

    let repo = UserRepository::new(db);
    let updated = repo
        .update_profile(
            user,
            UpdateProfileParams {
                first_name: Some("Ada".to_string()),
                bio: Some("Hello".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.first_name, "Ada");
    assert_eq!(updated.bio, "Hello");
    assert_eq!(updated.last_name, original_last_name);

    Ok(())
}

/// Tests that an empty string clears a social link.
///
/// Expected: website set then cleared back to None
#[tokio::test]
async fn empty_string_clears_social_link() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update_profile(
            user,
            UpdateProfileParams {
                website: Some("https://example.com".to_string()),
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(updated.website.as_deref(), Some("https://example.com"));

    let updated = repo
        .update_profile(
            updated,
            UpdateProfileParams {
                website: Some(String::new()),
                ..Default::default()
            },
        )
        .await?;
    assert!(updated.website.is_none());

    Ok(())
}
