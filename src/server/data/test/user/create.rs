use super::*;

/// Tests inserting a local-password account.
///
/// Expected: Ok(Model) with defaults applied (user role, active, empty bio)
#[tokio::test]
async fn creates_user_with_defaults() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    let user = repo.create(user_params("alice", "alice@example.com")).await?;

    assert_eq!(user.username, "alice");
    assert_eq!(user.email, "alice@example.com");
    assert_eq!(user.role, entity::sea_orm_active_enums::UserRole::User);
    assert!(user.is_active);
    assert!(user.bio.is_empty());

    Ok(())
}

/// Tests that a duplicate email is rejected by the unique index.
///
/// Expected: Err(DbErr) on the second insert
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    repo.create(user_params("alice", "alice@example.com")).await?;
    let result = repo.create(user_params("bob", "alice@example.com")).await;

    assert!(result.is_err());

    Ok(())
}
