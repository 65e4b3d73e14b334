use super::*;
use entity::sea_orm_active_enums::UserRole;
use test_utils::factory::user::UserFactory;
use test_utils::factory::{create_admin, create_user};

fn query() -> AdminUserQuery {
    AdminUserQuery {
        search: None,
        role: None,
        is_active: None,
        page: 1,
        per_page: 10,
    }
}

/// Tests role and status filters.
///
/// Expected: only matching accounts in the page, total reflects filters
#[tokio::test]
async fn filters_by_role_and_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    create_user(db).await?;
    let admin = create_admin(db).await?;
    UserFactory::new(db).active(false).build().await?;

    let repo = UserRepository::new(db);

    let (users, total) = repo
        .get_all_paginated(&AdminUserQuery {
            role: Some(UserRole::Admin),
            ..query()
        })
        .await?;
    assert_eq!(total, 1);
    assert_eq!(users[0].id, admin.id);

    let (_, total) = repo
        .get_all_paginated(&AdminUserQuery {
            is_active: Some(false),
            ..query()
        })
        .await?;
    assert_eq!(total, 1);

    Ok(())
}

/// Tests substring search across username and email.
///
/// Expected: matches by username or email, case handled by the collation
#[tokio::test]
async fn searches_username_and_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db)
        .username("searchable")
        .email("findme@example.com")
        .build()
        .await?;
    create_user(db).await?;

    let repo = UserRepository::new(db);

    let (users, total) = repo
        .get_all_paginated(&AdminUserQuery {
            search: Some("searchable".to_string()),
            ..query()
        })
        .await?;
    assert_eq!(total, 1);
    assert_eq!(users[0].username, "searchable");

    let (_, total) = repo
        .get_all_paginated(&AdminUserQuery {
            search: Some("findme".to_string()),
            ..query()
        })
        .await?;
    assert_eq!(total, 1);

    Ok(())
}

/// Tests one-indexed pagination.
///
/// Expected: second page holds the remainder
#[tokio::test]
async fn paginates_one_indexed() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..5 {
        create_user(db).await?;
    }

    let repo = UserRepository::new(db);

    let (users, total) = repo
        .get_all_paginated(&AdminUserQuery {
            page: 2,
            per_page: 3,
            ..query()
        })
        .await?;

    assert_eq!(total, 5);
    assert_eq!(users.len(), 2);

    Ok(())
}
