use entity::{prelude::*, sea_orm_active_enums::UserRole};
use test_utils::{
    builder::TestBuilder,
    error::TestError,
    factory::{create_admin, create_user},
};

use super::{bearer_headers, tokens};
use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::AuthGuard,
};

#[tokio::test]
async fn admin_passes_admin_gate() -> Result<(), TestError> {
    let test = TestBuilder::new().with_table(User).build().await?;
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let admin = create_admin(db).await?;
    let headers = bearer_headers(&tokens.issue(admin.id).unwrap());

    let resolved = AuthGuard::new(db, &tokens, &headers)
        .require_role(&[UserRole::Admin])
        .await
        .unwrap();

    assert_eq!(resolved.id, admin.id);

    Ok(())
}

#[tokio::test]
async fn regular_user_fails_admin_gate() -> Result<(), TestError> {
    let test = TestBuilder::new().with_table(User).build().await?;
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let user = create_user(db).await?;
    let headers = bearer_headers(&tokens.issue(user.id).unwrap());

    let result = AuthGuard::new(db, &tokens, &headers)
        .require_role(&[UserRole::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

#[tokio::test]
async fn gate_accepts_any_listed_role() -> Result<(), TestError> {
    let test = TestBuilder::new().with_table(User).build().await?;
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let user = create_user(db).await?;
    let headers = bearer_headers(&tokens.issue(user.id).unwrap());

    let resolved = AuthGuard::new(db, &tokens, &headers)
        .require_role(&[UserRole::Admin, UserRole::User])
        .await
        .unwrap();

    assert_eq!(resolved.id, user.id);

    Ok(())
}
