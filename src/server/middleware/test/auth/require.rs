use axum::http::HeaderMap;
use chrono::Duration;
use entity::prelude::*;
use test_utils::{builder::TestBuilder, error::TestError, factory::user::UserFactory};

use super::{bearer_headers, tokens};
use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::AuthGuard,
    service::auth::token::TokenService,
};

#[tokio::test]
async fn resolves_valid_token_to_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_table(User).build().await?;
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let user = UserFactory::new(db).build().await?;
    let headers = bearer_headers(&tokens.issue(user.id).unwrap());

    let resolved = AuthGuard::new(db, &tokens, &headers).require().await.unwrap();

    assert_eq!(resolved.id, user.id);

    Ok(())
}

#[tokio::test]
async fn rejects_missing_header() -> Result<(), TestError> {
    let test = TestBuilder::new().with_table(User).build().await?;
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();
    let headers = HeaderMap::new();

    let result = AuthGuard::new(db, &tokens, &headers).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

#[tokio::test]
async fn rejects_expired_token() -> Result<(), TestError> {
    let test = TestBuilder::new().with_table(User).build().await?;
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();
    let expired = TokenService::new("test-secret", Duration::minutes(-5));

    let user = UserFactory::new(db).build().await?;
    let headers = bearer_headers(&expired.issue(user.id).unwrap());

    let result = AuthGuard::new(db, &tokens, &headers).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::TokenExpired))
    ));

    Ok(())
}

#[tokio::test]
async fn rejects_token_for_deleted_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_table(User).build().await?;
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();
    let headers = bearer_headers(&tokens.issue(9999).unwrap());

    let result = AuthGuard::new(db, &tokens, &headers).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(9999)))
    ));

    Ok(())
}

#[tokio::test]
async fn rejects_deactivated_account() -> Result<(), TestError> {
    let test = TestBuilder::new().with_table(User).build().await?;
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let user = UserFactory::new(db).active(false).build().await?;
    let headers = bearer_headers(&tokens.issue(user.id).unwrap());

    let result = AuthGuard::new(db, &tokens, &headers).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccountDeactivated(_)))
    ));

    Ok(())
}
