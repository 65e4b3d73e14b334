use axum::http::HeaderMap;
use entity::prelude::*;
use test_utils::{builder::TestBuilder, error::TestError, factory::user::UserFactory};

use super::{bearer_headers, tokens};
use crate::server::middleware::auth::AuthGuard;

#[tokio::test]
async fn yields_user_for_valid_token() -> Result<(), TestError> {
    let test = TestBuilder::new().with_table(User).build().await?;
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let user = UserFactory::new(db).build().await?;
    let headers = bearer_headers(&tokens.issue(user.id).unwrap());

    let resolved = AuthGuard::new(db, &tokens, &headers)
        .optional()
        .await
        .unwrap();

    assert_eq!(resolved.map(|u| u.id), Some(user.id));

    Ok(())
}

#[tokio::test]
async fn yields_none_without_header() -> Result<(), TestError> {
    let test = TestBuilder::new().with_table(User).build().await?;
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();
    let headers = HeaderMap::new();

    let resolved = AuthGuard::new(db, &tokens, &headers)
        .optional()
        .await
        .unwrap();

    assert!(resolved.is_none());

    Ok(())
}

#[tokio::test]
async fn yields_none_for_garbage_token() -> Result<(), TestError> {
    let test = TestBuilder::new().with_table(User).build().await?;
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();
    let headers = bearer_headers("garbage");

    let resolved = AuthGuard::new(db, &tokens, &headers)
        .optional()
        .await
        .unwrap();

    assert!(resolved.is_none());

    Ok(())
}

#[tokio::test]
async fn yields_none_for_deactivated_account() -> Result<(), TestError> {
    let test = TestBuilder::new().with_table(User).build().await?;
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let user = UserFactory::new(db).active(false).build().await?;
    let headers = bearer_headers(&tokens.issue(user.id).unwrap());

    let resolved = AuthGuard::new(db, &tokens, &headers)
        .optional()
        .await
        .unwrap();

    assert!(resolved.is_none());

    Ok(())
}
