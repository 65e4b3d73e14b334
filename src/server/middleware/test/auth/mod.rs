mod optional;
mod require;
mod require_role;

use axum::http::{header, HeaderMap};
use chrono::Duration;

use crate::server::service::auth::token::TokenService;

fn tokens() -> TokenService {
    TokenService::new("test-secret", Duration::days(1))
}

fn bearer_headers(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::AUTHORIZATION,
        format!("Bearer {}", token).parse().unwrap(),
    );
    headers
}
