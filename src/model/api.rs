use serde::{Deserialize, Serialize};

/// Error response body returned by all failing endpoints.
#[derive(Serialize, Deserialize)]
pub struct ErrorDto {
    pub success: bool,
    pub message: String,
}

impl ErrorDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Plain success response carrying only a message.
#[derive(Serialize, Deserialize)]
pub struct MessageDto {
    pub success: bool,
    pub message: String,
}

impl MessageDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// Pagination metadata for blog listings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BlogPaginationDto {
    pub current_page: u64,
    pub total_pages: u64,
    pub total_blogs: u64,
    pub has_next: bool,
    pub has_prev: bool,
}

/// Pagination metadata for user listings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserPaginationDto {
    pub current_page: u64,
    pub total_pages: u64,
    pub total_users: u64,
    pub has_next: bool,
    pub has_prev: bool,
}

/// Generic pagination metadata for mixed admin listings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaginationDto {
    pub current_page: u64,
    pub total_pages: u64,
    pub total: u64,
    pub has_next: bool,
    pub has_prev: bool,
}
