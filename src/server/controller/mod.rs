//! HTTP controllers.
//!
//! Controllers translate between HTTP (extractors, status codes, DTOs) and
//! the service layer. Access control happens here through the auth guard;
//! everything below works with already-authorized users.

pub mod admin;
pub mod auth;
pub mod blog;
pub mod comment;
pub mod form;
pub mod user;
