//! Business logic services for the blogging platform.
//!
//! Services sit between the HTTP controllers and the data repositories. They
//! own validation, access rules, and multi-repository assembly; controllers
//! only translate between HTTP and service calls.

pub mod admin;
pub mod auth;
pub mod blog;
pub mod comment;
pub mod oauth;
pub mod upload;
pub mod user;
