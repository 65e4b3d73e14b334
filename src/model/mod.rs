//! Wire DTOs shared by the HTTP API.
//!
//! These types define the JSON shapes returned by the API. Field names are
//! camelCase on the wire. Conversion from domain models happens at the
//! controller boundary.

pub mod admin;
pub mod api;
pub mod blog;
pub mod comment;
pub mod user;
