//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business aggregates and operation parameters. Aggregates combine entity models with
//! assembled metadata (authors, tags, like counts) and are transformed to DTOs at the
//! controller boundary.

pub mod admin;
pub mod blog;
pub mod comment;
pub mod user;
