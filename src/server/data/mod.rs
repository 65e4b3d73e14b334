//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models and keep all query
//! construction in one place; business rules live in the service layer above.

pub mod blog;
pub mod comment;
pub mod follow;
pub mod user;

#[cfg(test)]
mod test;
