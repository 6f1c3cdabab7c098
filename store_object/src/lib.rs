//! Store Object - Data-access contracts for Bookhaus
//!
//! This crate provides the value types and traits domain services build
//! their data access on: the uniform base entity shape, the repository
//! contract, and the pagination specification list queries consume.

pub mod entity;
pub mod errors;
pub mod pagination;
pub mod prelude;
pub mod repository;

pub use entity::{BaseFields, Entity};
pub use errors::StoreError;
pub use pagination::Pagination;
pub use repository::Repository;
