//! Convenience re-exports for common store-object usage

pub use crate::entity::{BaseFields, Entity};
pub use crate::errors::StoreError;
pub use crate::pagination::Pagination;
pub use crate::repository::Repository;

// Common external dependencies
pub use async_trait::async_trait;
pub use chrono::{DateTime, Utc};
pub use uuid::Uuid;
