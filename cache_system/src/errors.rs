//! Error types for cache operations
//!
//! This module defines all error types that can occur
//! during cache operations and store interactions.

use thiserror::Error;

/// Cache system errors
#[derive(Error, Debug)]
pub enum CacheError {
    /// The distributed store could not be reached or timed out.
    ///
    /// Read-style operations never surface this variant to callers; it is
    /// logged where it occurs and the operation degrades to a miss.
    #[error("cache store unavailable: {0}")]
    StoreUnavailable(String),

    /// A value could not be encoded, or a cached payload could not be
    /// decoded as the requested type.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An empty key was passed where a non-empty key is required.
    #[error("invalid cache key: {0}")]
    InvalidKey(String),
}

impl CacheError {
    pub(crate) fn unavailable(err: impl std::fmt::Display) -> Self {
        CacheError::StoreUnavailable(err.to_string())
    }
}
