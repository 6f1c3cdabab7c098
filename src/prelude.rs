//! Convenience re-exports for common Bookhaus usage
//!
//! This prelude module re-exports the most commonly used items from the Bookhaus ecosystem,
//! making it easier to import everything you need with a single use statement.
//!
//! # Example
//!
//! ```rust
//! use bookhaus::prelude::*;
//!
//! // Now you have access to all the common Bookhaus types and traits
//! ```

// Core Bookhaus components
pub use crate::core::Bookhaus;
pub use crate::errors::BookhausError;

// Re-export centralized config
pub use config::{AppConfig, CacheConfig, ConfigError, CorrelationConfig};

// Re-export commonly used store-object types for convenience
pub use store_object::prelude::*;

// Re-export the cache system
pub use cache_system::prelude::*;

// Re-export request correlation
pub use request_context::{
    CorrelationContext, DEFAULT_CORRELATION_HEADER, scope, spawn, try_current,
};

// Common external dependencies
pub use anyhow;
pub use async_trait;
pub use tokio;
