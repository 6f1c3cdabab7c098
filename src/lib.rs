//! # Bookhaus
//!
//! Shared infrastructure core for reservation platforms: typed distributed
//! cache-aside reads, ambient request correlation, and the uniform
//! data-access contracts domain services implement.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bookhaus::prelude::*;
//!
//! #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
//! struct ReservationStatus {
//!     id: u32,
//!     label: String,
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::load()?;
//!     let core = Bookhaus::new(config)?;
//!
//!     let statuses = CacheParams::new(core.cache(), 10, "reservation:status");
//!
//!     // Cache-aside: recompute on miss, serve from the store otherwise
//!     let status = statuses
//!         .manager
//!         .get_or_create(&statuses.key("42"), statuses.ttl_minutes, || async {
//!             ReservationStatus { id: 42, label: "Confirmed".to_string() }
//!         })
//!         .await?;
//!
//!     println!("status: {}", status.label);
//!     Ok(())
//! }
//! ```

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

pub mod core;
pub mod errors;
pub mod prelude;

// Re-export the main public types for convenience
pub use core::Bookhaus;
pub use errors::BookhausError;

// Re-export centralized config
pub use config::{AppConfig, CacheConfig, ConfigError, CorrelationConfig};

// Re-export internal crates used by the public API
pub use cache_system;
pub use request_context;
pub use store_object;

// Re-export external dependencies used in public API
pub use async_trait;
pub use tokio;
