//! Ambient request-correlation propagation
//!
//! This crate carries a per-logical-request correlation identifier through
//! arbitrarily deep asynchronous call chains without explicit parameter
//! threading. Transport middleware creates a [`CorrelationContext`] from the
//! inbound request's correlation header and runs the request's handler
//! inside [`scope`]; everything downstream reads it with [`try_current`].

pub mod context;
pub mod errors;

// Re-export centralized config
pub use config::{CorrelationConfig, DEFAULT_CORRELATION_HEADER};

pub use context::{CorrelationContext, scope, spawn, try_current};
pub use errors::ContextError;
