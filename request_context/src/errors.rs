//! Error types for correlation context construction

use thiserror::Error;

/// Correlation context errors
#[derive(Error, Debug)]
pub enum ContextError {
    #[error("correlation id cannot be empty")]
    EmptyCorrelationId,

    #[error("correlation header key cannot be empty")]
    EmptyHeaderKey,
}
