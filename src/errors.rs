//! Error types for the Bookhaus crate
//!
//! This module contains all error types that can be returned by Bookhaus operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookhausError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Cache error: {0}")]
    Cache(#[from] cache_system::CacheError),

    #[error("Service not found: {0}")]
    ServiceNotFound(String),

    #[error("Service already registered: {0}")]
    ServiceAlreadyRegistered(String),
}
