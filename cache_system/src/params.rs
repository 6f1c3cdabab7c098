//! Cache parameter configuration
//!
//! This module defines the CacheParams struct
//! for configuring cache behavior per consuming service.

use crate::CacheManager;
use std::sync::Arc;

/// Cache parameters for one consuming service or entity domain.
///
/// Keys are opaque to the cache core; `prefix` implements the caller-side
/// namespacing convention (e.g. `"reservation:status"`), keeping unrelated
/// consumers that share one store out of each other's way.
#[derive(Debug, Clone)]
pub struct CacheParams {
    /// The cache manager instance
    pub manager: Arc<CacheManager>,
    /// TTL for this consumer, in whole minutes
    pub ttl_minutes: u64,
    /// Prefix for cache keys
    pub prefix: String,
}

impl CacheParams {
    pub fn new(manager: Arc<CacheManager>, ttl_minutes: u64, prefix: &str) -> Self {
        Self {
            ttl_minutes,
            prefix: prefix.to_string(),
            manager,
        }
    }

    /// Build a full cache key from this consumer's prefix
    pub fn key(&self, suffix: &str) -> String {
        format!("{}:{}", self.prefix, suffix)
    }
}
