//! Cache system for distributed cache-aside reads
//!
//! This crate provides typed cache-aside access to a distributed
//! key-value store, with graceful degradation when the store is
//! unreachable and codecs for text and structured payloads.

pub mod backend;
pub mod codec;
pub mod errors;
pub mod manager;
pub mod params;
pub mod prelude;

// Re-export centralized config
pub use config::CacheConfig;

pub use backend::{CacheBackend, MemoryBackend, RedisBackend};
pub use codec::{Codec, JsonCodec, TextCodec};
pub use errors::CacheError;
pub use manager::CacheManager;
pub use params::CacheParams;
