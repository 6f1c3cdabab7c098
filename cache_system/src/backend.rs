//! Cache store backends
//!
//! This module defines the [`CacheBackend`] contract the cache manager
//! talks to, together with the Redis implementation used in production
//! and an in-memory implementation for tests and local development.
//!
//! The backend owns raw string payloads only; typed encoding and decoding
//! happen one layer up in the manager.

use crate::errors::CacheError;
use async_trait::async_trait;
use config::CacheConfig;
use redis::{AsyncCommands, Client, Commands};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock as StdRwLock};
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// Raw key/value access to a cache store.
///
/// The blocking variant exists for call sites that cannot suspend; it
/// accepts a brief thread-blocking cost. Timeouts are the store client's
/// own concern, so a call that exceeds them surfaces as
/// [`CacheError::StoreUnavailable`].
#[async_trait]
pub trait CacheBackend: Send + Sync {
    /// Fetch the raw payload stored under `key`.
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// Store `value` under `key` for `ttl`.
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), CacheError>;

    /// Delete `key`, reporting whether an entry existed.
    async fn delete(&self, key: &str) -> Result<bool, CacheError>;

    /// Blocking fetch of the raw payload stored under `key`.
    fn get_blocking(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// Round-trip connectivity probe.
    async fn ping(&self) -> Result<(), CacheError>;
}

/// Redis-backed cache store
pub struct RedisBackend {
    client: Arc<Client>,
    config: Arc<CacheConfig>,
    connection_slot: Arc<RwLock<Option<redis::aio::MultiplexedConnection>>>,
    blocking_slot: Mutex<Option<redis::Connection>>,
}

impl std::fmt::Debug for RedisBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let connection_status = {
            match self.connection_slot.try_read() {
                Ok(slot) => {
                    if slot.is_some() {
                        "connected"
                    } else {
                        "no_connection"
                    }
                }
                Err(_) => "lock_error",
            }
        };

        f.debug_struct("RedisBackend")
            .field("config", &self.config)
            .field("connected", &connection_status)
            .finish()
    }
}

impl RedisBackend {
    /// Create a new Redis backend
    pub fn new(config: CacheConfig) -> Result<Self, CacheError> {
        let client = Client::open(config.redis_url.as_str()).map_err(CacheError::unavailable)?;

        Ok(Self {
            client: Arc::new(client),
            config: Arc::new(config),
            connection_slot: Arc::new(RwLock::new(None)),
            blocking_slot: Mutex::new(None),
        })
    }

    /// Get or create the shared async connection
    async fn get_connection(&self) -> Result<redis::aio::MultiplexedConnection, CacheError> {
        let mut slot = self.connection_slot.write().await;

        if slot.is_none() {
            let connection = self
                .client
                .get_multiplexed_async_connection_with_timeouts(
                    Duration::from_millis(self.config.response_timeout_ms),
                    Duration::from_millis(self.config.connection_timeout_ms),
                )
                .await
                .map_err(CacheError::unavailable)?;
            *slot = Some(connection);
        }

        slot.as_ref()
            .cloned()
            .ok_or_else(|| CacheError::StoreUnavailable("connection slot is empty".into()))
    }

    /// Run `op` against the lazily created blocking connection.
    ///
    /// The connection is dropped on failure so the next call reconnects.
    fn with_blocking_connection<T>(
        &self,
        op: impl FnOnce(&mut redis::Connection) -> redis::RedisResult<T>,
    ) -> Result<T, CacheError> {
        let mut slot = self
            .blocking_slot
            .lock()
            .map_err(|_| CacheError::StoreUnavailable("blocking connection lock poisoned".into()))?;

        if slot.is_none() {
            let connection = self.client.get_connection().map_err(CacheError::unavailable)?;
            let timeout = Some(Duration::from_millis(self.config.response_timeout_ms));
            connection
                .set_read_timeout(timeout)
                .map_err(CacheError::unavailable)?;
            connection
                .set_write_timeout(timeout)
                .map_err(CacheError::unavailable)?;
            *slot = Some(connection);
        }

        let connection = slot
            .as_mut()
            .ok_or_else(|| CacheError::StoreUnavailable("connection slot is empty".into()))?;

        match op(connection) {
            Ok(value) => Ok(value),
            Err(err) => {
                *slot = None;
                Err(CacheError::unavailable(err))
            }
        }
    }
}

#[async_trait]
impl CacheBackend for RedisBackend {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let mut conn = self.get_connection().await?;
        let cached_data: Option<String> = conn.get(key).await.map_err(CacheError::unavailable)?;
        Ok(cached_data)
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), CacheError> {
        let mut conn = self.get_connection().await?;
        let _: () = conn
            .set_ex(key, value, ttl.as_secs())
            .await
            .map_err(CacheError::unavailable)?;
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool, CacheError> {
        let mut conn = self.get_connection().await?;
        let deleted: i32 = conn.del(key).await.map_err(CacheError::unavailable)?;
        Ok(deleted > 0)
    }

    fn get_blocking(&self, key: &str) -> Result<Option<String>, CacheError> {
        self.with_blocking_connection(|conn| conn.get(key))
    }

    async fn ping(&self) -> Result<(), CacheError> {
        let mut conn = self.get_connection().await?;
        let _: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(CacheError::unavailable)?;
        Ok(())
    }
}

/// A single in-memory entry with its expiry deadline.
#[derive(Debug, Clone)]
struct MemoryEntry {
    value: String,
    expires_at: Instant,
}

impl MemoryEntry {
    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// In-memory cache store with lazy expiry.
///
/// Expired entries are dropped when read. Intended for tests and local
/// development; production deployments use [`RedisBackend`].
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: StdRwLock<HashMap<String, MemoryEntry>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn read_entry(&self, key: &str) -> Result<Option<String>, CacheError> {
        {
            let entries = self
                .entries
                .read()
                .map_err(|_| CacheError::StoreUnavailable("memory store lock poisoned".into()))?;
            match entries.get(key) {
                None => return Ok(None),
                Some(entry) if !entry.is_expired() => return Ok(Some(entry.value.clone())),
                Some(_) => {}
            }
        }

        // Expired: drop the entry under the write lock
        let mut entries = self
            .entries
            .write()
            .map_err(|_| CacheError::StoreUnavailable("memory store lock poisoned".into()))?;
        if entries.get(key).is_some_and(|entry| entry.is_expired()) {
            entries.remove(key);
        }
        Ok(None)
    }
}

#[async_trait]
impl CacheBackend for MemoryBackend {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        self.read_entry(key)
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), CacheError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| CacheError::StoreUnavailable("memory store lock poisoned".into()))?;
        entries.insert(
            key.to_string(),
            MemoryEntry {
                value: value.to_string(),
                expires_at: Instant::now() + ttl,
            },
        );
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool, CacheError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| CacheError::StoreUnavailable("memory store lock poisoned".into()))?;
        Ok(entries.remove(key).is_some())
    }

    fn get_blocking(&self, key: &str) -> Result<Option<String>, CacheError> {
        self.read_entry(key)
    }

    async fn ping(&self) -> Result<(), CacheError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_backend_round_trips_raw_payloads() {
        let backend = MemoryBackend::new();

        backend
            .set("reservation:status:1", "Confirmed", Duration::from_secs(60))
            .await
            .unwrap();

        let value = backend.get("reservation:status:1").await.unwrap();
        assert_eq!(value.as_deref(), Some("Confirmed"));
    }

    #[tokio::test]
    async fn memory_backend_expires_entries() {
        let backend = MemoryBackend::new();

        backend
            .set("short-lived", "value", Duration::from_millis(10))
            .await
            .unwrap();
        std::thread::sleep(Duration::from_millis(30));

        assert_eq!(backend.get("short-lived").await.unwrap(), None);
    }

    #[tokio::test]
    async fn memory_backend_delete_reports_presence() {
        let backend = MemoryBackend::new();

        backend
            .set("present", "value", Duration::from_secs(60))
            .await
            .unwrap();

        assert!(backend.delete("present").await.unwrap());
        assert!(!backend.delete("present").await.unwrap());
        assert!(!backend.delete("never-set").await.unwrap());
    }

    #[tokio::test]
    async fn memory_backend_blocking_get_matches_async_get() {
        let backend = MemoryBackend::new();

        backend
            .set("token", "abc", Duration::from_secs(60))
            .await
            .unwrap();

        assert_eq!(
            backend.get_blocking("token").unwrap().as_deref(),
            Some("abc")
        );
        assert_eq!(backend.get_blocking("missing").unwrap(), None);
    }
}
