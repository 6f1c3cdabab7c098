//! Cache manager implementation
//!
//! This module provides the main CacheManager struct implementing the
//! cache-aside pattern over a distributed store backend.
//!
//! Availability policy: an unreachable store is never a caller-visible
//! failure. Reads degrade to a miss, `get_or_create` still returns the
//! freshly computed value, and writes become no-ops; each occurrence is
//! logged. Only caller-contract violations (empty keys, values that cannot
//! be encoded) propagate as errors.

use crate::backend::{CacheBackend, RedisBackend};
use crate::codec::{Codec, JsonCodec, TextCodec};
use crate::errors::CacheError;
use config::CacheConfig;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Distributed cache-aside manager
#[derive(Clone)]
pub struct CacheManager {
    backend: Arc<dyn CacheBackend>,
    config: Arc<CacheConfig>,
}

impl std::fmt::Debug for CacheManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CacheManager")
            .field("config", &self.config)
            .finish()
    }
}

impl CacheManager {
    /// Create a new cache manager backed by Redis
    pub fn new(config: CacheConfig) -> Result<Self, CacheError> {
        let backend = RedisBackend::new(config.clone())?;
        Ok(Self::with_backend(Arc::new(backend), config))
    }

    /// Create a cache manager over an explicit backend
    pub fn with_backend(backend: Arc<dyn CacheBackend>, config: CacheConfig) -> Self {
        Self {
            backend,
            config: Arc::new(config),
        }
    }

    /// Get a structured value from the cache.
    ///
    /// Returns `None` on a miss, when the store is unreachable, and when the
    /// cached payload cannot be decoded as `T` (the entry self-heals on the
    /// next write). Callers must always have a fallback path on `None`.
    pub async fn get<T>(&self, key: &str) -> Result<Option<T>, CacheError>
    where
        T: Serialize + DeserializeOwned,
    {
        self.get_with::<JsonCodec<T>>(key).await
    }

    /// Get a plain text value from the cache, with no quoting applied.
    pub async fn get_text(&self, key: &str) -> Result<Option<String>, CacheError> {
        self.get_with::<TextCodec>(key).await
    }

    /// Get a value through an explicit codec
    pub async fn get_with<C: Codec>(&self, key: &str) -> Result<Option<C::Value>, CacheError> {
        validate_key(key)?;

        let raw = match self.backend.get(key).await {
            Ok(raw) => raw,
            Err(err) => {
                warn!(key, error = %err, "cache read failed, treating as miss");
                return Ok(None);
            }
        };

        Ok(decode_payload::<C>(key, raw))
    }

    /// Return the cached value for `key`, or compute, store and return it.
    ///
    /// `compute` runs at most once per call. There is no cross-call
    /// single-flight collapsing: concurrent callers racing on the same
    /// absent key each run their own `compute` and the last write wins.
    ///
    /// A store failure on either leg never prevents the caller from getting
    /// a correct answer; it only means the answer is not cached this time.
    pub async fn get_or_create<T, F, Fut>(
        &self,
        key: &str,
        ttl_minutes: u64,
        compute: F,
    ) -> Result<T, CacheError>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        self.get_or_create_with::<JsonCodec<T>, F, Fut>(key, ttl_minutes, compute)
            .await
    }

    /// Text variant of [`CacheManager::get_or_create`]
    pub async fn get_or_create_text<F, Fut>(
        &self,
        key: &str,
        ttl_minutes: u64,
        compute: F,
    ) -> Result<String, CacheError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = String>,
    {
        self.get_or_create_with::<TextCodec, F, Fut>(key, ttl_minutes, compute)
            .await
    }

    /// Cache-aside read through an explicit codec
    pub async fn get_or_create_with<C, F, Fut>(
        &self,
        key: &str,
        ttl_minutes: u64,
        compute: F,
    ) -> Result<C::Value, CacheError>
    where
        C: Codec,
        F: FnOnce() -> Fut,
        Fut: Future<Output = C::Value>,
    {
        if let Some(cached) = self.get_with::<C>(key).await? {
            debug!(key, "cache hit");
            return Ok(cached);
        }

        debug!(key, "cache miss, computing");
        let value = compute().await;
        self.set_with::<C>(key, &value, ttl_minutes).await?;
        Ok(value)
    }

    /// Store a structured value under `key` for `ttl_minutes`.
    ///
    /// A TTL of zero minutes means "expire immediately": the entry is
    /// removed rather than written, so the store's own no-expiry default is
    /// never inherited. Encoding failures propagate; an unreachable store
    /// does not.
    pub async fn set<T>(&self, key: &str, value: &T, ttl_minutes: u64) -> Result<(), CacheError>
    where
        T: Serialize + DeserializeOwned,
    {
        self.set_with::<JsonCodec<T>>(key, value, ttl_minutes).await
    }

    /// Store plain text under `key`, with no quoting applied.
    pub async fn set_text(&self, key: &str, value: &str, ttl_minutes: u64) -> Result<(), CacheError> {
        self.set_with::<TextCodec>(key, &value.to_string(), ttl_minutes)
            .await
    }

    /// Store a value through an explicit codec
    pub async fn set_with<C: Codec>(
        &self,
        key: &str,
        value: &C::Value,
        ttl_minutes: u64,
    ) -> Result<(), CacheError> {
        validate_key(key)?;

        let encoded = C::encode(value)?;

        if ttl_minutes == 0 {
            // Expire immediately: remove so no previous value lingers either
            if let Err(err) = self.backend.delete(key).await {
                warn!(key, error = %err, "cache delete failed during zero-TTL set");
            }
            return Ok(());
        }

        let ttl = Duration::from_secs(ttl_minutes * 60);
        if let Err(err) = self.backend.set(key, &encoded, ttl).await {
            warn!(key, error = %err, "cache write failed, value not cached");
        }
        Ok(())
    }

    /// Delete the entry under `key`; removing an absent key is a no-op.
    pub async fn remove(&self, key: &str) -> Result<(), CacheError> {
        validate_key(key)?;

        match self.backend.delete(key).await {
            Ok(_) => Ok(()),
            Err(err) => {
                warn!(key, error = %err, "cache delete failed");
                Ok(())
            }
        }
    }

    /// Blocking variant of [`CacheManager::get`] for call sites that cannot
    /// suspend; accepts a brief thread-blocking cost.
    pub fn try_get<T>(&self, key: &str) -> Result<Option<T>, CacheError>
    where
        T: Serialize + DeserializeOwned,
    {
        self.try_get_with::<JsonCodec<T>>(key)
    }

    /// Blocking variant of [`CacheManager::get_text`]
    pub fn try_get_text(&self, key: &str) -> Result<Option<String>, CacheError> {
        self.try_get_with::<TextCodec>(key)
    }

    /// Blocking read through an explicit codec
    pub fn try_get_with<C: Codec>(&self, key: &str) -> Result<Option<C::Value>, CacheError> {
        validate_key(key)?;

        let raw = match self.backend.get_blocking(key) {
            Ok(raw) => raw,
            Err(err) => {
                warn!(key, error = %err, "blocking cache read failed, treating as miss");
                return Ok(None);
            }
        };

        Ok(decode_payload::<C>(key, raw))
    }

    /// Probe store connectivity.
    ///
    /// Unlike the data operations this surfaces
    /// [`CacheError::StoreUnavailable`], so health endpoints can report the
    /// degraded state.
    pub async fn ping(&self) -> Result<(), CacheError> {
        self.backend.ping().await
    }

    /// Get current configuration
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }
}

fn validate_key(key: &str) -> Result<(), CacheError> {
    if key.is_empty() {
        return Err(CacheError::InvalidKey(
            "cache key cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Decode a raw payload, treating empty and undecodable payloads as misses.
fn decode_payload<C: Codec>(key: &str, raw: Option<String>) -> Option<C::Value> {
    let raw = raw?;
    if raw.is_empty() {
        return None;
    }

    match C::decode(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            debug!(key, error = %err, "cached payload undecodable, treating as miss");
            None
        }
    }
}
