//! Core Bookhaus functionality
//!
//! This module contains the main Bookhaus struct and its implementation,
//! providing centralized coordination for caching, request correlation,
//! and the domain services composed on top of them.

use std::collections::HashMap;
use std::sync::Arc;

use cache_system::CacheManager;
use config::AppConfig;

use crate::errors::BookhausError;

/// Main Bookhaus coordinator that owns the shared infrastructure
/// components and the domain services built on them
pub struct Bookhaus {
    config: AppConfig,
    cache: Arc<CacheManager>,
    services: HashMap<String, Box<dyn std::any::Any + Send + Sync>>,
}

impl Bookhaus {
    /// Create a new Bookhaus core with a Redis-backed cache
    pub fn new(config: AppConfig) -> Result<Self, BookhausError> {
        let cache = Arc::new(CacheManager::new(config.cache.clone())?);
        Ok(Self::with_cache(config, cache))
    }

    /// Create a Bookhaus core around an existing cache manager
    pub fn with_cache(config: AppConfig, cache: Arc<CacheManager>) -> Self {
        Self {
            config,
            cache,
            services: HashMap::new(),
        }
    }

    /// Get the shared cache manager
    pub fn cache(&self) -> Arc<CacheManager> {
        Arc::clone(&self.cache)
    }

    /// Get the application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Header name inbound correlation identifiers are read from
    pub fn correlation_header(&self) -> &str {
        &self.config.correlation.header_name
    }

    /// Register a domain service under a given name
    pub fn register_service<T>(&mut self, name: String, service: T) -> Result<(), BookhausError>
    where
        T: Send + Sync + 'static,
    {
        if self.services.contains_key(&name) {
            return Err(BookhausError::ServiceAlreadyRegistered(name));
        }

        self.services.insert(name, Box::new(service));
        Ok(())
    }

    /// Get a registered domain service by name
    pub fn get_service<T>(&self, name: &str) -> Result<&T, BookhausError>
    where
        T: Send + Sync + 'static,
    {
        self.services
            .get(name)
            .and_then(|service| service.downcast_ref::<T>())
            .ok_or_else(|| BookhausError::ServiceNotFound(name.to_string()))
    }

    /// List all registered service names
    pub fn list_services(&self) -> Vec<&String> {
        self.services.keys().collect()
    }

    /// Remove a registered service by name
    pub fn unregister_service(&mut self, name: &str) -> Result<(), BookhausError> {
        self.services
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| BookhausError::ServiceNotFound(name.to_string()))
    }

    /// Check cache store connectivity
    pub async fn health_check(&self) -> Result<(), BookhausError> {
        self.cache.ping().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cache_system::MemoryBackend;
    use config::{CacheConfig, CorrelationConfig};

    fn core() -> Bookhaus {
        let config = AppConfig {
            cache: CacheConfig::default(),
            correlation: CorrelationConfig::default(),
        };
        let cache = Arc::new(CacheManager::with_backend(
            Arc::new(MemoryBackend::new()),
            config.cache.clone(),
        ));
        Bookhaus::with_cache(config, cache)
    }

    struct StatusService {
        name: &'static str,
    }

    #[test]
    fn services_register_and_resolve() {
        let mut core = core();

        core.register_service("statuses".to_string(), StatusService { name: "statuses" })
            .unwrap();

        let service = core.get_service::<StatusService>("statuses").unwrap();
        assert_eq!(service.name, "statuses");
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut core = core();

        core.register_service("statuses".to_string(), StatusService { name: "statuses" })
            .unwrap();
        let result =
            core.register_service("statuses".to_string(), StatusService { name: "again" });

        assert!(matches!(
            result,
            Err(BookhausError::ServiceAlreadyRegistered(_))
        ));
    }

    #[test]
    fn unknown_service_is_an_error() {
        let core = core();
        assert!(matches!(
            core.get_service::<StatusService>("missing"),
            Err(BookhausError::ServiceNotFound(_))
        ));
    }

    #[test]
    fn correlation_header_comes_from_config() {
        assert_eq!(core().correlation_header(), "X-Correlation-Id");
    }

    #[tokio::test]
    async fn health_check_pings_the_cache() {
        assert!(core().health_check().await.is_ok());
    }
}
