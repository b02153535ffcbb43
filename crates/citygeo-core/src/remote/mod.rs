// crates/citygeo-core/src/remote/mod.rs

//! # Remote Resolver
//!
//! Online fallback search against a Photon-style autocomplete endpoint, with
//! a TTL cache in front of it.
//!
//! Flow for one call:
//! 1. queries shorter than [`RemoteConfig::min_query_len`] return `[]` without I/O;
//! 2. the normalized query is looked up in the cache; a fresh hit returns at once;
//! 3. otherwise one request is sent, the body is parsed, non-settlements and
//!    incomplete records are dropped, and the list is cached before returning.
//!
//! There is no de-duplication of concurrent identical queries: two callers
//! missing the cache at the same time both reach the network.

pub mod raw;
pub mod timezone;
pub mod transport;

use crate::cache::{QueryCache, TtlCache, DEFAULT_TTL};
use crate::error::Result;
use crate::model::City;
use crate::text::{normalize_query, trimmed_len};
use std::sync::Arc;
use std::time::Duration;

pub use transport::{GeocodeRequest, GeocodeTransport};
#[cfg(feature = "http")]
pub use transport::HttpTransport;

pub const DEFAULT_ENDPOINT: &str = "https://photon.komoot.io/api/";

/// Settings for [`RemoteResolver`].
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    pub base_url: String,
    /// Sent as the provider's `lang` parameter.
    pub lang: String,
    /// Limit used when the caller does not pass one.
    pub default_limit: usize,
    /// Trimmed queries shorter than this never reach the network.
    pub min_query_len: usize,
    pub cache_ttl: Duration,
    /// Upper bound on one provider round trip.
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_ENDPOINT.to_string(),
            lang: "en".to_string(),
            default_limit: 10,
            min_query_len: 2,
            cache_ttl: DEFAULT_TTL,
            timeout: Duration::from_secs(10),
            user_agent: concat!("citygeo/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl RemoteConfig {
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    pub fn with_default_limit(mut self, limit: usize) -> Self {
        self.default_limit = limit;
        self
    }
}

/// Best-effort online city lookup.
pub struct RemoteResolver {
    config: RemoteConfig,
    transport: Arc<dyn GeocodeTransport>,
    cache: Arc<dyn QueryCache>,
}

impl std::fmt::Debug for RemoteResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteResolver")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl RemoteResolver {
    /// Resolver with an explicit transport and cache.
    pub fn new(
        config: RemoteConfig,
        transport: Arc<dyn GeocodeTransport>,
        cache: Arc<dyn QueryCache>,
    ) -> Self {
        Self {
            config,
            transport,
            cache,
        }
    }

    /// Resolver with the given transport and a fresh [`TtlCache`] using
    /// `config.cache_ttl`.
    pub fn with_transport(config: RemoteConfig, transport: Arc<dyn GeocodeTransport>) -> Self {
        let cache = Arc::new(TtlCache::new(config.cache_ttl));
        Self::new(config, transport, cache)
    }

    /// Resolver talking HTTP to `config.base_url`.
    #[cfg(feature = "http")]
    pub fn http(config: RemoteConfig) -> Result<Self> {
        let transport = Arc::new(HttpTransport::new(&config)?);
        Ok(Self::with_transport(config, transport))
    }

    pub fn config(&self) -> &RemoteConfig {
        &self.config
    }

    /// Online search that never fails.
    ///
    /// Provider errors, timeouts and malformed responses are logged and
    /// turned into an empty list, so an empty result does not tell "no
    /// matches" apart from "provider unavailable". Use
    /// [`RemoteResolver::try_search_online`] when that matters.
    ///
    /// Results are cached under the normalized query alone, not the limit.
    /// Within the TTL, a later call with a larger limit gets at most as many
    /// cities as the first lookup fetched.
    pub async fn search_online(&self, query: &str, limit: Option<usize>) -> Vec<City> {
        match self.try_search_online(query, limit).await {
            Ok(cities) => cities,
            Err(err) => {
                tracing::warn!(err = err.to_string(), query, "online city search failed");
                Vec::new()
            }
        }
    }

    /// Online search that reports provider failures.
    ///
    /// Too-short queries are still `Ok(vec![])`; only transport, status,
    /// timeout and response-shape problems are errors. Failed lookups are
    /// not cached. Caching follows [`RemoteResolver::search_online`].
    pub async fn try_search_online(&self, query: &str, limit: Option<usize>) -> Result<Vec<City>> {
        if trimmed_len(query) < self.config.min_query_len {
            tracing::debug!(query, "query too short for online lookup");
            return Ok(Vec::new());
        }

        let limit = limit.unwrap_or(self.config.default_limit);
        let key = normalize_query(query);

        if let Some(mut cached) = self.cache.get(&key) {
            tracing::debug!(key = key.as_str(), hits = cached.len(), "online cache hit");
            cached.truncate(limit);
            return Ok(cached);
        }
        tracing::debug!(key = key.as_str(), "online cache miss");

        let body = self
            .transport
            .fetch(GeocodeRequest {
                query,
                limit,
                lang: &self.config.lang,
            })
            .await?;

        let mut cities = raw::features_to_cities(raw::parse_features(&body)?);
        self.cache.set(&key, cities.clone());

        cities.truncate(limit);
        Ok(cities)
    }

    /// Drop every cached online result.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }
}
