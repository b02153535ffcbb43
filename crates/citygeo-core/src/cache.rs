// crates/citygeo-core/src/cache.rs
use crate::model::City;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

/// Default freshness window for online results.
pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

/// Memoization of online lookups, keyed by normalized query text.
///
/// Owned by one [`crate::RemoteResolver`] and injected at construction, so
/// every resolver can have its own independently configured cache.
///
/// `get` followed by `set` is not atomic: two concurrent misses for the same
/// key both write, and the last write wins.
pub trait QueryCache: Send + Sync {
    /// Fresh results for `key`, or `None` on a miss or a stale entry.
    fn get(&self, key: &str) -> Option<Vec<City>>;
    /// Store `results` under `key`, replacing whatever was there.
    fn set(&self, key: &str, results: Vec<City>);
    /// Forget everything.
    fn clear(&self);
}

#[derive(Debug, Clone)]
struct CacheEntry {
    results: Vec<City>,
    stored_at: Instant,
}

/// In-memory cache with a fixed time-to-live.
///
/// Expiry is checked lazily on read; stale entries stay in the map until the
/// same key is written again or the cache is cleared. The map has no size
/// bound.
#[derive(Debug)]
pub struct TtlCache {
    ttl: Duration,
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl TtlCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Number of stored entries, stale ones included.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // Entries are inserted whole, so a poisoned map is still consistent.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, CacheEntry>> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for TtlCache {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

impl QueryCache for TtlCache {
    fn get(&self, key: &str) -> Option<Vec<City>> {
        let entries = self.lock();
        let entry = entries.get(key)?;
        if entry.stored_at.elapsed() < self.ttl {
            Some(entry.results.clone())
        } else {
            None
        }
    }

    fn set(&self, key: &str, results: Vec<City>) {
        self.lock().insert(
            key.to_owned(),
            CacheEntry {
                results,
                stored_at: Instant::now(),
            },
        );
    }

    fn clear(&self) {
        self.lock().clear();
    }
}
