//! In-memory cache store using moka.
//!
//! Wraps `moka::sync::Cache`, which is safe to share between threads and
//! evicts automatically once `max_entries` is reached. Each entry carries
//! its own lifetime, enforced through a moka [`Expiry`] policy.

use std::sync::Arc;
use std::time::{Duration, Instant};

use moka::sync::Cache as MokaCache;
use moka::Expiry;

use crate::cache::traits::{CacheError, CacheStore};

/// Default number of entries kept before eviction.
pub const DEFAULT_MAX_ENTRIES: u64 = 10_000;

#[derive(Clone)]
struct StoredValue {
    data: Arc<Vec<u8>>,
    ttl: Option<Duration>,
}

/// Expires every entry after the TTL it was written with.
struct PerEntryTtl;

impl Expiry<String, StoredValue> for PerEntryTtl {
    fn expire_after_create(
        &self,
        _key: &String,
        value: &StoredValue,
        _created_at: Instant,
    ) -> Option<Duration> {
        value.ttl
    }

    fn expire_after_update(
        &self,
        _key: &String,
        value: &StoredValue,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        // A rewrite restarts the clock with the new entry's TTL.
        value.ttl
    }
}

/// Thread-safe in-memory [`CacheStore`].
pub struct MemoryCacheStore {
    cache: MokaCache<String, StoredValue>,
    max_entries: u64,
}

impl Default for MemoryCacheStore {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ENTRIES)
    }
}

impl MemoryCacheStore {
    /// Create a store holding at most `max_entries` entries.
    pub fn new(max_entries: u64) -> Self {
        let cache = MokaCache::builder()
            .max_capacity(max_entries)
            .expire_after(PerEntryTtl)
            .build();

        Self { cache, max_entries }
    }

    pub fn max_entries(&self) -> u64 {
        self.max_entries
    }

    /// Runs moka's pending maintenance (expiry, eviction).
    ///
    /// `entry_count` is eventually consistent; call this first when an
    /// exact count matters.
    pub fn run_pending_tasks(&self) {
        self.cache.run_pending_tasks();
    }

    /// Drops every entry.
    pub fn clear(&self) {
        self.cache.invalidate_all();
        self.cache.run_pending_tasks();
    }
}

impl CacheStore for MemoryCacheStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        Ok(self.cache.get(key).map(|stored| (*stored.data).clone()))
    }

    fn set(&self, key: &str, value: Vec<u8>, ttl: Option<Duration>) -> Result<(), CacheError> {
        self.cache.insert(
            key.to_string(),
            StoredValue {
                data: Arc::new(value),
                ttl,
            },
        );
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<bool, CacheError> {
        Ok(self.cache.remove(key).is_some())
    }

    fn entry_count(&self) -> u64 {
        self.cache.entry_count()
    }
}
