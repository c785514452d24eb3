//! Policies deciding when a cached result may be served.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::traits::CacheStore;
use crate::error::GeocoderResult;
use crate::model::AddressCollection;

/// Decides how a lookup combines the store with a fresh provider call.
pub trait CacheStrategy: Send + Sync {
    /// Returns the result for `key`, calling `fetch` when the store cannot
    /// answer on its own.
    ///
    /// # Errors
    ///
    /// Returns the error of `fetch` when the strategy has nothing to fall
    /// back to. Store failures are never returned.
    fn invoke(
        &self,
        key: &str,
        fetch: &dyn Fn() -> GeocoderResult<AddressCollection>,
    ) -> GeocoderResult<AddressCollection>;
}

/// Reads and decodes an entry, treating every failure as a miss.
fn load<T: DeserializeOwned>(store: &dyn CacheStore, key: &str) -> Option<T> {
    let bytes = match store.get(key) {
        Ok(Some(bytes)) => bytes,
        Ok(None) => return None,
        Err(e) => {
            warn!(error = %e, key = %key, "Cache get failed, treating as miss");
            return None;
        }
    };

    match serde_json::from_slice(&bytes) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(error = %e, key = %key, "Cached entry could not be decoded, treating as miss");
            None
        }
    }
}

/// Encodes and writes an entry. Failures are logged and dropped.
fn save<T: Serialize>(store: &dyn CacheStore, key: &str, value: &T, ttl: Option<Duration>) {
    let bytes = match serde_json::to_vec(value) {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!(error = %e, key = %key, "Failed to encode cache entry");
            return;
        }
    };

    if let Err(e) = store.set(key, bytes, ttl) {
        warn!(error = %e, key = %key, "Cache set failed");
    }
}

/// Memoizes results for a fixed lifetime.
///
/// Once an entry expires the next lookup calls the provider again; there
/// is no fallback to the expired value.
pub struct Expire {
    store: Arc<dyn CacheStore>,
    ttl: Option<Duration>,
}

impl Expire {
    /// `ttl` of `None` keeps entries until the store evicts them.
    pub fn new(store: Arc<dyn CacheStore>, ttl: Option<Duration>) -> Self {
        Self { store, ttl }
    }

    pub fn ttl(&self) -> Option<Duration> {
        self.ttl
    }
}

impl CacheStrategy for Expire {
    fn invoke(
        &self,
        key: &str,
        fetch: &dyn Fn() -> GeocoderResult<AddressCollection>,
    ) -> GeocoderResult<AddressCollection> {
        if let Some(cached) = load::<AddressCollection>(self.store.as_ref(), key) {
            debug!(key = %key, "Cache hit");
            return Ok(cached);
        }

        debug!(key = %key, "Cache miss");
        let result = fetch()?;
        save(self.store.as_ref(), key, &result, self.ttl);
        Ok(result)
    }
}

/// A result together with the time it was written.
#[derive(Debug, Serialize, Deserialize)]
struct StampedEntry {
    stored_at_ms: i64,
    collection: AddressCollection,
}

impl StampedEntry {
    fn is_fresh(&self, ttl: Duration, now_ms: i64) -> bool {
        let age_ms = now_ms.saturating_sub(self.stored_at_ms);
        age_ms >= 0 && (age_ms as u128) < ttl.as_millis()
    }
}

/// Serves stale results while the provider is failing.
///
/// Entries younger than `ttl` are served directly. An older entry triggers
/// a refresh; if the refresh fails the stale entry is returned instead of
/// the error. The error only surfaces when nothing was ever cached.
pub struct StaleIfError {
    store: Arc<dyn CacheStore>,
    ttl: Duration,
    max_stale: Option<Duration>,
}

impl StaleIfError {
    pub fn new(store: Arc<dyn CacheStore>, ttl: Duration) -> Self {
        Self {
            store,
            ttl,
            max_stale: None,
        }
    }

    /// Bounds how long past `ttl` an entry may still be served.
    ///
    /// Without it, entries stay until the store evicts them.
    pub fn with_max_stale(mut self, max_stale: Duration) -> Self {
        self.max_stale = Some(max_stale);
        self
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    fn store_ttl(&self) -> Option<Duration> {
        self.max_stale.map(|stale| self.ttl.saturating_add(stale))
    }
}

impl CacheStrategy for StaleIfError {
    fn invoke(
        &self,
        key: &str,
        fetch: &dyn Fn() -> GeocoderResult<AddressCollection>,
    ) -> GeocoderResult<AddressCollection> {
        let cached = load::<StampedEntry>(self.store.as_ref(), key);

        if let Some(entry) = &cached {
            if entry.is_fresh(self.ttl, Utc::now().timestamp_millis()) {
                debug!(key = %key, "Cache hit");
                return Ok(entry.collection.clone());
            }
        }

        match fetch() {
            Ok(collection) => {
                let entry = StampedEntry {
                    stored_at_ms: Utc::now().timestamp_millis(),
                    collection,
                };
                save(self.store.as_ref(), key, &entry, self.store_ttl());
                Ok(entry.collection)
            }
            Err(e) => match cached {
                Some(entry) => {
                    warn!(error = %e, key = %key, "Provider failed, serving stale entry");
                    Ok(entry.collection)
                }
                None => Err(e),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use super::*;
    use crate::cache::memory::MemoryCacheStore;
    use crate::cache::traits::CacheError;
    use crate::error::GeocoderError;
    use crate::model::{AddressBuilder, Location};

    fn collection(locality: &str) -> AddressCollection {
        let mut builder = AddressBuilder::new("mock");
        builder.set_locality(locality);
        AddressCollection::new(vec![builder.build().unwrap()])
    }

    /// Store whose every operation fails.
    struct BrokenStore;

    impl CacheStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<Vec<u8>>, CacheError> {
            Err(CacheError::Backend("down".into()))
        }

        fn set(&self, _key: &str, _value: Vec<u8>, _ttl: Option<Duration>) -> Result<(), CacheError> {
            Err(CacheError::Backend("down".into()))
        }

        fn delete(&self, _key: &str) -> Result<bool, CacheError> {
            Err(CacheError::Backend("down".into()))
        }

        fn entry_count(&self) -> u64 {
            0
        }
    }

    /// Fetch closure driven by a queue of responses.
    struct Upstream {
        responses: Mutex<Vec<GeocoderResult<AddressCollection>>>,
        calls: AtomicUsize,
    }

    impl Upstream {
        fn new(mut responses: Vec<GeocoderResult<AddressCollection>>) -> Self {
            responses.reverse();
            Self {
                responses: Mutex::new(responses),
                calls: AtomicUsize::new(0),
            }
        }

        fn fetch(&self) -> GeocoderResult<AddressCollection> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.responses
                .lock()
                .unwrap()
                .pop()
                .unwrap_or_else(|| Err(GeocoderError::Transport("exhausted".into())))
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[test]
    fn test_expire_memoizes() {
        let strategy = Expire::new(Arc::new(MemoryCacheStore::default()), None);
        let upstream = Upstream::new(vec![Ok(collection("Paris"))]);

        let first = strategy.invoke("k", &|| upstream.fetch()).unwrap();
        let second = strategy.invoke("k", &|| upstream.fetch()).unwrap();

        assert_eq!(first, second);
        assert_eq!(upstream.calls(), 1);
    }

    #[test]
    fn test_expire_refetches_after_ttl() {
        let strategy = Expire::new(
            Arc::new(MemoryCacheStore::default()),
            Some(Duration::from_millis(50)),
        );
        let upstream = Upstream::new(vec![Ok(collection("Paris")), Ok(collection("Lyon"))]);

        strategy.invoke("k", &|| upstream.fetch()).unwrap();
        std::thread::sleep(Duration::from_millis(120));
        let refreshed = strategy.invoke("k", &|| upstream.fetch()).unwrap();

        assert_eq!(refreshed.first().unwrap().locality(), Some("Lyon"));
        assert_eq!(upstream.calls(), 2);
    }

    #[test]
    fn test_expire_does_not_cache_errors() {
        let strategy = Expire::new(Arc::new(MemoryCacheStore::default()), None);
        let upstream = Upstream::new(vec![
            Err(GeocoderError::QuotaExceeded("daily".into())),
            Ok(collection("Paris")),
        ]);

        assert!(strategy.invoke("k", &|| upstream.fetch()).is_err());
        assert!(strategy.invoke("k", &|| upstream.fetch()).is_ok());
        assert_eq!(upstream.calls(), 2);
    }

    #[test]
    fn test_broken_store_never_fails_query() {
        let strategy = Expire::new(Arc::new(BrokenStore), None);
        let upstream = Upstream::new(vec![Ok(collection("Paris")), Ok(collection("Paris"))]);

        assert!(strategy.invoke("k", &|| upstream.fetch()).is_ok());
        assert!(strategy.invoke("k", &|| upstream.fetch()).is_ok());
        assert_eq!(upstream.calls(), 2);
    }

    #[test]
    fn test_undecodable_entry_is_a_miss() {
        let store = Arc::new(MemoryCacheStore::default());
        store.set("k", b"not json".to_vec(), None).unwrap();
        let strategy = Expire::new(store, None);
        let upstream = Upstream::new(vec![Ok(collection("Paris"))]);

        let result = strategy.invoke("k", &|| upstream.fetch()).unwrap();

        assert_eq!(result.first().unwrap().locality(), Some("Paris"));
        assert_eq!(upstream.calls(), 1);
    }

    #[test]
    fn test_stale_if_error_serves_fresh_entry() {
        let strategy =
            StaleIfError::new(Arc::new(MemoryCacheStore::default()), Duration::from_secs(60));
        let upstream = Upstream::new(vec![Ok(collection("Paris"))]);

        strategy.invoke("k", &|| upstream.fetch()).unwrap();
        strategy.invoke("k", &|| upstream.fetch()).unwrap();

        assert_eq!(upstream.calls(), 1);
        assert_eq!(strategy.ttl(), Duration::from_secs(60));
    }

    #[test]
    fn test_stale_if_error_refreshes_stale_entry() {
        let strategy = StaleIfError::new(Arc::new(MemoryCacheStore::default()), Duration::ZERO);
        let upstream = Upstream::new(vec![Ok(collection("Paris")), Ok(collection("Lyon"))]);

        strategy.invoke("k", &|| upstream.fetch()).unwrap();
        let refreshed = strategy.invoke("k", &|| upstream.fetch()).unwrap();

        assert_eq!(refreshed.first().unwrap().locality(), Some("Lyon"));
        assert_eq!(upstream.calls(), 2);
    }

    #[test]
    fn test_stale_if_error_serves_stale_on_failure() {
        let strategy = StaleIfError::new(Arc::new(MemoryCacheStore::default()), Duration::ZERO);
        let upstream = Upstream::new(vec![
            Ok(collection("Paris")),
            Err(GeocoderError::Transport("timeout".into())),
        ]);

        strategy.invoke("k", &|| upstream.fetch()).unwrap();
        let stale = strategy.invoke("k", &|| upstream.fetch()).unwrap();

        assert_eq!(stale.first().unwrap().locality(), Some("Paris"));
        assert_eq!(upstream.calls(), 2);
    }

    #[test]
    fn test_stale_if_error_reraises_without_entry() {
        let strategy = StaleIfError::new(Arc::new(MemoryCacheStore::default()), Duration::ZERO)
            .with_max_stale(Duration::from_secs(3600));
        let upstream = Upstream::new(vec![Err(GeocoderError::Transport("timeout".into()))]);

        let err = strategy.invoke("k", &|| upstream.fetch()).unwrap_err();

        assert_eq!(err, GeocoderError::Transport("timeout".into()));
    }

    #[test]
    fn test_stamped_entry_freshness() {
        let entry = StampedEntry {
            stored_at_ms: 1_000,
            collection: AddressCollection::empty(),
        };

        assert!(entry.is_fresh(Duration::from_secs(1), 1_500));
        assert!(!entry.is_fresh(Duration::from_secs(1), 2_000));
        assert!(!entry.is_fresh(Duration::from_secs(1), 500));
    }
}
