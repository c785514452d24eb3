//! Caching decorator for any [`Provider`].

use std::sync::Arc;
use std::time::Duration;

use super::key::{versioned_cache_key, CACHE_KEY_VERSION};
use super::strategy::{CacheStrategy, Expire};
use super::traits::CacheStore;
use crate::error::GeocoderResult;
use crate::model::AddressCollection;
use crate::provider::Provider;
use crate::query::{GeocodeQuery, ReverseQuery};

/// Memoizes the results of a wrapped provider.
///
/// Lookups are keyed by the query's canonical string, so two queries that
/// differ in any field (limit, locale, data) never share an entry. Errors
/// from the wrapped provider propagate unchanged and are never cached.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// use geocoder::cache::{MemoryCacheStore, ProviderCache};
/// use geocoder::provider::Chain;
///
/// let store = Arc::new(MemoryCacheStore::default());
/// let mut cache = ProviderCache::new(Chain::new(vec![]), store, Some(Duration::from_secs(3600)));
///
/// assert_eq!(cache.inner().len(), 0);
/// assert_eq!(cache.inner_mut().len(), 0);
/// ```
pub struct ProviderCache<P> {
    provider: P,
    strategy: Arc<dyn CacheStrategy>,
    key_version: String,
    name: String,
}

impl<P: Provider> ProviderCache<P> {
    /// Wraps `provider`, storing results in `store` for `lifetime`.
    ///
    /// A `lifetime` of `None` keeps entries until the store evicts them.
    pub fn new(provider: P, store: Arc<dyn CacheStore>, lifetime: Option<Duration>) -> Self {
        Self::with_strategy(provider, Arc::new(Expire::new(store, lifetime)))
    }

    /// Wraps `provider` with an explicit caching policy.
    pub fn with_strategy(provider: P, strategy: Arc<dyn CacheStrategy>) -> Self {
        let name = format!("{} (cache)", provider.name());
        Self {
            provider,
            strategy,
            key_version: CACHE_KEY_VERSION.to_string(),
            name,
        }
    }

    /// Replaces the key prefix. Changing it invalidates existing entries.
    pub fn with_key_version(mut self, version: impl Into<String>) -> Self {
        self.key_version = version.into();
        self
    }

    pub fn key_version(&self) -> &str {
        &self.key_version
    }

    /// The wrapped provider.
    pub fn inner(&self) -> &P {
        &self.provider
    }

    /// Mutable access to the wrapped provider, for its own configuration
    /// methods.
    pub fn inner_mut(&mut self) -> &mut P {
        &mut self.provider
    }

    pub fn into_inner(self) -> P {
        self.provider
    }
}

impl<P: Provider> Provider for ProviderCache<P> {
    fn geocode_query(&self, query: &GeocodeQuery) -> GeocoderResult<AddressCollection> {
        let key = versioned_cache_key(&self.key_version, query);
        self.strategy
            .invoke(&key, &|| self.provider.geocode_query(query))
    }

    fn reverse_query(&self, query: &ReverseQuery) -> GeocoderResult<AddressCollection> {
        let key = versioned_cache_key(&self.key_version, query);
        self.strategy
            .invoke(&key, &|| self.provider.reverse_query(query))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
