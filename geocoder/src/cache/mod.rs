//! Result caching for providers.
//!
//! [`ProviderCache`] decorates any provider with a [`CacheStrategy`] over a
//! [`CacheStore`]. Stores deal in opaque bytes; the decorator serializes
//! collections with serde_json.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! use geocoder::cache::{MemoryCacheStore, ProviderCache, StaleIfError};
//! use geocoder::provider::{Chain, Provider};
//!
//! let store = Arc::new(MemoryCacheStore::new(1_000));
//! let strategy = Arc::new(StaleIfError::new(store, Duration::from_secs(600)));
//! let cache = ProviderCache::with_strategy(Chain::new(vec![]), strategy);
//!
//! assert_eq!(cache.name(), "chain (cache)");
//! ```

mod key;
mod memory;
mod provider;
mod strategy;
mod traits;

pub use key::{cache_key, versioned_cache_key, CACHE_KEY_VERSION};
pub use memory::{MemoryCacheStore, DEFAULT_MAX_ENTRIES};
pub use provider::ProviderCache;
pub use strategy::{CacheStrategy, Expire, StaleIfError};
pub use traits::{CacheError, CacheStore};
