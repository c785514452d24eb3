//! Geocoder - Provider composition for geocoding services
//!
//! This library turns many interchangeable geocoding backends into one
//! uniform, composable API:
//!
//! - [`provider::Provider`]: the contract every backend implements
//! - [`provider::Chain`]: ordered fallback across providers
//! - [`cache::ProviderCache`]: result memoization over a [`cache::CacheStore`]
//! - [`query`]: immutable geocode and reverse queries
//! - [`model`]: the normalized address model every provider returns
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! use geocoder::cache::{MemoryCacheStore, ProviderCache};
//! use geocoder::log::TracingLogger;
//! use geocoder::provider::{Chain, Provider};
//! use geocoder::query::GeocodeQuery;
//!
//! let chain = Chain::new(vec![]).with_logger(Arc::new(TracingLogger::new()));
//! let store = Arc::new(MemoryCacheStore::default());
//! let geocoder = ProviderCache::new(chain, store, Some(Duration::from_secs(3600)));
//!
//! let results = geocoder.geocode_query(&GeocodeQuery::create("Paris")?)?;
//! assert!(results.is_empty());
//! # Ok::<(), geocoder::GeocoderError>(())
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod log;
pub mod model;
pub mod provider;
pub mod query;

pub use error::{GeocoderError, GeocoderResult, InvalidServerResponse};
pub use model::{Address, AddressCollection, Location};
pub use provider::Provider;
pub use query::{GeocodeQuery, Query, ReverseQuery};
