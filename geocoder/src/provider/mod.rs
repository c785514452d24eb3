//! Provider abstraction and composite providers.
//!
//! Every geocoding backend implements [`Provider`]. Vendor adapters are
//! opaque leaves; this module only ships the providers that compose other
//! providers:
//!
//! - [`Chain`]: ordered fallback, first non-empty result wins
//! - [`ProviderAggregator`]: name-keyed registry that routes to one provider
//!
//! The caching decorator lives in [`crate::cache`].
//!
//! ```ignore
//! use std::sync::Arc;
//! use geocoder::provider::{Chain, Provider};
//! use geocoder::query::GeocodeQuery;
//!
//! let chain = Chain::new(vec![Arc::new(primary), Arc::new(fallback)]);
//! let results = chain.geocode_query(&GeocodeQuery::create("Paris")?)?;
//! ```

mod aggregator;
mod chain;
mod types;

pub use aggregator::{ProviderAggregator, AGGREGATOR_NAME};
pub use chain::{Chain, CHAIN_NAME, DEFAULT_CHAIN_LOG_LEVEL};
pub use types::Provider;

#[cfg(test)]
pub use types::tests::MockProvider;
