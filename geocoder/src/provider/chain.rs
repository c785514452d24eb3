//! Ordered fallback over several providers.
//!
//! Geocoding vendors have non-overlapping coverage and intermittent
//! outages. A [`Chain`] asks its providers strictly in order and returns the
//! first non-empty result. A provider that fails is reported to the
//! attached [`Logger`] and skipped, so the only "no result" signal a caller
//! ever sees is an empty collection.

use std::sync::Arc;

use tracing::debug;

use super::Provider;
use crate::error::{GeocoderError, GeocoderResult};
use crate::log::{LogLevel, Logger, NoOpLogger};
use crate::model::AddressCollection;
use crate::query::{GeocodeQuery, ReverseQuery};

/// Name reported by every chain.
pub const CHAIN_NAME: &str = "chain";

/// Level used for swallowed provider failures unless configured otherwise.
pub const DEFAULT_CHAIN_LOG_LEVEL: LogLevel = LogLevel::Alert;

const GEOCODE_FAILURE: &str =
    "Provider \"{provider_name}\" could not geocode address: \"{address}\".";
const REVERSE_FAILURE: &str =
    "Provider \"{provider_name}\" could not reverse geocode coordinates: {latitude}, {longitude}.";

/// Fallback composition of providers.
///
/// Build the chain, including every [`add`](Chain::add), before sharing it;
/// `add` takes `&mut self` so it cannot race with queries in flight.
pub struct Chain {
    providers: Vec<Arc<dyn Provider>>,
    logger: Arc<dyn Logger>,
    geocode_log_level: LogLevel,
    reverse_log_level: LogLevel,
}

impl Chain {
    /// Creates a chain trying `providers` in the given order.
    pub fn new(providers: Vec<Arc<dyn Provider>>) -> Self {
        Self {
            providers,
            logger: Arc::new(NoOpLogger),
            geocode_log_level: DEFAULT_CHAIN_LOG_LEVEL,
            reverse_log_level: DEFAULT_CHAIN_LOG_LEVEL,
        }
    }

    /// Attaches the sink that receives swallowed provider failures.
    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = logger;
        self
    }

    /// Sets the level of failures logged during geocode queries.
    pub fn with_geocode_log_level(mut self, level: LogLevel) -> Self {
        self.geocode_log_level = level;
        self
    }

    /// Sets the level of failures logged during reverse queries.
    pub fn with_reverse_log_level(mut self, level: LogLevel) -> Self {
        self.reverse_log_level = level;
        self
    }

    /// Appends a provider, tried after all existing ones.
    pub fn add(&mut self, provider: Arc<dyn Provider>) -> &mut Self {
        self.providers.push(provider);
        self
    }

    pub fn providers(&self) -> &[Arc<dyn Provider>] {
        &self.providers
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Returns the first non-empty result of `call`, logging every failure.
    fn first_non_empty<F, C>(
        &self,
        call: F,
        level: LogLevel,
        message: &str,
        context: C,
    ) -> AddressCollection
    where
        F: Fn(&dyn Provider) -> GeocoderResult<AddressCollection>,
        C: Fn(&dyn Provider, &GeocoderError) -> Vec<(&'static str, String)>,
    {
        for provider in &self.providers {
            match call(provider.as_ref()) {
                Ok(result) if !result.is_empty() => {
                    debug!(provider = provider.name(), results = result.len(), "Chain hit");
                    return result;
                }
                Ok(_) => {
                    debug!(provider = provider.name(), "Chain provider returned no result");
                }
                Err(e) => {
                    let context = context(provider.as_ref(), &e);
                    self.logger.log(level, message, &context);
                }
            }
        }
        AddressCollection::empty()
    }
}

impl Provider for Chain {
    /// Never fails: exhausting every provider yields an empty collection.
    fn geocode_query(&self, query: &GeocodeQuery) -> GeocoderResult<AddressCollection> {
        Ok(self.first_non_empty(
            |provider| provider.geocode_query(query),
            self.geocode_log_level,
            GEOCODE_FAILURE,
            |provider, error| {
                vec![
                    ("provider_name", provider.name().to_string()),
                    ("address", query.text().to_string()),
                    ("error", error.to_string()),
                ]
            },
        ))
    }

    /// Never fails: exhausting every provider yields an empty collection.
    fn reverse_query(&self, query: &ReverseQuery) -> GeocoderResult<AddressCollection> {
        let coordinates = query.coordinates();
        Ok(self.first_non_empty(
            |provider| provider.reverse_query(query),
            self.reverse_log_level,
            REVERSE_FAILURE,
            |provider, error| {
                vec![
                    ("provider_name", provider.name().to_string()),
                    ("latitude", coordinates.latitude().to_string()),
                    ("longitude", coordinates.longitude().to_string()),
                    ("error", error.to_string()),
                ]
            },
        ))
    }

    fn name(&self) -> &str {
        CHAIN_NAME
    }
}
