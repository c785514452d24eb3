//! Name-keyed provider registry.

use std::sync::Arc;

use super::Provider;
use crate::error::{GeocoderError, GeocoderResult};
use crate::model::AddressCollection;
use crate::query::{GeocodeQuery, ReverseQuery, DEFAULT_RESULT_LIMIT};

/// Name reported by every aggregator.
pub const AGGREGATOR_NAME: &str = "provider_aggregator";

/// Routes queries to one of several registered providers.
///
/// Queries go to the provider selected with [`using`](Self::using), or to the
/// first registered provider when none was selected.
pub struct ProviderAggregator {
    providers: Vec<Arc<dyn Provider>>,
    current: Option<String>,
    limit: usize,
}

impl Default for ProviderAggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl ProviderAggregator {
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_RESULT_LIMIT)
    }

    /// Creates an aggregator whose shorthand queries ask for `limit` results.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            providers: Vec::new(),
            current: None,
            limit,
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Registers a provider under its own name.
    ///
    /// A provider with the same name is replaced in place.
    pub fn register_provider(&mut self, provider: Arc<dyn Provider>) -> &mut Self {
        match self
            .providers
            .iter_mut()
            .find(|p| p.name() == provider.name())
        {
            Some(existing) => *existing = provider,
            None => self.providers.push(provider),
        }
        self
    }

    pub fn register_providers(
        &mut self,
        providers: impl IntoIterator<Item = Arc<dyn Provider>>,
    ) -> &mut Self {
        for provider in providers {
            self.register_provider(provider);
        }
        self
    }

    /// Selects the provider used for subsequent queries.
    ///
    /// # Errors
    ///
    /// Returns `ProviderNotRegistered` if no provider has this name.
    pub fn using(&mut self, name: &str) -> GeocoderResult<&mut Self> {
        if !self.providers.iter().any(|p| p.name() == name) {
            return Err(GeocoderError::ProviderNotRegistered(name.to_string()));
        }
        self.current = Some(name.to_string());
        Ok(self)
    }

    pub fn providers(&self) -> &[Arc<dyn Provider>] {
        &self.providers
    }

    /// Geocodes `text` with the aggregator's limit.
    pub fn geocode(&self, text: &str) -> GeocoderResult<AddressCollection> {
        let query = GeocodeQuery::create(text)?.with_limit(self.limit);
        self.geocode_query(&query)
    }

    /// Reverse geocodes a point with the aggregator's limit.
    pub fn reverse(&self, latitude: f64, longitude: f64) -> GeocoderResult<AddressCollection> {
        let query = ReverseQuery::from_coordinates(latitude, longitude)?.with_limit(self.limit);
        self.reverse_query(&query)
    }

    fn current_provider(&self) -> GeocoderResult<&Arc<dyn Provider>> {
        match &self.current {
            Some(name) => self
                .providers
                .iter()
                .find(|p| p.name() == name.as_str())
                .ok_or_else(|| GeocoderError::ProviderNotRegistered(name.clone())),
            None => self
                .providers
                .first()
                .ok_or_else(GeocoderError::no_provider_registered),
        }
    }
}

impl Provider for ProviderAggregator {
    fn geocode_query(&self, query: &GeocodeQuery) -> GeocoderResult<AddressCollection> {
        self.current_provider()?.geocode_query(query)
    }

    fn reverse_query(&self, query: &ReverseQuery) -> GeocoderResult<AddressCollection> {
        self.current_provider()?.reverse_query(query)
    }

    fn name(&self) -> &str {
        AGGREGATOR_NAME
    }
}
