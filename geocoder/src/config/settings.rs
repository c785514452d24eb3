//! Settings structs for all configuration sections.
//!
//! Each struct represents one `[section]` of the INI config file. The
//! helpers on [`GeocoderConfig`] turn them into configured components.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use super::defaults::*;
use crate::cache::{
    CacheStore, CacheStrategy, Expire, MemoryCacheStore, ProviderCache, StaleIfError,
};
use crate::error::GeocoderResult;
use crate::log::LogLevel;
use crate::provider::{Chain, Provider};
use crate::query::{GeocodeQuery, ReverseQuery};

/// Complete configuration loaded from config.ini.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeocoderConfig {
    /// Defaults applied to queries built from configuration
    pub query: QuerySettings,
    /// Chain failure logging
    pub chain: ChainSettings,
    /// Provider cache settings
    pub cache: CacheSettings,
}

/// Query defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct QuerySettings {
    /// Maximum number of results requested
    pub default_limit: usize,
    /// Preferred result language, if any
    pub locale: Option<String>,
}

/// Chain configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ChainSettings {
    pub geocode_log_level: LogLevel,
    pub reverse_log_level: LogLevel,
}

/// Cache configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheSettings {
    /// Entry lifetime; `None` keeps entries until evicted
    pub lifetime: Option<Duration>,
    /// Prefix of every cache key
    pub key_version: String,
    /// Capacity of the in-memory store
    pub max_entries: u64,
    pub strategy: CacheStrategyKind,
}

/// Which [`CacheStrategy`] a configured cache uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CacheStrategyKind {
    /// Drop entries once their lifetime is over
    #[default]
    Expire,
    /// Keep serving expired entries while the provider fails
    StaleIfError,
}

impl CacheStrategyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CacheStrategyKind::Expire => "expire",
            CacheStrategyKind::StaleIfError => "stale_if_error",
        }
    }
}

impl fmt::Display for CacheStrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CacheStrategyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "expire" => Ok(CacheStrategyKind::Expire),
            "stale_if_error" => Ok(CacheStrategyKind::StaleIfError),
            other => Err(format!("unknown cache strategy '{}'", other)),
        }
    }
}

impl Default for QuerySettings {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_QUERY_LIMIT,
            locale: None,
        }
    }
}

impl Default for ChainSettings {
    fn default() -> Self {
        Self {
            geocode_log_level: DEFAULT_GEOCODE_LOG_LEVEL,
            reverse_log_level: DEFAULT_REVERSE_LOG_LEVEL,
        }
    }
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            lifetime: Some(DEFAULT_CACHE_LIFETIME),
            key_version: DEFAULT_CACHE_KEY_VERSION.to_string(),
            max_entries: DEFAULT_CACHE_MAX_ENTRIES,
            strategy: CacheStrategyKind::default(),
        }
    }
}

impl GeocoderConfig {
    pub fn with_default_limit(mut self, limit: usize) -> Self {
        self.query.default_limit = limit;
        self
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.query.locale = Some(locale.into());
        self
    }

    pub fn with_cache_lifetime(mut self, lifetime: Option<Duration>) -> Self {
        self.cache.lifetime = lifetime;
        self
    }

    pub fn with_cache_strategy(mut self, strategy: CacheStrategyKind) -> Self {
        self.cache.strategy = strategy;
        self
    }

    /// Builds a geocode query carrying the configured limit and locale.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `text` is empty.
    pub fn geocode_query(&self, text: &str) -> GeocoderResult<GeocodeQuery> {
        let query = GeocodeQuery::create(text)?.with_limit(self.query.default_limit);
        Ok(match &self.query.locale {
            Some(locale) => query.with_locale(locale.as_str()),
            None => query,
        })
    }

    /// Builds a reverse query carrying the configured limit and locale.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for out-of-range coordinates.
    pub fn reverse_query(&self, latitude: f64, longitude: f64) -> GeocoderResult<ReverseQuery> {
        let query = ReverseQuery::from_coordinates(latitude, longitude)?
            .with_limit(self.query.default_limit);
        Ok(match &self.query.locale {
            Some(locale) => query.with_locale(locale.as_str()),
            None => query,
        })
    }

    /// Creates a chain over `providers` with the configured log levels.
    pub fn build_chain(&self, providers: Vec<Arc<dyn Provider>>) -> Chain {
        Chain::new(providers)
            .with_geocode_log_level(self.chain.geocode_log_level)
            .with_reverse_log_level(self.chain.reverse_log_level)
    }

    /// Creates an in-memory store sized from the configuration.
    pub fn build_store(&self) -> MemoryCacheStore {
        MemoryCacheStore::new(self.cache.max_entries)
    }

    /// Creates the configured caching policy over `store`.
    pub fn build_strategy(&self, store: Arc<dyn CacheStore>) -> Arc<dyn CacheStrategy> {
        match self.cache.strategy {
            CacheStrategyKind::Expire => Arc::new(Expire::new(store, self.cache.lifetime)),
            CacheStrategyKind::StaleIfError => Arc::new(StaleIfError::new(
                store,
                self.cache.lifetime.unwrap_or(Duration::MAX),
            )),
        }
    }

    /// Wraps `provider` in a cache using the configured policy and key
    /// version.
    pub fn build_cache<P: Provider>(
        &self,
        provider: P,
        store: Arc<dyn CacheStore>,
    ) -> ProviderCache<P> {
        ProviderCache::with_strategy(provider, self.build_strategy(store))
            .with_key_version(self.cache.key_version.as_str())
    }
}
