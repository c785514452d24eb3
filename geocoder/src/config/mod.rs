//! Configuration for composing providers.
//!
//! Settings are read from `~/.geocoder/config.ini`; every key is optional
//! and falls back to the defaults in this module.
//!
//! ```ini
//! [query]
//! default_limit = 5
//! locale = fr
//!
//! [chain]
//! geocode_log_level = alert
//! reverse_log_level = warn
//!
//! [cache]
//! lifetime = 1h
//! key_version = v1
//! max_entries = 10000
//! strategy = stale_if_error
//! ```
//!
//! # Example
//!
//! ```
//! use geocoder::config::GeocoderConfig;
//!
//! let config = GeocoderConfig::from_ini_str("[query]\ndefault_limit = 3\n").unwrap();
//! let query = config.geocode_query("Paris").unwrap();
//!
//! assert_eq!(config.query.default_limit, 3);
//! assert_eq!(query.text(), "Paris");
//! ```

mod defaults;
mod duration;
mod file;
mod parser;
mod settings;
mod writer;

pub use defaults::*;
pub use duration::{format_lifetime, parse_lifetime, LifetimeParseError};
pub use file::{config_directory, config_file_path, ConfigError};
pub use settings::{CacheSettings, CacheStrategyKind, ChainSettings, GeocoderConfig, QuerySettings};
