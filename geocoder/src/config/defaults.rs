//! Default values for every configuration key.

use std::time::Duration;

use crate::cache::{CACHE_KEY_VERSION, DEFAULT_MAX_ENTRIES};
use crate::log::LogLevel;
use crate::provider::DEFAULT_CHAIN_LOG_LEVEL;
use crate::query::DEFAULT_RESULT_LIMIT;

/// Results requested by queries built from configuration.
pub const DEFAULT_QUERY_LIMIT: usize = DEFAULT_RESULT_LIMIT;

/// Level for swallowed failures during geocode queries.
pub const DEFAULT_GEOCODE_LOG_LEVEL: LogLevel = DEFAULT_CHAIN_LOG_LEVEL;

/// Level for swallowed failures during reverse queries.
pub const DEFAULT_REVERSE_LOG_LEVEL: LogLevel = DEFAULT_CHAIN_LOG_LEVEL;

/// Cache entry lifetime (1 day).
pub const DEFAULT_CACHE_LIFETIME: Duration = Duration::from_secs(24 * 60 * 60);

pub const DEFAULT_CACHE_KEY_VERSION: &str = CACHE_KEY_VERSION;

/// Entries held by the in-memory store.
pub const DEFAULT_CACHE_MAX_ENTRIES: u64 = DEFAULT_MAX_ENTRIES;

/// Name of the configuration directory under the home directory.
pub const CONFIG_DIR_NAME: &str = ".geocoder";

pub const CONFIG_FILE_NAME: &str = "config.ini";
