//! INI parsing logic for converting `Ini` → `GeocoderConfig`.
//!
//! This is the single place where INI key names are mapped to struct fields.

use ini::Ini;

use super::duration::parse_lifetime;
use super::file::ConfigError;
use super::settings::GeocoderConfig;
use crate::log::LogLevel;

fn invalid(section: &str, key: &str, value: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        section: section.to_string(),
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn parse_log_level(section: &str, key: &str, value: &str) -> Result<LogLevel, ConfigError> {
    value.parse().map_err(|_| {
        invalid(
            section,
            key,
            value,
            "must be one of: trace, debug, info, warn, error, alert",
        )
    })
}

/// Parse an `Ini` object into a `GeocoderConfig`.
///
/// Starts from `GeocoderConfig::default()` and overlays any values found in the INI.
pub(super) fn parse_ini(ini: &Ini) -> Result<GeocoderConfig, ConfigError> {
    let mut config = GeocoderConfig::default();

    // [query] section
    if let Some(section) = ini.section(Some("query")) {
        if let Some(v) = section.get("default_limit") {
            config.query.default_limit = match v.trim().parse::<usize>() {
                Ok(limit) if limit > 0 => limit,
                _ => return Err(invalid("query", "default_limit", v, "must be a positive integer")),
            };
        }
        if let Some(v) = section.get("locale") {
            let v = v.trim();
            config.query.locale = if v.is_empty() {
                None
            } else {
                Some(v.to_string())
            };
        }
    }

    // [chain] section
    if let Some(section) = ini.section(Some("chain")) {
        if let Some(v) = section.get("geocode_log_level") {
            config.chain.geocode_log_level = parse_log_level("chain", "geocode_log_level", v)?;
        }
        if let Some(v) = section.get("reverse_log_level") {
            config.chain.reverse_log_level = parse_log_level("chain", "reverse_log_level", v)?;
        }
    }

    // [cache] section
    if let Some(section) = ini.section(Some("cache")) {
        if let Some(v) = section.get("lifetime") {
            config.cache.lifetime = parse_lifetime(v).map_err(|_| {
                invalid(
                    "cache",
                    "lifetime",
                    v,
                    "expected seconds or a value like '30s', '10m', '2h', '1d', or 'none'",
                )
            })?;
        }
        if let Some(v) = section.get("key_version") {
            let v = v.trim();
            if v.is_empty() || !v.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
                return Err(invalid(
                    "cache",
                    "key_version",
                    v,
                    "must be a non-empty alphanumeric prefix",
                ));
            }
            config.cache.key_version = v.to_string();
        }
        if let Some(v) = section.get("max_entries") {
            config.cache.max_entries = match v.trim().parse::<u64>() {
                Ok(n) if n > 0 => n,
                _ => return Err(invalid("cache", "max_entries", v, "must be a positive integer")),
            };
        }
        if let Some(v) = section.get("strategy") {
            config.cache.strategy = v.parse().map_err(|_| {
                invalid(
                    "cache",
                    "strategy",
                    v,
                    "must be 'expire' or 'stale_if_error'",
                )
            })?;
        }
    }

    Ok(config)
}
