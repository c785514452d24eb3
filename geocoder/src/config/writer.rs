//! INI serialization logic for converting `GeocoderConfig` → INI string.

use super::duration::format_lifetime;
use super::settings::GeocoderConfig;

/// Convert a `GeocoderConfig` to a commented INI string for saving.
pub(super) fn to_config_string(config: &GeocoderConfig) -> String {
    let locale = config.query.locale.as_deref().unwrap_or("");

    format!(
        r#"[query]
; Maximum number of results each query asks for
default_limit = {}
; Preferred result language (e.g. en, fr); empty to let providers decide
locale = {}

[chain]
; Level used when a provider in a chain fails
;   trace, debug, info, warn, error, alert
geocode_log_level = {}
reverse_log_level = {}

[cache]
; How long results are kept: seconds, or 30s / 10m / 2h / 1d, or none
lifetime = {}
; Prefix of every cache key; change it to invalidate all cached results
key_version = {}
; Entries held by the in-memory store
max_entries = {}
; expire         - drop results once their lifetime is over
; stale_if_error - keep serving old results while providers fail
strategy = {}
"#,
        config.query.default_limit,
        locale,
        config.chain.geocode_log_level,
        config.chain.reverse_log_level,
        format_lifetime(config.cache.lifetime),
        config.cache.key_version,
        config.cache.max_entries,
        config.cache.strategy,
    )
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::config::settings::CacheStrategyKind;
    use crate::log::LogLevel;

    #[test]
    fn test_written_config_parses_back() {
        let mut config = GeocoderConfig::default()
            .with_default_limit(3)
            .with_locale("fr")
            .with_cache_lifetime(Some(Duration::from_secs(600)))
            .with_cache_strategy(CacheStrategyKind::StaleIfError);
        config.chain.reverse_log_level = LogLevel::Info;

        let written = to_config_string(&config);
        let parsed = GeocoderConfig::from_ini_str(&written).unwrap();

        assert_eq!(parsed, config);
    }

    #[test]
    fn test_default_config_parses_back() {
        let written = to_config_string(&GeocoderConfig::default());
        assert!(written.contains("lifetime = 1d"));
        assert_eq!(
            GeocoderConfig::from_ini_str(&written).unwrap(),
            GeocoderConfig::default()
        );
    }
}
