//! Human-readable lifetimes (e.g., "30s", "10m", "1d").

use std::time::Duration;

use thiserror::Error;

/// Error parsing a lifetime string.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid lifetime '{input}' - expected seconds or a value like '30s', '10m', '2h', '1d', or 'none'")]
pub struct LifetimeParseError {
    input: String,
}

impl LifetimeParseError {
    fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }
}

/// Parse a cache lifetime.
///
/// Supports:
/// - Bare numbers (treated as seconds)
/// - s/m/h/d suffixes
/// - `none` or `forever` for entries that never expire
/// - Case-insensitive, whitespace tolerant
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use geocoder::config::parse_lifetime;
///
/// assert_eq!(parse_lifetime("90").unwrap(), Some(Duration::from_secs(90)));
/// assert_eq!(parse_lifetime("10m").unwrap(), Some(Duration::from_secs(600)));
/// assert_eq!(parse_lifetime("1 d").unwrap(), Some(Duration::from_secs(86_400)));
/// assert_eq!(parse_lifetime("none").unwrap(), None);
/// ```
pub fn parse_lifetime(s: &str) -> Result<Option<Duration>, LifetimeParseError> {
    let s = s.trim();
    let lower = s.to_lowercase();

    match lower.as_str() {
        "" => return Err(LifetimeParseError::new(s)),
        "none" | "forever" => return Ok(None),
        _ => {}
    }

    let (num_str, multiplier) = match lower.char_indices().last() {
        Some((idx, 's')) => (&lower[..idx], 1_u64),
        Some((idx, 'm')) => (&lower[..idx], 60),
        Some((idx, 'h')) => (&lower[..idx], 60 * 60),
        Some((idx, 'd')) => (&lower[..idx], 24 * 60 * 60),
        _ => (lower.as_str(), 1),
    };

    let num: u64 = num_str
        .trim()
        .parse()
        .map_err(|_| LifetimeParseError::new(s))?;

    num.checked_mul(multiplier)
        .map(|secs| Some(Duration::from_secs(secs)))
        .ok_or_else(|| LifetimeParseError::new(s))
}

/// Format a lifetime in the largest unit that divides it evenly.
///
/// Sub-second parts round up to the next whole second, so a short non-zero
/// lifetime never reads back as zero.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use geocoder::config::format_lifetime;
///
/// assert_eq!(format_lifetime(Some(Duration::from_secs(7200))), "2h");
/// assert_eq!(format_lifetime(Some(Duration::from_secs(45))), "45s");
/// assert_eq!(format_lifetime(None), "none");
/// ```
pub fn format_lifetime(lifetime: Option<Duration>) -> String {
    let Some(lifetime) = lifetime else {
        return "none".to_string();
    };

    let secs = lifetime
        .as_secs()
        .saturating_add(u64::from(lifetime.subsec_nanos() > 0));
    if secs == 0 {
        return "0s".to_string();
    }

    for (unit, size) in [("d", 86_400), ("h", 3_600), ("m", 60)] {
        if secs % size == 0 {
            return format!("{}{}", secs / size, unit);
        }
    }
    format!("{}s", secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_seconds() {
        assert_eq!(parse_lifetime("0").unwrap(), Some(Duration::ZERO));
        assert_eq!(parse_lifetime(" 3600 ").unwrap(), Some(Duration::from_secs(3600)));
    }

    #[test]
    fn test_parse_suffixes() {
        assert_eq!(parse_lifetime("30s").unwrap(), Some(Duration::from_secs(30)));
        assert_eq!(parse_lifetime("2H").unwrap(), Some(Duration::from_secs(7200)));
        assert_eq!(parse_lifetime("7d").unwrap(), Some(Duration::from_secs(604_800)));
    }

    #[test]
    fn test_parse_never_expiring() {
        assert_eq!(parse_lifetime("Forever").unwrap(), None);
        assert_eq!(parse_lifetime("NONE").unwrap(), None);
    }

    #[test]
    fn test_parse_invalid() {
        assert!(parse_lifetime("").is_err());
        assert!(parse_lifetime("soon").is_err());
        assert!(parse_lifetime("-5s").is_err());
        assert!(parse_lifetime("1w").is_err());
        assert!(parse_lifetime(&format!("{}d", u64::MAX)).is_err());
    }

    #[test]
    fn test_format_rounds_sub_second_up() {
        let written = format_lifetime(Some(Duration::from_millis(500)));

        assert_eq!(written, "1s");
        assert_eq!(parse_lifetime(&written).unwrap(), Some(Duration::from_secs(1)));
        assert_eq!(format_lifetime(Some(Duration::from_millis(90_500))), "91s");
    }

    #[test]
    fn test_format_round_trips() {
        for input in ["45s", "10m", "2h", "1d", "none", "0s"] {
            assert_eq!(format_lifetime(parse_lifetime(input).unwrap()), input);
        }
    }
}
