//! The normalized geocoding result record.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{AdminLevelCollection, Bounds, Coordinates, Country};

/// Read interface shared by every geocoding result.
pub trait Location {
    /// Name of the provider that produced this result.
    fn provided_by(&self) -> &str;
    fn coordinates(&self) -> Option<&Coordinates>;
    fn bounds(&self) -> Option<&Bounds>;
    fn street_number(&self) -> Option<&str>;
    fn street_name(&self) -> Option<&str>;
    fn postal_code(&self) -> Option<&str>;
    fn locality(&self) -> Option<&str>;
    fn sub_locality(&self) -> Option<&str>;
    fn admin_levels(&self) -> &AdminLevelCollection;
    fn country(&self) -> Option<&Country>;
    fn timezone(&self) -> Option<&str>;

    /// Convenience accessor mirroring `country().code()`.
    fn country_code(&self) -> Option<&str> {
        self.country().and_then(Country::code)
    }
}

/// An immutable geocoding result.
///
/// Vendor-specific attributes (a Bing confidence, an OSM id, ...) are kept
/// in a key-value side table instead of dedicated fields; see
/// [`Address::extra`] and [`Address::with_extra`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub(crate) provided_by: String,
    pub(crate) coordinates: Option<Coordinates>,
    pub(crate) bounds: Option<Bounds>,
    pub(crate) street_number: Option<String>,
    pub(crate) street_name: Option<String>,
    pub(crate) postal_code: Option<String>,
    pub(crate) locality: Option<String>,
    pub(crate) sub_locality: Option<String>,
    #[serde(default)]
    pub(crate) admin_levels: AdminLevelCollection,
    pub(crate) country: Option<Country>,
    pub(crate) timezone: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub(crate) extra: BTreeMap<String, Value>,
}

impl Address {
    /// Returns a vendor-specific attribute.
    pub fn extra(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }

    /// All vendor-specific attributes, sorted by key.
    pub fn extras(&self) -> &BTreeMap<String, Value> {
        &self.extra
    }

    /// Returns a copy carrying one more vendor-specific attribute.
    #[must_use]
    pub fn with_extra(&self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let mut address = self.clone();
        address.extra.insert(key.into(), value.into());
        address
    }

    /// Returns a copy with a different timezone.
    #[must_use]
    pub fn with_timezone(&self, timezone: Option<String>) -> Self {
        Self {
            timezone,
            ..self.clone()
        }
    }

    /// Returns a copy attributed to another provider.
    #[must_use]
    pub fn with_provided_by(&self, provided_by: impl Into<String>) -> Self {
        Self {
            provided_by: provided_by.into(),
            ..self.clone()
        }
    }
}

impl Location for Address {
    fn provided_by(&self) -> &str {
        &self.provided_by
    }

    fn coordinates(&self) -> Option<&Coordinates> {
        self.coordinates.as_ref()
    }

    fn bounds(&self) -> Option<&Bounds> {
        self.bounds.as_ref()
    }

    fn street_number(&self) -> Option<&str> {
        self.street_number.as_deref()
    }

    fn street_name(&self) -> Option<&str> {
        self.street_name.as_deref()
    }

    fn postal_code(&self) -> Option<&str> {
        self.postal_code.as_deref()
    }

    fn locality(&self) -> Option<&str> {
        self.locality.as_deref()
    }

    fn sub_locality(&self) -> Option<&str> {
        self.sub_locality.as_deref()
    }

    fn admin_levels(&self) -> &AdminLevelCollection {
        &self.admin_levels
    }

    fn country(&self) -> Option<&Country> {
        self.country.as_ref()
    }

    fn timezone(&self) -> Option<&str> {
        self.timezone.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AddressBuilder;

    fn paris() -> Address {
        let mut builder = AddressBuilder::new("nominatim");
        builder
            .set_locality("Paris")
            .set_country("France")
            .set_country_code("FR")
            .set_coordinates(48.8566, 2.3522);
        builder.build().unwrap()
    }

    #[test]
    fn test_with_extra_leaves_original_untouched() {
        let original = paris();
        let enriched = original.with_extra("osm_id", 7444);

        assert!(original.extra("osm_id").is_none());
        assert_eq!(enriched.extra("osm_id"), Some(&Value::from(7444)));
        assert_eq!(enriched.locality(), Some("Paris"));
    }

    #[test]
    fn test_with_timezone() {
        let original = paris();
        let zoned = original.with_timezone(Some("Europe/Paris".into()));

        assert_eq!(original.timezone(), None);
        assert_eq!(zoned.timezone(), Some("Europe/Paris"));
        assert_eq!(zoned.coordinates(), original.coordinates());
    }

    #[test]
    fn test_country_code_mirrors_country() {
        let address = paris();
        assert_eq!(address.country_code(), Some("FR"));
        assert_eq!(address.country().and_then(Country::code), Some("FR"));
    }

    #[test]
    fn test_serde_round_trip_keeps_extras() {
        let address = paris().with_extra("importance", 0.98);
        let json = serde_json::to_string(&address).unwrap();
        let restored: Address = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, address);
    }
}
