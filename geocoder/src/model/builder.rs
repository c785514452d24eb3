//! Incremental construction of [`Address`] values.
//!
//! Adapters feed raw vendor fields into an [`AddressBuilder`] as they walk a
//! response, then call [`AddressBuilder::build`] once to obtain the
//! immutable result.

use std::collections::BTreeMap;

use serde_json::Value;

use super::{AdminLevel, AdminLevelCollection, Address, Bounds, Coordinates, Country};
use crate::error::GeocoderResult;

/// Mutable staging area for one [`Address`].
#[derive(Debug, Clone, Default)]
pub struct AddressBuilder {
    provided_by: String,
    coordinates: Option<Coordinates>,
    bounds: Option<Bounds>,
    street_number: Option<String>,
    street_name: Option<String>,
    postal_code: Option<String>,
    locality: Option<String>,
    sub_locality: Option<String>,
    admin_levels: Vec<AdminLevel>,
    country: Option<String>,
    country_code: Option<String>,
    timezone: Option<String>,
    values: BTreeMap<String, Value>,
}

impl AddressBuilder {
    /// Starts a builder for a result produced by `provided_by`.
    pub fn new(provided_by: impl Into<String>) -> Self {
        Self {
            provided_by: provided_by.into(),
            ..Self::default()
        }
    }

    /// Sets the point. Out-of-range values are dropped silently.
    pub fn set_coordinates(&mut self, latitude: f64, longitude: f64) -> &mut Self {
        self.coordinates = Coordinates::new(latitude, longitude).ok();
        self
    }

    /// Sets the bounding box. Out-of-range values are dropped silently.
    pub fn set_bounds(&mut self, south: f64, west: f64, north: f64, east: f64) -> &mut Self {
        self.bounds = Bounds::new(south, west, north, east).ok();
        self
    }

    pub fn set_street_number(&mut self, street_number: impl Into<String>) -> &mut Self {
        self.street_number = Some(street_number.into());
        self
    }

    pub fn set_street_name(&mut self, street_name: impl Into<String>) -> &mut Self {
        self.street_name = Some(street_name.into());
        self
    }

    pub fn set_postal_code(&mut self, postal_code: impl Into<String>) -> &mut Self {
        self.postal_code = Some(postal_code.into());
        self
    }

    pub fn set_locality(&mut self, locality: impl Into<String>) -> &mut Self {
        self.locality = Some(locality.into());
        self
    }

    pub fn set_sub_locality(&mut self, sub_locality: impl Into<String>) -> &mut Self {
        self.sub_locality = Some(sub_locality.into());
        self
    }

    /// Stages an admin level. Validation happens in [`build`](Self::build).
    pub fn add_admin_level(
        &mut self,
        level: u8,
        name: Option<String>,
        code: Option<String>,
    ) -> &mut Self {
        self.admin_levels.push(AdminLevel::new(level, name, code));
        self
    }

    pub fn set_country(&mut self, country: impl Into<String>) -> &mut Self {
        self.country = Some(country.into());
        self
    }

    pub fn set_country_code(&mut self, country_code: impl Into<String>) -> &mut Self {
        self.country_code = Some(country_code.into());
        self
    }

    pub fn set_timezone(&mut self, timezone: impl Into<String>) -> &mut Self {
        self.timezone = Some(timezone.into());
        self
    }

    /// Stages a vendor-specific attribute; it ends up in [`Address::extra`].
    pub fn set_value(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.values.insert(key.into(), value.into());
        self
    }

    pub fn value(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn coordinates(&self) -> Option<&Coordinates> {
        self.coordinates.as_ref()
    }

    pub fn bounds(&self) -> Option<&Bounds> {
        self.bounds.as_ref()
    }

    /// Produces the immutable address.
    ///
    /// # Errors
    ///
    /// Fails when the staged admin levels are out of range or duplicated.
    pub fn build(&self) -> GeocoderResult<Address> {
        let admin_levels = AdminLevelCollection::new(self.admin_levels.iter().cloned())?;

        let country = if self.country.is_some() || self.country_code.is_some() {
            Some(Country::new(
                self.country.clone(),
                self.country_code.clone(),
            )?)
        } else {
            None
        };

        Ok(Address {
            provided_by: self.provided_by.clone(),
            coordinates: self.coordinates,
            bounds: self.bounds,
            street_number: self.street_number.clone(),
            street_name: self.street_name.clone(),
            postal_code: self.postal_code.clone(),
            locality: self.locality.clone(),
            sub_locality: self.sub_locality.clone(),
            admin_levels,
            country,
            timezone: self.timezone.clone(),
            extra: self.values.clone(),
        })
    }
}
