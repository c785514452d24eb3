//! Reverse geocoding queries.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use super::{write_canonical, Query, QueryData, DEFAULT_RESULT_LIMIT};
use crate::error::GeocoderResult;
use crate::model::Coordinates;

/// Coordinates-to-address lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct ReverseQuery {
    coordinates: Coordinates,
    locale: Option<String>,
    limit: usize,
    data: QueryData,
}

#[derive(Serialize)]
struct CanonicalView<'a> {
    lat: f64,
    lng: f64,
    locale: Option<&'a str>,
    limit: usize,
    data: &'a QueryData,
}

impl ReverseQuery {
    pub fn create(coordinates: Coordinates) -> Self {
        Self {
            coordinates,
            locale: None,
            limit: DEFAULT_RESULT_LIMIT,
            data: QueryData::new(),
        }
    }

    /// # Errors
    ///
    /// Returns `InvalidArgument` for out-of-range coordinates.
    pub fn from_coordinates(latitude: f64, longitude: f64) -> GeocoderResult<Self> {
        Ok(Self::create(Coordinates::new(latitude, longitude)?))
    }

    pub fn coordinates(&self) -> &Coordinates {
        &self.coordinates
    }

    #[must_use]
    pub fn with_coordinates(&self, coordinates: Coordinates) -> Self {
        Self {
            coordinates,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_locale(&self, locale: impl Into<String>) -> Self {
        Self {
            locale: Some(locale.into()),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_limit(&self, limit: usize) -> Self {
        Self {
            limit,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_data(&self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        let mut query = self.clone();
        query.data.insert(name.into(), value.into());
        query
    }
}

impl Query for ReverseQuery {
    fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    fn limit(&self) -> usize {
        self.limit
    }

    fn all_data(&self) -> &QueryData {
        &self.data
    }
}

impl fmt::Display for ReverseQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = CanonicalView {
            lat: self.coordinates.latitude(),
            lng: self.coordinates.longitude(),
            locale: self.locale.as_deref(),
            limit: self.limit,
            data: &self.data,
        };
        write_canonical(f, "ReverseQuery", &view)
    }
}
