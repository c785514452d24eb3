//! Geographic value types: points and bounding boxes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{GeocoderError, GeocoderResult};

/// Valid latitude range in degrees
pub const MIN_LAT: f64 = -90.0;
pub const MAX_LAT: f64 = 90.0;

/// Valid longitude range in degrees
pub const MIN_LON: f64 = -180.0;
pub const MAX_LON: f64 = 180.0;

fn check_latitude(lat: f64) -> GeocoderResult<f64> {
    if !(MIN_LAT..=MAX_LAT).contains(&lat) {
        return Err(GeocoderError::invalid_argument(format!(
            "latitude {} is outside [{}, {}]",
            lat, MIN_LAT, MAX_LAT
        )));
    }
    // -0.0 and 0.0 compare equal and must render the same
    Ok(lat + 0.0)
}

fn check_longitude(lon: f64) -> GeocoderResult<f64> {
    if !(MIN_LON..=MAX_LON).contains(&lon) {
        return Err(GeocoderError::invalid_argument(format!(
            "longitude {} is outside [{}, {}]",
            lon, MIN_LON, MAX_LON
        )));
    }
    Ok(lon + 0.0)
}

/// A point on the globe in decimal degrees (WGS84).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    latitude: f64,
    longitude: f64,
}

impl Coordinates {
    /// Creates a point, rejecting NaN and out-of-range values.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if latitude is outside `[-90, 90]` or
    /// longitude is outside `[-180, 180]`.
    pub fn new(latitude: f64, longitude: f64) -> GeocoderResult<Self> {
        Ok(Self {
            latitude: check_latitude(latitude)?,
            longitude: check_longitude(longitude)?,
        })
    }

    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Returns `(latitude, longitude)`.
    #[inline]
    pub fn as_tuple(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}

/// A bounding rectangle given by its four edges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    south: f64,
    west: f64,
    north: f64,
    east: f64,
}

impl Bounds {
    /// Creates a bounding box, validating every edge.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if any edge is outside the valid range.
    pub fn new(south: f64, west: f64, north: f64, east: f64) -> GeocoderResult<Self> {
        Ok(Self {
            south: check_latitude(south)?,
            west: check_longitude(west)?,
            north: check_latitude(north)?,
            east: check_longitude(east)?,
        })
    }

    #[inline]
    pub fn south(&self) -> f64 {
        self.south
    }

    #[inline]
    pub fn west(&self) -> f64 {
        self.west
    }

    #[inline]
    pub fn north(&self) -> f64 {
        self.north
    }

    #[inline]
    pub fn east(&self) -> f64 {
        self.east
    }

    /// Returns the smallest bounds containing both `self` and `other`.
    pub fn merge(&self, other: &Bounds) -> Bounds {
        Bounds {
            south: self.south.min(other.south),
            west: self.west.min(other.west),
            north: self.north.max(other.north),
            east: self.east.max(other.east),
        }
    }
}
