//! Ordered, read-only result sets.

use std::slice;

use serde::{Deserialize, Serialize};

use super::Address;
use crate::error::{GeocoderError, GeocoderResult};

/// The results of one geocode or reverse query, in provider order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddressCollection {
    locations: Vec<Address>,
}

impl AddressCollection {
    pub fn new(locations: Vec<Address>) -> Self {
        Self { locations }
    }

    /// A collection without results.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the first result.
    ///
    /// # Errors
    ///
    /// Returns `CollectionIsEmpty` when there are no results.
    pub fn first(&self) -> GeocoderResult<&Address> {
        self.locations.first().ok_or(GeocoderError::CollectionIsEmpty)
    }

    /// Returns the result at `index`.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` when `index >= len()`.
    pub fn get(&self, index: usize) -> GeocoderResult<&Address> {
        self.locations.get(index).ok_or_else(|| {
            GeocoderError::OutOfBounds(format!(
                "index {} is out of bounds for a collection of {}",
                index,
                self.locations.len()
            ))
        })
    }

    pub fn has(&self, index: usize) -> bool {
        index < self.locations.len()
    }

    /// Returns up to `length` results starting at `offset`.
    pub fn slice(&self, offset: usize, length: Option<usize>) -> &[Address] {
        let start = offset.min(self.locations.len());
        let end = match length {
            Some(n) => start.saturating_add(n).min(self.locations.len()),
            None => self.locations.len(),
        };
        &self.locations[start..end]
    }

    pub fn all(&self) -> &[Address] {
        &self.locations
    }

    pub fn iter(&self) -> slice::Iter<'_, Address> {
        self.locations.iter()
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}

impl From<Vec<Address>> for AddressCollection {
    fn from(locations: Vec<Address>) -> Self {
        Self::new(locations)
    }
}

impl FromIterator<Address> for AddressCollection {
    fn from_iter<I: IntoIterator<Item = Address>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for AddressCollection {
    type Item = Address;
    type IntoIter = std::vec::IntoIter<Address>;

    fn into_iter(self) -> Self::IntoIter {
        self.locations.into_iter()
    }
}

impl<'a> IntoIterator for &'a AddressCollection {
    type Item = &'a Address;
    type IntoIter = slice::Iter<'a, Address>;

    fn into_iter(self) -> Self::IntoIter {
        self.locations.iter()
    }
}
