//! Administrative levels (state, county, district, ...) attached to an address.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{GeocoderError, GeocoderResult};

/// Deepest administrative level an address can carry.
pub const MAX_LEVEL_DEPTH: u8 = 5;

/// One administrative region, e.g. level 1 = "Île-de-France".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminLevel {
    level: u8,
    name: Option<String>,
    code: Option<String>,
}

impl AdminLevel {
    pub fn new(level: u8, name: Option<String>, code: Option<String>) -> Self {
        Self { level, name, code }
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }
}

fn check_level(level: u8) -> GeocoderResult<()> {
    if level == 0 || level > MAX_LEVEL_DEPTH {
        return Err(GeocoderError::OutOfBounds(format!(
            "administrative level should be an integer in [1, {}], {} given",
            MAX_LEVEL_DEPTH, level
        )));
    }
    Ok(())
}

/// Admin levels of one address, unique per level and ordered by level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<AdminLevel>", into = "Vec<AdminLevel>")]
pub struct AdminLevelCollection {
    levels: BTreeMap<u8, AdminLevel>,
}

impl AdminLevelCollection {
    /// Builds a collection from admin levels in any order.
    ///
    /// # Errors
    ///
    /// - `OutOfBounds` if a level is outside `[1, MAX_LEVEL_DEPTH]`
    /// - `InvalidArgument` if two entries share a level
    pub fn new(admin_levels: impl IntoIterator<Item = AdminLevel>) -> GeocoderResult<Self> {
        let mut levels = BTreeMap::new();
        for admin_level in admin_levels {
            let level = admin_level.level();
            check_level(level)?;
            if levels.insert(level, admin_level).is_some() {
                return Err(GeocoderError::invalid_argument(format!(
                    "administrative level {} is defined twice",
                    level
                )));
            }
        }
        Ok(Self { levels })
    }

    /// The collection with no levels.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the lowest level present.
    ///
    /// # Errors
    ///
    /// Returns `CollectionIsEmpty` when there are no levels.
    pub fn first(&self) -> GeocoderResult<&AdminLevel> {
        self.levels
            .values()
            .next()
            .ok_or(GeocoderError::CollectionIsEmpty)
    }

    /// Returns the admin level with the given level number.
    ///
    /// # Errors
    ///
    /// - `OutOfBounds` if `level` is outside `[1, MAX_LEVEL_DEPTH]`
    /// - `InvalidArgument` if the level is valid but absent
    pub fn get(&self, level: u8) -> GeocoderResult<&AdminLevel> {
        check_level(level)?;
        self.levels.get(&level).ok_or_else(|| {
            GeocoderError::invalid_argument(format!("administrative level {} is not set", level))
        })
    }

    pub fn has(&self, level: u8) -> bool {
        self.levels.contains_key(&level)
    }

    /// Returns up to `length` levels starting at position `offset`.
    pub fn slice(&self, offset: usize, length: Option<usize>) -> Vec<&AdminLevel> {
        let iter = self.levels.values().skip(offset);
        match length {
            Some(n) => iter.take(n).collect(),
            None => iter.collect(),
        }
    }

    pub fn all(&self) -> Vec<&AdminLevel> {
        self.levels.values().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AdminLevel> {
        self.levels.values()
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

impl TryFrom<Vec<AdminLevel>> for AdminLevelCollection {
    type Error = GeocoderError;

    fn try_from(levels: Vec<AdminLevel>) -> Result<Self, Self::Error> {
        Self::new(levels)
    }
}

impl From<AdminLevelCollection> for Vec<AdminLevel> {
    fn from(collection: AdminLevelCollection) -> Self {
        collection.levels.into_values().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(n: u8, name: &str) -> AdminLevel {
        AdminLevel::new(n, Some(name.to_string()), None)
    }

    #[test]
    fn test_levels_are_ordered() {
        let collection =
            AdminLevelCollection::new(vec![level(2, "Paris"), level(1, "Île-de-France")]).unwrap();

        let names: Vec<_> = collection.iter().map(|l| l.name().unwrap()).collect();
        assert_eq!(names, vec!["Île-de-France", "Paris"]);
        assert_eq!(collection.first().unwrap().level(), 1);
    }

    #[test]
    fn test_duplicate_level_rejected() {
        let result = AdminLevelCollection::new(vec![level(1, "A"), level(1, "B")]);
        assert!(matches!(result, Err(GeocoderError::InvalidArgument(_))));
    }

    #[test]
    fn test_out_of_range_level_rejected() {
        assert!(matches!(
            AdminLevelCollection::new(vec![level(0, "Zero")]),
            Err(GeocoderError::OutOfBounds(_))
        ));
        assert!(matches!(
            AdminLevelCollection::new(vec![level(MAX_LEVEL_DEPTH + 1, "Deep")]),
            Err(GeocoderError::OutOfBounds(_))
        ));
    }

    #[test]
    fn test_get_and_has() {
        let collection = AdminLevelCollection::new(vec![level(3, "Arrondissement")]).unwrap();

        assert!(collection.has(3));
        assert!(!collection.has(2));
        assert_eq!(collection.get(3).unwrap().name(), Some("Arrondissement"));
        assert!(matches!(
            collection.get(2),
            Err(GeocoderError::InvalidArgument(_))
        ));
        assert!(matches!(
            collection.get(9),
            Err(GeocoderError::OutOfBounds(_))
        ));
    }

    #[test]
    fn test_empty_first_fails() {
        let collection = AdminLevelCollection::empty();
        assert!(collection.is_empty());
        assert_eq!(collection.first(), Err(GeocoderError::CollectionIsEmpty));
    }

    #[test]
    fn test_slice() {
        let collection = AdminLevelCollection::new((1..=4).map(|n| level(n, "x"))).unwrap();

        let levels: Vec<_> = collection.slice(1, Some(2)).iter().map(|l| l.level()).collect();
        assert_eq!(levels, vec![2, 3]);
        assert_eq!(collection.slice(3, None).len(), 1);
        assert!(collection.slice(10, None).is_empty());
    }
}
