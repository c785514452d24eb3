//! Immutable request descriptors.
//!
//! A query is built once with `create` and refined through `with_*`
//! methods, each of which returns a new query. Every query has a canonical
//! string (its `Display` output): a type tag followed by a JSON rendering
//! of all fields, with `data` keys sorted. Equal field values always
//! produce the same string, which makes it a safe seed for cache keys.

mod geocode;
mod reverse;

use std::collections::BTreeMap;
use std::fmt;

use serde_json::Value;

pub use geocode::GeocodeQuery;
pub use reverse::ReverseQuery;

/// Number of results a query asks for unless told otherwise.
pub const DEFAULT_RESULT_LIMIT: usize = 5;

/// Extension parameters for provider-specific options.
pub type QueryData = BTreeMap<String, Value>;

/// Accessors shared by geocode and reverse queries.
pub trait Query: fmt::Display {
    fn locale(&self) -> Option<&str>;

    fn limit(&self) -> usize;

    /// Returns one provider-specific parameter.
    fn data_value(&self, name: &str) -> Option<&Value> {
        self.all_data().get(name)
    }

    fn all_data(&self) -> &QueryData;

    /// Deterministic rendering of every field, used for cache keys.
    fn canonical_string(&self) -> String {
        self.to_string()
    }
}

/// Writes `"{tag}: {json}"` for a serializable view of a query.
pub(crate) fn write_canonical<T: serde::Serialize>(
    f: &mut fmt::Formatter<'_>,
    tag: &str,
    view: &T,
) -> fmt::Result {
    let json = serde_json::to_string(view).map_err(|_| fmt::Error)?;
    write!(f, "{}: {}", tag, json)
}
