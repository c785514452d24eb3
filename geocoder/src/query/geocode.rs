//! Forward geocoding queries.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use super::{write_canonical, Query, QueryData, DEFAULT_RESULT_LIMIT};
use crate::error::{GeocoderError, GeocoderResult};
use crate::model::Bounds;

/// Free-text lookup: a street address, a place name, or an IP literal for
/// IP-capable providers.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodeQuery {
    text: String,
    bounds: Option<Bounds>,
    locale: Option<String>,
    limit: usize,
    data: QueryData,
}

#[derive(Serialize)]
struct CanonicalView<'a> {
    text: &'a str,
    bounds: Option<&'a Bounds>,
    locale: Option<&'a str>,
    limit: usize,
    data: &'a QueryData,
}

fn check_text(text: &str) -> GeocoderResult<()> {
    if text.is_empty() {
        return Err(GeocoderError::invalid_argument(
            "geocode query cannot be empty",
        ));
    }
    Ok(())
}

impl GeocodeQuery {
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `text` is empty.
    pub fn create(text: impl Into<String>) -> GeocoderResult<Self> {
        let text = text.into();
        check_text(&text)?;
        Ok(Self {
            text,
            bounds: None,
            locale: None,
            limit: DEFAULT_RESULT_LIMIT,
            data: QueryData::new(),
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn bounds(&self) -> Option<&Bounds> {
        self.bounds.as_ref()
    }

    /// # Errors
    ///
    /// Returns `InvalidArgument` if `text` is empty.
    pub fn with_text(&self, text: impl Into<String>) -> GeocoderResult<Self> {
        let text = text.into();
        check_text(&text)?;
        Ok(Self {
            text,
            ..self.clone()
        })
    }

    /// Restricts results to a viewport, for providers that support it.
    #[must_use]
    pub fn with_bounds(&self, bounds: Bounds) -> Self {
        Self {
            bounds: Some(bounds),
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

impl Query for GeocodeQuery {
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

impl fmt::Display for GeocodeQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = CanonicalView {
            text: &self.text,
            bounds: self.bounds.as_ref(),
            locale: self.locale.as_deref(),
            limit: self.limit,
            data: &self.data,
        };
        write_canonical(f, "GeocodeQuery", &view)
    }
}
