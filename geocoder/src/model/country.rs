//! Country value type.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{GeocoderError, GeocoderResult};

/// A country, identified by name, ISO code, or both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    name: Option<String>,
    code: Option<String>,
}

impl Country {
    /// # Errors
    ///
    /// Returns `InvalidArgument` when both name and code are missing.
    pub fn new(name: Option<String>, code: Option<String>) -> GeocoderResult<Self> {
        if name.is_none() && code.is_none() {
            return Err(GeocoderError::invalid_argument(
                "a country must have either a name or a code",
            ));
        }
        Ok(Self { name, code })
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// ISO 3166 code as supplied by the provider.
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name.as_deref().or(self.code.as_deref()).unwrap_or(""))
    }
}
