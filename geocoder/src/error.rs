//! Error taxonomy shared by providers and decorators.
//!
//! Every provider, adapter or decorator fails with a [`GeocoderError`]. The
//! variants are kinds rather than vendor-specific causes so callers can match
//! on them without knowing which backend answered.

use thiserror::Error;

/// Result type for geocoding operations.
pub type GeocoderResult<T> = Result<T, GeocoderError>;

/// The two ways a vendor response can be unusable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidServerResponse {
    /// The vendor answered with an empty body.
    #[error("the geocoder server returned an empty response")]
    Empty,

    /// The body could not be parsed into a result.
    #[error("the geocoder server returned an invalid response: {0}")]
    Malformed(String),
}

/// Errors raised by providers, decorators and the data model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeocoderError {
    /// The caller supplied a structurally invalid value.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The provider cannot service this kind of query.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// The vendor rejected the configured credentials.
    #[error("invalid credentials: {0}")]
    InvalidCredentials(String),

    /// The vendor rate or usage limit was hit.
    #[error("quota exceeded: {0}")]
    QuotaExceeded(String),

    /// The vendor response could not be used.
    #[error(transparent)]
    InvalidServerResponse(#[from] InvalidServerResponse),

    /// `first()` was called on a collection without elements.
    #[error("the collection is empty")]
    CollectionIsEmpty,

    /// An index or level lies outside the valid range.
    #[error("out of bounds: {0}")]
    OutOfBounds(String),

    /// No provider is registered under the requested name.
    #[error("provider \"{0}\" is not registered")]
    ProviderNotRegistered(String),

    /// The transport underneath an adapter failed (timeout, connection reset, ...).
    #[error("transport error: {0}")]
    Transport(String),
}

impl GeocoderError {
    /// Creates an [`GeocoderError::InvalidArgument`] from any message.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Creates an [`GeocoderError::UnsupportedOperation`] from any message.
    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::UnsupportedOperation(msg.into())
    }

    /// Error raised when a registry has no provider at all.
    pub fn no_provider_registered() -> Self {
        Self::ProviderNotRegistered(String::new())
    }

    /// Returns true for invalid arguments, including unsupported operations.
    ///
    /// An unsupported operation is a specialization of an invalid argument:
    /// the query itself is well formed, but not for this provider.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::InvalidArgument(_) | Self::UnsupportedOperation(_)
        )
    }
}
