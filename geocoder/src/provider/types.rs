//! Provider trait

use std::sync::Arc;

use crate::error::GeocoderResult;
use crate::model::AddressCollection;
use crate::query::{GeocodeQuery, ReverseQuery};

/// Capability contract shared by vendor adapters and decorators.
///
/// Providers are immutable once constructed: queries take `&self` and must
/// not change provider-visible state, so one instance can serve concurrent
/// callers.
pub trait Provider: Send + Sync {
    /// Resolves free text (an address, or an IP literal for IP-capable
    /// providers) to zero or more locations.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedOperation` when the provider cannot handle this
    /// kind of text, or any other [`GeocoderError`](crate::GeocoderError)
    /// raised by the backend.
    fn geocode_query(&self, query: &GeocodeQuery) -> GeocoderResult<AddressCollection>;

    /// Resolves coordinates to zero or more locations.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedOperation` for providers that cannot reverse
    /// geocode.
    fn reverse_query(&self, query: &ReverseQuery) -> GeocoderResult<AddressCollection>;

    /// Stable identifier used in cache keys, logs and diagnostics.
    fn name(&self) -> &str;
}

impl<P: Provider + ?Sized> Provider for Arc<P> {
    fn geocode_query(&self, query: &GeocodeQuery) -> GeocoderResult<AddressCollection> {
        (**self).geocode_query(query)
    }

    fn reverse_query(&self, query: &ReverseQuery) -> GeocoderResult<AddressCollection> {
        (**self).reverse_query(query)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<P: Provider + ?Sized> Provider for &P {
    fn geocode_query(&self, query: &GeocodeQuery) -> GeocoderResult<AddressCollection> {
        (**self).geocode_query(query)
    }

    fn reverse_query(&self, query: &ReverseQuery) -> GeocoderResult<AddressCollection> {
        (**self).reverse_query(query)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<P: Provider + ?Sized> Provider for Box<P> {
    fn geocode_query(&self, query: &GeocodeQuery) -> GeocoderResult<AddressCollection> {
        (**self).geocode_query(query)
    }

    fn reverse_query(&self, query: &ReverseQuery) -> GeocoderResult<AddressCollection> {
        (**self).reverse_query(query)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

#[cfg(test)]
pub mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::error::GeocoderError;
    use crate::model::AddressBuilder;

    /// Mock provider returning a canned response and counting calls.
    pub struct MockProvider {
        pub name: String,
        pub response: GeocoderResult<AddressCollection>,
        pub calls: AtomicUsize,
    }

    impl MockProvider {
        pub fn returning(name: &str, response: GeocoderResult<AddressCollection>) -> Self {
            Self {
                name: name.to_string(),
                response,
                calls: AtomicUsize::new(0),
            }
        }

        /// Returns one address with the given locality, provided by `name`.
        pub fn with_locality(name: &str, locality: &str) -> Self {
            let mut builder = AddressBuilder::new(name);
            builder.set_locality(locality);
            let collection = AddressCollection::new(vec![builder.build().unwrap()]);
            Self::returning(name, Ok(collection))
        }

        pub fn empty(name: &str) -> Self {
            Self::returning(name, Ok(AddressCollection::empty()))
        }

        pub fn failing(name: &str, error: GeocoderError) -> Self {
            Self::returning(name, Err(error))
        }

        pub fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl Provider for MockProvider {
        fn geocode_query(&self, _query: &GeocodeQuery) -> GeocoderResult<AddressCollection> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.response.clone()
        }

        fn reverse_query(&self, _query: &ReverseQuery) -> GeocoderResult<AddressCollection> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.response.clone()
        }

        fn name(&self) -> &str {
            &self.name
        }
    }

    #[test]
    fn test_arc_and_box_forward() {
        let query = GeocodeQuery::create("Paris").unwrap();

        let shared: Arc<dyn Provider> = Arc::new(MockProvider::with_locality("mock", "Paris"));
        assert_eq!(shared.name(), "mock");
        assert_eq!(shared.geocode_query(&query).unwrap().len(), 1);

        let boxed: Box<dyn Provider> = Box::new(MockProvider::empty("boxed"));
        assert_eq!(boxed.name(), "boxed");
        assert!(boxed.geocode_query(&query).unwrap().is_empty());
    }

    #[test]
    fn test_reference_forwards() {
        let mock = MockProvider::with_locality("mock", "Paris");
        let query = GeocodeQuery::create("Paris").unwrap();

        let borrowed = &mock;
        assert_eq!(Provider::name(&borrowed), "mock");
        assert_eq!(Provider::geocode_query(&borrowed, &query).unwrap().len(), 1);
        assert_eq!(mock.call_count(), 1);
    }

    #[test]
    fn test_mock_counts_calls() {
        let mock = MockProvider::failing("down", GeocoderError::Transport("reset".into()));
        let reverse = ReverseQuery::from_coordinates(1.0, 2.0).unwrap();

        assert!(mock.reverse_query(&reverse).is_err());
        assert!(mock.reverse_query(&reverse).is_err());
        assert_eq!(mock.call_count(), 2);
    }
}
