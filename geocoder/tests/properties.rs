//! Property tests for cache keys and chain ordering.
//!
//! Run with: `cargo test --test properties`

use std::sync::Arc;

use proptest::prelude::*;

use geocoder::cache::{cache_key, versioned_cache_key};
use geocoder::model::{AddressBuilder, AddressCollection, Location};
use geocoder::provider::{Chain, Provider};
use geocoder::query::{GeocodeQuery, ReverseQuery};
use geocoder::{GeocoderError, GeocoderResult};

/// Provider that fails, answers empty, or answers with one address.
struct Scripted {
    name: String,
    outcome: u8,
}

impl Scripted {
    fn respond(&self) -> GeocoderResult<AddressCollection> {
        match self.outcome {
            0 => Err(GeocoderError::Transport("down".into())),
            1 => Ok(AddressCollection::empty()),
            _ => {
                let address = AddressBuilder::new(self.name.as_str()).build()?;
                Ok(AddressCollection::new(vec![address]))
            }
        }
    }
}

impl Provider for Scripted {
    fn geocode_query(&self, _query: &GeocodeQuery) -> GeocoderResult<AddressCollection> {
        self.respond()
    }

    fn reverse_query(&self, _query: &ReverseQuery) -> GeocoderResult<AddressCollection> {
        self.respond()
    }

    fn name(&self) -> &str {
        &self.name
    }
}

proptest! {
    #[test]
    fn test_cache_key_is_deterministic(
        text in "[a-zA-Z0-9 ,]{1,40}",
        limit in 1usize..50,
        locale in proptest::option::of("[a-z]{2}"),
    ) {
        let build = || {
            let query = GeocodeQuery::create(text.as_str()).unwrap().with_limit(limit);
            match &locale {
                Some(locale) => query.with_locale(locale.as_str()),
                None => query,
            }
        };

        prop_assert_eq!(cache_key(&build()), cache_key(&build()));
    }

    #[test]
    fn test_cache_key_distinguishes_limits(
        text in "[a-zA-Z0-9 ]{1,40}",
        a in 1usize..100,
        b in 1usize..100,
    ) {
        prop_assume!(a != b);
        let query = GeocodeQuery::create(text.as_str()).unwrap();

        prop_assert_ne!(cache_key(&query.with_limit(a)), cache_key(&query.with_limit(b)));
    }

    #[test]
    fn test_cache_key_distinguishes_coordinates(
        lat in -90.0..90.0_f64,
        lon in -180.0..180.0_f64,
        delta in 0.001..1.0_f64,
    ) {
        let a = ReverseQuery::from_coordinates(lat, lon).unwrap();
        let b = ReverseQuery::from_coordinates(lat, (lon + delta).min(180.0)).unwrap();
        prop_assume!(a.coordinates() != b.coordinates());

        prop_assert_ne!(versioned_cache_key("v1", &a), versioned_cache_key("v1", &b));
    }

    #[test]
    fn test_chain_returns_first_answering_provider(
        outcomes in proptest::collection::vec(0u8..3, 0..8),
    ) {
        let providers: Vec<Arc<dyn Provider>> = outcomes
            .iter()
            .enumerate()
            .map(|(i, &outcome)| {
                Arc::new(Scripted { name: format!("p{}", i), outcome }) as Arc<dyn Provider>
            })
            .collect();
        let chain = Chain::new(providers);

        let result = chain.geocode_query(&GeocodeQuery::create("Paris").unwrap()).unwrap();

        match outcomes.iter().position(|&o| o == 2) {
            Some(index) => {
                let expected = format!("p{}", index);
                prop_assert_eq!(result.first().unwrap().provided_by(), expected.as_str());
            }
            None => prop_assert!(result.is_empty()),
        }
    }
}
