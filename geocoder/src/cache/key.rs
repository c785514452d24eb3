//! Cache key derivation.
//!
//! A key is a version prefix followed by the lowercase hex SHA-256 digest of
//! the query's canonical string. Bumping the version invalidates every
//! entry written under the previous one. The digest has a fixed length, so
//! keys from different versions never collide.

use sha2::{Digest, Sha256};

use crate::query::Query;

/// Version prefix applied when none is configured.
pub const CACHE_KEY_VERSION: &str = "v1";

/// Key for `query` under [`CACHE_KEY_VERSION`].
pub fn cache_key<Q: Query + ?Sized>(query: &Q) -> String {
    versioned_cache_key(CACHE_KEY_VERSION, query)
}

/// Key for `query` under an explicit version prefix.
pub fn versioned_cache_key<Q: Query + ?Sized>(version: &str, query: &Q) -> String {
    let mut hasher = Sha256::new();
    hasher.update(query.canonical_string().as_bytes());
    format!("{}{:x}", version, hasher.finalize())
}
