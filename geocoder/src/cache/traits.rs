//! Core traits for the key-value store behind [`ProviderCache`](super::ProviderCache).
//!
//! # Design Principles
//!
//! - **String keys**: Human-readable prefix plus a hash, flexible for any store
//! - **Vec<u8> values**: Raw bytes; the decorator owns (de)serialization
//! - **Per-entry TTL**: `None` means "keep until the store evicts it"
//! - **Last writer wins**: no compare-and-swap; results for the same query and
//!   key version are interchangeable

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;

/// Errors that can occur during cache operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CacheError {
    /// The backing store failed (connection lost, disk full, ...).
    #[error("Cache backend error: {0}")]
    Backend(String),

    /// A value could not be encoded for, or decoded from, the store.
    #[error("Cache codec error: {0}")]
    Codec(String),

    /// Value exceeds maximum allowed size.
    #[error("Value too large: {size} bytes (max: {max})")]
    ValueTooLarge { size: usize, max: usize },
}

/// Generic key-value store for cached query results.
///
/// # Thread Safety
///
/// Stores are shared by every provider cache built on them, so all
/// implementations must be `Send + Sync` and tolerate concurrent
/// `get`/`set` on the same key.
pub trait CacheStore: Send + Sync {
    /// Retrieve a value by key.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(data))` if the key exists and has not expired
    /// - `Ok(None)` if the key is not found
    /// - `Err(_)` if the store failed
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError>;

    /// Store a value, replacing any previous value for the key.
    ///
    /// # Arguments
    ///
    /// * `key` - The cache key
    /// * `value` - The value to store
    /// * `ttl` - Lifetime of the entry, `None` to keep it until evicted
    fn set(&self, key: &str, value: Vec<u8>, ttl: Option<Duration>) -> Result<(), CacheError>;

    /// Delete a value by key, returning whether it existed.
    fn delete(&self, key: &str) -> Result<bool, CacheError>;

    /// Number of entries currently held.
    fn entry_count(&self) -> u64;
}

impl<S: CacheStore + ?Sized> CacheStore for Arc<S> {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: Vec<u8>, ttl: Option<Duration>) -> Result<(), CacheError> {
        (**self).set(key, value, ttl)
    }

    fn delete(&self, key: &str) -> Result<bool, CacheError> {
        (**self).delete(key)
    }

    fn entry_count(&self) -> u64 {
        (**self).entry_count()
    }
}
