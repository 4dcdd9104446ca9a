//! Cache Store Module
//!
//! Plain map of cached responses. Locking lives one level up in [`Cache`].
//!
//! [`Cache`]: crate::cache::Cache

use std::collections::HashMap;
use std::time::Duration;

use crate::cache::CacheEntry;

// == Cache Store ==
/// Key-value storage for cached API responses.
#[derive(Debug, Default)]
pub struct CacheStore {
    entries: HashMap<String, CacheEntry>,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // == Put ==
    /// Stores a value, overwriting any previous entry and resetting its age.
    pub fn put(&mut self, key: String, value: Vec<u8>) {
        self.entries.insert(key, CacheEntry::new(value));
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// Age is not checked here: removal of stale entries is the reaper's job,
    /// so an entry past its interval but not yet swept is still returned.
    pub fn get(&self, key: &str) -> Option<&[u8]> {
        self.entries.get(key).map(|entry| entry.value.as_slice())
    }

    // == Reap ==
    /// Removes every entry older than `max_age`.
    ///
    /// Returns the number of entries removed.
    pub fn reap(&mut self, max_age: Duration) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_older_than(max_age));
        before - self.entries.len()
    }

    // == Length ==
    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
