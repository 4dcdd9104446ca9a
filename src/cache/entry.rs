//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with age tracking.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// Represents a single cached response body and when it was stored.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored bytes
    pub value: Vec<u8>,
    /// Monotonic creation timestamp
    pub created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry stamped with the current time.
    pub fn new(value: Vec<u8>) -> Self {
        Self {
            value,
            created_at: Instant::now(),
        }
    }

    // == Age ==
    /// Time elapsed since the entry was stored.
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }

    // == Is Older Than ==
    /// Checks whether the entry has outlived `max_age`.
    ///
    /// Boundary condition: an entry exactly `max_age` old is kept; it is only
    /// stale once its age strictly exceeds the limit.
    pub fn is_older_than(&self, max_age: Duration) -> bool {
        self.age() > max_age
    }
}
