//! Cache Module
//!
//! Provides an in-memory response cache with background age-based reaping.

mod entry;
mod shared;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::CacheEntry;
pub use shared::Cache;
pub use store::CacheStore;
