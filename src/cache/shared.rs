//! Shared Cache Handle
//!
//! Cloneable handle pairing the store's reader/writer lock with its reaper.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;

use crate::cache::CacheStore;
use crate::tasks::{spawn_reap_task, ReapTask};

/// Smallest interval accepted; a zero period would make the ticker panic.
const MIN_INTERVAL: Duration = Duration::from_millis(1);

// == Cache ==
/// Time-expiring response cache shared by every command handler.
///
/// `put` and the reaper's sweep take the write side of one `RwLock`; `get`
/// takes the read side, so lookups can run concurrently with each other.
#[derive(Debug, Clone)]
pub struct Cache {
    store: Arc<RwLock<CacheStore>>,
    interval: Duration,
    reaper: Arc<ReapTask>,
}

impl Cache {
    // == Constructor ==
    /// Creates an empty cache and starts its reaper.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(interval: Duration) -> Self {
        let interval = interval.max(MIN_INTERVAL);
        let store = Arc::new(RwLock::new(CacheStore::new()));
        let reaper = spawn_reap_task(store.clone(), interval);

        Self {
            store,
            interval,
            reaper: Arc::new(reaper),
        }
    }

    /// Stores `value` under `key`, resetting the entry's age.
    pub async fn put(&self, key: impl Into<String>, value: impl Into<Vec<u8>>) {
        let mut store = self.store.write().await;
        store.put(key.into(), value.into());
    }

    /// Looks up `key`.
    ///
    /// May return an entry up to one reap interval past its expiry.
    pub async fn get(&self, key: &str) -> Option<Vec<u8>> {
        let store = self.store.read().await;
        store.get(key).map(<[u8]>::to_vec)
    }

    /// Number of live entries.
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    /// Returns true if nothing is cached.
    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }

    /// The reap interval, which is also the maximum entry age.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Stops the background reaper. Entries then never expire.
    pub fn stop(&self) {
        self.reaper.stop();
    }

    /// Returns true while the reaper is running.
    pub fn is_reaping(&self) -> bool {
        !self.reaper.is_finished()
    }
}
