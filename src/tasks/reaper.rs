//! Cache Reap Task
//!
//! Background task that periodically removes cache entries older than the reap
//! interval.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{watch, RwLock};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Handle to a running reap task.
///
/// Dropping the handle stops the task, as does calling [`ReapTask::stop`].
#[derive(Debug)]
pub struct ReapTask {
    stop_tx: watch::Sender<bool>,
    handle: JoinHandle<()>,
}

impl ReapTask {
    /// Signals the task to finish after its current sweep. Idempotent.
    pub fn stop(&self) {
        self.stop_tx.send_replace(true);
    }

    /// Returns true once the task has exited.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

/// Spawns a background task that sweeps the store every `interval`.
///
/// Each sweep takes the write lock and removes entries whose age exceeds
/// `interval`. The task runs until stopped or until the returned handle is
/// dropped.
///
/// # Example
/// ```ignore
/// let store = Arc::new(RwLock::new(CacheStore::new()));
/// let reaper = spawn_reap_task(store.clone(), Duration::from_secs(5));
/// // Later, in a test or embedding context:
/// reaper.stop();
/// ```
pub fn spawn_reap_task(store: Arc<RwLock<CacheStore>>, interval: Duration) -> ReapTask {
    let (stop_tx, mut stop_rx) = watch::channel(false);

    let handle = tokio::spawn(async move {
        info!("Starting cache reap task with interval of {:?}", interval);

        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately
        ticker.tick().await;

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let removed = {
                        let mut store_guard = store.write().await;
                        store_guard.reap(interval)
                    };

                    if removed > 0 {
                        info!("Cache reap: removed {} expired entries", removed);
                    } else {
                        debug!("Cache reap: no expired entries found");
                    }
                }
                changed = stop_rx.changed() => {
                    // Err means every sender is gone
                    if changed.is_err() || *stop_rx.borrow() {
                        break;
                    }
                }
            }
        }

        debug!("Cache reap task stopped");
    });

    ReapTask { stop_tx, handle }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_reap_task_removes_expired_entries() {
        let store = Arc::new(RwLock::new(CacheStore::new()));

        {
            let mut store_guard = store.write().await;
            store_guard.put("expire_soon".to_string(), b"value".to_vec());
        }

        let reaper = spawn_reap_task(store.clone(), Duration::from_millis(200));

        // Two full intervals guarantee one sweep sees the entry as stale
        tokio::time::sleep(Duration::from_millis(600)).await;

        {
            let store_guard = store.read().await;
            assert!(
                store_guard.get("expire_soon").is_none(),
                "Expired entry should have been reaped"
            );
        }

        reaper.stop();
    }

    #[tokio::test]
    async fn test_reap_task_preserves_fresh_entries() {
        let store = Arc::new(RwLock::new(CacheStore::new()));
        let reaper = spawn_reap_task(store.clone(), Duration::from_secs(1));

        {
            let mut store_guard = store.write().await;
            store_guard.put("fresh".to_string(), b"value".to_vec());
        }

        tokio::time::sleep(Duration::from_millis(300)).await;

        {
            let store_guard = store.read().await;
            assert_eq!(store_guard.get("fresh"), Some(&b"value"[..]));
        }

        reaper.stop();
    }

    #[tokio::test]
    async fn test_reap_task_can_be_stopped() {
        let store = Arc::new(RwLock::new(CacheStore::new()));
        let reaper = spawn_reap_task(store, Duration::from_secs(1));

        reaper.stop();
        reaper.stop();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(reaper.is_finished(), "Task should be finished after stop");
    }

    #[tokio::test]
    async fn test_reap_task_stops_when_handle_dropped() {
        let store = Arc::new(RwLock::new(CacheStore::new()));
        let reaper = spawn_reap_task(store.clone(), Duration::from_secs(1));
        drop(reaper);

        tokio::time::sleep(Duration::from_millis(100)).await;

        // The task held the only other reference to the store
        assert_eq!(Arc::strong_count(&store), 1);
    }
}
