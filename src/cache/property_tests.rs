//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check store semantics over arbitrary keys and payloads.

use proptest::prelude::*;
use std::collections::HashMap;
use std::time::Duration;

use crate::cache::CacheStore;

// == Strategies ==
/// Generates cache keys shaped like "<command> <argument>"
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-z]{1,8}( [a-z0-9-]{1,16})?".prop_map(|s| s)
}

/// Generates arbitrary response payloads
fn value_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..256)
}

#[derive(Debug, Clone)]
enum CacheOp {
    Put { key: String, value: Vec<u8> },
    Get { key: String },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        (key_strategy(), value_strategy()).prop_map(|(key, value)| CacheOp::Put { key, value }),
        key_strategy().prop_map(|key| CacheOp::Get { key }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // A key that was never put is never found.
    #[test]
    fn prop_missing_key_not_found(
        keys in prop::collection::hash_set(key_strategy(), 1..20),
        probe in key_strategy(),
    ) {
        let mut store = CacheStore::new();
        for key in keys.iter().filter(|k| **k != probe) {
            store.put(key.clone(), Vec::new());
        }
        prop_assert!(store.get(&probe).is_none());
    }

    // Putting a value and reading it straight back returns the same bytes.
    #[test]
    fn prop_put_then_get(key in key_strategy(), value in value_strategy()) {
        let mut store = CacheStore::new();
        store.put(key.clone(), value.clone());
        prop_assert_eq!(store.get(&key), Some(value.as_slice()));
    }

    // The store agrees with a plain HashMap model for any put/get sequence,
    // as long as nothing is old enough to reap.
    #[test]
    fn prop_matches_map_model(ops in prop::collection::vec(cache_op_strategy(), 1..60)) {
        let mut store = CacheStore::new();
        let mut model: HashMap<String, Vec<u8>> = HashMap::new();

        for op in ops {
            match op {
                CacheOp::Put { key, value } => {
                    store.put(key.clone(), value.clone());
                    model.insert(key, value);
                }
                CacheOp::Get { key } => {
                    prop_assert_eq!(store.get(&key), model.get(&key).map(Vec::as_slice));
                }
            }
        }

        prop_assert_eq!(store.reap(Duration::from_secs(3600)), 0);
        prop_assert_eq!(store.len(), model.len());
    }
}
