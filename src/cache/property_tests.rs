//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check the bookkeeping invariants of both policies.

use proptest::prelude::*;
use std::collections::{HashMap, HashSet};

use crate::cache::{Cache, FifoCache, LruCache, PutOutcome};

// == Test Configuration ==
const TEST_MAX_ITEMS: usize = 4;

// == Strategies ==
/// Generates keys from a small alphabet so operations collide often.
/// The empty string is included to exercise rejection.
fn key_strategy() -> impl Strategy<Value = String> {
    "[A-H]{0,1}"
}

/// Generates values, occasionally empty
fn value_strategy() -> impl Strategy<Value = String> {
    "[a-z]{0,6}"
}

#[derive(Debug, Clone)]
enum CacheOp {
    Put { key: String, value: String },
    Get { key: String },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        3 => (key_strategy(), value_strategy())
            .prop_map(|(key, value)| CacheOp::Put { key, value }),
        1 => key_strategy().prop_map(|key| CacheOp::Get { key }),
    ]
}

/// Order structure and store must hold the same keys, once each.
fn assert_order_matches_store<'a>(
    order: impl Iterator<Item = &'a String>,
    cache: &dyn Cache<String, String>,
) -> Result<(), TestCaseError> {
    let order: Vec<&String> = order.collect();
    let unique: HashSet<&String> = order.iter().copied().collect();
    let stored: HashSet<&String> = cache.entries().into_iter().map(|(k, _)| k).collect();

    prop_assert_eq!(unique.len(), order.len(), "Duplicate keys in order: {:?}", order);
    prop_assert_eq!(unique, stored);
    prop_assert!(cache.len() <= cache.capacity());
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // For any operation sequence, the FIFO queue mirrors the store and the
    // store never exceeds capacity.
    #[test]
    fn prop_fifo_invariants(ops in prop::collection::vec(cache_op_strategy(), 1..60)) {
        let mut cache: FifoCache<String, String> = FifoCache::new();

        for op in ops {
            match op {
                CacheOp::Put { key, value } => { cache.put(key, value); }
                CacheOp::Get { key } => { cache.get(&key); }
            }
            assert_order_matches_store(cache.eviction_order(), &cache)?;
        }
    }

    #[test]
    fn prop_lru_invariants(ops in prop::collection::vec(cache_op_strategy(), 1..60)) {
        let mut cache: LruCache<String, String> = LruCache::new();

        for op in ops {
            match op {
                CacheOp::Put { key, value } => { cache.put(key, value); }
                CacheOp::Get { key } => { cache.get(&key); }
            }
            assert_order_matches_store(cache.eviction_order(), &cache)?;
        }
    }

    // A miss never changes the size of either cache.
    #[test]
    fn prop_get_missing_keeps_size(
        entries in prop::collection::vec((key_strategy(), value_strategy()), 0..10)
    ) {
        let mut fifo: FifoCache<String, String> = FifoCache::new();
        let mut lru: LruCache<String, String> = LruCache::new();
        for (key, value) in entries {
            fifo.put(key.clone(), value.clone());
            lru.put(key, value);
        }

        let (fifo_len, lru_len) = (fifo.len(), lru.len());
        prop_assert_eq!(fifo.get("missing"), None);
        prop_assert_eq!(lru.get("missing"), None);
        prop_assert_eq!(fifo.len(), fifo_len);
        prop_assert_eq!(lru.len(), lru_len);
    }

    // Puts of at most capacity distinct keys are all readable with their last value.
    #[test]
    fn prop_roundtrip_within_capacity(
        entries in prop::collection::vec(("[A-D]", "[a-z]{1,6}"), 1..20)
    ) {
        let mut fifo: FifoCache<String, String> = FifoCache::new();
        let mut lru: LruCache<String, String> = LruCache::new();
        let mut expected = HashMap::new();

        for (key, value) in entries {
            prop_assert_ne!(fifo.put(key.clone(), value.clone()), PutOutcome::Rejected);
            prop_assert_ne!(lru.put(key.clone(), value.clone()), PutOutcome::Rejected);
            expected.insert(key, value);
        }

        prop_assert!(expected.len() <= TEST_MAX_ITEMS);
        for (key, value) in &expected {
            prop_assert_eq!(fifo.get(key), Some(value));
            prop_assert_eq!(lru.get(key), Some(value));
        }
    }

    // Each eviction reported by put names a key that is gone afterwards, and
    // evictions only happen when the incoming key is new and the cache is full.
    #[test]
    fn prop_eviction_only_when_full(ops in prop::collection::vec(cache_op_strategy(), 1..60)) {
        let mut cache: LruCache<String, String> = LruCache::new();

        for op in ops {
            if let CacheOp::Put { key, value } = op {
                let was_full = cache.len() == TEST_MAX_ITEMS;
                let was_resident = cache.contains_key(&key);
                let outcome = cache.put(key, value);

                if let PutOutcome::Evicted { key: evicted, .. } = &outcome {
                    prop_assert!(was_full);
                    prop_assert!(!was_resident);
                    prop_assert!(!cache.contains_key(evicted));
                }
            }
        }
    }
}

// Property tests for eviction order
proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Filling a cache with distinct keys and adding one more evicts the
    // first inserted key, under both policies.
    #[test]
    fn prop_first_insert_evicted(
        keys in prop::collection::hash_set("[a-z]{1,8}", 2..10),
        new_key in "[A-Z]{1,8}"
    ) {
        let keys: Vec<String> = keys.into_iter().collect();
        let capacity = keys.len();
        let mut fifo = FifoCache::with_capacity(capacity).unwrap();
        let mut lru = LruCache::with_capacity(capacity).unwrap();

        for key in &keys {
            fifo.put(key.clone(), format!("value_{}", key));
            lru.put(key.clone(), format!("value_{}", key));
        }

        let fifo_outcome = fifo.put(new_key.clone(), "new".to_string());
        let lru_outcome = lru.put(new_key, "new".to_string());

        prop_assert_eq!(fifo_outcome.evicted_key(), Some(&keys[0]));
        prop_assert_eq!(lru_outcome.evicted_key(), Some(&keys[0]));
        prop_assert_eq!(fifo.len(), capacity);
        prop_assert_eq!(lru.len(), capacity);
    }

    // A get on the oldest key protects it under LRU but not under FIFO.
    #[test]
    fn prop_get_protects_only_under_lru(
        keys in prop::collection::hash_set("[a-z]{1,8}", 3..8),
        new_key in "[A-Z]{1,8}"
    ) {
        let keys: Vec<String> = keys.into_iter().collect();
        let capacity = keys.len();
        let mut fifo = FifoCache::with_capacity(capacity).unwrap();
        let mut lru = LruCache::with_capacity(capacity).unwrap();

        for key in &keys {
            fifo.put(key.clone(), "value".to_string());
            lru.put(key.clone(), "value".to_string());
        }

        prop_assert!(fifo.get(&keys[0]).is_some());
        prop_assert!(lru.get(&keys[0]).is_some());

        let fifo_outcome = fifo.put(new_key.clone(), "new".to_string());
        let lru_outcome = lru.put(new_key, "new".to_string());

        prop_assert_eq!(fifo_outcome.evicted_key(), Some(&keys[0]));
        prop_assert_eq!(lru_outcome.evicted_key(), Some(&keys[1]));
        prop_assert!(lru.contains_key(&keys[0]));
    }
}
