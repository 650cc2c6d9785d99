//! Property-based tests using proptest
//!
//! Random operation sequences are replayed against a simple model oracle;
//! after every step the heap must agree with the model and pass the
//! structural validator.

use proptest::prelude::*;
use std::collections::HashMap;

use fibheap::{FibonacciHeap, NodeKey};

#[derive(Debug, Clone)]
enum Op {
    Insert(i64),
    DeleteMin,
    /// Selects a live node by index and decreases its key by `1 + delta`.
    DecreaseKey { pick: usize, delta: i64 },
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (-1000i64..1000).prop_map(Op::Insert),
        2 => Just(Op::DeleteMin),
        2 => (any::<usize>(), 0i64..500).prop_map(|(pick, delta)| Op::DecreaseKey { pick, delta }),
    ]
}

/// Replays `ops` against a heap of the given variant and a `HashMap` model
/// keyed by identifier.
fn check_against_model(ops: Vec<Op>, naive: bool) -> Result<(), TestCaseError> {
    let mut heap = if naive {
        FibonacciHeap::naive()
    } else {
        FibonacciHeap::standard()
    };
    let mut model: HashMap<usize, i64> = HashMap::new();
    let mut handles: HashMap<usize, NodeKey> = HashMap::new();
    let mut next_id = 0usize;

    for op in ops {
        match op {
            Op::Insert(key) => {
                let id = next_id;
                next_id += 1;
                handles.insert(id, heap.insert(id, key));
                model.insert(id, key);
            }
            Op::DeleteMin => match heap.delete_min() {
                Some((id, key)) => {
                    let min_key = model.values().min().copied();
                    prop_assert_eq!(Some(key), min_key);
                    prop_assert_eq!(model.remove(&id), Some(key));
                    handles.remove(&id);
                }
                None => prop_assert!(model.is_empty()),
            },
            Op::DecreaseKey { pick, delta } => {
                if model.is_empty() {
                    continue;
                }
                let mut ids: Vec<usize> = model.keys().copied().collect();
                ids.sort_unstable();
                let id = ids[pick % ids.len()];
                let new_key = model[&id] - 1 - delta;
                heap.decrease_key(handles[&id], new_key)
                    .expect("strictly smaller key must be accepted");
                model.insert(id, new_key);
            }
        }

        heap.validate();
        prop_assert_eq!(heap.len(), model.len());
        let expected_min = model.values().min().copied();
        prop_assert_eq!(heap.minimum().map(|(_, &k)| k), expected_min);
    }

    // Drain: everything comes out in non-decreasing key order.
    let mut last = i64::MIN;
    while let Some((id, key)) = heap.delete_min() {
        prop_assert!(key >= last);
        last = key;
        prop_assert_eq!(model.remove(&id), Some(key));
        heap.validate();
    }
    prop_assert!(model.is_empty());
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn standard_heap_matches_model(ops in prop::collection::vec(op_strategy(), 1..60)) {
        check_against_model(ops, false)?;
    }

    #[test]
    fn naive_heap_matches_model(ops in prop::collection::vec(op_strategy(), 1..60)) {
        check_against_model(ops, true)?;
    }

    #[test]
    fn pure_insert_delete_round_trip(keys in prop::collection::vec(-10_000i64..10_000, 1..80)) {
        let mut heap = FibonacciHeap::standard();
        for (id, &key) in keys.iter().enumerate() {
            heap.insert(id, key);
        }

        let mut extracted = Vec::with_capacity(keys.len());
        while let Some((_, key)) = heap.delete_min() {
            extracted.push(key);
        }

        let mut sorted = keys.clone();
        sorted.sort_unstable();
        prop_assert_eq!(extracted, sorted);
    }
}
