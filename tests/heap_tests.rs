//! Scenario and invariant tests for the Fibonacci heap.
//!
//! Each test validates the full structure (ring integrity, heap order,
//! minimum correctness) after the interesting steps via
//! `FibonacciHeap::validate`.

use fibheap::{FibonacciHeap, HeapError};

// ============================================================================
// Basic scenarios
// ============================================================================

#[test]
fn delete_min_returns_least_and_updates_minimum() {
    let mut heap = FibonacciHeap::standard();
    heap.insert(1usize, 10);
    heap.insert(2, 5);
    heap.insert(3, 20);

    assert_eq!(heap.delete_min(), Some((2, 5)));
    assert_eq!(heap.minimum(), Some((&1, &10)));
    assert_eq!(heap.len(), 2);
    heap.validate();
}

#[test]
fn five_keys_extract_in_ascending_order() {
    let mut heap = FibonacciHeap::standard();
    for (id, key) in [(1usize, 5), (2, 3), (3, 8), (4, 1), (5, 9)] {
        heap.insert(id, key);
        heap.validate();
    }

    let ids: Vec<usize> = std::iter::from_fn(|| {
        let out = heap.delete_min().map(|(id, _)| id);
        heap.validate();
        out
    })
    .collect();
    assert_eq!(ids, vec![4, 2, 1, 3, 5]);
    assert!(heap.is_empty());
}

#[test]
fn round_trip_yields_non_decreasing_keys() {
    // Keys chosen so consolidation builds multi-level trees along the way.
    let keys = [42, 7, 19, 3, 88, 21, 5, 64, 11, 2, 30, 17, 9, 54, 1, 26];
    let mut heap = FibonacciHeap::standard();
    for (id, &key) in keys.iter().enumerate() {
        heap.insert(id, key);
    }

    let mut extracted = Vec::new();
    while let Some((_, key)) = heap.delete_min() {
        heap.validate();
        extracted.push(key);
    }

    let mut sorted = keys.to_vec();
    sorted.sort_unstable();
    assert_eq!(extracted, sorted);
}

#[test]
fn decrease_key_below_minimum_promotes_without_restructuring() {
    let mut heap = FibonacciHeap::standard();
    heap.insert(1usize, 10);
    heap.insert(2, 20);
    let c = heap.insert(3, 30);

    heap.decrease_key(c, 5).unwrap();
    assert_eq!(heap.minimum(), Some((&3, &5)));
    // All three were roots, so nothing moved.
    assert_eq!(heap.last_operation_steps(), 0);
    assert_eq!(heap.len(), 3);
    heap.validate();
}

#[test]
fn empty_heap_delete_min_is_a_no_op() {
    let mut heap: FibonacciHeap<usize, i32> = FibonacciHeap::standard();
    assert_eq!(heap.delete_min(), None);
    assert_eq!(heap.len(), 0);
    heap.validate();

    heap.insert(1, 1);
    assert_eq!(heap.delete_min(), Some((1, 1)));
    assert_eq!(heap.delete_min(), None);
    heap.validate();
}

// ============================================================================
// Failure paths
// ============================================================================

#[test]
fn failed_decrease_key_is_observably_idempotent() {
    let mut heap = FibonacciHeap::standard();
    let a = heap.insert(1usize, 10);
    heap.insert(2, 20);
    // A successful root decrease leaves the step counter at zero.
    heap.decrease_key(a, 5).unwrap();
    assert_eq!(heap.last_operation_steps(), 0);

    assert_eq!(heap.decrease_key(a, 5), Err(HeapError::KeyNotDecreased));
    assert_eq!(heap.decrease_key(a, 7), Err(HeapError::KeyNotDecreased));

    assert_eq!(heap.minimum(), Some((&1, &5)));
    assert_eq!(heap.len(), 2);
    assert_eq!(heap.last_operation_steps(), 0);
    heap.validate();
}

#[test]
fn handle_of_extracted_node_goes_stale() {
    let mut heap = FibonacciHeap::standard();
    let a = heap.insert(1usize, 1);
    heap.insert(2, 2);
    assert_eq!(heap.delete_min(), Some((1, 1)));

    assert_eq!(heap.decrease_key(a, 0), Err(HeapError::InvalidHandle));
    assert_eq!(heap.len(), 1);
    heap.validate();
}

// ============================================================================
// Variants
// ============================================================================

#[test]
fn naive_variant_extracts_in_sorted_order_too() {
    let keys = [13, 4, 27, 1, 9, 33, 2, 18, 6, 25];
    let mut heap = FibonacciHeap::naive();
    let handles: Vec<_> = keys
        .iter()
        .enumerate()
        .map(|(id, &key)| heap.insert(id, key))
        .collect();

    // Force cuts before extraction.
    assert_eq!(heap.delete_min(), Some((3, 1)));
    heap.decrease_key(handles[2], 3).unwrap();
    heap.decrease_key(handles[5], 0).unwrap();
    heap.validate();

    let mut extracted = Vec::new();
    while let Some((_, key)) = heap.delete_min() {
        heap.validate();
        extracted.push(key);
    }
    assert_eq!(extracted, vec![0, 2, 3, 4, 6, 9, 13, 18, 25]);
}

#[test]
fn variants_report_their_policy() {
    assert!(!FibonacciHeap::<usize, i32>::standard().is_naive());
    assert!(FibonacciHeap::<usize, i32>::naive().is_naive());
}

// ============================================================================
// Mixed workload
// ============================================================================

#[test]
fn interleaved_operations_keep_invariants() {
    let mut heap = FibonacciHeap::standard();
    let mut handles = Vec::new();
    for id in 0..32usize {
        handles.push(Some(heap.insert(id, (id as i64 * 37) % 101)));
    }

    for round in 0..24 {
        if round % 3 == 0 {
            if let Some((id, _)) = heap.delete_min() {
                handles[id] = None;
            }
        } else {
            let id = (round * 7) % handles.len();
            if let Some(h) = handles[id] {
                // Drive the key down; failures (already lower) are fine.
                let _ = heap.decrease_key(h, -(round as i64));
            }
        }
        heap.validate();
    }

    // Remainder still extracts in non-decreasing key order.
    let mut last = i64::MIN;
    while let Some((_, key)) = heap.delete_min() {
        assert!(key >= last);
        last = key;
        heap.validate();
    }
}
