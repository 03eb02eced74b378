//! Stress tests that push the queues through long operation sequences
//!
//! These tests perform large numbers of operations in various patterns
//! to catch edge cases and verify correctness under load.

use minpq::{IndexedMinPQ, MinPQ, NaiveMinPQ};
use std::collections::HashMap;

/// Linear congruential generator for reproducible pseudo-random workloads
struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        Lcg { state: seed }
    }

    fn next(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.state >> 33
    }

    fn next_range(&mut self, lo: u64, hi: u64) -> u64 {
        lo + self.next() % (hi - lo)
    }
}

/// Test massive numbers of inserts and removals
fn test_massive_operations<Q: MinPQ<u32, i64>>() {
    let mut pq = Q::new();
    for i in 0..5000u32 {
        pq.insert(i, i64::from(i)).unwrap();
    }
    assert_eq!(pq.len(), 5000);

    for i in 0..5000u32 {
        assert_eq!(pq.remove_min(), Ok(i));
    }
    assert!(pq.is_empty());
}

/// Test many priority decreases, the Dijkstra access pattern
fn test_many_decreases<Q: MinPQ<u32, i64>>() {
    let mut pq = Q::new();
    for i in 0..2000u32 {
        pq.insert(i, 100_000 + i64::from(i)).unwrap();
    }

    // Reverse the order by lowering every priority
    for i in 0..2000u32 {
        pq.change_priority(&i, 2000 - i64::from(i)).unwrap();
    }

    for i in (0..2000u32).rev() {
        assert_eq!(pq.remove_min(), Ok(i));
    }
}

/// Test many priority increases
fn test_many_increases<Q: MinPQ<u32, i64>>() {
    let mut pq = Q::new();
    for i in 0..2000u32 {
        pq.insert(i, i64::from(i)).unwrap();
    }

    // Repeatedly push the current minimum to the back
    for round in 0..2000i64 {
        let min = *pq.peek_min().unwrap();
        pq.change_priority(&min, 10_000 + round).unwrap();
    }

    for i in 0..2000u32 {
        assert_eq!(pq.remove_min(), Ok(i));
    }
}

/// Test alternating insert and remove
fn test_alternating_ops<Q: MinPQ<u32, i64>>() {
    let mut pq = Q::new();
    for i in 0..1000u32 {
        pq.insert(i * 2, i64::from(i) * 2).unwrap();
        pq.insert(i * 2 + 1, i64::from(i) * 2 + 1).unwrap();
        assert!(pq.remove_min().is_ok());
    }
    assert_eq!(pq.len(), 1000);

    let mut last = i64::MIN;
    while let Ok(&min) = pq.peek_min() {
        let p = pq.priority_of(&min).unwrap();
        assert!(p >= last);
        last = p;
        pq.remove_min().unwrap();
    }
}

#[test]
fn test_indexed_massive_operations() {
    test_massive_operations::<IndexedMinPQ<u32, i64>>();
}

#[test]
fn test_indexed_many_decreases() {
    test_many_decreases::<IndexedMinPQ<u32, i64>>();
}

#[test]
fn test_indexed_many_increases() {
    test_many_increases::<IndexedMinPQ<u32, i64>>();
}

#[test]
fn test_indexed_alternating_ops() {
    test_alternating_ops::<IndexedMinPQ<u32, i64>>();
}

#[test]
fn test_naive_alternating_ops() {
    test_alternating_ops::<NaiveMinPQ<u32, i64>>();
}

#[test]
fn test_indexed_random_workload_matches_model() {
    let mut rng = Lcg::new(0x5eed);
    let mut pq: IndexedMinPQ<u32> = IndexedMinPQ::with_capacity(1024);
    let mut model: HashMap<u32, f64> = HashMap::new();

    for step in 0..20_000 {
        let element = rng.next_range(0, 1024) as u32;
        let priority = rng.next_range(0, 1_000_000) as f64 / 7.0;

        match rng.next_range(0, 4) {
            0 | 1 => {
                if model.contains_key(&element) {
                    assert!(pq.insert(element, priority).is_err());
                } else {
                    pq.insert(element, priority).unwrap();
                    model.insert(element, priority);
                }
            }
            2 => {
                if model.contains_key(&element) {
                    pq.change_priority(&element, priority).unwrap();
                    model.insert(element, priority);
                } else {
                    assert!(pq.change_priority(&element, priority).is_err());
                }
            }
            _ => {
                let expected_min = model.values().copied().fold(f64::INFINITY, f64::min);
                match pq.remove_min() {
                    Ok(e) => assert_eq!(model.remove(&e), Some(expected_min)),
                    Err(_) => assert!(model.is_empty()),
                }
            }
        }

        if step % 1000 == 0 {
            assert!(pq.verify_internal_structure());
        }
        assert_eq!(pq.len(), model.len());
    }

    assert!(pq.verify_internal_structure());
}

#[test]
fn test_bulk_load_large() {
    let mut rng = Lcg::new(42);
    let map: HashMap<u32, f64> = (0..10_000u32)
        .map(|i| (i, rng.next_range(0, 1000) as f64))
        .collect();

    let pq: IndexedMinPQ<u32> = IndexedMinPQ::from_map(map);
    assert_eq!(pq.len(), 10_000);
    assert!(pq.verify_internal_structure());

    let sorted = pq.into_sorted_vec();
    assert_eq!(sorted.len(), 10_000);
    assert!(sorted.windows(2).all(|w| w[0].1 <= w[1].1));
}
