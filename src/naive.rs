//! Naive reference priority queue
//!
//! An unordered `Vec` of element-priority pairs. Every lookup is a linear
//! scan, so nearly every operation is O(n). It exists to cross-check
//! [`IndexedMinPQ`](crate::indexed::IndexedMinPQ) in tests and benchmarks
//! and is not meant for real workloads.
//!
//! Among equal minimum priorities, the earliest-inserted pair is reported
//! first.

use crate::traits::{MinPQ, PQError};
use std::collections::HashMap;

/// Reference min-priority queue backed by an unordered vector
#[derive(Debug, Clone)]
pub struct NaiveMinPQ<E, P = f64> {
    items: Vec<(E, P)>,
}

impl<E: PartialEq, P: PartialOrd + Copy> MinPQ<E, P> for NaiveMinPQ<E, P> {
    fn new() -> Self {
        Self { items: Vec::new() }
    }

    fn insert(&mut self, element: E, priority: P) -> Result<(), PQError> {
        if self.contains(&element) {
            return Err(PQError::DuplicateElement);
        }
        self.items.push((element, priority));
        Ok(())
    }

    fn contains(&self, element: &E) -> bool {
        self.position(element).is_some()
    }

    fn priority_of(&self, element: &E) -> Result<P, PQError> {
        self.position(element)
            .map(|i| self.items[i].1)
            .ok_or(PQError::NotFound)
    }

    fn peek_min(&self) -> Result<&E, PQError> {
        self.min_position()
            .map(|i| &self.items[i].0)
            .ok_or(PQError::EmptyStructure)
    }

    fn remove_min(&mut self) -> Result<E, PQError> {
        let i = self.min_position().ok_or(PQError::EmptyStructure)?;
        // `remove` rather than `swap_remove` keeps insertion order for ties
        Ok(self.items.remove(i).0)
    }

    fn change_priority(&mut self, element: &E, priority: P) -> Result<(), PQError> {
        let i = self.position(element).ok_or(PQError::NotFound)?;
        self.items[i].1 = priority;
        Ok(())
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

impl<E: PartialEq, P: PartialOrd + Copy> NaiveMinPQ<E, P> {
    /// Creates an empty queue
    pub fn new() -> Self {
        <Self as MinPQ<E, P>>::new()
    }

    /// Builds a queue holding every pair of the mapping
    pub fn from_map<S>(priorities: HashMap<E, P, S>) -> Self {
        Self {
            items: priorities.into_iter().collect(),
        }
    }

    fn position(&self, element: &E) -> Option<usize> {
        self.items.iter().position(|(e, _)| e == element)
    }

    fn min_position(&self) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (i, (_, priority)) in self.items.iter().enumerate() {
            match best {
                Some(b) if self.items[b].1 <= *priority => {}
                _ => best = Some(i),
            }
        }
        best
    }
}

impl<E: PartialEq, P: PartialOrd + Copy> Default for NaiveMinPQ<E, P> {
    fn default() -> Self {
        Self::new()
    }
}
