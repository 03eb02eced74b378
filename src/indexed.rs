//! Indexed Binary Heap priority queue
//!
//! An array-backed binary min-heap paired with a hash index from each element
//! to the slot it currently occupies. The index is what makes arbitrary
//! priority changes cheap: instead of scanning the heap for an element, the
//! queue jumps straight to its slot and restores order from there.
//!
//! # Time Complexity
//!
//! | Operation         | Complexity |
//! |-------------------|------------|
//! | `insert`          | O(log n)   |
//! | `remove_min`      | O(log n)   |
//! | `change_priority` | O(log n)   |
//! | `peek_min`        | O(1)       |
//! | `contains`        | O(1)       |
//! | `priority_of`     | O(1)       |
//! | `from_map`        | O(n)       |
//!
//! # Layout
//!
//! Slots are 0-based: the parent of slot `i` is `(i - 1) / 2` and its
//! children are `2i + 1` and `2i + 2`. Every relocation of an entry goes
//! through a single `exchange` primitive, which updates the index entries of both
//! displaced elements together, so the index never points at a stale slot.
//!
//! # Example
//!
//! ```rust
//! use minpq::{IndexedMinPQ, MinPQ};
//!
//! let mut pq = IndexedMinPQ::new();
//! pq.insert('A', 5.0).unwrap();
//! pq.insert('B', 2.0).unwrap();
//! pq.insert('C', 8.0).unwrap();
//! assert_eq!(pq.peek_min(), Ok(&'B'));
//!
//! pq.change_priority(&'C', 1.0).unwrap();
//! assert_eq!(pq.remove_min(), Ok('C'));
//! assert_eq!(pq.remove_min(), Ok('B'));
//! assert_eq!(pq.remove_min(), Ok('A'));
//! assert!(pq.is_empty());
//! ```

use crate::traits::{MinPQ, PQError};
use rustc_hash::FxBuildHasher;
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

/// A single element-priority pair stored in a heap slot
#[derive(Debug, Clone)]
struct Entry<E, P> {
    element: E,
    priority: P,
}

/// Indexed binary min-heap
///
/// `E` is the element type, which needs `Eq + Hash + Clone` so it can key the
/// slot index. `P` is the priority type (`f64` unless stated otherwise).
/// `S` selects the hasher for the index and defaults to FxHash.
///
/// When two children of a node share the same priority, the left child is
/// promoted first. Equal-priority elements may therefore be extracted in an
/// order that differs from insertion order.
#[derive(Debug, Clone)]
pub struct IndexedMinPQ<E, P = f64, S = FxBuildHasher> {
    /// Heap-ordered entries; slot 0 holds the minimum
    heap: Vec<Entry<E, P>>,
    /// Maps each element to its current slot in `heap`
    index: HashMap<E, usize, S>,
}

impl<E, P, S> MinPQ<E, P> for IndexedMinPQ<E, P, S>
where
    E: Eq + Hash + Clone,
    P: PartialOrd + Copy,
    S: BuildHasher + Default,
{
    fn new() -> Self {
        Self {
            heap: Vec::new(),
            index: HashMap::default(),
        }
    }

    fn insert(&mut self, element: E, priority: P) -> Result<(), PQError> {
        if self.index.contains_key(&element) {
            #[cfg(feature = "tracing")]
            tracing::debug!(len = self.heap.len(), "rejected insert of duplicate element");
            return Err(PQError::DuplicateElement);
        }

        let slot = self.heap.len();
        self.index.insert(element.clone(), slot);
        self.heap.push(Entry { element, priority });
        self.swim(slot);
        Ok(())
    }

    fn contains(&self, element: &E) -> bool {
        self.index.contains_key(element)
    }

    fn priority_of(&self, element: &E) -> Result<P, PQError> {
        self.index
            .get(element)
            .map(|&slot| self.heap[slot].priority)
            .ok_or(PQError::NotFound)
    }

    fn peek_min(&self) -> Result<&E, PQError> {
        self.heap
            .first()
            .map(|entry| &entry.element)
            .ok_or(PQError::EmptyStructure)
    }

    fn remove_min(&mut self) -> Result<E, PQError> {
        self.pop_entry()
            .map(|entry| entry.element)
            .ok_or(PQError::EmptyStructure)
    }

    fn change_priority(&mut self, element: &E, priority: P) -> Result<(), PQError> {
        let Some(&slot) = self.index.get(element) else {
            #[cfg(feature = "tracing")]
            tracing::debug!(len = self.heap.len(), "rejected priority change of absent element");
            return Err(PQError::NotFound);
        };

        self.heap[slot].priority = priority;
        // At most one of the two passes moves the entry
        let slot = self.swim(slot);
        self.sink(slot);
        Ok(())
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

impl<E, P> IndexedMinPQ<E, P>
where
    E: Eq + Hash + Clone,
    P: PartialOrd + Copy,
{
    /// Creates an empty queue indexed with FxHash
    pub fn new() -> Self {
        <Self as MinPQ<E, P>>::new()
    }
}

impl<E, P, S> IndexedMinPQ<E, P, S>
where
    E: Eq + Hash + Clone,
    P: PartialOrd + Copy,
    S: BuildHasher + Default,
{
    /// Creates an empty queue with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            index: HashMap::with_capacity_and_hasher(capacity, S::default()),
        }
    }

    /// Builds a queue from a mapping of elements to their initial priorities
    ///
    /// All entries are loaded up front and heap order is established in a
    /// single bottom-up pass, which is O(n) rather than the O(n log n) of
    /// repeated inserts. Extraction order is the same as if each pair had
    /// been inserted one at a time.
    ///
    /// ```rust
    /// use minpq::{IndexedMinPQ, MinPQ};
    /// use std::collections::HashMap;
    ///
    /// let map = HashMap::from([("a", 3.0), ("b", 1.0), ("c", 2.0)]);
    /// let mut pq: IndexedMinPQ<_> = IndexedMinPQ::from_map(map);
    /// assert_eq!(pq.remove_min(), Ok("b"));
    /// assert_eq!(pq.remove_min(), Ok("c"));
    /// assert_eq!(pq.remove_min(), Ok("a"));
    /// ```
    pub fn from_map<S2>(priorities: HashMap<E, P, S2>) -> Self {
        let mut pq = Self::with_capacity(priorities.len());
        for (element, priority) in priorities {
            pq.index.insert(element.clone(), pq.heap.len());
            pq.heap.push(Entry { element, priority });
        }

        for slot in (0..pq.heap.len() / 2).rev() {
            pq.sink(slot);
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(len = pq.heap.len(), "bulk-loaded indexed priority queue");
        pq
    }

    /// Returns the minimum element together with its priority
    pub fn peek_min_with_priority(&self) -> Option<(&E, &P)> {
        self.heap
            .first()
            .map(|entry| (&entry.element, &entry.priority))
    }

    /// Iterates over all element-priority pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&E, &P)> + '_ {
        self.heap
            .iter()
            .map(|entry| (&entry.element, &entry.priority))
    }

    /// Removes every element
    pub fn clear(&mut self) {
        self.heap.clear();
        self.index.clear();
    }

    /// Consumes the queue, returning its pairs in non-decreasing priority order
    pub fn into_sorted_vec(mut self) -> Vec<(E, P)> {
        let mut sorted = Vec::with_capacity(self.heap.len());
        while let Some(Entry { element, priority }) = self.pop_entry() {
            sorted.push((element, priority));
        }
        sorted
    }

    /// Checks the heap property and the consistency of the slot index
    ///
    /// Returns true when every child's priority is no smaller than its
    /// parent's, every element maps to the slot that holds it, and the index
    /// has exactly one entry per slot.
    pub fn verify_internal_structure(&self) -> bool {
        if self.index.len() != self.heap.len() {
            return false;
        }

        let heap_ordered = (1..self.heap.len())
            .all(|slot| self.heap[(slot - 1) / 2].priority <= self.heap[slot].priority);

        // Equal lengths plus one matching entry per slot rules out duplicates
        // and stray index entries.
        let indexed = self
            .heap
            .iter()
            .enumerate()
            .all(|(slot, entry)| self.index.get(&entry.element) == Some(&slot));

        heap_ordered && indexed
    }

    /// Detaches the root entry and restores heap order
    fn pop_entry(&mut self) -> Option<Entry<E, P>> {
        let last = self.heap.len().checked_sub(1)?;
        self.exchange(0, last);
        let entry = self.heap.pop()?;
        self.index.remove(&entry.element);
        self.sink(0);
        Some(entry)
    }

    /// Moves the entry at `slot` up until its parent is no larger
    ///
    /// Returns the slot the entry ends up in.
    fn swim(&mut self, mut slot: usize) -> usize {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.heap[slot].priority < self.heap[parent].priority {
                self.exchange(slot, parent);
                slot = parent;
            } else {
                break;
            }
        }
        slot
    }

    /// Moves the entry at `slot` down until no child is smaller
    ///
    /// Returns the slot the entry ends up in.
    fn sink(&mut self, mut slot: usize) -> usize {
        let len = self.heap.len();
        loop {
            let left = 2 * slot + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let mut smaller = left;
            if right < len && self.heap[right].priority < self.heap[left].priority {
                smaller = right;
            }

            if self.heap[smaller].priority < self.heap[slot].priority {
                self.exchange(slot, smaller);
                slot = smaller;
            } else {
                break;
            }
        }
        slot
    }

    /// Swaps two slots and re-points both of their index entries
    ///
    /// This is the only place entries change slots.
    fn exchange(&mut self, i: usize, j: usize) {
        self.heap.swap(i, j);
        if let Some(slot) = self.index.get_mut(&self.heap[i].element) {
            *slot = i;
        }
        if let Some(slot) = self.index.get_mut(&self.heap[j].element) {
            *slot = j;
        }
    }
}

impl<E, P, S> Default for IndexedMinPQ<E, P, S>
where
    E: Eq + Hash + Clone,
    P: PartialOrd + Copy,
    S: BuildHasher + Default,
{
    fn default() -> Self {
        <Self as MinPQ<E, P>>::new()
    }
}
