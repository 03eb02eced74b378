//! Common traits for priority queues
//!
//! This module provides the [`MinPQ`] contract shared by every queue in this
//! crate, together with the [`PQError`] taxonomy its operations fail with.
//!
//! Unlike `BinaryHeap`, the queues here are priority *sets*: each element may
//! be present at most once, and its priority can be changed after insertion.
//! Elements are compared for equality only; ordering comes from the priority.

use std::fmt;

/// Error type for priority queue operations
///
/// Every operation checks its precondition before touching any state, so a
/// returned error always leaves the queue unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PQError {
    /// The element is already present; use `change_priority` instead
    DuplicateElement,
    /// The queue holds no elements
    EmptyStructure,
    /// The element is not present in the queue
    NotFound,
}

impl fmt::Display for PQError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PQError::DuplicateElement => write!(f, "element is already in the priority queue"),
            PQError::EmptyStructure => write!(f, "priority queue is empty"),
            PQError::NotFound => write!(f, "element is not in the priority queue"),
        }
    }
}

impl std::error::Error for PQError {}

/// Min-priority queue over unique elements with mutable priorities
///
/// Lower priorities are more urgent: `peek_min` and `remove_min` always
/// report an element whose priority is no greater than any other's. Ties are
/// allowed and may surface in either order.
///
/// # Example
///
/// ```rust
/// use minpq::{IndexedMinPQ, MinPQ, PQError};
///
/// let mut pq = IndexedMinPQ::new();
/// pq.insert("a", 5.0).unwrap();
/// pq.insert("b", 2.0).unwrap();
/// assert_eq!(pq.insert("a", 1.0), Err(PQError::DuplicateElement));
///
/// pq.change_priority(&"a", 1.0).unwrap();
/// assert_eq!(pq.peek_min(), Ok(&"a"));
/// assert_eq!(pq.remove_min(), Ok("a"));
/// assert_eq!(pq.remove_min(), Ok("b"));
/// assert_eq!(pq.remove_min(), Err(PQError::EmptyStructure));
/// ```
pub trait MinPQ<E, P = f64> {
    /// Creates a new empty queue
    fn new() -> Self;

    /// Adds an element with the given priority
    ///
    /// # Errors
    /// Returns [`PQError::DuplicateElement`] if the element is already present.
    fn insert(&mut self, element: E, priority: P) -> Result<(), PQError>;

    /// Returns true if the element is present
    fn contains(&self, element: &E) -> bool;

    /// Returns the current priority of the element
    ///
    /// # Errors
    /// Returns [`PQError::NotFound`] if the element is absent. No sentinel
    /// priority is ever returned in its place.
    fn priority_of(&self, element: &E) -> Result<P, PQError>;

    /// Returns the element with the minimum priority without removing it
    ///
    /// # Errors
    /// Returns [`PQError::EmptyStructure`] if the queue is empty.
    fn peek_min(&self) -> Result<&E, PQError>;

    /// Removes and returns the element with the minimum priority
    ///
    /// # Errors
    /// Returns [`PQError::EmptyStructure`] if the queue is empty.
    fn remove_min(&mut self) -> Result<E, PQError>;

    /// Replaces the priority of an element already in the queue
    ///
    /// The new priority may be lower, higher, or equal to the current one.
    ///
    /// # Errors
    /// Returns [`PQError::NotFound`] if the element is absent.
    fn change_priority(&mut self, element: &E, priority: P) -> Result<(), PQError>;

    /// Returns the number of elements in the queue
    fn len(&self) -> usize;

    /// Returns true if the queue is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
