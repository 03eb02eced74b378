//! Mutable Indexed Priority Queues for Rust
//!
//! This crate provides a min-priority queue over unique elements whose
//! priorities can be changed after insertion, as needed by algorithms like
//! Dijkstra's shortest path.
//!
//! # Features
//!
//! - **Indexed Binary Heap** ([`IndexedMinPQ`]): O(log n) insert, remove-min and
//!   change-priority; O(1) peek, membership and priority lookup; O(n) bulk load
//! - **Naive Reference Queue** ([`NaiveMinPQ`]): an unordered vector with O(n)
//!   scans, used as a correctness oracle
//! - **Pathfinding** ([`pathfinding`]): Dijkstra generic over any [`MinPQ`]
//! - **Ranking** ([`ranking`]): top-k selection by relevance score
//!
//! Enable the `tracing` feature to emit trace and debug events through the
//! `tracing` crate.
//!
//! # Example
//!
//! ```rust
//! use minpq::{IndexedMinPQ, MinPQ};
//!
//! let mut pq = IndexedMinPQ::new();
//! pq.insert("far", 9.0).unwrap();
//! pq.insert("near", 3.0).unwrap();
//! pq.change_priority(&"far", 1.0).unwrap();
//! assert_eq!(pq.remove_min(), Ok("far"));
//! assert_eq!(pq.priority_of(&"near"), Ok(3.0));
//! ```

pub mod indexed;
pub mod naive;
pub mod pathfinding;
pub mod ranking;
pub mod traits;

pub use indexed::IndexedMinPQ;
pub use naive::NaiveMinPQ;
pub use traits::{MinPQ, PQError};
