//! Dijkstra's pathfinding on top of a mutable priority queue
//!
//! This module provides generic shortest-path searches that drive any
//! [`MinPQ`] implementation the eager way: every discovered node is queued
//! once with its best known distance as priority, and when a shorter path to
//! a still-queued node turns up its priority is lowered in place with
//! [`MinPQ::change_priority`] instead of queuing a second copy.
//!
//! # Design
//!
//! Only lightweight node indices are stored in the queue. A fast hash map
//! (FxHash) maps node states to those indices, and a vector holds the
//! per-node metadata (distance, predecessor, closed flag).
//!
//! # Example
//!
//! ```rust
//! use minpq::pathfinding::{dijkstra, SearchNode};
//! use minpq::IndexedMinPQ;
//!
//! #[derive(Clone, PartialEq, Eq, Hash)]
//! struct Stop { id: u8 }
//!
//! impl SearchNode for Stop {
//!     type Cost = f64;
//!
//!     fn successors(&self) -> Vec<(Self, f64)> {
//!         match self.id {
//!             0 => vec![(Stop { id: 1 }, 10.0), (Stop { id: 2 }, 1.0)],
//!             2 => vec![(Stop { id: 1 }, 2.5)],
//!             _ => vec![],
//!         }
//!     }
//!
//!     fn is_goal(&self) -> bool {
//!         self.id == 1
//!     }
//! }
//!
//! let (path, cost) = dijkstra::<_, IndexedMinPQ<_>>(&Stop { id: 0 }).unwrap();
//! assert_eq!(cost, 3.5);
//! assert_eq!(path.iter().map(|s| s.id).collect::<Vec<_>>(), vec![0, 2, 1]);
//! ```

use crate::traits::MinPQ;
use rustc_hash::FxHashMap;
use std::hash::Hash;
use std::ops::Add;

/// Trait for types that can be used as costs in pathfinding algorithms.
///
/// Costs need a zero (`Default`), addition, and a comparison that is total
/// over the values actually produced. `f64` qualifies as long as no edge
/// weight is NaN.
pub trait Cost: PartialOrd + Copy + Add<Output = Self> + Default {}

impl<T> Cost for T where T: PartialOrd + Copy + Add<Output = Self> + Default {}

/// Trait for nodes in a search graph.
///
/// The node carries all context needed to generate its successors and to
/// decide whether it is a goal.
pub trait SearchNode: Clone + Eq + Hash {
    /// The cost type for edge weights
    type Cost: Cost;

    /// Returns all successor nodes along with the cost to reach them.
    fn successors(&self) -> Vec<(Self, Self::Cost)>;

    /// Returns true if this node is a goal state.
    fn is_goal(&self) -> bool;
}

/// Index of a discovered node; this is what gets stored in the queue.
pub type NodeIndex = usize;

/// Metadata stored for each discovered node during search.
struct NodeEntry<N: SearchNode> {
    node: N,
    /// Best known cost from start (g-score)
    g_score: N::Cost,
    /// Previous node on the best known path
    came_from: Option<NodeIndex>,
    /// Set once the node has been removed from the queue
    closed: bool,
}

/// Bookkeeping for one search: node states, their indices and metadata.
struct PathFinder<N: SearchNode> {
    nodes: Vec<NodeEntry<N>>,
    state_to_index: FxHashMap<N, NodeIndex>,
}

impl<N: SearchNode> PathFinder<N> {
    fn new() -> Self {
        PathFinder {
            nodes: Vec::new(),
            state_to_index: FxHashMap::default(),
        }
    }

    /// Gets or creates an index for a node state.
    ///
    /// The boolean is true when the node was seen for the first time.
    fn get_or_create_index(&mut self, node: N, g_score: N::Cost) -> (NodeIndex, bool) {
        if let Some(&index) = self.state_to_index.get(&node) {
            return (index, false);
        }
        let index = self.nodes.len();
        self.state_to_index.insert(node.clone(), index);
        self.nodes.push(NodeEntry {
            node,
            g_score,
            came_from: None,
            closed: false,
        });
        (index, true)
    }

    /// Reconstructs the path from start to the given node index.
    fn reconstruct_path(&self, mut current: NodeIndex) -> Vec<N> {
        let mut path = vec![self.nodes[current].node.clone()];
        while let Some(prev) = self.nodes[current].came_from {
            path.push(self.nodes[prev].node.clone());
            current = prev;
        }
        path.reverse();
        path
    }
}

/// Optional limits applied to a search.
#[derive(Debug, Clone, Copy)]
struct Limits<C> {
    max_cost: Option<C>,
    max_nodes: Option<usize>,
}

impl<C> Limits<C> {
    fn none() -> Self {
        Limits {
            max_cost: None,
            max_nodes: None,
        }
    }
}

/// Runs Dijkstra's algorithm from the start node until `is_goal()` returns true.
///
/// `Q` is the queue used for the open set, e.g. `IndexedMinPQ<_, _>`.
///
/// # Returns
/// - `Some((path, cost))` with the path from start to goal, both inclusive
/// - `None` if no goal is reachable
pub fn dijkstra<N, Q>(start: &N) -> Option<(Vec<N>, N::Cost)>
where
    N: SearchNode,
    Q: MinPQ<NodeIndex, N::Cost>,
{
    search_impl::<N, Q>(start, Limits::none())
}

/// Internal search implementation shared by every entry point.
fn search_impl<N, Q>(start: &N, limits: Limits<N::Cost>) -> Option<(Vec<N>, N::Cost)>
where
    N: SearchNode,
    Q: MinPQ<NodeIndex, N::Cost>,
{
    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!("shortest_path_search", max_nodes = ?limits.max_nodes);
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let mut queue = Q::new();
    let mut finder: PathFinder<N> = PathFinder::new();
    let mut nodes_explored = 0usize;

    let zero = N::Cost::default();
    let (start_index, _) = finder.get_or_create_index(start.clone(), zero);
    queue.insert(start_index, zero).ok()?;

    while let Ok(current_index) = queue.remove_min() {
        if let Some(max) = limits.max_nodes {
            if nodes_explored >= max {
                #[cfg(feature = "tracing")]
                tracing::trace!(nodes_explored, "node limit reached");
                return None;
            }
        }
        nodes_explored += 1;

        let current_entry = &mut finder.nodes[current_index];
        current_entry.closed = true;
        let current_node = current_entry.node.clone();
        let current_g = current_entry.g_score;

        if current_node.is_goal() {
            #[cfg(feature = "tracing")]
            tracing::trace!(nodes_explored, "goal reached");
            return Some((finder.reconstruct_path(current_index), current_g));
        }

        for (neighbor, edge_cost) in current_node.successors() {
            let tentative_g = current_g + edge_cost;
            if let Some(max) = limits.max_cost {
                if tentative_g > max {
                    continue;
                }
            }

            let (neighbor_index, is_new) = finder.get_or_create_index(neighbor, tentative_g);
            let neighbor_entry = &mut finder.nodes[neighbor_index];

            if neighbor_entry.closed {
                continue;
            }

            if is_new {
                neighbor_entry.came_from = Some(current_index);
                let inserted = queue.insert(neighbor_index, tentative_g);
                debug_assert!(inserted.is_ok(), "newly discovered node was already queued");
            } else if tentative_g < neighbor_entry.g_score {
                neighbor_entry.g_score = tentative_g;
                neighbor_entry.came_from = Some(current_index);
                // Every discovered node that is not closed is still queued
                let changed = queue.change_priority(&neighbor_index, tentative_g);
                debug_assert!(changed.is_ok(), "open node missing from the queue");
            }
        }
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(nodes_explored, "search exhausted without reaching a goal");
    None
}

/// Builder for pathfinding queries with more configuration options.
///
/// ```rust
/// use minpq::pathfinding::{PathFinderBuilder, SearchNode};
/// use minpq::IndexedMinPQ;
///
/// #[derive(Clone, PartialEq, Eq, Hash)]
/// struct Step(u32);
///
/// impl SearchNode for Step {
///     type Cost = u32;
///     fn successors(&self) -> Vec<(Self, u32)> {
///         vec![(Step(self.0 + 1), 1)]
///     }
///     fn is_goal(&self) -> bool {
///         self.0 == 10
///     }
/// }
///
/// let too_short = PathFinderBuilder::new(Step(0))
///     .max_cost(3)
///     .dijkstra::<IndexedMinPQ<_, _>>();
/// assert!(too_short.is_none());
/// ```
pub struct PathFinderBuilder<N: SearchNode> {
    start: N,
    limits: Limits<N::Cost>,
}

impl<N: SearchNode> PathFinderBuilder<N> {
    /// Creates a new builder starting from the given node.
    pub fn new(start: N) -> Self {
        PathFinderBuilder {
            start,
            limits: Limits::none(),
        }
    }

    /// Sets the maximum path cost to explore.
    pub fn max_cost(mut self, cost: N::Cost) -> Self {
        self.limits.max_cost = Some(cost);
        self
    }

    /// Sets the maximum number of nodes to remove from the queue.
    pub fn max_nodes(mut self, count: usize) -> Self {
        self.limits.max_nodes = Some(count);
        self
    }

    /// Runs Dijkstra's algorithm with the configured settings.
    pub fn dijkstra<Q>(self) -> Option<(Vec<N>, N::Cost)>
    where
        Q: MinPQ<NodeIndex, N::Cost>,
    {
        search_impl::<N, Q>(&self.start, self.limits)
    }
}

/// Returns all nodes reachable from the start within a given cost budget.
///
/// Nodes are listed in non-decreasing order of their shortest distance.
pub fn reachable_within<N, Q>(start: &N, max_cost: N::Cost) -> Vec<(N, N::Cost)>
where
    N: SearchNode,
    Q: MinPQ<NodeIndex, N::Cost>,
{
    let mut queue = Q::new();
    let mut finder: PathFinder<N> = PathFinder::new();
    let mut result = Vec::new();

    let zero = N::Cost::default();
    if zero > max_cost {
        return result;
    }
    let (start_index, _) = finder.get_or_create_index(start.clone(), zero);
    if queue.insert(start_index, zero).is_err() {
        return result;
    }

    while let Ok(current_index) = queue.remove_min() {
        let current_entry = &mut finder.nodes[current_index];
        current_entry.closed = true;
        let current_node = current_entry.node.clone();
        let current_g = current_entry.g_score;

        for (neighbor, edge_cost) in current_node.successors() {
            let tentative_g = current_g + edge_cost;
            if tentative_g > max_cost {
                continue;
            }

            let (neighbor_index, is_new) = finder.get_or_create_index(neighbor, tentative_g);
            let neighbor_entry = &mut finder.nodes[neighbor_index];

            if neighbor_entry.closed {
                continue;
            }

            if is_new {
                let inserted = queue.insert(neighbor_index, tentative_g);
                debug_assert!(inserted.is_ok(), "newly discovered node was already queued");
            } else if tentative_g < neighbor_entry.g_score {
                neighbor_entry.g_score = tentative_g;
                let changed = queue.change_priority(&neighbor_index, tentative_g);
                debug_assert!(changed.is_ok(), "open node missing from the queue");
            }
        }

        result.push((current_node, current_g));
    }

    result
}
