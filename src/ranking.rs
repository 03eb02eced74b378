//! Top-k selection by relevance score
//!
//! Ranking consumers (autocomplete suggestions, search hits) usually want the
//! few best-scoring candidates out of a long stream. [`top_k`] keeps a
//! bounded min-queue keyed by score: the queue minimum is the weakest
//! candidate kept so far, and a newcomer only gets in by beating it.
//!
//! ```rust
//! use minpq::ranking::top_k;
//! use minpq::IndexedMinPQ;
//!
//! let terms = vec![("seattle", 0.9), ("seaside", 0.4), ("search", 0.7), ("season", 0.2)];
//! let best = top_k::<IndexedMinPQ<_>, _, _>(terms, 2);
//! assert_eq!(best, vec![("seattle", 0.9), ("search", 0.7)]);
//! ```

use crate::traits::MinPQ;

/// Returns at most `k` items with the highest scores, best first
///
/// An item that occurs more than once keeps its highest score. Items with
/// equal scores come out in unspecified relative order.
///
/// Runs in O(n log k) with an indexed queue.
pub fn top_k<Q, T, P>(scored: impl IntoIterator<Item = (T, P)>, k: usize) -> Vec<(T, P)>
where
    Q: MinPQ<T, P>,
    P: PartialOrd + Copy,
{
    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!("top_k", k);
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    if k == 0 {
        return Vec::new();
    }

    // Membership is checked before every insert and the queue is never
    // empty when full, so none of the queue calls below can fail.
    let mut queue = Q::new();
    for (item, score) in scored {
        if let Ok(current) = queue.priority_of(&item) {
            if score > current {
                let changed = queue.change_priority(&item, score);
                debug_assert!(changed.is_ok(), "queued item missing from the queue");
            }
            continue;
        }

        if queue.len() < k {
            let inserted = queue.insert(item, score);
            debug_assert!(inserted.is_ok(), "unqueued item was already queued");
            continue;
        }

        match min_score::<Q, T, P>(&queue) {
            Some(weakest) if score > weakest => {
                let evicted = queue.remove_min();
                debug_assert!(evicted.is_ok(), "full queue reported empty");
                let inserted = queue.insert(item, score);
                debug_assert!(inserted.is_ok(), "unqueued item was already queued");
            }
            _ => {}
        }
    }

    let mut ranked = Vec::with_capacity(queue.len());
    while let Some(score) = min_score::<Q, T, P>(&queue) {
        match queue.remove_min() {
            Ok(item) => ranked.push((item, score)),
            Err(_) => break,
        }
    }
    ranked.reverse();

    #[cfg(feature = "tracing")]
    tracing::trace!(selected = ranked.len(), "top-k selection finished");
    ranked
}

fn min_score<Q, T, P>(queue: &Q) -> Option<P>
where
    Q: MinPQ<T, P>,
{
    let weakest = queue.peek_min().ok()?;
    queue.priority_of(weakest).ok()
}
