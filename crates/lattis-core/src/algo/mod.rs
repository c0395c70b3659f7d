//! Query algorithms over the graph store.
//!
//! - [`shortest_path`] - single-pair shortest path (Dijkstra-style
//!   relaxation with a binary-heap frontier)
//! - [`paths`] - exhaustive enumeration of simple paths (depth-first
//!   backtracking)
//!
//! Both algorithms are pure reads: they take `&Graph` and leave it
//! untouched. Missing endpoints are normal outcomes, reported through
//! empty/sentinel results rather than errors.

pub mod paths;
pub mod shortest_path;

pub use paths::all_simple_paths;
pub use shortest_path::{ShortestPath, shortest_path};

use std::cmp::Ordering;

/// `MinScored<S, T>` holds a score and a value, with the comparison order
/// reversed so that `std::collections::BinaryHeap` (a max-heap) pops the
/// *smallest* score first.
///
/// The implementation gives NaN scores a total order (they sort as
/// greater-than-everything, i.e. popped last) so a poisoned distance can
/// never panic the heap.
#[derive(Copy, Clone, Debug)]
pub struct MinScored<S, T>(pub S, pub T);

impl<S: PartialOrd, T> PartialEq for MinScored<S, T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<S: PartialOrd, T> Eq for MinScored<S, T> {}

impl<S: PartialOrd, T> PartialOrd for MinScored<S, T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S: PartialOrd, T> Ord for MinScored<S, T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        let a = &self.0;
        let b = &other.0;
        if a == b {
            Ordering::Equal
        } else if a < b {
            Ordering::Greater
        } else if a > b {
            Ordering::Less
        } else if a.ne(a) && b.ne(b) {
            // Both NaN: arbitrary but consistent.
            Ordering::Equal
        } else if a.ne(a) {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    }
}
