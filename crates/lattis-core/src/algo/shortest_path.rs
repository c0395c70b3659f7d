//! Single-pair shortest path via Dijkstra-style relaxation.

use std::collections::BinaryHeap;
use std::hash::Hash;

use lattis_common::types::{NodeId, Weight};
use lattis_common::utils::hash::{FxHashMap, FxHashSet};

use super::MinScored;
use crate::graph::Graph;

/// Result of a single-pair shortest-path query.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPath<K> {
    /// Keys along the path, start first, end last. Empty when no path
    /// exists or either endpoint is unknown.
    pub path: Vec<K>,
    /// Total weight of the path; `f64::INFINITY` when unreachable.
    pub distance: Weight,
}

impl<K> ShortestPath<K> {
    /// Whether the query found a path.
    #[must_use]
    pub fn is_reachable(&self) -> bool {
        self.distance.is_finite()
    }

    fn unreachable() -> Self {
        Self {
            path: Vec::new(),
            distance: Weight::INFINITY,
        }
    }
}

/// Computes the minimum-weight path from `start` to `end` over outgoing
/// links.
///
/// Relaxation with a binary-heap frontier keyed by tentative distance; ties
/// between equal distances resolve in unspecified order. The search settles
/// nodes in distance order and stops as soon as `end` is settled, so the
/// rest of the graph is never touched.
///
/// Correct only for non-negative weights. The precondition is not
/// validated: negative weights yield an unspecified result, not an error.
///
/// Unknown endpoints (or an unreachable `end`) produce an empty path with
/// infinite distance.
pub fn shortest_path<K>(graph: &Graph<K>, start: &K, end: &K) -> ShortestPath<K>
where
    K: Eq + Hash + Clone,
{
    let (Some(start_id), Some(end_id)) = (graph.node_id(start), graph.node_id(end)) else {
        return ShortestPath::unreachable();
    };

    let mut dist: FxHashMap<NodeId, Weight> = FxHashMap::default();
    let mut prev: FxHashMap<NodeId, NodeId> = FxHashMap::default();
    let mut visited: FxHashSet<NodeId> = FxHashSet::default();
    let mut frontier = BinaryHeap::new();

    dist.insert(start_id, 0.0);
    frontier.push(MinScored(0.0, start_id));

    while let Some(MinScored(node_dist, node)) = frontier.pop() {
        // A node may sit in the frontier once per relaxation that improved
        // it; only the first (smallest-distance) extraction settles it.
        if !visited.insert(node) {
            continue;
        }
        if node == end_id {
            break;
        }

        for (next, weight) in graph.outgoing(node) {
            if visited.contains(&next) {
                continue;
            }
            let candidate = node_dist + weight;
            if dist.get(&next).is_none_or(|&known| candidate < known) {
                dist.insert(next, candidate);
                prev.insert(next, node);
                frontier.push(MinScored(candidate, next));
            }
        }
    }

    let Some(&distance) = dist.get(&end_id) else {
        // `end` is a live node but was never relaxed: no path.
        return ShortestPath::unreachable();
    };

    // Walk the predecessor chain backward from the end.
    let mut ids = vec![end_id];
    let mut current = end_id;
    while current != start_id {
        match prev.get(&current) {
            Some(&p) => {
                current = p;
                ids.push(p);
            }
            None => return ShortestPath::unreachable(),
        }
    }
    ids.reverse();

    tracing::trace!(settled = visited.len(), hops = ids.len() - 1, "shortest path found");

    let path = ids
        .into_iter()
        .filter_map(|id| graph.key_of(id).cloned())
        .collect();
    ShortestPath { path, distance }
}
