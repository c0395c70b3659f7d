//! Exhaustive simple-path enumeration via depth-first backtracking.

use std::hash::Hash;

use lattis_common::types::NodeId;
use lattis_common::utils::hash::FxHashSet;

use crate::graph::Graph;

/// Enumerates every simple path (no repeated node) from `start` to `end`
/// over outgoing links.
///
/// Unknown endpoints produce an empty result. `start == end` (live)
/// produces the single-node path.
///
/// The search shares one visited set and one path buffer across the whole
/// recursion with strict push-on-enter/pop-on-exit discipline, so sibling
/// branches never see stale state. Dense graphs can hold exponentially many
/// simple paths; bounding input size is the caller's contract.
pub fn all_simple_paths<K>(graph: &Graph<K>, start: &K, end: &K) -> Vec<Vec<K>>
where
    K: Eq + Hash + Clone,
{
    let (Some(start_id), Some(end_id)) = (graph.node_id(start), graph.node_id(end)) else {
        return Vec::new();
    };

    let mut visited: FxHashSet<NodeId> = FxHashSet::default();
    let mut trail: Vec<NodeId> = Vec::new();
    let mut found: Vec<Vec<K>> = Vec::new();
    search(graph, start_id, end_id, &mut visited, &mut trail, &mut found);

    tracing::debug!(paths = found.len(), "simple-path enumeration finished");
    found
}

fn search<K>(
    graph: &Graph<K>,
    node: NodeId,
    end: NodeId,
    visited: &mut FxHashSet<NodeId>,
    trail: &mut Vec<NodeId>,
    found: &mut Vec<Vec<K>>,
) where
    K: Eq + Hash + Clone,
{
    visited.insert(node);
    trail.push(node);

    if node == end {
        found.push(
            trail
                .iter()
                .filter_map(|id| graph.key_of(*id).cloned())
                .collect(),
        );
    } else {
        for (next, _) in graph.outgoing(node) {
            if !visited.contains(&next) {
                search(graph, next, end, visited, trail, found);
            }
        }
    }

    trail.pop();
    visited.remove(&node);
}
