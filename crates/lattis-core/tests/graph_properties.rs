//! Property-based tests for store invariants and algorithm contracts.
//!
//! Small key universes keep the exhaustive cross-checks (brute-force
//! shortest path via full path enumeration) tractable while still covering
//! duplicate links, self-loops, and disconnected nodes.

use proptest::prelude::*;

use lattis_core::{Graph, all_simple_paths, shortest_path};

const KEYS: u8 = 6;

/// Random edge list over a tiny key universe; duplicates and self-loops
/// included on purpose so the store's no-op paths get exercised.
fn edge_list() -> impl Strategy<Value = Vec<(u8, u8, u32)>> {
    prop::collection::vec((0..KEYS, 0..KEYS, 1..=100u32), 0..24)
}

fn path_cost(g: &Graph<u8>, path: &[u8]) -> f64 {
    path.windows(2)
        .map(|hop| g.link_weight(&hop[0], &hop[1]).unwrap_or(f64::INFINITY))
        .sum()
}

proptest! {
    #[test]
    fn prop_add_node_idempotent(keys in prop::collection::vec(0..KEYS, 0..24)) {
        let mut g = Graph::new();
        let mut live = std::collections::HashSet::new();
        for k in keys {
            // Creation reports true exactly once per distinct live key.
            prop_assert_eq!(g.add_node(k), live.insert(k));
            prop_assert_eq!(g.node_count(), live.len());
        }
    }

    #[test]
    fn prop_self_loops_never_stored(edges in edge_list()) {
        let mut g = Graph::weighted();
        for &(a, b, w) in &edges {
            let _ = g.add_link_weighted(a, b, f64::from(w));
        }
        for k in 0..KEYS {
            prop_assert!(!g.has_link(&k, &k));
        }
    }

    #[test]
    fn prop_undirected_links_symmetric(edges in edge_list()) {
        let mut g = Graph::weighted();
        for &(a, b, w) in &edges {
            let _ = g.add_link_weighted(a, b, f64::from(w));
        }
        for a in 0..KEYS {
            for b in 0..KEYS {
                prop_assert_eq!(g.has_link(&a, &b), g.has_link(&b, &a));
                prop_assert_eq!(g.link_weight(&a, &b), g.link_weight(&b, &a));
            }
        }
    }

    #[test]
    fn prop_unweighted_graphs_store_unit_weight(edges in edge_list()) {
        let mut g = Graph::directed();
        for &(a, b, w) in &edges {
            let _ = g.add_link_weighted(a, b, f64::from(w));
        }
        for (from, to, weight) in g.links() {
            prop_assert_eq!(weight, 1.0);
            prop_assert_eq!(g.link_weight(&from, &to), Some(1.0));
        }
    }

    #[test]
    fn prop_remove_node_cascades(edges in edge_list(), victim in 0..KEYS) {
        let mut g = Graph::directed();
        for &(a, b, _) in &edges {
            g.add_link(a, b);
        }
        g.add_node(victim);

        prop_assert!(g.remove_node(&victim));
        prop_assert!(!g.has_node(&victim));
        for j in 0..KEYS {
            prop_assert!(!g.has_link(&victim, &j));
            prop_assert!(!g.has_link(&j, &victim));
        }
        // Every surviving link still connects two live nodes.
        for (from, to, _) in g.links() {
            prop_assert!(g.has_node(&from));
            prop_assert!(g.has_node(&to));
        }
    }

    #[test]
    fn prop_shortest_path_matches_brute_force(
        edges in edge_list(),
        start in 0..KEYS,
        end in 0..KEYS,
    ) {
        let mut g = Graph::directed_weighted();
        for &(a, b, w) in &edges {
            let _ = g.add_link_weighted(a, b, f64::from(w));
        }
        g.add_node(start);
        g.add_node(end);

        let sp = shortest_path(&g, &start, &end);
        let routes = all_simple_paths(&g, &start, &end);

        if routes.is_empty() {
            prop_assert!(sp.path.is_empty());
            prop_assert!(sp.distance.is_infinite());
        } else {
            // Integer-valued weights make the f64 sums exact, so the
            // optimum from full enumeration must match to the bit.
            let best = routes
                .iter()
                .map(|p| path_cost(&g, p))
                .fold(f64::INFINITY, f64::min);
            prop_assert_eq!(sp.distance, best);
            prop_assert_eq!(path_cost(&g, &sp.path), sp.distance);
            prop_assert_eq!(sp.path.first(), Some(&start));
            prop_assert_eq!(sp.path.last(), Some(&end));
        }
    }

    #[test]
    fn prop_all_paths_are_simple_and_walkable(
        edges in edge_list(),
        start in 0..KEYS,
        end in 0..KEYS,
    ) {
        let mut g = Graph::directed();
        for &(a, b, _) in &edges {
            g.add_link(a, b);
        }
        g.add_node(start);
        g.add_node(end);

        let routes = all_simple_paths(&g, &start, &end);
        for route in &routes {
            prop_assert_eq!(route.first(), Some(&start));
            prop_assert_eq!(route.last(), Some(&end));
            let unique: std::collections::HashSet<u8> = route.iter().copied().collect();
            prop_assert_eq!(unique.len(), route.len());
            for hop in route.windows(2) {
                prop_assert!(g.has_link(&hop[0], &hop[1]));
            }
        }
        // No duplicate routes.
        let mut dedup = routes.clone();
        dedup.sort();
        dedup.dedup();
        prop_assert_eq!(dedup.len(), routes.len());
    }
}
