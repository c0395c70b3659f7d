//! Keyed graph store implementation.

use std::hash::Hash;

use indexmap::IndexMap;
use lattis_common::types::{NodeId, UNIT_WEIGHT, Weight};
use lattis_common::utils::hash::{FxHashMap, FxHashSet};
use lattis_common::{Error, Result};

use super::GraphConfig;

/// Insertion-ordered outgoing adjacency of a single node.
type Adjacency = IndexMap<NodeId, Weight, ahash::RandomState>;

/// Arena slot for a live node.
///
/// The slot is the single source of truth for everything attached to the
/// node: its key, its outgoing links, the reverse index of incoming link
/// sources, and the main-node tag. Dropping the slot drops all of it.
#[derive(Debug, Clone)]
struct NodeSlot<K> {
    key: K,
    /// Outgoing links in insertion order.
    outgoing: Adjacency,
    /// Sources of incoming links. Maintained so node removal can cascade to
    /// incoming-only links without scanning the whole arena.
    incoming: FxHashSet<NodeId>,
    /// Cosmetic tag for external presentation layers; no algorithmic effect.
    main: bool,
}

impl<K> NodeSlot<K> {
    fn new(key: K) -> Self {
        Self {
            key,
            outgoing: Adjacency::default(),
            incoming: FxHashSet::default(),
            main: false,
        }
    }
}

/// A keyed, in-memory labeled graph.
///
/// Nodes are identified by arbitrary hashable keys; links may be directed or
/// undirected and weighted or unweighted, fixed per graph at construction.
/// Internally the graph is an arena of [`NodeSlot`]s indexed by [`NodeId`]
/// with a side lookup from key to id; ids are allocated monotonically and
/// never reused.
///
/// Mutation goes through `&mut self`; every query is a pure read. The store
/// has no interior synchronization - embed it behind external mutual
/// exclusion if shared across threads.
///
/// ```
/// use lattis_core::Graph;
///
/// let mut g = Graph::new();
/// g.add_link("a", "b");
/// g.add_link("b", "c");
/// assert!(g.has_link(&"c", &"b"));
/// assert_eq!(g.connected_with(&"b"), Some(vec!["a", "c"]));
/// ```
#[derive(Debug, Clone)]
pub struct Graph<K> {
    config: GraphConfig,
    /// Monotonic id counter; never reused, even after node removal.
    next_id: u64,
    key_to_id: FxHashMap<K, NodeId>,
    nodes: FxHashMap<NodeId, NodeSlot<K>>,
}

impl<K> Graph<K>
where
    K: Eq + Hash + Clone,
{
    /// Creates an undirected, unweighted graph.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    /// Creates a directed, unweighted graph.
    #[must_use]
    pub fn directed() -> Self {
        Self::with_config(GraphConfig::new(true, false))
    }

    /// Creates an undirected, weighted graph.
    #[must_use]
    pub fn weighted() -> Self {
        Self::with_config(GraphConfig::new(false, true))
    }

    /// Creates a directed, weighted graph.
    #[must_use]
    pub fn directed_weighted() -> Self {
        Self::with_config(GraphConfig::new(true, true))
    }

    /// Creates a graph with explicit configuration flags.
    #[must_use]
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            config,
            next_id: 0,
            key_to_id: FxHashMap::default(),
            nodes: FxHashMap::default(),
        }
    }

    /// Returns the fixed configuration of this graph.
    #[must_use]
    pub fn config(&self) -> GraphConfig {
        self.config
    }

    /// Whether links are one-way.
    #[must_use]
    pub fn is_directed(&self) -> bool {
        self.config.directed
    }

    /// Whether links carry caller-supplied weights.
    #[must_use]
    pub fn is_weighted(&self) -> bool {
        self.config.weighted
    }

    // === Node Operations ===

    /// Creates a node for `key` if absent.
    ///
    /// Returns `true` when a node was created, `false` when the key already
    /// names a live node.
    pub fn add_node(&mut self, key: K) -> bool {
        if self.key_to_id.contains_key(&key) {
            return false;
        }
        self.intern(key);
        true
    }

    /// Removes the node named by `key`, cascading to every incident link.
    ///
    /// Both outgoing links and incoming links (including incoming-only links
    /// in directed graphs) are removed before the identity mappings, so no
    /// link ever references a dead id. Returns `false` if the key is absent.
    pub fn remove_node(&mut self, key: &K) -> bool {
        let Some(id) = self.key_to_id.remove(key) else {
            return false;
        };
        let Some(slot) = self.nodes.remove(&id) else {
            return false;
        };

        for target in slot.outgoing.keys() {
            if let Some(t) = self.nodes.get_mut(target) {
                t.incoming.remove(&id);
            }
        }
        for source in &slot.incoming {
            if let Some(s) = self.nodes.get_mut(source) {
                s.outgoing.shift_remove(&id);
            }
        }

        tracing::debug!(
            node = %id,
            outgoing = slot.outgoing.len(),
            incoming = slot.incoming.len(),
            "removed node and incident links"
        );
        true
    }

    /// Whether `key` names a live node.
    #[must_use]
    pub fn has_node(&self, key: &K) -> bool {
        self.key_to_id.contains_key(key)
    }

    /// All live keys, in ascending id order (the order nodes were created).
    #[must_use]
    pub fn nodes(&self) -> Vec<K> {
        let mut live: Vec<(NodeId, &K)> =
            self.nodes.iter().map(|(&id, slot)| (id, &slot.key)).collect();
        live.sort_unstable_by_key(|&(id, _)| id);
        live.into_iter().map(|(_, key)| key.clone()).collect()
    }

    /// Number of live nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph holds no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // === Link Operations ===

    /// Creates a unit-weight link from `from` to `to`.
    ///
    /// Either endpoint is lazily created when missing. Returns `false` with
    /// no mutation when the link already exists or would be a self-loop.
    /// Undirected graphs also store the mirror direction.
    pub fn add_link(&mut self, from: K, to: K) -> bool {
        self.insert_link(from, to, UNIT_WEIGHT)
    }

    /// Creates a link from `from` to `to` with an explicit weight.
    ///
    /// The weight must be finite; otherwise [`Error::InvalidWeight`] is
    /// returned and nothing is mutated. The check runs before the
    /// self-loop/duplicate checks, so a bad weight surfaces even when the
    /// link op would otherwise be a no-op. Unweighted graphs still force the
    /// stored weight to the unit value.
    pub fn add_link_weighted(&mut self, from: K, to: K, weight: Weight) -> Result<bool> {
        if !weight.is_finite() {
            return Err(Error::InvalidWeight(weight));
        }
        let weight = if self.config.weighted { weight } else { UNIT_WEIGHT };
        Ok(self.insert_link(from, to, weight))
    }

    fn insert_link(&mut self, from: K, to: K, weight: Weight) -> bool {
        if from == to || self.has_link(&from, &to) {
            return false;
        }

        let from_id = self.intern(from);
        let to_id = self.intern(to);

        self.link(from_id, to_id, weight);
        if !self.config.directed {
            self.link(to_id, from_id, weight);
        }

        tracing::trace!(from = %from_id, to = %to_id, weight, "link stored");
        true
    }

    /// Stores the directed entry `from -> to` and its reverse-index mirror.
    fn link(&mut self, from: NodeId, to: NodeId, weight: Weight) {
        if let Some(slot) = self.nodes.get_mut(&from) {
            slot.outgoing.insert(to, weight);
        }
        if let Some(slot) = self.nodes.get_mut(&to) {
            slot.incoming.insert(from);
        }
    }

    /// Removes the link from `from` to `to` (and its mirror, if undirected).
    ///
    /// Returns `false` if no such link exists. Surviving adjacency entries
    /// keep their insertion order.
    pub fn remove_link(&mut self, from: &K, to: &K) -> bool {
        let (Some(&from_id), Some(&to_id)) = (self.key_to_id.get(from), self.key_to_id.get(to))
        else {
            return false;
        };

        if !self.unlink(from_id, to_id) {
            return false;
        }
        if !self.config.directed {
            self.unlink(to_id, from_id);
        }
        true
    }

    /// Removes the directed entry `from -> to`. `shift_remove` keeps the
    /// surviving entries in insertion order.
    fn unlink(&mut self, from: NodeId, to: NodeId) -> bool {
        let removed = self
            .nodes
            .get_mut(&from)
            .is_some_and(|slot| slot.outgoing.shift_remove(&to).is_some());
        if removed {
            if let Some(slot) = self.nodes.get_mut(&to) {
                slot.incoming.remove(&from);
            }
        }
        removed
    }

    /// Whether a link from `from` to `to` is stored.
    ///
    /// The direction is the storage direction; for undirected graphs both
    /// orientations answer identically by the symmetry invariant.
    #[must_use]
    pub fn has_link(&self, from: &K, to: &K) -> bool {
        self.link_weight(from, to).is_some()
    }

    /// The stored weight of the directed pair `(from, to)`, or `None` when
    /// no such link exists.
    #[must_use]
    pub fn link_weight(&self, from: &K, to: &K) -> Option<Weight> {
        let from_id = self.key_to_id.get(from)?;
        let to_id = self.key_to_id.get(to)?;
        self.nodes.get(from_id)?.outgoing.get(to_id).copied()
    }

    /// Every stored link as `(from, to, weight)` tuples, grouped by source
    /// node in id order.
    ///
    /// Directed graphs yield one tuple per link. Undirected graphs yield
    /// each link once; the reported orientation is unspecified.
    #[must_use]
    pub fn links(&self) -> Vec<(K, K, Weight)> {
        let mut ids: Vec<NodeId> = self.nodes.keys().copied().collect();
        ids.sort_unstable();

        let mut seen: FxHashSet<(NodeId, NodeId)> = FxHashSet::default();
        let mut out = Vec::new();
        for from in ids {
            let Some(slot) = self.nodes.get(&from) else {
                continue;
            };
            for (&to, &weight) in &slot.outgoing {
                if !self.config.directed {
                    let pair = if from <= to { (from, to) } else { (to, from) };
                    if !seen.insert(pair) {
                        continue;
                    }
                }
                if let Some(target) = self.nodes.get(&to) {
                    out.push((slot.key.clone(), target.key.clone(), weight));
                }
            }
        }
        out
    }

    /// Number of live links. Undirected links count once.
    #[must_use]
    pub fn link_count(&self) -> usize {
        let stored: usize = self.nodes.values().map(|slot| slot.outgoing.len()).sum();
        if self.config.directed { stored } else { stored / 2 }
    }

    // === Neighbors ===

    /// Keys reachable from `key` via one outgoing hop, in the order their
    /// links were inserted. Returns `None` for an unknown key.
    ///
    /// Directed graphs report forward neighbors only, not incoming-only
    /// neighbors.
    #[must_use]
    pub fn connected_with(&self, key: &K) -> Option<Vec<K>> {
        let id = self.key_to_id.get(key)?;
        let slot = self.nodes.get(id)?;
        Some(
            slot.outgoing
                .keys()
                .filter_map(|n| self.nodes.get(n).map(|s| s.key.clone()))
                .collect(),
        )
    }

    // === Main-node tags ===

    /// Tags `key` as a main node, for the exclusive use of external
    /// presentation layers. Returns `false` unless the key names a live
    /// node.
    ///
    /// The tag lives on the arena slot, so removing the node clears it: a
    /// later node reusing the same key starts untagged.
    pub fn set_main_node(&mut self, key: &K) -> bool {
        let Some(&id) = self.key_to_id.get(key) else {
            return false;
        };
        match self.nodes.get_mut(&id) {
            Some(slot) => {
                slot.main = true;
                true
            }
            None => false,
        }
    }

    /// Keys currently tagged as main nodes, in ascending id order.
    #[must_use]
    pub fn main_nodes(&self) -> Vec<K> {
        let mut tagged: Vec<(NodeId, &K)> = self
            .nodes
            .iter()
            .filter(|(_, slot)| slot.main)
            .map(|(&id, slot)| (id, &slot.key))
            .collect();
        tagged.sort_unstable_by_key(|&(id, _)| id);
        tagged.into_iter().map(|(_, key)| key.clone()).collect()
    }

    // === Arena reflection ===

    /// The arena handle of `key`, if live.
    #[must_use]
    pub fn node_id(&self, key: &K) -> Option<NodeId> {
        self.key_to_id.get(key).copied()
    }

    /// The key stored under `id`, if live.
    #[must_use]
    pub fn key_of(&self, id: NodeId) -> Option<&K> {
        self.nodes.get(&id).map(|slot| &slot.key)
    }

    /// Removes every node and link. The id counter keeps running, so ids
    /// are still never reused across a clear.
    pub fn clear(&mut self) {
        self.key_to_id.clear();
        self.nodes.clear();
    }

    /// Outgoing adjacency of `id` as `(neighbor, weight)` pairs, in link
    /// insertion order. Empty for a dead id.
    pub(crate) fn outgoing(&self, id: NodeId) -> impl Iterator<Item = (NodeId, Weight)> + '_ {
        self.nodes
            .get(&id)
            .into_iter()
            .flat_map(|slot| slot.outgoing.iter().map(|(&n, &w)| (n, w)))
    }

    // === Internal Helpers ===

    /// Returns the id of `key`, allocating a fresh slot if the key is new.
    fn intern(&mut self, key: K) -> NodeId {
        if let Some(&id) = self.key_to_id.get(&key) {
            return id;
        }
        let id = NodeId::new(self.next_id);
        self.next_id += 1;
        self.key_to_id.insert(key.clone(), id);
        self.nodes.insert(id, NodeSlot::new(key));
        id
    }
}

impl<K> Default for Graph<K>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}
