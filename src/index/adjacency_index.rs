//! Adjacency index — maps each node to the set of nodes it links to.

use std::collections::hash_map::Keys;
use std::collections::{HashMap, HashSet};

use crate::types::Node;

/// Maps each node to the set of nodes adjacent to it in one direction.
///
/// Every node known to the index has an entry, possibly empty, so the key
/// set doubles as the node set of the owning graph.
#[derive(Debug, Clone)]
pub struct AdjacencyIndex<N> {
    index: HashMap<N, HashSet<N>>,
}

impl<N: Node> AdjacencyIndex<N> {
    /// Create a new, empty adjacency index.
    pub fn new() -> Self {
        Self {
            index: HashMap::new(),
        }
    }

    /// Create an empty index with room for `nodes` entries.
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            index: HashMap::with_capacity(nodes),
        }
    }

    /// Get the nodes adjacent to `node`, if it is known.
    pub fn get(&self, node: &N) -> Option<&HashSet<N>> {
        self.index.get(node)
    }

    /// Nodes adjacent to `node`, cloned; empty if `node` is unknown.
    pub fn adjacent(&self, node: &N) -> HashSet<N> {
        self.index.get(node).cloned().unwrap_or_default()
    }

    /// Whether `to` is recorded as adjacent to `from`.
    pub fn is_linked(&self, from: &N, to: &N) -> bool {
        self.index.get(from).is_some_and(|set| set.contains(to))
    }

    /// Count nodes adjacent to `node`.
    pub fn count(&self, node: &N) -> usize {
        self.index.get(node).map(|s| s.len()).unwrap_or(0)
    }

    /// Whether `node` has an entry.
    pub fn contains_node(&self, node: &N) -> bool {
        self.index.contains_key(node)
    }

    /// Register a node with no links. Returns `true` if it was new.
    pub fn add_node(&mut self, node: N) -> bool {
        if self.index.contains_key(&node) {
            return false;
        }
        self.index.insert(node, HashSet::new());
        true
    }

    /// Record `to` as adjacent to `from`, registering `from` if needed.
    /// Returns `true` if the link was new.
    pub fn link(&mut self, from: N, to: N) -> bool {
        self.index.entry(from).or_default().insert(to)
    }

    /// Remove the link from `from` to `to`. Returns `true` if it existed.
    pub fn unlink(&mut self, from: &N, to: &N) -> bool {
        self.index
            .get_mut(from)
            .map(|set| set.remove(to))
            .unwrap_or(false)
    }

    /// Remove a node's entry, returning the nodes it was linked to.
    ///
    /// Links pointing *at* the node from other entries are left alone; the
    /// owning graph removes those through the reverse direction.
    pub fn remove_node(&mut self, node: &N) -> Option<HashSet<N>> {
        self.index.remove(node)
    }

    /// Iterate over all known nodes.
    pub fn nodes(&self) -> Keys<'_, N, HashSet<N>> {
        self.index.keys()
    }

    /// Number of known nodes.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether the index is empty.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Total number of recorded links across all nodes.
    pub fn link_count(&self) -> usize {
        self.index.values().map(|s| s.len()).sum()
    }
}

impl<N: Node> Default for AdjacencyIndex<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Node> PartialEq for AdjacencyIndex<N> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl<N: Node> Eq for AdjacencyIndex<N> {}
