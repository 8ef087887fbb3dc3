//! Directed graph — nodes plus a set of ordered-pair edges.

use std::collections::hash_set;
use std::collections::HashSet;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::index::AdjacencyIndex;
use crate::scheme::GraphLike;
use crate::types::{
    GraphResult, LoopPolicy, Node, OrderedPair, SymmetricPair, DEFAULT_LOOP_POLICY,
};

/// A directed graph over nodes of type `N`.
///
/// `(a, b)` and `(b, a)` are distinct edges and may coexist. Adjacency is
/// kept in both directions so outgoing and incoming queries are both
/// proportional to the answer.
#[derive(Debug, Clone)]
pub struct DirectedGraph<N> {
    /// All edges.
    edges: HashSet<OrderedPair<N>>,
    /// Forward adjacency: a -> {b | (a, b) is an edge}. Keys are the node set.
    successors: AdjacencyIndex<N>,
    /// Reverse adjacency: b -> {a | (a, b) is an edge}. Same key set.
    predecessors: AdjacencyIndex<N>,
    /// Whether self-loops are accepted.
    policy: LoopPolicy,
}

impl<N: Node> DirectedGraph<N> {
    /// Create a new empty graph with the default loop policy.
    pub fn new() -> Self {
        Self::with_policy(DEFAULT_LOOP_POLICY)
    }

    /// Create a new empty graph with the given loop policy.
    pub fn with_policy(policy: LoopPolicy) -> Self {
        Self {
            edges: HashSet::new(),
            successors: AdjacencyIndex::new(),
            predecessors: AdjacencyIndex::new(),
            policy,
        }
    }

    /// Create an empty graph with room for `nodes` nodes and `edges` edges.
    pub fn with_capacity(nodes: usize, edges: usize, policy: LoopPolicy) -> Self {
        Self {
            edges: HashSet::with_capacity(edges),
            successors: AdjacencyIndex::with_capacity(nodes),
            predecessors: AdjacencyIndex::with_capacity(nodes),
            policy,
        }
    }

    /// Create from initial node and edge collections.
    ///
    /// Fails on the first self-loop the policy rejects.
    pub fn from_parts<I, J, E>(nodes: I, edges: J, policy: LoopPolicy) -> GraphResult<Self, N>
    where
        I: IntoIterator<Item = N>,
        J: IntoIterator<Item = E>,
        E: Into<OrderedPair<N>>,
    {
        let mut graph = Self::with_policy(policy);
        for node in nodes {
            graph.insert(node);
        }
        graph.extend_edges(edges)?;
        Ok(graph)
    }

    /// The loop policy of this graph.
    pub fn policy(&self) -> LoopPolicy {
        self.policy
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.successors.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.successors.is_empty()
    }

    /// Iterate over all nodes.
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.successors.nodes()
    }

    /// Iterate over all edges.
    pub fn edges(&self) -> hash_set::Iter<'_, OrderedPair<N>> {
        self.edges.iter()
    }

    /// Add a node. Returns `true` if it was not already present.
    pub fn insert(&mut self, node: N) -> bool {
        let added = self.successors.add_node(node.clone());
        self.predecessors.add_node(node);
        if added {
            log::trace!("Inserted node (now {} nodes)", self.successors.len());
        }
        added
    }

    /// Add the edge `(from, to)`, inserting missing endpoints.
    ///
    /// Returns `Ok(true)` if the edge is new and `Ok(false)` if it was already
    /// present. Self-loops follow the graph's [`LoopPolicy`].
    pub fn insert_edge(&mut self, from: N, to: N) -> GraphResult<bool, N> {
        self.policy.check(&from, &to)?;

        let edge = OrderedPair::new(from.clone(), to.clone());
        if self.edges.contains(&edge) {
            return Ok(false);
        }

        // Both endpoints need entries in both indexes.
        self.insert(from.clone());
        self.insert(to.clone());
        self.successors.link(from.clone(), to.clone());
        self.predecessors.link(to.clone(), from.clone());
        self.edges.insert(edge);
        log::trace!("Inserted edge ({:?},{:?})", from, to);

        debug_assert_eq!(self.successors.link_count(), self.edges.len());
        Ok(true)
    }

    /// Add every edge in `edges`. Returns how many were new.
    ///
    /// Stops at the first self-loop the policy rejects; edges before it stay
    /// inserted.
    pub fn extend_edges<J, E>(&mut self, edges: J) -> GraphResult<usize, N>
    where
        J: IntoIterator<Item = E>,
        E: Into<OrderedPair<N>>,
    {
        let mut added = 0;
        for edge in edges {
            let OrderedPair { a, b } = edge.into();
            if self.insert_edge(a, b)? {
                added += 1;
            }
        }
        Ok(added)
    }

    /// Whether `node` is in the graph.
    pub fn contains(&self, node: &N) -> bool {
        self.successors.contains_node(node)
    }

    /// Whether `edge` is in the graph.
    pub fn contains_edge(&self, edge: &OrderedPair<N>) -> bool {
        self.edges.contains(edge)
    }

    /// Successors of `node`: every `m` with an edge `(node, m)`.
    pub fn neighbors(&self, node: &N) -> HashSet<N> {
        self.successors.adjacent(node)
    }

    /// Predecessors of `node`: every `m` with an edge `(m, node)`.
    pub fn predecessors(&self, node: &N) -> HashSet<N> {
        self.predecessors.adjacent(node)
    }

    /// Outgoing edges of `node`.
    pub fn edges_from(&self, node: &N) -> HashSet<OrderedPair<N>> {
        self.successors
            .get(node)
            .map(|targets| {
                targets
                    .iter()
                    .map(|to| OrderedPair::new(node.clone(), to.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Incoming edges of `node`.
    pub fn edges_to(&self, node: &N) -> HashSet<OrderedPair<N>> {
        self.predecessors
            .get(node)
            .map(|sources| {
                sources
                    .iter()
                    .map(|from| OrderedPair::new(from.clone(), node.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Number of outgoing edges of `node`.
    pub fn out_degree(&self, node: &N) -> usize {
        self.successors.count(node)
    }

    /// Number of incoming edges of `node`.
    pub fn in_degree(&self, node: &N) -> usize {
        self.predecessors.count(node)
    }

    /// Remove the edge `(from, to)`. Returns `true` if it existed.
    /// The endpoints stay in the graph.
    pub fn remove_edge(&mut self, from: &N, to: &N) -> bool {
        let edge = OrderedPair::new(from.clone(), to.clone());
        if !self.edges.remove(&edge) {
            return false;
        }
        self.successors.unlink(from, to);
        self.predecessors.unlink(to, from);
        log::debug!("Removed edge ({:?},{:?})", from, to);
        true
    }

    /// Remove a node and all edges into or out of it. Returns `true` if it
    /// existed.
    pub fn remove_node(&mut self, node: &N) -> bool {
        self.detach_node(node).is_some()
    }

    /// Remove a node, returning every edge that was removed with it.
    pub(crate) fn detach_node(&mut self, node: &N) -> Option<Vec<OrderedPair<N>>> {
        let targets = self.successors.remove_node(node)?;
        let sources = self.predecessors.remove_node(node).unwrap_or_default();

        let mut removed = Vec::with_capacity(targets.len() + sources.len());
        for to in targets {
            self.predecessors.unlink(&to, node);
            removed.push(OrderedPair::new(node.clone(), to));
        }
        for from in sources {
            self.successors.unlink(&from, node);
            // A self-loop was already collected from the outgoing side.
            if from != *node {
                removed.push(OrderedPair::new(from, node.clone()));
            }
        }
        for edge in &removed {
            self.edges.remove(edge);
        }
        log::debug!(
            "Removed node {:?} and {} incident edges",
            node,
            removed.len()
        );

        debug_assert_eq!(self.successors.link_count(), self.edges.len());
        debug_assert_eq!(self.predecessors.link_count(), self.edges.len());
        Some(removed)
    }

    /// Build a graph over another node type by mapping every node.
    ///
    /// Nodes that map to the same value merge, and so do their edges. An
    /// edge whose endpoints merge becomes a self-loop: it is kept under
    /// [`LoopPolicy::Allow`] and dropped under [`LoopPolicy::Forbid`].
    pub fn map_nodes<M, F>(&self, mut f: F) -> DirectedGraph<M>
    where
        M: Node,
        F: FnMut(&N) -> M,
    {
        let mut mapped =
            DirectedGraph::with_capacity(self.node_count(), self.edge_count(), self.policy);
        for node in self.nodes() {
            mapped.insert(f(node));
        }
        for edge in self.edges() {
            let (from, to) = edge.clone().map(|n| f(&n)).into_parts();
            if mapped.insert_edge(from, to).is_err() {
                log::debug!("Dropped collapsed edge {:?} while mapping nodes", edge);
            }
        }
        mapped
    }

    /// A graph with every edge reversed.
    pub fn reversed(&self) -> DirectedGraph<N> {
        DirectedGraph {
            edges: self.edges.iter().cloned().map(OrderedPair::reversed).collect(),
            successors: self.predecessors.clone(),
            predecessors: self.successors.clone(),
            policy: self.policy,
        }
    }

    /// Whether every edge of this graph is also an edge of `other`.
    pub fn is_edge_subgraph_of<G>(&self, other: &G) -> bool
    where
        G: GraphLike<Node = N, Edge = OrderedPair<N>>,
    {
        other.adjacency_scheme().covers(self.edges())
    }
}

impl<N: Node> Default for DirectedGraph<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Node> PartialEq for DirectedGraph<N> {
    /// Graphs are equal when they have the same nodes and edges.
    fn eq(&self, other: &Self) -> bool {
        self.edges == other.edges && self.successors == other.successors
    }
}

impl<N: Node> Eq for DirectedGraph<N> {}

impl<N: Node> GraphLike for DirectedGraph<N> {
    type Node = N;
    type Edge = OrderedPair<N>;

    fn contains_edge(&self, edge: &OrderedPair<N>) -> bool {
        DirectedGraph::contains_edge(self, edge)
    }
}

impl<N: Node + Serialize> Serialize for DirectedGraph<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("DirectedGraph", 3)?;
        state.serialize_field("policy", &self.policy)?;
        state.serialize_field("nodes", &self.nodes().collect::<Vec<_>>())?;
        state.serialize_field("edges", &self.edges().collect::<Vec<_>>())?;
        state.end()
    }
}
