//! Undirected graph — nodes plus a set of unordered-pair edges.

use std::collections::hash_set;
use std::collections::HashSet;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::index::AdjacencyIndex;
use crate::scheme::GraphLike;
use crate::types::{
    GraphResult, LoopPolicy, Node, SymmetricPair, UnorderedPair, DEFAULT_LOOP_POLICY,
};

/// An undirected graph over nodes of type `N`.
///
/// Every endpoint of an edge is a node of the graph, and no edge is stored
/// twice. Adjacency is symmetric: `b` is a neighbor of `a` exactly when `a`
/// is a neighbor of `b`.
#[derive(Debug, Clone)]
pub struct Graph<N> {
    /// All edges.
    edges: HashSet<UnorderedPair<N>>,
    /// Symmetric adjacency; its key set is the node set.
    adjacency: AdjacencyIndex<N>,
    /// Whether self-loops are accepted.
    policy: LoopPolicy,
}

impl<N: Node> Graph<N> {
    /// Create a new empty graph with the default loop policy.
    pub fn new() -> Self {
        Self::with_policy(DEFAULT_LOOP_POLICY)
    }

    /// Create a new empty graph with the given loop policy.
    pub fn with_policy(policy: LoopPolicy) -> Self {
        Self {
            edges: HashSet::new(),
            adjacency: AdjacencyIndex::new(),
            policy,
        }
    }

    /// Create an empty graph with room for `nodes` nodes and `edges` edges.
    pub fn with_capacity(nodes: usize, edges: usize, policy: LoopPolicy) -> Self {
        Self {
            edges: HashSet::with_capacity(edges),
            adjacency: AdjacencyIndex::with_capacity(nodes),
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
        E: Into<UnorderedPair<N>>,
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
        self.adjacency.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Iterate over all nodes.
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.adjacency.nodes()
    }

    /// Iterate over all edges.
    pub fn edges(&self) -> hash_set::Iter<'_, UnorderedPair<N>> {
        self.edges.iter()
    }

    /// Add a node. Returns `true` if it was not already present.
    pub fn insert(&mut self, node: N) -> bool {
        let added = self.adjacency.add_node(node);
        if added {
            log::trace!("Inserted node (now {} nodes)", self.adjacency.len());
        }
        added
    }

    /// Add the edge `{a, b}`, inserting missing endpoints.
    ///
    /// Returns `Ok(true)` if the edge is new and `Ok(false)` if it was already
    /// present. A self-loop is rejected with `InvalidEdge` under
    /// [`LoopPolicy::Forbid`]; under [`LoopPolicy::Allow`] it is stored once
    /// and `a` becomes its own neighbor.
    pub fn insert_edge(&mut self, a: N, b: N) -> GraphResult<bool, N> {
        self.policy.check(&a, &b)?;

        let edge = UnorderedPair::new(a.clone(), b.clone());
        if self.edges.contains(&edge) {
            return Ok(false);
        }

        self.adjacency.link(a.clone(), b.clone());
        self.adjacency.link(b.clone(), a.clone());
        self.edges.insert(edge);
        log::trace!("Inserted edge {{{:?},{:?}}}", a, b);

        debug_assert!(self.adjacency.is_linked(&a, &b) && self.adjacency.is_linked(&b, &a));
        Ok(true)
    }

    /// Add every edge in `edges`. Returns how many were new.
    ///
    /// Stops at the first self-loop the policy rejects; edges before it stay
    /// inserted.
    pub fn extend_edges<J, E>(&mut self, edges: J) -> GraphResult<usize, N>
    where
        J: IntoIterator<Item = E>,
        E: Into<UnorderedPair<N>>,
    {
        let mut added = 0;
        for edge in edges {
            let (a, b) = edge.into().into_parts();
            if self.insert_edge(a, b)? {
                added += 1;
            }
        }
        Ok(added)
    }

    /// Whether `node` is in the graph.
    pub fn contains(&self, node: &N) -> bool {
        self.adjacency.contains_node(node)
    }

    /// Whether `edge` is in the graph.
    pub fn contains_edge(&self, edge: &UnorderedPair<N>) -> bool {
        self.edges.contains(edge)
    }

    /// All nodes sharing an edge with `node`. Empty if `node` is absent.
    pub fn neighbors(&self, node: &N) -> HashSet<N> {
        self.adjacency.adjacent(node)
    }

    /// All edges incident to `node`. Empty if `node` is absent.
    pub fn edges_from(&self, node: &N) -> HashSet<UnorderedPair<N>> {
        self.adjacency
            .get(node)
            .map(|adjacent| {
                adjacent
                    .iter()
                    .map(|other| UnorderedPair::new(node.clone(), other.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Number of edges incident to `node`. A self-loop counts once.
    pub fn degree(&self, node: &N) -> usize {
        self.adjacency.count(node)
    }

    /// Remove the edge `{a, b}`. Returns `true` if it existed.
    /// The endpoints stay in the graph.
    pub fn remove_edge(&mut self, a: &N, b: &N) -> bool {
        let edge = UnorderedPair::new(a.clone(), b.clone());
        if !self.edges.remove(&edge) {
            return false;
        }
        self.adjacency.unlink(a, b);
        self.adjacency.unlink(b, a);
        log::debug!("Removed edge {{{:?},{:?}}}", a, b);
        true
    }

    /// Remove a node and all its incident edges. Returns `true` if it existed.
    pub fn remove_node(&mut self, node: &N) -> bool {
        let Some(adjacent) = self.adjacency.remove_node(node) else {
            return false;
        };
        for other in &adjacent {
            self.adjacency.unlink(other, node);
            self.edges
                .remove(&UnorderedPair::new(node.clone(), other.clone()));
        }
        log::debug!(
            "Removed node {:?} and {} incident edges",
            node,
            adjacent.len()
        );
        true
    }

    /// Build a graph over another node type by mapping every node.
    ///
    /// Nodes that map to the same value merge, and so do their edges. An
    /// edge whose endpoints merge becomes a self-loop: it is kept under
    /// [`LoopPolicy::Allow`] and dropped under [`LoopPolicy::Forbid`].
    pub fn map_nodes<M, F>(&self, mut f: F) -> Graph<M>
    where
        M: Node,
        F: FnMut(&N) -> M,
    {
        let mut mapped = Graph::with_capacity(self.node_count(), self.edge_count(), self.policy);
        for node in self.nodes() {
            mapped.insert(f(node));
        }
        for edge in self.edges() {
            let (a, b) = edge.clone().map(|n| f(&n)).into_parts();
            if mapped.insert_edge(a, b).is_err() {
                log::debug!("Dropped collapsed edge {:?} while mapping nodes", edge);
            }
        }
        mapped
    }

    /// Whether every edge of this graph is also an edge of `other`.
    pub fn is_edge_subgraph_of<G>(&self, other: &G) -> bool
    where
        G: GraphLike<Node = N, Edge = UnorderedPair<N>>,
    {
        other.adjacency_scheme().covers(self.edges())
    }
}

impl<N: Node> Default for Graph<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Node> PartialEq for Graph<N> {
    /// Graphs are equal when they have the same nodes and edges.
    fn eq(&self, other: &Self) -> bool {
        self.edges == other.edges && self.adjacency == other.adjacency
    }
}

impl<N: Node> Eq for Graph<N> {}

impl<N: Node> GraphLike for Graph<N> {
    type Node = N;
    type Edge = UnorderedPair<N>;

    fn contains_edge(&self, edge: &UnorderedPair<N>) -> bool {
        Graph::contains_edge(self, edge)
    }
}

impl<N: Node + Serialize> Serialize for Graph<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Graph", 3)?;
        state.serialize_field("policy", &self.policy)?;
        state.serialize_field("nodes", &self.nodes().collect::<Vec<_>>())?;
        state.serialize_field("edges", &self.edges().collect::<Vec<_>>())?;
        state.end()
    }
}
