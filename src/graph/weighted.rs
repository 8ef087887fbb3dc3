//! Weighted directed graph — a directed graph with one weight per edge.

use std::collections::hash_map;
use std::collections::hash_set;
use std::collections::{HashMap, HashSet};

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::scheme::GraphLike;
use crate::types::{GraphResult, LoopPolicy, Node, OrderedPair, Weight};

use super::DirectedGraph;

/// A directed graph whose every edge carries a weight of type `W`.
///
/// The weight map and the edge set always have the same keys: edges can
/// only be created together with a weight, and removing an edge removes
/// its weight in the same call.
#[derive(Debug, Clone)]
pub struct WeightedDirectedGraph<N, W> {
    /// Topology.
    graph: DirectedGraph<N>,
    /// Weight of every edge in `graph`.
    weights: HashMap<OrderedPair<N>, W>,
}

impl<N: Node, W: Weight> WeightedDirectedGraph<N, W> {
    /// Create a new empty graph with the default loop policy.
    pub fn new() -> Self {
        Self {
            graph: DirectedGraph::new(),
            weights: HashMap::new(),
        }
    }

    /// Create a new empty graph with the given loop policy.
    pub fn with_policy(policy: LoopPolicy) -> Self {
        Self {
            graph: DirectedGraph::with_policy(policy),
            weights: HashMap::new(),
        }
    }

    /// Create from initial nodes and `(from, to, weight)` triples.
    ///
    /// Later triples for the same edge overwrite earlier weights. Fails on the
    /// first self-loop the policy rejects.
    pub fn from_parts<I, J>(nodes: I, edges: J, policy: LoopPolicy) -> GraphResult<Self, N>
    where
        I: IntoIterator<Item = N>,
        J: IntoIterator<Item = (N, N, W)>,
    {
        let mut graph = Self::with_policy(policy);
        for node in nodes {
            graph.insert(node);
        }
        for (from, to, weight) in edges {
            graph.insert_edge(from, to, weight)?;
        }
        Ok(graph)
    }

    /// The underlying unweighted graph.
    pub fn as_directed(&self) -> &DirectedGraph<N> {
        &self.graph
    }

    /// Drop the weights, keeping the topology.
    pub fn into_directed(self) -> DirectedGraph<N> {
        self.graph
    }

    /// The loop policy of this graph.
    pub fn policy(&self) -> LoopPolicy {
        self.graph.policy()
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    /// Iterate over all nodes.
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.graph.nodes()
    }

    /// Iterate over all edges.
    pub fn edges(&self) -> hash_set::Iter<'_, OrderedPair<N>> {
        self.graph.edges()
    }

    /// Iterate over all edges with their weights.
    pub fn weights(&self) -> hash_map::Iter<'_, OrderedPair<N>, W> {
        self.weights.iter()
    }

    /// Add a node. Returns `true` if it was not already present.
    pub fn insert(&mut self, node: N) -> bool {
        self.graph.insert(node)
    }

    /// Add the edge `(from, to)` with `weight`, inserting missing endpoints.
    ///
    /// If the edge already exists its weight is overwritten (last write wins)
    /// and the previous weight is returned. Self-loops follow the graph's
    /// [`LoopPolicy`]; a rejected edge leaves the graph unchanged.
    pub fn insert_edge(&mut self, from: N, to: N, weight: W) -> GraphResult<Option<W>, N> {
        self.graph.insert_edge(from.clone(), to.clone())?;
        let previous = self.weights.insert(OrderedPair::new(from, to), weight);
        if let Some(old) = previous {
            log::debug!("Overwrote edge weight {:?} with {:?}", old, weight);
        }

        self.debug_check_weights();
        Ok(previous)
    }

    /// Weight of `edge`, or `None` if the edge is absent.
    pub fn weight(&self, edge: &OrderedPair<N>) -> Option<W> {
        self.weights.get(edge).copied()
    }

    /// Whether `node` is in the graph.
    pub fn contains(&self, node: &N) -> bool {
        self.graph.contains(node)
    }

    /// Whether `edge` is in the graph.
    pub fn contains_edge(&self, edge: &OrderedPair<N>) -> bool {
        self.graph.contains_edge(edge)
    }

    /// Successors of `node`.
    pub fn neighbors(&self, node: &N) -> HashSet<N> {
        self.graph.neighbors(node)
    }

    /// Predecessors of `node`.
    pub fn predecessors(&self, node: &N) -> HashSet<N> {
        self.graph.predecessors(node)
    }

    /// Outgoing edges of `node`.
    pub fn edges_from(&self, node: &N) -> HashSet<OrderedPair<N>> {
        self.graph.edges_from(node)
    }

    /// Incoming edges of `node`.
    pub fn edges_to(&self, node: &N) -> HashSet<OrderedPair<N>> {
        self.graph.edges_to(node)
    }

    /// Outgoing edges of `node` paired with their weights.
    pub fn weighted_edges_from(&self, node: &N) -> Vec<(OrderedPair<N>, W)> {
        self.graph
            .edges_from(node)
            .into_iter()
            .filter_map(|edge| {
                let weight = self.weight(&edge)?;
                Some((edge, weight))
            })
            .collect()
    }

    /// Sum of all edge weights, or `None` for a graph without edges.
    pub fn total_weight(&self) -> Option<W> {
        self.weights.values().copied().reduce(|acc, w| acc + w)
    }

    /// Remove the edge `(from, to)`, returning its weight if it existed.
    /// The endpoints stay in the graph.
    pub fn remove_edge(&mut self, from: &N, to: &N) -> Option<W> {
        if !self.graph.remove_edge(from, to) {
            return None;
        }
        let weight = self
            .weights
            .remove(&OrderedPair::new(from.clone(), to.clone()));

        self.debug_check_weights();
        weight
    }

    /// Remove a node, all edges into or out of it, and their weights.
    /// Returns `true` if the node existed.
    pub fn remove_node(&mut self, node: &N) -> bool {
        let Some(removed) = self.graph.detach_node(node) else {
            return false;
        };
        for edge in &removed {
            self.weights.remove(edge);
        }

        self.debug_check_weights();
        true
    }

    /// Whether every edge of this graph is also an edge of `other`.
    /// Weights are not compared.
    pub fn is_edge_subgraph_of<G>(&self, other: &G) -> bool
    where
        G: GraphLike<Node = N, Edge = OrderedPair<N>>,
    {
        self.graph.is_edge_subgraph_of(other)
    }

    /// Edge set and weight keys must match. A mismatch is a bug in this
    /// module, never a caller error.
    fn debug_check_weights(&self) {
        debug_assert_eq!(self.weights.len(), self.graph.edge_count());
        debug_assert!(self.graph.edges().all(|e| self.weights.contains_key(e)));
    }
}

impl<N: Node, W: Weight> Default for WeightedDirectedGraph<N, W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Node, W: Weight> GraphLike for WeightedDirectedGraph<N, W> {
    type Node = N;
    type Edge = OrderedPair<N>;

    fn contains_edge(&self, edge: &OrderedPair<N>) -> bool {
        self.graph.contains_edge(edge)
    }
}

/// One serialized weighted edge.
#[derive(Serialize)]
struct WeightedEdge<'a, N, W> {
    from: &'a N,
    to: &'a N,
    weight: &'a W,
}

impl<N, W> Serialize for WeightedDirectedGraph<N, W>
where
    N: Node + Serialize,
    W: Weight + Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let edges: Vec<WeightedEdge<'_, N, W>> = self
            .weights
            .iter()
            .map(|(edge, weight)| WeightedEdge {
                from: &edge.a,
                to: &edge.b,
                weight,
            })
            .collect();

        let mut state = serializer.serialize_struct("WeightedDirectedGraph", 3)?;
        state.serialize_field("policy", &self.policy())?;
        state.serialize_field("nodes", &self.nodes().collect::<Vec<_>>())?;
        state.serialize_field("edges", &edges)?;
        state.end()
    }
}
