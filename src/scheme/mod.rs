//! Schemes — graphs viewed as edge-membership predicates.
//!
//! Any type implementing [`GraphLike`] can be turned into a [`Scheme`], a
//! storage-independent answer to "does this edge exist". Directed and
//! undirected schemes are the same type distinguished by their edge type:
//! [`DirectedScheme`] fixes it to [`OrderedPair`], [`UndirectedScheme`] to
//! [`UnorderedPair`].

pub mod predicate;

pub use predicate::Scheme;

use crate::types::{Node, OrderedPair, SymmetricPair, UnorderedPair};

/// A scheme over directed edges.
pub type DirectedScheme<'g, N> = Scheme<'g, OrderedPair<N>>;

/// A scheme over undirected edges.
pub type UndirectedScheme<'g, N> = Scheme<'g, UnorderedPair<N>>;

/// Anything that can answer edge-membership questions.
pub trait GraphLike {
    /// Node type of the graph.
    type Node: Node;
    /// Edge type of the graph: a pair over [`Self::Node`].
    type Edge: SymmetricPair<Node = Self::Node>;

    /// Whether `edge` is a member of the graph.
    fn contains_edge(&self, edge: &Self::Edge) -> bool;

    /// A scheme whose membership test is exactly [`GraphLike::contains_edge`].
    ///
    /// The scheme borrows `self`: it reflects the graph as it is for as long
    /// as the scheme lives, and the graph cannot be mutated in the meantime.
    /// Use [`Scheme::live`] for a view that follows later mutation, or
    /// [`Scheme::snapshot`] for a detached copy.
    fn adjacency_scheme(&self) -> Scheme<'_, Self::Edge>
    where
        Self: Sized,
    {
        Scheme::new(move |edge: &Self::Edge| self.contains_edge(edge))
    }
}

/// Adapt any directed graph-like value into a [`DirectedScheme`].
pub fn directed_scheme<G, N>(graph: &G) -> DirectedScheme<'_, N>
where
    G: GraphLike<Node = N, Edge = OrderedPair<N>>,
    N: Node,
{
    graph.adjacency_scheme()
}

/// Adapt any undirected graph-like value into an [`UndirectedScheme`].
pub fn undirected_scheme<G, N>(graph: &G) -> UndirectedScheme<'_, N>
where
    G: GraphLike<Node = N, Edge = UnorderedPair<N>>,
    N: Node,
{
    graph.adjacency_scheme()
}
