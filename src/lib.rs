//! pairgraph — in-memory graphs unified under edge-membership schemes.
//!
//! Provides undirected, directed and weighted directed graphs over any
//! hashable node type. Edges are [`UnorderedPair`]s or [`OrderedPair`]s,
//! and every graph can be viewed as a [`Scheme`]: a predicate answering
//! "does this edge exist" independently of how the graph is stored.
//!
//! All structures are single-threaded value types. Cloning a graph deep
//! copies it.

pub mod graph;
pub mod index;
pub mod scheme;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{DirectedGraph, Graph, WeightedDirectedGraph};
pub use index::AdjacencyIndex;
pub use scheme::{
    directed_scheme, undirected_scheme, DirectedScheme, GraphLike, Scheme, UndirectedScheme,
};
pub use types::{
    GraphError, GraphResult, LoopPolicy, Node, OrderedPair, SymmetricPair, UnorderedPair, Weight,
    DEFAULT_LOOP_POLICY,
};
