//! In-memory graph containers — the core data structures.

pub mod directed;
pub mod undirected;
pub mod weighted;

pub use directed::DirectedGraph;
pub use undirected::Graph;
pub use weighted::WeightedDirectedGraph;
