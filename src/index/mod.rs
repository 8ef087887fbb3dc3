//! Index structures for fast lookup. Each index is independent and incrementally updateable.

pub mod adjacency_index;

pub use adjacency_index::AdjacencyIndex;
