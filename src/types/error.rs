//! Error types for the pairgraph library.

use thiserror::Error;

/// All errors that can occur when mutating a graph.
///
/// Queries never fail: looking up an absent node or edge yields an empty
/// set or `None`. The only recoverable failure is an edge rejected by the
/// graph's [`LoopPolicy`](super::LoopPolicy).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError<N> {
    /// Self-loop rejected because the graph forbids them.
    #[error("Self-loop not allowed on node {0:?}")]
    InvalidEdge(N),
}

/// Convenience result type for graph mutations.
pub type GraphResult<T, N> = Result<T, GraphError<N>>;
