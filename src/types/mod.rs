//! All data types for the pairgraph library.

pub mod error;
pub mod pair;

use std::fmt::Debug;
use std::hash::Hash;
use std::ops::Add;

pub use error::{GraphError, GraphResult};
pub use pair::{OrderedPair, SymmetricPair, UnorderedPair};

/// Whether a graph accepts edges whose two endpoints are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize)]
pub enum LoopPolicy {
    /// Reject self-loops with [`GraphError::InvalidEdge`].
    #[default]
    Forbid,
    /// Store self-loops like any other edge.
    Allow,
}

impl LoopPolicy {
    /// Return a human-readable name for this policy.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Forbid => "forbid",
            Self::Allow => "allow",
        }
    }

    /// Check an edge's endpoints against this policy.
    pub(crate) fn check<N: Node>(&self, a: &N, b: &N) -> GraphResult<(), N> {
        if *self == Self::Forbid && a == b {
            log::warn!("Rejected self-loop on node {:?}", a);
            return Err(GraphError::InvalidEdge(a.clone()));
        }
        Ok(())
    }
}

impl std::fmt::Display for LoopPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Loop policy used by `new()` constructors.
pub const DEFAULT_LOOP_POLICY: LoopPolicy = LoopPolicy::Forbid;

/// Values usable as graph nodes. Identity is value equality.
pub trait Node: Eq + Hash + Clone + Debug {}

impl<T> Node for T where T: Eq + Hash + Clone + Debug {}

/// Numeric values that can label a weighted edge.
///
/// The graph only stores weights; addition and comparison are what callers
/// need to build path costs on top of it.
pub trait Weight: Copy + PartialOrd + Add<Output = Self> + Debug {}

impl<T> Weight for T where T: Copy + PartialOrd + Add<Output = T> + Debug {}
