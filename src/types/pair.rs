//! Edge representations: ordered pairs (directed) and unordered pairs (undirected).

use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::Serialize;

/// A two-element container whose elements share one node type.
///
/// Graph and scheme code is written against this trait so the same logic
/// serves ordered and unordered edges.
pub trait SymmetricPair: Clone + Eq + Hash {
    /// Element type of the pair.
    type Node: Eq + Hash + Clone;

    /// The same kind of pair over another element type.
    type Mapped<M>: SymmetricPair<Node = M>
    where
        M: Eq + Hash + Clone;

    /// Build a pair from its two elements.
    fn from_parts(a: Self::Node, b: Self::Node) -> Self;

    /// The first element as passed at construction.
    fn first(&self) -> &Self::Node;

    /// The second element as passed at construction.
    fn second(&self) -> &Self::Node;

    /// Decompose into the two elements.
    fn into_parts(self) -> (Self::Node, Self::Node);

    /// Transform both elements, keeping the kind of pair.
    fn map<M, F>(self, f: F) -> Self::Mapped<M>
    where
        M: Eq + Hash + Clone,
        F: FnMut(Self::Node) -> M;

    /// Whether `node` is one of the two elements.
    fn has_endpoint(&self, node: &Self::Node) -> bool {
        self.first() == node || self.second() == node
    }

    /// The element opposite `node`, or `None` if `node` is not an endpoint.
    /// For a self-pair this returns `node`'s twin.
    fn other(&self, node: &Self::Node) -> Option<&Self::Node> {
        if self.first() == node {
            Some(self.second())
        } else if self.second() == node {
            Some(self.first())
        } else {
            None
        }
    }

    /// Whether both elements are equal.
    fn is_self_pair(&self) -> bool {
        self.first() == self.second()
    }
}

/// A directed edge from `a` to `b`. Equality and hashing are order-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct OrderedPair<N> {
    /// Origin of the edge.
    pub a: N,
    /// Destination of the edge.
    pub b: N,
}

impl<N> OrderedPair<N> {
    /// Create a new ordered pair.
    pub fn new(a: N, b: N) -> Self {
        Self { a, b }
    }

    /// The same pair pointing the other way.
    pub fn reversed(self) -> Self {
        Self {
            a: self.b,
            b: self.a,
        }
    }
}

impl<N: Eq + Hash + Clone> SymmetricPair for OrderedPair<N> {
    type Node = N;
    type Mapped<M> = OrderedPair<M> where M: Eq + Hash + Clone;

    fn from_parts(a: N, b: N) -> Self {
        Self::new(a, b)
    }

    fn first(&self) -> &N {
        &self.a
    }

    fn second(&self) -> &N {
        &self.b
    }

    fn into_parts(self) -> (N, N) {
        (self.a, self.b)
    }

    fn map<M, F>(self, mut f: F) -> OrderedPair<M>
    where
        M: Eq + Hash + Clone,
        F: FnMut(N) -> M,
    {
        let a = f(self.a);
        let b = f(self.b);
        OrderedPair::new(a, b)
    }
}

impl<N> From<(N, N)> for OrderedPair<N> {
    fn from((a, b): (N, N)) -> Self {
        Self::new(a, b)
    }
}

impl<N: fmt::Display> fmt::Display for OrderedPair<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.a, self.b)
    }
}

/// An undirected edge `{a, b}`. Equality and hashing ignore element order.
///
/// The elements are kept as given; `first`/`second` report construction
/// order, which never influences equality, hashing or the textual form.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct UnorderedPair<N> {
    a: N,
    b: N,
}

impl<N> UnorderedPair<N> {
    /// Create a new unordered pair. Self-pairs are permitted.
    pub fn new(a: N, b: N) -> Self {
        Self { a, b }
    }
}

impl<N: Ord> UnorderedPair<N> {
    /// The elements in ascending order.
    pub fn sorted(&self) -> (&N, &N) {
        if self.a <= self.b {
            (&self.a, &self.b)
        } else {
            (&self.b, &self.a)
        }
    }
}

impl<N: Eq + Hash + Clone> SymmetricPair for UnorderedPair<N> {
    type Node = N;
    type Mapped<M> = UnorderedPair<M> where M: Eq + Hash + Clone;

    fn from_parts(a: N, b: N) -> Self {
        Self::new(a, b)
    }

    fn first(&self) -> &N {
        &self.a
    }

    fn second(&self) -> &N {
        &self.b
    }

    fn into_parts(self) -> (N, N) {
        (self.a, self.b)
    }

    fn map<M, F>(self, mut f: F) -> UnorderedPair<M>
    where
        M: Eq + Hash + Clone,
        F: FnMut(N) -> M,
    {
        let a = f(self.a);
        let b = f(self.b);
        UnorderedPair::new(a, b)
    }
}

impl<N: PartialEq> PartialEq for UnorderedPair<N> {
    fn eq(&self, other: &Self) -> bool {
        (self.a == other.a && self.b == other.b) || (self.a == other.b && self.b == other.a)
    }
}

impl<N: Eq> Eq for UnorderedPair<N> {}

impl<N: Hash> Hash for UnorderedPair<N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Element hashes are combined with a commutative operation so both
        // orderings feed the same value to `state`.
        let combined = element_hash(&self.a).wrapping_add(element_hash(&self.b));
        combined.hash(state);
    }
}

fn element_hash<N: Hash>(value: &N) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

impl<N> From<(N, N)> for UnorderedPair<N> {
    fn from((a, b): (N, N)) -> Self {
        Self::new(a, b)
    }
}

impl<N: Ord + fmt::Display> fmt::Display for UnorderedPair<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (lo, hi) = self.sorted();
        write!(f, "{{{},{}}}", lo, hi)
    }
}
