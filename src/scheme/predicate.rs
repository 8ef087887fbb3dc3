//! The scheme value: a boxed edge-membership predicate.

use std::borrow::Borrow;
use std::cell::RefCell;
use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;

use crate::types::{Node, SymmetricPair};

use super::GraphLike;

/// A representation-independent view of a graph as a predicate over edges.
///
/// A scheme does not enumerate nodes or edges and may describe an infinite
/// graph. It exists to compare and combine graphs regardless of how they
/// are stored.
pub struct Scheme<'g, E> {
    predicate: Box<dyn Fn(&E) -> bool + 'g>,
}

impl<'g, E: SymmetricPair> Scheme<'g, E> {
    /// Create a scheme from an explicit membership predicate.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&E) -> bool + 'g,
    {
        Self {
            predicate: Box::new(predicate),
        }
    }

    /// A scheme that contains no edge.
    pub fn empty() -> Self {
        Self::new(|_| false)
    }

    /// A scheme that contains every edge.
    pub fn complete() -> Self {
        Self::new(|_| true)
    }

    /// A detached scheme over a copy of `edges`.
    ///
    /// Later changes to whatever produced `edges` are not observed.
    pub fn snapshot<I>(edges: I) -> Self
    where
        I: IntoIterator,
        I::Item: Borrow<E>,
        E: 'g,
    {
        let set: HashSet<E> = edges.into_iter().map(|e| e.borrow().clone()).collect();
        log::trace!("Captured scheme snapshot of {} edges", set.len());
        Self::new(move |edge| set.contains(edge))
    }

    /// A live view over a shared graph.
    ///
    /// The scheme keeps only a weak back-reference: it never keeps the graph
    /// alive, every query reads the graph's current state, and once the graph
    /// is dropped every query answers `false`. A query made while the graph
    /// is mutably borrowed also answers `false`.
    pub fn live<G>(graph: &Rc<RefCell<G>>) -> Self
    where
        G: GraphLike<Edge = E> + 'g,
    {
        let weak = Rc::downgrade(graph);
        Self::new(move |edge| {
            let Some(graph) = weak.upgrade() else {
                return false;
            };
            let found = match graph.try_borrow() {
                Ok(graph) => graph.contains_edge(edge),
                Err(_) => false,
            };
            found
        })
    }

    /// Whether `edge` is a member of this scheme.
    pub fn contains(&self, edge: &E) -> bool {
        (self.predicate)(edge)
    }

    /// Whether every edge in `edges` is a member of this scheme.
    pub fn covers<I>(&self, edges: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<E>,
    {
        edges.into_iter().all(|e| self.contains(e.borrow()))
    }

    /// Whether this scheme and `other` give the same answer for every edge
    /// in `universe`.
    pub fn agrees_with<G, I>(&self, other: &G, universe: I) -> bool
    where
        G: GraphLike<Edge = E>,
        I: IntoIterator,
        I::Item: Borrow<E>,
    {
        universe.into_iter().all(|e| {
            let e = e.borrow();
            self.contains(e) == other.contains_edge(e)
        })
    }

    /// Edges contained in either scheme.
    pub fn union(self, other: Scheme<'g, E>) -> Self
    where
        E: 'g,
    {
        Self::new(move |edge| self.contains(edge) || other.contains(edge))
    }

    /// Edges contained in both schemes.
    pub fn intersection(self, other: Scheme<'g, E>) -> Self
    where
        E: 'g,
    {
        Self::new(move |edge| self.contains(edge) && other.contains(edge))
    }

    /// Edges not contained in this scheme.
    pub fn complement(self) -> Self
    where
        E: 'g,
    {
        Self::new(move |edge| !self.contains(edge))
    }
}

impl<'g, E> GraphLike for Scheme<'g, E>
where
    E: SymmetricPair,
    E::Node: Node,
{
    type Node = E::Node;
    type Edge = E;

    fn contains_edge(&self, edge: &E) -> bool {
        self.contains(edge)
    }
}

impl<E> fmt::Debug for Scheme<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scheme").finish_non_exhaustive()
    }
}
