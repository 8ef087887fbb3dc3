//! Phase 3 tests: Schemes as edge-membership views over graphs.

use std::cell::RefCell;
use std::rc::Rc;

use pairgraph::graph::{DirectedGraph, Graph, WeightedDirectedGraph};
use pairgraph::scheme::{
    directed_scheme, undirected_scheme, DirectedScheme, GraphLike, Scheme, UndirectedScheme,
};
use pairgraph::types::{OrderedPair, UnorderedPair};

fn all_unordered(nodes: &[u32]) -> Vec<UnorderedPair<u32>> {
    let mut pairs = Vec::new();
    for (i, &a) in nodes.iter().enumerate() {
        for &b in &nodes[i..] {
            pairs.push(UnorderedPair::new(a, b));
        }
    }
    pairs
}

fn all_ordered(nodes: &[u32]) -> Vec<OrderedPair<u32>> {
    nodes
        .iter()
        .flat_map(|&a| nodes.iter().map(move |&b| OrderedPair::new(a, b)))
        .collect()
}

// ==================== Adjacency Scheme Tests ====================

#[test]
fn test_undirected_scheme_matches_graph() {
    let mut graph = Graph::new();
    graph.insert_edge(1, 2).unwrap();
    graph.insert_edge(2, 3).unwrap();

    let scheme = undirected_scheme(&graph);
    for edge in all_unordered(&[1, 2, 3, 4]) {
        assert_eq!(scheme.contains(&edge), graph.contains_edge(&edge), "{:?}", edge);
    }
    assert!(scheme.contains(&UnorderedPair::new(3, 2)));
}

#[test]
fn test_directed_scheme_matches_graph() {
    let mut graph = DirectedGraph::new();
    graph.insert_edge(1, 2).unwrap();
    graph.insert_edge(3, 1).unwrap();

    let scheme = directed_scheme(&graph);
    assert!(scheme.agrees_with(&graph, all_ordered(&[1, 2, 3])));
    assert!(scheme.contains(&OrderedPair::new(1, 2)));
    assert!(!scheme.contains(&OrderedPair::new(2, 1)));
}

#[test]
fn test_weighted_graph_scheme_ignores_weights() {
    let mut graph: WeightedDirectedGraph<u32, f64> = WeightedDirectedGraph::new();
    graph.insert_edge(1, 2, 10.0).unwrap();

    let scheme: DirectedScheme<'_, u32> = graph.adjacency_scheme();
    assert!(scheme.contains(&OrderedPair::new(1, 2)));
    assert!(!scheme.contains(&OrderedPair::new(2, 1)));
}

#[test]
fn test_schemes_compare_across_storage() {
    let mut stored: Graph<u32> = Graph::new();
    stored.insert_edge(0, 1).unwrap();
    stored.insert_edge(1, 2).unwrap();
    stored.insert_edge(2, 3).unwrap();

    // A path described by a rule instead of a stored edge set.
    let rule: UndirectedScheme<'_, u32> = Scheme::new(|edge: &UnorderedPair<u32>| {
        let (lo, hi) = edge.sorted();
        *hi == *lo + 1 && *hi <= 3
    });

    let universe = all_unordered(&[0, 1, 2, 3, 4]);
    assert!(rule.agrees_with(&stored, &universe));

    stored.insert_edge(0, 3).unwrap();
    assert!(!rule.agrees_with(&stored, &universe));
}

// ==================== Capture Semantics Tests ====================

#[test]
fn test_live_scheme_tracks_mutation() {
    let shared = Rc::new(RefCell::new(Graph::<u32>::new()));
    shared.borrow_mut().insert_edge(1, 2).unwrap();

    let scheme = Scheme::live(&shared);
    assert!(scheme.contains(&UnorderedPair::new(1, 2)));
    assert!(!scheme.contains(&UnorderedPair::new(2, 3)));

    shared.borrow_mut().insert_edge(2, 3).unwrap();
    assert!(scheme.contains(&UnorderedPair::new(3, 2)));

    shared.borrow_mut().remove_edge(&1, &2);
    assert!(!scheme.contains(&UnorderedPair::new(1, 2)));

    let universe = all_unordered(&[1, 2, 3]);
    assert!(scheme.agrees_with(&*shared.borrow(), &universe));
}

#[test]
fn test_live_scheme_does_not_keep_graph_alive() {
    let shared = Rc::new(RefCell::new(DirectedGraph::new()));
    shared.borrow_mut().insert_edge(1, 2).unwrap();

    let scheme = Scheme::live(&shared);
    assert_eq!(Rc::strong_count(&shared), 1);
    assert!(scheme.contains(&OrderedPair::new(1, 2)));

    drop(shared);
    assert!(!scheme.contains(&OrderedPair::new(1, 2)));
}

#[test]
fn test_snapshot_scheme_is_detached() {
    let mut graph = DirectedGraph::new();
    graph.insert_edge(1, 2).unwrap();

    let scheme: DirectedScheme<'static, u32> = Scheme::snapshot(graph.edges());
    graph.insert_edge(2, 3).unwrap();
    graph.remove_edge(&1, &2);

    assert!(scheme.contains(&OrderedPair::new(1, 2)));
    assert!(!scheme.contains(&OrderedPair::new(2, 3)));
}

// ==================== Combinator Tests ====================

#[test]
fn test_scheme_covers_and_subgraph() {
    let mut small = Graph::new();
    small.insert_edge(1, 2).unwrap();

    let mut large = Graph::new();
    large.insert_edge(2, 1).unwrap();
    large.insert_edge(2, 3).unwrap();

    assert!(large.adjacency_scheme().covers(small.edges()));
    assert!(small.is_edge_subgraph_of(&large));
    assert!(!large.is_edge_subgraph_of(&small));
}

#[test]
fn test_directed_subgraph_respects_direction() {
    let mut forward = DirectedGraph::new();
    forward.insert_edge(1, 2).unwrap();

    let backward = forward.reversed();
    assert!(!forward.is_edge_subgraph_of(&backward));
    assert!(forward.is_edge_subgraph_of(&forward.adjacency_scheme()));
}

#[test]
fn test_scheme_set_operations() {
    let mut left = Graph::new();
    left.insert_edge(1, 2).unwrap();
    left.insert_edge(2, 3).unwrap();

    let mut right = Graph::new();
    right.insert_edge(2, 3).unwrap();
    right.insert_edge(3, 4).unwrap();

    let union = left.adjacency_scheme().union(right.adjacency_scheme());
    let both = left.adjacency_scheme().intersection(right.adjacency_scheme());
    let outside = left.adjacency_scheme().complement();

    assert!(union.contains(&UnorderedPair::new(1, 2)));
    assert!(union.contains(&UnorderedPair::new(4, 3)));
    assert!(both.contains(&UnorderedPair::new(3, 2)));
    assert!(!both.contains(&UnorderedPair::new(1, 2)));
    assert!(outside.contains(&UnorderedPair::new(3, 4)));
    assert!(!outside.contains(&UnorderedPair::new(1, 2)));
}

#[test]
fn test_trivial_schemes() {
    let none: DirectedScheme<'_, u8> = Scheme::empty();
    let every: DirectedScheme<'_, u8> = Scheme::complete();
    assert!(!none.contains(&OrderedPair::new(0, 1)));
    assert!(every.contains(&OrderedPair::new(0, 1)));
    let universe = [OrderedPair::new(0u8, 1), OrderedPair::new(1, 0), OrderedPair::new(1, 1)];
    assert!(none.complement().agrees_with(&every, universe));
}
