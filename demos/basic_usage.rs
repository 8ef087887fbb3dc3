//! Basic build -> query -> compare flow.

use std::cell::RefCell;
use std::rc::Rc;

use pairgraph::*;

fn main() -> Result<(), GraphError<&'static str>> {
    // An undirected friendship graph
    let mut friends = Graph::new();
    friends.insert_edge("ada", "grace")?;
    friends.insert_edge("grace", "linus")?;
    friends.insert("ken");

    println!(
        "Friendship graph: {} nodes, {} edges",
        friends.node_count(),
        friends.edge_count()
    );
    for edge in friends.edges() {
        println!("  {}", edge);
    }
    println!("Neighbors of grace: {:?}", friends.neighbors(&"grace"));

    // Self-loops are rejected unless the graph allows them
    if let Err(err) = friends.insert_edge("ken", "ken") {
        println!("Rejected: {}", err);
    }

    // A weighted road map
    let mut roads = WeightedDirectedGraph::new();
    roads.insert_edge("depot", "north", 4.0)?;
    roads.insert_edge("depot", "south", 2.5)?;
    roads.insert_edge("depot", "north", 3.0)?;
    println!(
        "depot -> north costs {:?}",
        roads.weight(&OrderedPair::new("depot", "north"))
    );
    println!("Total road length: {:?}", roads.total_weight());

    // Compare a stored graph against a rule through schemes
    let known = friends.adjacency_scheme();
    let rule: UndirectedScheme<'_, &str> =
        Scheme::new(|edge: &UnorderedPair<&str>| edge.has_endpoint(&"grace"));
    let candidates = [
        UnorderedPair::new("ada", "grace"),
        UnorderedPair::new("grace", "linus"),
        UnorderedPair::new("ada", "linus"),
    ];
    println!(
        "Every friendship goes through grace: {}",
        rule.agrees_with(&known, candidates)
    );

    // A live view follows later changes
    let shared = Rc::new(RefCell::new(DirectedGraph::new()));
    let view = Scheme::live(&shared);
    shared.borrow_mut().insert_edge("ada", "ken")?;
    println!(
        "Live view sees (ada,ken): {}",
        view.contains(&OrderedPair::new("ada", "ken"))
    );

    Ok(())
}
