//! Helpers shared by the unit tests, the property tests and the integration
//! tests.
use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt::Debug;

use quickcheck::Arbitrary;

use crate::coloring::Coloring;
use crate::prelude::*;
use crate::tracing_support::info_span;

/// A small random undirected graph for property tests.
#[derive(Debug, Clone)]
pub struct ArbGraph<G> {
    pub graph: G,
}

impl<G> Arbitrary for ArbGraph<G>
where
    G: GraphMut + Clone + Debug + 'static,
    G::NodeId: Arbitrary,
{
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        // Kept small so that brute-force cross checks stay cheap.
        let num_nodes = usize::arbitrary(g) % 12;
        let num_edges = usize::arbitrary(g) % 16;
        let num_self_loops = usize::arbitrary(g) % 8 / 7;

        let mut graph = G::new();
        let nodes: Vec<_> = (0..num_nodes).map(|_| G::NodeId::arbitrary(g)).collect();
        graph.add_nodes(nodes.iter().cloned());

        if !nodes.is_empty() {
            for _ in 0..num_edges {
                let a = nodes[usize::arbitrary(g) % nodes.len()].clone();
                let b = nodes[usize::arbitrary(g) % nodes.len()].clone();
                if a != b {
                    graph.add_edge(a, b);
                }
            }
            for _ in 0..num_self_loops {
                let a = nodes[usize::arbitrary(g) % nodes.len()].clone();
                graph.add_edge(a.clone(), a);
            }
        }

        ArbGraph { graph }
    }
}

/// Returns true if the graph has a closed walk of odd length, found by a
/// search over (node, parity of path length) states.  A graph has an odd
/// closed walk iff it has an odd cycle, so this is an independent check of
/// bipartiteness.
pub fn has_odd_cycle<G: Graph>(graph: &G) -> bool {
    graph.node_ids().any(|start| {
        let mut seen: HashSet<(G::NodeId, bool)> = HashSet::new();
        let mut queue = VecDeque::from([(start.clone(), false)]);
        while let Some((node, odd)) = queue.pop_front() {
            if !seen.insert((node.clone(), odd)) {
                continue;
            }
            for neighbor in graph.neighbors(&node) {
                if neighbor == start && !odd {
                    return true;
                }
                queue.push_back((neighbor, !odd));
            }
        }
        false
    })
}

/// Panics unless `coloring` colors every node of `graph` and gives the two
/// ends of every edge different colors.
pub fn assert_proper_coloring<G: Graph>(graph: &G, coloring: &Coloring<G::NodeId>) {
    for node in graph.node_ids() {
        assert!(coloring.get(&node).is_some(), "{node:?} is uncolored");
    }
    for edge in graph.edges() {
        assert_ne!(
            coloring.get(edge.first()),
            coloring.get(edge.second()),
            "edge {edge:?} joins nodes of one color"
        );
    }
}

/// Sorts each set and then the list of sets, so that collections of
/// components or partition sides can be compared with `assert_eq!`.
pub fn sorted_sets<N: Ord + Clone>(sets: impl IntoIterator<Item = HashSet<N>>) -> Vec<Vec<N>> {
    let mut sorted: Vec<Vec<N>> = sets
        .into_iter()
        .map(|set| {
            let mut items: Vec<_> = set.into_iter().collect();
            items.sort();
            items
        })
        .collect();
    sorted.sort();
    sorted
}

/// Checks the internal consistency of a graph.
pub fn check_graph_consistency<G: Graph>(graph: &G) {
    let _span = info_span!("check_graph_consistency").entered();

    let mut degrees: HashMap<G::NodeId, usize> = HashMap::new();
    for node in graph.node_ids() {
        assert_eq!(graph.check_valid_node_id(&node), Ok(()));
        assert_eq!(graph.degree(&node), graph.neighbors(&node).count());

        for neighbor in graph.neighbors(&node) {
            // Adjacency must be symmetric, and neighbors must be nodes.
            assert!(graph.contains_node(&neighbor), "dangling neighbor {neighbor:?}");
            assert!(graph.has_edge(&neighbor, &node));
            assert!(graph.has_edge(&node, &neighbor));
        }
        degrees.insert(node, 0);
    }

    let mut seen_edges = HashSet::new();
    for edge in graph.edges() {
        assert!(seen_edges.insert(edge.clone()), "edge {edge:?} reported twice");
        *degrees.entry(edge.first().clone()).or_default() += 1;
        if !edge.is_self_loop() {
            *degrees.entry(edge.second().clone()).or_default() += 1;
        }
    }

    for (node, degree) in &degrees {
        assert_eq!(graph.degree(node), *degree, "degree of {node:?}");
    }

    let node_ids: HashSet<_> = graph.node_ids().collect();
    assert_eq!(node_ids.len(), graph.node_ids().count());
    assert_eq!(node_ids.len(), graph.num_nodes());
    assert_eq!(seen_edges.len(), graph.num_edges());
    assert_eq!(graph.is_empty(), graph.num_nodes() == 0);

    // If there are edges, there must be nodes
    assert!(graph.num_nodes() > 0 || graph.num_edges() == 0);
}
