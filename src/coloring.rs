//! Constructive two-coloring of undirected graphs.
//!
//! [`two_color`] walks each connected component breadth-first, giving the
//! first node of the component [`Color::Zero`] and every newly discovered
//! neighbor the opposite color of the node it was discovered from.  The walk
//! stops at the first edge whose ends already share a color; such an edge
//! closes an odd cycle, so no two-coloring exists.
//!
//! Which component is visited first, and which node a component starts
//! from, is unspecified.  It affects only which side of each component is
//! labelled `Zero`, never whether the coloring succeeds.

use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

use derivative::Derivative;

use crate::bipartite::Bipartition;
use crate::graph::{Edge, Graph};
use crate::pairs::SortedPair;
use crate::tracing_support::{debug, info_span};

/// One of the two colors of a two-coloring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Zero,
    One,
}

impl Color {
    /// The opposite color.
    pub fn other(self) -> Self {
        match self {
            Color::Zero => Color::One,
            Color::One => Color::Zero,
        }
    }
}

impl From<Color> for u8 {
    fn from(color: Color) -> Self {
        match color {
            Color::Zero => 0,
            Color::One => 1,
        }
    }
}

/// An assignment of a [`Color`] to each node of a graph.
#[derive(Derivative)]
#[derivative(
    Clone(bound = "N: Clone"),
    Debug(bound = "N: std::fmt::Debug"),
    Default(bound = ""),
    PartialEq(bound = "N: Eq + Hash"),
    Eq(bound = "N: Eq + Hash")
)]
pub struct Coloring<N> {
    colors: HashMap<N, Color>,
}

impl<N: Eq + Hash> Coloring<N> {
    /// The color of a node, or `None` if the node is uncolored.
    pub fn get(&self, node: &N) -> Option<Color> {
        self.colors.get(node).copied()
    }

    pub fn contains(&self, node: &N) -> bool {
        self.colors.contains_key(node)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&N, Color)> + '_ {
        self.colors.iter().map(|(node, color)| (node, *color))
    }

    /// Nodes that were given `color`.
    pub fn nodes_with(&self, color: Color) -> impl Iterator<Item = &N> + '_ {
        self.colors
            .iter()
            .filter(move |(_, c)| **c == color)
            .map(|(node, _)| node)
    }

    /// Returns true if every node of `graph` is colored and no edge joins two
    /// nodes of the same color.
    pub fn is_proper_for<G>(&self, graph: &G) -> bool
    where
        G: Graph<NodeId = N>,
    {
        graph.node_ids().all(|node| self.contains(&node))
            && graph
                .edges()
                .all(|edge| self.get(edge.first()) != self.get(edge.second()))
    }

    /// Groups the nodes by color: `Zero` on the left, `One` on the right.
    pub fn into_bipartition(self) -> Bipartition<N> {
        let (left, right) = self
            .colors
            .into_iter()
            .partition::<Vec<_>, _>(|(_, color)| *color == Color::Zero);
        Bipartition::new(
            left.into_iter().map(|(node, _)| node).collect(),
            right.into_iter().map(|(node, _)| node).collect(),
        )
    }
}

/// Returned by the coloring functions when a graph has no two-coloring.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorConflict<N> {
    /// The node the search of the offending component started from.
    pub start: N,
    /// An edge whose ends were forced to the same color.
    pub edge: Edge<N>,
}

/// Two-colors every component of `graph`, or reports the first conflict
/// found.
pub fn two_color<G: Graph>(graph: &G) -> Result<Coloring<G::NodeId>, ColorConflict<G::NodeId>> {
    let _span = info_span!("two_color").entered();
    let mut coloring = Coloring {
        colors: HashMap::with_capacity(graph.num_nodes()),
    };
    for start in graph.node_ids() {
        if !coloring.contains(&start) {
            color_component(graph, start, &mut coloring)?;
        }
    }
    Ok(coloring)
}

/// Two-colors the component of `graph` containing `start`, giving `start`
/// the color `Zero`.  Nodes outside that component are left uncolored.
///
/// Panics if `start` is not a node of `graph`.
pub fn two_color_component<G: Graph>(
    graph: &G,
    start: &G::NodeId,
) -> Result<Coloring<G::NodeId>, ColorConflict<G::NodeId>> {
    let _span = info_span!("two_color_component").entered();
    graph.assert_valid_node_id(start);
    let mut coloring = Coloring::default();
    color_component(graph, start.clone(), &mut coloring)?;
    Ok(coloring)
}

fn color_component<G: Graph>(
    graph: &G,
    start: G::NodeId,
    coloring: &mut Coloring<G::NodeId>,
) -> Result<(), ColorConflict<G::NodeId>> {
    coloring.colors.insert(start.clone(), Color::Zero);
    let mut queue = VecDeque::from([(start.clone(), Color::Zero)]);
    while let Some((node, color)) = queue.pop_front() {
        for neighbor in graph.neighbors(&node) {
            match coloring.colors.get(&neighbor) {
                Some(&neighbor_color) if neighbor_color == color => {
                    debug!(?start, ?node, ?neighbor, "odd cycle found");
                    return Err(ColorConflict {
                        start,
                        edge: SortedPair::from((node.clone(), neighbor)),
                    });
                }
                Some(_) => {}
                None => {
                    coloring.colors.insert(neighbor.clone(), color.other());
                    queue.push_back((neighbor, color.other()));
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use quickcheck_macros::quickcheck;

    use super::*;
    use crate::graph_test_support::{ArbGraph, assert_proper_coloring, has_odd_cycle};
    use crate::{GraphMut, UndirectedGraph};

    #[test]
    fn test_color_other() {
        assert_eq!(Color::Zero.other(), Color::One);
        assert_eq!(Color::One.other(), Color::Zero);
        assert_eq!(u8::from(Color::One), 1);
    }

    #[test]
    fn test_even_cycle() {
        let graph = UndirectedGraph::from_edges([(1, 2), (2, 3), (3, 4), (4, 1)]);
        let coloring = two_color(&graph).unwrap();
        assert_proper_coloring(&graph, &coloring);
        assert_eq!(coloring.get(&1), coloring.get(&3));
        assert_eq!(coloring.get(&2), coloring.get(&4));
        assert_eq!(coloring.nodes_with(Color::Zero).count(), 2);
    }

    #[test]
    fn test_odd_cycle_conflict() {
        let graph = UndirectedGraph::from_edges([
            ("v1", "v2"),
            ("v2", "v3"),
            ("v3", "v4"),
            ("v4", "v5"),
            ("v5", "v1"),
        ]);
        let conflict = two_color(&graph).unwrap_err();
        assert!(graph.has_edge(conflict.edge.first(), conflict.edge.second()));
        assert!(graph.contains_node(&conflict.start));
    }

    #[test]
    fn test_self_loop_conflict() {
        let graph = UndirectedGraph::from_edges([(1, 2), (2, 2)]);
        let conflict = two_color(&graph).unwrap_err();
        assert_eq!(conflict.edge, SortedPair::from((2, 2)));
    }

    #[test]
    fn test_isolated_nodes_are_colored_zero() {
        let mut graph = UndirectedGraph::from_edges([(1, 2)]);
        graph.add_node(3);
        graph.add_node(4);
        let coloring = two_color(&graph).unwrap();
        assert_eq!(coloring.get(&3), Some(Color::Zero));
        assert_eq!(coloring.get(&4), Some(Color::Zero));
        assert_eq!(coloring.len(), 4);
    }

    #[test]
    fn test_empty_graph() {
        let coloring = two_color(&UndirectedGraph::<u32>::new()).unwrap();
        assert!(coloring.is_empty());
    }

    #[test]
    fn test_component_only_colors_its_component() {
        let graph = UndirectedGraph::from_edges([(1, 2), (2, 3), (4, 5)]);
        let coloring = two_color_component(&graph, &2).unwrap();
        assert_eq!(coloring.len(), 3);
        assert_eq!(coloring.get(&2), Some(Color::Zero));
        assert_eq!(coloring.get(&1), Some(Color::One));
        assert_eq!(coloring.get(&4), None);
        assert!(!coloring.is_proper_for(&graph));
    }

    #[test]
    fn test_component_conflict_is_local() {
        let graph = UndirectedGraph::from_edges([(1, 2), (2, 3), (3, 1), (4, 5)]);
        assert!(two_color_component(&graph, &1).is_err());
        assert!(two_color_component(&graph, &4).is_ok());
    }

    #[test]
    fn test_into_bipartition() {
        let graph = UndirectedGraph::from_edges([(1, 2), (2, 3)]);
        let bipartition = two_color_component(&graph, &1).unwrap().into_bipartition();
        assert_eq!(bipartition.left(), &HashSet::from([1, 3]));
        assert_eq!(bipartition.right(), &HashSet::from([2]));
    }

    #[quickcheck]
    fn prop_colors_iff_no_odd_cycle(ArbGraph { graph }: ArbGraph<UndirectedGraph<u8>>) -> bool {
        two_color(&graph).is_ok() != has_odd_cycle(&graph)
    }

    #[quickcheck]
    fn prop_colorings_are_proper(ArbGraph { graph }: ArbGraph<UndirectedGraph<u8>>) -> bool {
        match two_color(&graph) {
            Ok(coloring) => coloring.is_proper_for(&graph),
            Err(conflict) => {
                graph.has_edge(conflict.edge.first(), conflict.edge.second())
                    && graph.component_of(&conflict.start).contains(conflict.edge.first())
            }
        }
    }
}
