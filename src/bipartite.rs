//! Bipartiteness queries built on [`two_color`](crate::coloring::two_color).
//!
//! ```
//! use bipartite::prelude::*;
//!
//! let graph = UndirectedGraph::from_edges([(1, 2), (2, 3), (3, 4), (4, 1)]);
//! assert!(is_bipartite(&graph));
//!
//! let sides = bipartition(&graph).unwrap();
//! assert_eq!(sides.side_of(&1), sides.side_of(&3));
//! assert_ne!(sides.side_of(&1), sides.side_of(&2));
//!
//! let triangle = UndirectedGraph::from_edges([(1, 2), (2, 3), (3, 1)]);
//! assert!(!is_bipartite(&triangle));
//! assert!(bipartition(&triangle).is_err());
//! ```

use std::collections::HashSet;
use std::hash::Hash;

use derivative::Derivative;

use crate::coloring::{Color, two_color, two_color_component};
use crate::error::BipartiteError;
use crate::graph::Graph;
use crate::tracing_support::info_span;

/// The two sides of a bipartite graph, or of one of its components.
///
/// Which side is `left` carries no meaning beyond "colored
/// [`Color::Zero`]"; [`Self::swapped`] gives an equally valid answer.
#[derive(Derivative)]
#[derivative(
    Clone(bound = "N: Clone"),
    Debug(bound = "N: std::fmt::Debug"),
    Default(bound = ""),
    PartialEq(bound = "N: Eq + Hash"),
    Eq(bound = "N: Eq + Hash")
)]
pub struct Bipartition<N> {
    left: HashSet<N>,
    right: HashSet<N>,
}

impl<N: Eq + Hash> Bipartition<N> {
    /// Creates a bipartition from two disjoint sets.
    pub fn new(left: HashSet<N>, right: HashSet<N>) -> Self {
        debug_assert!(left.is_disjoint(&right), "sides of a bipartition overlap");
        Self { left, right }
    }

    /// Nodes colored [`Color::Zero`].
    pub fn left(&self) -> &HashSet<N> {
        &self.left
    }

    /// Nodes colored [`Color::One`].
    pub fn right(&self) -> &HashSet<N> {
        &self.right
    }

    pub fn into_sets(self) -> (HashSet<N>, HashSet<N>) {
        (self.left, self.right)
    }

    /// The side a node is on, or `None` if it is on neither.
    pub fn side_of(&self, node: &N) -> Option<Color> {
        if self.left.contains(node) {
            Some(Color::Zero)
        } else if self.right.contains(node) {
            Some(Color::One)
        } else {
            None
        }
    }

    pub fn contains(&self, node: &N) -> bool {
        self.side_of(node).is_some()
    }

    /// Total number of nodes on both sides.
    pub fn len(&self) -> usize {
        self.left.len() + self.right.len()
    }

    pub fn is_empty(&self) -> bool {
        self.left.is_empty() && self.right.is_empty()
    }

    /// The same bipartition with the sides exchanged.
    pub fn swapped(self) -> Self {
        Self {
            left: self.right,
            right: self.left,
        }
    }

    /// Compares two bipartitions as unordered pairs of sides.
    pub fn same_sides(&self, other: &Self) -> bool {
        (self.left == other.left && self.right == other.right)
            || (self.left == other.right && self.right == other.left)
    }

    /// Returns true if `candidate` contains all of one side and none of the
    /// other.  Nodes of `candidate` on neither side are ignored.
    pub fn aligns_with(&self, candidate: &HashSet<N>) -> bool {
        (self.left.is_subset(candidate) && self.right.is_disjoint(candidate))
            || (self.right.is_subset(candidate) && self.left.is_disjoint(candidate))
    }

    /// Returns true if the sides cover exactly the nodes of `graph` and every
    /// edge of `graph` joins the two sides.
    pub fn is_valid_for<G>(&self, graph: &G) -> bool
    where
        G: Graph<NodeId = N>,
    {
        self.len() == graph.num_nodes()
            && graph.node_ids().all(|node| self.contains(&node))
            && graph.edges().all(|edge| {
                let (a, b) = (self.side_of(edge.first()), self.side_of(edge.second()));
                a.is_some() && b.is_some() && a != b
            })
    }
}

/// Returns true if `graph` has a two-coloring.  The empty graph and graphs
/// without edges are bipartite.
pub fn is_bipartite<G: Graph>(graph: &G) -> bool {
    let _span = info_span!("is_bipartite").entered();
    two_color(graph).is_ok()
}

/// Splits `graph` into the two color classes of a two-coloring.
///
/// Isolated nodes are colored [`Color::Zero`] and so end up on the left.
/// Fails with [`BipartiteError::NotBipartite`] if no two-coloring exists; no
/// partial result is returned in that case.
pub fn bipartition<G: Graph>(
    graph: &G,
) -> Result<Bipartition<G::NodeId>, BipartiteError<G::NodeId>> {
    let _span = info_span!("bipartition").entered();
    Ok(two_color(graph)?.into_bipartition())
}

/// Computes a separate bipartition for each connected component.
///
/// Colors in different components are unrelated, so these are the only
/// sides that are meaningful in a disconnected graph.  Fails if any component
/// is not bipartite.
pub fn component_bipartitions<G: Graph>(
    graph: &G,
) -> Result<Vec<Bipartition<G::NodeId>>, BipartiteError<G::NodeId>> {
    let _span = info_span!("component_bipartitions").entered();
    let mut bipartitions = Vec::new();
    for component in graph.connected_components() {
        let Some(start) = component.iter().min() else {
            continue;
        };
        bipartitions.push(two_color_component(graph, start)?.into_bipartition());
    }
    Ok(bipartitions)
}
