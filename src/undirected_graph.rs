use std::collections::{HashMap, HashSet};

use derivative::Derivative;

use crate::graph::{Graph, GraphMut, NodeId};

/// An undirected graph stored as adjacency lists.
///
/// Nodes are identified by value.  Each node maps to the set of its
/// neighbors, so parallel edges collapse into one and neighbor lookup is
/// O(1).  A self-loop is stored as a node being its own neighbor.
///
/// Invariant: adjacency is symmetric, and every neighbor is itself a key of
/// the adjacency map.
#[derive(Derivative)]
#[derivative(
    Clone(bound = "N: Clone"),
    Debug(bound = "N: std::fmt::Debug"),
    Default(bound = ""),
    PartialEq(bound = "N: NodeId"),
    Eq(bound = "N: NodeId")
)]
pub struct UndirectedGraph<N> {
    adjacency: HashMap<N, HashSet<N>>,
    num_edges: usize,
}

impl<N: NodeId> UndirectedGraph<N> {
    /// Creates an empty graph with room for at least `num_nodes` nodes.
    pub fn with_capacity(num_nodes: usize) -> Self {
        Self {
            adjacency: HashMap::with_capacity(num_nodes),
            num_edges: 0,
        }
    }

    /// Creates a graph containing the given edges and their endpoints.
    pub fn from_edges(edges: impl IntoIterator<Item = (N, N)>) -> Self {
        edges.into_iter().collect()
    }

    /// Gets the neighbor set of a node, if the node is in the graph.
    pub fn neighbor_set(&self, id: &N) -> Option<&HashSet<N>> {
        self.adjacency.get(id)
    }
}

impl<N: NodeId> Graph for UndirectedGraph<N> {
    type NodeId = N;

    fn node_ids(&self) -> impl Iterator<Item = N> + '_ {
        self.adjacency.keys().cloned()
    }

    fn num_nodes(&self) -> usize {
        self.adjacency.len()
    }

    fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    fn contains_node(&self, id: &N) -> bool {
        self.adjacency.contains_key(id)
    }

    fn neighbors(&self, id: &N) -> impl Iterator<Item = N> + '_ {
        self.adjacency.get(id).into_iter().flatten().cloned()
    }

    fn degree(&self, id: &N) -> usize {
        self.adjacency.get(id).map_or(0, HashSet::len)
    }

    fn num_edges(&self) -> usize {
        self.num_edges
    }

    fn has_edge(&self, a: &N, b: &N) -> bool {
        self.adjacency
            .get(a)
            .is_some_and(|neighbors| neighbors.contains(b))
    }
}

impl<N: NodeId> GraphMut for UndirectedGraph<N> {
    fn new() -> Self {
        Self::default()
    }

    fn add_node(&mut self, id: N) -> bool {
        if self.adjacency.contains_key(&id) {
            return false;
        }
        self.adjacency.insert(id, HashSet::new());
        true
    }

    fn remove_node(&mut self, id: &N) -> bool {
        let Some(neighbors) = self.adjacency.remove(id) else {
            return false;
        };
        self.num_edges -= neighbors.len();
        for neighbor in neighbors.iter().filter(|neighbor| *neighbor != id) {
            if let Some(back) = self.adjacency.get_mut(neighbor) {
                back.remove(id);
            }
        }
        true
    }

    fn add_edge(&mut self, a: N, b: N) -> bool {
        if self.has_edge(&a, &b) {
            return false;
        }
        self.adjacency
            .entry(a.clone())
            .or_default()
            .insert(b.clone());
        self.adjacency.entry(b).or_default().insert(a);
        self.num_edges += 1;
        true
    }

    fn remove_edge(&mut self, a: &N, b: &N) -> bool {
        let removed = self
            .adjacency
            .get_mut(a)
            .is_some_and(|neighbors| neighbors.remove(b));
        if !removed {
            return false;
        }
        if let Some(neighbors) = self.adjacency.get_mut(b) {
            neighbors.remove(a);
        }
        self.num_edges -= 1;
        true
    }

    fn clear(&mut self) {
        self.adjacency.clear();
        self.num_edges = 0;
    }
}

impl<N: NodeId> FromIterator<(N, N)> for UndirectedGraph<N> {
    fn from_iter<I: IntoIterator<Item = (N, N)>>(iter: I) -> Self {
        let mut graph = Self::new();
        graph.extend(iter);
        graph
    }
}

impl<N: NodeId> Extend<(N, N)> for UndirectedGraph<N> {
    fn extend<I: IntoIterator<Item = (N, N)>>(&mut self, iter: I) {
        self.add_edges(iter);
    }
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;
    use crate::graph_test_support::{ArbGraph, check_graph_consistency};

    #[test]
    fn test_new_graph_is_empty() {
        let graph = UndirectedGraph::<u32>::new();
        assert!(graph.is_empty());
        assert_eq!(graph.num_nodes(), 0);
        assert_eq!(graph.num_edges(), 0);
        assert_eq!(graph.edges().count(), 0);
    }

    #[test]
    fn test_add_edge_adds_endpoints() {
        let mut graph = UndirectedGraph::new();
        assert!(graph.add_edge("a", "b"));
        assert!(graph.contains_node(&"a"));
        assert!(graph.contains_node(&"b"));
        assert!(graph.has_edge(&"a", &"b"));
        assert!(graph.has_edge(&"b", &"a"));
        check_graph_consistency(&graph);
    }

    #[test]
    fn test_parallel_edges_collapse() {
        let mut graph = UndirectedGraph::new();
        assert!(graph.add_edge(1, 2));
        assert!(!graph.add_edge(2, 1));
        assert!(!graph.add_edge(1, 2));
        assert_eq!(graph.num_edges(), 1);
        assert_eq!(graph.degree(&1), 1);
    }

    #[test]
    fn test_self_loop() {
        let mut graph = UndirectedGraph::new();
        assert!(graph.add_edge(7, 7));
        assert_eq!(graph.num_nodes(), 1);
        assert_eq!(graph.num_edges(), 1);
        assert_eq!(graph.neighbors(&7).collect::<Vec<_>>(), vec![7]);
        assert!(graph.remove_node(&7));
        assert_eq!(graph.num_edges(), 0);
        check_graph_consistency(&graph);
    }

    #[test]
    fn test_remove_node_removes_edges() {
        let mut graph = UndirectedGraph::from_edges([(1, 2), (1, 3), (2, 3), (3, 4)]);
        assert!(graph.remove_node(&3));
        assert!(!graph.remove_node(&3));
        assert_eq!(graph.num_nodes(), 3);
        assert_eq!(graph.num_edges(), 1);
        assert!(!graph.has_edge(&4, &3));
        assert_eq!(graph.degree(&4), 0);
        check_graph_consistency(&graph);
    }

    #[test]
    fn test_remove_edge() {
        let mut graph = UndirectedGraph::from_edges([(1, 2), (2, 3)]);
        assert!(graph.remove_edge(&2, &1));
        assert!(!graph.remove_edge(&1, &2));
        assert_eq!(graph.num_edges(), 1);
        assert_eq!(graph.num_nodes(), 3);
        check_graph_consistency(&graph);
    }

    #[test]
    fn test_unknown_node_has_no_neighbors() {
        let graph = UndirectedGraph::from_edges([(1, 2)]);
        assert_eq!(graph.neighbors(&9).count(), 0);
        assert_eq!(graph.degree(&9), 0);
        assert!(graph.check_valid_node_id(&9).is_err());
        assert!(graph.neighbor_set(&9).is_none());
    }

    #[test]
    #[should_panic(expected = "Invalid NodeId")]
    #[cfg(not(feature = "unchecked"))]
    fn test_component_of_unknown_node_panics() {
        let graph = UndirectedGraph::from_edges([(1, 2)]);
        graph.component_of(&9);
    }

    #[test]
    fn test_equality_ignores_insertion_order() {
        let a = UndirectedGraph::from_edges([(1, 2), (2, 3)]);
        let b = UndirectedGraph::from_edges([(3, 2), (2, 1)]);
        assert_eq!(a, b);
        assert_ne!(a, UndirectedGraph::from_edges([(1, 2)]));
    }

    #[test]
    fn test_connected_components() {
        let mut graph = UndirectedGraph::from_edges([(1, 2), (2, 3), (4, 5)]);
        graph.add_node(6);
        let mut components: Vec<Vec<_>> = graph
            .connected_components()
            .into_iter()
            .map(|component| {
                let mut nodes: Vec<_> = component.into_iter().collect();
                nodes.sort();
                nodes
            })
            .collect();
        components.sort();
        assert_eq!(components, vec![vec![1, 2, 3], vec![4, 5], vec![6]]);
        assert!(!graph.is_connected());
        assert_eq!(graph.component_of(&5), HashSet::from([4, 5]));
    }

    #[test]
    fn test_subgraphs() {
        let graph = UndirectedGraph::from_edges([(1, 2), (2, 3), (3, 1), (4, 5)]);
        let sub = graph.subgraph(&HashSet::from([1, 2, 9]));
        assert_eq!(sub, UndirectedGraph::from_edges([(1, 2)]));

        let mut parts = graph.component_subgraphs();
        parts.sort_by_key(|part| part.num_nodes());
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0], UndirectedGraph::from_edges([(4, 5)]));
        assert_eq!(parts[1].num_edges(), 3);
    }

    #[test]
    fn test_forest_and_tree() {
        // The forest analysed by the report demo: three paths.
        let forest = UndirectedGraph::from_edges([(1, 2), (2, 3), (4, 5), (6, 7), (7, 8), (8, 9)]);
        assert!(forest.is_forest());
        assert!(!forest.is_tree());

        let path = UndirectedGraph::from_edges([(1, 2), (2, 3)]);
        assert!(path.is_tree());

        let triangle = UndirectedGraph::from_edges([(1, 2), (2, 3), (3, 1)]);
        assert!(!triangle.is_forest());

        let looped = UndirectedGraph::from_edges([(1, 1)]);
        assert!(!looped.is_forest());

        let empty = UndirectedGraph::<u32>::new();
        assert!(empty.is_forest());
        assert!(!empty.is_tree());
    }

    #[test]
    fn test_clear() {
        let mut graph = UndirectedGraph::from_edges([(1, 2), (2, 3)]);
        graph.clear();
        assert!(graph.is_empty());
        assert_eq!(graph.num_edges(), 0);
    }

    #[quickcheck]
    fn prop_graph_is_consistent(ArbGraph { graph }: ArbGraph<UndirectedGraph<u8>>) -> bool {
        check_graph_consistency(&graph);
        true
    }

    #[quickcheck]
    fn prop_num_edges_is_correct(ArbGraph { graph }: ArbGraph<UndirectedGraph<u8>>) -> bool {
        graph.edges().count() == graph.num_edges()
    }

    #[quickcheck]
    fn prop_components_partition_nodes(ArbGraph { graph }: ArbGraph<UndirectedGraph<u8>>) -> bool {
        let components = graph.connected_components();
        let total: usize = components.iter().map(HashSet::len).sum();
        let union: HashSet<_> = components.iter().flatten().cloned().collect();
        total == graph.num_nodes() && union.len() == graph.num_nodes()
    }

    #[quickcheck]
    fn prop_remove_node_removes_edges(
        ArbGraph { mut graph }: ArbGraph<UndirectedGraph<u8>>,
    ) -> bool {
        let Some(victim) = graph.node_ids().next() else {
            return true;
        };
        graph.remove_node(&victim);
        check_graph_consistency(&graph);
        graph.edges().all(|edge| !edge.contains(&victim))
    }
}
