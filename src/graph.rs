//! `Graph` and `GraphMut` are the core traits for working with graphs in this
//! library. `Graph` provides read-only access to an undirected graph, while
//! `GraphMut` extends `Graph` with methods for building and modifying it.
//!
//! This module provides:
//!
//! - [`NodeId`] trait: bound satisfied by every type usable as a node
//! - [`Graph`] trait: nodes, edges, neighbor lookup, traversal, connected
//!   components and acyclicity checks
//! - [`GraphMut`] trait: adding and removing nodes and edges, induced
//!   subgraphs
//!
//! # Features
//!
//! - Component enumeration uses `pathfinding` when the `pathfinding` feature
//!   is enabled, and a breadth-first search otherwise
//! - Node id checks can be compiled out with the `unchecked` feature
use std::{collections::HashSet, fmt::Debug, hash::Hash};

use crate::{
    pairs::SortedPair,
    search::{BfsIterator, DfsIterator},
};

/// A trait representing a node identifier in a graph.
///
/// Nodes are identified by value, so this is implemented for every type with
/// the required bounds: integers, strings, [`Label`](crate::Label), etc.
pub trait NodeId: Eq + Hash + Clone + Debug + Ord {}

impl<T> NodeId for T where T: Eq + Hash + Clone + Debug + Ord {}

/// An undirected edge between two nodes.
pub type Edge<N> = SortedPair<N>;

/// A trait representing an undirected graph.  Methods that return iterators
/// over nodes or edges return them in an unspecified order unless otherwise
/// noted.
///
/// Implementations must provide [`Self::node_ids`] and [`Self::neighbors`];
/// the remaining methods have default implementations written in terms of
/// those two, which implementations may override with more efficient ones.
pub trait Graph: Sized {
    type NodeId: NodeId;

    // Nodes

    /// Gets an iterator over all node ids in the graph.
    fn node_ids(&self) -> impl Iterator<Item = Self::NodeId> + '_;

    /// Gets the number of nodes in the graph.
    fn num_nodes(&self) -> usize {
        self.node_ids().count()
    }

    /// Returns true if the graph has no nodes.
    fn is_empty(&self) -> bool {
        self.node_ids().next().is_none()
    }

    /// Returns true if the node is in the graph.
    fn contains_node(&self, id: &Self::NodeId) -> bool {
        self.node_ids().any(|nid| &nid == id)
    }

    /// Checks if a node id is valid in the graph, returning a reason if it is
    /// not.
    fn check_valid_node_id(&self, id: &Self::NodeId) -> Result<(), &'static str> {
        if self.contains_node(id) {
            Ok(())
        } else {
            Err("NodeId not found in graph")
        }
    }

    /// Panics if the given node id is not valid in the graph, according to
    /// [`Self::check_valid_node_id`].  Does nothing when the `unchecked`
    /// feature is enabled.
    fn assert_valid_node_id(&self, id: &Self::NodeId) {
        #[cfg(not(feature = "unchecked"))]
        if let Err(reason) = self.check_valid_node_id(id) {
            panic!("Invalid NodeId: {:?}: {}", id, reason);
        }
        #[cfg(feature = "unchecked")]
        let _ = id;
    }

    /// Gets an iterator over the neighbors of a node.  A node with a
    /// self-loop is its own neighbor.  Yields nothing for a node that is not
    /// in the graph.
    fn neighbors(&self, id: &Self::NodeId) -> impl Iterator<Item = Self::NodeId> + '_;

    /// Gets the number of neighbors of a node.
    fn degree(&self, id: &Self::NodeId) -> usize {
        self.neighbors(id).count()
    }

    // Edges

    /// Gets an iterator over all edges in the graph.  Each edge is reported
    /// once.
    fn edges(&self) -> impl Iterator<Item = Edge<Self::NodeId>> + '_ {
        self.node_ids().flat_map(move |nid| {
            let later: Vec<_> = self.neighbors(&nid).filter(|other| nid <= *other).collect();
            later
                .into_iter()
                .map(move |other| SortedPair::from_sorted(nid.clone(), other))
        })
    }

    /// Gets the number of edges in the graph.
    fn num_edges(&self) -> usize {
        self.edges().count()
    }

    /// Checks if there is an edge between two nodes.
    fn has_edge(&self, a: &Self::NodeId, b: &Self::NodeId) -> bool {
        self.neighbors(a).any(|nid| &nid == b)
    }

    // Searches

    /// Performs a breadth-first search starting from the given node.
    fn bfs(&self, start: Self::NodeId) -> BfsIterator<'_, Self> {
        self.bfs_multi(vec![start])
    }

    /// Performs a breadth-first search starting from the given nodes.
    fn bfs_multi(&self, start: Vec<Self::NodeId>) -> BfsIterator<'_, Self> {
        BfsIterator::new(self, start)
    }

    /// Performs a depth-first search starting from the given node.
    fn dfs(&self, start: Self::NodeId) -> DfsIterator<'_, Self> {
        self.dfs_multi(vec![start])
    }

    /// Performs a depth-first search starting from the given nodes.
    fn dfs_multi(&self, start: Vec<Self::NodeId>) -> DfsIterator<'_, Self> {
        DfsIterator::new(self, start)
    }

    // Components

    /// Partitions the nodes of the graph into connected components.  Isolated
    /// nodes form singleton components.
    fn connected_components(&self) -> Vec<HashSet<Self::NodeId>> {
        let nodes: Vec<_> = self.node_ids().collect();

        #[cfg(feature = "pathfinding")]
        {
            pathfinding::prelude::connected_components(&nodes, |nid| {
                self.neighbors(nid).collect::<Vec<_>>()
            })
        }

        #[cfg(not(feature = "pathfinding"))]
        {
            let mut seen = HashSet::with_capacity(nodes.len());
            let mut components = Vec::new();
            for nid in nodes {
                if seen.contains(&nid) {
                    continue;
                }
                let component: HashSet<_> = self.bfs(nid).collect();
                seen.extend(component.iter().cloned());
                components.push(component);
            }
            components
        }
    }

    /// Gets the set of nodes in the connected component containing `id`.
    fn component_of(&self, id: &Self::NodeId) -> HashSet<Self::NodeId> {
        self.assert_valid_node_id(id);
        self.bfs(id.clone()).collect()
    }

    /// Returns true if every node is reachable from every other node.  The
    /// empty graph is not connected.
    fn is_connected(&self) -> bool {
        match self.node_ids().next() {
            Some(start) => self.bfs(start).count() == self.num_nodes(),
            None => false,
        }
    }

    /// Returns true if the graph contains no cycles.  A self-loop counts as a
    /// cycle.  The empty graph is a forest.
    fn is_forest(&self) -> bool {
        let mut num_edges = 0;
        for edge in self.edges() {
            if edge.is_self_loop() {
                return false;
            }
            num_edges += 1;
        }
        num_edges + self.connected_components().len() == self.num_nodes()
    }

    /// Returns true if the graph is a single connected component with no
    /// cycles.  The empty graph is not a tree.
    fn is_tree(&self) -> bool {
        self.is_connected() && self.is_forest()
    }
}

/// A trait for graphs that support mutation operations.
///
/// This trait extends [`Graph`] with methods for adding and removing nodes and edges.
pub trait GraphMut: Graph {
    /// Creates a new, empty graph.
    fn new() -> Self;

    /// Adds a node to the graph.  Returns false if it was already present.
    fn add_node(&mut self, id: Self::NodeId) -> bool;

    /// Removes a node from the graph along with any edges touching it.
    /// Returns false if it was not present.
    fn remove_node(&mut self, id: &Self::NodeId) -> bool;

    /// Adds an edge between two nodes, adding either node if it is not
    /// already present.  Returns false if the edge was already present;
    /// parallel edges are not supported.
    fn add_edge(&mut self, a: Self::NodeId, b: Self::NodeId) -> bool;

    /// Removes the edge between two nodes.  Returns false if there was none.
    fn remove_edge(&mut self, a: &Self::NodeId, b: &Self::NodeId) -> bool;

    /// Removes all nodes and edges from the graph.
    fn clear(&mut self) {
        for nid in self.node_ids().collect::<Vec<_>>() {
            self.remove_node(&nid);
        }
    }

    /// Adds every node produced by an iterator.
    fn add_nodes(&mut self, ids: impl IntoIterator<Item = Self::NodeId>) {
        for id in ids {
            self.add_node(id);
        }
    }

    /// Adds every edge produced by an iterator.
    fn add_edges(&mut self, edges: impl IntoIterator<Item = (Self::NodeId, Self::NodeId)>) {
        for (a, b) in edges {
            self.add_edge(a, b);
        }
    }

    /// Creates the subgraph induced by `nodes`: those nodes that are present
    /// in this graph, and every edge between two of them.
    fn subgraph(&self, nodes: &HashSet<Self::NodeId>) -> Self {
        let mut sub = Self::new();
        sub.add_nodes(nodes.iter().filter(|nid| self.contains_node(nid)).cloned());
        for edge in self.edges() {
            let (a, b): (Self::NodeId, Self::NodeId) = edge.into();
            if nodes.contains(&a) && nodes.contains(&b) {
                sub.add_edge(a, b);
            }
        }
        sub
    }

    /// Creates one induced subgraph per connected component.
    fn component_subgraphs(&self) -> Vec<Self> {
        self.connected_components()
            .iter()
            .map(|component| self.subgraph(component))
            .collect()
    }
}
