//! Bipartiteness testing for undirected graphs.
//!
//! The core is a breadth-first two-coloring ([`coloring::two_color`]), on
//! top of which this crate answers whether a graph is bipartite
//! ([`is_bipartite`]), extracts its two sides ([`bipartition`]), and checks
//! whether a caller-supplied node set is one side of a valid bipartition
//! ([`validate_candidate_bipartition`]).
//!
//! Graphs are anything implementing [`Graph`]; [`UndirectedGraph`] is the
//! provided implementation.
//!
//! ```
//! use bipartite::prelude::*;
//!
//! let movies = UndirectedGraph::from_edges([
//!     ("U1", "F1"),
//!     ("U1", "F2"),
//!     ("U2", "F1"),
//!     ("U2", "F3"),
//!     ("U3", "F2"),
//!     ("U3", "F4"),
//! ]);
//! assert!(is_bipartite(&movies));
//! assert_eq!(validate_candidate_bipartition(&movies, ["U1", "U2", "U3"]), Ok(true));
//! ```
pub mod bipartite;
pub mod coloring;
#[cfg(feature = "dot")]
pub mod dot;
pub mod error;
pub mod graph;
pub mod label;
pub mod pairs;
pub mod prelude;
pub mod search;
pub mod tracing_support;
pub mod undirected_graph;
pub mod validate;

#[doc(hidden)]
pub mod graph_test_support;

mod util;

pub use bipartite::{Bipartition, bipartition, component_bipartitions, is_bipartite};
pub use error::{BipartiteError, DotError};
pub use graph::{Graph, GraphMut};
pub use label::Label;
pub use undirected_graph::UndirectedGraph;
pub use validate::validate_candidate_bipartition;
