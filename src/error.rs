use std::fmt::Debug;
use std::io;

use crate::coloring::ColorConflict;
use crate::graph::Edge;

/// Errors surfaced by the bipartiteness operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum BipartiteError<N: Debug> {
    /// The graph has no two-coloring.  Identifies the offending component by
    /// the node its search started from, and the edge that closed an odd
    /// cycle.
    #[error(
        "graph is not bipartite: edge {edge:?} closes an odd cycle in the component of {start:?}"
    )]
    NotBipartite { start: N, edge: Edge<N> },
    /// A candidate node set listed some nodes more than once.
    #[error(
        "candidate node set contains duplicates: {duplicates:?}; deduplicate it before validating"
    )]
    AmbiguousInput { duplicates: Vec<N> },
}

impl<N: Debug> From<ColorConflict<N>> for BipartiteError<N> {
    fn from(ColorConflict { start, edge }: ColorConflict<N>) -> Self {
        BipartiteError::NotBipartite { start, edge }
    }
}

/// Errors that can occur while reading or writing DOT files.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum DotError {
    /// The input is not valid DOT.
    #[error("Invalid DOT input: {0}")]
    Parse(String),
    /// A graph or node name is not a valid DOT identifier.
    #[error("Invalid DOT identifier: {0}")]
    InvalidId(String),
    /// IO error during rendering.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
