pub use crate::bipartite::{Bipartition, bipartition, component_bipartitions, is_bipartite};
pub use crate::coloring::{Color, ColorConflict, Coloring, two_color, two_color_component};
pub use crate::error::{BipartiteError, DotError};
pub use crate::graph::{Edge, Graph, GraphMut, NodeId};
pub use crate::label::Label;
pub use crate::pairs::SortedPair;
pub use crate::undirected_graph::UndirectedGraph;
pub use crate::validate::validate_candidate_bipartition;
