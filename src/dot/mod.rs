//! Reading and writing graphs in the DOT language.
//!
//! Requires the `dot` feature.  Rendering goes through the `dot` crate and
//! parsing through `dot-parser`.
pub mod parser;
pub mod renderer;

pub use parser::parse_undirected;
pub use renderer::{DotLabel, LEFT_FILL, RIGHT_FILL, render_dot, to_dot_string};
