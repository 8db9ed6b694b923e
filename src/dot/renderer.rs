use std::collections::HashMap;
use std::fmt::Display;
use std::io;

use ::dot::LabelText;

use crate::bipartite::Bipartition;
use crate::coloring::Color;
use crate::error::DotError;
use crate::graph::{Edge, Graph};
use crate::label::Label;
use crate::tracing_support::{debug, info_span};

/// Fill color of nodes on the left side of a bipartition.
pub const LEFT_FILL: &str = "#dda2a2";
/// Fill color of nodes on the right side of a bipartition.
pub const RIGHT_FILL: &str = "#bc81ca";

/// Node types that can be written as the `label` of a DOT node.
///
/// Integers are written as HTML labels (`<12>`) and names as quoted strings,
/// so [`parse_undirected`](super::parse_undirected) reads back the same
/// [`Label`] that was written.
pub trait DotLabel {
    fn dot_label(&self) -> LabelText<'static>;
}

fn int_label(value: impl Display) -> LabelText<'static> {
    LabelText::HtmlStr(value.to_string().into())
}

fn name_label(name: &str) -> LabelText<'static> {
    // A backslash before the closing quote would escape it, and a leading
    // `<` would read back as HTML.
    let mut escaped = String::with_capacity(name.len());
    for c in name.chars() {
        match c {
            '\\' => escaped.push_str("\\u{5c}"),
            '<' => escaped.push_str("\\u{3c}"),
            c => escaped.push(c),
        }
    }
    LabelText::EscStr(escaped.into())
}

macro_rules! int_dot_labels {
    ($($ty:ty),*) => {
        $(
            impl DotLabel for $ty {
                fn dot_label(&self) -> LabelText<'static> {
                    int_label(self)
                }
            }
        )*
    };
}

int_dot_labels!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl DotLabel for str {
    fn dot_label(&self) -> LabelText<'static> {
        name_label(self)
    }
}

impl DotLabel for String {
    fn dot_label(&self) -> LabelText<'static> {
        name_label(self)
    }
}

impl DotLabel for char {
    fn dot_label(&self) -> LabelText<'static> {
        name_label(self.encode_utf8(&mut [0; 4]))
    }
}

impl DotLabel for Label {
    fn dot_label(&self) -> LabelText<'static> {
        match self {
            Label::Int(value) => int_label(value),
            Label::Name(name) => name_label(name),
        }
    }
}

impl<T: DotLabel + ?Sized> DotLabel for &T {
    fn dot_label(&self) -> LabelText<'static> {
        (**self).dot_label()
    }
}

fn fill_color(color: Color) -> &'static str {
    match color {
        Color::Zero => LEFT_FILL,
        Color::One => RIGHT_FILL,
    }
}

struct GraphWrapper<'a, G: Graph> {
    graph: &'a G,
    partition: Option<&'a Bipartition<G::NodeId>>,
    node_names: HashMap<G::NodeId, String>,
    graph_name: String,
}

impl<'a, G: Graph> GraphWrapper<'a, G> {
    fn new(
        graph: &'a G,
        partition: Option<&'a Bipartition<G::NodeId>>,
    ) -> Result<Self, DotError> {
        let graph_name = "G".to_string();
        ::dot::Id::new(graph_name.as_str())
            .map_err(|()| DotError::InvalidId(graph_name.clone()))?;

        let mut node_names = HashMap::new();
        for (index, node_id) in Self::sorted_nodes(graph).into_iter().enumerate() {
            let name = format!("n{index}");
            ::dot::Id::new(name.as_str()).map_err(|()| DotError::InvalidId(name.clone()))?;
            node_names.insert(node_id, name);
        }

        Ok(Self {
            graph,
            partition,
            node_names,
            graph_name,
        })
    }

    fn sorted_nodes(graph: &G) -> Vec<G::NodeId> {
        let mut nodes: Vec<_> = graph.node_ids().collect();
        nodes.sort();
        nodes
    }

    fn fill(&self, n: &G::NodeId) -> Option<&'static str> {
        self.partition
            .and_then(|sides| sides.side_of(n))
            .map(fill_color)
    }
}

impl<'a, G> ::dot::Labeller<'a, G::NodeId, Edge<G::NodeId>> for GraphWrapper<'a, G>
where
    G: Graph,
    G::NodeId: DotLabel,
{
    fn graph_id(&'a self) -> ::dot::Id<'a> {
        ::dot::Id::new(self.graph_name.as_str()).expect("Graph name was pre-validated")
    }

    fn node_id(&'a self, n: &G::NodeId) -> ::dot::Id<'a> {
        let name = self.node_names.get(n).expect("Node ID should exist in map");
        ::dot::Id::new(name.as_str()).expect("Node name was pre-validated")
    }

    fn node_label(&'a self, n: &G::NodeId) -> LabelText<'a> {
        n.dot_label()
    }

    fn node_style(&'a self, n: &G::NodeId) -> ::dot::Style {
        match self.fill(n) {
            Some(_) => ::dot::Style::Filled,
            None => ::dot::Style::None,
        }
    }

    fn node_color(&'a self, n: &G::NodeId) -> Option<LabelText<'a>> {
        self.fill(n).map(|fill| LabelText::LabelStr(fill.into()))
    }

    fn edge_label(&'a self, _e: &Edge<G::NodeId>) -> LabelText<'a> {
        LabelText::LabelStr("".into())
    }

    fn kind(&self) -> ::dot::Kind {
        ::dot::Kind::Graph
    }
}

impl<'a, G> ::dot::GraphWalk<'a, G::NodeId, Edge<G::NodeId>> for GraphWrapper<'a, G>
where
    G: Graph,
{
    fn nodes(&'a self) -> ::dot::Nodes<'a, G::NodeId> {
        Self::sorted_nodes(self.graph).into()
    }

    fn edges(&'a self) -> ::dot::Edges<'a, Edge<G::NodeId>> {
        let mut edges: Vec<_> = self.graph.edges().collect();
        edges.sort();
        edges.into()
    }

    fn source(&'a self, edge: &Edge<G::NodeId>) -> G::NodeId {
        edge.first().clone()
    }

    fn target(&'a self, edge: &Edge<G::NodeId>) -> G::NodeId {
        edge.second().clone()
    }
}

/// Writes `graph` as an undirected DOT graph named `G`.
///
/// Nodes are named `n0`, `n1`, ... in sorted order and carry their value as
/// a `label`, so equal graphs render identically.  When `partition` is
/// given, each node on one of its sides is filled with [`LEFT_FILL`] or
/// [`RIGHT_FILL`].
///
/// ```
/// use bipartite::dot::{parse_undirected, to_dot_string};
/// use bipartite::prelude::*;
///
/// let graph = UndirectedGraph::from_edges([(Label::from(1), Label::from("1"))]);
/// let dot = to_dot_string(&graph, None).unwrap();
/// assert_eq!(parse_undirected(&dot).unwrap(), graph);
/// ```
pub fn render_dot<G>(
    graph: &G,
    partition: Option<&Bipartition<G::NodeId>>,
    output: &mut impl io::Write,
) -> Result<(), DotError>
where
    G: Graph,
    G::NodeId: DotLabel,
{
    let _span = info_span!("render_dot").entered();
    let wrapper = GraphWrapper::new(graph, partition)?;
    debug!(nodes = wrapper.node_names.len(), "rendering DOT graph");
    ::dot::render(&wrapper, output).map_err(DotError::Io)
}

/// Renders `graph` to a string with [`render_dot`].
pub fn to_dot_string<G>(
    graph: &G,
    partition: Option<&Bipartition<G::NodeId>>,
) -> Result<String, DotError>
where
    G: Graph,
    G::NodeId: DotLabel,
{
    let mut buffer = Vec::new();
    render_dot(graph, partition, &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bipartite::bipartition;
    use crate::dot::parse_undirected;
    use crate::{GraphMut, UndirectedGraph};

    fn round_trip(graph: &UndirectedGraph<Label>) -> UndirectedGraph<Label> {
        parse_undirected(&to_dot_string(graph, None).unwrap()).unwrap()
    }

    #[test]
    fn test_render_plain() {
        let graph = UndirectedGraph::from_edges([(2, 1), (3, 2)]);
        let dot = to_dot_string(&graph, None).unwrap();
        assert!(dot.starts_with("graph G {"));
        assert!(dot.contains("label=<1>"));
        assert!(dot.contains("label=<3>"));
        assert!(dot.contains("n0 -- n1"));
        assert!(dot.contains("n1 -- n2"));
        assert!(!dot.contains("filled"));
    }

    #[test]
    fn test_render_partition_colors() {
        let graph = UndirectedGraph::from_edges([(Label::from(1), Label::from('A'))]);
        let sides = bipartition(&graph).unwrap();
        let dot = to_dot_string(&graph, Some(&sides)).unwrap();
        assert!(dot.contains("filled"));
        assert!(dot.contains(LEFT_FILL));
        assert!(dot.contains(RIGHT_FILL));
        assert!(dot.contains("n0 -- n1"));
    }

    #[test]
    fn test_names_that_look_like_numbers() {
        let graph = UndirectedGraph::from_edges([
            (Label::from("12"), Label::Int(12)),
            (Label::from(" U1 "), Label::from("-3")),
        ]);
        assert_eq!(round_trip(&graph), graph);
    }

    #[test]
    fn test_names_with_escapes() {
        let mut graph = UndirectedGraph::from_edges([
            (Label::from("say \"hi\""), Label::from(r"C:\dir\")),
            (Label::from("two\nlines"), Label::from("<b>")),
            (Label::from("it's"), Label::from("caf\u{e9}")),
        ]);
        graph.add_node(Label::from(""));
        assert_eq!(round_trip(&graph), graph);
    }

    #[test]
    fn test_str_nodes_read_back_as_names() {
        let graph = UndirectedGraph::from_edges([("a\\", "b\"")]);
        let reparsed = parse_undirected(&to_dot_string(&graph, None).unwrap()).unwrap();
        assert!(reparsed.has_edge(&Label::from("a\\"), &Label::from("b\"")));
    }

    #[test]
    fn test_empty_graph() {
        let graph = UndirectedGraph::<u8>::new();
        let dot = to_dot_string(&graph, None).unwrap();
        assert!(dot.starts_with("graph G {"));
        assert!(!dot.contains("--"));
        assert_eq!(parse_undirected(&dot).unwrap().num_nodes(), 0);
    }
}
