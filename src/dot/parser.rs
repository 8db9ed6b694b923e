use std::collections::HashMap;

use dot_parser::ast::{
    AttrList, Graph as DotGraph, ID, NodeID, Stmt, StmtList, Subgraph, either::Either,
};

use crate::error::DotError;
use crate::graph::{Graph, GraphMut};
use crate::label::Label;
use crate::tracing_support::{debug, info_span};
use crate::undirected_graph::UndirectedGraph;

type Stmts<'a> = StmtList<(ID<'a>, ID<'a>)>;

/// Labels given by `label` attributes, keyed by raw DOT node id.
type NamedNodes = HashMap<String, Label>;

/// Reverses the backslash escapes of a quoted DOT string: `\"`, `\\`,
/// `\'`, `\n`, `\r`, `\t` and `\u{..}`.  Any other escape is kept as
/// written.
fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some(c @ ('\\' | '"' | '\'')) => out.push(c),
            Some('u') => {
                let decoded = chars.as_str().strip_prefix('{').and_then(|rest| {
                    let (hex, tail) = rest.split_once('}')?;
                    let c = u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)?;
                    Some((c, tail))
                });
                match decoded {
                    Some((c, tail)) => {
                        out.push(c);
                        chars = tail.chars();
                    }
                    None => out.push_str("\\u"),
                }
            }
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

fn strip_delims<'a>(text: &'a str, open: char, close: char) -> Option<&'a str> {
    text.strip_prefix(open)?.strip_suffix(close)
}

fn parse_label(text: &str) -> Label {
    text.parse::<Label>().unwrap_or_else(|never| match never {})
}

/// Converts a DOT node id to a label.  A quoted id is always a name, kept
/// verbatim apart from its escapes; a bare numeral is an integer.
fn id_label(id: &str) -> Label {
    if let Some(inner) = strip_delims(id, '"', '"') {
        Label::Name(unescape(inner))
    } else if let Some(inner) = strip_delims(id, '<', '>') {
        parse_label(inner)
    } else {
        parse_label(id)
    }
}

/// Converts the value of a `label` attribute.  `dot-parser` drops the quotes
/// of a quoted value, so only an HTML value (`<12>`) can carry an integer.
fn attr_label(value: &str) -> Label {
    match strip_delims(value, '<', '>') {
        Some(inner) => parse_label(inner),
        None => Label::Name(unescape(value)),
    }
}

fn node_label(names: &NamedNodes, node_id: &NodeID) -> Label {
    names
        .get(&node_id.id)
        .cloned()
        .unwrap_or_else(|| id_label(&node_id.id))
}

fn label_attr(attrs: &AttrList<(ID<'_>, ID<'_>)>) -> Option<Label> {
    let mut found = None;
    for alist in &attrs.elems {
        for (name, value) in &alist.elems {
            let name: String = name.clone().into();
            if name == "label" {
                let value: String = value.clone().into();
                found = Some(attr_label(&value));
            }
        }
    }
    found
}

/// Records every node statement that carries a `label` attribute.  The last
/// one wins when a node is labelled twice.
fn collect_names(stmts: &Stmts<'_>, names: &mut NamedNodes) {
    for stmt in stmts {
        match stmt {
            Stmt::NodeStmt(node_stmt) => {
                if let Some(label) = node_stmt.attr.as_ref().and_then(label_attr) {
                    names.insert(node_stmt.node.id.clone(), label);
                }
            }
            Stmt::EdgeStmt(edge_stmt) => {
                let mut ends = vec![&edge_stmt.from];
                let mut rhs = Some(&edge_stmt.next);
                while let Some(segment) = rhs {
                    ends.push(&segment.to);
                    rhs = segment.next.as_deref();
                }
                for end in ends {
                    if let Either::Right(subgraph) = end {
                        collect_names(&subgraph.stmts, names);
                    }
                }
            }
            Stmt::Subgraph(subgraph) => collect_names(&subgraph.stmts, names),
            _ => {}
        }
    }
}

/// Collects the nodes named by one end of an edge statement: a single node,
/// or every node mentioned anywhere inside a subgraph.
fn endpoint_labels(
    names: &NamedNodes,
    either: &Either<NodeID, Subgraph<(ID<'_>, ID<'_>)>>,
) -> Vec<Label> {
    match either {
        Either::Left(node_id) => vec![node_label(names, node_id)],
        Either::Right(subgraph) => {
            let mut labels = Vec::new();
            collect_labels(names, &subgraph.stmts, &mut labels);
            labels
        }
    }
}

fn collect_labels(names: &NamedNodes, stmts: &Stmts<'_>, labels: &mut Vec<Label>) {
    for stmt in stmts {
        match stmt {
            Stmt::NodeStmt(node_stmt) => labels.push(node_label(names, &node_stmt.node)),
            Stmt::EdgeStmt(edge_stmt) => {
                labels.extend(endpoint_labels(names, &edge_stmt.from));
                let mut rhs = Some(&edge_stmt.next);
                while let Some(segment) = rhs {
                    labels.extend(endpoint_labels(names, &segment.to));
                    rhs = segment.next.as_deref();
                }
            }
            Stmt::Subgraph(subgraph) => collect_labels(names, &subgraph.stmts, labels),
            _ => {}
        }
    }
}

fn add_stmts(names: &NamedNodes, stmts: &Stmts<'_>, graph: &mut UndirectedGraph<Label>) {
    for stmt in stmts {
        match stmt {
            Stmt::NodeStmt(node_stmt) => {
                graph.add_node(node_label(names, &node_stmt.node));
            }
            Stmt::EdgeStmt(edge_stmt) => {
                // Each segment of a chain joins every node on its left to
                // every node on its right.
                let mut from = endpoint_labels(names, &edge_stmt.from);
                graph.add_nodes(from.iter().cloned());
                let mut rhs = Some(&edge_stmt.next);
                while let Some(segment) = rhs {
                    let to = endpoint_labels(names, &segment.to);
                    graph.add_nodes(to.iter().cloned());
                    for a in &from {
                        for b in &to {
                            graph.add_edge(a.clone(), b.clone());
                        }
                    }
                    from = to;
                    rhs = segment.next.as_deref();
                }
            }
            Stmt::Subgraph(subgraph) => add_stmts(names, &subgraph.stmts, graph),
            _ => {}
        }
    }
}

/// Parses a DOT document into an undirected graph of [`Label`]s.
///
/// Nodes may be declared explicitly or appear only in edges, and subgraphs
/// are flattened into the enclosing graph.  A node's `label` attribute, when
/// present, becomes its [`Label`] in place of its id; other attributes are
/// ignored.  A `digraph` is accepted and its arcs are read as undirected
/// edges; repeated edges collapse into one.
///
/// ```
/// use bipartite::dot::parse_undirected;
/// use bipartite::prelude::*;
///
/// let graph = parse_undirected("graph { 1 -- A -- 2 -- B }").unwrap();
/// assert_eq!(graph.num_nodes(), 4);
/// assert_eq!(graph.num_edges(), 3);
/// assert!(graph.has_edge(&Label::Int(1), &Label::from("A")));
/// ```
pub fn parse_undirected(data: &str) -> Result<UndirectedGraph<Label>, DotError> {
    let _span = info_span!("parse_undirected").entered();
    let dot_ast: DotGraph<_> = DotGraph::try_from(data)
        .map_err(|e| DotError::Parse(format!("Failed to parse DOT data: {:?}", e)))?;

    let mut names = NamedNodes::new();
    collect_names(&dot_ast.stmts, &mut names);
    let mut graph = UndirectedGraph::new();
    add_stmts(&names, &dot_ast.stmts, &mut graph);
    debug!(
        nodes = graph.num_nodes(),
        edges = graph.num_edges(),
        "parsed DOT graph"
    );
    Ok(graph)
}
