//! Reports on the bipartiteness of the classic example graphs, or of a graph
//! read from a DOT file.
//!
//! Usage:
//!   cargo run --example bipartite_report
//!   cargo run --example bipartite_report -- --graph g2 -v
//!   cargo run --example bipartite_report -- --graph movies --candidate U1,U2,U3
//!   cargo run --example bipartite_report -- --input path/to/graph.dot --emit-dot
//!   cat path/to/graph.dot | cargo run --example bipartite_report -- --input -

#[cfg(feature = "dot")]
mod inner {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io::{self, Read};
    use std::process;

    use bipartite::dot::{parse_undirected, render_dot};
    use bipartite::prelude::*;
    use bipartite::tracing_support::{Verbosity, dump_span_timings, init_tracing};
    use clap::{Parser, ValueEnum};

    /// Report whether graphs are bipartite, and find or check their sides.
    #[derive(Parser, Debug)]
    #[command(author, version, about, long_about = None)]
    struct Args {
        /// Built-in graph to analyse (all of them by default)
        #[arg(long, value_enum, conflicts_with = "input")]
        graph: Option<NamedGraph>,

        /// Input DOT file path ('-' reads from stdin)
        #[arg(long)]
        input: Option<String>,

        /// Comma-separated node set to check against the bipartition
        #[arg(long, value_delimiter = ',')]
        candidate: Option<Vec<Label>>,

        /// Print the graph as DOT, with the two sides filled in
        #[arg(long)]
        emit_dot: bool,

        /// Log progress to stderr (repeat for more detail)
        #[arg(short, long, action = clap::ArgAction::Count)]
        verbose: u8,

        /// Print time spent in each operation when done
        #[arg(long)]
        timings: bool,
    }

    #[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
    enum NamedGraph {
        /// Users and the films they watched
        Movies,
        /// A cycle on five nodes
        OddCycle,
        /// Two numbers joined to three letters
        Slides,
        /// A cycle on three nodes
        Triangle,
        /// Eight numbers joined to eight letters
        G1,
        /// A five-cycle with letters attached
        G2,
        /// Three paths
        G3,
    }

    impl NamedGraph {
        fn title(self) -> &'static str {
            match self {
                NamedGraph::Movies => "Users and films",
                NamedGraph::OddCycle => "Odd cycle (5 nodes)",
                NamedGraph::Slides => "Slides graph",
                NamedGraph::Triangle => "Triangle",
                NamedGraph::G1 => "Graph G1",
                NamedGraph::G2 => "Graph G2",
                NamedGraph::G3 => "Graph G3 (forest)",
            }
        }

        fn build(self) -> UndirectedGraph<Label> {
            fn graph<A: Into<Label>, B: Into<Label>>(
                edges: impl IntoIterator<Item = (A, B)>,
            ) -> UndirectedGraph<Label> {
                edges
                    .into_iter()
                    .map(|(a, b)| (a.into(), b.into()))
                    .collect()
            }

            match self {
                NamedGraph::Movies => graph([
                    ("U1", "F1"),
                    ("U1", "F2"),
                    ("U2", "F2"),
                    ("U2", "F3"),
                    ("U3", "F1"),
                    ("U3", "F4"),
                ]),
                NamedGraph::OddCycle => graph([
                    ("v1", "v2"),
                    ("v2", "v3"),
                    ("v3", "v4"),
                    ("v4", "v5"),
                    ("v5", "v1"),
                ]),
                NamedGraph::Slides => {
                    graph::<i64, char>([(1, 'A'), (1, 'B'), (2, 'A'), (2, 'C')])
                }
                NamedGraph::Triangle => graph::<i64, i64>([(1, 2), (2, 3), (3, 1)]),
                NamedGraph::G1 => graph::<i64, char>([
                    (1, 'a'),
                    (1, 'b'),
                    (1, 'c'),
                    (2, 'b'),
                    (2, 'd'),
                    (3, 'c'),
                    (3, 'e'),
                    (4, 'a'),
                    (4, 'f'),
                    (5, 'd'),
                    (5, 'g'),
                    (6, 'e'),
                    (6, 'h'),
                    (7, 'f'),
                    (7, 'g'),
                    (8, 'h'),
                ]),
                NamedGraph::G2 => {
                    let mut g2 = graph::<i64, i64>([(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)]);
                    let bridges =
                        graph::<i64, char>([(1, 'a'), (2, 'b'), (3, 'c'), (4, 'd'), (5, 'e')]);
                    g2.extend(bridges.edges().map(Into::into));
                    g2
                }
                NamedGraph::G3 => {
                    graph::<i64, i64>([(1, 2), (2, 3), (4, 5), (6, 7), (7, 8), (8, 9)])
                }
            }
        }
    }

    pub fn run() {
        let args = Args::parse();
        init_tracing(Verbosity::from_occurrences(args.verbose));

        let graphs: Vec<(String, UndirectedGraph<Label>)> = match (&args.input, args.graph) {
            (Some(path), _) => {
                let data = match path.as_str() {
                    "-" => read_stdin_or_exit(),
                    path => read_file_or_exit(path),
                };
                vec![(path.clone(), parse_or_exit(&data))]
            }
            (None, Some(named)) => vec![(named.title().to_string(), named.build())],
            (None, None) => NamedGraph::value_variants()
                .iter()
                .map(|named| (named.title().to_string(), named.build()))
                .collect(),
        };

        for (title, graph) in &graphs {
            report(title, graph, args.candidate.as_deref());
            if args.emit_dot {
                emit_dot(graph);
            }
        }

        if args.timings {
            dump_span_timings();
        }
    }

    fn read_stdin_or_exit() -> String {
        let mut buffer = String::new();
        if let Err(err) = io::stdin().read_to_string(&mut buffer) {
            eprintln!("Failed to read stdin: {err}");
            process::exit(1);
        }
        buffer
    }

    fn read_file_or_exit(path: &str) -> String {
        match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) => {
                eprintln!("Failed to read '{path}': {err}");
                process::exit(1);
            }
        }
    }

    fn parse_or_exit(data: &str) -> UndirectedGraph<Label> {
        match parse_undirected(data) {
            Ok(graph) => graph,
            Err(err) => {
                eprintln!("{err}");
                process::exit(1);
            }
        }
    }

    fn format_set<'a>(nodes: impl IntoIterator<Item = &'a Label>) -> String {
        let sorted: BTreeSet<_> = nodes.into_iter().collect();
        let names: Vec<String> = sorted.iter().map(|node| node.to_string()).collect();
        format!("{{{}}}", names.join(", "))
    }

    fn report(title: &str, graph: &UndirectedGraph<Label>, candidate: Option<&[Label]>) {
        println!("Analysis of {title}:");
        println!("- Nodes: {}, edges: {}", graph.num_nodes(), graph.num_edges());
        println!("- Bipartite? {}", is_bipartite(graph));
        match bipartition(graph) {
            Ok(sides) => {
                println!("- Set U: {}", format_set(sides.left()));
                println!("- Set V: {}", format_set(sides.right()));
            }
            Err(err) => println!("- Error: {err}"),
        }
        println!("- Forest? {}", graph.is_forest());
        println!("- Tree? {}", graph.is_tree());

        if let Ok(parts) = component_bipartitions(graph) {
            if parts.len() > 1 {
                println!("- Components:");
                for part in &parts {
                    println!(
                        "    {} | {}",
                        format_set(part.left()),
                        format_set(part.right())
                    );
                }
            }
        }

        if let Some(nodes) = candidate {
            let shown = format_set(nodes);
            match validate_candidate_bipartition(graph, nodes.iter().cloned()) {
                Ok(true) => println!("- {shown} is one side of a bipartition"),
                Ok(false) => println!("- {shown} is not one side of a bipartition"),
                Err(err) => println!("- Error: {err}"),
            }
        }
        println!();
    }

    fn emit_dot(graph: &UndirectedGraph<Label>) {
        let sides = bipartition(graph).ok();
        let stdout = io::stdout();
        if let Err(err) = render_dot(graph, sides.as_ref(), &mut stdout.lock()) {
            eprintln!("Failed to write DOT output: {err}");
            process::exit(1);
        }
        println!();
    }
}

#[cfg(feature = "dot")]
fn main() {
    inner::run();
}

#[cfg(not(feature = "dot"))]
fn main() {
    println!("This example requires the 'dot' feature to be enabled.");
    println!("Run with: cargo run --example bipartite_report --features dot");
}
