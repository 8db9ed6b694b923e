use std::collections::HashSet;

use bipartite::prelude::*;

fn labels<const N: usize>(items: [&str; N]) -> HashSet<Label> {
    items.iter().map(|item| item.parse().unwrap()).collect()
}

fn label_graph(edges: &[(&str, &str)]) -> UndirectedGraph<Label> {
    edges
        .iter()
        .map(|(a, b)| (a.parse().unwrap(), b.parse().unwrap()))
        .collect()
}

#[test]
fn mixed_labels_split_into_numbers_and_letters() {
    let graph = label_graph(&[("1", "A"), ("1", "B"), ("2", "A"), ("2", "C")]);
    assert!(is_bipartite(&graph));

    let sides = bipartition(&graph).unwrap();
    let expected = Bipartition::new(labels(["1", "2"]), labels(["A", "B", "C"]));
    assert!(sides.same_sides(&expected), "{sides:?}");
}

#[test]
fn triangle_has_no_bipartition() {
    let graph = UndirectedGraph::from_edges([(1, 2), (2, 3), (3, 1)]);
    assert!(!is_bipartite(&graph));

    let err = bipartition(&graph).unwrap_err();
    assert!(matches!(err, BipartiteError::NotBipartite { .. }));
    assert!(err.to_string().starts_with("graph is not bipartite"));
}

#[test]
fn disconnected_components_validate_independently() {
    let graph = UndirectedGraph::from_edges([(1, 2), (2, 3), (3, 4), (4, 1), (5, 6)]);
    assert!(is_bipartite(&graph));
    assert_eq!(validate_candidate_bipartition(&graph, [1, 3, 5]), Ok(true));
    assert_eq!(validate_candidate_bipartition(&graph, [1, 3, 6]), Ok(true));
    assert_eq!(validate_candidate_bipartition(&graph, [1, 2, 5]), Ok(false));
    assert_eq!(validate_candidate_bipartition(&graph, [1, 3]), Ok(false));
}

#[test]
fn empty_graph_has_empty_sides() {
    let graph = UndirectedGraph::<Label>::new();
    assert!(is_bipartite(&graph));
    let (left, right) = bipartition(&graph).unwrap().into_sets();
    assert!(left.is_empty());
    assert!(right.is_empty());
}

#[test]
fn isolated_node_fills_one_side() {
    let mut graph = UndirectedGraph::new();
    graph.add_node(Label::from("x"));
    assert!(is_bipartite(&graph));

    let sides = bipartition(&graph).unwrap();
    assert_eq!(sides.left(), &labels(["x"]));
    assert!(sides.right().is_empty());
    assert_eq!(sides.side_of(&Label::from("x")), Some(Color::Zero));
}

#[test]
fn odd_cycle_with_pendant_edges_is_not_bipartite() {
    let graph = label_graph(&[
        ("0", "1"),
        ("1", "2"),
        ("2", "3"),
        ("3", "4"),
        ("4", "0"),
        ("1", "a"),
        ("2", "b"),
        ("3", "c"),
        ("4", "d"),
        ("5", "e"),
    ]);
    assert!(!is_bipartite(&graph));
    assert!(bipartition(&graph).is_err());
    assert!(!graph.is_forest());
    assert_eq!(
        validate_candidate_bipartition(&graph, labels(["0", "2"])),
        Ok(false)
    );
}

#[test]
fn forest_is_bipartite() {
    let graph = UndirectedGraph::from_edges([(1, 2), (2, 3), (4, 5), (6, 7), (7, 8), (8, 9)]);
    assert!(graph.is_forest());
    assert!(!graph.is_tree());
    assert!(is_bipartite(&graph));
    assert_eq!(component_bipartitions(&graph).unwrap().len(), 3);
}

#[test]
fn duplicate_candidates_are_reported() {
    let graph = label_graph(&[("U1", "F1"), ("U2", "F1")]);
    let candidate = ["U1", "U2", "U1"].map(Label::from);
    assert_eq!(
        validate_candidate_bipartition(&graph, candidate),
        Err(BipartiteError::AmbiguousInput {
            duplicates: vec![Label::from("U1")]
        })
    );
}

#[test]
fn sides_of_a_large_bipartite_graph_validate() {
    let graph = label_graph(&[
        ("1", "a"),
        ("1", "b"),
        ("1", "c"),
        ("2", "b"),
        ("2", "d"),
        ("3", "c"),
        ("3", "e"),
        ("4", "a"),
        ("4", "f"),
        ("5", "d"),
        ("5", "g"),
        ("6", "e"),
        ("6", "h"),
        ("7", "f"),
        ("7", "g"),
        ("8", "h"),
    ]);
    let sides = bipartition(&graph).unwrap();
    assert!(sides.is_valid_for(&graph));
    let numbers = labels(["1", "2", "3", "4", "5", "6", "7", "8"]);
    assert!(sides.aligns_with(&numbers));
    assert_eq!(validate_candidate_bipartition(&graph, numbers), Ok(true));
}
