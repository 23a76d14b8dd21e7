use super::*;
use crate::graph::{Edge, Node, Point};
use tempfile::tempdir;

fn two_points() -> Graph<Point> {
    let mut graph = Graph::new();
    graph.add_node(Node::new(0, Point::new(0.0, 0.0))).unwrap();
    graph.add_node(Node::new(1, Point::new(1.0, 0.0))).unwrap();
    graph.add_edge_directed(0, 1, 2.5).unwrap();
    graph
}

#[test]
fn test_to_text_format() {
    let text = two_points().to_text().unwrap();
    assert_eq!(
        text,
        "ID: 0 Val: {0, 0} Edges: (1, {1, 0}, 2.5) \nID: 1 Val: {1, 0} Edges: \n"
    );
}

#[test]
fn test_save_then_load_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("graphs").join("points.txt");

    two_points().save_to_file(&path).unwrap();
    let (loaded, report) = Graph::<Point>::from_file(&path, LoadMode::Strict).unwrap();

    assert!(report.is_clean());
    assert_eq!(report.nodes_created, 2);
    assert_eq!(report.edges_added, 1);
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded.get_weight(0, 1), Some(2.5));
    assert_eq!(loaded.get_weight(1, 0), None);
    assert_eq!(loaded.id_of(&Point::new(1.0, 0.0)), Some(1));
}

#[test]
fn test_save_is_ordered_by_id() {
    let mut graph = Graph::new();
    for id in [5u32, 1, 3] {
        graph.add_node(Node::new(id, i64::from(id))).unwrap();
    }
    let text = graph.to_text().unwrap();
    let ids: Vec<&str> = text
        .lines()
        .map(|l| l.split_whitespace().nth(1).unwrap())
        .collect();
    assert_eq!(ids, vec!["1", "3", "5"]);
}

#[test]
fn test_save_refuses_dangling_edges() {
    let mut graph = Graph::new();
    graph
        .add_node(Node::with_edges(0, 1i64, vec![Edge::new(9, 1.0)]))
        .unwrap();

    let err = graph.to_text().unwrap_err();
    match err {
        GraphError::ValidityViolation { violations } => {
            assert_eq!(violations, vec![Violation::DanglingEdge { from: 0, to: 9 }]);
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_load_forward_references_create_nodes() {
    let text = "ID: 0 Val: 10 Edges: (2, 30, 1) (1, 20, 4)\nID: 2 Val: 30 Edges: (0, 10, 1)\n";
    let graph: Graph<i64> = parse_graph(text).unwrap();

    assert_eq!(graph.len(), 3);
    assert_eq!(graph.node(1).map(|n| *n.value()), Some(20));
    assert_eq!(graph.id_of(&20), Some(1));
    assert_eq!(graph.get_weight(0, 2), Some(1.0));
    assert_eq!(graph.get_weight(2, 0), Some(1.0));
    assert_eq!(graph.edges(0)[0].target, 2);
    assert!(graph.edges(1).is_empty());
}

#[test]
fn test_load_ignores_blank_lines() {
    let text = "\nID: 0 Val: 1 Edges:\n   \n\nID: 1 Val: 2 Edges: (0, 1, 0.5)\n";
    let mut graph: Graph<i64> = Graph::new();
    let report = graph.load_from_str(text).unwrap();

    assert_eq!(report.lines_read, 5);
    assert_eq!(graph.len(), 2);
    assert_eq!(graph.get_weight(1, 0), Some(0.5));
}

#[test]
fn test_strict_load_leaves_graph_untouched() {
    let mut graph = two_points();
    let before = graph.to_text().unwrap();

    let text = "ID: 7 Val: {7, 7} Edges:\nID: 8 Val: {8, 8} Edges: (7, {7, 7})\n";
    let err = graph.load_from_str(text).unwrap_err();

    assert!(matches!(err, GraphError::Parse { line: 2, .. }));
    assert_eq!(graph.to_text().unwrap(), before);
    assert!(!graph.does_node_exist(7));
}

#[test]
fn test_skip_malformed_applies_good_lines() {
    let text = "ID: 0 Val: 1 Edges: (1, 2, 1)\ngarbage\nID: 1 Val: 2 Edges: (0, 1, x)\n";
    let mut graph: Graph<i64> = Graph::new();
    let report = graph
        .load_from_str_with_mode(text, LoadMode::SkipMalformed)
        .unwrap();

    assert_eq!(graph.len(), 2);
    assert_eq!(graph.get_weight(0, 1), Some(1.0));
    assert_eq!(graph.get_weight(1, 0), None);
    assert_eq!(
        report.errors.iter().map(|e| e.line).collect::<Vec<_>>(),
        vec![2, 3]
    );
}

const NON_UTF8_LINE: &[u8] = b"ID: 0 Val: 1 Edges: (1, 2, 1)\nID: 5 Val: \xff Edges:\nID: 1 Val: 2 Edges:\n";

#[test]
fn test_strict_load_rejects_non_utf8_line() {
    let mut graph: Graph<i64> = Graph::new();
    let err = graph.read_from(NON_UTF8_LINE, LoadMode::Strict).unwrap_err();

    assert!(matches!(err, GraphError::Parse { line: 2, .. }));
    assert!(graph.is_empty());
}

#[test]
fn test_skip_malformed_skips_non_utf8_line() {
    let mut graph: Graph<i64> = Graph::new();
    let report = graph
        .read_from(NON_UTF8_LINE, LoadMode::SkipMalformed)
        .unwrap();

    assert_eq!(graph.len(), 2);
    assert!(!graph.does_node_exist(5));
    assert_eq!(graph.get_weight(0, 1), Some(1.0));
    assert_eq!(report.lines_read, 3);
    assert_eq!(
        report.errors.iter().map(|e| e.line).collect::<Vec<_>>(),
        vec![2]
    );
    assert!(report.errors[0].reason.contains("UTF-8"));
}

#[test]
fn test_existing_node_keeps_its_value() {
    let mut graph: Graph<i64> = Graph::new();
    graph.add_node(Node::new(0, 100)).unwrap();

    let report = graph.load_from_str("ID: 0 Val: 5 Edges:\n").unwrap();
    assert_eq!(report.nodes_created, 0);
    assert_eq!(graph.node(0).map(|n| *n.value()), Some(100));
}

#[test]
fn test_load_appends_to_existing_edges() {
    let mut graph = two_points();
    graph
        .load_from_str("ID: 0 Val: {0, 0} Edges: (1, {1, 0}, 2.5)\n")
        .unwrap();
    assert_eq!(graph.edges(0).len(), 2);
}

#[test]
fn test_load_missing_file() {
    let dir = tempdir().unwrap();
    let mut graph: Graph<i64> = Graph::new();
    let err = graph
        .load_from_file(&dir.path().join("absent.txt"), LoadMode::Strict)
        .unwrap_err();
    assert!(err.to_string().contains("failed to open"));
}

#[test]
fn test_load_mode_parse() {
    assert_eq!("strict".parse::<LoadMode>().unwrap(), LoadMode::Strict);
    assert_eq!(
        "skip_malformed".parse::<LoadMode>().unwrap(),
        LoadMode::SkipMalformed
    );
    assert!("never".parse::<LoadMode>().is_err());
    assert_eq!(LoadMode::default().as_str(), "strict");
}

#[test]
fn test_weights_round_trip_exactly() {
    let mut graph: Graph<i64> = Graph::new();
    graph.add_node(Node::new(0, 0)).unwrap();
    graph.add_node(Node::new(1, 1)).unwrap();
    graph.add_edge_directed(0, 1, 0.1 + 0.2).unwrap();
    graph.add_edge_directed(1, 0, -3.0).unwrap();

    let reloaded: Graph<i64> = parse_graph(&graph.to_text().unwrap()).unwrap();
    assert_eq!(reloaded.get_weight(0, 1), Some(0.1 + 0.2));
    assert_eq!(reloaded.get_weight(1, 0), Some(-3.0));
}
