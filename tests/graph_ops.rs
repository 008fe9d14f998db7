//! Store, mutation and query tests: vertices, edges, adjacency, degree.

use ungraph::graph::selector::VertexSelector;
use ungraph::{Graph, GraphBuilder, GraphError, RandomSelector};

// ==================== Vertex Tests ====================

#[test]
fn test_add_vertex() {
    let mut graph = Graph::new();
    assert!(graph.add_vertex("A").is_ok());
    assert_eq!(graph.order(), 1);
    assert!(graph.contains("A"));
    assert_eq!(graph.adjacent("A").unwrap(), &[] as &[String]);
}

#[test]
fn test_add_duplicate_vertex_rejected() {
    let mut graph = Graph::new();
    graph.add_vertex("A").unwrap();
    let result = graph.add_vertex("A");
    match result.unwrap_err() {
        GraphError::VertexAlreadyExists(label) => assert_eq!(label, "A"),
        e => panic!("Expected VertexAlreadyExists, got {:?}", e),
    }
    // Adjacency unchanged from the first, successful add
    assert_eq!(graph.order(), 1);
    assert_eq!(graph.adjacent("A").unwrap(), &[] as &[String]);
}

#[test]
fn test_remove_vertex_absent() {
    let mut graph = Graph::new();
    assert_eq!(
        graph.remove_vertex("Z").unwrap_err(),
        GraphError::VertexNotFound("Z".to_string())
    );
}

#[test]
fn test_remove_vertex_cascades_to_all_neighbors() {
    let mut graph = Graph::new();
    for v in ["A", "B", "C"] {
        graph.add_vertex(v).unwrap();
    }
    graph.connect("A", "B").unwrap();
    graph.connect("A", "C").unwrap();

    graph.remove_vertex("A").unwrap();

    assert!(!graph.contains("A"));
    assert_eq!(graph.adjacent("B").unwrap(), &[] as &[String]);
    assert_eq!(graph.adjacent("C").unwrap(), &[] as &[String]);
}

#[test]
fn test_remove_vertex_strips_parallel_occurrences() {
    // Bulk construction may carry parallel edges; removal strips them all
    let mut graph = Graph::from_adjacency([("A", vec!["B", "B"]), ("B", vec!["A", "A"])]);
    graph.remove_vertex("A").unwrap();
    assert_eq!(graph.adjacent("B").unwrap(), &[] as &[String]);
}

#[test]
fn test_vertices_in_insertion_order() {
    let mut graph = Graph::new();
    for v in ["C", "A", "B"] {
        graph.add_vertex(v).unwrap();
    }
    let labels: Vec<&str> = graph.vertices().collect();
    assert_eq!(labels, vec!["C", "A", "B"]);
    assert_eq!(graph.order(), 3);
}

// ==================== Edge Tests ====================

#[test]
fn test_connect_is_symmetric() {
    let mut graph = Graph::new();
    graph.add_vertex("A").unwrap();
    graph.add_vertex("B").unwrap();
    graph.connect("A", "B").unwrap();

    assert!(graph.adjacent("A").unwrap().contains(&"B".to_string()));
    assert!(graph.adjacent("B").unwrap().contains(&"A".to_string()));
}

#[test]
fn test_connect_absent_endpoint() {
    let mut graph = Graph::new();
    graph.add_vertex("A").unwrap();
    assert_eq!(
        graph.connect("A", "Z").unwrap_err(),
        GraphError::VertexNotFound("Z".to_string())
    );
    assert_eq!(
        graph.connect("Z", "A").unwrap_err(),
        GraphError::VertexNotFound("Z".to_string())
    );
    assert_eq!(graph.adjacent("A").unwrap(), &[] as &[String]);
}

#[test]
fn test_connect_already_adjacent_leaves_graph_unchanged() {
    let mut graph = Graph::new();
    graph.add_vertex("A").unwrap();
    graph.add_vertex("B").unwrap();
    graph.connect("A", "B").unwrap();

    let result = graph.connect("A", "B");
    match result.unwrap_err() {
        GraphError::EdgeAlreadyExists { v1, v2 } => {
            assert_eq!(v1, "A");
            assert_eq!(v2, "B");
        }
        e => panic!("Expected EdgeAlreadyExists, got {:?}", e),
    }
    assert_eq!(graph.adjacent("A").unwrap(), &["B".to_string()]);
    assert_eq!(graph.adjacent("B").unwrap(), &["A".to_string()]);
}

#[test]
fn test_connect_then_disconnect_restores() {
    let mut graph = Graph::new();
    for v in ["A", "B", "C"] {
        graph.add_vertex(v).unwrap();
    }
    graph.connect("A", "B").unwrap();

    let before_a = graph.adjacent("A").unwrap().to_vec();
    let before_c = graph.adjacent("C").unwrap().to_vec();

    graph.connect("A", "C").unwrap();
    assert!(graph.disconnect("A", "C").unwrap());

    assert_eq!(graph.adjacent("A").unwrap(), before_a.as_slice());
    assert_eq!(graph.adjacent("C").unwrap(), before_c.as_slice());
}

#[test]
fn test_disconnect_not_adjacent_is_successful_noop() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut graph = Graph::new();
    graph.add_vertex("A").unwrap();
    graph.add_vertex("B").unwrap();

    assert!(!graph.disconnect("A", "B").unwrap());
    assert_eq!(graph.adjacent("A").unwrap(), &[] as &[String]);
    assert_eq!(graph.adjacent("B").unwrap(), &[] as &[String]);
}

#[test]
fn test_disconnect_absent_endpoint() {
    let mut graph = Graph::new();
    graph.add_vertex("A").unwrap();
    assert_eq!(
        graph.disconnect("A", "Z").unwrap_err(),
        GraphError::VertexNotFound("Z".to_string())
    );
}

#[test]
fn test_disconnect_removes_one_parallel_edge() {
    let mut graph = Graph::from_adjacency([("A", vec!["B", "B"]), ("B", vec!["A", "A"])]);
    assert!(graph.disconnect("A", "B").unwrap());
    assert_eq!(graph.adjacent("A").unwrap(), &["B".to_string()]);
    assert_eq!(graph.adjacent("B").unwrap(), &["A".to_string()]);
}

// ==================== Degree Tests ====================

#[test]
fn test_degree_counts_endpoints() {
    let mut graph = Graph::new();
    for v in ["A", "B", "C"] {
        graph.add_vertex(v).unwrap();
    }
    graph.connect("A", "B").unwrap();
    graph.connect("A", "C").unwrap();

    assert_eq!(graph.degree("A").unwrap(), 2);
    assert_eq!(graph.degree("B").unwrap(), 1);
    assert_eq!(graph.degree("C").unwrap(), 1);
    assert_eq!(
        graph.degree("Z").unwrap_err(),
        GraphError::VertexNotFound("Z".to_string())
    );
}

#[test]
fn test_self_loop_counts_twice() {
    let mut graph = Graph::new();
    graph.add_vertex("A").unwrap();
    graph.connect("A", "A").unwrap();

    // Stored as a single occurrence, counted as two endpoints
    assert_eq!(graph.adjacent("A").unwrap(), &["A".to_string()]);
    assert_eq!(graph.degree("A").unwrap(), 2);
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_degree_sum_is_twice_edge_count() {
    let mut graph = Graph::new();
    for v in ["A", "B", "C", "D"] {
        graph.add_vertex(v).unwrap();
    }
    graph.connect("A", "B").unwrap();
    graph.connect("B", "C").unwrap();
    graph.connect("C", "D").unwrap();
    graph.connect("D", "D").unwrap();

    let degree_sum: usize = graph.vertices().map(|v| graph.degree(v).unwrap()).sum();
    assert_eq!(degree_sum, 2 * graph.edge_count());
    assert_eq!(graph.edge_count(), 4);
}

// ==================== Construction Tests ====================

#[test]
fn test_from_adjacency_preserves_order() {
    let graph = Graph::from_adjacency([
        ("X", vec!["Y"]),
        ("Y", vec!["X"]),
        ("W", vec![]),
    ]);
    let labels: Vec<&str> = graph.vertices().collect();
    assert_eq!(labels, vec!["X", "Y", "W"]);
    assert_eq!(graph.adjacent("X").unwrap(), &["Y".to_string()]);
}

#[test]
fn test_builder_replays_validated_path() {
    let graph = GraphBuilder::new()
        .vertex("A")
        .edge("A", "B")
        .edge("B", "C")
        .build()
        .unwrap();

    assert_eq!(graph.order(), 3);
    assert!(graph.adjacent("B").unwrap().contains(&"A".to_string()));
    assert!(graph.adjacent("B").unwrap().contains(&"C".to_string()));
}

#[test]
fn test_graph_is_debug_printable() {
    // Needed so Result<Graph, _> combinators like unwrap_err work in tests
    let mut graph = Graph::new();
    graph.add_vertex("A").unwrap();
    let rendered = format!("{:?}", graph);
    assert!(rendered.contains("labels"));
    assert!(rendered.contains("\"A\""));
}

#[test]
fn test_builder_rejects_duplicate_edge() {
    let result = GraphBuilder::new().edge("A", "B").edge("B", "A").build();
    match result.unwrap_err() {
        GraphError::EdgeAlreadyExists { .. } => {}
        e => panic!("Expected EdgeAlreadyExists, got {:?}", e),
    }
}

// ==================== Selector Tests ====================

struct LastInOrder;

impl VertexSelector for LastInOrder {
    fn pick<'a>(&self, labels: &'a [String]) -> Option<&'a str> {
        labels.last().map(String::as_str)
    }
}

#[test]
fn test_default_selector_is_first_in_order() {
    let mut graph = Graph::new();
    assert_eq!(graph.any_vertex(), None);
    graph.add_vertex("B").unwrap();
    graph.add_vertex("A").unwrap();
    assert_eq!(graph.any_vertex(), Some("B"));
}

#[test]
fn test_injected_selector() {
    let mut graph = Graph::with_selector(Box::new(LastInOrder));
    graph.add_vertex("B").unwrap();
    graph.add_vertex("A").unwrap();
    assert_eq!(graph.any_vertex(), Some("A"));
}

#[test]
fn test_random_selector_picks_a_member() {
    let labels = vec!["A".to_string(), "B".to_string(), "C".to_string()];
    let picked = RandomSelector.pick(&labels).unwrap();
    assert!(labels.iter().any(|l| l == picked));
    assert_eq!(RandomSelector.pick(&[]), None);
}
