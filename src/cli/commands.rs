//! CLI command implementations.

use std::fs;
use std::path::Path;

use serde::Serialize;
use thiserror::Error;

use crate::graph::{depth_first, Graph};
use crate::types::GraphError;

/// Errors specific to the CLI surface. The library core does no I/O, so
/// file and JSON failures live here rather than in [`GraphError`].
#[derive(Error, Debug)]
pub enum CliError {
    /// Graph operation failed.
    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    /// IO error reading an adjacency file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Adjacency file is not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Adjacency JSON parsed but is not an object of string arrays.
    #[error("Invalid adjacency mapping: {0}")]
    Mapping(String),
}

/// Structural facts reported by `ungraph info`.
#[derive(Serialize)]
struct GraphInfo {
    vertices: usize,
    edges: usize,
    connected: bool,
    regular: bool,
    complete: bool,
    tree: bool,
}

/// The built-in sample graph used when no adjacency file is given.
pub fn sample_graph() -> Graph {
    Graph::from_adjacency([
        ("A", vec!["B", "C"]),
        ("B", vec!["D", "E"]),
        ("C", vec!["F", "G"]),
        ("D", vec!["H", "I"]),
        ("E", vec![]),
        ("F", vec![]),
        ("G", vec![]),
        ("H", vec!["J", "L"]),
        ("I", vec![]),
        ("J", vec![]),
        ("L", vec![]),
    ])
}

/// Load a graph from a JSON adjacency object, or fall back to the sample.
/// Vertex order in the file is preserved.
pub fn load_graph(path: Option<&Path>) -> Result<Graph, CliError> {
    let Some(path) = path else {
        return Ok(sample_graph());
    };
    let text = fs::read_to_string(path)?;
    let mapping: serde_json::Map<String, serde_json::Value> = serde_json::from_str(&text)?;
    let mut pairs: Vec<(String, Vec<String>)> = Vec::with_capacity(mapping.len());
    for (label, value) in mapping {
        let neighbors: Vec<String> = serde_json::from_value(value).map_err(|_| {
            CliError::Mapping(format!("neighbors of {label:?} must be an array of strings"))
        })?;
        pairs.push((label, neighbors));
    }
    Ok(Graph::from_adjacency(pairs))
}

/// Run a depth-first traversal and print the visitation order.
pub fn cmd_dfs(path: Option<&Path>, root: &str, json: bool) -> Result<(), CliError> {
    let graph = load_graph(path)?;
    let order = depth_first(&graph, root)?;
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&order).unwrap_or_default()
        );
    } else {
        println!("{}", order.join(" -> "));
    }
    Ok(())
}

/// Print structural facts about a graph.
pub fn cmd_info(path: Option<&Path>, json: bool) -> Result<(), CliError> {
    let graph = load_graph(path)?;
    let info = GraphInfo {
        vertices: graph.order(),
        edges: graph.edge_count(),
        connected: graph.is_connected(),
        regular: graph.is_regular(),
        complete: graph.is_complete(),
        tree: graph.is_tree(),
    };
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("Vertices: {}", info.vertices);
        println!("Edges: {}", info.edges);
        println!("Connected: {}", info.connected);
        println!("Regular: {}", info.regular);
        println!("Complete: {}", info.complete);
        println!("Tree: {}", info.tree);
    }
    Ok(())
}
