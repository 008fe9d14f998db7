//! Graph traversal algorithms (iterative DFS).

use std::collections::HashSet;

use crate::types::GraphResult;

use super::Graph;

/// Depth-first traversal from a root vertex.
///
/// Iterative, stack-based walk: pop the top of the stack and, if the vertex
/// has not been recorded yet, record it and push its whole adjacency sequence
/// in order, unfiltered by visited status. Filtering happens at pop time, so
/// the visitation order is last-in-first-out relative to each adjacency
/// sequence rather than a plain recursive pre-order. Returns the vertices in
/// the order they were first recorded. O(V+E).
pub fn depth_first(graph: &Graph, root: &str) -> GraphResult<Vec<String>> {
    let root = graph.resolve(root)?;
    let mut visited: HashSet<&str> = HashSet::new();
    let mut visited_order: Vec<String> = Vec::new();
    let mut stack: Vec<&str> = vec![root];

    while let Some(current) = stack.pop() {
        if !visited.insert(current) {
            continue;
        }
        visited_order.push(current.to_string());
        for neighbor in graph.neighbors(current) {
            stack.push(neighbor.as_str());
        }
    }

    Ok(visited_order)
}
