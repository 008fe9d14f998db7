//! Core graph structure — vertices + symmetric adjacency sequences.

use std::collections::HashMap;
use std::fmt;

use crate::types::{GraphError, GraphResult};

use super::selector::{FirstInOrder, VertexSelector};

/// An undirected graph over opaque string labels.
///
/// Each edge is stored redundantly: `v2` appears in `v1`'s adjacency sequence
/// and `v1` in `v2`'s. A self-loop is a single occurrence of a vertex in its
/// own sequence and counts twice toward its degree. Every mutating operation
/// either completes and preserves symmetry or fails leaving the graph in its
/// previous state.
pub struct Graph {
    /// Adjacency sequences, keyed by vertex label. May contain duplicate
    /// entries for parallel edges.
    adjacency: HashMap<String, Vec<String>>,
    /// Vertex labels in insertion order; drives `vertices()` iteration.
    labels: Vec<String>,
    /// Strategy for picking an arbitrary representative vertex.
    selector: Box<dyn VertexSelector>,
}

impl Graph {
    /// Create a new empty graph with the default (first-in-order) selector.
    pub fn new() -> Self {
        Self::with_selector(Box::new(FirstInOrder))
    }

    /// Create a new empty graph with an injected vertex-selection strategy.
    pub fn with_selector(selector: Box<dyn VertexSelector>) -> Self {
        Self {
            adjacency: HashMap::new(),
            labels: Vec::new(),
            selector,
        }
    }

    /// Bulk-construct from a caller-supplied adjacency mapping, bypassing the
    /// `connect` validation path. The caller is responsible for supplying a
    /// symmetric mapping if undirected-graph invariants are required.
    pub fn from_adjacency<I, L, N>(mapping: I) -> Self
    where
        I: IntoIterator<Item = (L, N)>,
        L: Into<String>,
        N: IntoIterator<Item = L>,
    {
        let mut graph = Self::new();
        for (label, neighbors) in mapping {
            let label = label.into();
            if !graph.adjacency.contains_key(&label) {
                graph.labels.push(label.clone());
            }
            graph
                .adjacency
                .insert(label, neighbors.into_iter().map(Into::into).collect());
        }
        graph
    }

    /// Number of vertices.
    pub fn order(&self) -> usize {
        self.labels.len()
    }

    /// Number of undirected edges (half the degree sum; a self-loop is one
    /// edge with both endpoints on the same vertex).
    pub fn edge_count(&self) -> usize {
        let endpoint_sum: usize = self
            .labels
            .iter()
            .filter_map(|v| self.degree(v).ok())
            .sum();
        endpoint_sum / 2
    }

    /// Whether a vertex with this label exists.
    pub fn contains(&self, label: &str) -> bool {
        self.adjacency.contains_key(label)
    }

    /// All vertex labels, in insertion order. The order is a convenience, not
    /// a semantic guarantee.
    pub fn vertices(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    /// An arbitrary representative vertex, chosen by the graph's selection
    /// strategy. `None` on the empty graph.
    pub fn any_vertex(&self) -> Option<&str> {
        self.selector.pick(&self.labels)
    }

    /// The adjacency sequence for `v`, including duplicate entries.
    pub fn adjacent(&self, v: &str) -> GraphResult<&[String]> {
        self.adjacency
            .get(v)
            .map(Vec::as_slice)
            .ok_or_else(|| GraphError::VertexNotFound(v.to_string()))
    }

    /// The degree of `v`: sequence length plus one extra count per self-loop,
    /// so a self-loop contributes 2 to its own vertex.
    pub fn degree(&self, v: &str) -> GraphResult<usize> {
        let adj = self.adjacent(v)?;
        Ok(adj.len() + adj.iter().filter(|n| *n == v).count())
    }

    /// Add a vertex with an empty adjacency sequence.
    pub fn add_vertex(&mut self, label: impl Into<String>) -> GraphResult<()> {
        let label = label.into();
        if self.adjacency.contains_key(&label) {
            return Err(GraphError::VertexAlreadyExists(label));
        }
        self.labels.push(label.clone());
        self.adjacency.insert(label, Vec::new());
        Ok(())
    }

    /// Remove a vertex and strip every occurrence of it from all remaining
    /// adjacency sequences. O(V+E).
    pub fn remove_vertex(&mut self, label: &str) -> GraphResult<()> {
        if self.adjacency.remove(label).is_none() {
            return Err(GraphError::VertexNotFound(label.to_string()));
        }
        self.labels.retain(|l| l != label);
        for neighbors in self.adjacency.values_mut() {
            neighbors.retain(|n| n != label);
        }
        Ok(())
    }

    /// Connect two existing vertices with one new edge.
    ///
    /// Already-adjacent pairs are rejected without mutation. A self-loop
    /// (`v1 == v2`) inserts a single occurrence.
    pub fn connect(&mut self, v1: &str, v2: &str) -> GraphResult<()> {
        if !self.adjacency.contains_key(v1) {
            return Err(GraphError::VertexNotFound(v1.to_string()));
        }
        if !self.adjacency.contains_key(v2) {
            return Err(GraphError::VertexNotFound(v2.to_string()));
        }
        if self.neighbors(v1).iter().any(|n| n == v2) {
            return Err(GraphError::EdgeAlreadyExists {
                v1: v1.to_string(),
                v2: v2.to_string(),
            });
        }
        if let Some(adj) = self.adjacency.get_mut(v1) {
            adj.push(v2.to_string());
        }
        if v1 != v2 {
            if let Some(adj) = self.adjacency.get_mut(v2) {
                adj.push(v1.to_string());
            }
        }
        Ok(())
    }

    /// Remove one edge between two existing vertices.
    ///
    /// Returns `Ok(true)` when an edge was removed and `Ok(false)` when the
    /// pair was not adjacent; the not-adjacent case is a completed no-op,
    /// reported only through the return value and a debug diagnostic.
    pub fn disconnect(&mut self, v1: &str, v2: &str) -> GraphResult<bool> {
        if !self.adjacency.contains_key(v1) {
            return Err(GraphError::VertexNotFound(v1.to_string()));
        }
        if !self.adjacency.contains_key(v2) {
            return Err(GraphError::VertexNotFound(v2.to_string()));
        }
        if !self.neighbors(v1).iter().any(|n| n == v2) {
            log::debug!("disconnect({v1:?}, {v2:?}): vertices are not connected");
            return Ok(false);
        }
        remove_one(self.adjacency.get_mut(v1), v2);
        if v1 != v2 {
            remove_one(self.adjacency.get_mut(v2), v1);
        }
        Ok(true)
    }

    /// The stored key equal to `v`, borrowed from the graph itself.
    pub(crate) fn resolve<'g>(&'g self, v: &str) -> GraphResult<&'g str> {
        self.adjacency
            .get_key_value(v)
            .map(|(key, _)| key.as_str())
            .ok_or_else(|| GraphError::VertexNotFound(v.to_string()))
    }

    /// Adjacency sequence for `v`, or empty if `v` has no entry. Dangling
    /// labels introduced by an asymmetric bulk mapping read as isolated.
    pub(crate) fn neighbors(&self, v: &str) -> &[String] {
        self.adjacency.get(v).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

// Manual impl: the selector trait object is not Debug and is omitted.
impl fmt::Debug for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("labels", &self.labels)
            .field("adjacency", &self.adjacency)
            .finish_non_exhaustive()
    }
}

/// Remove exactly one occurrence of `target` from the sequence, if present.
fn remove_one(neighbors: Option<&mut Vec<String>>, target: &str) {
    if let Some(neighbors) = neighbors {
        if let Some(pos) = neighbors.iter().position(|n| n == target) {
            neighbors.remove(pos);
        }
    }
}
