//! Fluent API for building Graph instances through the validated path.

use crate::types::GraphResult;

use super::selector::VertexSelector;
use super::Graph;

/// Fluent builder for constructing a [`Graph`].
///
/// Unlike [`Graph::from_adjacency`], edges recorded here are replayed through
/// `connect` at build time, so symmetry is guaranteed and duplicate edges are
/// rejected.
#[derive(Default)]
pub struct GraphBuilder {
    vertices: Vec<String>,
    edges: Vec<(String, String)>,
    selector: Option<Box<dyn VertexSelector>>,
}

impl GraphBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a vertex. Redundant declarations are collapsed.
    pub fn vertex(mut self, label: impl Into<String>) -> Self {
        let label = label.into();
        if !self.vertices.contains(&label) {
            self.vertices.push(label);
        }
        self
    }

    /// Declare an edge. Endpoints are declared implicitly.
    pub fn edge(mut self, v1: impl Into<String>, v2: impl Into<String>) -> Self {
        let v1 = v1.into();
        let v2 = v2.into();
        self = self.vertex(v1.clone()).vertex(v2.clone());
        self.edges.push((v1, v2));
        self
    }

    /// Use an injected vertex-selection strategy instead of the default.
    pub fn selector(mut self, selector: Box<dyn VertexSelector>) -> Self {
        self.selector = Some(selector);
        self
    }

    /// Build the final graph, replaying every declaration through the
    /// validated mutation path.
    pub fn build(self) -> GraphResult<Graph> {
        let mut graph = match self.selector {
            Some(selector) => Graph::with_selector(selector),
            None => Graph::new(),
        };
        for label in self.vertices {
            graph.add_vertex(label)?;
        }
        for (v1, v2) in &self.edges {
            graph.connect(v1, v2)?;
        }
        Ok(graph)
    }
}
