//! ungraph — in-memory undirected graph with adjacency-list storage.
//!
//! Vertices are opaque string labels; edges are unordered pairs stored
//! redundantly in both endpoints' adjacency sequences. On top of the store
//! sit structural queries (order, adjacency, degree) and classic analyses:
//! regularity, completeness, transitive closure, connectivity, cycle and
//! tree detection, and an iterative depth-first traversal.

pub mod cli;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{depth_first, FirstInOrder, Graph, GraphBuilder, RandomSelector, VertexSelector};
pub use types::{GraphError, GraphResult};
