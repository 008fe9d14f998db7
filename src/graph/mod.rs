//! In-memory undirected graph operations — the core data structure.

pub mod analysis;
pub mod builder;
pub mod selector;
pub mod traversal;
pub mod undirected;

pub use builder::GraphBuilder;
pub use selector::{FirstInOrder, RandomSelector, VertexSelector};
pub use traversal::depth_first;
pub use undirected::Graph;
