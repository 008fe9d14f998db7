//! Error types for the ungraph library.

use thiserror::Error;

/// All errors that can occur in the ungraph library.
///
/// Absent-edge conditions are deliberately not represented here: `disconnect`
/// on a non-adjacent pair is a completed no-op reported through its return
/// value and a log diagnostic, never an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Referenced vertex label is absent from the graph.
    #[error("Vertex {0:?} not found")]
    VertexNotFound(String),

    /// Add on a label that is already present.
    #[error("Vertex {0:?} already exists")]
    VertexAlreadyExists(String),

    /// Connect on a pair that is already adjacent; the graph is unchanged.
    #[error("Edge between {v1:?} and {v2:?} already exists")]
    EdgeAlreadyExists { v1: String, v2: String },
}

/// Convenience result type for ungraph operations.
pub type GraphResult<T> = Result<T, GraphError>;
