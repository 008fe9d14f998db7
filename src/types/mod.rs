//! Shared types for the ungraph library.

pub mod error;

pub use error::{GraphError, GraphResult};
