//! Injectable strategies for picking an arbitrary representative vertex.
//!
//! Every analysis call site needs only "some vertex", never a specific one,
//! so the default is deterministic to keep those checks reproducible.

use rand::seq::SliceRandom;

/// Strategy for choosing one vertex out of the graph's label list.
pub trait VertexSelector {
    /// Pick a vertex from `labels`, or `None` if the graph is empty.
    fn pick<'a>(&self, labels: &'a [String]) -> Option<&'a str>;
}

/// Deterministic default: the first vertex in insertion order.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstInOrder;

impl VertexSelector for FirstInOrder {
    fn pick<'a>(&self, labels: &'a [String]) -> Option<&'a str> {
        labels.first().map(String::as_str)
    }
}

/// Uniform random choice, for callers that want a non-deterministic pick.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSelector;

impl VertexSelector for RandomSelector {
    fn pick<'a>(&self, labels: &'a [String]) -> Option<&'a str> {
        labels.choose(&mut rand::thread_rng()).map(String::as_str)
    }
}
