//! Derived structural analyses — regularity, completeness, reachability,
//! connectivity, cycle and tree detection.
//!
//! All predicates are built on the query layer. The ones that start from an
//! arbitrary vertex are symmetric in that choice, so any selection strategy
//! yields the same boolean result.

use std::collections::HashSet;

use crate::types::GraphResult;

use super::Graph;

impl Graph {
    /// Whether every vertex has the same degree as an arbitrarily chosen
    /// reference vertex. Vacuously true on the empty graph.
    pub fn is_regular(&self) -> bool {
        let Some(reference) = self.any_vertex() else {
            return true;
        };
        let reference_degree = self.degree(reference);
        self.vertices().all(|v| self.degree(v) == reference_degree)
    }

    /// Whether every vertex is directly connected to all others, i.e. every
    /// degree equals `order - 1`. Meaningful for simple graphs (no self-loops
    /// or parallel edges). Vacuously true on the empty graph.
    pub fn is_complete(&self) -> bool {
        let Some(target) = self.order().checked_sub(1) else {
            return true;
        };
        self.vertices().all(|v| self.degree(v) == Ok(target))
    }

    /// The set of all vertices reachable from `v`, including `v` itself.
    ///
    /// Iterative work-stack exploration with a visited-set guard, so it
    /// terminates on any finite graph, cycles included.
    pub fn transitive_closure(&self, v: &str) -> GraphResult<HashSet<String>> {
        let root = self.resolve(v)?;
        let mut visited: HashSet<&str> = HashSet::new();
        let mut stack = vec![root];
        while let Some(current) = stack.pop() {
            if !visited.insert(current) {
                continue;
            }
            for neighbor in self.neighbors(current) {
                if !visited.contains(neighbor.as_str()) {
                    stack.push(neighbor.as_str());
                }
            }
        }
        Ok(visited.into_iter().map(String::from).collect())
    }

    /// Whether at least one path exists between every pair of vertices, i.e.
    /// the closure from an arbitrary vertex covers the full vertex set.
    /// Vacuously true on the empty graph.
    pub fn is_connected(&self) -> bool {
        let Some(start) = self.any_vertex() else {
            return true;
        };
        match self.transitive_closure(start) {
            Ok(reached) => {
                let all: HashSet<&str> = self.vertices().collect();
                reached.len() == all.len() && reached.iter().all(|v| all.contains(v.as_str()))
            }
            Err(_) => false,
        }
    }

    /// Whether `root` lies on a cycle reachable from itself.
    ///
    /// Depth-first search tracking the current path (not a global visited
    /// set); the immediate parent edge is skipped so a plain back-edge to the
    /// edge just taken is not flagged. Only inspects the component reachable
    /// from `root` — a false result does not certify the whole graph acyclic.
    pub fn has_cycle_from(&self, root: &str) -> GraphResult<bool> {
        let root = self.resolve(root)?;
        let mut path: Vec<&str> = Vec::new();
        Ok(self.cycle_search(root, root, &mut path))
    }

    fn cycle_search<'g>(&'g self, v: &'g str, parent: &str, path: &mut Vec<&'g str>) -> bool {
        if path.contains(&v) {
            return true;
        }
        path.push(v);
        for neighbor in self.neighbors(v) {
            if neighbor != parent && self.cycle_search(neighbor.as_str(), v, path) {
                return true;
            }
        }
        path.pop();
        false
    }

    /// Whether the graph is a tree: connected AND acyclic from an arbitrary
    /// vertex. Both conditions are necessary. Vacuously true on the empty
    /// graph.
    pub fn is_tree(&self) -> bool {
        let Some(root) = self.any_vertex() else {
            return true;
        };
        self.is_connected() && matches!(self.has_cycle_from(root), Ok(false))
    }
}
