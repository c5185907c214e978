use crate::resolution::domain::{Cycle, DependencyGraph};

/// ResolveResponse - Result of one resolution run
///
/// Holds everything presentation needs: the adjacency mapping and the
/// cycles found in it.
#[derive(Debug, Clone)]
pub struct ResolveResponse {
    pub graph: DependencyGraph,
    pub cycles: Vec<Cycle>,
}

impl ResolveResponse {
    pub fn new(graph: DependencyGraph, cycles: Vec<Cycle>) -> Self {
        Self { graph, cycles }
    }

    pub fn has_cycles(&self) -> bool {
        !self.cycles.is_empty()
    }
}
