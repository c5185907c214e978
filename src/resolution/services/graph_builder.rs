use crate::ports::outbound::DependencySource;
use crate::resolution::domain::{DependencyGraph, PackageId};
use std::collections::{HashSet, VecDeque};
use tracing::{debug, warn};

/// GraphBuilder service for breadth-first dependency resolution
///
/// Pulls edges from a [`DependencySource`] one package at a time and
/// assembles them into a [`DependencyGraph`]. The traversal is sequential,
/// so level assignment and key order are deterministic for a deterministic
/// source.
pub struct GraphBuilder;

impl GraphBuilder {
    /// Builds the dependency graph reachable from `start`
    ///
    /// # Arguments
    /// * `start` - The root package, expanded at depth 0
    /// * `source` - Where direct dependencies are looked up
    /// * `max_depth` - Number of expansion levels; packages first reached at
    ///   this depth are recorded only as values, never expanded
    ///
    /// # Returns
    /// The adjacency mapping in discovery order. A failed lookup is recorded
    /// as an empty dependency list and listed in
    /// [`DependencyGraph::unresolved`]; it never aborts the traversal.
    pub fn build<S>(start: &PackageId, source: &S, max_depth: usize) -> DependencyGraph
    where
        S: DependencySource + ?Sized,
    {
        let mut graph = DependencyGraph::new(start.clone());
        let mut visited: HashSet<PackageId> = HashSet::new();
        let mut frontier: VecDeque<(PackageId, usize)> = VecDeque::new();
        frontier.push_back((start.clone(), 0));

        while let Some((current, depth)) = frontier.pop_front() {
            if visited.contains(&current) || depth >= max_depth {
                continue;
            }
            visited.insert(current.clone());

            let dependencies = match source.resolve(&current) {
                Ok(deps) => {
                    debug!(package = %current, depth, count = deps.len(), "resolved dependencies");
                    deps
                }
                Err(e) => {
                    warn!(package = %current, depth, error = %e, "dependency lookup failed");
                    graph.mark_unresolved(current.clone());
                    Vec::new()
                }
            };

            for dep in &dependencies {
                if !visited.contains(dep) {
                    frontier.push_back((dep.clone(), depth + 1));
                }
            }
            graph.record(current, dependencies, depth);
        }

        graph
    }
}
