use crate::resolution::domain::{Cycle, DependencyGraph, PackageId};
use indexmap::IndexMap;
use std::collections::{HashMap, HashSet};
use tracing::warn;

/// CycleDetector service for finding circular dependencies
///
/// Pure algorithm over a finished [`DependencyGraph`]; it never mutates the
/// graph and performs no I/O.
pub struct CycleDetector;

impl CycleDetector {
    /// Maximum exploration path length to prevent stack exhaustion on
    /// pathological chains
    const MAX_PATH_LENGTH: usize = 1_000;

    /// Reports every distinct cycle reachable by depth-first exploration
    ///
    /// Each expanded package, in discovery order, starts a walk unless an
    /// earlier walk already reached it. A cycle is recorded when the walk
    /// steps onto a package already on the current path; the recorded
    /// sequence runs from that package's first occurrence back to itself.
    ///
    /// Cycles are deduplicated by exact sequence only: `[a, b, a]` and
    /// `[b, a, b]` are both kept when the walk enters the loop at different
    /// packages.
    ///
    /// A walk never holds more than `MAX_PATH_LENGTH` (1000) packages on its
    /// path. Longer branches are cut with a warning, so a cycle spanning more
    /// packages than that is not reported.
    pub fn detect(graph: &DependencyGraph) -> Vec<Cycle> {
        let mut walk = PathWalk::new(graph.adjacency());

        for start in graph.adjacency().keys() {
            if walk.reached.contains(start) {
                continue;
            }
            walk.visit(start);
        }

        walk.cycles
    }
}

/// Backtracking state shared by every walk of one detection run
struct PathWalk<'g> {
    adjacency: &'g IndexMap<PackageId, Vec<PackageId>>,
    path: Vec<&'g PackageId>,
    /// Position of each on-path package in `path`
    positions: HashMap<&'g PackageId, usize>,
    reached: HashSet<&'g PackageId>,
    seen: HashSet<Cycle>,
    cycles: Vec<Cycle>,
}

impl<'g> PathWalk<'g> {
    fn new(adjacency: &'g IndexMap<PackageId, Vec<PackageId>>) -> Self {
        Self {
            adjacency,
            path: Vec::new(),
            positions: HashMap::new(),
            reached: HashSet::new(),
            seen: HashSet::new(),
            cycles: Vec::new(),
        }
    }

    fn visit(&mut self, node: &'g PackageId) {
        if let Some(&first) = self.positions.get(node) {
            self.record_cycle(first, node);
            return;
        }

        if self.path.len() >= CycleDetector::MAX_PATH_LENGTH {
            warn!(
                package = %node,
                limit = CycleDetector::MAX_PATH_LENGTH,
                "cycle search path limit reached; branch truncated"
            );
            return;
        }

        self.reached.insert(node);
        self.positions.insert(node, self.path.len());
        self.path.push(node);

        let adjacency = self.adjacency;
        if let Some(dependencies) = adjacency.get(node) {
            for dep in dependencies {
                self.visit(dep);
            }
        }

        self.path.pop();
        self.positions.remove(node);
    }

    fn record_cycle(&mut self, first: usize, node: &PackageId) {
        let mut members: Vec<PackageId> =
            self.path[first..].iter().map(|p| (*p).clone()).collect();
        members.push(node.clone());

        let cycle = Cycle::new(members);
        if self.seen.insert(cycle.clone()) {
            self.cycles.push(cycle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(name: &str) -> PackageId {
        PackageId::new(name).unwrap()
    }

    fn graph(edges: &[(&str, Vec<&str>)]) -> DependencyGraph {
        let mut graph = DependencyGraph::new(id(edges[0].0));
        for (depth, (from, deps)) in edges.iter().enumerate() {
            graph.record(id(from), deps.iter().map(|d| id(d)).collect(), depth);
        }
        graph
    }

    fn rendered(cycles: &[Cycle]) -> Vec<String> {
        cycles.iter().map(Cycle::to_string).collect()
    }

    #[test]
    fn test_detect_acyclic_graph() {
        let g = graph(&[("A", vec!["B", "C"]), ("B", vec!["C"]), ("C", vec![])]);
        assert!(CycleDetector::detect(&g).is_empty());
    }

    #[test]
    fn test_detect_two_node_cycle_reported_once() {
        let g = graph(&[("A", vec!["B"]), ("B", vec!["A"])]);
        let cycles = CycleDetector::detect(&g);

        assert_eq!(rendered(&cycles), vec!["A -> B -> A"]);
    }

    #[test]
    fn test_detect_two_node_cycle_from_other_start() {
        let g = graph(&[("B", vec!["A"]), ("A", vec!["B"])]);
        let cycles = CycleDetector::detect(&g);

        assert_eq!(rendered(&cycles), vec!["B -> A -> B"]);
    }

    #[test]
    fn test_detect_self_loop() {
        let g = graph(&[("A", vec!["A", "B"]), ("B", vec![])]);
        assert_eq!(rendered(&CycleDetector::detect(&g)), vec!["A -> A"]);
    }

    #[test]
    fn test_detect_cycle_below_root() {
        let g = graph(&[
            ("root", vec!["x"]),
            ("x", vec!["y"]),
            ("y", vec!["z"]),
            ("z", vec!["x"]),
        ]);
        assert_eq!(rendered(&CycleDetector::detect(&g)), vec!["x -> y -> z -> x"]);
    }

    #[test]
    fn test_detect_keeps_rotations_entered_at_different_packages() {
        let g = graph(&[
            ("R", vec!["X", "Y"]),
            ("X", vec!["A"]),
            ("Y", vec!["B"]),
            ("A", vec!["B"]),
            ("B", vec!["A"]),
        ]);
        let cycles = CycleDetector::detect(&g);

        assert_eq!(rendered(&cycles), vec!["A -> B -> A", "B -> A -> B"]);
    }

    #[test]
    fn test_detect_deduplicates_identical_sequences() {
        let g = graph(&[
            ("R", vec!["X", "Y"]),
            ("X", vec!["A"]),
            ("Y", vec!["A"]),
            ("A", vec!["B"]),
            ("B", vec!["A"]),
        ]);
        assert_eq!(rendered(&CycleDetector::detect(&g)), vec!["A -> B -> A"]);
    }

    #[test]
    fn test_detect_multiple_distinct_cycles() {
        let g = graph(&[
            ("A", vec!["B", "C"]),
            ("B", vec!["A"]),
            ("C", vec!["D"]),
            ("D", vec!["C"]),
        ]);
        assert_eq!(
            rendered(&CycleDetector::detect(&g)),
            vec!["A -> B -> A", "C -> D -> C"]
        );
    }

    #[test]
    fn test_detect_ignores_unexpanded_frontier_nodes() {
        let g = graph(&[("A", vec!["B", "C"]), ("B", vec!["D"])]);
        assert!(CycleDetector::detect(&g).is_empty());
    }

    #[test]
    fn test_detect_does_not_mutate_graph() {
        let g = graph(&[("A", vec!["B"]), ("B", vec!["A"])]);
        let before = g.clone();
        let _ = CycleDetector::detect(&g);
        assert_eq!(g, before);
    }

    #[test]
    fn test_detect_empty_graph() {
        let g = DependencyGraph::new(id("A"));
        assert!(CycleDetector::detect(&g).is_empty());
    }

    fn ring(len: usize) -> DependencyGraph {
        let name = |i: usize| id(&format!("n{}", i));
        let mut graph = DependencyGraph::new(name(0));
        for i in 0..len {
            graph.record(name(i), vec![name((i + 1) % len)], i);
        }
        graph
    }

    #[test]
    fn test_detect_cycle_at_path_limit() {
        let cycles = CycleDetector::detect(&ring(CycleDetector::MAX_PATH_LENGTH));
        assert_eq!(cycles.len(), 1);
        assert_eq!(cycles[0].len(), CycleDetector::MAX_PATH_LENGTH);
    }

    #[test]
    fn test_detect_cycle_beyond_path_limit_is_not_reported() {
        let cycles = CycleDetector::detect(&ring(CycleDetector::MAX_PATH_LENGTH + 100));
        assert!(cycles.is_empty());
    }
}
