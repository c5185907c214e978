use super::PackageId;
use indexmap::{IndexMap, IndexSet};
use std::collections::HashMap;

/// DependencyGraph aggregate produced by one traversal
///
/// Holds the adjacency mapping in discovery order. Every key was expanded
/// exactly once; values may name packages that were never expanded because
/// the depth bound cut them off.
#[derive(Debug, Clone, PartialEq)]
pub struct DependencyGraph {
    root: PackageId,
    adjacency: IndexMap<PackageId, Vec<PackageId>>,
    depths: HashMap<PackageId, usize>,
    unresolved: Vec<PackageId>,
}

impl DependencyGraph {
    pub fn new(root: PackageId) -> Self {
        Self {
            root,
            adjacency: IndexMap::new(),
            depths: HashMap::new(),
            unresolved: Vec::new(),
        }
    }

    /// Records the expansion of `package` at `depth`.
    pub(crate) fn record(
        &mut self,
        package: PackageId,
        dependencies: Vec<PackageId>,
        depth: usize,
    ) {
        self.depths.insert(package.clone(), depth);
        self.adjacency.insert(package, dependencies);
    }

    /// Remembers that the lookup for `package` failed; its entry stays empty.
    pub(crate) fn mark_unresolved(&mut self, package: PackageId) {
        self.unresolved.push(package);
    }

    pub fn root(&self) -> &PackageId {
        &self.root
    }

    pub fn adjacency(&self) -> &IndexMap<PackageId, Vec<PackageId>> {
        &self.adjacency
    }

    /// Direct dependencies of an expanded package, `None` if it was never expanded
    pub fn dependencies_of(&self, package: &str) -> Option<&[PackageId]> {
        self.adjacency.get(package).map(Vec::as_slice)
    }

    pub fn is_expanded(&self, package: &str) -> bool {
        self.adjacency.contains_key(package)
    }

    /// BFS depth at which `package` was expanded
    pub fn depth_of(&self, package: &str) -> Option<usize> {
        self.depths.get(package).copied()
    }

    /// Packages whose lookup failed and were recorded with no dependencies
    pub fn unresolved(&self) -> &[PackageId] {
        &self.unresolved
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    pub fn expanded_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    /// Iterates edges as `(from, to)` in discovery order
    pub fn edges(&self) -> impl Iterator<Item = (&PackageId, &PackageId)> {
        self.adjacency
            .iter()
            .flat_map(|(from, deps)| deps.iter().map(move |to| (from, to)))
    }

    /// Every package named in the graph, expanded or not, in first-seen order
    pub fn all_packages(&self) -> IndexSet<&PackageId> {
        let mut packages = IndexSet::new();
        for (from, deps) in &self.adjacency {
            packages.insert(from);
            packages.extend(deps.iter());
        }
        packages
    }
}
