use crate::application::dto::ResolveResponse;
use crate::ports::outbound::GraphFormatter;
use crate::resolution::domain::{DependencyGraph, PackageId};
use crate::shared::Result;
use std::collections::{HashMap, HashSet, VecDeque};

/// Indentation added per tree level
const INDENT: &str = "  ";

/// Marker for a package whose subtree is printed elsewhere
const REPEATED_MARKER: &str = " (*)";

/// Marker for a package whose lookup failed
const UNRESOLVED_MARKER: &str = " (unresolved)";

/// TreeFormatter adapter for the indented level-order tree
///
/// Each package is placed under the parent that discovered it first in
/// breadth-first order, so its indentation equals its BFS level. Later
/// references to an already placed package (including edges that close a
/// cycle) are printed once more as a leaf marked `(*)`.
pub struct TreeFormatter;

/// Child list entry: the package and whether this edge owns its subtree
type TreeChildren<'g> = HashMap<&'g PackageId, Vec<(&'g PackageId, bool)>>;

impl TreeFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Computes the BFS spanning tree of the graph from its root
    fn spanning_tree(graph: &DependencyGraph) -> TreeChildren<'_> {
        let mut children: TreeChildren<'_> = HashMap::new();
        let mut placed: HashSet<&PackageId> = HashSet::new();
        let mut queue: VecDeque<&PackageId> = VecDeque::new();

        placed.insert(graph.root());
        queue.push_back(graph.root());

        while let Some(node) = queue.pop_front() {
            let Some(dependencies) = graph.dependencies_of(node.as_str()) else {
                continue;
            };
            let entry = children.entry(node).or_default();
            for dep in dependencies {
                let owned = placed.insert(dep);
                entry.push((dep, owned));
                if owned {
                    queue.push_back(dep);
                }
            }
        }

        children
    }

    fn render_node(
        graph: &DependencyGraph,
        children: &TreeChildren<'_>,
        node: &PackageId,
        level: usize,
        output: &mut String,
    ) {
        Self::push_line(graph, node, level, "", output);

        let Some(entries) = children.get(node) else {
            return;
        };
        for (child, owned) in entries {
            if *owned {
                Self::render_node(graph, children, child, level + 1, output);
            } else {
                Self::push_line(graph, child, level + 1, REPEATED_MARKER, output);
            }
        }
    }

    fn push_line(
        graph: &DependencyGraph,
        node: &PackageId,
        level: usize,
        marker: &str,
        output: &mut String,
    ) {
        output.push_str(&INDENT.repeat(level));
        output.push_str(node.as_str());
        output.push_str(marker);
        if graph.unresolved().contains(node) {
            output.push_str(UNRESOLVED_MARKER);
        }
        output.push('\n');
    }
}

impl Default for TreeFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphFormatter for TreeFormatter {
    fn format(&self, response: &ResolveResponse) -> Result<String> {
        let graph = &response.graph;
        let children = Self::spanning_tree(graph);

        let mut output = String::new();
        Self::render_node(graph, &children, graph.root(), 0, &mut output);
        Ok(output)
    }
}
