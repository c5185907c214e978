pub mod cycle;
pub mod dependency_graph;
pub mod package;

pub use cycle::Cycle;
pub use dependency_graph::DependencyGraph;
pub use package::{PackageId, PackageVersion, LATEST_VERSION};
