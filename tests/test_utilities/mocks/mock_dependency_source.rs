use deptree::prelude::*;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

/// Mock DependencySource with call counting and failure injection
#[derive(Default, Clone)]
pub struct MockDependencySource {
    edges: HashMap<String, Vec<String>>,
    failing: HashSet<String>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockDependencySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dependencies(mut self, package: &str, dependencies: &[&str]) -> Self {
        self.edges.insert(
            package.to_string(),
            dependencies.iter().map(|d| d.to_string()).collect(),
        );
        self
    }

    /// Every lookup of `package` fails
    pub fn with_failure(mut self, package: &str) -> Self {
        self.failing.insert(package.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self, package: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.as_str() == package)
            .count()
    }
}

impl DependencySource for MockDependencySource {
    fn resolve(&self, package: &PackageId) -> Result<Vec<PackageId>> {
        self.calls.lock().unwrap().push(package.to_string());

        if self.failing.contains(package.as_str()) {
            anyhow::bail!("connection refused while fetching {}", package);
        }

        self.edges
            .get(package.as_str())
            .map(|deps| deps.iter().map(PackageId::new).collect())
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}
