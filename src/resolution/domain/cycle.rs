use super::PackageId;
use serde::Serialize;

/// A closed dependency path: the first and last identifiers are the same.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Cycle(Vec<PackageId>);

impl Cycle {
    /// Wraps a closed path. Callers guarantee `path.first() == path.last()`.
    pub(crate) fn new(path: Vec<PackageId>) -> Self {
        debug_assert!(path.len() >= 2 && path.first() == path.last());
        Self(path)
    }

    pub fn packages(&self) -> &[PackageId] {
        &self.0
    }

    /// The package the cycle was entered through
    pub fn start(&self) -> &PackageId {
        &self.0[0]
    }

    /// Number of edges in the cycle
    pub fn len(&self) -> usize {
        self.0.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Display for Cycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.0.iter().map(PackageId::as_str).collect();
        write!(f, "{}", names.join(" -> "))
    }
}
