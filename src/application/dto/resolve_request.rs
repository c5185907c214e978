use crate::resolution::domain::PackageId;

/// ResolveRequest - Internal request DTO for the resolution use case
///
/// Carries only what the traversal needs; the dependency source itself is
/// injected into the use case.
#[derive(Debug, Clone)]
pub struct ResolveRequest {
    /// Package the traversal starts from
    pub package: PackageId,
    /// Number of expansion levels, at least 1 for a non-empty graph
    pub max_depth: usize,
}

impl ResolveRequest {
    pub fn new(package: PackageId, max_depth: usize) -> Self {
        Self { package, max_depth }
    }
}
