use crate::resolution::domain::PackageId;
use crate::shared::Result;

/// DependencySource port for looking up direct dependencies
///
/// This port abstracts where dependency edges come from (a package registry,
/// an offline fixture, a test double). The concrete source is chosen once at
/// startup and handed to the graph builder.
pub trait DependencySource {
    /// Returns the direct dependencies of `package`, in the order the source
    /// lists them
    ///
    /// # Errors
    /// Returns an error if the lookup fails (transport failure, error status,
    /// malformed document, unreadable fixture). The graph builder records a
    /// failed package with no dependencies and keeps going.
    fn resolve(&self, package: &PackageId) -> Result<Vec<PackageId>>;
}

impl<S: DependencySource + ?Sized> DependencySource for &S {
    fn resolve(&self, package: &PackageId) -> Result<Vec<PackageId>> {
        (**self).resolve(package)
    }
}

impl<S: DependencySource + ?Sized> DependencySource for Box<S> {
    fn resolve(&self, package: &PackageId) -> Result<Vec<PackageId>> {
        (**self).resolve(package)
    }
}
