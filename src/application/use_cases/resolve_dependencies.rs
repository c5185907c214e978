use crate::application::dto::{ResolveRequest, ResolveResponse};
use crate::ports::outbound::{DependencySource, ProgressReporter};
use crate::resolution::domain::PackageId;
use crate::resolution::services::{CycleDetector, GraphBuilder};
use crate::shared::Result;
use std::cell::{Cell, RefCell};
use std::collections::HashSet;

/// ResolveDependenciesUseCase - Core use case for dependency resolution
///
/// Builds the bounded dependency graph from a start package and runs cycle
/// detection over it.
///
/// # Type Parameters
/// * `S` - DependencySource implementation
/// * `PR` - ProgressReporter implementation
pub struct ResolveDependenciesUseCase<S, PR> {
    dependency_source: S,
    progress_reporter: PR,
}

impl<S, PR> ResolveDependenciesUseCase<S, PR>
where
    S: DependencySource,
    PR: ProgressReporter,
{
    /// Creates a new ResolveDependenciesUseCase with injected dependencies
    pub fn new(dependency_source: S, progress_reporter: PR) -> Self {
        Self {
            dependency_source,
            progress_reporter,
        }
    }

    /// Executes the resolution use case
    ///
    /// Lookup failures never abort the run; they are reported as warnings
    /// and the failed packages are listed in the response graph.
    pub fn execute(&self, request: ResolveRequest) -> Result<ResolveResponse> {
        // Step 1: Traverse
        self.progress_reporter.report(&format!(
            "🔎 Resolving dependencies of {} (max depth {})",
            request.package, request.max_depth
        ));

        let reporting_source = ReportingSource::new(
            &self.dependency_source,
            &self.progress_reporter,
            &request.package,
        );
        let graph = GraphBuilder::build(&request.package, &reporting_source, request.max_depth);

        self.progress_reporter.report_completion(&format!(
            "✅ Resolution complete: {} package(s) expanded, {} discovered, {} edge(s), {} unresolved",
            graph.expanded_count(),
            graph.all_packages().len(),
            graph.edge_count(),
            graph.unresolved().len()
        ));

        // Step 2: Detect cycles
        let cycles = CycleDetector::detect(&graph);
        if cycles.is_empty() {
            self.progress_reporter.report("✅ No dependency cycles detected");
        }

        Ok(ResolveResponse::new(graph, cycles))
    }
}

/// Wraps a source and reports each lookup as traversal progress
struct ReportingSource<'a, S, PR> {
    inner: &'a S,
    reporter: &'a PR,
    expanded: Cell<usize>,
    discovered: RefCell<HashSet<PackageId>>,
}

impl<'a, S, PR> ReportingSource<'a, S, PR>
where
    S: DependencySource,
    PR: ProgressReporter,
{
    fn new(inner: &'a S, reporter: &'a PR, start: &PackageId) -> Self {
        Self {
            inner,
            reporter,
            expanded: Cell::new(0),
            discovered: RefCell::new(HashSet::from([start.clone()])),
        }
    }
}

impl<S, PR> DependencySource for ReportingSource<'_, S, PR>
where
    S: DependencySource,
    PR: ProgressReporter,
{
    fn resolve(&self, package: &PackageId) -> Result<Vec<PackageId>> {
        let expanded = self.expanded.get() + 1;
        self.expanded.set(expanded);

        let result = self.inner.resolve(package);

        let mut discovered = self.discovered.borrow_mut();
        discovered.insert(package.clone());
        match &result {
            Ok(deps) => discovered.extend(deps.iter().cloned()),
            Err(e) => self.reporter.report_error(&format!(
                "⚠️  Warning: Failed to resolve dependencies of {}: {}",
                package, e
            )),
        }

        self.reporter
            .report_progress(expanded, discovered.len(), Some(package.as_str()));
        result
    }
}
