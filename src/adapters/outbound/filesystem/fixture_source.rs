use crate::ports::outbound::DependencySource;
use crate::resolution::domain::PackageId;
use crate::shared::error::DeptreeError;
use crate::shared::security::read_regular_file;
use crate::shared::Result;
use indexmap::IndexMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Fixture contents: package identifier to its ordered dependency list
type FixtureEntries = IndexMap<String, Vec<String>>;

#[derive(Debug)]
enum FixtureState {
    Loaded(FixtureEntries),
    /// The file could not be read or parsed; every lookup reports this
    Unavailable(String),
}

/// FixtureDependencySource adapter for offline resolution
///
/// Loads a JSON object mapping package identifiers to arrays of dependency
/// identifiers once, before traversal, and answers every lookup from memory.
/// Packages missing from the fixture have no dependencies, and empty
/// dependency names are skipped with a warning.
#[derive(Debug)]
pub struct FixtureDependencySource {
    path: PathBuf,
    state: FixtureState,
}

impl FixtureDependencySource {
    /// Loads the fixture at `path`
    ///
    /// Never fails: an unreadable or malformed fixture yields a source whose
    /// lookups all fail, which the traversal records as empty dependency
    /// lists. Use [`Self::load_error`] to surface the problem to the user.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let state = match Self::read_entries(&path) {
            Ok(entries) => {
                debug!(path = %path.display(), packages = entries.len(), "loaded fixture");
                FixtureState::Loaded(entries)
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "fixture unavailable");
                FixtureState::Unavailable(e.to_string())
            }
        };
        Self { path, state }
    }

    /// Builds a source from in-memory entries
    pub fn from_entries<I, K, V, D>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: IntoIterator<Item = D>,
        D: Into<String>,
    {
        let entries = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into_iter().map(Into::into).collect()))
            .collect();
        Self {
            path: PathBuf::from("<memory>"),
            state: FixtureState::Loaded(entries),
        }
    }

    fn read_entries(path: &Path) -> Result<FixtureEntries> {
        let content = read_regular_file(path, "fixture file").map_err(|e| {
            DeptreeError::FixtureReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
        })?;

        serde_json::from_str(&content).map_err(|e| {
            DeptreeError::FixtureReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Why the fixture could not be loaded, if it could not
    pub fn load_error(&self) -> Option<&str> {
        match &self.state {
            FixtureState::Loaded(_) => None,
            FixtureState::Unavailable(reason) => Some(reason),
        }
    }

    /// Number of packages listed in the fixture
    pub fn package_count(&self) -> usize {
        match &self.state {
            FixtureState::Loaded(entries) => entries.len(),
            FixtureState::Unavailable(_) => 0,
        }
    }
}

impl DependencySource for FixtureDependencySource {
    fn resolve(&self, package: &PackageId) -> Result<Vec<PackageId>> {
        let entries = match &self.state {
            FixtureState::Loaded(entries) => entries,
            FixtureState::Unavailable(reason) => anyhow::bail!("{}", reason),
        };

        let Some(dependencies) = entries.get(package.as_str()) else {
            debug!(package = %package, "package not listed in fixture");
            return Ok(Vec::new());
        };

        Ok(dependencies
            .iter()
            .filter_map(|dep| match PackageId::new(dep.as_str()) {
                Ok(id) => Some(id),
                Err(e) => {
                    warn!(
                        package = %package,
                        dependency = %dep,
                        error = %e,
                        "skipping invalid dependency name"
                    );
                    None
                }
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn id(name: &str) -> PackageId {
        PackageId::new(name).unwrap()
    }

    fn names(ids: Vec<PackageId>) -> Vec<String> {
        ids.into_iter().map(|id| id.to_string()).collect()
    }

    #[test]
    fn test_load_fixture_success() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("graph.json");
        fs::write(&path, r#"{"A": ["C", "B"], "B": ["C"], "C": []}"#).unwrap();

        let source = FixtureDependencySource::load(&path);
        assert!(source.load_error().is_none());
        assert_eq!(source.package_count(), 3);
        assert_eq!(names(source.resolve(&id("A")).unwrap()), vec!["C", "B"]);
        assert!(source.resolve(&id("C")).unwrap().is_empty());
    }

    #[test]
    fn test_unknown_package_has_no_dependencies() {
        let source = FixtureDependencySource::from_entries([("A", vec!["B"])]);
        assert!(source.resolve(&id("Z")).unwrap().is_empty());
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let source = FixtureDependencySource::from_entries([("React", vec!["loose-envify"])]);
        assert!(source.resolve(&id("react")).unwrap().is_empty());
        assert_eq!(names(source.resolve(&id("React")).unwrap()), vec!["loose-envify"]);
    }

    #[test]
    fn test_load_missing_file_degrades_to_failing_lookups() {
        let source = FixtureDependencySource::load("/nonexistent/graph.json");
        assert!(source.load_error().is_some());
        assert_eq!(source.package_count(), 0);

        let result = source.resolve(&id("A"));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Failed to read fixture file"));
    }

    #[test]
    fn test_load_malformed_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("graph.json");
        fs::write(&path, r#"{"A": "B"}"#).unwrap();

        let source = FixtureDependencySource::load(&path);
        assert!(source.load_error().is_some());
        assert!(source.resolve(&id("A")).is_err());
    }

    #[test]
    fn test_empty_dependency_name_is_skipped() {
        let source = FixtureDependencySource::from_entries([("A", vec!["B", "", "C"])]);
        assert_eq!(names(source.resolve(&id("A")).unwrap()), vec!["B", "C"]);
    }

    #[test]
    fn test_long_dependency_name_kept_next_to_siblings() {
        let long_name = "x".repeat(300);
        let source = FixtureDependencySource::from_entries([
            ("A", vec!["B".to_string(), long_name.clone()]),
            ("B", vec!["C".to_string()]),
        ]);

        assert_eq!(names(source.resolve(&id("A")).unwrap()), vec!["B".to_string(), long_name]);
        assert_eq!(names(source.resolve(&id("B")).unwrap()), vec!["C"]);
    }
}
