use crate::adapters::outbound::filesystem::FixtureDependencySource;
use crate::adapters::outbound::network::RegistryDependencySource;
use crate::config::{RepositoryMode, ResolverConfig};
use crate::ports::outbound::DependencySource;
use crate::shared::Result;
use tracing::{debug, info};

/// Factory for selecting the dependency source from the repository mode
///
/// The source is chosen once per run; the graph builder only ever sees the
/// [`DependencySource`] port.
pub struct SourceFactory;

impl SourceFactory {
    /// Creates the dependency source described by `config`
    ///
    /// * `remote` - package registry rooted at `repository_url`
    /// * `local`, `test` - JSON fixture file at `repository_url`
    ///
    /// A fixture that cannot be loaded does not fail here: every lookup
    /// against it fails instead, and the reason is returned alongside the
    /// source so the caller can warn once.
    ///
    /// # Errors
    /// Returns an error if the registry URL cannot be parsed or the HTTP
    /// client cannot be built.
    pub fn create(config: &ResolverConfig) -> Result<(Box<dyn DependencySource>, Option<String>)> {
        match config.repository_mode {
            RepositoryMode::Remote => {
                info!(registry = %config.repository_url, "using registry dependency source");
                let source = RegistryDependencySource::new(
                    &config.repository_url,
                    config.package.clone(),
                    config.package_version.clone(),
                )?;
                Ok((Box::new(source), None))
            }
            RepositoryMode::Local | RepositoryMode::Test => {
                info!(
                    fixture = %config.repository_url,
                    mode = %config.repository_mode,
                    "using fixture dependency source"
                );
                let source = FixtureDependencySource::load(&config.repository_url);
                debug!(
                    fixture = %source.path().display(),
                    packages = source.package_count(),
                    "fixture ready"
                );
                let load_error = source.load_error().map(str::to_string);
                Ok((Box::new(source), load_error))
            }
        }
    }

    /// Returns a progress message naming where dependencies come from
    pub fn progress_message(config: &ResolverConfig) -> String {
        match config.repository_mode {
            RepositoryMode::Remote => format!("🌐 Querying registry: {}", config.repository_url),
            RepositoryMode::Local | RepositoryMode::Test => {
                format!("📂 Reading fixture: {}", config.repository_url)
            }
        }
    }
}
