use crate::ports::outbound::DependencySource;
use crate::resolution::domain::{PackageId, PackageVersion};
use crate::shared::Result;
use indexmap::IndexMap;
use reqwest::Url;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

/// Maximum length of a package name or version placed in a request URL
const MAX_URL_COMPONENT_LENGTH: usize = 255;

/// Package manifest as served by the registry. Only the dependency names
/// matter; the version ranges are ignored.
#[derive(Debug, Deserialize)]
struct RegistryManifest {
    #[serde(default)]
    dependencies: Option<IndexMap<String, serde_json::Value>>,
}

/// RegistryDependencySource adapter for looking up dependencies over HTTP
///
/// Issues one blocking `GET <base>/<package>/<version>` per lookup. The root
/// package is requested at the configured version; every other package is
/// requested at `latest`, since only the root's exact version is pinned by
/// the user.
///
/// A single attempt is made per package. Transport errors, non-success
/// statuses and malformed bodies are returned as errors, which the graph
/// builder records as "no dependencies".
#[derive(Debug)]
pub struct RegistryDependencySource {
    client: reqwest::blocking::Client,
    base_url: Url,
    root: PackageId,
    root_version: PackageVersion,
}

impl RegistryDependencySource {
    /// Creates a registry source rooted at `root`
    ///
    /// # Errors
    /// Returns an error if `base_url` is not an absolute http(s) URL or the
    /// HTTP client cannot be built
    pub fn new(base_url: &str, root: PackageId, root_version: PackageVersion) -> Result<Self> {
        let base_url = Self::parse_base_url(base_url)?;
        let user_agent = format!("deptree/{}", env!("CARGO_PKG_VERSION"));
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url,
            root,
            root_version,
        })
    }

    fn parse_base_url(base_url: &str) -> Result<Url> {
        let trimmed = base_url.trim().trim_end_matches('/');
        let url = Url::parse(trimmed)
            .map_err(|e| anyhow::anyhow!("Invalid registry URL '{}': {}", base_url, e))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            anyhow::bail!(
                "Invalid registry URL '{}': only http and https are supported",
                base_url
            );
        }
        Ok(url)
    }

    /// Version requested for `package`
    fn version_for(&self, package: &PackageId) -> &str {
        if *package == self.root {
            self.root_version.as_str()
        } else {
            crate::resolution::domain::LATEST_VERSION
        }
    }

    /// Validates a path component before it is placed in the URL
    fn validate_url_component(component: &str, component_type: &str) -> Result<()> {
        // Security: Length limit to prevent DoS
        if component.len() > MAX_URL_COMPONENT_LENGTH {
            anyhow::bail!(
                "{} is too long ({} bytes). Maximum allowed: {} bytes",
                component_type,
                component.len(),
                MAX_URL_COMPONENT_LENGTH
            );
        }
        if component.chars().any(char::is_control) {
            anyhow::bail!("{} contains control characters", component_type);
        }
        // Security: Prevent path traversal on the registry host
        if component.contains("..") {
            anyhow::bail!(
                "Security: {} contains '..' which is not allowed",
                component_type
            );
        }
        if component.contains('\\') {
            anyhow::bail!(
                "Security: {} contains backslashes which are not allowed",
                component_type
            );
        }
        Ok(())
    }

    /// Percent-encodes a package name as one path segment, keeping a leading
    /// scope marker readable (`@scope/name` becomes `@scope%2Fname`)
    fn encode_package(package: &str) -> String {
        match package.strip_prefix('@') {
            Some(scoped) => format!("@{}", urlencoding::encode(scoped)),
            None => urlencoding::encode(package).into_owned(),
        }
    }

    fn manifest_url(&self, package: &PackageId) -> Result<String> {
        let version = self.version_for(package);
        Self::validate_url_component(package.as_str(), "Package name")?;
        Self::validate_url_component(version, "Version")?;

        Ok(format!(
            "{}/{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            Self::encode_package(package.as_str()),
            urlencoding::encode(version)
        ))
    }

    fn fetch_manifest(&self, url: &str) -> Result<RegistryManifest> {
        let response = self.client.get(url).send()?;

        if !response.status().is_success() {
            anyhow::bail!("Registry returned status code {} for {}", response.status(), url);
        }

        let manifest: RegistryManifest = response.json()?;
        Ok(manifest)
    }

    /// Extracts dependency names in document order, skipping names that are
    /// not valid identifiers
    fn dependency_names(manifest: RegistryManifest) -> Vec<PackageId> {
        manifest
            .dependencies
            .unwrap_or_default()
            .into_keys()
            .filter_map(|name| match PackageId::new(name.clone()) {
                Ok(id) => Some(id),
                Err(e) => {
                    warn!(dependency = %name, error = %e, "skipping invalid dependency name");
                    None
                }
            })
            .collect()
    }
}

impl DependencySource for RegistryDependencySource {
    fn resolve(&self, package: &PackageId) -> Result<Vec<PackageId>> {
        let url = self.manifest_url(package)?;
        debug!(%url, "fetching package manifest");
        let manifest = self.fetch_manifest(&url)?;
        Ok(Self::dependency_names(manifest))
    }
}
