//! Configuration file support for deptree.
//!
//! Provides YAML-based configuration through `deptree.config.yml` files,
//! merging with command-line overrides, and validation into the
//! [`ResolverConfig`] bundle consumed by the resolver.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::resolution::domain::{PackageId, PackageVersion};
use crate::shared::error::DeptreeError;
use crate::shared::security::read_regular_file;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "deptree.config.yml";

/// Default number of expansion levels
pub const DEFAULT_MAX_DEPTH: usize = 3;

/// A scalar that may be written as a YAML bool, number or string.
///
/// `max_depth: 3` and `max_depth: "3"` are both accepted, as are
/// `tree_output: true` and `tree_output: "true"`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ConfigScalar {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl ConfigScalar {
    fn as_bool(&self) -> Option<bool> {
        match self {
            ConfigScalar::Bool(b) => Some(*b),
            ConfigScalar::Text(s) => match s.trim() {
                "true" => Some(true),
                "false" => Some(false),
                _ => None,
            },
            _ => None,
        }
    }

    fn as_integer(&self) -> Option<i64> {
        match self {
            ConfigScalar::Integer(n) => Some(*n),
            ConfigScalar::Text(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

impl std::fmt::Display for ConfigScalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigScalar::Bool(b) => write!(f, "{}", b),
            ConfigScalar::Integer(n) => write!(f, "{}", n),
            ConfigScalar::Float(x) => write!(f, "{}", x),
            ConfigScalar::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub package_name: Option<String>,
    pub repository_url: Option<String>,
    pub repository_mode: Option<String>,
    pub package_version: Option<String>,
    pub max_depth: Option<ConfigScalar>,
    pub tree_output: Option<ConfigScalar>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Values given on the command line; each one replaces the file value.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub package_name: Option<String>,
    pub repository_url: Option<String>,
    pub repository_mode: Option<String>,
    pub package_version: Option<String>,
    pub max_depth: Option<i64>,
    pub tree_output: Option<bool>,
}

/// Where dependency data comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryMode {
    /// Offline fixture file on the local disk
    Local,
    /// Package registry over HTTP(S)
    Remote,
    /// Offline fixture file used for deterministic test runs
    Test,
}

impl std::str::FromStr for RepositoryMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim() {
            "local" => Ok(RepositoryMode::Local),
            "remote" => Ok(RepositoryMode::Remote),
            "test" => Ok(RepositoryMode::Test),
            other => Err(format!(
                "repository_mode must be 'local', 'remote' or 'test' (got '{}')",
                other
            )),
        }
    }
}

impl std::fmt::Display for RepositoryMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RepositoryMode::Local => write!(f, "local"),
            RepositoryMode::Remote => write!(f, "remote"),
            RepositoryMode::Test => write!(f, "test"),
        }
    }
}

/// Validated configuration bundle handed to the resolver.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolverConfig {
    pub package: PackageId,
    pub repository_url: String,
    pub repository_mode: RepositoryMode,
    pub package_version: PackageVersion,
    pub max_depth: usize,
    pub tree_output: bool,
}

impl ResolverConfig {
    /// Merges file values with overrides and validates the result.
    ///
    /// Every problem found is reported in a single
    /// [`DeptreeError::InvalidConfig`].
    pub fn from_sources(file: Option<&ConfigFile>, overrides: &ConfigOverrides) -> Result<Self> {
        let mut problems = Vec::new();

        let pick = |cli: &Option<String>, from_file: Option<&Option<String>>| {
            cli.clone()
                .or_else(|| from_file.and_then(|v| v.clone()))
                .map(|v| v.trim().to_string())
        };

        let package_name = pick(&overrides.package_name, file.map(|f| &f.package_name));
        let repository_url = pick(&overrides.repository_url, file.map(|f| &f.repository_url));
        let repository_mode = pick(&overrides.repository_mode, file.map(|f| &f.repository_mode));
        let package_version = pick(&overrides.package_version, file.map(|f| &f.package_version));

        let package = match package_name.as_deref() {
            None => {
                problems.push("package_name is missing".to_string());
                None
            }
            Some("") => {
                problems.push("package_name must not be empty".to_string());
                None
            }
            Some(name) => PackageId::new(name)
                .map_err(|e| problems.push(format!("package_name is invalid: {}", e)))
                .ok(),
        };

        let repository_url = match repository_url {
            Some(url) if !url.is_empty() => Some(url),
            Some(_) => {
                problems.push("repository_url must not be empty".to_string());
                None
            }
            None => {
                problems.push("repository_url is missing".to_string());
                None
            }
        };

        let repository_mode = match repository_mode.as_deref() {
            None => {
                problems.push("repository_mode is missing".to_string());
                None
            }
            Some(mode) => mode.parse::<RepositoryMode>().map_err(|e| problems.push(e)).ok(),
        };

        if let (Some(RepositoryMode::Remote), Some(url)) =
            (repository_mode, repository_url.as_deref())
        {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                problems.push(format!(
                    "repository_url must be an http(s) URL in remote mode (got '{}')",
                    url
                ));
            }
        }

        let package_version = match package_version {
            None => Some(PackageVersion::latest()),
            Some(v) => PackageVersion::new(v)
                .map_err(|e| problems.push(format!("package_version is invalid: {}", e)))
                .ok(),
        };

        let max_depth = match (overrides.max_depth, file.and_then(|f| f.max_depth.as_ref())) {
            (Some(depth), _) => Self::check_max_depth(depth, &mut problems),
            (None, Some(raw)) => match raw.as_integer() {
                Some(depth) => Self::check_max_depth(depth, &mut problems),
                None => {
                    problems.push(format!("max_depth must be a number (got '{}')", raw));
                    None
                }
            },
            (None, None) => Some(DEFAULT_MAX_DEPTH),
        };

        let tree_output = match (overrides.tree_output, file.and_then(|f| f.tree_output.as_ref())) {
            (Some(flag), _) => Some(flag),
            (None, Some(raw)) => match raw.as_bool() {
                Some(flag) => Some(flag),
                None => {
                    problems.push(format!("tree_output must be 'true' or 'false' (got '{}')", raw));
                    None
                }
            },
            (None, None) => Some(false),
        };

        match (
            package,
            repository_url,
            repository_mode,
            package_version,
            max_depth,
            tree_output,
        ) {
            (
                Some(package),
                Some(repository_url),
                Some(repository_mode),
                Some(package_version),
                Some(max_depth),
                Some(tree_output),
            ) if problems.is_empty() => Ok(Self {
                package,
                repository_url,
                repository_mode,
                package_version,
                max_depth,
                tree_output,
            }),
            _ => Err(DeptreeError::InvalidConfig { problems }.into()),
        }
    }

    fn check_max_depth(depth: i64, problems: &mut Vec<String>) -> Option<usize> {
        if depth < 1 {
            problems.push(format!("max_depth must be greater than 0 (got {})", depth));
            return None;
        }
        usize::try_from(depth)
            .map_err(|_| problems.push(format!("max_depth is too large (got {})", depth)))
            .ok()
    }

    /// Every effective parameter as `(key, value)`, in file order
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("package_name", self.package.to_string()),
            ("repository_url", self.repository_url.clone()),
            ("repository_mode", self.repository_mode.to_string()),
            ("package_version", self.package_version.to_string()),
            ("max_depth", self.max_depth.to_string()),
            ("tree_output", self.tree_output.to_string()),
        ]
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    if !path.exists() {
        return Err(DeptreeError::ConfigNotFound {
            path: path.to_path_buf(),
            suggestion: format!(
                "Create {} or pass the required settings as command-line flags.",
                CONFIG_FILENAME
            ),
        }
        .into());
    }

    let content = read_regular_file(path, "config file")?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).map_err(|e| {
        DeptreeError::ConfigParseError {
            path: path.to_path_buf(),
            details: e.to_string(),
        }
    })?;

    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
