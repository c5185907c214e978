use crate::shared::error::DeptreeError;
use crate::shared::Result;
use serde::Serialize;
use std::borrow::Borrow;

/// Maximum length for package versions (security limit)
const MAX_VERSION_LENGTH: usize = 100;

/// Version marker meaning "whatever the registry currently publishes"
pub const LATEST_VERSION: &str = "latest";

/// NewType wrapper for a package identifier.
///
/// Identifiers are opaque: the only requirement is that they are non-empty.
/// Equality is exact string equality and no case folding or scope
/// normalization is applied, so `@Scope/Pkg` and `@scope/pkg` are different
/// packages.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PackageId(String);

impl PackageId {
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(DeptreeError::Validation {
                message: "Package identifier cannot be empty".to_string(),
            }
            .into());
        }

        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for PackageId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PackageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// NewType wrapper for the version requested for the root package
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageVersion(String);

impl PackageVersion {
    pub fn new(version: impl Into<String>) -> Result<Self> {
        let version = version.into();
        let trimmed = version.trim();
        if trimmed.is_empty() {
            return Err(DeptreeError::Validation {
                message: "Package version cannot be empty".to_string(),
            }
            .into());
        }

        if trimmed.len() > MAX_VERSION_LENGTH {
            return Err(DeptreeError::Validation {
                message: format!(
                    "Package version is too long ({} bytes). Maximum allowed: {} bytes",
                    trimmed.len(),
                    MAX_VERSION_LENGTH
                ),
            }
            .into());
        }

        Ok(Self(trimmed.to_string()))
    }

    /// The unpinned marker used for every non-root package
    pub fn latest() -> Self {
        Self(LATEST_VERSION.to_string())
    }

    pub fn is_latest(&self) -> bool {
        self.0 == LATEST_VERSION
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for PackageVersion {
    fn default() -> Self {
        Self::latest()
    }
}

impl std::fmt::Display for PackageVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
