use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Lets CI pipelines tell a clean graph apart from one with circular
/// dependencies and from outright failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Graph resolved; no cycles, or cycles reported without `--fail-on-cycles`
    Success = 0,
    /// Cycles were found and `--fail-on-cycles` was given
    CyclesDetected = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Configuration, file I/O or other application error
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::CyclesDetected => write!(f, "Cycles Detected (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors.
///
/// Fetch failures have no variant here: they never leave the traversal
/// and end up as empty dependency lists instead.
#[derive(Debug, Error)]
pub enum DeptreeError {
    #[error("Config file not found: {path}\n\n💡 Hint: {suggestion}")]
    ConfigNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse config file: {path}\nDetails: {details}\n\n💡 Hint: Ensure the file contains valid YAML syntax.")]
    ConfigParseError { path: PathBuf, details: String },

    #[error("Invalid configuration:\n{}\n\n💡 Hint: Fix the listed fields in the config file or override them with command-line flags.", format_problems(.problems))]
    InvalidConfig { problems: Vec<String> },

    #[error("Failed to read fixture file: {path}\nDetails: {details}\n\n💡 Hint: The fixture must be a JSON object mapping package names to arrays of dependency names.")]
    FixtureReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    /// Validation error for value objects
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}

fn format_problems(problems: &[String]) -> String {
    problems
        .iter()
        .map(|p| format!(" - {}", p))
        .collect::<Vec<_>>()
        .join("\n")
}
