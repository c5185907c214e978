use clap::Parser;
use std::path::PathBuf;

use deptree::application::dto::OutputFormat;
use deptree::config::ConfigOverrides;

/// Resolve transitive package dependencies and report circular ones
#[derive(Parser, Debug)]
#[command(name = "deptree")]
#[command(version)]
#[command(
    about = "Resolve transitive package dependencies and report circular ones",
    long_about = None
)]
pub struct Args {
    /// Configuration file (defaults to ./deptree.config.yml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Package to start resolution from
    #[arg(short, long, value_name = "NAME")]
    pub package: Option<String>,

    /// Version of the start package (defaults to "latest")
    #[arg(long, value_name = "VERSION")]
    pub package_version: Option<String>,

    /// Registry base URL (remote mode) or fixture file path (local and test modes)
    #[arg(short, long, value_name = "URL_OR_PATH")]
    pub repository: Option<String>,

    /// Repository mode: local, remote or test
    #[arg(short, long, value_name = "MODE")]
    pub mode: Option<String>,

    /// Number of expansion levels (defaults to 3)
    #[arg(short = 'd', long, value_name = "N", allow_negative_numbers = true)]
    pub max_depth: Option<i64>,

    /// Print the level-order tree instead of the flat listing
    #[arg(short, long)]
    pub tree: bool,

    /// Output format: list, tree or json (takes precedence over --tree)
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Exit with code 1 when dependency cycles are found
    #[arg(long)]
    pub fail_on_cycles: bool,

    /// Print the effective configuration before resolving
    #[arg(long)]
    pub show_config: bool,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Settings given on the command line, to be merged over the config file
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            package_name: self.package.clone(),
            repository_url: self.repository.clone(),
            repository_mode: self.mode.clone(),
            package_version: self.package_version.clone(),
            max_depth: self.max_depth,
            tree_output: self.tree.then_some(true),
        }
    }

    /// Format to render with: `--format`, else `--tree`/`tree_output`
    pub fn output_format(&self, tree_output: bool) -> OutputFormat {
        self.format
            .unwrap_or_else(|| OutputFormat::from_tree_flag(tree_output))
    }
}
