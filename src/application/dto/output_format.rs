/// Output format enumeration for the rendered dependency graph
///
/// Shared by the CLI (to parse `--format`), the configuration layer (to
/// map `tree_output`) and the formatter factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One line per expanded package: `pkg -> dep, dep` (default)
    #[default]
    List,
    /// Indented level-order tree rooted at the start package
    Tree,
    /// Machine-readable JSON document with graph, cycles and failures
    Json,
}

impl OutputFormat {
    /// Maps the `tree_output` configuration flag onto a format
    pub fn from_tree_flag(tree_output: bool) -> Self {
        if tree_output {
            OutputFormat::Tree
        } else {
            OutputFormat::List
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "list" | "flat" => Ok(OutputFormat::List),
            "tree" => Ok(OutputFormat::Tree),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'list', 'tree' or 'json'",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::List => write!(f, "list"),
            OutputFormat::Tree => write!(f, "tree"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
