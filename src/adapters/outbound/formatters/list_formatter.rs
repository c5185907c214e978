use crate::application::dto::ResolveResponse;
use crate::ports::outbound::GraphFormatter;
use crate::resolution::domain::PackageId;
use crate::shared::Result;

/// Placeholder shown for packages that were expanded and have no dependencies
const NO_DEPENDENCIES: &str = "(none)";

/// ListFormatter adapter for the flat listing
///
/// One line per expanded package in discovery order:
/// `package -> dep, dep`.
pub struct ListFormatter;

impl ListFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ListFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphFormatter for ListFormatter {
    fn format(&self, response: &ResolveResponse) -> Result<String> {
        let mut output = String::new();

        for (package, dependencies) in response.graph.adjacency() {
            let rendered = if dependencies.is_empty() {
                NO_DEPENDENCIES.to_string()
            } else {
                dependencies
                    .iter()
                    .map(PackageId::as_str)
                    .collect::<Vec<_>>()
                    .join(", ")
            };
            output.push_str(&format!("{} -> {}\n", package, rendered));
        }

        Ok(output)
    }
}
