use crate::application::dto::ResolveResponse;
use crate::shared::Result;

/// GraphFormatter port for rendering a resolved dependency graph
///
/// Implementations turn the graph and its cycle findings into text
/// (flat listing, indented tree, JSON document).
pub trait GraphFormatter {
    /// Formats the resolution result
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, response: &ResolveResponse) -> Result<String>;
}
