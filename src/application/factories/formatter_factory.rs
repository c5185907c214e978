use crate::adapters::outbound::formatters::{JsonFormatter, ListFormatter, TreeFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::GraphFormatter;

/// Factory for creating graph formatters
///
/// Encapsulates the mapping from an [`OutputFormat`] to the adapter that
/// renders it.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Examples
    /// ```
    /// use deptree::application::dto::OutputFormat;
    /// use deptree::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Tree);
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn GraphFormatter> {
        match format {
            OutputFormat::List => Box::new(ListFormatter::new()),
            OutputFormat::Tree => Box::new(TreeFormatter::new()),
            OutputFormat::Json => Box::new(JsonFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    ///
    /// # Examples
    /// ```
    /// use deptree::application::dto::OutputFormat;
    /// use deptree::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputFormat::Json);
    /// assert_eq!(message, "📝 Rendering dependency graph as JSON...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::List => "📝 Rendering dependency listing...",
            OutputFormat::Tree => "📝 Rendering dependency tree...",
            OutputFormat::Json => "📝 Rendering dependency graph as JSON...",
        }
    }
}
