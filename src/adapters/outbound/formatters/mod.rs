/// Formatter adapters for the supported output formats
mod json_formatter;
mod list_formatter;
mod tree_formatter;

pub use json_formatter::JsonFormatter;
pub use list_formatter::ListFormatter;
pub use tree_formatter::TreeFormatter;
