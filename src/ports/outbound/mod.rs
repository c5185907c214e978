/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (registry, file system, console).
pub mod dependency_source;
pub mod formatter;
pub mod output_presenter;
pub mod progress_reporter;

pub use dependency_source::DependencySource;
pub use formatter::GraphFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
