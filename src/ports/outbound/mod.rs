/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, console, Graphviz, etc.).
pub mod file_opener;
pub mod formatter;
pub mod graph_renderer;
pub mod header_source;
pub mod output_presenter;
pub mod progress_reporter;

pub use file_opener::FileOpener;
pub use formatter::HierarchyFormatter;
pub use graph_renderer::GraphRenderer;
pub use header_source::{HeaderSource, ReadLimit};
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
