/// Filesystem adapters for header discovery and output files
mod file_writer;
mod header_reader;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use header_reader::FileSystemHeaderSource;
