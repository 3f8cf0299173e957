/// Mock implementations for testing
mod mock_header_source;
mod mock_progress_reporter;

pub use mock_header_source::MockHeaderSource;
pub use mock_progress_reporter::MockProgressReporter;
