/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod hierarchy_request;
mod hierarchy_response;
mod output_format;

pub use hierarchy_request::{
    normalize_extension, HierarchyRequest, HierarchyRequestBuilder, DEFAULT_CONCURRENCY,
    DEFAULT_EXTENSION, DEFAULT_MAX_LINES,
};
pub use hierarchy_response::{HierarchyOutcome, HierarchyResponse, ScanSummary, SkippedHeader};
pub use output_format::{ImageFormat, OutputFormat};
