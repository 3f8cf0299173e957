/// Use cases module containing application business logic orchestration
mod build_hierarchy;
mod scan_headers;

pub use build_hierarchy::BuildHierarchyUseCase;
pub use scan_headers::{ScanHeadersUseCase, ScanResult};
