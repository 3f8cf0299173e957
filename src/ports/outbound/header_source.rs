use crate::shared::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// How much of each header is read before extraction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadLimit {
    /// Read the complete file
    WholeFile,
    /// Read only the first N lines (one-class-per-header codebases)
    FirstLines(usize),
}

/// HeaderSource port for locating and reading header files
///
/// This port abstracts the file system so the scanning use case can be
/// exercised with in-memory headers.
///
/// # Async Support
/// Reads are async so that many of them can be in flight at once.
/// Implementations must be `Send + Sync` to support concurrent access.
#[async_trait]
pub trait HeaderSource: Send + Sync {
    /// Lists every file below `directory` whose name ends with `extension`,
    /// sorted by full path. Directory walks can block, so implementations
    /// should keep them off the async worker threads.
    ///
    /// # Arguments
    /// * `directory` - Root directory to walk recursively
    /// * `extension` - Normalized extension including its leading dot (e.g. `.h`)
    ///
    /// # Errors
    /// Returns an error only if the directory itself cannot be walked.
    /// Unreadable entries below it are skipped.
    async fn discover_headers(&self, directory: &Path, extension: &str) -> Result<Vec<PathBuf>>;

    /// Reads the raw bytes of a header, honoring `limit`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or read, or exceeds the
    /// size limit. Callers treat such files as contributing nothing.
    async fn read_header(&self, path: &Path, limit: ReadLimit) -> Result<Vec<u8>>;
}
