use crate::ports::outbound::ReadLimit;
use crate::shared::error::GenealogicError;
use crate::shared::Result;
use std::path::PathBuf;

/// Header extension used when none is configured
pub const DEFAULT_EXTENSION: &str = ".h";

/// Lines read per header in single-class mode
pub const DEFAULT_MAX_LINES: usize = 100;

/// Maximum number of header reads in flight
pub const DEFAULT_CONCURRENCY: usize = 64;

/// HierarchyRequest - Internal request DTO for the hierarchy use case
#[derive(Debug, Clone)]
pub struct HierarchyRequest {
    /// Root class the hierarchy is built from
    pub base_class: String,
    /// Directory that is scanned recursively
    pub directory: PathBuf,
    /// Header extension with exactly one leading dot
    pub extension: String,
    /// How much of each header is read
    pub read_limit: ReadLimit,
    /// Maximum number of concurrent header reads
    pub concurrency: usize,
    /// Whether each skipped header is reported individually
    pub report_skipped: bool,
}

impl HierarchyRequest {
    pub fn builder() -> HierarchyRequestBuilder {
        HierarchyRequestBuilder::default()
    }
}

/// Normalizes a header extension so it carries exactly one leading dot.
///
/// `h`, `.h` and `..h` all become `.h`. Matching stays case-sensitive.
///
/// # Errors
/// Returns `GenealogicError::InvalidExtension` for empty extensions or ones
/// containing path separators or whitespace.
pub fn normalize_extension(extension: &str) -> Result<String> {
    let stripped = extension.trim().trim_start_matches('.');
    if stripped.is_empty()
        || stripped.contains(['/', '\\'])
        || stripped.chars().any(char::is_whitespace)
    {
        return Err(GenealogicError::InvalidExtension {
            extension: extension.to_string(),
        }
        .into());
    }
    Ok(format!(".{}", stripped))
}

/// Builder for [`HierarchyRequest`] with validation on `build()`
#[derive(Debug, Clone)]
pub struct HierarchyRequestBuilder {
    base_class: Option<String>,
    directory: Option<PathBuf>,
    extension: String,
    single_class: bool,
    max_lines: usize,
    concurrency: usize,
    report_skipped: bool,
}

impl Default for HierarchyRequestBuilder {
    fn default() -> Self {
        Self {
            base_class: None,
            directory: None,
            extension: DEFAULT_EXTENSION.to_string(),
            single_class: false,
            max_lines: DEFAULT_MAX_LINES,
            concurrency: DEFAULT_CONCURRENCY,
            report_skipped: false,
        }
    }
}

impl HierarchyRequestBuilder {
    pub fn base_class(mut self, base_class: impl Into<String>) -> Self {
        self.base_class = Some(base_class.into());
        self
    }

    pub fn directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = Some(directory.into());
        self
    }

    pub fn extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Read only the first `max_lines` lines of each header
    pub fn single_class(mut self, single_class: bool) -> Self {
        self.single_class = single_class;
        self
    }

    pub fn max_lines(mut self, max_lines: usize) -> Self {
        self.max_lines = max_lines;
        self
    }

    pub fn concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }

    pub fn report_skipped(mut self, report_skipped: bool) -> Self {
        self.report_skipped = report_skipped;
        self
    }

    /// Validates the collected values and produces the request
    ///
    /// # Errors
    /// Returns a validation error if the base class or directory is missing,
    /// the base class contains whitespace, the extension is invalid, or
    /// `max_lines`/`concurrency` is zero.
    pub fn build(self) -> Result<HierarchyRequest> {
        let base_class = self
            .base_class
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .ok_or_else(|| validation("Base class name is required"))?;

        if base_class.chars().any(char::is_whitespace) {
            return Err(validation(&format!(
                "Base class name '{}' must be a single identifier",
                base_class
            )));
        }

        let directory = self
            .directory
            .ok_or_else(|| validation("Source directory is required"))?;

        if self.max_lines == 0 {
            return Err(validation("max_lines must be greater than 0"));
        }

        if self.concurrency == 0 {
            return Err(validation("concurrency must be greater than 0"));
        }

        let read_limit = if self.single_class {
            ReadLimit::FirstLines(self.max_lines)
        } else {
            ReadLimit::WholeFile
        };

        Ok(HierarchyRequest {
            base_class,
            directory,
            extension: normalize_extension(&self.extension)?,
            read_limit,
            concurrency: self.concurrency,
            report_skipped: self.report_skipped,
        })
    }
}

fn validation(message: &str) -> anyhow::Error {
    GenealogicError::Validation {
        message: message.to_string(),
    }
    .into()
}
