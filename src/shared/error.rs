use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes let scripts distinguish "nothing matched" from real failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - hierarchy built (possibly with only the root class)
    Success = 0,
    /// No header files matched, or the base class takes part in no relationship
    NotFound = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (invalid directory, file I/O error, renderer failure, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::NotFound => write!(f, "Not Found (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for hierarchy generation.
#[derive(Debug, Error)]
pub enum GenealogicError {
    #[error("Invalid source directory: {path}\nReason: {reason}\n\n💡 Hint: Please specify an existing directory containing C++ headers")]
    InvalidDirectory { path: PathBuf, reason: String },

    #[error("Invalid header extension: '{extension}'\n\n💡 Hint: Use an extension such as .h, .hpp or hh")]
    InvalidExtension { extension: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to render graph: {path}\nDetails: {details}\n\n💡 Hint: Make sure Graphviz is installed and 'dot' is on your PATH")]
    RenderError { path: PathBuf, details: String },

    /// Validation error for builder patterns
    #[error("Validation error: {message}")]
    Validation { message: String },
}

/// Lookup failures raised by the hierarchy builder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HierarchyError {
    #[error("Class '{root}' not found in any inheritance relationship")]
    RootNotFound { root: String },
}
