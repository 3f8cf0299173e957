use crate::shared::error::GenealogicError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum header size that will be scanned (100 MB)
/// Larger files are skipped rather than loaded into memory.
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Validates the directory that is going to be scanned.
///
/// # Security
/// The root itself must not be a symbolic link, and symlinked directories
/// found while walking are not descended into.
///
/// # Errors
/// Returns `GenealogicError::InvalidDirectory` if the path does not exist,
/// is a symbolic link, or is not a directory.
pub fn validate_scan_directory(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(invalid_directory(path, "Directory does not exist"));
    }

    let metadata = fs::symlink_metadata(path).map_err(|e| {
        invalid_directory(path, &format!("Failed to read path metadata: {}", e))
    })?;

    if metadata.is_symlink() {
        return Err(invalid_directory(
            path,
            "Security: Directory is a symbolic link. For security reasons, symbolic links are not allowed.",
        ));
    }

    if !metadata.is_dir() {
        return Err(invalid_directory(path, "Not a directory"));
    }

    Ok(())
}

/// Validates file size is within acceptable limits
///
/// # Errors
/// Returns an error if the file size exceeds the maximum
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            file_size,
            max_size
        );
    }
    Ok(())
}

fn invalid_directory(path: &Path, reason: &str) -> anyhow::Error {
    GenealogicError::InvalidDirectory {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_validate_scan_directory_valid() {
        let temp_dir = TempDir::new().unwrap();
        assert!(validate_scan_directory(temp_dir.path()).is_ok());
    }

    #[test]
    fn test_validate_scan_directory_nonexistent() {
        let result = validate_scan_directory(Path::new("/nonexistent/path/that/does/not/exist"));
        let err = result.unwrap_err().to_string();
        assert!(err.contains("Directory does not exist"));
    }

    #[test]
    fn test_validate_scan_directory_file_not_directory() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("Widget.h");
        fs::write(&file_path, "class Widget {};").unwrap();

        let err = validate_scan_directory(&file_path).unwrap_err().to_string();
        assert!(err.contains("Not a directory"));
    }

    #[cfg(unix)]
    #[test]
    fn test_validate_scan_directory_rejects_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("real");
        fs::create_dir(&target).unwrap();
        let link = temp_dir.path().join("link");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let err = validate_scan_directory(&link).unwrap_err().to_string();
        assert!(err.contains("symbolic link"));
    }

    #[test]
    fn test_validate_file_size_within_limit() {
        let path = PathBuf::from("/test/Widget.h");
        assert!(validate_file_size(1000, &path, MAX_FILE_SIZE).is_ok());
    }

    #[test]
    fn test_validate_file_size_exceeds_limit() {
        let path = PathBuf::from("/test/Widget.h");
        let result = validate_file_size(MAX_FILE_SIZE + 1, &path, MAX_FILE_SIZE);
        assert!(result.unwrap_err().to_string().contains("too large"));
    }
}
