use crate::ports::outbound::{HeaderSource, ReadLimit};
use crate::shared::error::GenealogicError;
use crate::shared::security::{validate_file_size, MAX_FILE_SIZE};
use crate::shared::Result;
use anyhow::Context;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::io::{AsyncBufReadExt, AsyncReadExt, BufReader};
use walkdir::WalkDir;

/// FileSystemHeaderSource adapter for discovering and reading headers on disk
///
/// Discovery walks the tree without following symlinked directories; file
/// symlinks are read through to their target. Reads reject anything that is
/// not a regular file and files above the size limit.
pub struct FileSystemHeaderSource {
    max_file_size: u64,
}

impl FileSystemHeaderSource {
    pub fn new() -> Self {
        Self {
            max_file_size: MAX_FILE_SIZE,
        }
    }

    #[cfg(test)]
    fn with_max_file_size(max_file_size: u64) -> Self {
        Self { max_file_size }
    }
}

impl Default for FileSystemHeaderSource {
    fn default() -> Self {
        Self::new()
    }
}

/// Recursive, sorted listing of files below `directory` ending in `extension`.
///
/// Symlinked directories are not descended into. Symlinked files are listed
/// when they resolve to a regular file.
fn walk_headers(directory: &Path, extension: &str) -> Vec<PathBuf> {
    let mut headers: Vec<PathBuf> = WalkDir::new(directory)
        .follow_links(false)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
        })
        .filter(|entry| entry.file_name().to_string_lossy().ends_with(extension))
        .map(|entry| entry.into_path())
        .collect();

    headers.sort();
    headers
}

#[async_trait]
impl HeaderSource for FileSystemHeaderSource {
    async fn discover_headers(&self, directory: &Path, extension: &str) -> Result<Vec<PathBuf>> {
        if !directory.is_dir() {
            return Err(GenealogicError::InvalidDirectory {
                path: directory.to_path_buf(),
                reason: "Not a directory".to_string(),
            }
            .into());
        }

        let directory = directory.to_path_buf();
        let extension = extension.to_string();
        let headers = tokio::task::spawn_blocking(move || walk_headers(&directory, &extension))
            .await
            .context("Header discovery task failed")?;

        Ok(headers)
    }

    async fn read_header(&self, path: &Path, limit: ReadLimit) -> Result<Vec<u8>> {
        let metadata = tokio::fs::metadata(path)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to read header metadata: {}", e))?;

        if !metadata.is_file() {
            anyhow::bail!("{} is not a regular file", path.display());
        }

        validate_file_size(metadata.len(), path, self.max_file_size)?;

        let file = tokio::fs::File::open(path)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to open header: {}", e))?;

        let mut bytes = Vec::new();
        match limit {
            ReadLimit::WholeFile => {
                BufReader::new(file)
                    .read_to_end(&mut bytes)
                    .await
                    .map_err(|e| anyhow::anyhow!("Failed to read header: {}", e))?;
            }
            ReadLimit::FirstLines(lines) => {
                let mut reader = BufReader::new(file);
                for _ in 0..lines {
                    let read = reader
                        .read_until(b'\n', &mut bytes)
                        .await
                        .map_err(|e| anyhow::anyhow!("Failed to read header: {}", e))?;
                    if read == 0 {
                        break;
                    }
                }
            }
        }

        Ok(bytes)
    }
}
