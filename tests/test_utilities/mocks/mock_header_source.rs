use async_trait::async_trait;
use genealogic::prelude::*;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock HeaderSource serving in-memory headers
///
/// A header added with [`MockHeaderSource::with_unreadable`] fails on read.
#[derive(Default, Clone)]
pub struct MockHeaderSource {
    headers: BTreeMap<PathBuf, Option<String>>,
    pub reads: Arc<Mutex<Vec<(PathBuf, ReadLimit)>>>,
}

impl MockHeaderSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_header(mut self, path: &str, content: &str) -> Self {
        self.headers
            .insert(PathBuf::from(path), Some(content.to_string()));
        self
    }

    pub fn with_unreadable(mut self, path: &str) -> Self {
        self.headers.insert(PathBuf::from(path), None);
        self
    }

    pub fn read_count(&self) -> usize {
        self.reads.lock().unwrap().len()
    }
}

#[async_trait]
impl HeaderSource for MockHeaderSource {
    async fn discover_headers(&self, directory: &Path, extension: &str) -> Result<Vec<PathBuf>> {
        Ok(self
            .headers
            .keys()
            .filter(|path| path.starts_with(directory))
            .filter(|path| path.to_string_lossy().ends_with(extension))
            .cloned()
            .collect())
    }

    async fn read_header(&self, path: &Path, limit: ReadLimit) -> Result<Vec<u8>> {
        self.reads
            .lock()
            .unwrap()
            .push((path.to_path_buf(), limit));

        let content = self
            .headers
            .get(path)
            .cloned()
            .flatten()
            .ok_or_else(|| anyhow::anyhow!("Permission denied: {}", path.display()))?;

        let content = match limit {
            ReadLimit::WholeFile => content,
            ReadLimit::FirstLines(lines) => content.split_inclusive('\n').take(lines).collect(),
        };
        Ok(content.into_bytes())
    }
}
