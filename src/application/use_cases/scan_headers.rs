use crate::application::dto::{ScanSummary, SkippedHeader};
use crate::hierarchy::domain::InheritancePair;
use crate::hierarchy::services::DeclarationExtractor;
use crate::ports::outbound::{HeaderSource, ProgressReporter, ReadLimit};
use crate::shared::Result;
use futures::stream::{self, StreamExt};
use std::path::Path;

/// Everything a scan produced: the flat pair list plus counters
#[derive(Debug, Clone, Default)]
pub struct ScanResult {
    pub pairs: Vec<InheritancePair>,
    pub summary: ScanSummary,
}

/// ScanHeadersUseCase - reads matching headers and extracts inheritance pairs
///
/// At most `concurrency` read-and-extract operations are in flight. The scan
/// returns only once every header has been read or has failed; unreadable
/// headers are recorded as skipped and never abort the scan.
pub struct ScanHeadersUseCase<'a, HS, PR> {
    header_source: &'a HS,
    progress_reporter: &'a PR,
}

impl<'a, HS, PR> ScanHeadersUseCase<'a, HS, PR>
where
    HS: HeaderSource,
    PR: ProgressReporter,
{
    pub fn new(header_source: &'a HS, progress_reporter: &'a PR) -> Self {
        Self {
            header_source,
            progress_reporter,
        }
    }

    /// Scans `directory` for files ending in `extension`
    ///
    /// # Errors
    /// Returns an error only if header discovery itself fails.
    pub async fn execute(
        &self,
        directory: &Path,
        extension: &str,
        concurrency: usize,
        read_limit: ReadLimit,
    ) -> Result<ScanResult> {
        let headers = self
            .header_source
            .discover_headers(directory, extension)
            .await?;
        let total = headers.len();
        if total == 0 {
            return Ok(ScanResult::default());
        }

        self.progress_reporter
            .report(&format!("📂 Found {} header files", total));

        let header_source = self.header_source;
        let mut results = std::pin::pin!(stream::iter(headers)
            .map(|path| async move {
                let outcome = header_source
                    .read_header(&path, read_limit)
                    .await
                    .map(|bytes| DeclarationExtractor::extract_bytes(&bytes));
                (path, outcome)
            })
            .buffer_unordered(concurrency.max(1)));

        let mut pairs = Vec::new();
        let mut skipped = Vec::new();
        let mut completed = 0;

        while let Some((path, outcome)) = results.next().await {
            completed += 1;
            match outcome {
                Ok(found) => pairs.extend(found),
                Err(e) => skipped.push(SkippedHeader {
                    path,
                    reason: e.to_string(),
                }),
            }
            self.progress_reporter
                .report_progress(completed, total, Some("Scanning headers..."));
        }

        // Completion order is arbitrary; sort for stable reporting.
        skipped.sort_by(|a: &SkippedHeader, b: &SkippedHeader| a.path.cmp(&b.path));

        let summary = ScanSummary {
            files_found: total,
            files_scanned: total - skipped.len(),
            skipped,
            relationships: pairs.len(),
        };

        Ok(ScanResult { pairs, summary })
    }
}
