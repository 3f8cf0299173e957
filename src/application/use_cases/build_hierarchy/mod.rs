use crate::application::dto::{HierarchyOutcome, HierarchyRequest, HierarchyResponse, ScanSummary};
use crate::application::use_cases::scan_headers::{ScanHeadersUseCase, ScanResult};
use crate::hierarchy::domain::RelationshipIndex;
use crate::hierarchy::services::HierarchyBuilder;
use crate::ports::outbound::{HeaderSource, ProgressReporter};
use crate::shared::error::HierarchyError;
use crate::shared::Result;

/// BuildHierarchyUseCase - Core use case for inheritance hierarchy generation
///
/// This use case orchestrates the scan, index and traversal steps using
/// generic dependency injection for all infrastructure dependencies.
///
/// # Type Parameters
/// * `HS` - HeaderSource implementation
/// * `PR` - ProgressReporter implementation
pub struct BuildHierarchyUseCase<HS, PR> {
    header_source: HS,
    progress_reporter: PR,
}

impl<HS, PR> BuildHierarchyUseCase<HS, PR>
where
    HS: HeaderSource,
    PR: ProgressReporter,
{
    /// Creates a new BuildHierarchyUseCase with injected dependencies
    pub fn new(header_source: HS, progress_reporter: PR) -> Self {
        Self {
            header_source,
            progress_reporter,
        }
    }

    /// Executes the hierarchy use case
    ///
    /// # Arguments
    /// * `request` - Validated request naming the base class and directory
    ///
    /// # Returns
    /// A `HierarchyOutcome`; "no headers" and "unknown class" are outcomes,
    /// not errors.
    ///
    /// # Errors
    /// Returns an error only if the directory cannot be walked.
    pub async fn execute(&self, request: &HierarchyRequest) -> Result<HierarchyOutcome> {
        // Step 1: Scan headers and extract inheritance pairs
        let ScanResult { pairs, summary } = self.scan(request).await?;

        if summary.files_found == 0 {
            return Ok(HierarchyOutcome::NoHeaders {
                directory: request.directory.clone(),
                extension: request.extension.clone(),
            });
        }

        self.report_scan(request, &summary);

        // Step 2: Index the relationships
        let index = RelationshipIndex::build(&pairs);

        // Step 3: Build the deduplicated tree and the reachable graph
        let root = request.base_class.as_str();
        let built = HierarchyBuilder::build_tree(root, &index).and_then(|tree| {
            HierarchyBuilder::build_graph(&[root], &index).map(|graph| (tree, graph))
        });
        let (tree, graph) = match built {
            Ok(built) => built,
            Err(HierarchyError::RootNotFound { root }) => {
                return Ok(HierarchyOutcome::RootNotFound {
                    root,
                    scan: summary,
                });
            }
        };

        self.progress_reporter
            .report(&format!("🌳 Inheritance tree: {} classes", tree.count()));

        // Step 4: Wrap the result
        let response = HierarchyResponse {
            root: root.to_string(),
            tree,
            graph,
            index,
            scan: summary,
        };

        if response.has_descendants() {
            Ok(HierarchyOutcome::Built(response))
        } else {
            Ok(HierarchyOutcome::NoDescendants(response))
        }
    }

    async fn scan(&self, request: &HierarchyRequest) -> Result<ScanResult> {
        self.progress_reporter.report(&format!(
            "🔍 Scanning '{}' for *{} headers...",
            request.directory.display(),
            request.extension
        ));

        ScanHeadersUseCase::new(&self.header_source, &self.progress_reporter)
            .execute(
                &request.directory,
                &request.extension,
                request.concurrency,
                request.read_limit,
            )
            .await
    }

    fn report_scan(&self, request: &HierarchyRequest, summary: &ScanSummary) {
        self.progress_reporter.report_completion(&format!(
            "Scanned {} files, found {} inheritance relationships",
            summary.files_scanned, summary.relationships
        ));

        if summary.skipped.is_empty() {
            return;
        }

        if request.report_skipped {
            for skipped in &summary.skipped {
                self.progress_reporter.report_error(&format!(
                    "⚠️  Skipped {}: {}",
                    skipped.path.display(),
                    skipped.reason
                ));
            }
        } else {
            self.progress_reporter.report_error(&format!(
                "⚠️  Skipped {} unreadable header(s) (use --verbose for details)",
                summary.skipped.len()
            ));
        }
    }
}
