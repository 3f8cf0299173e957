use crate::hierarchy::domain::{ReachableGraph, RelationshipIndex, TreeNode};
use std::path::PathBuf;

/// A header that contributed nothing because it could not be read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedHeader {
    pub path: PathBuf,
    pub reason: String,
}

/// Counters describing one scan
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Headers matching the extension filter
    pub files_found: usize,
    /// Headers read and passed to the extractor
    pub files_scanned: usize,
    /// Headers that could not be read
    pub skipped: Vec<SkippedHeader>,
    /// Inheritance pairs extracted before deduplication
    pub relationships: usize,
}

/// HierarchyResponse - Result of a successful hierarchy build
#[derive(Debug, Clone)]
pub struct HierarchyResponse {
    /// Root class name; always present in `tree` and `graph`
    pub root: String,
    /// Deduplicated breadth-first tree
    pub tree: TreeNode,
    /// Reachable DAG with every parent edge
    pub graph: ReachableGraph,
    /// Full relationship index, used for multi-parent annotations
    pub index: RelationshipIndex,
    pub scan: ScanSummary,
}

impl HierarchyResponse {
    pub fn has_descendants(&self) -> bool {
        !self.tree.is_leaf()
    }
}

/// HierarchyOutcome - Typed result of the hierarchy use case
///
/// Only `Built` carries a hierarchy worth rendering. The "nothing to do"
/// cases are kept apart from hard errors so the caller can decide between
/// a warning and a failure exit.
#[derive(Debug, Clone)]
pub enum HierarchyOutcome {
    /// The root class has at least one descendant
    Built(HierarchyResponse),
    /// The root class is known but nothing derives from it
    NoDescendants(HierarchyResponse),
    /// No file matched the extension filter
    NoHeaders { directory: PathBuf, extension: String },
    /// The root class takes part in no relationship
    RootNotFound { root: String, scan: ScanSummary },
}
