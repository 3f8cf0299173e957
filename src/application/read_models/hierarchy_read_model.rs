//! Hierarchy read model for query operations
//!
//! This module provides the main read model struct that aggregates
//! everything a formatter needs in one serializable value.

use crate::hierarchy::domain::TreeNode;
use serde::Serialize;

/// Main read model for a built hierarchy
///
/// `tree` is the deduplicated view, `edges` the full reachable graph.
/// `classes` follows the tree's pre-order so formatters can zip the two.
#[derive(Debug, Clone, Serialize)]
pub struct HierarchyReadModel {
    pub metadata: MetadataView,
    /// Root class name
    pub root: String,
    /// One entry per class in the tree, pre-order
    pub classes: Vec<ClassView>,
    /// Every reachable parent -> child edge
    pub edges: Vec<EdgeView>,
    pub tree: TreeNode,
    pub stats: HierarchyStatsView,
}

impl HierarchyReadModel {
    /// Looks up the view of a class by name
    pub fn class(&self, name: &str) -> Option<&ClassView> {
        self.classes.iter().find(|class| class.name == name)
    }

    /// Parents of `name` other than the one it hangs under in the tree
    pub fn extra_parents(&self, name: &str) -> &[String] {
        self.class(name)
            .map(|class| class.extra_parents.as_slice())
            .unwrap_or(&[])
    }
}

/// View representation of generation metadata
#[derive(Debug, Clone, Serialize)]
pub struct MetadataView {
    pub tool_name: String,
    pub tool_version: String,
    /// RFC 3339 timestamp
    pub generated_at: String,
}

/// View representation of one class in the tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassView {
    pub name: String,
    /// Distance from the root in edges
    pub depth: usize,
    /// Parent this class is attached under; `None` for the root
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tree_parent: Option<String>,
    /// Other direct parents found anywhere in the scanned headers, sorted
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extra_parents: Vec<String>,
    pub children: usize,
}

/// View representation of a reachable edge
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EdgeView {
    pub parent: String,
    pub child: String,
}

/// Scan and hierarchy counters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HierarchyStatsView {
    pub files_found: usize,
    pub files_scanned: usize,
    pub files_skipped: usize,
    pub relationships: usize,
    pub classes: usize,
    pub edges: usize,
    pub depth: usize,
}
