use serde::Serialize;
use std::collections::BTreeSet;

/// Every class reachable from one or more roots together with every
/// parent -> child edge met on the way.
///
/// Unlike [`super::TreeNode`], multiple inheritance stays visible here: a class
/// with two reachable parents has two incoming edges.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReachableGraph {
    nodes: BTreeSet<String>,
    edges: Vec<(String, String)>,
}

impl ReachableGraph {
    pub(crate) fn new(roots: Vec<String>) -> Self {
        Self {
            nodes: roots.into_iter().collect(),
            edges: Vec::new(),
        }
    }

    pub(crate) fn add_node(&mut self, name: &str) -> bool {
        self.nodes.insert(name.to_string())
    }

    pub(crate) fn add_edge(&mut self, parent: &str, child: &str) {
        self.edges.push((parent.to_string(), child.to_string()));
    }

    /// Every reachable class, roots included
    pub fn nodes(&self) -> &BTreeSet<String> {
        &self.nodes
    }

    /// Edges in traversal order as `(parent, child)`.
    pub fn edges(&self) -> &[(String, String)] {
        &self.edges
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
