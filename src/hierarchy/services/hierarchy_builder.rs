use crate::hierarchy::domain::{ReachableGraph, RelationshipIndex, TreeNode};
use crate::shared::error::HierarchyError;
use std::collections::{HashSet, VecDeque};

/// HierarchyBuilder service for breadth-first traversal of the relationship index
///
/// Pure algorithm with no I/O. Both modes visit children in lexicographic
/// order and keep a visited set, so cycles in the index terminate.
pub struct HierarchyBuilder;

impl HierarchyBuilder {
    /// Builds the deduplicated tree below `root`.
    ///
    /// A class reachable through several parents is attached only under the
    /// first one discovered; its position is its shortest path from the root,
    /// with ties broken by sibling name order.
    ///
    /// # Errors
    /// `HierarchyError::RootNotFound` when `root` appears in no relationship.
    /// A known root without children yields a single-node tree.
    pub fn build_tree(root: &str, index: &RelationshipIndex) -> Result<TreeNode, HierarchyError> {
        Self::ensure_known(root, index)?;

        // Arena in BFS order: names[i] and the arena ids of its children.
        let mut names: Vec<String> = vec![root.to_string()];
        let mut child_ids: Vec<Vec<usize>> = vec![Vec::new()];
        let mut visited: HashSet<&str> = HashSet::from([root]);
        let mut queue: VecDeque<usize> = VecDeque::from([0]);

        while let Some(current) = queue.pop_front() {
            for child in Self::sorted_children(&names[current], index) {
                if !visited.insert(child) {
                    continue;
                }
                let id = names.len();
                names.push(child.to_string());
                child_ids.push(Vec::new());
                child_ids[current].push(id);
                queue.push_back(id);
            }
        }

        // Children always carry larger ids than their parent, so folding the
        // arena from the back materializes every subtree before it is needed.
        let mut built: Vec<Option<TreeNode>> = names
            .into_iter()
            .map(|name| Some(TreeNode::new(name)))
            .collect();
        for id in (0..built.len()).rev() {
            let children: Vec<TreeNode> = child_ids[id]
                .iter()
                .filter_map(|&child| built[child].take())
                .collect();
            if let Some(node) = built[id].as_mut() {
                node.children = children;
            }
        }

        Ok(built
            .into_iter()
            .next()
            .flatten()
            .unwrap_or_else(|| TreeNode::new(root)))
    }

    /// Collects every class reachable from `roots` and every parent -> child
    /// edge met while traversing.
    ///
    /// An edge is recorded once per adjacency even when the child was already
    /// reached through another parent, so multiple inheritance is preserved.
    ///
    /// # Errors
    /// `HierarchyError::RootNotFound` for the first root absent from the index.
    pub fn build_graph(
        roots: &[&str],
        index: &RelationshipIndex,
    ) -> Result<ReachableGraph, HierarchyError> {
        let mut unique_roots: Vec<String> = Vec::new();
        for root in roots {
            Self::ensure_known(root, index)?;
            if !unique_roots.iter().any(|known| known == root) {
                unique_roots.push(root.to_string());
            }
        }

        let mut graph = ReachableGraph::new(unique_roots.clone());
        let mut queue: VecDeque<String> = unique_roots.into();

        while let Some(current) = queue.pop_front() {
            for child in Self::sorted_children(&current, index) {
                graph.add_edge(&current, child);
                if graph.add_node(child) {
                    queue.push_back(child.to_string());
                }
            }
        }

        Ok(graph)
    }

    fn ensure_known(root: &str, index: &RelationshipIndex) -> Result<(), HierarchyError> {
        if index.contains(root) {
            Ok(())
        } else {
            Err(HierarchyError::RootNotFound {
                root: root.to_string(),
            })
        }
    }

    fn sorted_children<'a>(parent: &str, index: &'a RelationshipIndex) -> Vec<&'a str> {
        let mut children: Vec<&str> = index.children_of(parent).collect();
        children.sort_unstable();
        children
    }
}
