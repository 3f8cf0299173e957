use serde::Serialize;

/// A node in the deduplicated inheritance tree.
///
/// Each class name appears at most once in a tree: a class reachable through
/// several parents is attached under the first one discovered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeNode {
    pub name: String,
    pub children: Vec<TreeNode>,
}

/// A node visited during a depth-first walk, with its depth and the name of
/// the node it hangs under (`None` for the root).
#[derive(Debug, Clone, Copy)]
pub struct TreeVisit<'a> {
    pub node: &'a TreeNode,
    pub depth: usize,
    pub parent: Option<&'a str>,
    /// Whether this node is the last child of its parent
    pub is_last: bool,
}

impl TreeNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Total number of nodes, root included.
    pub fn count(&self) -> usize {
        self.walk().count()
    }

    /// Length of the longest root-to-leaf path, counted in edges.
    pub fn depth(&self) -> usize {
        self.walk().map(|visit| visit.depth).max().unwrap_or(0)
    }

    /// Pre-order walk driven by an explicit stack, so deep hierarchies
    /// never exhaust the call stack.
    pub fn walk(&self) -> TreeWalk<'_> {
        TreeWalk {
            stack: vec![TreeVisit {
                node: self,
                depth: 0,
                parent: None,
                is_last: true,
            }],
        }
    }
}

/// Iterator returned by [`TreeNode::walk`].
pub struct TreeWalk<'a> {
    stack: Vec<TreeVisit<'a>>,
}

impl<'a> Iterator for TreeWalk<'a> {
    type Item = TreeVisit<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let visit = self.stack.pop()?;
        let last_index = visit.node.children.len().saturating_sub(1);
        // Reverse push keeps children in their stored order when popped.
        for (index, child) in visit.node.children.iter().enumerate().rev() {
            self.stack.push(TreeVisit {
                node: child,
                depth: visit.depth + 1,
                parent: Some(visit.node.name.as_str()),
                is_last: index == last_index,
            });
        }
        Some(visit)
    }
}
