pub mod inheritance_pair;
pub mod reachable_graph;
pub mod relationship_index;
pub mod tree_node;

pub use inheritance_pair::InheritancePair;
pub use reachable_graph::ReachableGraph;
pub use relationship_index::RelationshipIndex;
pub use tree_node::{TreeNode, TreeVisit, TreeWalk};
