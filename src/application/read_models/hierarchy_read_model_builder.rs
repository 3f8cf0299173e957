//! Builder for constructing HierarchyReadModel from a use case response

use super::hierarchy_read_model::{
    ClassView, EdgeView, HierarchyReadModel, HierarchyStatsView, MetadataView,
};
use crate::application::dto::HierarchyResponse;
use chrono::Utc;

const TOOL_NAME: &str = env!("CARGO_PKG_NAME");
const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Builder for constructing HierarchyReadModel from a response
pub struct HierarchyReadModelBuilder;

impl HierarchyReadModelBuilder {
    /// Builds the read model, stamping it with the current time
    pub fn build(response: &HierarchyResponse) -> HierarchyReadModel {
        let classes = Self::build_classes(response);
        let edges: Vec<EdgeView> = response
            .graph
            .edges()
            .iter()
            .map(|(parent, child)| EdgeView {
                parent: parent.clone(),
                child: child.clone(),
            })
            .collect();

        let stats = HierarchyStatsView {
            files_found: response.scan.files_found,
            files_scanned: response.scan.files_scanned,
            files_skipped: response.scan.skipped.len(),
            relationships: response.scan.relationships,
            classes: response.graph.nodes().len(),
            edges: response.graph.edge_count(),
            depth: response.tree.depth(),
        };

        HierarchyReadModel {
            metadata: MetadataView {
                tool_name: TOOL_NAME.to_string(),
                tool_version: TOOL_VERSION.to_string(),
                generated_at: Utc::now().to_rfc3339(),
            },
            root: response.root.clone(),
            classes,
            edges,
            tree: response.tree.clone(),
            stats,
        }
    }

    fn build_classes(response: &HierarchyResponse) -> Vec<ClassView> {
        response
            .tree
            .walk()
            .map(|visit| {
                let extra_parents = response
                    .index
                    .parents_of(&visit.node.name)
                    .filter(|parent| Some(*parent) != visit.parent)
                    .map(str::to_string)
                    .collect();
                ClassView {
                    name: visit.node.name.clone(),
                    depth: visit.depth,
                    tree_parent: visit.parent.map(str::to_string),
                    extra_parents,
                    children: visit.node.children.len(),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::ScanSummary;
    use crate::hierarchy::domain::{InheritancePair, RelationshipIndex};
    use crate::hierarchy::services::HierarchyBuilder;

    fn response(root: &str, pairs: &[(&str, &str)]) -> HierarchyResponse {
        let pairs: Vec<InheritancePair> = pairs
            .iter()
            .map(|(child, parent)| InheritancePair::new(*child, *parent))
            .collect();
        let index = RelationshipIndex::build(&pairs);
        HierarchyResponse {
            root: root.to_string(),
            tree: HierarchyBuilder::build_tree(root, &index).unwrap(),
            graph: HierarchyBuilder::build_graph(&[root], &index).unwrap(),
            index,
            scan: ScanSummary {
                files_found: 3,
                files_scanned: 3,
                skipped: Vec::new(),
                relationships: pairs.len(),
            },
        }
    }

    #[test]
    fn test_classes_follow_tree_pre_order() {
        let model = HierarchyReadModelBuilder::build(&response(
            "Animal",
            &[("Dog", "Animal"), ("Cat", "Animal"), ("Puppy", "Dog")],
        ));

        let names: Vec<_> = model.classes.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Animal", "Cat", "Dog", "Puppy"]);
        assert_eq!(model.classes[0].tree_parent, None);
        assert_eq!(model.classes[3].depth, 2);
        assert_eq!(model.classes[3].tree_parent.as_deref(), Some("Dog"));
        assert_eq!(model.class("Dog").unwrap().children, 1);
    }

    #[test]
    fn test_extra_parents_exclude_tree_parent() {
        let model = HierarchyReadModelBuilder::build(&response(
            "Animal",
            &[
                ("Dog", "Animal"),
                ("FlyingDog", "Dog"),
                ("FlyingDog", "Flyable"),
            ],
        ));

        assert_eq!(model.extra_parents("FlyingDog"), ["Flyable".to_string()]);
        assert!(model.extra_parents("Dog").is_empty());
        assert!(model.extra_parents("Unknown").is_empty());
    }

    #[test]
    fn test_edges_and_stats() {
        let model = HierarchyReadModelBuilder::build(&response(
            "A",
            &[("B", "A"), ("C", "A"), ("D", "B"), ("D", "C")],
        ));

        assert_eq!(model.edges.len(), 4);
        assert_eq!(
            model.edges[0],
            EdgeView {
                parent: "A".to_string(),
                child: "B".to_string()
            }
        );
        assert_eq!(model.stats.classes, 4);
        assert_eq!(model.stats.edges, 4);
        assert_eq!(model.stats.depth, 2);
        assert_eq!(model.stats.relationships, 4);
        assert_eq!(model.metadata.tool_name, "genealogic");
    }
}
