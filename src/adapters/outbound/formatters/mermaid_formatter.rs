use crate::application::read_models::HierarchyReadModel;
use crate::ports::outbound::HierarchyFormatter;
use crate::shared::Result;
use std::collections::{BTreeSet, HashMap};

/// MermaidFormatter adapter producing a `flowchart TD` diagram
///
/// Like the DOT output it draws every reachable edge. Node ids are sanitized
/// class names, suffixed when two names sanitize to the same id; labels keep
/// the original spelling.
pub struct MermaidFormatter;

impl MermaidFormatter {
    pub fn new() -> Self {
        Self
    }

    fn sanitize(name: &str) -> String {
        let id: String = name
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect();
        format!("cls_{}", id)
    }

    /// Assigns every class a distinct id, in tree order
    fn node_ids(model: &HierarchyReadModel) -> HashMap<&str, String> {
        let names = std::iter::once(model.root.as_str())
            .chain(model.classes.iter().map(|class| class.name.as_str()))
            .chain(
                model
                    .edges
                    .iter()
                    .flat_map(|edge| [edge.parent.as_str(), edge.child.as_str()]),
            );

        let mut ids = HashMap::new();
        let mut taken = BTreeSet::new();
        for name in names {
            if ids.contains_key(name) {
                continue;
            }
            let base = Self::sanitize(name);
            let mut id = base.clone();
            let mut suffix = 2;
            while taken.contains(&id) {
                id = format!("{}_{}", base, suffix);
                suffix += 1;
            }
            taken.insert(id.clone());
            ids.insert(name, id);
        }
        ids
    }
}

impl Default for MermaidFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl HierarchyFormatter for MermaidFormatter {
    fn format(&self, model: &HierarchyReadModel) -> Result<String> {
        let ids = Self::node_ids(model);
        let id = |name: &str| ids.get(name).cloned().unwrap_or_else(|| Self::sanitize(name));
        let mut lines = vec!["flowchart TD".to_string()];

        for class in &model.classes {
            lines.push(format!(
                "    {}[\"{}\"]",
                id(&class.name),
                class.name.replace('"', "#quot;")
            ));
        }

        for edge in &model.edges {
            lines.push(format!(
                "    {} --> {}",
                id(&edge.parent),
                id(&edge.child)
            ));
        }

        lines.push("    classDef root fill:#89b4fa,color:#1e1e2e,stroke:#74c7ec".to_string());
        lines.push(format!("    class {} root", id(&model.root)));

        let mut output = lines.join("\n");
        output.push('\n');
        Ok(output)
    }
}
