use crate::application::read_models::HierarchyReadModel;
use crate::ports::outbound::HierarchyFormatter;
use crate::shared::Result;
use std::collections::BTreeSet;
use std::fmt::Write;

const GRAPH_ATTRS: &[(&str, &str)] = &[
    ("rankdir", "TB"),
    ("splines", "ortho"),
    ("nodesep", "0.6"),
    ("ranksep", "0.8"),
    ("bgcolor", "#1e1e2e"),
    ("pad", "0.5"),
];

const NODE_ATTRS: &[(&str, &str)] = &[
    ("shape", "record"),
    ("style", "filled,rounded"),
    ("fillcolor", "#313244"),
    ("fontcolor", "#cdd6f4"),
    ("fontname", "Consolas"),
    ("fontsize", "11"),
    ("color", "#585b70"),
    ("penwidth", "1.5"),
];

const EDGE_ATTRS: &[(&str, &str)] = &[
    ("color", "#89b4fa"),
    ("arrowhead", "vee"),
    ("arrowsize", "0.8"),
    ("penwidth", "1.2"),
];

const ROOT_ATTRS: &[(&str, &str)] = &[
    ("fillcolor", "#89b4fa"),
    ("fontcolor", "#1e1e2e"),
    ("penwidth", "2.5"),
    ("color", "#74c7ec"),
];

/// DotFormatter adapter producing a themed Graphviz document
///
/// Draws the reachable DAG rather than the deduplicated tree, so a class
/// with several reachable parents gets one incoming arrow per parent.
/// The same document feeds the image renderer.
pub struct DotFormatter;

impl DotFormatter {
    pub fn new() -> Self {
        Self
    }

    fn attr_list(attrs: &[(&str, &str)]) -> String {
        attrs
            .iter()
            .map(|(key, value)| format!("{}={}", key, quote(value)))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Default for DotFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl HierarchyFormatter for DotFormatter {
    fn format(&self, model: &HierarchyReadModel) -> Result<String> {
        let nodes: BTreeSet<&str> = model.classes.iter().map(|c| c.name.as_str()).collect();

        let mut dot = String::new();
        writeln!(dot, "digraph InheritanceTree {{")?;
        writeln!(dot, "    graph [{}];", Self::attr_list(GRAPH_ATTRS))?;
        writeln!(dot, "    node [{}];", Self::attr_list(NODE_ATTRS))?;
        writeln!(dot, "    edge [{}];", Self::attr_list(EDGE_ATTRS))?;
        writeln!(dot)?;

        for name in &nodes {
            let label = format!("label={}", quote(&record_label(name)));
            if *name == model.root {
                writeln!(
                    dot,
                    "    {} [{}, {}];",
                    quote(name),
                    label,
                    Self::attr_list(ROOT_ATTRS)
                )?;
            } else {
                writeln!(dot, "    {} [{}];", quote(name), label)?;
            }
        }

        if !model.edges.is_empty() {
            writeln!(dot)?;
        }
        for edge in &model.edges {
            writeln!(dot, "    {} -> {};", quote(&edge.parent), quote(&edge.child))?;
        }

        writeln!(dot, "}}")?;
        Ok(dot)
    }
}

/// Double-quoted DOT string
fn quote(text: &str) -> String {
    format!("\"{}\"", text.replace('\\', "\\\\").replace('"', "\\\""))
}

/// Escapes the characters that carry structure inside record labels
fn record_label(name: &str) -> String {
    let mut label = String::with_capacity(name.len());
    for c in name.chars() {
        if matches!(c, '{' | '}' | '|' | '<' | '>') {
            label.push('\\');
        }
        label.push(c);
    }
    label
}
