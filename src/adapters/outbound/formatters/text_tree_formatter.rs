use crate::application::read_models::HierarchyReadModel;
use crate::ports::outbound::HierarchyFormatter;
use crate::shared::Result;
use owo_colors::{OwoColorize, Style};

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE: &str = "│   ";
const SPACE: &str = "    ";

/// TextTreeFormatter adapter for console-style tree output
///
/// Renders the deduplicated tree with box-drawing guides. Classes with more
/// than one parent carry a `(+ Other)` annotation naming the parents they
/// are not drawn under.
pub struct TextTreeFormatter {
    colored: bool,
}

impl TextTreeFormatter {
    pub fn new() -> Self {
        Self { colored: false }
    }

    /// Formatter that emits ANSI colors, for terminal previews
    pub fn colored() -> Self {
        Self { colored: true }
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if self.colored {
            text.style(style).to_string()
        } else {
            text.to_string()
        }
    }
}

impl Default for TextTreeFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl HierarchyFormatter for TextTreeFormatter {
    fn format(&self, model: &HierarchyReadModel) -> Result<String> {
        let guide = Style::new().blue();
        let mut output = String::new();
        // last_flags[i] tells whether the ancestor at depth i + 1 was a last child.
        let mut last_flags: Vec<bool> = Vec::new();

        for visit in model.tree.walk() {
            if visit.depth == 0 {
                output.push_str(&self.paint(&visit.node.name, Style::new().cyan().bold()));
                output.push('\n');
                continue;
            }

            last_flags.truncate(visit.depth - 1);
            for &ancestor_was_last in &last_flags {
                let segment = if ancestor_was_last { SPACE } else { PIPE };
                output.push_str(&self.paint(segment, guide));
            }
            let branch = if visit.is_last { LAST_BRANCH } else { BRANCH };
            output.push_str(&self.paint(branch, guide));
            output.push_str(&self.paint(&visit.node.name, Style::new().white()));

            let extra = model.extra_parents(&visit.node.name);
            if !extra.is_empty() {
                output.push(' ');
                output.push_str(
                    &self.paint(&format!("(+ {})", extra.join(", ")), Style::new().dimmed()),
                );
            }
            output.push('\n');

            last_flags.push(visit.is_last);
        }

        Ok(output)
    }
}
