/// Formatter adapters for the supported hierarchy output formats
mod dot_formatter;
mod json_formatter;
mod mermaid_formatter;
mod text_tree_formatter;

pub use dot_formatter::DotFormatter;
pub use json_formatter::JsonFormatter;
pub use mermaid_formatter::MermaidFormatter;
pub use text_tree_formatter::TextTreeFormatter;
