use crate::adapters::outbound::formatters::{
    DotFormatter, JsonFormatter, MermaidFormatter, TextTreeFormatter,
};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::HierarchyFormatter;

/// Factory for creating hierarchy formatters
///
/// This factory encapsulates the creation logic for different formatter implementations,
/// following the Factory Pattern. It belongs in the application layer as it orchestrates
/// the selection of infrastructure adapters based on application needs.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// Image formats get the DOT formatter, whose output is handed to the
    /// graph renderer.
    ///
    /// # Examples
    /// ```
    /// use genealogic::application::dto::OutputFormat;
    /// use genealogic::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Json);
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn HierarchyFormatter> {
        match format {
            OutputFormat::Svg | OutputFormat::Png | OutputFormat::Pdf | OutputFormat::Dot => {
                Box::new(DotFormatter::new())
            }
            OutputFormat::Json => Box::new(JsonFormatter::new()),
            OutputFormat::Mermaid => Box::new(MermaidFormatter::new()),
            OutputFormat::Text => Box::new(TextTreeFormatter::new()),
        }
    }

    /// Formatter for the console preview printed to stderr
    pub fn create_preview(colored: bool) -> Box<dyn HierarchyFormatter> {
        if colored {
            Box::new(TextTreeFormatter::colored())
        } else {
            Box::new(TextTreeFormatter::new())
        }
    }

    /// Returns the progress message for the specified output format
    ///
    /// # Examples
    /// ```
    /// use genealogic::application::dto::OutputFormat;
    /// use genealogic::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputFormat::Svg);
    /// assert_eq!(message, "🎨 Rendering SVG image with Graphviz...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Svg => "🎨 Rendering SVG image with Graphviz...",
            OutputFormat::Png => "🎨 Rendering PNG image with Graphviz...",
            OutputFormat::Pdf => "🎨 Rendering PDF document with Graphviz...",
            OutputFormat::Dot => "📝 Generating Graphviz DOT output...",
            OutputFormat::Json => "📝 Generating JSON output...",
            OutputFormat::Mermaid => "📝 Generating Mermaid output...",
            OutputFormat::Text => "📝 Generating text tree output...",
        }
    }
}
