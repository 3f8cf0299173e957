/// Output format enumeration for hierarchy rendering
///
/// Image formats go through the external graph renderer; the others are
/// produced directly by a formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Graphviz-rendered SVG image (default)
    Svg,
    /// Graphviz-rendered PNG image
    Png,
    /// Graphviz-rendered PDF document
    Pdf,
    /// Graphviz DOT source
    Dot,
    /// JSON document with nodes, edges and the nested tree
    Json,
    /// Mermaid flowchart source
    Mermaid,
    /// Plain text tree
    Text,
}

/// Image formats understood by the graph renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Svg,
    Png,
    Pdf,
}

impl ImageFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            ImageFormat::Svg => "svg",
            ImageFormat::Png => "png",
            ImageFormat::Pdf => "pdf",
        }
    }
}

impl OutputFormat {
    /// The image format to request from the renderer, if this is an image format
    pub fn image_format(self) -> Option<ImageFormat> {
        match self {
            OutputFormat::Svg => Some(ImageFormat::Svg),
            OutputFormat::Png => Some(ImageFormat::Png),
            OutputFormat::Pdf => Some(ImageFormat::Pdf),
            _ => None,
        }
    }

    pub fn is_image(self) -> bool {
        self.image_format().is_some()
    }

    /// File extension used when the output is written to disk
    pub fn file_extension(self) -> &'static str {
        match self {
            OutputFormat::Svg => "svg",
            OutputFormat::Png => "png",
            OutputFormat::Pdf => "pdf",
            OutputFormat::Dot => "dot",
            OutputFormat::Json => "json",
            OutputFormat::Mermaid => "mmd",
            OutputFormat::Text => "txt",
        }
    }

    /// File name used for `root` in this format: `<root>_inheritance.<ext>`
    ///
    /// Characters that are not valid in file names (such as the `::` of a
    /// qualified class name) become underscores.
    pub fn output_file_name(self, root: &str) -> String {
        let stem: String = root
            .chars()
            .map(|c| {
                if c.is_alphanumeric() || c == '_' || c == '-' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        format!("{}_inheritance.{}", stem, self.file_extension())
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "svg" => Ok(OutputFormat::Svg),
            "png" => Ok(OutputFormat::Png),
            "pdf" => Ok(OutputFormat::Pdf),
            "dot" | "gv" => Ok(OutputFormat::Dot),
            "json" => Ok(OutputFormat::Json),
            "mermaid" | "mmd" => Ok(OutputFormat::Mermaid),
            "text" | "txt" => Ok(OutputFormat::Text),
            _ => Err(format!(
                "Invalid format: {}. Please specify one of 'svg', 'png', 'pdf', 'dot', 'json', 'mermaid' or 'text'",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            OutputFormat::Svg => "svg",
            OutputFormat::Png => "png",
            OutputFormat::Pdf => "pdf",
            OutputFormat::Dot => "dot",
            OutputFormat::Json => "json",
            OutputFormat::Mermaid => "mermaid",
            OutputFormat::Text => "text",
        };
        write!(f, "{}", name)
    }
}
