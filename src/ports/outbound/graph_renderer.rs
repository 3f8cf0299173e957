use crate::application::dto::ImageFormat;
use crate::shared::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// GraphRenderer port for the external graph layout tool
///
/// The core only produces a DOT document; laying it out into an image is
/// delegated to whatever implements this port.
#[async_trait]
pub trait GraphRenderer: Send + Sync {
    /// Whether the renderer can run on this machine
    fn is_available(&self) -> bool;

    /// Renders `dot_source` into `output_path` using the requested format
    ///
    /// # Returns
    /// The path of the written image
    ///
    /// # Errors
    /// Returns an error if the tool cannot be started or exits unsuccessfully
    async fn render(
        &self,
        dot_source: &str,
        format: ImageFormat,
        output_path: &Path,
    ) -> Result<PathBuf>;
}
