use crate::shared::Result;
use std::path::Path;

/// FileOpener port for handing a rendered file to the system viewer
pub trait FileOpener {
    /// Opens `path` with the default application
    ///
    /// # Errors
    /// Returns an error if the viewer cannot be launched
    fn open(&self, path: &Path) -> Result<()>;
}
