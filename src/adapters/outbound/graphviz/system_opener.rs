use crate::ports::outbound::FileOpener;
use crate::shared::Result;
use std::path::Path;
use std::process::{Command, Stdio};

/// SystemFileOpener adapter that hands files to the platform viewer
///
/// The viewer is spawned and left running; its exit status is not awaited.
pub struct SystemFileOpener;

impl SystemFileOpener {
    pub fn new() -> Self {
        Self
    }

    fn command(path: &Path) -> Command {
        if cfg!(target_os = "windows") {
            let mut command = Command::new("cmd");
            command.args(["/C", "start", ""]).arg(path);
            command
        } else if cfg!(target_os = "macos") {
            let mut command = Command::new("open");
            command.arg(path);
            command
        } else {
            let mut command = Command::new("xdg-open");
            command.arg(path);
            command
        }
    }
}

impl Default for SystemFileOpener {
    fn default() -> Self {
        Self::new()
    }
}

impl FileOpener for SystemFileOpener {
    fn open(&self, path: &Path) -> Result<()> {
        Self::command(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| anyhow::anyhow!("Failed to open {}: {}", path.display(), e))?;
        Ok(())
    }
}
