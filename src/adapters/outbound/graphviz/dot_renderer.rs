use crate::application::dto::ImageFormat;
use crate::ports::outbound::GraphRenderer;
use crate::shared::error::GenealogicError;
use crate::shared::Result;
use async_trait::async_trait;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

const DOT_PROGRAM: &str = "dot";

/// GraphvizRenderer adapter that pipes DOT source into the `dot` executable
pub struct GraphvizRenderer {
    program: PathBuf,
    available: bool,
}

impl GraphvizRenderer {
    /// Locates `dot` on `PATH`
    pub fn new() -> Self {
        match find_in_path(DOT_PROGRAM, std::env::var_os("PATH")) {
            Some(program) => Self {
                program,
                available: true,
            },
            None => Self {
                program: PathBuf::from(DOT_PROGRAM),
                available: false,
            },
        }
    }

    /// Uses an explicit executable instead of searching `PATH`
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        let program = program.into();
        let available = program.is_file();
        Self { program, available }
    }

    fn render_error(output_path: &Path, details: impl Into<String>) -> anyhow::Error {
        GenealogicError::RenderError {
            path: output_path.to_path_buf(),
            details: details.into(),
        }
        .into()
    }
}

impl Default for GraphvizRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GraphRenderer for GraphvizRenderer {
    fn is_available(&self) -> bool {
        self.available
    }

    async fn render(
        &self,
        dot_source: &str,
        format: ImageFormat,
        output_path: &Path,
    ) -> Result<PathBuf> {
        let mut child = Command::new(&self.program)
            .arg(format!("-T{}", format.as_str()))
            .arg("-o")
            .arg(output_path)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                Self::render_error(
                    output_path,
                    format!("Failed to start {}: {}", self.program.display(), e),
                )
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(dot_source.as_bytes())
                .await
                .map_err(|e| Self::render_error(output_path, e.to_string()))?;
            // Dropping stdin closes the pipe so dot sees end of input.
        }

        let output = child
            .wait_with_output()
            .await
            .map_err(|e| Self::render_error(output_path, e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Self::render_error(
                output_path,
                format!("dot exited with {}: {}", output.status, stderr.trim()),
            ));
        }

        Ok(output_path.to_path_buf())
    }
}

/// Searches each `PATH` entry for `program` (plus `.exe` on Windows)
fn find_in_path(program: &str, path_var: Option<OsString>) -> Option<PathBuf> {
    let path_var = path_var?;
    let candidates: Vec<String> = if cfg!(windows) {
        vec![format!("{}.exe", program), program.to_string()]
    } else {
        vec![program.to_string()]
    };

    std::env::split_paths(&path_var).find_map(|dir| {
        candidates
            .iter()
            .map(|name| dir.join(name))
            .find(|candidate| candidate.is_file())
    })
}
