/// Graphviz adapters for image rendering and viewing
mod dot_renderer;
mod system_opener;

pub use dot_renderer::GraphvizRenderer;
pub use system_opener::SystemFileOpener;
