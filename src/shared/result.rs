/// Crate-wide Result alias backed by anyhow::Error.
/// Typed errors (`GenealogicError`, `HierarchyError`) are converted into it with `?`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
