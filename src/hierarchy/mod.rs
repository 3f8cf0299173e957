/// Hierarchy domain - pure inheritance extraction and traversal logic
///
/// Nothing in this module performs I/O; it works on text and in-memory
/// relationship data only.
pub mod domain;
pub mod services;
