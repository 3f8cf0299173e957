//! genealogic - C++ class inheritance tree visualizer
//!
//! This library scans C++ headers for class and struct declarations,
//! indexes the inheritance relationships it finds and builds the hierarchy
//! below a chosen base class, following hexagonal architecture and
//! Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`hierarchy`): Extraction, indexing and traversal with no I/O
//! - **Application Layer** (`application`): Use cases, DTOs and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): File system, console, formatters and Graphviz
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use genealogic::prelude::*;
//!
//! # async fn example() -> Result<()> {
//! let use_case = BuildHierarchyUseCase::new(
//!     FileSystemHeaderSource::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! let request = HierarchyRequest::builder()
//!     .base_class("Animal")
//!     .directory("include")
//!     .build()?;
//!
//! if let HierarchyOutcome::Built(response) = use_case.execute(&request).await? {
//!     let model = HierarchyReadModelBuilder::build(&response);
//!     println!("{}", TextTreeFormatter::new().format(&model)?);
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod hierarchy;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{ConsoleBanner, StderrProgressReporter};
    pub use crate::adapters::outbound::filesystem::{
        FileSystemHeaderSource, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{
        DotFormatter, JsonFormatter, MermaidFormatter, TextTreeFormatter,
    };
    pub use crate::adapters::outbound::graphviz::{GraphvizRenderer, SystemFileOpener};
    pub use crate::application::dto::{
        HierarchyOutcome, HierarchyRequest, HierarchyResponse, ImageFormat, OutputFormat,
        ScanSummary, SkippedHeader,
    };
    pub use crate::application::read_models::{HierarchyReadModel, HierarchyReadModelBuilder};
    pub use crate::application::use_cases::{BuildHierarchyUseCase, ScanHeadersUseCase};
    pub use crate::hierarchy::domain::{
        InheritancePair, ReachableGraph, RelationshipIndex, TreeNode,
    };
    pub use crate::hierarchy::services::{DeclarationExtractor, HierarchyBuilder};
    pub use crate::ports::outbound::{
        FileOpener, GraphRenderer, HeaderSource, HierarchyFormatter, OutputPresenter,
        ProgressReporter, ReadLimit,
    };
    pub use crate::shared::Result;
}
