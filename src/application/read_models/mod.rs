//! Read models for CQRS-lite pattern
//!
//! This module contains view-optimized structs that provide
//! a denormalized representation of a built hierarchy for formatters.

mod hierarchy_read_model;
mod hierarchy_read_model_builder;

pub use hierarchy_read_model::{
    ClassView, EdgeView, HierarchyReadModel, HierarchyStatsView, MetadataView,
};
pub use hierarchy_read_model_builder::HierarchyReadModelBuilder;
