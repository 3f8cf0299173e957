mod declaration_extractor;
mod hierarchy_builder;

pub use declaration_extractor::DeclarationExtractor;
pub use hierarchy_builder::HierarchyBuilder;
