use crate::application::read_models::HierarchyReadModel;
use crate::shared::Result;

/// HierarchyFormatter port for turning a hierarchy into text
///
/// Implementations exist for console trees, JSON, Graphviz DOT and Mermaid.
pub trait HierarchyFormatter {
    /// Formats the hierarchy read model
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, model: &HierarchyReadModel) -> Result<String>;
}
