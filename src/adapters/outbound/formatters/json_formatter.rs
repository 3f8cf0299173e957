use crate::application::read_models::HierarchyReadModel;
use crate::ports::outbound::HierarchyFormatter;
use crate::shared::Result;

/// JsonFormatter adapter for machine-readable output
///
/// Serializes the full read model: metadata, stats, per-class views, every
/// reachable edge and the nested tree.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl HierarchyFormatter for JsonFormatter {
    fn format(&self, model: &HierarchyReadModel) -> Result<String> {
        let json = serde_json::to_string_pretty(model)
            .map_err(|e| anyhow::anyhow!("Failed to serialize hierarchy to JSON: {}", e))?;
        Ok(json)
    }
}
