// src/config.rs
use crate::engine::sort::StatusOrdering;
use crate::errors::CatalogError;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CatalogConfig {
    /// Comparator used when sorting by status.
    pub status_ordering: StatusOrdering,
    /// Shown in place of the detail link for tiers below Pro.
    pub locked_detail_hint: String,
    /// Shown in place of homes-sold / average-price below Intelligence.
    pub metrics_placeholder: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            status_ordering: StatusOrdering::Label,
            locked_detail_hint: "Upgrade to Pro for access".to_string(),
            metrics_placeholder: "Coming soon in our Intelligence Plan".to_string(),
        }
    }
}

impl CatalogConfig {
    /// Missing keys fall back to the defaults above.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        serde_json::from_str(json)
            .map_err(|e| CatalogError::InvalidConfig(format!("parse config failed: {e}")))
    }
}
