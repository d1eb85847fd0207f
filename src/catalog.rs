// src/catalog.rs
use crate::domain::Community;
use crate::errors::CatalogError;
use std::collections::HashSet;
use tracing::{info, warn};

/// Parses a JSON array of communities in the source shape.
/// Ids must be unique; malformed dates and coordinates are kept and
/// handled by the pipeline.
pub fn load_communities(json: &str) -> Result<Vec<Community>, CatalogError> {
    let communities: Vec<Community> = serde_json::from_str(json)
        .map_err(|e| CatalogError::InvalidRecords(format!("parse communities failed: {e}")))?;

    let mut seen = HashSet::new();
    for c in &communities {
        if !seen.insert(c.id.as_str()) {
            return Err(CatalogError::InvalidRecords(format!(
                "duplicate community id '{}'",
                c.id
            )));
        }
        if c.added_on().is_none() {
            warn!(id = %c.id, date_added = %c.date_added, "community has unparseable dateAdded");
        }
        if !c.coordinates.is_valid() {
            warn!(id = %c.id, "community has out-of-range coordinates");
        }
    }

    info!(count = communities.len(), "loaded communities");
    Ok(communities)
}
