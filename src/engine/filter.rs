// src/engine/filter.rs

use crate::domain::{Community, Status};
use std::collections::BTreeSet;
use tracing::debug;

/// User-selected filters. An empty value leaves that criterion unconstrained.
/// Edits go through the `with_*` methods, each of which returns a new value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub state: String,
    /// Only meaningful relative to `state`; reset whenever `state` changes.
    pub county: String,
    /// Case-insensitive substring of the builder name.
    pub builder_query: String,
    /// Empty means every status passes.
    pub statuses: BTreeSet<Status>,
    pub filter_by_viewport: bool,
}

impl FilterState {
    /// Selecting a different state clears the county.
    pub fn with_state(&self, state: impl Into<String>) -> Self {
        let state = state.into();
        let county = if state == self.state {
            self.county.clone()
        } else {
            String::new()
        };
        Self {
            state,
            county,
            ..self.clone()
        }
    }

    pub fn with_county(&self, county: impl Into<String>) -> Self {
        Self {
            county: county.into(),
            ..self.clone()
        }
    }

    pub fn with_builder_query(&self, query: impl Into<String>) -> Self {
        Self {
            builder_query: query.into(),
            ..self.clone()
        }
    }

    /// Adds the status if absent, removes it otherwise.
    pub fn toggle_status(&self, status: Status) -> Self {
        let mut statuses = self.statuses.clone();
        if !statuses.remove(&status) {
            statuses.insert(status);
        }
        Self {
            statuses,
            ..self.clone()
        }
    }

    pub fn with_viewport_filter(&self, enabled: bool) -> Self {
        Self {
            filter_by_viewport: enabled,
            ..self.clone()
        }
    }

    /// True when no criterion would exclude anything.
    pub fn is_unconstrained(&self) -> bool {
        self.state.is_empty()
            && self.county.is_empty()
            && self.builder_query.is_empty()
            && self.statuses.is_empty()
    }

    /// Every active criterion must hold; statuses match if any selected one does.
    pub fn matches(&self, community: &Community) -> bool {
        if !self.state.is_empty() && community.location.state != self.state {
            return false;
        }
        // Applied literally, even without a state.
        if !self.county.is_empty() && community.location.county != self.county {
            return false;
        }
        if !self.builder_query.is_empty()
            && !community
                .builder
                .name
                .to_lowercase()
                .contains(&self.builder_query.to_lowercase())
        {
            return false;
        }
        if !self.statuses.is_empty() && !self.statuses.contains(&community.status) {
            return false;
        }
        true
    }
}

/// Keeps the communities passing `filters`, in input order.
pub fn apply<'a>(
    records: impl IntoIterator<Item = &'a Community>,
    filters: &FilterState,
) -> Vec<&'a Community> {
    let out: Vec<&Community> = records
        .into_iter()
        .filter(|community| filters.matches(community))
        .collect();

    debug!(kept = out.len(), ?filters, "filter stage applied");
    out
}
