// src/policy/access.rs

use crate::config::CatalogConfig;
use crate::domain::{Community, UserTier};
use std::collections::BTreeSet;

/// Per-row fields and affordances gated by tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    UnlockAction,
    DetailLink,
    HomesSold,
    AveragePrice,
}

/// What a row shows for a given tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visibility {
    pub detail_link_enabled: bool,
    /// Homes sold and average price.
    pub metrics_visible: bool,
    /// Always present, whatever the tier.
    pub unlock_label: String,
    /// False once the community has been unlocked.
    pub unlock_available: bool,
    /// Locked indicator text when the detail link is disabled.
    pub detail_hint: Option<String>,
    /// Placeholder text when metrics are hidden.
    pub metrics_hint: Option<String>,
}

impl Visibility {
    pub fn fields(&self) -> BTreeSet<Field> {
        let mut fields = BTreeSet::from([Field::UnlockAction]);
        if self.detail_link_enabled {
            fields.insert(Field::DetailLink);
        }
        if self.metrics_visible {
            fields.insert(Field::HomesSold);
            fields.insert(Field::AveragePrice);
        }
        fields
    }
}

pub fn unlock_label(credits: u32) -> String {
    format!("Unlock for {credits} Credits")
}

/// All tier rules in one place. Pure: never touches the record.
#[derive(Debug, Clone)]
pub struct AccessPolicy {
    locked_detail_hint: String,
    metrics_placeholder: String,
}

impl Default for AccessPolicy {
    fn default() -> Self {
        Self::new(&CatalogConfig::default())
    }
}

impl AccessPolicy {
    pub fn new(cfg: &CatalogConfig) -> Self {
        Self {
            locked_detail_hint: cfg.locked_detail_hint.clone(),
            metrics_placeholder: cfg.metrics_placeholder.clone(),
        }
    }

    pub fn visibility(&self, tier: UserTier, community: &Community) -> Visibility {
        let detail_link_enabled = tier >= UserTier::Pro;
        let metrics_visible = tier >= UserTier::Intelligence;

        Visibility {
            detail_link_enabled,
            metrics_visible,
            unlock_label: unlock_label(community.credits_required),
            unlock_available: !community.unlocked,
            detail_hint: (!detail_link_enabled).then(|| self.locked_detail_hint.clone()),
            metrics_hint: (!metrics_visible).then(|| self.metrics_placeholder.clone()),
        }
    }
}

/// [`AccessPolicy::visibility`] with the default hint texts.
pub fn visibility(tier: UserTier, community: &Community) -> Visibility {
    AccessPolicy::default().visibility(tier, community)
}
