// src/dashboard.rs
//
// Caller-owned view state. Each edit swaps in a new filter/sort value and
// bumps the generation, so a snapshot computed before the edit can be told
// apart from the current one.

use crate::config::CatalogConfig;
use crate::domain::geos::counties_for;
use crate::domain::{Community, UserTier};
use crate::engine::filter::FilterState;
use crate::engine::geo::{Bounds, GeoRegion};
use crate::engine::sort::{SortColumn, SortState, StatusOrdering};
use crate::engine::compute_view_with;
use crate::errors::UnlockError;
use crate::policy::{unlock, AccessPolicy, AccountId, CreditLedger, Visibility};
use tracing::{debug, warn};

/// One table row: the community and what the current tier may see of it.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewRow {
    pub community: Community,
    pub visibility: Visibility,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewSnapshot {
    /// Dashboard generation this view was computed for.
    pub generation: u64,
    pub rows: Vec<ViewRow>,
}

impl ViewSnapshot {
    pub fn ids(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.community.id.as_str()).collect()
    }
}

pub struct Dashboard {
    communities: Vec<Community>,
    filters: FilterState,
    sort: SortState,
    tier: UserTier,
    viewport: Option<Box<dyn GeoRegion>>,
    generation: u64,
    policy: AccessPolicy,
    status_ordering: StatusOrdering,
}

impl Dashboard {
    pub fn new(communities: Vec<Community>, cfg: &CatalogConfig) -> Self {
        Self {
            communities,
            filters: FilterState::default(),
            sort: SortState::default(),
            tier: UserTier::default(),
            viewport: None,
            generation: 0,
            policy: AccessPolicy::new(cfg),
            status_ordering: cfg.status_ordering,
        }
    }

    pub fn communities(&self) -> &[Community] {
        &self.communities
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// Counties the location filter can offer for the selected state.
    pub fn county_options(&self) -> &'static [&'static str] {
        counties_for(&self.filters.state)
    }

    pub fn sort(&self) -> SortState {
        self.sort
    }

    pub fn tier(&self) -> UserTier {
        self.tier
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn bump(&mut self) {
        self.generation += 1;
    }

    /// Replaces the filters. When the state changes, a county that does not
    /// belong to the new state is dropped.
    pub fn set_filters(&mut self, next: FilterState) {
        let mut next = next;
        if next.state != self.filters.state
            && !next.county.is_empty()
            && !counties_for(&next.state).contains(&next.county.as_str())
        {
            warn!(
                county = %next.county,
                state = %next.state,
                "county does not belong to the selected state, clearing it"
            );
            next.county.clear();
        }
        self.filters = next;
        self.bump();
    }

    /// Header click on `column`.
    pub fn click_column(&mut self, column: SortColumn) {
        self.sort = self.sort.select(column);
        self.bump();
    }

    pub fn set_tier(&mut self, tier: UserTier) {
        self.tier = tier;
        self.bump();
    }

    pub fn cycle_tier(&mut self) -> UserTier {
        self.set_tier(self.tier.next());
        self.tier
    }

    /// Latest viewport wins: any snapshot computed for an earlier viewport
    /// stops being current.
    pub fn on_viewport_change(&mut self, region: Option<Box<dyn GeoRegion>>) {
        self.viewport = region;
        self.bump();
        debug!(generation = self.generation, "viewport changed");
    }

    pub fn is_current(&self, snapshot: &ViewSnapshot) -> bool {
        snapshot.generation == self.generation
    }

    pub fn view(&self) -> ViewSnapshot {
        let rows = compute_view_with(
            &self.communities,
            &self.filters,
            &self.sort,
            self.viewport.as_deref(),
            self.filters.filter_by_viewport,
            self.status_ordering,
        )
        .into_iter()
        .map(|community| ViewRow {
            community: community.clone(),
            visibility: self.policy.visibility(self.tier, community),
        })
        .collect();

        ViewSnapshot {
            generation: self.generation,
            rows,
        }
    }

    /// Box around every community with a valid location, for the map's
    /// initial fit.
    pub fn fit_bounds(&self) -> Option<Bounds> {
        Bounds::enclosing(&self.communities)
    }

    /// Unlocks a community for `account` and stores the unlocked value.
    pub fn unlock<L: CreditLedger>(
        &mut self,
        id: &str,
        account: &AccountId,
        ledger: &mut L,
    ) -> Result<&Community, UnlockError> {
        let idx = self
            .communities
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| UnlockError::UnknownCommunity(id.to_string()))?;

        let was_unlocked = self.communities[idx].unlocked;
        let unlocked = unlock(&self.communities[idx], self.tier, account, ledger)?;
        self.communities[idx] = unlocked;
        if !was_unlocked {
            self.bump();
        }
        Ok(&self.communities[idx])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Status;
    use crate::ledger::MemoryLedger;
    use crate::tests::utils::mock_communities;

    fn dashboard() -> Dashboard {
        Dashboard::new(mock_communities(), &CatalogConfig::default())
    }

    #[test]
    fn test_initial_view_is_input_order() {
        let dash = dashboard();
        let view = dash.view();
        assert_eq!(view.ids(), vec!["1", "2", "3", "4"]);
        assert!(view.rows.iter().all(|r| !r.visibility.detail_link_enabled));
    }

    #[test]
    fn test_stale_snapshot_after_viewport_change() {
        let mut dash = dashboard();
        dash.set_filters(dash.filters().with_viewport_filter(true));

        let before = dash.view();
        assert!(dash.is_current(&before));

        // Dallas / Fort Worth only.
        dash.on_viewport_change(Some(Box::new(Bounds::new(32.0, -98.0, 33.5, -96.0))));
        assert!(!dash.is_current(&before));

        let after = dash.view();
        assert!(dash.is_current(&after));
        assert_eq!(after.ids(), vec!["1", "4"]);
    }

    #[test]
    fn test_viewport_ignored_until_enabled() {
        let mut dash = dashboard();
        dash.on_viewport_change(Some(Box::new(Bounds::new(32.0, -98.0, 33.5, -96.0))));
        assert_eq!(dash.view().ids().len(), 4);
    }

    #[test]
    fn test_set_filters_drops_stale_county() {
        let mut dash = dashboard();
        dash.set_filters(
            FilterState::default()
                .with_state("Texas")
                .with_county("Harris County"),
        );
        assert_eq!(dash.view().ids(), vec!["2"]);
        assert!(dash.county_options().contains(&"Harris County"));

        // Caller forgot to go through with_state.
        let mut stale = dash.filters().clone();
        stale.state = "Florida".to_string();
        dash.set_filters(stale);
        assert_eq!(dash.filters().county, "");
        assert!(!dash.county_options().contains(&"Harris County"));
        assert!(dash.view().rows.is_empty());

        // New state and a county from somewhere else in the same edit.
        let mut mismatched = dash.filters().clone();
        mismatched.state = "Arizona".to_string();
        mismatched.county = "Dallas County".to_string();
        dash.set_filters(mismatched);
        assert_eq!(dash.filters().state, "Arizona");
        assert_eq!(dash.filters().county, "");

        // A county that matches the new state is kept.
        dash.set_filters(
            FilterState::default()
                .with_state("Texas")
                .with_county("Dallas County"),
        );
        assert_eq!(dash.filters().county, "Dallas County");
        assert_eq!(dash.view().ids(), vec!["1"]);
    }

    #[test]
    fn test_click_and_filter_together() {
        let mut dash = dashboard();
        dash.set_filters(
            dash.filters()
                .toggle_status(Status::Prime)
                .toggle_status(Status::Recent),
        );
        dash.click_column(SortColumn::DateAdded);
        assert_eq!(dash.view().ids(), vec!["2", "1"]);
        dash.click_column(SortColumn::DateAdded);
        assert_eq!(dash.view().ids(), vec!["1", "2"]);
    }

    #[test]
    fn test_tier_drives_row_visibility() {
        let mut dash = dashboard();
        assert_eq!(dash.cycle_tier(), UserTier::Pro);
        assert!(dash.view().rows.iter().all(|r| r.visibility.detail_link_enabled));
        assert_eq!(dash.cycle_tier(), UserTier::Intelligence);
        assert!(dash.view().rows.iter().all(|r| r.visibility.metrics_visible));
        assert_eq!(dash.cycle_tier(), UserTier::Basic);
    }

    #[test]
    fn test_unlock_updates_the_stored_record() {
        let mut dash = dashboard();
        let account = AccountId::new("acct-1");
        let mut ledger = MemoryLedger::with_balance(&account, 5);

        let unlocked = dash.unlock("2", &account, &mut ledger).unwrap();
        assert!(unlocked.unlocked);
        assert_eq!(ledger.balance(&account), 2);

        let row = dash
            .view()
            .rows
            .into_iter()
            .find(|r| r.community.id == "2")
            .unwrap();
        assert!(!row.visibility.unlock_available);

        // Record "1" costs 5, only 2 left.
        let err = dash.unlock("1", &account, &mut ledger).unwrap_err();
        assert!(matches!(err, UnlockError::InsufficientCredits { required: 5, available: 2 }));
        assert!(!dash.communities()[0].unlocked);

        let err = dash.unlock("missing", &account, &mut ledger).unwrap_err();
        assert_eq!(err, UnlockError::UnknownCommunity("missing".into()));
    }

    #[test]
    fn test_fit_bounds_covers_every_marker() {
        let dash = dashboard();
        let bounds = dash.fit_bounds().unwrap();
        for c in dash.communities() {
            assert!(bounds.contains(c.coordinates.lat, c.coordinates.lng));
        }
    }
}
