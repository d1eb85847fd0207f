//! The view pipeline: filter, then (optionally) viewport, then sort.
//! Every stage is a pure function of its inputs and never fails.

pub mod filter;
pub mod geo;
pub mod sort;

use crate::domain::Community;
use filter::FilterState;
use geo::GeoRegion;
use sort::{SortState, StatusOrdering};

/// Runs the full pipeline with label ordering for statuses.
pub fn compute_view<'a>(
    records: &'a [Community],
    filters: &FilterState,
    sort: &SortState,
    viewport: Option<&dyn GeoRegion>,
    viewport_enabled: bool,
) -> Vec<&'a Community> {
    compute_view_with(
        records,
        filters,
        sort,
        viewport,
        viewport_enabled,
        StatusOrdering::default(),
    )
}

pub fn compute_view_with<'a>(
    records: &'a [Community],
    filters: &FilterState,
    sort: &SortState,
    viewport: Option<&dyn GeoRegion>,
    viewport_enabled: bool,
    statuses: StatusOrdering,
) -> Vec<&'a Community> {
    let filtered = filter::apply(records, filters);
    let visible = geo::apply(filtered, viewport, viewport_enabled);
    sort::apply(visible, sort, statuses)
}
