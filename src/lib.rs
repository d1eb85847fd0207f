//! Catalog engine for residential-development communities: filtering,
//! viewport narrowing, sorting, tier-gated visibility and credit unlocks.
//!
//! ```text
//! records + FilterState -> filter -> [viewport] -> sort -> rows
//!                                            AccessPolicy per row
//! ```

pub mod catalog;
pub mod config;
pub mod dashboard;
pub mod domain;
pub mod engine;
pub mod errors;
pub mod ledger;
pub mod policy;

#[cfg(test)]
mod tests;

pub use catalog::load_communities;
pub use config::CatalogConfig;
pub use dashboard::{Dashboard, ViewRow, ViewSnapshot};
pub use domain::{Builder, Community, Coordinates, Location, Status, UserTier};
pub use engine::filter::FilterState;
pub use engine::geo::{Bounds, GeoRegion};
pub use engine::sort::{Direction, SortColumn, SortState, StatusOrdering};
pub use engine::{compute_view, compute_view_with};
pub use errors::{CatalogError, LedgerError, UnlockError};
pub use policy::{unlock, visibility, AccessPolicy, AccountId, CreditLedger, Field, Visibility};
