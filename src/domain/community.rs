// src/domain/community.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Date format used by the catalog source for `dateAdded`.
pub const DATE_ADDED_FORMAT: &str = "%Y-%m-%d";

/// One catalog entry: a residential development offered by a builder.
/// Read-only once loaded, except for `unlocked`, which only the unlock
/// action flips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Community {
    pub id: String,
    pub builder: Builder,
    #[serde(rename = "community")]
    pub location: Location,
    /// Approximate number of homes.
    pub homes: u32,
    /// Typical lot size in acres.
    pub lot_size: f64,
    /// Raw source text, parsed on demand by [`Community::added_on`].
    pub date_added: String,
    pub status: Status,
    pub credits_required: u32,
    /// Display-only labels.
    #[serde(default)]
    pub pricing_factors: Vec<String>,
    pub coordinates: Coordinates,
    #[serde(default)]
    pub unlocked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Builder {
    pub name: String,
    pub logo: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub county: String,
    pub state: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    /// True when the point lies on the globe (|lat| <= 90, |lng| <= 180).
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && self.lat.abs() <= 90.0
            && self.lng.abs() <= 180.0
    }
}

impl Community {
    /// Parses `date_added` as a calendar date. `None` when the source value
    /// is malformed.
    pub fn added_on(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date_added.trim(), DATE_ADDED_FORMAT).ok()
    }

    /// Returns a copy with the unlock flag set.
    pub fn into_unlocked(self) -> Self {
        Self {
            unlocked: true,
            ..self
        }
    }
}

/// Data freshness of a community record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Prime,
    Recent,
    Aged,
    Archived,
}

impl Status {
    /// Every status in declared order; used to build filter choices.
    pub const ALL: [Status; 4] = [Status::Prime, Status::Recent, Status::Aged, Status::Archived];

    /// The declared label, as shown to users and as used by label ordering.
    pub fn label(&self) -> &'static str {
        match self {
            Status::Prime => "PRIME",
            Status::Recent => "RECENT",
            Status::Aged => "AGED",
            Status::Archived => "ARCHIVED",
        }
    }

    /// Business rank, freshest first.
    pub fn severity(&self) -> u8 {
        match self {
            Status::Prime => 0,
            Status::Recent => 1,
            Status::Aged => 2,
            Status::Archived => 3,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Status::ALL
            .into_iter()
            .find(|status| status.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown status '{s}'"))
    }
}
