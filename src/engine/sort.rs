// src/engine/sort.rs

use crate::domain::{Community, Status};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Sortable table columns, identified by the ids the table header uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortColumn {
    Builder,
    Community,
    Homes,
    LotSize,
    DateAdded,
    Status,
}

impl SortColumn {
    pub const ALL: [SortColumn; 6] = [
        SortColumn::Builder,
        SortColumn::Community,
        SortColumn::Homes,
        SortColumn::LotSize,
        SortColumn::DateAdded,
        SortColumn::Status,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortColumn::Builder => "builder",
            SortColumn::Community => "community",
            SortColumn::Homes => "homes",
            SortColumn::LotSize => "lotSize",
            SortColumn::DateAdded => "dateAdded",
            SortColumn::Status => "status",
        }
    }
}

impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortColumn {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortColumn::ALL
            .into_iter()
            .find(|column| column.as_str() == s)
            .ok_or_else(|| format!("unknown sort column '{s}'"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    pub fn flipped(self) -> Self {
        match self {
            Direction::Asc => Direction::Desc,
            Direction::Desc => Direction::Asc,
        }
    }
}

/// Active sort. `column: None` keeps input order and is only the initial
/// state; no sequence of clicks leads back to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    pub column: Option<SortColumn>,
    pub direction: Direction,
}

impl SortState {
    pub fn by(column: SortColumn, direction: Direction) -> Self {
        Self {
            column: Some(column),
            direction,
        }
    }

    /// Header click: a new column starts ascending, the active column flips.
    pub fn select(self, column: SortColumn) -> Self {
        if self.column == Some(column) {
            Self {
                column: self.column,
                direction: self.direction.flipped(),
            }
        } else {
            Self::by(column, Direction::Asc)
        }
    }
}

/// How status values compare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusOrdering {
    /// By label text: AGED < ARCHIVED < PRIME < RECENT.
    #[default]
    Label,
    /// By freshness: PRIME < RECENT < AGED < ARCHIVED.
    Severity,
}

impl StatusOrdering {
    pub fn compare(&self, a: Status, b: Status) -> Ordering {
        match self {
            StatusOrdering::Label => a.label().cmp(b.label()),
            StatusOrdering::Severity => a.severity().cmp(&b.severity()),
        }
    }
}

/// Malformed dates sort as the earliest possible date.
fn sort_date(community: &Community) -> NaiveDate {
    community.added_on().unwrap_or(NaiveDate::MIN)
}

fn compare(a: &Community, b: &Community, column: SortColumn, statuses: StatusOrdering) -> Ordering {
    match column {
        SortColumn::Builder => a.builder.name.cmp(&b.builder.name),
        SortColumn::Community => a.location.name.cmp(&b.location.name),
        SortColumn::Homes => a.homes.cmp(&b.homes),
        SortColumn::LotSize => a.lot_size.total_cmp(&b.lot_size),
        SortColumn::DateAdded => sort_date(a).cmp(&sort_date(b)),
        SortColumn::Status => statuses.compare(a.status, b.status),
    }
}

/// Orders communities by the active column. Stable in both directions:
/// equal keys keep their input order.
pub fn apply<'a>(
    records: impl IntoIterator<Item = &'a Community>,
    sort: &SortState,
    statuses: StatusOrdering,
) -> Vec<&'a Community> {
    let mut out: Vec<&Community> = records.into_iter().collect();

    let Some(column) = sort.column else {
        return out;
    };

    // Loading already warns once per bad record; re-sorts only trace it.
    if column == SortColumn::DateAdded {
        for c in out.iter().filter(|c| c.added_on().is_none()) {
            debug!(id = %c.id, date_added = %c.date_added, "unparseable dateAdded, sorting as earliest");
        }
    }

    // slice::sort_by is stable; reversing only the comparator keeps ties in input order.
    out.sort_by(|a, b| {
        let ord = compare(a, b, column, statuses);
        match sort.direction {
            Direction::Asc => ord,
            Direction::Desc => ord.reverse(),
        }
    });
    out
}
