// src/engine/geo.rs
//
// Viewport narrowing. The map collaborator owns the geometry; all the
// pipeline needs from it is a point-containment predicate.

use crate::domain::{Community, Coordinates};
use tracing::debug;

/// A geographic area supplied by the map, e.g. the visible viewport.
pub trait GeoRegion {
    fn contains(&self, lat: f64, lng: f64) -> bool;
}

impl<F> GeoRegion for F
where
    F: Fn(f64, f64) -> bool,
{
    fn contains(&self, lat: f64, lng: f64) -> bool {
        self(lat, lng)
    }
}

/// Lat/lng box in the shape map viewports report.
/// `west > east` means the box crosses the antimeridian.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl Bounds {
    pub fn new(south: f64, west: f64, north: f64, east: f64) -> Self {
        Self {
            south,
            west,
            north,
            east,
        }
    }

    pub fn crosses_antimeridian(&self) -> bool {
        self.west > self.east
    }

    /// Smallest box holding every valid coordinate, for fitting the map
    /// to the current markers. `None` when there is nothing to fit.
    pub fn enclosing<'a>(records: impl IntoIterator<Item = &'a Community>) -> Option<Self> {
        records
            .into_iter()
            .map(|c| c.coordinates)
            .filter(Coordinates::is_valid)
            .fold(None, |acc: Option<Bounds>, p| {
                Some(match acc {
                    None => Bounds::new(p.lat, p.lng, p.lat, p.lng),
                    Some(b) => Bounds::new(
                        b.south.min(p.lat),
                        b.west.min(p.lng),
                        b.north.max(p.lat),
                        b.east.max(p.lng),
                    ),
                })
            })
    }
}

impl GeoRegion for Bounds {
    fn contains(&self, lat: f64, lng: f64) -> bool {
        if lat < self.south || lat > self.north {
            return false;
        }
        if self.crosses_antimeridian() {
            lng >= self.west || lng <= self.east
        } else {
            lng >= self.west && lng <= self.east
        }
    }
}

/// Identity unless `enabled` and a region is present; otherwise keeps the
/// communities the region contains. Out-of-range coordinates never pass.
pub fn apply<'a>(
    records: impl IntoIterator<Item = &'a Community>,
    region: Option<&dyn GeoRegion>,
    enabled: bool,
) -> Vec<&'a Community> {
    let region = match region {
        Some(region) if enabled => region,
        _ => return records.into_iter().collect(),
    };

    let out: Vec<&Community> = records
        .into_iter()
        .filter(|c| {
            if !c.coordinates.is_valid() {
                debug!(id = %c.id, lat = c.coordinates.lat, lng = c.coordinates.lng, "coordinates out of range");
                return false;
            }
            region.contains(c.coordinates.lat, c.coordinates.lng)
        })
        .collect();

    debug!(kept = out.len(), "viewport stage applied");
    out
}
