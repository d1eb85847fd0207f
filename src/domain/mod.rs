pub mod community;
pub mod geos;
pub mod tier;

pub use community::{Builder, Community, Coordinates, Location, Status};
pub use tier::UserTier;
