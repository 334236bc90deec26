//! Planar and geographic geometry for survey traverses. Projected coordinates are
//! easting/northing pairs in meters; directions are azimuths measured clockwise from true
//! north, the surveying convention.

mod angle;
mod distance;
mod gps;
mod pt;
mod ring;
mod units;

pub use crate::angle::Azimuth;
pub use crate::distance::Distance;
pub use crate::gps::LonLat;
pub use crate::pt::Pt2D;
pub use crate::ring::Ring;
pub use crate::units::UnitFmt;

/// One hectare is 10,000 square meters.
pub const SQM_PER_HECTARE: f64 = 10_000.0;
