//! The traverse-to-geometry engine. Parses bearing/distance survey lines, walks them into
//! projected vertices from a reference monument, reports the error of closure, force-closes
//! the parcel ring for display, reprojects everything to longitude/latitude, and computes
//! planar area.
//!
//! Each computation is a pure function of its inputs; nothing here holds state across
//! requests.

mod bearing;
mod line;
mod misclosure;
mod plot;
mod traverse;

pub use crate::bearing::{quadrant_string, Bearing, EastWest, NorthSouth};
pub use crate::line::SurveyLine;
pub use crate::misclosure::{Misclosure, MisclosureReport};
pub use crate::plot::{
    plot_lot, plot_lots, AreaReport, LotInput, LotOutcome, LotReport, OverallStatus,
    ParcelGeometry, PlotResponse,
};
pub use crate::traverse::Traverse;

use crs::{CrsError, Projection};
use geom::{LonLat, Pt2D};

/// Derives projected coordinates for a reference point that was repositioned on a map, e.g.
/// by dragging its marker.
pub fn reposition_reference(epsg: u32, pt: LonLat) -> Result<Pt2D, CrsError> {
    Projection::from_epsg(epsg)?.from_lonlat(pt)
}
