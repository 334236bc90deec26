use serde::{Deserialize, Serialize};

use crate::Pt2D;

/// A closed polygon boundary in projected coordinates. The first point equals the last.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ring {
    // first equals last
    pts: Vec<Pt2D>,
}

impl Ring {
    /// `pts` must already be closed and describe at least 3 distinct vertices. Returns `None`
    /// for anything degenerate; callers treat that as a zero-area boundary, not an error.
    pub fn maybe_new(pts: Vec<Pt2D>) -> Option<Ring> {
        if pts.len() < 4 {
            return None;
        }
        if pts[0] != *pts.last().unwrap() {
            return None;
        }
        Some(Ring { pts })
    }

    /// Planar area by the surveyor's (shoelace) formula, in square meters. Only meaningful in a
    /// linear-unit CRS; never compute this on geographic degrees.
    pub fn area_sqm(&self) -> f64 {
        // Work relative to the first vertex. The raw cross products of UTM-scale coordinates
        // are around 1e11, where f64 cancellation would cost the result its centimeters.
        let e0 = self.pts[0].easting();
        let n0 = self.pts[0].northing();
        let mut doubled = 0.0;
        for pair in self.pts.windows(2) {
            let (xi, yi) = (pair[0].easting() - e0, pair[0].northing() - n0);
            let (xj, yj) = (pair[1].easting() - e0, pair[1].northing() - n0);
            doubled += xi * yj - xj * yi;
        }
        (doubled / 2.0).abs()
    }
}
