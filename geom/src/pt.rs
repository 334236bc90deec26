use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Azimuth, Distance};

/// A point in a projected CRS. Easting and northing are in that CRS's linear units, meters.
/// Unlike screen-space conventions, northing grows northwards.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pt2D {
    easting: f64,
    northing: f64,
}

impl Pt2D {
    pub fn new(easting: f64, northing: f64) -> Pt2D {
        if !easting.is_finite() || !northing.is_finite() {
            panic!("Bad Pt2D({}, {})", easting, northing);
        }
        Pt2D { easting, northing }
    }

    pub fn easting(self) -> f64 {
        self.easting
    }

    pub fn northing(self) -> f64 {
        self.northing
    }

    /// The point reached by walking `dist` along `azimuth`. Azimuth is clockwise from north, so
    /// the easting component is the sine term.
    pub fn project_away(self, dist: Distance, azimuth: Azimuth) -> Pt2D {
        let rads = azimuth.to_radians();
        Pt2D::new(
            self.easting + dist.inner_meters() * rads.sin(),
            self.northing + dist.inner_meters() * rads.cos(),
        )
    }

    pub fn dist_to(self, to: Pt2D) -> Distance {
        Distance::meters((to.easting - self.easting).hypot(to.northing - self.northing))
    }

    /// The azimuth of the line from this point towards `to`.
    pub fn azimuth_to(self, to: Pt2D) -> Azimuth {
        Azimuth::from_vector(to.easting - self.easting, to.northing - self.northing)
    }

    pub fn approx_eq(self, other: Pt2D, threshold: Distance) -> bool {
        self.dist_to(other) <= threshold
    }
}

impl fmt::Display for Pt2D {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Pt2D({}, {})", self.easting, self.northing)
    }
}
