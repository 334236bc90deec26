use std::fmt;

use serde::{Deserialize, Serialize};

/// A direction in degrees, measured clockwise from true north and normalized to [0, 360).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Azimuth(f64);

impl Azimuth {
    pub fn degrees(degs: f64) -> Azimuth {
        if !degs.is_finite() {
            panic!("Bad Azimuth {}", degs);
        }
        Azimuth(degs.rem_euclid(360.0))
    }

    /// The azimuth of the displacement (Δeasting, Δnorthing). A zero vector points north.
    pub fn from_vector(d_easting: f64, d_northing: f64) -> Azimuth {
        Azimuth::degrees(d_easting.atan2(d_northing).to_degrees())
    }

    pub fn normalized_degrees(self) -> f64 {
        self.0
    }

    pub fn to_radians(self) -> f64 {
        self.0.to_radians()
    }
}

impl fmt::Display for Azimuth {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Azimuth({} degrees)", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_vector_quadrants() {
        for (de, dn, expected) in [
            (0.0, 1.0, 0.0),
            (1.0, 0.0, 90.0),
            (0.0, -1.0, 180.0),
            (-1.0, 0.0, 270.0),
            (1.0, 1.0, 45.0),
            (-1.0, -1.0, 225.0),
        ] {
            let az = Azimuth::from_vector(de, dn);
            assert!(
                (az.normalized_degrees() - expected).abs() < 1e-9,
                "({}, {}) gave {}",
                de,
                dn,
                az
            );
        }
    }

    #[test]
    fn normalization() {
        assert_eq!(Azimuth::degrees(-90.0).normalized_degrees(), 270.0);
        assert_eq!(Azimuth::degrees(720.0).normalized_degrees(), 0.0);
    }
}
