use std::fmt;

use serde::{Deserialize, Serialize};

/// A geographic coordinate on the WGS84-style longitude/latitude grid, in degrees.
/// Longitude is the x-like axis.
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct LonLat {
    longitude: f64,
    latitude: f64,
}

impl LonLat {
    pub fn new(lon: f64, lat: f64) -> LonLat {
        if !lon.is_finite() || !lat.is_finite() {
            panic!("Bad LonLat({}, {})", lon, lat);
        }
        LonLat {
            longitude: lon,
            latitude: lat,
        }
    }

    pub fn longitude(self) -> f64 {
        self.longitude
    }

    pub fn latitude(self) -> f64 {
        self.latitude
    }

    /// True if both coordinates differ by less than `epsilon_degrees`.
    pub fn approx_eq(self, other: LonLat, epsilon_degrees: f64) -> bool {
        (self.longitude - other.longitude).abs() < epsilon_degrees
            && (self.latitude - other.latitude).abs() < epsilon_degrees
    }
}

impl fmt::Display for LonLat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "LonLat({}, {})", self.longitude, self.latitude)
    }
}
