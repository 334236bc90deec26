use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use geom::Distance;

use crate::Bearing;

/// One leg of a traverse: a quadrant bearing and a positive distance in meters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SurveyLine {
    pub bearing: Bearing,
    pub distance: Distance,
}

impl SurveyLine {
    /// Parses `<bearing>;<distance>`. Some historical exports carry a third field (an
    /// angle-type tag); extra trailing fields are tolerated and ignored.
    pub fn parse(raw: &str) -> Result<SurveyLine> {
        let mut parts = raw.split(';');
        let bearing_str = parts.next().unwrap_or("");
        let distance_str = match parts.next() {
            Some(s) => s.trim(),
            None => bail!("expected \"<bearing>;<distance>\", got {:?}", raw),
        };

        let bearing = Bearing::parse(bearing_str)?;
        let distance: f64 = match distance_str.parse() {
            Ok(x) => x,
            Err(_) => bail!("invalid distance {:?}", distance_str),
        };
        if !distance.is_finite() || distance <= 0.0 {
            bail!("distance must be a positive number, got {}", distance);
        }
        Ok(SurveyLine {
            bearing,
            distance: Distance::meters(distance),
        })
    }
}
