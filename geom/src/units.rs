use serde::{Deserialize, Serialize};

use crate::{Distance, SQM_PER_HECTARE};

/// Describes how to format displayed quantities. The source data never documented a precision
/// rationale, so the decimal places are configurable, with defaults matching the observed
/// output.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UnitFmt {
    pub distance_decimals: usize,
    pub sqm_decimals: usize,
    pub hectare_decimals: usize,
}

impl Default for UnitFmt {
    fn default() -> UnitFmt {
        UnitFmt {
            distance_decimals: 3,
            sqm_decimals: 3,
            hectare_decimals: 4,
        }
    }
}

impl UnitFmt {
    pub fn distance(&self, dist: Distance) -> String {
        format!("{:.*}m", self.distance_decimals, dist.inner_meters())
    }

    pub fn square_meters(&self, sqm: f64) -> String {
        format!("{:.*} sqm", self.sqm_decimals, sqm)
    }

    pub fn hectares(&self, sqm: f64) -> String {
        format!("{:.*} ha", self.hectare_decimals, sqm / SQM_PER_HECTARE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_formatting() {
        let fmt = UnitFmt::default();
        assert_eq!(fmt.distance(Distance::meters(0.05)), "0.050m");
        assert_eq!(fmt.square_meters(10_000.0), "10000.000 sqm");
        assert_eq!(fmt.hectares(10_000.0), "1.0000 ha");
    }

    #[test]
    fn configurable_precision() {
        let fmt = UnitFmt {
            distance_decimals: 2,
            sqm_decimals: 0,
            hectare_decimals: 2,
        };
        assert_eq!(fmt.distance(Distance::meters(12.3)), "12.30m");
        assert_eq!(fmt.square_meters(10_000.4), "10000 sqm");
        assert_eq!(fmt.hectares(12_345.0), "1.23 ha");
    }
}
