use serde::{Deserialize, Serialize};

use geom::{Azimuth, Distance, Pt2D, UnitFmt};

use crate::quadrant_string;

/// The error of closure of a traverse that was meant to close back on itself: how far the
/// computed terminus landed from the point-of-beginning, and the direction a surveyor would
/// have to walk from the terminus to close the figure.
///
/// This is always the raw, uncorrected error. The parcel ring drawn for display is separately
/// force-closed; the two concerns are deliberately kept apart so the misclosure stays an
/// honest measure of survey quality.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Misclosure {
    pub distance: Distance,
    /// Direction from the terminus back to the point-of-beginning.
    pub closing_azimuth: Azimuth,
}

impl Misclosure {
    pub fn between(pob: Pt2D, terminus: Pt2D) -> Misclosure {
        Misclosure {
            distance: terminus.dist_to(pob),
            closing_azimuth: terminus.azimuth_to(pob),
        }
    }

    pub fn report(&self, fmt: &UnitFmt) -> MisclosureReport {
        MisclosureReport {
            distance: fmt.distance(self.distance),
            bearing: quadrant_string(self.closing_azimuth),
        }
    }
}

/// The display form: a fixed-precision distance and a quadrant-bearing string.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MisclosureReport {
    pub distance: String,
    pub bearing: String,
}
