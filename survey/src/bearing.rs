use std::fmt;

use anyhow::{bail, Result};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use geom::Azimuth;

/// Whether a quadrant bearing is measured from true north or true south.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NorthSouth {
    North,
    South,
}

/// Which way a quadrant bearing swings from its reference axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EastWest {
    East,
    West,
}

/// A quadrant bearing like "N 45D 30′ E": an angle under 90 degrees measured from north or
/// south toward east or west. Raw strings are parsed into this at the boundary; everything
/// downstream works with typed values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bearing {
    pub ns: NorthSouth,
    pub degrees: u8,
    pub minutes: u8,
    pub ew: EastWest,
}

lazy_static! {
    // The single point of truth for bearing syntax. Minutes accept both the ASCII apostrophe
    // and the Unicode prime mark.
    static ref BEARING_RE: Regex =
        Regex::new(r"(?i)^([NS])\s*([0-9]{1,2})D\s*([0-9]{1,2})[′']\s*([EW])$").unwrap();
}

impl Bearing {
    pub fn new(ns: NorthSouth, degrees: u8, minutes: u8, ew: EastWest) -> Result<Bearing> {
        // 90 degrees would be ambiguous with the neighboring quadrant
        if degrees > 89 {
            bail!("bearing degrees must be 0-89, got {}", degrees);
        }
        if minutes > 59 {
            bail!("bearing minutes must be 0-59, got {}", minutes);
        }
        Ok(Bearing {
            ns,
            degrees,
            minutes,
            ew,
        })
    }

    pub fn parse(token: &str) -> Result<Bearing> {
        let caps = match BEARING_RE.captures(token.trim()) {
            Some(caps) => caps,
            None => bail!("unparseable bearing {:?}", token.trim()),
        };
        let ns = if caps[1].eq_ignore_ascii_case("N") {
            NorthSouth::North
        } else {
            NorthSouth::South
        };
        let ew = if caps[4].eq_ignore_ascii_case("E") {
            EastWest::East
        } else {
            EastWest::West
        };
        // One or two digits, so always in u8 range
        let degrees: u8 = caps[2].parse().unwrap();
        let minutes: u8 = caps[3].parse().unwrap();
        Bearing::new(ns, degrees, minutes, ew)
    }

    /// The quadrant angle in decimal degrees.
    fn angle_degrees(self) -> f64 {
        f64::from(self.degrees) + f64::from(self.minutes) / 60.0
    }

    /// Converts to an azimuth, 0-360 clockwise from true north.
    pub fn to_azimuth(self) -> Azimuth {
        let angle = self.angle_degrees();
        Azimuth::degrees(match (self.ns, self.ew) {
            (NorthSouth::North, EastWest::East) => angle,
            (NorthSouth::South, EastWest::East) => 180.0 - angle,
            (NorthSouth::South, EastWest::West) => 180.0 + angle,
            (NorthSouth::North, EastWest::West) => 360.0 - angle,
        })
    }
}

impl fmt::Display for Bearing {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let ns = match self.ns {
            NorthSouth::North => 'N',
            NorthSouth::South => 'S',
        };
        let ew = match self.ew {
            EastWest::East => 'E',
            EastWest::West => 'W',
        };
        write!(f, "{} {:02}D {:02}′ {}", ns, self.degrees, self.minutes, ew)
    }
}

/// Formats an arbitrary azimuth as a quadrant-bearing string, rounded to the nearest whole
/// minute. Used for diagnostics like the misclosure direction. An azimuth of exactly 90 or
/// 270 comes out as 90D, which has no in-range `Bearing` equivalent but reads fine.
pub fn quadrant_string(azimuth: Azimuth) -> String {
    // Snap to whole minutes before picking the quadrant, so a floating-point residue like
    // 179.99999999999997 degrees can't flip the east/west letter.
    let total = (azimuth.normalized_degrees() * 60.0).round() as u32 % 21_600;
    let (ns, ew, angle_minutes) = if total < 5_400 {
        ('N', 'E', total)
    } else if total < 10_800 {
        ('S', 'E', 10_800 - total)
    } else if total < 16_200 {
        ('S', 'W', total - 10_800)
    } else {
        ('N', 'W', 21_600 - total)
    };
    format!(
        "{} {:02}D {:02}′ {}",
        ns,
        angle_minutes / 60,
        angle_minutes % 60,
        ew
    )
}
