//! Coordinate Reference System support: bidirectional transforms between geographic
//! longitude/latitude and projected easting/northing, keyed by EPSG code.
//!
//! Every supported projected CRS is a Transverse Mercator variant, which covers the
//! Philippine zone systems this tool was built around plus the worldwide UTM grid. Datum
//! handling stops at ellipsoid selection; no towgs84-style grid shifts are applied.

mod registry;
mod tmerc;

use log::debug;
use thiserror::Error;

use geom::{LonLat, Pt2D};

use crate::tmerc::TransverseMercator;

/// Luzon 1911 / Philippine zone III, the application default.
pub const DEFAULT_EPSG: u32 = 25393;
/// WGS84 longitude/latitude.
pub const GEOGRAPHIC_EPSG: u32 = 4326;

#[derive(Debug, Error, PartialEq)]
pub enum CrsError {
    #[error("EPSG:{0} is unknown or unsupported")]
    UnknownCode(u32),
    #[error("EPSG:{0} is not a projected CRS; traverse math needs linear units")]
    NotProjected(u32),
    #[error("{coordinate} is outside the valid domain of EPSG:{epsg}")]
    OutOfDomain { coordinate: String, epsg: u32 },
}

/// A bidirectional mapping between geographic coordinates and one projected CRS.
pub struct Projection {
    epsg: u32,
    tmerc: TransverseMercator,
}

impl Projection {
    pub fn from_epsg(epsg: u32) -> Result<Projection, CrsError> {
        if epsg == GEOGRAPHIC_EPSG {
            return Err(CrsError::NotProjected(epsg));
        }
        let tmerc = registry::lookup(epsg).ok_or(CrsError::UnknownCode(epsg))?;
        debug!("created projection for EPSG:{}", epsg);
        Ok(Projection { epsg, tmerc })
    }

    pub fn epsg(&self) -> u32 {
        self.epsg
    }

    /// Geographic to projected, used when the reference point is repositioned on a map and new
    /// easting/northing must be derived.
    pub fn from_lonlat(&self, pt: LonLat) -> Result<Pt2D, CrsError> {
        let (easting, northing) = self
            .tmerc
            .forward(pt.longitude(), pt.latitude())
            .ok_or_else(|| CrsError::OutOfDomain {
                coordinate: pt.to_string(),
                epsg: self.epsg,
            })?;
        Ok(Pt2D::new(easting, northing))
    }

    /// Projected to geographic, used for every vertex before it's handed back for display.
    pub fn to_lonlat(&self, pt: Pt2D) -> Result<LonLat, CrsError> {
        let (lon, lat) = self
            .tmerc
            .inverse(pt.easting(), pt.northing())
            .ok_or_else(|| CrsError::OutOfDomain {
                coordinate: pt.to_string(),
                epsg: self.epsg,
            })?;
        Ok(LonLat::new(lon, lat))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_and_non_projected_codes() {
        assert_eq!(
            Projection::from_epsg(99999).err(),
            Some(CrsError::UnknownCode(99999))
        );
        assert_eq!(
            Projection::from_epsg(GEOGRAPHIC_EPSG).err(),
            Some(CrsError::NotProjected(4326))
        );
    }

    #[test]
    fn philippine_zone_structure() {
        // Zone III's central meridian is 121E. On the central meridian at the equator, the
        // projection lands exactly on the false easting.
        let proj = Projection::from_epsg(DEFAULT_EPSG).unwrap();
        let origin = proj.from_lonlat(LonLat::new(121.0, 0.0)).unwrap();
        assert!((origin.easting() - 500_000.0).abs() < 1e-6);
        assert!(origin.northing().abs() < 1e-6);

        // Ten degrees of latitude is roughly 1,106km of meridian arc.
        let north = proj.from_lonlat(LonLat::new(121.0, 10.0)).unwrap();
        assert!((north.easting() - 500_000.0).abs() < 1e-6);
        assert!(north.northing() > 1_100_000.0 && north.northing() < 1_110_000.0);

        // East of the central meridian means a bigger easting.
        let east = proj.from_lonlat(LonLat::new(121.5, 10.0)).unwrap();
        assert!(east.easting() > 500_000.0);
    }

    #[test]
    fn utm_hemispheres() {
        // Zone 51N covers the Philippines.
        let north = Projection::from_epsg(32651).unwrap();
        let pt = north.from_lonlat(LonLat::new(123.0, 10.0)).unwrap();
        assert!((pt.easting() - 500_000.0).abs() < 1e-6);
        assert!(pt.northing() > 0.0);

        // The southern variant adds the 10,000km false northing.
        let south = Projection::from_epsg(32751).unwrap();
        let pt = south.from_lonlat(LonLat::new(123.0, -10.0)).unwrap();
        assert!(pt.northing() > 8_000_000.0 && pt.northing() < 10_000_000.0);
    }

    #[test]
    fn round_trip_lonlat() {
        for epsg in [25393, 3123, 32651] {
            let proj = Projection::from_epsg(epsg).unwrap();
            let orig = LonLat::new(121.05, 14.61);
            let projected = proj.from_lonlat(orig).unwrap();
            let back = proj.to_lonlat(projected).unwrap();
            assert!(
                back.approx_eq(orig, 1e-7),
                "EPSG:{} round trip gave {}",
                epsg,
                back
            );
        }
    }

    #[test]
    fn round_trip_projected() {
        let proj = Projection::from_epsg(DEFAULT_EPSG).unwrap();
        let orig = Pt2D::new(512_345.678, 1_615_432.1);
        let ll = proj.to_lonlat(orig).unwrap();
        let back = proj.from_lonlat(ll).unwrap();
        assert!(back.approx_eq(orig, geom::Distance::meters(0.001)));
    }

    #[test]
    fn out_of_domain() {
        let proj = Projection::from_epsg(DEFAULT_EPSG).unwrap();
        // Nowhere near zone III
        assert!(matches!(
            proj.from_lonlat(LonLat::new(-100.0, 45.0)),
            Err(CrsError::OutOfDomain { .. })
        ));
        // Pole
        assert!(matches!(
            proj.from_lonlat(LonLat::new(121.0, 90.0)),
            Err(CrsError::OutOfDomain { .. })
        ));
    }
}
