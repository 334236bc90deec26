use crate::tmerc::{Ellipsoid, TransverseMercator};

/// The EPSG codes this tool can target. All are Transverse Mercator projections:
///
/// - 25391-25395: Luzon 1911 / Philippine zones I-V (Clarke 1866)
/// - 3121-3125: PRS92 / Philippine zones 1-5 (Clarke 1866)
/// - 32601-32660: WGS84 / UTM northern zones
/// - 32701-32760: WGS84 / UTM southern zones
pub(crate) fn lookup(epsg: u32) -> Option<TransverseMercator> {
    match epsg {
        25391..=25395 => Some(philippine_zone(epsg - 25390)),
        3121..=3125 => Some(philippine_zone(epsg - 3120)),
        32601..=32660 => Some(utm_zone(epsg - 32600, true)),
        32701..=32760 => Some(utm_zone(epsg - 32700, false)),
        _ => None,
    }
}

/// Philippine zones run from 117E to 125E in 2-degree strips, with a slightly tighter scale
/// factor than UTM.
fn philippine_zone(zone: u32) -> TransverseMercator {
    TransverseMercator {
        ellipsoid: Ellipsoid::CLARKE_1866,
        central_meridian_deg: 115.0 + 2.0 * (zone as f64),
        latitude_of_origin_deg: 0.0,
        scale_factor: 0.99995,
        false_easting: 500_000.0,
        false_northing: 0.0,
    }
}

fn utm_zone(zone: u32, northern: bool) -> TransverseMercator {
    TransverseMercator {
        ellipsoid: Ellipsoid::WGS84,
        central_meridian_deg: 6.0 * (zone as f64) - 183.0,
        latitude_of_origin_deg: 0.0,
        scale_factor: 0.9996,
        false_easting: 500_000.0,
        false_northing: if northern { 0.0 } else { 10_000_000.0 },
    }
}
