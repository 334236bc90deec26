/// A reference ellipsoid: semi-major axis in meters and first eccentricity squared.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Ellipsoid {
    pub a: f64,
    pub e2: f64,
}

impl Ellipsoid {
    pub const WGS84: Ellipsoid = Ellipsoid {
        a: 6_378_137.0,
        e2: 0.006_694_379_990_14,
    };
    pub const CLARKE_1866: Ellipsoid = Ellipsoid {
        a: 6_378_206.4,
        e2: 0.006_768_657_997_291,
    };
}

/// Transverse Mercator, implemented with the series expansions from Snyder's "Map
/// Projections: A Working Manual" (USGS PP 1395, eqs 8-9 through 8-25). Accurate to
/// millimeters within a normal zone width.
#[derive(Clone, Copy, Debug)]
pub(crate) struct TransverseMercator {
    pub ellipsoid: Ellipsoid,
    pub central_meridian_deg: f64,
    pub latitude_of_origin_deg: f64,
    pub scale_factor: f64,
    pub false_easting: f64,
    pub false_northing: f64,
}

// The series blow up near the poles and lose meaning far from the central meridian.
const MAX_ABS_LAT_DEG: f64 = 89.9;
const MAX_DELTA_LON_DEG: f64 = 45.0;

impl TransverseMercator {
    /// Geographic (degrees) to projected (meters). `None` when the input is outside the
    /// projection's valid domain.
    pub fn forward(&self, lon_deg: f64, lat_deg: f64) -> Option<(f64, f64)> {
        if !lon_deg.is_finite() || !lat_deg.is_finite() {
            return None;
        }
        if lat_deg.abs() > MAX_ABS_LAT_DEG {
            return None;
        }
        let delta_lon_deg = wrap_degrees(lon_deg - self.central_meridian_deg);
        if delta_lon_deg.abs() > MAX_DELTA_LON_DEG {
            return None;
        }

        let Ellipsoid { a, e2 } = self.ellipsoid;
        let ep2 = e2 / (1.0 - e2);
        let k0 = self.scale_factor;

        let phi = lat_deg.to_radians();
        let (sin_phi, cos_phi) = phi.sin_cos();
        let n = a / (1.0 - e2 * sin_phi * sin_phi).sqrt();
        let t = (sin_phi / cos_phi).powi(2);
        let c = ep2 * cos_phi * cos_phi;
        let a_term = delta_lon_deg.to_radians() * cos_phi;

        let m = self.meridional_arc(phi);
        let m0 = self.meridional_arc(self.latitude_of_origin_deg.to_radians());

        let easting = self.false_easting
            + k0 * n
                * (a_term
                    + (1.0 - t + c) * a_term.powi(3) / 6.0
                    + (5.0 - 18.0 * t + t * t + 72.0 * c - 58.0 * ep2) * a_term.powi(5) / 120.0);
        let northing = self.false_northing
            + k0 * (m - m0
                + n * (sin_phi / cos_phi)
                    * (a_term.powi(2) / 2.0
                        + (5.0 - t + 9.0 * c + 4.0 * c * c) * a_term.powi(4) / 24.0
                        + (61.0 - 58.0 * t + t * t + 600.0 * c - 330.0 * ep2) * a_term.powi(6)
                            / 720.0));

        if !easting.is_finite() || !northing.is_finite() {
            return None;
        }
        Some((easting, northing))
    }

    /// Projected (meters) to geographic (degrees). `None` when the input is outside the
    /// projection's valid domain.
    pub fn inverse(&self, easting: f64, northing: f64) -> Option<(f64, f64)> {
        if !easting.is_finite() || !northing.is_finite() {
            return None;
        }

        let Ellipsoid { a, e2 } = self.ellipsoid;
        let ep2 = e2 / (1.0 - e2);
        let k0 = self.scale_factor;

        let m0 = self.meridional_arc(self.latitude_of_origin_deg.to_radians());
        let m = m0 + (northing - self.false_northing) / k0;
        let mu = m / (a * (1.0 - e2 / 4.0 - 3.0 * e2 * e2 / 64.0 - 5.0 * e2.powi(3) / 256.0));
        if mu.abs() > std::f64::consts::FRAC_PI_2 {
            return None;
        }

        let e1 = (1.0 - (1.0 - e2).sqrt()) / (1.0 + (1.0 - e2).sqrt());
        let phi1 = mu
            + (3.0 * e1 / 2.0 - 27.0 * e1.powi(3) / 32.0) * (2.0 * mu).sin()
            + (21.0 * e1 * e1 / 16.0 - 55.0 * e1.powi(4) / 32.0) * (4.0 * mu).sin()
            + (151.0 * e1.powi(3) / 96.0) * (6.0 * mu).sin()
            + (1097.0 * e1.powi(4) / 512.0) * (8.0 * mu).sin();

        let (sin_phi1, cos_phi1) = phi1.sin_cos();
        let c1 = ep2 * cos_phi1 * cos_phi1;
        let t1 = (sin_phi1 / cos_phi1).powi(2);
        let n1 = a / (1.0 - e2 * sin_phi1 * sin_phi1).sqrt();
        let r1 = a * (1.0 - e2) / (1.0 - e2 * sin_phi1 * sin_phi1).powf(1.5);
        let d = (easting - self.false_easting) / (n1 * k0);

        let phi = phi1
            - (n1 * (sin_phi1 / cos_phi1) / r1)
                * (d * d / 2.0
                    - (5.0 + 3.0 * t1 + 10.0 * c1 - 4.0 * c1 * c1 - 9.0 * ep2) * d.powi(4) / 24.0
                    + (61.0 + 90.0 * t1 + 298.0 * c1 + 45.0 * t1 * t1
                        - 252.0 * ep2
                        - 3.0 * c1 * c1)
                        * d.powi(6)
                        / 720.0);
        let delta_lon = (d - (1.0 + 2.0 * t1 + c1) * d.powi(3) / 6.0
            + (5.0 - 2.0 * c1 + 28.0 * t1 - 3.0 * c1 * c1 + 8.0 * ep2 + 24.0 * t1 * t1)
                * d.powi(5)
                / 120.0)
            / cos_phi1;

        let lat_deg = phi.to_degrees();
        let delta_lon_deg = delta_lon.to_degrees();
        if !lat_deg.is_finite() || !delta_lon_deg.is_finite() {
            return None;
        }
        if lat_deg.abs() > MAX_ABS_LAT_DEG || delta_lon_deg.abs() > MAX_DELTA_LON_DEG {
            return None;
        }
        Some((wrap_degrees(self.central_meridian_deg + delta_lon_deg), lat_deg))
    }

    /// Distance along the meridian from the equator to latitude `phi` (radians), in meters.
    fn meridional_arc(&self, phi: f64) -> f64 {
        let Ellipsoid { a, e2 } = self.ellipsoid;
        let e4 = e2 * e2;
        let e6 = e4 * e2;
        a * ((1.0 - e2 / 4.0 - 3.0 * e4 / 64.0 - 5.0 * e6 / 256.0) * phi
            - (3.0 * e2 / 8.0 + 3.0 * e4 / 32.0 + 45.0 * e6 / 1024.0) * (2.0 * phi).sin()
            + (15.0 * e4 / 256.0 + 45.0 * e6 / 1024.0) * (4.0 * phi).sin()
            - (35.0 * e6 / 3072.0) * (6.0 * phi).sin())
    }
}

/// Wraps a longitude difference into [-180, 180].
fn wrap_degrees(degs: f64) -> f64 {
    let wrapped = degs.rem_euclid(360.0);
    if wrapped > 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}
