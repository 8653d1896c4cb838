/*
 Albers equal-area conic projection on a sphere.
 Formulas from https://en.wikipedia.org/wiki/Albers_projection.

 Parameters follow O.S. Adams, General Theory of Equivalent Projections
 (1945), p.37: a whole-world equal-area map centered on the north pole,
 separated along 170 west (Bering Strait), without deformation along the
 parallel 18°25' south. The north pole is a singular point.
*/
use std::f64::consts::PI;

use lazy_static::lazy_static;

use crate::error::{Error, Result};
use crate::point::{AlbersPoint, WGS84Point};

// WGS84 semi-major axis, meters.
pub const EARTH_RADIUS: f64 = 6378137.0;
pub const CENTRAL_MERIDIAN: f64 = -10.0;
pub const REFERENCE_LATITUDE: f64 = 90.0;
pub const STANDARD_PARALLEL_1: f64 = 90.0;
pub const STANDARD_PARALLEL_2: f64 = -(18.0 + 25.0 / 60.0);
// Longitudes strictly below this are moved past +180 (found experimentally,
// the map is cut at 170 west).
pub const SEPARATION_LONGITUDE: f64 = -169.0;

/// Angles in degrees, radius in meters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AlbersParameters {
    pub radius: f64,
    pub lon0: f64,
    pub lat0: f64,
    pub lat1: f64,
    pub lat2: f64,
    pub separation: f64,
}

impl AlbersParameters {
    pub const WORLD: AlbersParameters = AlbersParameters {
        radius: EARTH_RADIUS,
        lon0: CENTRAL_MERIDIAN,
        lat0: REFERENCE_LATITUDE,
        lat1: STANDARD_PARALLEL_1,
        lat2: STANDARD_PARALLEL_2,
        separation: SEPARATION_LONGITUDE,
    };

    fn all_finite(&self) -> bool {
        [
            self.radius,
            self.lon0,
            self.lat0,
            self.lat1,
            self.lat2,
            self.separation,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}

impl Default for AlbersParameters {
    fn default() -> Self {
        AlbersParameters::WORLD
    }
}

pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// Projection with its cone constants precomputed.
#[derive(Clone, Copy, Debug)]
pub struct AlbersProjection {
    params: AlbersParameters,
    lambda0: f64,
    n: f64,
    c: f64,
    rho0: f64,
}

lazy_static! {
    static ref WORLD: AlbersProjection = AlbersProjection::derive(AlbersParameters::WORLD);
}

impl AlbersProjection {
    pub fn new(params: AlbersParameters) -> Result<AlbersProjection> {
        if !params.all_finite() {
            return Err(Error::InvalidInput(format!(
                "non finite albers parameters: {:?}",
                params
            )));
        }
        if params.radius <= 0.0 {
            return Err(Error::InvalidInput(format!(
                "radius must be positive, got {}",
                params.radius
            )));
        }
        let ret = Self::derive(params);
        if ret.n == 0.0 {
            return Err(Error::InvalidInput(format!(
                "standard parallels {} and {} give a zero cone constant",
                params.lat1, params.lat2
            )));
        }
        // C - 2n.sin(phi) is linear in sin(phi), checking both poles is enough.
        if ret.c - 2.0 * ret.n < 0.0 || ret.c + 2.0 * ret.n < 0.0 {
            return Err(Error::InvalidInput(format!(
                "standard parallels {} and {} do not cover the sphere",
                params.lat1, params.lat2
            )));
        }
        Ok(ret)
    }

    /// The Adams 1945 world map.
    pub fn world() -> &'static AlbersProjection {
        &WORLD
    }

    fn derive(params: AlbersParameters) -> AlbersProjection {
        let lambda0 = degrees_to_radians(params.lon0);
        let phi0 = degrees_to_radians(params.lat0);
        let phi1 = degrees_to_radians(params.lat1);
        let phi2 = degrees_to_radians(params.lat2);

        let n = (phi1.sin() + phi2.sin()) / 2.0;
        let c = phi1.cos().powi(2) + 2.0 * n * phi1.sin();
        // zero for a pole centered map, but keep the formula.
        let rho0 = (c - 2.0 * n * phi0.sin()).sqrt() / n;
        log::trace!("albers: n: {} C: {} rho0: {}", n, c, rho0);
        AlbersProjection {
            params,
            lambda0,
            n,
            c,
            rho0,
        }
    }

    pub fn params(&self) -> &AlbersParameters {
        &self.params
    }

    pub fn cone_constant(&self) -> f64 {
        self.n
    }

    pub fn project(&self, wgs: &WGS84Point) -> AlbersPoint {
        if !wgs.in_range() {
            log::warn!("outside of the wgs84 range: {}", wgs);
        }
        let lon = if wgs.lon < self.params.separation {
            360.0 + wgs.lon
        } else {
            wgs.lon
        };
        let lambda = degrees_to_radians(lon);
        let phi = degrees_to_radians(wgs.lat);

        let theta = self.n * (lambda - self.lambda0);
        let rho = (self.c - 2.0 * self.n * phi.sin()).sqrt() / self.n;

        let x = rho * theta.sin();
        let y = self.rho0 - rho * theta.cos();
        AlbersPoint {
            x: x * self.params.radius,
            y: y * self.params.radius,
        }
    }

    /// Same projection as a PROJ.4 string.
    pub fn proj4_string(&self) -> String {
        format!(
            "+proj=aea +lat_0={} +lon_0={} +lat_1={} +lat_2={} +a={} +b={} +units=m +no_defs",
            self.params.lat0,
            self.params.lon0,
            self.params.lat1,
            self.params.lat2,
            self.params.radius,
            self.params.radius
        )
    }
}

/// Projects with the world parameters.
pub fn project(wgs: &WGS84Point) -> AlbersPoint {
    AlbersProjection::world().project(wgs)
}
