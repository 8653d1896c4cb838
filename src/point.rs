use core::fmt;
use std::str::FromStr;

use crate::error::Error;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WGS84Point {
    pub lat: f64,
    pub lon: f64,
}

impl WGS84Point {
    pub fn new(lat: f64, lon: f64) -> Self {
        WGS84Point { lat, lon }
    }
    /// True when lat is in [-90, 90] and lon in [-180, 180].
    pub fn in_range(&self) -> bool {
        -90.0 <= self.lat && self.lat <= 90.0 && -180.0 <= self.lon && self.lon <= 180.0
    }
}

impl fmt::Display for WGS84Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "wgs(lat: {:.5}, lon: {:.5})", self.lat, self.lon)
    }
}

/// Parses `"lat,lon"` in degrees, e.g. `"-18.5,47.25"`.
impl FromStr for WGS84Point {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lon) = s
            .split_once(',')
            .ok_or_else(|| Error::InvalidInput(format!("expected lat,lon, got {:?}", s)))?;
        let parse = |v: &str| {
            v.trim()
                .parse::<f64>()
                .map_err(|e| Error::InvalidInput(format!("{:?}: {}", v, e)))
        };
        Ok(WGS84Point {
            lat: parse(lat)?,
            lon: parse(lon)?,
        })
    }
}

/// A projected point, in meters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AlbersPoint {
    pub x: f64,
    pub y: f64,
}

impl AlbersPoint {
    pub fn x_y(&self) -> (f64, f64) {
        (self.x, self.y)
    }
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl fmt::Display for AlbersPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "albers(x: {:.3}, y: {:.3})", self.x, self.y)
    }
}

#[derive(Clone, Debug)]
pub struct WGS84BoundingBox {
    pub min: WGS84Point,
    pub max: WGS84Point,
}

impl WGS84BoundingBox {
    pub fn from(p1: &WGS84Point, p2: &WGS84Point) -> Self {
        let min = WGS84Point {
            lat: p1.lat.min(p2.lat),
            lon: p1.lon.min(p2.lon),
        };
        let max = WGS84Point {
            lat: p1.lat.max(p2.lat),
            lon: p1.lon.max(p2.lon),
        };
        Self { min, max }
    }
    pub fn contains(&self, w: &WGS84Point) -> bool {
        w.lon >= self.min.lon
            && w.lon <= self.max.lon
            && w.lat >= self.min.lat
            && w.lat <= self.max.lat
    }
}

impl fmt::Display for WGS84BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "wgsbbox(min: {}, max: {})", self.min, self.max)
    }
}

#[derive(Clone, Debug)]
pub struct AlbersBoundingBox {
    pub min: AlbersPoint,
    pub max: AlbersPoint,
}

impl AlbersBoundingBox {
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }
}

impl fmt::Display for AlbersBoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "albersbbox(min: {}, max: {})", self.min, self.max)
    }
}
