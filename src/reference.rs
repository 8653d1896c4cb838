use geo::algorithm::geodesic_area::GeodesicArea;
use geo::orient::Direction;
use geo::{Area, Coord, Orient, Polygon};

use crate::albers::AlbersProjection;
use crate::error::{Error, Result};
use crate::point::{AlbersPoint, WGS84Point};

/// Area on the WGS84 ellipsoid, square meters (geo crate).
pub fn geodesic_area(polygon: &[WGS84Point]) -> f64 {
    if polygon.len() < 3 {
        return 0.0;
    }
    let coords: Vec<Coord<f64>> = polygon
        .iter()
        .map(|p| Coord { x: p.lon, y: p.lat })
        .collect();

    let mut geo_polygon = Polygon::new(coords.into(), vec![]);
    geo_polygon = geo_polygon.orient(Direction::Default);

    geo_polygon.geodesic_area_unsigned()
}

/// Planar area of projected points (geo crate).
pub fn planar_area(polygon: &[AlbersPoint]) -> f64 {
    if polygon.len() < 3 {
        return 0.0;
    }
    let coords: Vec<Coord<f64>> = polygon.iter().map(|p| Coord { x: p.x, y: p.y }).collect();

    let mut geo_polygon = Polygon::new(coords.into(), vec![]);
    geo_polygon = geo_polygon.orient(Direction::Default);

    geo_polygon.unsigned_area()
}

/// The same Albers projection run through proj4rs.
pub struct Proj4Albers {
    src_spec: proj4rs::proj::Proj,
    dst_spec: proj4rs::proj::Proj,
}

impl Proj4Albers {
    pub fn make(projection: &AlbersProjection) -> Result<Proj4Albers> {
        use proj4rs::proj::Proj;
        let spec = projection.proj4_string();
        log::trace!("proj4: {}", spec);
        let dst_spec = Proj::from_proj_string(spec.as_str())
            .map_err(|e| Error::Projection(format!("{}: {:?}", spec, e)))?;

        // same sphere on both sides, no datum shift
        let spec = format!(
            "+proj=longlat +a={} +b={} +no_defs",
            projection.params().radius,
            projection.params().radius
        );
        let src_spec = Proj::from_proj_string(spec.as_str())
            .map_err(|e| Error::Projection(format!("{}: {:?}", spec, e)))?;
        Ok(Proj4Albers {
            src_spec,
            dst_spec,
        })
    }

    pub fn project(&self, wgs: &WGS84Point) -> Result<AlbersPoint> {
        let mut p = (wgs.lon.to_radians(), wgs.lat.to_radians());
        proj4rs::transform::transform(&self.src_spec, &self.dst_spec, &mut p)
            .map_err(|e| Error::Projection(format!("{}: {:?}", wgs, e)))?;
        Ok(AlbersPoint { x: p.0, y: p.1 })
    }
}
