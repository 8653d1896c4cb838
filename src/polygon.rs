use crate::{
    albers::AlbersProjection,
    error::{Error, Result},
    point::{AlbersBoundingBox, AlbersPoint, WGS84BoundingBox, WGS84Point},
};

/// A ring of geographic points, closed implicitly.
pub struct Polygon {
    pub wgs: Vec<WGS84Point>,
}

impl Polygon {
    pub fn new(wgs: Vec<WGS84Point>) -> Self {
        Polygon { wgs }
    }

    pub fn info(&self) {
        log::info!("polygon: len: {}", self.wgs.len());
        if let (Some(w), Some(a)) = (self.wgsbbox(), self.albersbbox()) {
            log::info!("polygon: wgs bbox: {}", w);
            log::info!("polygon: albers bbox: {}", a);
            log::info!("polygon: width: {:.1}", a.width());
            log::info!("polygon: height: {:.1}", a.height());
        }
        match self.area() {
            Ok(area) => log::info!("polygon: area: {:.1}", area),
            Err(e) => log::info!("polygon: area: {}", e),
        }
    }

    pub fn wgsbbox(&self) -> Option<WGS84BoundingBox> {
        let first = self.wgs.first()?;
        let (min, max) = self
            .wgs
            .iter()
            .fold((*first, *first), |(min, max), curr| {
                (
                    WGS84Point {
                        lat: min.lat.min(curr.lat),
                        lon: min.lon.min(curr.lon),
                    },
                    WGS84Point {
                        lat: max.lat.max(curr.lat),
                        lon: max.lon.max(curr.lon),
                    },
                )
            });
        Some(WGS84BoundingBox { min, max })
    }

    pub fn albersbbox(&self) -> Option<AlbersBoundingBox> {
        let points = self.albers();
        let first = points.first()?;
        let (min, max) = points
            .iter()
            .fold((*first, *first), |(min, max), curr| {
                (
                    AlbersPoint {
                        x: min.x.min(curr.x),
                        y: min.y.min(curr.y),
                    },
                    AlbersPoint {
                        x: max.x.max(curr.x),
                        y: max.y.max(curr.y),
                    },
                )
            });
        Some(AlbersBoundingBox { min, max })
    }

    pub fn albers(&self) -> Vec<AlbersPoint> {
        let proj = AlbersProjection::world();
        self.wgs.iter().map(|w| proj.project(w)).collect()
    }

    /// Equal-area surface in square meters.
    pub fn area(&self) -> Result<f64> {
        calculate_area(&self.albers())
    }
}

/// Shoelace formula, trapezoid form. The polygon is closed from the last
/// point back to the first; the winding does not matter.
pub fn calculate_area(polygon: &[AlbersPoint]) -> Result<f64> {
    if polygon.is_empty() {
        return Err(Error::InvalidInput(
            "cannot compute the area of an empty polygon".to_string(),
        ));
    }
    if polygon.len() < 3 {
        log::trace!("degenerate polygon: {} points", polygon.len());
    }

    let l = polygon.len();
    let mut sum = 0.0;
    for i in 0..l {
        let j = if i < l - 1 { i + 1 } else { 0 };
        let p1 = &polygon[i];
        let p2 = &polygon[j];
        sum += (p1.x + p2.x) * (p1.y - p2.y);
    }

    Ok(sum.abs() / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::albers::{EARTH_RADIUS, degrees_to_radians, project};
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn pt(x: f64, y: f64) -> AlbersPoint {
        AlbersPoint { x, y }
    }

    fn lshape() -> Vec<AlbersPoint> {
        vec![
            pt(0.0, 0.0),
            pt(40.0, 0.0),
            pt(40.0, 10.0),
            pt(10.0, 10.0),
            pt(10.0, 30.0),
            pt(0.0, 30.0),
        ]
    }

    // exact area of a lat/lon box on the sphere
    fn spherical_box_area(south: f64, north: f64, west: f64, east: f64) -> f64 {
        EARTH_RADIUS.powi(2)
            * degrees_to_radians(east - west)
            * (degrees_to_radians(north).sin() - degrees_to_radians(south).sin())
    }

    fn wgs_box(south: f64, north: f64, west: f64, east: f64) -> Polygon {
        Polygon::new(vec![
            WGS84Point::new(south, west),
            WGS84Point::new(south, east),
            WGS84Point::new(north, east),
            WGS84Point::new(north, west),
        ])
    }

    #[test]
    fn test_square() {
        let square = vec![pt(0.0, 0.0), pt(100.0, 0.0), pt(100.0, 100.0), pt(0.0, 100.0)];
        assert_eq!(calculate_area(&square).unwrap(), 10000.0);
    }

    #[test]
    fn test_concave() {
        assert_eq!(calculate_area(&lshape()).unwrap(), 400.0 + 200.0);
    }

    #[test]
    fn test_rotation_invariant() {
        let points = lshape();
        let expected = calculate_area(&points).unwrap();
        for k in 0..points.len() {
            let mut rotated = points.clone();
            rotated.rotate_left(k);
            assert_abs_diff_eq!(calculate_area(&rotated).unwrap(), expected, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_winding_invariant() {
        let points = lshape();
        let mut reversed = points.clone();
        reversed.reverse();
        assert_eq!(
            calculate_area(&points).unwrap(),
            calculate_area(&reversed).unwrap()
        );
    }

    #[test]
    fn test_empty() {
        assert!(matches!(calculate_area(&[]), Err(Error::InvalidInput(_))));
        assert!(Polygon::new(Vec::new()).area().is_err());
    }

    #[test]
    fn test_degenerate() {
        assert_eq!(calculate_area(&[pt(3.0, 4.0)]).unwrap(), 0.0);
        assert_eq!(calculate_area(&[pt(3.0, 4.0), pt(7.0, -1.0)]).unwrap(), 0.0);
        let collinear = vec![pt(0.0, 0.0), pt(1.0, 1.0), pt(2.0, 2.0), pt(5.0, 5.0)];
        assert_abs_diff_eq!(calculate_area(&collinear).unwrap(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_equator_box() {
        let b = wgs_box(0.0, 1.0, -10.0, -9.0);
        let projected: Vec<AlbersPoint> = b.wgs.iter().map(project).collect();
        let area = calculate_area(&projected).unwrap();
        assert_relative_eq!(
            area,
            spherical_box_area(0.0, 1.0, -10.0, -9.0),
            max_relative = 1e-4
        );
        assert_eq!(b.area().unwrap(), area);
    }

    #[test]
    fn test_equal_area() {
        // same box area wherever it is, up to the curvature of the parallels
        for (south, west) in [(45.0, 10.0), (-30.0, 140.0), (60.0, -100.0), (10.0, 170.0)] {
            let b = wgs_box(south, south + 1.0, west, west + 1.0);
            assert_relative_eq!(
                b.area().unwrap(),
                spherical_box_area(south, south + 1.0, west, west + 1.0),
                max_relative = 1e-4
            );
        }
    }

    #[test]
    fn test_box_west_of_separation() {
        // every corner is moved past +180
        let b = wgs_box(64.0, 65.0, -172.5, -171.5);
        assert_relative_eq!(
            b.area().unwrap(),
            spherical_box_area(64.0, 65.0, -172.5, -171.5),
            max_relative = 1e-4
        );
    }

    #[test]
    fn test_bboxes() {
        let b = wgs_box(0.0, 1.0, -10.0, -9.0);
        let w = b.wgsbbox().unwrap();
        assert_eq!(w.min, WGS84Point::new(0.0, -10.0));
        assert_eq!(w.max, WGS84Point::new(1.0, -9.0));
        let a = b.albersbbox().unwrap();
        // parallels shrink, meridians stretch
        assert_abs_diff_eq!(a.width(), 92070.495, epsilon = 1e-2);
        assert_abs_diff_eq!(a.height(), 135450.001, epsilon = 1e-2);
        assert!(Polygon::new(Vec::new()).wgsbbox().is_none());
        assert!(Polygon::new(Vec::new()).albersbbox().is_none());
    }
}
