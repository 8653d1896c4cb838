pub mod albers;
pub mod error;
pub mod point;
pub mod polygon;
pub mod reference;

pub use albers::{AlbersParameters, AlbersProjection, degrees_to_radians, project};
pub use error::{Error, Result};
pub use point::{AlbersPoint, WGS84Point};
pub use polygon::{Polygon, calculate_area};
