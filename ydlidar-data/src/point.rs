#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Cartesian point in the sensor plane, in the same unit as the scan distances.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub const ORIGIN: Point2D = Point2D { x: 0., y: 0. };

    pub fn new(x: f64, y: f64) -> Point2D {
        Point2D { x, y }
    }
}

impl From<Point2D> for (f64, f64) {
    fn from(p: Point2D) -> Self {
        (p.x, p.y)
    }
}
