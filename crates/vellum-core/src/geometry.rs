//! Geometric primitives for the drawing model.
//!
//! # Coordinate System
//!
//! Vellum uses the SVG coordinate system:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! Coordinates are expressed in viewport units (100 per centimeter of
//! canvas). Points themselves carry no bounds; containment is checked by
//! [`Shape::bounded_by`](crate::shape::Shape::bounded_by) when a shape is drawn.

use std::fmt;

/// A 2D point in viewport coordinates.
///
/// Points are immutable values compared by `(x, y)`. Any finite or
/// non-finite, negative or fractional coordinate is accepted.
///
/// # Examples
///
/// ```
/// # use vellum_core::geometry::Point;
/// let p = Point::new(350.0, 150.0);
/// assert_eq!(p.x(), 350.0);
/// assert_eq!(p.y(), 150.0);
///
/// // Points render as `x,y`, the form used in polygon point lists
/// assert_eq!(p.to_string(), "350,150");
///
/// let q: Point = [0.5, -2.0].into();
/// assert_eq!(q.to_string(), "0.5,-2");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f64 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f64 {
        self.y
    }

    /// Checks whether the point lies on or before the given upper bounds.
    ///
    /// Only the upper bounds are tested; a point with negative coordinates
    /// is always within bounds.
    pub fn within_upper_bounds(self, max_x: f64, max_y: f64) -> bool {
        self.x <= max_x && self.y <= max_y
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}
