//! Error types for drawing operations.

use thiserror::Error;

use crate::{geometry::Point, shape::ShapeKind};

/// Errors raised while adding shapes to a [`Drawing`](crate::drawing::Drawing).
///
/// Drawing errors are deterministic: retrying the same call fails the same
/// way. A failed draw never modifies the drawing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DrawError {
    /// A point of the shape lies past the right or bottom edge of the viewport.
    #[error(
        "{kind} is not within the view box 0 0 {viewport_width} {viewport_height} (points: {})",
        format_points(.points)
    )]
    OutOfBounds {
        kind: ShapeKind,
        points: Vec<Point>,
        viewport_width: u64,
        viewport_height: u64,
    },

    /// A point was requested past the end of a shape's point sequence.
    #[error("point index {index} is out of range for a shape with {len} point(s)")]
    IndexOutOfRange { index: usize, len: usize },
}

fn format_points(points: &[Point]) -> String {
    points
        .iter()
        .map(Point::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
