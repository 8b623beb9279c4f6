//! Shapes: ordered point sequences tagged as lines or polygons.
//!
//! A [`Shape`] is an immutable sequence of [`Point`]s together with a
//! [`ShapeKind`]. The kind decides how the shape turns into an
//! [`ElementRecord`] when it is drawn:
//!
//! - [`ShapeKind::Line`] renders as `<line x1 y1 x2 y2 style>` from the first
//!   two points. Further points are ignored.
//! - [`ShapeKind::Polygon`] renders as `<polygon points style>` from all points
//!   in insertion order. The outline is closed by the SVG renderer; the first
//!   point is not repeated.
//!
//! Shapes do not check their arity. A two-point polygon or an empty shape
//! is accepted, and an empty shape is bounded by any box.
//!
//! # Example
//!
//! ```
//! use vellum_core::{shape::Shape, style::Style};
//!
//! let triangle = Shape::polygon([[350.0, 150.0], [250.0, 300.0], [150.0, 150.0]]);
//! assert_eq!(triangle.len(), 3);
//! assert!(triangle.bounded_by(400.0, 400.0));
//!
//! let record = triangle.to_element_record(&Style::default()).unwrap();
//! assert_eq!(record.attribute("points"), Some("350,150 250,300 150,150"));
//! ```

use std::{fmt, slice};

use serde::Deserialize;

use crate::{element::ElementRecord, error::DrawError, geometry::Point, style::Style};

/// The variant of a shape, which is also the SVG tag it renders to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// A straight segment between the first two points
    Line,
    /// A closed outline through every point
    Polygon,
}

impl ShapeKind {
    /// Returns the SVG tag name for this kind.
    pub fn tag_name(self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Polygon => "polygon",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag_name())
    }
}

/// An immutable, ordered sequence of points with a rendering kind.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    kind: ShapeKind,
    points: Box<[Point]>,
}

impl Shape {
    /// Creates a shape of the given kind from any sequence of coordinates.
    pub fn new<P, I>(kind: ShapeKind, points: I) -> Self
    where
        P: Into<Point>,
        I: IntoIterator<Item = P>,
    {
        Self {
            kind,
            points: points.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates a line from `start` to `end`.
    pub fn line(start: impl Into<Point>, end: impl Into<Point>) -> Self {
        Self::new(ShapeKind::Line, [start.into(), end.into()])
    }

    /// Creates a polygon through `points`.
    pub fn polygon<P, I>(points: I) -> Self
    where
        P: Into<Point>,
        I: IntoIterator<Item = P>,
    {
        Self::new(ShapeKind::Polygon, points)
    }

    /// Returns the kind of this shape.
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Returns the points in insertion order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Returns the number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the shape has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the point at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::IndexOutOfRange`] if `index` is not below [`len`](Self::len).
    pub fn at(&self, index: usize) -> Result<Point, DrawError> {
        self.get(index).ok_or(DrawError::IndexOutOfRange {
            index,
            len: self.points.len(),
        })
    }

    /// Returns the point at `index`, or `None` if it is out of range.
    pub fn get(&self, index: usize) -> Option<Point> {
        self.points.get(index).copied()
    }

    /// Iterates over the points in insertion order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.points.iter(),
        }
    }

    /// Checks that no point lies right of `max_x` or below `max_y`.
    ///
    /// Lower bounds are not checked: negative coordinates always pass.
    /// An empty shape is bounded by anything.
    pub fn bounded_by(&self, max_x: f64, max_y: f64) -> bool {
        self.iter().all(|p| p.within_upper_bounds(max_x, max_y))
    }

    /// Combines this shape with `style` into a serialization-ready record.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::IndexOutOfRange`] for a line with fewer than two points.
    pub fn to_element_record(&self, style: &Style) -> Result<ElementRecord, DrawError> {
        let record = match self.kind {
            ShapeKind::Line => {
                let start = self.at(0)?;
                let end = self.at(1)?;
                ElementRecord::new(ShapeKind::Line)
                    .with_attribute("x1", start.x().to_string())
                    .with_attribute("y1", start.y().to_string())
                    .with_attribute("x2", end.x().to_string())
                    .with_attribute("y2", end.y().to_string())
            }
            ShapeKind::Polygon => {
                let points = self
                    .iter()
                    .map(|p| p.to_string())
                    .collect::<Vec<_>>()
                    .join(" ");
                ElementRecord::new(ShapeKind::Polygon).with_attribute("points", points)
            }
        };

        Ok(record.with_attribute("style", style.to_css()))
    }
}

/// Iterator over the points of a [`Shape`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: slice::Iter<'a, Point>,
}

impl Iterator for Iter<'_> {
    type Item = Point;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().copied()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a Shape {
    type Item = Point;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blue_style() -> Style {
        Style::default()
            .with_stroke_color("blue")
            .with_stroke_width(2.0)
    }

    #[test]
    fn test_line_element_record() {
        let line = Shape::line([100.0, 100.0], [200.0, 250.0]);

        let record = line.to_element_record(&blue_style()).unwrap();

        assert_eq!(record.kind(), ShapeKind::Line);
        assert_eq!(
            record.attributes(),
            &[
                ("x1", "100".to_string()),
                ("y1", "100".to_string()),
                ("x2", "200".to_string()),
                ("y2", "250".to_string()),
                (
                    "style",
                    "stroke: blue; stroke-width: 2; fill: white".to_string()
                ),
            ]
        );
    }

    #[test]
    fn test_line_ignores_extra_points() {
        let line = Shape::new(
            ShapeKind::Line,
            [[0.0, 0.0], [10.0, 10.0], [9999.0, 9999.0]],
        );

        let record = line.to_element_record(&Style::default()).unwrap();

        assert_eq!(record.attribute("x2"), Some("10"));
        assert_eq!(record.attribute("y2"), Some("10"));
        assert_eq!(record.attributes().len(), 5);
    }

    #[test]
    fn test_line_with_one_point_fails() {
        let line = Shape::new(ShapeKind::Line, [[1.0, 1.0]]);

        let err = line.to_element_record(&Style::default()).unwrap_err();

        assert_eq!(err, DrawError::IndexOutOfRange { index: 1, len: 1 });
    }

    #[test]
    fn test_polygon_points_keep_insertion_order() {
        let polygon = Shape::polygon([[350.0, 150.0], [250.0, 300.0], [150.0, 150.0]]);

        let record = polygon.to_element_record(&Style::default()).unwrap();

        assert_eq!(record.kind(), ShapeKind::Polygon);
        assert_eq!(record.attribute("points"), Some("350,150 250,300 150,150"));
        assert_eq!(
            record.attribute("style"),
            Some("stroke: black; stroke-width: 5; fill: white")
        );
    }

    #[test]
    fn test_polygon_keeps_duplicates() {
        let polygon = Shape::polygon([[1.0, 1.0], [1.0, 1.0], [2.0, 2.0], [1.0, 1.0]]);

        let record = polygon.to_element_record(&Style::default()).unwrap();

        assert_eq!(record.attribute("points"), Some("1,1 1,1 2,2 1,1"));
    }

    #[test]
    fn test_two_point_polygon_is_accepted() {
        let polygon = Shape::polygon([[0.0, 0.0], [5.0, 5.0]]);

        let record = polygon.to_element_record(&Style::default()).unwrap();

        assert_eq!(record.attribute("points"), Some("0,0 5,5"));
    }

    #[test]
    fn test_at_and_get() {
        let line = Shape::line([1.0, 2.0], [3.0, 4.0]);

        assert_eq!(line.at(0).unwrap(), Point::new(1.0, 2.0));
        assert_eq!(line.at(1).unwrap(), Point::new(3.0, 4.0));
        assert_eq!(
            line.at(2),
            Err(DrawError::IndexOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(line.get(2), None);
    }

    #[test]
    fn test_iteration_is_restartable() {
        let polygon = Shape::polygon([[1.0, 1.0], [2.0, 2.0], [3.0, 3.0]]);

        let first: Vec<Point> = polygon.iter().collect();
        let second: Vec<Point> = (&polygon).into_iter().collect();

        assert_eq!(first, second);
        assert_eq!(first, polygon.points());
        assert_eq!(polygon.iter().len(), 3);
    }

    #[test]
    fn test_bounded_by_upper_bounds() {
        let line = Shape::line([0.0, 0.0], [400.0, 400.0]);

        assert!(line.bounded_by(400.0, 400.0));
        assert!(!line.bounded_by(399.0, 400.0));
        assert!(!line.bounded_by(400.0, 399.0));
    }

    #[test]
    fn test_bounded_by_ignores_negative_coordinates() {
        let line = Shape::line([-500.0, -500.0], [10.0, 10.0]);
        assert!(line.bounded_by(400.0, 400.0));
    }

    #[test]
    fn test_empty_shape() {
        let empty = Shape::polygon(Vec::<Point>::new());

        assert!(empty.is_empty());
        assert_eq!(empty.iter().count(), 0);
        assert!(empty.bounded_by(0.0, 0.0));

        let record = empty.to_element_record(&Style::default()).unwrap();
        assert_eq!(record.attribute("points"), Some(""));
    }

    #[test]
    fn test_shape_kind_tag_names() {
        assert_eq!(ShapeKind::Line.tag_name(), "line");
        assert_eq!(ShapeKind::Polygon.to_string(), "polygon");
    }
}

#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    // ===================
    // Strategies
    // ===================

    fn point_strategy() -> impl Strategy<Value = Point> {
        (-1000.0f64..1000.0, -1000.0f64..1000.0).prop_map(|(x, y)| Point::new(x, y))
    }

    fn points_strategy() -> impl Strategy<Value = Vec<Point>> {
        prop::collection::vec(point_strategy(), 0..12)
    }

    // ===================
    // Property Test Functions
    // ===================

    /// Pushing any point further into negative space never changes the result.
    fn check_lower_bound_never_checked(
        points: Vec<Point>,
        shift: f64,
        max_x: f64,
        max_y: f64,
    ) -> Result<(), TestCaseError> {
        let shape = Shape::polygon(points.clone());
        let shifted = Shape::polygon(
            points
                .iter()
                .map(|p| Point::new(p.x() - shift, p.y() - shift)),
        );

        if shape.bounded_by(max_x, max_y) {
            prop_assert!(shifted.bounded_by(max_x, max_y));
        }
        Ok(())
    }

    /// `bounded_by` agrees with a direct check of every point.
    fn check_bounded_by_matches_points(
        points: Vec<Point>,
        max_x: f64,
        max_y: f64,
    ) -> Result<(), TestCaseError> {
        let shape = Shape::polygon(points.clone());
        let expected = points.iter().all(|p| p.x() <= max_x && p.y() <= max_y);

        prop_assert_eq!(shape.bounded_by(max_x, max_y), expected);
        Ok(())
    }

    /// Polygon records list every point once, in order.
    fn check_polygon_points_round_trip(points: Vec<Point>) -> Result<(), TestCaseError> {
        let shape = Shape::polygon(points.clone());
        let record = shape.to_element_record(&Style::default()).unwrap();
        let listed = record.attribute("points").unwrap_or_default();

        let count = if listed.is_empty() {
            0
        } else {
            listed.split(' ').count()
        };
        prop_assert_eq!(count, points.len());
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn lower_bound_never_checked(
            points in points_strategy(),
            shift in 0.0f64..1e6,
            max_x in 0.0f64..1000.0,
            max_y in 0.0f64..1000.0,
        ) {
            check_lower_bound_never_checked(points, shift, max_x, max_y)?;
        }

        #[test]
        fn bounded_by_matches_points(
            points in points_strategy(),
            max_x in -100.0f64..1000.0,
            max_y in -100.0f64..1000.0,
        ) {
            check_bounded_by_matches_points(points, max_x, max_y)?;
        }

        #[test]
        fn polygon_points_round_trip(points in points_strategy()) {
            check_polygon_points_round_trip(points)?;
        }
    }
}
