//! The drawing document: a canvas, its viewport, and the drawn elements.
//!
//! # Viewport
//!
//! A [`Drawing`] is created with a physical size in centimeters. Its
//! internal coordinate space, the viewport, uses 100 units per centimeter,
//! rounded up to whole units:
//!
//! ```text
//! viewport_width  = ceil(width  * 100)
//! viewport_height = ceil(height * 100)
//! ```
//!
//! Rounding up means a fractional canvas never clips a shape that passed the
//! bounds check.
//!
//! # Drawing
//!
//! [`Drawing::draw`] is the only place bounds are enforced. Shapes reaching
//! past the right or bottom viewport edge are rejected; shapes in negative
//! space are not. Accepted shapes are stored as [`ElementRecord`]s in paint
//! order, later elements on top.
//!
//! # Serialization
//!
//! [`Drawing::to_svg`] produces a standalone SVG 1.1 document:
//!
//! ```text
//! <?xml version="1.0" encoding="UTF-8"?>
//! <!DOCTYPE svg PUBLIC "-//W3C//DTD SVG 1.1//EN" "http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd">
//! <svg width="4cm" height="4cm" viewBox="0 0 400 400" xmlns="http://www.w3.org/2000/svg" version="1.1">
//!   <line x1="0" y1="400" x2="400" y2="0" style="stroke: blue; stroke-width: 2; fill: white"/>
//! </svg>
//! ```

use log::{debug, trace};

use crate::{
    element::ElementRecord,
    error::DrawError,
    markup::{DEFAULT_INDENT, SvgWriter},
    shape::Shape,
    style::Style,
};

/// Viewport units per canvas centimeter.
pub const UNITS_PER_CM: f64 = 100.0;

/// Largest viewport extent, in units, that every coordinate comparison
/// represents exactly (2^53).
pub const MAX_VIEWPORT_EXTENT: u64 = 1 << 53;

/// Canvas dimension, in centimeters, at which the viewport reaches
/// [`MAX_VIEWPORT_EXTENT`].
pub const MAX_DIMENSION: f64 = MAX_VIEWPORT_EXTENT as f64 / UNITS_PER_CM;

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";
const SVG_VERSION: &str = "1.1";
const SVG_DOCTYPE: &str =
    r#"svg PUBLIC "-//W3C//DTD SVG 1.1//EN" "http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd""#;

/// A fixed-size canvas accumulating drawn elements.
#[derive(Debug, Clone, PartialEq)]
pub struct Drawing {
    width: f64,
    height: f64,
    viewport_width: u64,
    viewport_height: u64,
    elements: Vec<ElementRecord>,
}

impl Drawing {
    /// Creates an empty drawing of `width` x `height` centimeters.
    ///
    /// Dimensions are expected to pass [`is_valid_dimension`]. They are not
    /// validated here; a zero, negative or NaN dimension yields an empty
    /// viewport axis.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            viewport_width: viewport_extent(width),
            viewport_height: viewport_extent(height),
            elements: Vec::new(),
        }
    }

    /// Returns the canvas width in centimeters.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the canvas height in centimeters.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Returns the viewport width in viewport units.
    pub fn viewport_width(&self) -> u64 {
        self.viewport_width
    }

    /// Returns the viewport height in viewport units.
    pub fn viewport_height(&self) -> u64 {
        self.viewport_height
    }

    /// Returns the drawn elements in paint order.
    pub fn elements(&self) -> &[ElementRecord] {
        &self.elements
    }

    /// Returns the number of drawn elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if nothing has been drawn.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Draws `shape` with `style` on top of the existing elements.
    ///
    /// # Errors
    ///
    /// - [`DrawError::OutOfBounds`] if a point lies past the viewport's right
    ///   or bottom edge.
    /// - [`DrawError::IndexOutOfRange`] if the shape lacks the points its kind
    ///   needs to render.
    ///
    /// On error the drawing is left unchanged.
    pub fn draw(&mut self, shape: &Shape, style: &Style) -> Result<(), DrawError> {
        if !shape.bounded_by(self.viewport_width as f64, self.viewport_height as f64) {
            debug!(
                kind = shape.kind().tag_name(),
                points = shape.len(),
                viewport_width = self.viewport_width,
                viewport_height = self.viewport_height;
                "Shape rejected: outside the view box"
            );
            return Err(DrawError::OutOfBounds {
                kind: shape.kind(),
                points: shape.points().to_vec(),
                viewport_width: self.viewport_width,
                viewport_height: self.viewport_height,
            });
        }

        let record = shape.to_element_record(style)?;
        self.elements.push(record);

        debug!(
            kind = shape.kind().tag_name(),
            points = shape.len(),
            elements = self.elements.len();
            "Shape drawn"
        );

        Ok(())
    }

    /// Serializes the drawing as an SVG document indented by two spaces.
    ///
    /// Serialization does not modify the drawing; calling it repeatedly
    /// yields identical output.
    pub fn to_svg(&self) -> String {
        self.to_svg_with_indent(DEFAULT_INDENT)
    }

    /// Serializes the drawing as an SVG document indented by `indent` spaces
    /// per nesting level.
    pub fn to_svg_with_indent(&self, indent: usize) -> String {
        trace!(elements = self.elements.len(), indent; "Serializing drawing");

        let width = format!("{}cm", self.width);
        let height = format!("{}cm", self.height);
        let view_box = format!("0 0 {} {}", self.viewport_width, self.viewport_height);

        let mut writer = SvgWriter::new(indent);
        writer.declaration();
        writer.doctype(SVG_DOCTYPE);
        writer.start(
            "svg",
            [
                ("width", width.as_str()),
                ("height", height.as_str()),
                ("viewBox", view_box.as_str()),
                ("xmlns", SVG_NAMESPACE),
                ("version", SVG_VERSION),
            ],
        );

        for element in &self.elements {
            writer.empty(
                element.tag_name(),
                element
                    .attributes()
                    .iter()
                    .map(|(name, value)| (*name, value.as_str())),
            );
        }

        writer.end("svg");
        writer.finish()
    }
}

/// Returns `true` if `dimension` is a positive, finite number of centimeters
/// whose viewport extent does not exceed [`MAX_VIEWPORT_EXTENT`].
pub fn is_valid_dimension(dimension: f64) -> bool {
    dimension.is_finite()
        && dimension > 0.0
        && (dimension * UNITS_PER_CM).ceil() <= MAX_VIEWPORT_EXTENT as f64
}

/// Converts a canvas dimension to whole viewport units, rounding up.
fn viewport_extent(dimension: f64) -> u64 {
    // Float-to-int `as` saturates: NaN and negatives become 0.
    (dimension * UNITS_PER_CM).ceil() as u64
}
