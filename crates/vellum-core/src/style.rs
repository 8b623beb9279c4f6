//! Stroke and fill styling for drawn shapes.
//!
//! A [`Style`] is always fully specified: it is built from a [`StyleOptions`]
//! value in which any field may be missing, and every missing field is
//! resolved to its default when the style is constructed.
//!
//! | Field          | Default   | SVG property   |
//! |----------------|-----------|----------------|
//! | `stroke_width` | `5`       | `stroke-width` |
//! | `stroke_color` | `"black"` | `stroke`       |
//! | `fill_color`   | `"white"` | `fill`         |
//!
//! # Example
//!
//! ```
//! use vellum_core::style::{Style, StyleOptions};
//!
//! let style = Style::new(StyleOptions {
//!     stroke_color: Some("blue".to_string()),
//!     stroke_width: Some(2.0),
//!     ..StyleOptions::default()
//! });
//!
//! assert_eq!(style.to_css(), "stroke: blue; stroke-width: 2; fill: white");
//! ```

use std::fmt;

use serde::Deserialize;

/// Stroke width used when none is given.
pub const DEFAULT_STROKE_WIDTH: f64 = 5.0;

/// Stroke color used when none is given.
pub const DEFAULT_STROKE_COLOR: &str = "black";

/// Fill color used when none is given.
pub const DEFAULT_FILL_COLOR: &str = "white";

/// Partially specified style settings.
///
/// Unrecognized keys are ignored when deserializing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct StyleOptions {
    /// Stroke thickness in viewport units.
    pub stroke_width: Option<f64>,
    /// Stroke color, any CSS color string.
    pub stroke_color: Option<String>,
    /// Interior fill color, any CSS color string.
    pub fill_color: Option<String>,
}

/// Immutable visual attributes applied to a shape when it is drawn.
///
/// Colors are kept as given and written verbatim into the style
/// declaration; they are not parsed or validated.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "StyleOptions")]
pub struct Style {
    stroke_width: f64,
    stroke_color: String,
    fill_color: String,
}

impl Style {
    /// Creates a style, filling every field missing from `options` with its default.
    pub fn new(options: StyleOptions) -> Self {
        Self {
            stroke_width: options.stroke_width.unwrap_or(DEFAULT_STROKE_WIDTH),
            stroke_color: options
                .stroke_color
                .unwrap_or_else(|| DEFAULT_STROKE_COLOR.to_string()),
            fill_color: options
                .fill_color
                .unwrap_or_else(|| DEFAULT_FILL_COLOR.to_string()),
        }
    }

    /// Returns a copy of this style with a different stroke width.
    pub fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = width;
        self
    }

    /// Returns a copy of this style with a different stroke color.
    pub fn with_stroke_color(mut self, color: impl Into<String>) -> Self {
        self.stroke_color = color.into();
        self
    }

    /// Returns a copy of this style with a different fill color.
    pub fn with_fill_color(mut self, color: impl Into<String>) -> Self {
        self.fill_color = color.into();
        self
    }

    /// Returns the stroke width.
    pub fn stroke_width(&self) -> f64 {
        self.stroke_width
    }

    /// Returns the stroke color.
    pub fn stroke_color(&self) -> &str {
        &self.stroke_color
    }

    /// Returns the fill color.
    pub fn fill_color(&self) -> &str {
        &self.fill_color
    }

    /// Renders the canonical style declaration.
    ///
    /// The order is always stroke, stroke-width, fill.
    pub fn to_css(&self) -> String {
        format!(
            "stroke: {}; stroke-width: {}; fill: {}",
            self.stroke_color, self.stroke_width, self.fill_color
        )
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::new(StyleOptions::default())
    }
}

impl From<StyleOptions> for Style {
    fn from(options: StyleOptions) -> Self {
        Self::new(options)
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}
