//! Vellum Core Types and Definitions
//!
//! This crate provides the drawing model for Vellum. It includes:
//!
//! - **Geometry**: Immutable 2D points ([`geometry::Point`])
//! - **Style**: Stroke and fill attributes with defaults ([`style::Style`])
//! - **Shape**: Lines and polygons over an ordered point sequence ([`shape`] module)
//! - **Element records**: What a drawing retains per drawn shape ([`element::ElementRecord`])
//! - **Drawing**: The viewport-bounded document and its SVG output ([`drawing::Drawing`])
//! - **Tools**: Stateless pens and stateful turtles ([`tool`] module)
//! - **Markup**: The indented XML writer used for serialization ([`markup`] module)
//!
//! # Example
//!
//! ```
//! use vellum_core::{drawing::Drawing, shape::Shape, style::Style};
//!
//! let mut drawing = Drawing::new(4.0, 4.0);
//! let style = Style::default().with_stroke_color("blue").with_stroke_width(2.0);
//!
//! drawing
//!     .draw(&Shape::line([100.0, 100.0], [200.0, 250.0]), &style)
//!     .unwrap();
//!
//! let svg = drawing.to_svg();
//! assert!(svg.contains(r#"<line x1="100" y1="100" x2="200" y2="250""#));
//! ```

pub mod drawing;
pub mod element;
pub mod error;
pub mod geometry;
pub mod markup;
pub mod shape;
pub mod style;
pub mod tool;

pub use error::DrawError;
