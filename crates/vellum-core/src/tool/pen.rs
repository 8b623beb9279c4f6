//! Provides `Pen`, a drawing paired with a fixed style.

use crate::{drawing::Drawing, error::DrawError, shape::Shape, style::Style};

/// Draws every shape onto the same drawing with the same style.
///
/// # Examples
///
/// ```
/// # use vellum_core::{drawing::Drawing, shape::Shape, style::Style, tool::Pen};
/// let mut drawing = Drawing::new(4.0, 4.0);
///
/// let mut pen = Pen::new(&mut drawing, Style::default().with_stroke_color("red"));
/// pen.draw(&Shape::line([0.0, 0.0], [100.0, 100.0])).unwrap();
/// pen.draw(&Shape::polygon([[10.0, 10.0], [20.0, 30.0], [30.0, 10.0]])).unwrap();
///
/// assert_eq!(drawing.len(), 2);
/// ```
#[derive(Debug)]
pub struct Pen<'a> {
    drawing: &'a mut Drawing,
    style: Style,
}

impl<'a> Pen<'a> {
    /// Binds `drawing` to `style`.
    pub fn new(drawing: &'a mut Drawing, style: Style) -> Self {
        Self { drawing, style }
    }

    /// Returns the style this pen draws with.
    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Draws `shape` with the pen's style.
    ///
    /// # Errors
    ///
    /// Propagates any [`DrawError`] from [`Drawing::draw`] unchanged.
    pub fn draw(&mut self, shape: &Shape) -> Result<(), DrawError> {
        self.drawing.draw(shape, &self.style)
    }
}
