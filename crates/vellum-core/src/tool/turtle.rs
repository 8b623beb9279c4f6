//! Provides `Turtle`, an incremental line-drawing tool.
//!
//! A turtle has a position and a pen that is either up or down:
//!
//! ```text
//!            pen_down()
//!   ┌────────┐ ───────► ┌─────────┐
//!   │ pen up │          │ pen down│
//!   └────────┘ ◄─────── └─────────┘
//!     move_to:  pen_up()   move_to:
//!     reposition           draw line, then reposition
//! ```
//!
//! It starts at `(0, 0)` with the pen up.

use log::trace;

use crate::{drawing::Drawing, error::DrawError, geometry::Point, shape::Shape, style::Style};

/// Walks a drawing, tracing lines while the pen is down.
///
/// # Examples
///
/// ```
/// # use vellum_core::{drawing::Drawing, style::Style, tool::Turtle};
/// let mut drawing = Drawing::new(4.0, 4.0);
/// let mut turtle = Turtle::new(&mut drawing, Style::default());
///
/// turtle.move_to([0.0, 400.0]).unwrap(); // pen up: nothing drawn
/// turtle.pen_down();
/// turtle.move_to([400.0, 0.0]).unwrap(); // line (0,400) -> (400,0)
///
/// assert_eq!(drawing.len(), 1);
/// ```
#[derive(Debug)]
pub struct Turtle<'a> {
    drawing: &'a mut Drawing,
    style: Style,
    position: Point,
    inked: bool,
}

impl<'a> Turtle<'a> {
    /// Places a turtle at the origin of `drawing` with its pen up.
    pub fn new(drawing: &'a mut Drawing, style: Style) -> Self {
        Self {
            drawing,
            style,
            position: Point::default(),
            inked: false,
        }
    }

    /// Returns the current position.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Returns `true` while the pen is down.
    pub fn is_inked(&self) -> bool {
        self.inked
    }

    /// Returns the style lines are drawn with.
    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Lifts the pen; later moves leave no trace.
    pub fn pen_up(&mut self) {
        self.inked = false;
    }

    /// Lowers the pen; later moves draw lines.
    pub fn pen_down(&mut self) {
        self.inked = true;
    }

    /// Moves to `next`, drawing a line from the current position if the pen is down.
    ///
    /// # Errors
    ///
    /// Returns the [`DrawError`] of the line if it cannot be drawn. The move
    /// is then aborted: the turtle stays where it was.
    pub fn move_to(&mut self, next: impl Into<Point>) -> Result<(), DrawError> {
        let next = next.into();

        if self.inked {
            self.drawing
                .draw(&Shape::line(self.position, next), &self.style)?;
        }

        trace!(
            from:% = self.position,
            to:% = next,
            inked = self.inked;
            "Turtle moved"
        );
        self.position = next;

        Ok(())
    }
}
