//! Drawing tools that wrap repeated calls to [`Drawing::draw`](crate::drawing::Drawing::draw).
//!
//! - [`Pen`]: binds a drawing to a fixed style.
//! - [`Turtle`]: walks the drawing from point to point, leaving a line
//!   behind whenever its pen is down.
//!
//! Both tools hold the drawing by exclusive borrow, so a drawing is only ever
//! mutated by one tool at a time. Drop the tool to get the drawing back.

mod pen;
mod turtle;

pub use pen::Pen;
pub use turtle::Turtle;
