//! Scene files: a TOML description of what to draw.
//!
//! A scene names a canvas size, a set of reusable styles, and an ordered list
//! of passes. Each pass is one drawing tool session: a [`Pen`] drawing a list
//! of shapes, or a [`Turtle`] following a list of steps. Passes run in file
//! order, so later passes paint on top of earlier ones.
//!
//! ```toml
//! width = 4
//! height = 4
//!
//! [styles.blue]
//! stroke_color = "blue"
//! stroke_width = 2
//!
//! [[pass]]
//! tool = "pen"
//! style = "blue"
//! shapes = [
//!     { kind = "line", points = [[100, 100], [200, 250]] },
//!     { kind = "polygon", points = [[350, 150], [250, 300], [150, 150]] },
//! ]
//!
//! [[pass]]
//! tool = "turtle"
//! steps = [
//!     { action = "move_to", to = [0, 400] },
//!     { action = "pen_down" },
//!     { action = "move_to", to = [400, 0] },
//! ]
//! ```
//!
//! Parsing happens in two stages: the file is deserialized into private
//! `*Def` types mirroring the TOML layout, then resolved into [`Scene`], where
//! style names are replaced by [`Style`] values and point lists by
//! [`Shape`]s. Canvas sizes and style references are validated during
//! resolution; bounds are not, since they are only known once the canvas is.

use std::{collections::BTreeMap, ops::Range};

use log::{debug, trace};
use serde::Deserialize;
use thiserror::Error;

use vellum_core::{
    DrawError,
    drawing::{Drawing, MAX_DIMENSION, is_valid_dimension},
    geometry::Point,
    shape::{Shape, ShapeKind},
    style::{Style, StyleOptions},
    tool::{Pen, Turtle},
};

/// Errors found while reading a scene file.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("invalid scene file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("scene {name} must be a positive, finite number of centimeters no larger than {max} (got {value})", max = MAX_DIMENSION)]
    InvalidDimension { name: &'static str, value: f64 },

    #[error("pass[{pass}] uses undefined style `{name}`")]
    UnknownStyle { pass: usize, name: String },
}

impl SceneError {
    /// Returns the byte range of the scene source this error points at, if known.
    pub fn span(&self) -> Option<Range<usize>> {
        match self {
            Self::Toml(err) => err.span(),
            Self::InvalidDimension { .. } | Self::UnknownStyle { .. } => None,
        }
    }

    /// Returns the error message without location details.
    pub fn message(&self) -> String {
        match self {
            Self::Toml(err) => err.message().to_string(),
            _ => self.to_string(),
        }
    }
}

/// A failed step within a pass.
#[derive(Debug, Error)]
#[error("step[{step}]: {source}")]
pub struct StepError {
    step: usize,
    #[source]
    source: DrawError,
}

impl StepError {
    /// Returns the index of the failed shape or turtle step within its pass.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Returns the drawing error that stopped the pass.
    pub fn draw_error(&self) -> &DrawError {
        &self.source
    }

    /// Splits the error into step index and drawing error.
    pub fn into_parts(self) -> (usize, DrawError) {
        (self.step, self.source)
    }
}

/// One instruction for a [`Turtle`] pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TurtleStep {
    /// Lift the pen.
    PenUp,
    /// Lower the pen.
    PenDown,
    /// Move to a point, drawing a line if the pen is down.
    MoveTo(Point),
}

/// The tool a pass draws with, with its input.
#[derive(Debug, Clone, PartialEq)]
pub enum Tool {
    /// Draw each shape with a [`Pen`].
    Pen(Vec<Shape>),
    /// Walk a fresh [`Turtle`] through the steps.
    Turtle(Vec<TurtleStep>),
}

impl Tool {
    /// Returns the tool's name as written in scene files.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pen(_) => "pen",
            Self::Turtle(_) => "turtle",
        }
    }
}

/// A single drawing tool session.
#[derive(Debug, Clone, PartialEq)]
pub struct Pass {
    style: Option<Style>,
    tool: Tool,
}

impl Pass {
    /// Creates a pen pass drawing `shapes`.
    pub fn pen(shapes: Vec<Shape>) -> Self {
        Self {
            style: None,
            tool: Tool::Pen(shapes),
        }
    }

    /// Creates a turtle pass following `steps`.
    pub fn turtle(steps: Vec<TurtleStep>) -> Self {
        Self {
            style: None,
            tool: Tool::Turtle(steps),
        }
    }

    /// Sets the style for this pass (builder style).
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    /// Returns the pass style, or `None` to use the renderer's default.
    pub fn style(&self) -> Option<&Style> {
        self.style.as_ref()
    }

    /// Returns the tool and its input.
    pub fn tool(&self) -> &Tool {
        &self.tool
    }

    /// Replays this pass onto `drawing`, using `default_style` if the pass has none.
    ///
    /// # Errors
    ///
    /// Returns a [`StepError`] for the first shape or step that cannot be drawn.
    /// Elements drawn by earlier steps stay in the drawing.
    pub fn draw_onto(&self, drawing: &mut Drawing, default_style: &Style) -> Result<(), StepError> {
        let style = self.style.as_ref().unwrap_or(default_style).clone();

        match &self.tool {
            Tool::Pen(shapes) => {
                let mut pen = Pen::new(drawing, style);
                for (step, shape) in shapes.iter().enumerate() {
                    pen.draw(shape)
                        .map_err(|source| StepError { step, source })?;
                }
            }
            Tool::Turtle(steps) => {
                let mut turtle = Turtle::new(drawing, style);
                for (step, action) in steps.iter().enumerate() {
                    match *action {
                        TurtleStep::PenUp => turtle.pen_up(),
                        TurtleStep::PenDown => turtle.pen_down(),
                        TurtleStep::MoveTo(point) => turtle
                            .move_to(point)
                            .map_err(|source| StepError { step, source })?,
                    }
                }
                trace!(position:% = turtle.position(); "Turtle pass finished");
            }
        }

        Ok(())
    }
}

/// A resolved scene, ready to be rendered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    width: Option<f64>,
    height: Option<f64>,
    passes: Vec<Pass>,
}

impl Scene {
    /// Creates an empty scene that uses the configured canvas size.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the canvas size in centimeters (builder style).
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Appends a pass (builder style).
    pub fn with_pass(mut self, pass: Pass) -> Self {
        self.passes.push(pass);
        self
    }

    /// Reads and resolves a scene from TOML source.
    ///
    /// # Errors
    ///
    /// - [`SceneError::Toml`] for syntax errors and unexpected keys or values.
    /// - [`SceneError::InvalidDimension`] for a zero, negative, non-finite or oversized canvas.
    /// - [`SceneError::UnknownStyle`] for a pass naming a style not in `[styles]`.
    pub fn from_toml(source: &str) -> Result<Self, SceneError> {
        let def: SceneDef = toml::from_str(source)?;
        trace!(def:?; "Deserialized scene file");

        let width = def.width.map(|w| check_dimension("width", w)).transpose()?;
        let height = def.height.map(|h| check_dimension("height", h)).transpose()?;

        let passes = def
            .passes
            .into_iter()
            .enumerate()
            .map(|(index, pass)| pass.resolve(index, &def.styles))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            styles = def.styles.len(),
            passes = passes.len();
            "Scene resolved"
        );

        Ok(Self {
            width,
            height,
            passes,
        })
    }

    /// Returns the canvas width, or `None` to use the configured one.
    pub fn width(&self) -> Option<f64> {
        self.width
    }

    /// Returns the canvas height, or `None` to use the configured one.
    pub fn height(&self) -> Option<f64> {
        self.height
    }

    /// Returns the passes in drawing order.
    pub fn passes(&self) -> &[Pass] {
        &self.passes
    }
}

/// Checks that a canvas dimension can produce a viewport.
fn check_dimension(name: &'static str, value: f64) -> Result<f64, SceneError> {
    if is_valid_dimension(value) {
        Ok(value)
    } else {
        Err(SceneError::InvalidDimension { name, value })
    }
}

// =============================================================================
// File layout
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SceneDef {
    width: Option<f64>,
    height: Option<f64>,
    #[serde(default)]
    styles: BTreeMap<String, StyleOptions>,
    #[serde(default, rename = "pass")]
    passes: Vec<PassDef>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "tool", rename_all = "snake_case", deny_unknown_fields)]
enum PassDef {
    Pen {
        #[serde(default)]
        style: Option<String>,
        #[serde(default)]
        shapes: Vec<ShapeDef>,
    },
    Turtle {
        #[serde(default)]
        style: Option<String>,
        #[serde(default)]
        steps: Vec<StepDef>,
    },
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ShapeDef {
    kind: ShapeKind,
    points: Vec<[f64; 2]>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case", deny_unknown_fields)]
enum StepDef {
    // Braced so that stray keys are rejected like in `MoveTo`.
    PenUp {},
    PenDown {},
    MoveTo { to: [f64; 2] },
}

impl PassDef {
    fn resolve(
        self,
        index: usize,
        styles: &BTreeMap<String, StyleOptions>,
    ) -> Result<Pass, SceneError> {
        let (style_name, tool) = match self {
            Self::Pen { style, shapes } => (
                style,
                Tool::Pen(
                    shapes
                        .into_iter()
                        .map(|shape| Shape::new(shape.kind, shape.points))
                        .collect(),
                ),
            ),
            Self::Turtle { style, steps } => (
                style,
                Tool::Turtle(steps.into_iter().map(StepDef::resolve).collect()),
            ),
        };

        let style = style_name
            .map(|name| match styles.get(&name) {
                Some(options) => Ok(Style::new(options.clone())),
                None => Err(SceneError::UnknownStyle { pass: index, name }),
            })
            .transpose()?;

        Ok(Pass { style, tool })
    }
}

impl StepDef {
    fn resolve(self) -> TurtleStep {
        match self {
            Self::PenUp {} => TurtleStep::PenUp,
            Self::PenDown {} => TurtleStep::PenDown,
            Self::MoveTo { to } => TurtleStep::MoveTo(to.into()),
        }
    }
}
