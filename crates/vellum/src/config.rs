//! Configuration types for Vellum rendering.
//!
//! This module provides configuration structures that supply the defaults a
//! scene falls back on. All types implement [`serde::Deserialize`] for
//! loading from TOML.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining the sections below.
//! - [`CanvasConfig`] - Canvas size used when a scene does not set one.
//! - [`OutputConfig`] - SVG formatting options.
//! - The `[style]` section is a [`StyleOptions`] table giving the style of
//!   passes that do not name one.
//!
//! # Example
//!
//! ```
//! # use vellum::config::AppConfig;
//! let config: AppConfig = toml::from_str(
//!     r#"
//!     [canvas]
//!     width = 10.0
//!
//!     [style]
//!     stroke_color = "navy"
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.canvas().width(), 10.0);
//! assert_eq!(config.canvas().height(), 4.0);
//! assert_eq!(config.default_style().stroke_color(), "navy");
//! assert_eq!(config.output().indent(), 2);
//! ```

use serde::Deserialize;

use vellum_core::{
    markup::DEFAULT_INDENT,
    style::{Style, StyleOptions},
};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Canvas configuration section.
    #[serde(default)]
    canvas: CanvasConfig,

    /// Default style section.
    #[serde(default)]
    style: StyleOptions,

    /// Output configuration section.
    #[serde(default)]
    output: OutputConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    ///
    /// # Arguments
    ///
    /// * `canvas` - Fallback canvas size.
    /// * `style` - Style applied to passes without a named style.
    /// * `output` - SVG formatting options.
    pub fn new(canvas: CanvasConfig, style: StyleOptions, output: OutputConfig) -> Self {
        Self {
            canvas,
            style,
            output,
        }
    }

    /// Returns the canvas configuration.
    pub fn canvas(&self) -> &CanvasConfig {
        &self.canvas
    }

    /// Returns the fully resolved default [`Style`].
    pub fn default_style(&self) -> Style {
        Style::new(self.style.clone())
    }

    /// Returns the output configuration.
    pub fn output(&self) -> &OutputConfig {
        &self.output
    }
}

/// Canvas size, in centimeters, for scenes that do not specify one.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    width: f64,
    height: f64,
}

impl CanvasConfig {
    /// Creates a canvas configuration of `width` x `height` centimeters.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns the canvas width.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the canvas height.
    pub fn height(&self) -> f64 {
        self.height
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 4.0,
            height: 4.0,
        }
    }
}

/// Formatting options for the SVG output.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Spaces per nesting level.
    indent: usize,
}

impl OutputConfig {
    /// Creates an output configuration with the given indentation width.
    pub fn new(indent: usize) -> Self {
        Self { indent }
    }

    /// Returns the indentation width.
    pub fn indent(&self) -> usize {
        self.indent
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT,
        }
    }
}
