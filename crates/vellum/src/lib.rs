//! Vellum - scene files and rendering for a small vector drawing model.
//!
//! Scenes describe a canvas, named styles, and ordered drawing passes made
//! with pens and turtles. [`SceneBuilder`] reads scenes from TOML and
//! renders them to SVG documents through [`vellum_core`].

pub mod config;
pub mod scene;

mod error;

pub use vellum_core::{DrawError, drawing, element, geometry, markup, shape, style, tool};

pub use error::VellumError;

use log::{debug, info, trace};

use config::AppConfig;
use drawing::{Drawing, is_valid_dimension};
use scene::Scene;

/// Builder for parsing and rendering Vellum scenes.
///
/// # Examples
///
/// ```rust
/// use vellum::{SceneBuilder, config::AppConfig};
///
/// let source = r#"
///     [[pass]]
///     tool = "pen"
///     shapes = [{ kind = "line", points = [[0, 0], [100, 100]] }]
/// "#;
///
/// let builder = SceneBuilder::new(AppConfig::default());
///
/// // Parse source to a scene
/// let scene = builder.parse(source).expect("Failed to parse");
///
/// // Render the scene to SVG
/// let svg = builder.render_svg(&scene).expect("Failed to render");
/// assert!(svg.contains("<line "));
///
/// // Or use default config
/// let builder = SceneBuilder::default();
/// ```
#[derive(Debug, Default)]
pub struct SceneBuilder {
    config: AppConfig,
}

impl SceneBuilder {
    /// Create a new scene builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Canvas, style and output defaults
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this builder renders with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse TOML source into a scene.
    ///
    /// # Errors
    ///
    /// Returns [`VellumError::Scene`] for syntax errors, invalid canvas sizes
    /// and references to undefined styles.
    pub fn parse(&self, source: &str) -> Result<Scene, VellumError> {
        info!("Parsing scene");

        let scene =
            Scene::from_toml(source).map_err(|err| VellumError::new_scene_error(err, source))?;

        debug!(passes = scene.passes().len(); "Scene parsed successfully");
        trace!(scene:?; "Parsed scene");

        Ok(scene)
    }

    /// Render a scene onto a new drawing.
    ///
    /// The canvas size comes from the scene, or from the configuration when
    /// the scene does not set one. Passes without a style use the configured
    /// default style.
    ///
    /// # Errors
    ///
    /// - [`VellumError::InvalidCanvas`] if the resolved canvas is not a positive,
    ///   finite size small enough for its viewport to be represented exactly.
    /// - [`VellumError::Draw`] for the first shape or turtle move that cannot
    ///   be drawn.
    pub fn render(&self, scene: &Scene) -> Result<Drawing, VellumError> {
        let width = scene.width().unwrap_or(self.config.canvas().width());
        let height = scene.height().unwrap_or(self.config.canvas().height());
        if !is_valid_dimension(width) || !is_valid_dimension(height) {
            return Err(VellumError::InvalidCanvas { width, height });
        }

        info!(width, height; "Rendering scene");
        let mut drawing = Drawing::new(width, height);
        let default_style = self.config.default_style();

        for (pass_index, pass) in scene.passes().iter().enumerate() {
            debug!(pass = pass_index, tool = pass.tool().name(); "Replaying pass");
            pass.draw_onto(&mut drawing, &default_style)
                .map_err(|err| {
                    let (step, source) = err.into_parts();
                    VellumError::Draw {
                        pass: pass_index,
                        step,
                        source,
                    }
                })?;
        }

        info!(elements = drawing.len(); "Scene rendered");
        Ok(drawing)
    }

    /// Render a scene to an SVG document string.
    ///
    /// The document is indented as configured in the `[output]` section.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`render`](Self::render).
    pub fn render_svg(&self, scene: &Scene) -> Result<String, VellumError> {
        let drawing = self.render(scene)?;
        Ok(drawing.to_svg_with_indent(self.config.output().indent()))
    }
}
