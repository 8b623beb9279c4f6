//! CLI logic for the Vellum scene renderer.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use vellum::{SceneBuilder, VellumError};

/// Run the Vellum CLI application
///
/// Reads the scene file, renders it with the loaded configuration and
/// writes the SVG document to the output file. Nothing is written if any
/// step fails.
///
/// # Errors
///
/// Returns `VellumError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Scene parsing errors
/// - Drawing errors
pub fn run(args: &Args) -> Result<(), VellumError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing scene"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.input)?;

    let builder = SceneBuilder::new(app_config);
    let scene = builder.parse(&source)?;
    let svg = builder.render_svg(&scene)?;

    fs::write(&args.output, svg)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}
