//! Error types for Vellum operations.
//!
//! This module provides the main error type [`VellumError`] which wraps
//! the error conditions that can occur while loading and rendering scenes.

use std::io;

use thiserror::Error;

use vellum_core::{DrawError, drawing::MAX_DIMENSION};

use crate::scene::SceneError;

/// The main error type for Vellum operations.
///
/// # Diagnostic Variants
///
/// The `Scene` variant keeps the scene source next to the error so that
/// callers can point at the offending span when reporting it.
#[derive(Debug, Error)]
pub enum VellumError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Scene { err: SceneError, src: String },

    #[error("Drawing error in pass[{pass}] step[{step}]: {source}")]
    Draw {
        pass: usize,
        step: usize,
        #[source]
        source: DrawError,
    },

    #[error("Invalid canvas size {width} x {height}: dimensions must be positive, finite and no larger than {max} cm", max = MAX_DIMENSION)]
    InvalidCanvas { width: f64, height: f64 },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl VellumError {
    /// Create a new `Scene` error with the associated source text.
    pub fn new_scene_error(err: SceneError, src: impl Into<String>) -> Self {
        Self::Scene {
            err,
            src: src.into(),
        }
    }
}
