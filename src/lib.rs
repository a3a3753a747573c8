// src/lib.rs
//! Orbis
//!
//! An interactive 3D viewer core: a small math library, free-fly and orbital
//! cameras, and the per-frame pipeline that turns input into view,
//! projection and world matrices. Windowing runs on winit.

pub mod app;
pub mod config;
pub mod error;
pub mod gfx;
pub mod input;
pub mod math;
pub mod prelude;
pub mod ui;

// Re-export main types for convenience
pub use app::{FrameSink, LogSink, ViewerApp};
pub use config::ViewerConfig;
pub use error::ViewerError;

/// Creates a viewer with the default configuration.
pub fn default() -> Result<ViewerApp, ViewerError> {
    ViewerApp::new(ViewerConfig::default())
}
