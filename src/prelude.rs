//! # Orbis Prelude
//!
//! Commonly used types in one import:
//!
//! ```no_run
//! use orbis::prelude::*;
//!
//! fn main() -> Result<(), ViewerError> {
//!     let config = ViewerConfig::default().with_camera_mode(CameraMode::Orbital);
//!     let mut scene = SceneState::new(&config)?;
//!     scene.update(&FrameInput::idle(std::time::Duration::from_millis(16)));
//!     let frame = scene.matrices()?;
//!     println!("{:?}", frame.view);
//!     Ok(())
//! }
//! ```

// Re-export core application types
pub use crate::app::{FrameSink, LogSink, ViewerApp};
pub use crate::config::{FreeFlyConfig, ObjectConfig, OrbitConfig, ViewerConfig};
pub use crate::error::{LoadError, MathError, ViewerError, ViewportError};

// Re-export math types
pub use crate::math::{Matrix4, Quaternion, Vector3};

// Re-export camera and scene types
pub use crate::gfx::camera::{
    Camera, CameraMode, CameraRig, CameraUniform, FreeFlyCamera, OrbitCamera, Projection, Viewport,
};
pub use crate::gfx::scene::{FrameMatrices, MeshData, ObjectState, SceneState, VertexLayout};

// Re-export input types
pub use crate::input::{Action, FrameClock, FrameInput, InputTracker, KeyBindings};

// Re-export UI types
pub use crate::ui::viewer_panel;
pub use imgui::Ui;
