//! # Graphics Module
//!
//! Camera models and the per-frame scene pipeline.
//!
//! - **Cameras** ([`camera`]) - free-fly and orbital cameras behind one [`Camera`] trait
//! - **Scene** ([`scene`]) - camera + object state, frame matrices, mesh data
//!
//! [`Camera`]: camera::Camera

pub mod camera;
pub mod scene;

// Re-export commonly used types
pub use camera::{Camera, CameraMode, CameraRig};
pub use scene::{FrameMatrices, SceneState};
