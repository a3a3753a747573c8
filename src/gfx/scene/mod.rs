//! # Scene Module
//!
//! Per-frame state of the viewer and the CPU-side data it renders.
//!
//! - [`SceneState`] - camera, object and viewport; produces [`FrameMatrices`]
//! - [`ObjectState`] - yaw/pitch/roll of the displayed object
//! - [`MeshData`] - interleaved mesh loaded from an OBJ file
//! - [`VertexLayout`] - attribute layout of interleaved vertices
//! - [`skybox_vertices`] / [`skybox_view`] - skybox cube and its view matrix
//!
//! ```no_run
//! use orbis::config::ViewerConfig;
//! use orbis::gfx::scene::SceneState;
//! use orbis::input::FrameInput;
//! use std::time::Duration;
//!
//! let mut scene = SceneState::new(&ViewerConfig::default())?;
//! scene.update(&FrameInput::idle(Duration::from_millis(16)));
//! let frame = scene.matrices()?;
//! # Ok::<(), orbis::error::ViewerError>(())
//! ```

pub mod mesh;
pub mod object;
pub mod scene;
pub mod skybox;
pub mod vertex;

// Re-export main types
pub use mesh::MeshData;
pub use object::ObjectState;
pub use scene::{FrameMatrices, SceneState};
pub use skybox::{skybox_vertices, skybox_view};
pub use vertex::{VertexAttributeDesc, VertexAttributeKind, VertexLayout, VertexLayoutBuilder};
