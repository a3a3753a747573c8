//! # Math Module
//!
//! Small, deterministic 3D math used by the camera and object pipelines:
//!
//! - [`Vector3`] - positions and directions
//! - [`Matrix4`] - row-major 4x4 transforms, column-vector convention
//! - [`Quaternion`] - rotations, Hamilton product
//!
//! All operations are pure. Degenerate inputs (zero-length vectors, singular
//! matrices, zero quaternions) return a [`MathError`](crate::error::MathError)
//! instead of letting NaNs reach the renderer.

mod matrix;
mod quaternion;
mod vector;

pub use matrix::Matrix4;
pub use quaternion::Quaternion;
pub use vector::Vector3;

/// World up axis shared by every camera.
pub const WORLD_UP: Vector3 = Vector3::UNIT_Y;
