//! # Error Types
//!
//! Errors are split by concern: pure math domain errors, viewport contract
//! violations and mesh loading failures. [`ViewerError`] aggregates them for
//! the application shell.

use thiserror::Error;

/// Domain errors raised by the math types.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MathError {
    #[error("cannot normalize a zero-length vector")]
    ZeroLengthVector,

    #[error("cannot derive a rotation from a zero-length quaternion")]
    ZeroLengthQuaternion,

    #[error("division by zero")]
    DivisionByZero,

    #[error("matrix is singular (determinant {determinant})")]
    SingularMatrix { determinant: f32 },

    #[error("matrix index {index} out of range 0..16")]
    IndexOutOfRange { index: usize },

    #[error("invalid projection: fovy {fovy_degrees} deg, near {znear}, far {zfar}")]
    InvalidProjection {
        fovy_degrees: f32,
        znear: f32,
        zfar: f32,
    },
}

/// Raised when the window reports a size that cannot produce a projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ViewportError {
    #[error("viewport {width}x{height} has a zero dimension")]
    ZeroDimension { width: u32, height: u32 },
}

/// Mesh loading failures.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read OBJ file: {0}")]
    Obj(#[from] tobj::LoadError),

    #[error("OBJ file contains no models")]
    NoModels,

    #[error("model '{0}' has no vertex positions")]
    MissingPositions(String),
}

/// Top-level error for the viewer shell.
#[derive(Debug, Error)]
pub enum ViewerError {
    #[error(transparent)]
    Math(#[from] MathError),

    #[error(transparent)]
    Viewport(#[from] ViewportError),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("window system error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
}
