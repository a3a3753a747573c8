use std::fmt;

use crate::{
    config::ViewerConfig,
    error::{MathError, ViewportError},
    input::FrameInput,
    math::{Matrix4, Vector3, WORLD_UP},
};

use super::{free_fly_camera::FreeFlyCamera, orbit_camera::OrbitCamera};

/// Shared interface of the camera variants.
///
/// A camera only owns its authoritative state (position, angles). The view
/// matrix is derived from [`eye`](Camera::eye) and [`target`](Camera::target)
/// every frame.
pub trait Camera {
    fn eye(&self) -> Vector3;

    fn target(&self) -> Vector3;

    /// Applies one frame of input to the camera state.
    fn update(&mut self, input: &FrameInput);

    fn view_matrix(&self) -> Result<Matrix4, MathError> {
        Matrix4::look_at_rh(self.eye(), self.target(), WORLD_UP)
    }
}

/// Interaction model of the camera.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CameraMode {
    /// WASD movement with right-drag mouse look.
    #[default]
    FreeFly,
    /// Fixed-radius orbit around a pivot, optionally auto-rotating.
    Orbital,
}

impl CameraMode {
    pub fn toggled(self) -> Self {
        match self {
            CameraMode::FreeFly => CameraMode::Orbital,
            CameraMode::Orbital => CameraMode::FreeFly,
        }
    }
}

impl fmt::Display for CameraMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CameraMode::FreeFly => write!(f, "free-fly"),
            CameraMode::Orbital => write!(f, "orbital"),
        }
    }
}

/// The active camera, selected at runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum CameraRig {
    FreeFly(FreeFlyCamera),
    Orbital(OrbitCamera),
}

impl CameraRig {
    pub fn from_config(mode: CameraMode, config: &ViewerConfig) -> Self {
        match mode {
            CameraMode::FreeFly => CameraRig::FreeFly(FreeFlyCamera::new(config.free_fly)),
            CameraMode::Orbital => CameraRig::Orbital(OrbitCamera::new(config.orbit)),
        }
    }

    pub fn mode(&self) -> CameraMode {
        match self {
            CameraRig::FreeFly(_) => CameraMode::FreeFly,
            CameraRig::Orbital(_) => CameraMode::Orbital,
        }
    }

    fn as_camera(&self) -> &dyn Camera {
        match self {
            CameraRig::FreeFly(camera) => camera,
            CameraRig::Orbital(camera) => camera,
        }
    }

    fn as_camera_mut(&mut self) -> &mut dyn Camera {
        match self {
            CameraRig::FreeFly(camera) => camera,
            CameraRig::Orbital(camera) => camera,
        }
    }
}

impl Camera for CameraRig {
    fn eye(&self) -> Vector3 {
        self.as_camera().eye()
    }

    fn target(&self) -> Vector3 {
        self.as_camera().target()
    }

    fn update(&mut self, input: &FrameInput) {
        self.as_camera_mut().update(input)
    }
}

/// Window size in pixels. Both dimensions are non-zero, so the aspect ratio
/// is always defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    width: u32,
    height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Result<Self, ViewportError> {
        if width == 0 || height == 0 {
            return Err(ViewportError::ZeroDimension { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

/// Perspective projection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub fovy_degrees: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            fovy_degrees: 45.0,
            znear: 0.1,
            zfar: 1000.0,
        }
    }
}

impl Projection {
    /// Checks that the parameters give a finite perspective matrix:
    /// `0 < fovy < 180`, `0 < znear < zfar`.
    pub fn validate(&self) -> Result<(), MathError> {
        let finite =
            self.fovy_degrees.is_finite() && self.znear.is_finite() && self.zfar.is_finite();
        if !finite
            || self.fovy_degrees <= 0.0
            || self.fovy_degrees >= 180.0
            || self.znear <= 0.0
            || self.zfar <= self.znear
        {
            return Err(MathError::InvalidProjection {
                fovy_degrees: self.fovy_degrees,
                znear: self.znear,
                zfar: self.zfar,
            });
        }
        Ok(())
    }

    pub fn matrix(&self, viewport: Viewport) -> Result<Matrix4, MathError> {
        self.validate()?;
        Ok(Matrix4::perspective(
            self.fovy_degrees.to_radians(),
            viewport.aspect(),
            self.znear,
            self.zfar,
        ))
    }
}

/// Camera block as laid out for a uniform buffer.
///
/// Matrices are stored column by column, the layout WGSL `mat4x4<f32>`
/// expects.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable, Debug, PartialEq)]
pub struct CameraUniform {
    /// The eye position of the camera in homogenous coordinates.
    ///
    /// Homogenous coordinates are used to fullfill the 16 byte alignment requirement.
    pub view_position: [f32; 4],
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self {
            view_position: [0.0, 0.0, 0.0, 1.0],
            view: Matrix4::IDENTITY.to_cols_array_2d(),
            projection: Matrix4::IDENTITY.to_cols_array_2d(),
        }
    }
}

impl CameraUniform {
    pub fn new(eye: Vector3, view: &Matrix4, projection: &Matrix4) -> Self {
        Self {
            view_position: [eye.x, eye.y, eye.z, 1.0],
            view: view.to_cols_array_2d(),
            projection: projection.to_cols_array_2d(),
        }
    }
}
