use crate::{
    config::ViewerConfig,
    error::{MathError, ViewportError},
    gfx::camera::{Camera, CameraMode, CameraRig, CameraUniform, Projection, Viewport},
    input::FrameInput,
    math::Matrix4,
};

use super::object::ObjectState;

/// Matrices handed to the renderer for one frame, each row-major.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameMatrices {
    pub view: [f32; 16],
    pub projection: [f32; 16],
    pub world: [f32; 16],
}

/// Everything the per-frame pipeline mutates: the active camera, the object
/// and the viewport.
///
/// Each frame runs [`update`](Self::update) before [`matrices`](Self::matrices).
#[derive(Debug, Clone)]
pub struct SceneState {
    pub camera: CameraRig,
    pub object: ObjectState,
    pub projection: Projection,
    viewport: Viewport,
    config: ViewerConfig,
}

impl SceneState {
    pub fn new(config: &ViewerConfig) -> Result<Self, ViewportError> {
        let (width, height) = config.window_size;
        Ok(Self {
            camera: CameraRig::from_config(config.camera_mode, config),
            object: ObjectState::new(config.object),
            projection: config.projection,
            viewport: Viewport::new(width, height)?,
            config: config.clone(),
        })
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn camera_mode(&self) -> CameraMode {
        self.camera.mode()
    }

    /// Applies one frame of input to the camera and the object.
    pub fn update(&mut self, input: &FrameInput) {
        self.camera.update(input);
        self.object.update(input);
    }

    pub fn view_matrix(&self) -> Result<Matrix4, MathError> {
        self.camera.view_matrix()
    }

    pub fn projection_matrix(&self) -> Result<Matrix4, MathError> {
        self.projection.matrix(self.viewport)
    }

    pub fn matrices(&self) -> Result<FrameMatrices, MathError> {
        Ok(FrameMatrices {
            view: self.view_matrix()?.to_row_major(),
            projection: self.projection_matrix()?.to_row_major(),
            world: self.object.world_matrix().to_row_major(),
        })
    }

    pub fn camera_uniform(&self) -> Result<CameraUniform, MathError> {
        Ok(CameraUniform::new(
            self.camera.eye(),
            &self.view_matrix()?,
            &self.projection_matrix()?,
        ))
    }

    /// Updates the viewport. A size with a zero dimension (a minimized
    /// window) is rejected and the previous viewport is kept.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), ViewportError> {
        match Viewport::new(width, height) {
            Ok(viewport) => {
                log::debug!("Viewport resized to {}x{}", width, height);
                self.viewport = viewport;
                Ok(())
            }
            Err(err) => {
                log::warn!("Ignoring resize: {}", err);
                Err(err)
            }
        }
    }

    /// Switches the camera model, starting the new camera from its
    /// configured state.
    pub fn set_camera_mode(&mut self, mode: CameraMode) {
        if mode == self.camera.mode() {
            return;
        }
        log::info!("Camera mode: {} -> {}", self.camera.mode(), mode);
        self.camera = CameraRig::from_config(mode, &self.config);
    }

    pub fn toggle_camera_mode(&mut self) {
        self.set_camera_mode(self.camera.mode().toggled());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Action;
    use std::time::Duration;

    fn scene() -> SceneState {
        SceneState::new(&ViewerConfig::default()).unwrap()
    }

    #[test]
    fn test_rejects_zero_initial_window() {
        let config = ViewerConfig::default().with_window_size(800, 0);
        assert!(SceneState::new(&config).is_err());
    }

    #[test]
    fn test_resize_changes_only_projection() {
        let mut scene = scene();
        let before = scene.matrices().unwrap();

        scene.resize(1920, 1080).unwrap();
        let after = scene.matrices().unwrap();

        assert_eq!(before.view, after.view);
        assert_eq!(before.world, after.world);
        assert_ne!(before.projection, after.projection);
    }

    #[test]
    fn test_zero_resize_keeps_last_viewport() {
        let mut scene = scene();
        let before = scene.matrices().unwrap();

        assert_eq!(
            scene.resize(1024, 0),
            Err(ViewportError::ZeroDimension {
                width: 1024,
                height: 0
            })
        );
        assert_eq!(scene.viewport(), Viewport::new(800, 600).unwrap());
        assert_eq!(scene.matrices().unwrap(), before);
    }

    #[test]
    fn test_update_moves_camera_and_object() {
        let config = ViewerConfig::default().with_object_auto_rotate(true);
        let mut scene = SceneState::new(&config).unwrap();
        let before = scene.matrices().unwrap();

        let input = FrameInput::idle(Duration::from_millis(100)).with_held(Action::MoveForward);
        scene.update(&input);
        let after = scene.matrices().unwrap();

        assert_ne!(before.view, after.view);
        assert_ne!(before.world, after.world);
        assert_eq!(before.projection, after.projection);
    }

    #[test]
    fn test_degenerate_projection_never_reaches_frame() {
        let config = ViewerConfig::default().with_projection(Projection {
            znear: 10.0,
            zfar: 10.0,
            ..Default::default()
        });
        let scene = SceneState::new(&config).unwrap();

        assert!(matches!(
            scene.matrices(),
            Err(MathError::InvalidProjection { .. })
        ));
        assert!(scene.camera_uniform().is_err());
    }

    #[test]
    fn test_switch_camera_mode_at_runtime() {
        let mut scene = scene();
        assert_eq!(scene.camera_mode(), CameraMode::FreeFly);

        scene.set_camera_mode(CameraMode::Orbital);
        assert_eq!(scene.camera_mode(), CameraMode::Orbital);
        assert_eq!(scene.camera.target(), scene.config.orbit.pivot);

        scene.toggle_camera_mode();
        assert_eq!(scene.camera_mode(), CameraMode::FreeFly);
        assert!(scene.matrices().is_ok());
    }

    #[test]
    fn test_matrices_are_row_major() {
        let scene = scene();
        let frame = scene.matrices().unwrap();

        // Default camera sits at +5 Z, so the view translates by -5 in Z.
        assert!((frame.view[11] + 5.0).abs() < 1e-5);
        assert_eq!(frame.world, Matrix4::IDENTITY.to_row_major());

        let uniform = scene.camera_uniform().unwrap();
        assert_eq!(uniform.view_position, [0.0, 0.0, 5.0, 1.0]);
    }
}
