use std::f32::consts::FRAC_PI_2;

use crate::{
    config::FreeFlyConfig,
    input::{axis, Action, DragTarget, FrameInput},
    math::{Quaternion, Vector3},
};

use super::camera_utils::Camera;

/// First-person camera steered by mouse look and movement keys.
///
/// The look direction is kept as two spherical angles. `forward` and `right`
/// are recomputed from them whenever they change:
///
/// ```text
/// forward = (cos v * sin h, sin v, cos v * cos h)
/// right   = (sin(h - PI/2), 0, cos(h - PI/2))
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FreeFlyCamera {
    pub position: Vector3,
    horizontal_angle: f32,
    vertical_angle: f32,
    forward: Vector3,
    right: Vector3,
    pub mouse_sensitivity: f32,
    pub movement_speed: f32,
    max_vertical_angle: f32,
}

impl FreeFlyCamera {
    pub fn new(config: FreeFlyConfig) -> Self {
        let mut camera = Self {
            position: config.position,
            horizontal_angle: config.horizontal_angle,
            vertical_angle: 0.0,
            forward: Vector3::ZERO, // Derived in `set_angles()`.
            right: Vector3::ZERO,
            mouse_sensitivity: config.mouse_sensitivity,
            movement_speed: config.movement_speed,
            max_vertical_angle: config.max_vertical_angle.clamp(0.0, FRAC_PI_2 - 1.0e-3),
        };
        camera.set_angles(config.horizontal_angle, config.vertical_angle);
        camera
    }

    pub fn forward(&self) -> Vector3 {
        self.forward
    }

    pub fn right(&self) -> Vector3 {
        self.right
    }

    pub fn horizontal_angle(&self) -> f32 {
        self.horizontal_angle
    }

    pub fn vertical_angle(&self) -> f32 {
        self.vertical_angle
    }

    /// Sets both look angles (radians). The vertical angle is clamped short
    /// of straight up or down, where the view has no defined right vector.
    pub fn set_angles(&mut self, horizontal: f32, vertical: f32) {
        self.horizontal_angle = horizontal;
        self.vertical_angle = vertical.clamp(-self.max_vertical_angle, self.max_vertical_angle);

        let (h, v) = (self.horizontal_angle, self.vertical_angle);
        self.forward = Vector3::new(v.cos() * h.sin(), v.sin(), v.cos() * h.cos());
        self.right = Vector3::new((h - FRAC_PI_2).sin(), 0.0, (h - FRAC_PI_2).cos());
    }

    /// Turns the camera by a mouse delta in pixels. Moving the mouse right
    /// turns right, moving it up looks up.
    pub fn look(&mut self, dx: f32, dy: f32) {
        self.set_angles(
            self.horizontal_angle - self.mouse_sensitivity * dx,
            self.vertical_angle - self.mouse_sensitivity * dy,
        );
    }

    /// The look direction as a rotation of the reference direction +Z:
    /// yaw about Y composed after pitch about X.
    pub fn look_rotation(&self) -> Quaternion {
        Quaternion::from_rotation_y(self.horizontal_angle)
            * Quaternion::from_rotation_x(-self.vertical_angle)
    }

    /// Moves along `forward`, `right` and world Y for every held action.
    ///
    /// Each axis moves `elapsed * movement_speed`. Axes combine without
    /// renormalizing, so diagonal movement is faster than straight movement.
    pub fn translate(&mut self, input: &FrameInput) {
        let step = input.elapsed_secs() * self.movement_speed;
        if step == 0.0 {
            return;
        }

        let forward = axis(input, Action::MoveForward, Action::MoveBackward);
        let left = axis(input, Action::StrafeLeft, Action::StrafeRight);
        let up = axis(input, Action::MoveUp, Action::MoveDown);

        self.position += self.forward * (forward * step);
        self.position -= self.right * (left * step);
        self.position.y += up * step;
    }
}

impl Camera for FreeFlyCamera {
    fn eye(&self) -> Vector3 {
        self.position
    }

    fn target(&self) -> Vector3 {
        self.position + self.forward
    }

    fn update(&mut self, input: &FrameInput) {
        if input.drag() == Some(DragTarget::Camera) {
            let (dx, dy) = input.mouse_delta;
            self.look(dx, dy);
        }
        self.translate(input);
    }
}
