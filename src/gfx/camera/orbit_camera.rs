use crate::{
    config::OrbitConfig,
    input::{DragTarget, FrameInput},
    math::Vector3,
};

use super::camera_utils::Camera;

/// Camera circling a pivot at a fixed radius, always looking at the pivot.
///
/// The orbit angle advances by `angular_speed * elapsed` while auto-rotate is
/// on; a right-drag turns it by hand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    pub pivot: Vector3,
    radius: f32,
    pub height: f32,
    /// Radians about the world Y axis. Zero puts the camera on +Z.
    angle: f32,
    /// Radians per second.
    pub angular_speed: f32,
    pub auto_rotate: bool,
    pub mouse_sensitivity: f32,
}

impl OrbitCamera {
    pub const MIN_RADIUS: f32 = 0.1;

    pub fn new(config: OrbitConfig) -> Self {
        Self {
            pivot: config.pivot,
            radius: config.radius.max(Self::MIN_RADIUS),
            height: config.height,
            angle: config.start_angle_degrees.to_radians(),
            angular_speed: config.degrees_per_second.to_radians(),
            auto_rotate: config.auto_rotate,
            mouse_sensitivity: config.mouse_sensitivity,
        }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn set_radius(&mut self, radius: f32) {
        self.radius = radius.max(Self::MIN_RADIUS);
    }

    pub fn set_angle(&mut self, angle: f32) {
        self.angle = angle.rem_euclid(std::f32::consts::TAU);
    }

    pub fn add_angle(&mut self, delta: f32) {
        self.set_angle(self.angle + delta);
    }
}

impl Camera for OrbitCamera {
    fn eye(&self) -> Vector3 {
        calculate_orbit_position(self.angle, self.radius, self.height, self.pivot)
    }

    fn target(&self) -> Vector3 {
        self.pivot
    }

    fn update(&mut self, input: &FrameInput) {
        let mut delta = 0.0;
        if self.auto_rotate {
            delta += self.angular_speed * input.elapsed_secs();
        }
        if input.drag() == Some(DragTarget::Camera) {
            delta -= self.mouse_sensitivity * input.mouse_delta.0;
        }
        if delta != 0.0 {
            self.add_angle(delta);
        }
    }
}

fn calculate_orbit_position(angle: f32, radius: f32, height: f32, pivot: Vector3) -> Vector3 {
    Vector3::new(radius * angle.sin(), height, radius * angle.cos()) + pivot
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::MouseButtons;
    use std::f32::consts::FRAC_PI_2;
    use std::time::Duration;

    const EPS: f32 = 1e-4;

    #[test]
    fn test_starts_on_positive_z() {
        let camera = OrbitCamera::new(OrbitConfig::default());
        assert!((camera.eye() - Vector3::new(0.0, 0.0, 5.0)).magnitude() < EPS);
        assert_eq!(camera.target(), Vector3::ZERO);
    }

    #[test]
    fn test_zero_elapsed_keeps_view_unchanged() {
        let mut camera = OrbitCamera::new(OrbitConfig::default());
        assert!(camera.auto_rotate);

        camera.update(&FrameInput::idle(Duration::ZERO));
        let first = camera.view_matrix().unwrap();
        camera.update(&FrameInput::idle(Duration::ZERO));
        let second = camera.view_matrix().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_auto_rotate_advances_angle() {
        let mut config = OrbitConfig::default();
        config.degrees_per_second = 90.0;
        let mut camera = OrbitCamera::new(config);

        camera.update(&FrameInput::idle(Duration::from_secs(1)));
        assert!((camera.angle() - FRAC_PI_2).abs() < EPS);
        assert!((camera.eye() - Vector3::new(5.0, 0.0, 0.0)).magnitude() < EPS);

        // The radius never changes while orbiting.
        for _ in 0..10 {
            camera.update(&FrameInput::idle(Duration::from_millis(370)));
            assert!((camera.eye().magnitude() - 5.0).abs() < EPS);
        }
    }

    #[test]
    fn test_auto_rotate_off_holds_still() {
        let mut config = OrbitConfig::default();
        config.auto_rotate = false;
        let mut camera = OrbitCamera::new(config);
        let eye = camera.eye();

        camera.update(&FrameInput::idle(Duration::from_secs(3)));
        assert_eq!(camera.eye(), eye);
    }

    #[test]
    fn test_right_drag_orbits() {
        let mut config = OrbitConfig::default();
        config.auto_rotate = false;
        let mut camera = OrbitCamera::new(config);

        let input = FrameInput::default()
            .with_buttons(MouseButtons {
                left: false,
                right: true,
            })
            .with_mouse_delta(-100.0, 40.0);
        camera.update(&input);
        assert!((camera.angle() - 0.5).abs() < EPS);
    }

    #[test]
    fn test_always_looks_at_pivot() {
        let mut config = OrbitConfig::default();
        config.pivot = Vector3::new(1.0, 2.0, 3.0);
        config.height = 1.5;
        config.start_angle_degrees = 135.0;
        let camera = OrbitCamera::new(config);

        let view = camera.view_matrix().unwrap();
        let pivot_in_view = view.transform_point(camera.pivot);
        assert!(pivot_in_view.x.abs() < EPS);
        assert!(pivot_in_view.y.abs() < EPS);
        assert!(pivot_in_view.z < 0.0);
    }

    #[test]
    fn test_radius_is_clamped() {
        let mut camera = OrbitCamera::new(OrbitConfig::default());
        camera.set_radius(0.0);
        assert_eq!(camera.radius(), OrbitCamera::MIN_RADIUS);
        assert!(camera.view_matrix().is_ok());
    }
}
