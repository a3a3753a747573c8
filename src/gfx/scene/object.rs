use crate::{
    config::ObjectConfig,
    input::{DragTarget, FrameInput},
    math::{Matrix4, Quaternion, Vector3},
};

/// Orientation state of the displayed object.
///
/// Angles are kept in degrees, the unit the control panel edits. Rotation is
/// applied in YXZ order: roll first, then pitch, then yaw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObjectState {
    pub position: Vector3,
    pub yaw: f32,
    pub pitch: f32,
    pub roll: f32,
    pub auto_rotate: bool,
    pub degrees_per_second: f32,
}

impl Default for ObjectState {
    fn default() -> Self {
        Self::new(ObjectConfig::default())
    }
}

impl ObjectState {
    pub fn new(config: ObjectConfig) -> Self {
        Self {
            position: config.position,
            yaw: config.yaw,
            pitch: config.pitch,
            roll: config.roll,
            auto_rotate: config.auto_rotate,
            degrees_per_second: config.degrees_per_second,
        }
    }

    /// Advances auto-rotation and applies a left-drag.
    ///
    /// A drag maps one pixel to one degree: horizontal movement turns yaw,
    /// vertical movement turns pitch.
    pub fn update(&mut self, input: &FrameInput) {
        if self.auto_rotate {
            self.yaw += self.degrees_per_second * input.elapsed_secs();
        }
        if input.drag() == Some(DragTarget::Object) {
            let (dx, dy) = input.mouse_delta;
            self.yaw += dx;
            self.pitch += dy;
        }
        self.yaw = self.yaw.rem_euclid(360.0);
    }

    pub fn rotation_matrix(&self) -> Matrix4 {
        Matrix4::from_euler_yxz(
            self.yaw.to_radians(),
            self.pitch.to_radians(),
            self.roll.to_radians(),
        )
    }

    /// The same rotation as [`rotation_matrix`](Self::rotation_matrix), as a
    /// quaternion.
    pub fn orientation(&self) -> Quaternion {
        Quaternion::from_euler_yxz(
            self.yaw.to_radians(),
            self.pitch.to_radians(),
            self.roll.to_radians(),
        )
    }

    /// Local-to-world transform: rotate about the local origin, then move to
    /// `position`.
    pub fn world_matrix(&self) -> Matrix4 {
        Matrix4::from_translation(self.position) * self.rotation_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::MouseButtons;
    use std::time::Duration;

    const EPS: f32 = 1e-5;

    fn approx(a: Vector3, b: Vector3) -> bool {
        (a - b).magnitude() < EPS
    }

    fn left_drag(dx: f32, dy: f32) -> FrameInput {
        FrameInput::default()
            .with_buttons(MouseButtons {
                left: true,
                right: false,
            })
            .with_mouse_delta(dx, dy)
    }

    #[test]
    fn test_yaw_90_golden_value() {
        let object = ObjectState {
            yaw: 90.0,
            ..Default::default()
        };
        let rotated = object
            .world_matrix()
            .transform_vector(Vector3::new(0.0, 0.0, -1.0));
        assert!(approx(rotated, Vector3::new(-1.0, 0.0, 0.0)));
    }

    #[test]
    fn test_auto_rotate_advances_yaw() {
        let mut object = ObjectState::new(ObjectConfig {
            auto_rotate: true,
            ..Default::default()
        });
        object.update(&FrameInput::idle(Duration::from_secs(3)));
        assert!((object.yaw - 30.0).abs() < EPS);
        assert_eq!(object.pitch, 0.0);

        object.auto_rotate = false;
        object.update(&FrameInput::idle(Duration::from_secs(3)));
        assert!((object.yaw - 30.0).abs() < EPS);
    }

    #[test]
    fn test_left_drag_maps_pixels_to_degrees() {
        let mut object = ObjectState::default();
        object.update(&left_drag(12.0, 7.0));
        assert_eq!(object.yaw, 12.0);
        assert_eq!(object.pitch, 7.0);

        object.update(&left_drag(-20.0, 0.0));
        assert_eq!(object.yaw, 352.0);
    }

    #[test]
    fn test_right_drag_leaves_object_alone() {
        let mut object = ObjectState::default();
        let input = FrameInput::default()
            .with_buttons(MouseButtons {
                left: false,
                right: true,
            })
            .with_mouse_delta(40.0, 40.0);
        object.update(&input);
        assert_eq!(object, ObjectState::default());
    }

    #[test]
    fn test_world_matrix_translates_after_rotating() {
        let object = ObjectState {
            position: Vector3::new(1.0, 2.0, 3.0),
            yaw: 90.0,
            ..Default::default()
        };
        let p = object.world_matrix().transform_point(Vector3::new(0.0, 0.0, -1.0));
        assert!(approx(p, Vector3::new(0.0, 2.0, 3.0)));
    }

    #[test]
    fn test_orientation_matches_rotation_matrix() {
        let object = ObjectState {
            yaw: 33.0,
            pitch: -71.0,
            roll: 148.0,
            ..Default::default()
        };
        let from_quat = object.orientation().to_rotation_matrix().unwrap();
        assert!(from_quat.abs_diff_eq(&object.rotation_matrix(), 1e-5));
    }
}
