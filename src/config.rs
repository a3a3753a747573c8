//! # Viewer Configuration
//!
//! Plain structs with defaults taken from the classic viewer setup: a camera
//! five units back on +Z looking down -Z, 45° vertical field of view and a
//! 800x600 window.
//!
//! ```no_run
//! use orbis::config::ViewerConfig;
//! use orbis::gfx::camera::CameraMode;
//!
//! let config = ViewerConfig::default()
//!     .with_camera_mode(CameraMode::Orbital)
//!     .with_object_auto_rotate(true);
//! ```

use std::f32::consts::{FRAC_PI_2, PI};

use crate::gfx::camera::{CameraMode, Projection};
use crate::input::KeyBindings;
use crate::math::Vector3;

/// Free-fly camera parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FreeFlyConfig {
    pub position: Vector3,
    /// Radians about the world Y axis; `PI` looks down -Z.
    pub horizontal_angle: f32,
    /// Radians above the horizon.
    pub vertical_angle: f32,
    /// Radians of look rotation per pixel of mouse movement.
    pub mouse_sensitivity: f32,
    /// World units per second.
    pub movement_speed: f32,
    /// Vertical look is clamped to `±max_vertical_angle`.
    pub max_vertical_angle: f32,
}

impl Default for FreeFlyConfig {
    fn default() -> Self {
        Self {
            position: Vector3::new(0.0, 0.0, 5.0),
            horizontal_angle: PI,
            vertical_angle: 0.0,
            mouse_sensitivity: 0.005,
            movement_speed: 10.0,
            max_vertical_angle: FRAC_PI_2 - 1.0e-3,
        }
    }
}

/// Orbital camera parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitConfig {
    pub pivot: Vector3,
    pub radius: f32,
    /// Offset of the camera above the pivot.
    pub height: f32,
    pub start_angle_degrees: f32,
    pub degrees_per_second: f32,
    pub auto_rotate: bool,
    /// Radians of orbit per pixel of horizontal drag.
    pub mouse_sensitivity: f32,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            pivot: Vector3::ZERO,
            radius: 5.0,
            height: 0.0,
            start_angle_degrees: 0.0,
            degrees_per_second: 10.0,
            auto_rotate: true,
            mouse_sensitivity: 0.005,
        }
    }
}

/// Displayed object parameters. Angles are in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObjectConfig {
    pub position: Vector3,
    pub yaw: f32,
    pub pitch: f32,
    pub roll: f32,
    pub auto_rotate: bool,
    pub degrees_per_second: f32,
}

impl Default for ObjectConfig {
    fn default() -> Self {
        Self {
            position: Vector3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            roll: 0.0,
            auto_rotate: false,
            degrees_per_second: 10.0,
        }
    }
}

/// Complete viewer configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    pub title: String,
    pub window_size: (u32, u32),
    pub camera_mode: CameraMode,
    pub free_fly: FreeFlyConfig,
    pub orbit: OrbitConfig,
    pub object: ObjectConfig,
    pub projection: Projection,
    pub key_bindings: KeyBindings,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            title: "OBJ Viewer".to_string(),
            window_size: (800, 600),
            camera_mode: CameraMode::FreeFly,
            free_fly: FreeFlyConfig::default(),
            orbit: OrbitConfig::default(),
            object: ObjectConfig::default(),
            projection: Projection::default(),
            key_bindings: KeyBindings::default(),
        }
    }
}

impl ViewerConfig {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        self.window_size = (width, height);
        self
    }

    pub fn with_camera_mode(mut self, mode: CameraMode) -> Self {
        self.camera_mode = mode;
        self
    }

    pub fn with_free_fly(mut self, free_fly: FreeFlyConfig) -> Self {
        self.free_fly = free_fly;
        self
    }

    pub fn with_orbit(mut self, orbit: OrbitConfig) -> Self {
        self.orbit = orbit;
        self
    }

    pub fn with_object(mut self, object: ObjectConfig) -> Self {
        self.object = object;
        self
    }

    pub fn with_object_auto_rotate(mut self, enabled: bool) -> Self {
        self.object.auto_rotate = enabled;
        self
    }

    pub fn with_projection(mut self, projection: Projection) -> Self {
        self.projection = projection;
        self
    }

    pub fn with_key_bindings(mut self, key_bindings: KeyBindings) -> Self {
        self.key_bindings = key_bindings;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ViewerConfig::default();
        assert_eq!(config.window_size, (800, 600));
        assert_eq!(config.camera_mode, CameraMode::FreeFly);
        assert_eq!(config.free_fly.position, Vector3::new(0.0, 0.0, 5.0));
        assert_eq!(config.free_fly.movement_speed, 10.0);
        assert_eq!(config.projection.fovy_degrees, 45.0);
        assert!(!config.object.auto_rotate);
        assert!(config.orbit.auto_rotate);
    }

    #[test]
    fn test_builder() {
        let config = ViewerConfig::default()
            .with_title("rock")
            .with_window_size(1920, 1080)
            .with_camera_mode(CameraMode::Orbital)
            .with_object_auto_rotate(true);

        assert_eq!(config.title, "rock");
        assert_eq!(config.window_size, (1920, 1080));
        assert_eq!(config.camera_mode, CameraMode::Orbital);
        assert!(config.object.auto_rotate);
    }
}
