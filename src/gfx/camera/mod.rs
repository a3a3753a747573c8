pub mod camera_utils;
pub mod free_fly_camera;
pub mod orbit_camera;

// Re-export main types
pub use camera_utils::{Camera, CameraMode, CameraRig, CameraUniform, Projection, Viewport};
pub use free_fly_camera::FreeFlyCamera;
pub use orbit_camera::OrbitCamera;
