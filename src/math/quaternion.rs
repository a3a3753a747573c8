//! Rotation quaternions.
//!
//! There is one conversion to a matrix, [`Quaternion::to_rotation_matrix`],
//! and one composition convention: `a * b` applies `b` first, then `a`. The
//! camera look rotation and the object orientation are both built from it,
//! so they agree with [`Matrix4`] composition order.

use std::ops::Mul;

use crate::error::MathError;

use super::{Matrix4, Vector3};

/// Quaternion `(x, y, z, w)` with `w` the scalar part.
///
/// Values built with [`Quaternion::new`] are not normalized; only unit
/// quaternions represent rotations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quaternion {
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Right-handed rotation of `angle_rad` about `axis`.
    pub fn from_axis_angle(axis: Vector3, angle_rad: f32) -> Result<Self, MathError> {
        let axis = axis.normalize()?;
        let (s, c) = (angle_rad * 0.5).sin_cos();
        Ok(Self::new(axis.x * s, axis.y * s, axis.z * s, c))
    }

    pub fn from_rotation_x(angle_rad: f32) -> Self {
        let (s, c) = (angle_rad * 0.5).sin_cos();
        Self::new(s, 0.0, 0.0, c)
    }

    pub fn from_rotation_y(angle_rad: f32) -> Self {
        let (s, c) = (angle_rad * 0.5).sin_cos();
        Self::new(0.0, s, 0.0, c)
    }

    pub fn from_rotation_z(angle_rad: f32) -> Self {
        let (s, c) = (angle_rad * 0.5).sin_cos();
        Self::new(0.0, 0.0, s, c)
    }

    /// Same rotation as [`Matrix4::from_euler_yxz`].
    pub fn from_euler_yxz(yaw_rad: f32, pitch_rad: f32, roll_rad: f32) -> Self {
        Self::from_rotation_y(yaw_rad)
            * Self::from_rotation_x(pitch_rad)
            * Self::from_rotation_z(roll_rad)
    }

    pub fn dot(self, rhs: Self) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z + self.w * rhs.w
    }

    pub fn norm(self) -> f32 {
        self.dot(self).sqrt()
    }

    pub fn normalize(self) -> Result<Self, MathError> {
        let n = self.norm();
        if n == 0.0 || !n.is_finite() {
            return Err(MathError::ZeroLengthQuaternion);
        }
        let inv = 1.0 / n;
        Ok(Self::new(self.x * inv, self.y * inv, self.z * inv, self.w * inv))
    }

    pub fn conjugate(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Equivalent rotation matrix (column vectors, right-handed).
    ///
    /// The quaternion is normalized first, so any non-zero quaternion yields
    /// an orthonormal matrix. A zero quaternion has no rotation and fails.
    #[rustfmt::skip]
    pub fn to_rotation_matrix(self) -> Result<Matrix4, MathError> {
        let Self { x, y, z, w } = self.normalize()?;

        let (xx, yy, zz) = (x * x, y * y, z * z);
        let (xy, xz, yz) = (x * y, x * z, y * z);
        let (wx, wy, wz) = (w * x, w * y, w * z);

        Ok(Matrix4::from_row_major([
            1.0 - 2.0 * (yy + zz), 2.0 * (xy - wz),       2.0 * (xz + wy),       0.0,
            2.0 * (xy + wz),       1.0 - 2.0 * (xx + zz), 2.0 * (yz - wx),       0.0,
            2.0 * (xz - wy),       2.0 * (yz + wx),       1.0 - 2.0 * (xx + yy), 0.0,
            0.0,                   0.0,                   0.0,                   1.0,
        ]))
    }

    pub fn rotate_vector(self, v: Vector3) -> Result<Vector3, MathError> {
        Ok(self.to_rotation_matrix()?.transform_vector(v))
    }

    pub fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self.x - other.x).abs() <= epsilon
            && (self.y - other.y).abs() <= epsilon
            && (self.z - other.z).abs() <= epsilon
            && (self.w - other.w).abs() <= epsilon
    }
}

/// Hamilton product. `a * b` applies `b` first, then `a`.
impl Mul for Quaternion {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let (a, b) = (self, rhs);
        Self::new(
            a.w * b.x + a.x * b.w + a.y * b.z - a.z * b.y,
            a.w * b.y - a.x * b.z + a.y * b.w + a.z * b.x,
            a.w * b.z + a.x * b.y - a.y * b.x + a.z * b.w,
            a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z,
        )
    }
}
