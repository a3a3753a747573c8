//! Three component vector used for positions and directions.

use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use crate::error::MathError;

/// A 3D vector with `f32` components.
///
/// Every operator returns a new value; nothing mutates in place except the
/// compound assignment operators on a binding the caller owns.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0);
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0);
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn dot(self, rhs: Self) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    /// Right-handed cross product: `UNIT_X.cross(UNIT_Y) == UNIT_Z`.
    pub fn cross(self, rhs: Self) -> Self {
        Self::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }

    pub fn magnitude_squared(self) -> f32 {
        self.dot(self)
    }

    pub fn magnitude(self) -> f32 {
        self.magnitude_squared().sqrt()
    }

    /// Returns the unit vector pointing the same way.
    ///
    /// Fails for zero-length and non-finite vectors instead of producing NaNs.
    pub fn normalize(self) -> Result<Self, MathError> {
        let len = self.magnitude();
        if len == 0.0 || !len.is_finite() {
            return Err(MathError::ZeroLengthVector);
        }
        Ok(self * (1.0 / len))
    }

    /// Like [`normalize`](Self::normalize) but falls back to [`Vector3::ZERO`].
    pub fn normalize_or_zero(self) -> Self {
        self.normalize().unwrap_or(Self::ZERO)
    }

    /// Scalar division that rejects a zero divisor.
    pub fn checked_div(self, s: f32) -> Result<Self, MathError> {
        if s == 0.0 {
            return Err(MathError::DivisionByZero);
        }
        Ok(self / s)
    }

    pub fn lerp(self, to: Self, t: f32) -> Self {
        self + (to - self) * t
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[f32; 3]> for Vector3 {
    fn from(v: [f32; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

impl Add for Vector3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for Vector3 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<f32> for Vector3 {
    type Output = Self;
    fn mul(self, s: f32) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s)
    }
}

impl Mul<Vector3> for f32 {
    type Output = Vector3;
    fn mul(self, v: Vector3) -> Vector3 {
        v * self
    }
}

/// Component-wise division. The divisor must be non-zero; use
/// [`Vector3::checked_div`] when it comes from untrusted input.
impl Div<f32> for Vector3 {
    type Output = Self;
    fn div(self, s: f32) -> Self {
        Self::new(self.x / s, self.y / s, self.z / s)
    }
}

impl AddAssign for Vector3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vector3 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_arithmetic() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, 5.0, 6.0);

        assert_eq!(a + b, Vector3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vector3::new(3.0, 3.0, 3.0));
        assert_eq!(a * 2.0, Vector3::new(2.0, 4.0, 6.0));
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(b / 2.0, Vector3::new(2.0, 2.5, 3.0));
        assert_eq!(-a, Vector3::new(-1.0, -2.0, -3.0));
        assert_eq!(a.dot(b), 32.0);
    }

    #[test]
    fn test_cross_is_right_handed() {
        assert_eq!(Vector3::UNIT_X.cross(Vector3::UNIT_Y), Vector3::UNIT_Z);
        assert_eq!(Vector3::UNIT_Y.cross(Vector3::UNIT_Z), Vector3::UNIT_X);
        assert_eq!(Vector3::UNIT_Y.cross(Vector3::UNIT_X), -Vector3::UNIT_Z);

        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(-2.0, 0.5, 4.0);
        let c = a.cross(b);
        assert!(c.dot(a).abs() < 1e-5);
        assert!(c.dot(b).abs() < 1e-5);
    }

    #[test]
    fn test_normalize() {
        let v = Vector3::new(3.0, 0.0, 4.0);
        assert_eq!(v.magnitude(), 5.0);

        let n = v.normalize().unwrap();
        assert!((n.magnitude() - 1.0).abs() < 1e-6);
        assert!((n.x - 0.6).abs() < 1e-6);
        assert!((n.z - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_normalize_zero_vector_is_an_error() {
        assert_eq!(Vector3::ZERO.normalize(), Err(MathError::ZeroLengthVector));
        assert_eq!(Vector3::ZERO.normalize_or_zero(), Vector3::ZERO);

        let bad = Vector3::new(f32::INFINITY, 0.0, 0.0);
        assert_eq!(bad.normalize(), Err(MathError::ZeroLengthVector));
    }

    #[test]
    fn test_checked_div() {
        let v = Vector3::new(2.0, 4.0, 6.0);
        assert_eq!(v.checked_div(2.0), Ok(Vector3::new(1.0, 2.0, 3.0)));
        assert_eq!(v.checked_div(0.0), Err(MathError::DivisionByZero));
    }

    #[test]
    fn test_operators_do_not_mutate_operands() {
        let a = Vector3::new(1.0, 1.0, 1.0);
        let _ = a + Vector3::UNIT_X;
        let _ = a * 3.0;
        assert_eq!(a, Vector3::new(1.0, 1.0, 1.0));

        let mut b = a;
        b += Vector3::UNIT_Y;
        b -= Vector3::UNIT_Z;
        assert_eq!(b, Vector3::new(1.0, 2.0, 0.0));
        assert_eq!(a.lerp(b, 0.5), Vector3::new(1.0, 1.5, 0.5));
    }
}
