//! 4x4 matrix for 3D transformations
//!
//! Storage is row-major: linear index `r * 4 + c` holds row `r`, column `c`.
//! Vectors are treated as columns, so a transform is applied as `M * v` and a
//! composition `A * B` applies `B` first, then `A`. Translation therefore
//! lives in the fourth column (indices 3, 7 and 11).
//!
//! Layout:
//! ```text
//! [  0  1  2  3 ]
//! [  4  5  6  7 ]
//! [  8  9 10 11 ]
//! [ 12 13 14 15 ]
//! ```

use std::ops::{Add, Index, Mul, Sub};

use crate::error::MathError;

use super::Vector3;

/// Row-major 4x4 matrix of `f32`.
///
/// `Default` is the zero matrix, not the identity. Use
/// [`Matrix4::IDENTITY`] when a neutral transform is wanted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix4 {
    m: [f32; 16],
}

impl Default for Matrix4 {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Matrix4 {
    pub const ZERO: Self = Self { m: [0.0; 16] };

    #[rustfmt::skip]
    pub const IDENTITY: Self = Self::from_row_major([
        1.0, 0.0, 0.0, 0.0,
        0.0, 1.0, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0,
        0.0, 0.0, 0.0, 1.0,
    ]);

    /// Builds a matrix from 16 entries in row-major order.
    pub const fn from_row_major(m: [f32; 16]) -> Self {
        Self { m }
    }

    pub const fn from_rows(rows: [[f32; 4]; 4]) -> Self {
        let [r0, r1, r2, r3] = rows;
        Self::from_row_major([
            r0[0], r0[1], r0[2], r0[3], r1[0], r1[1], r1[2], r1[3], r2[0], r2[1], r2[2], r2[3],
            r3[0], r3[1], r3[2], r3[3],
        ])
    }

    /// Builds a linear (non-translating) transform whose first three columns
    /// are `v0`, `v1` and `v2`. The bottom-right entry is 1.
    #[rustfmt::skip]
    pub fn from_basis(v0: Vector3, v1: Vector3, v2: Vector3) -> Self {
        Self::from_row_major([
            v0.x, v1.x, v2.x, 0.0,
            v0.y, v1.y, v2.y, 0.0,
            v0.z, v1.z, v2.z, 0.0,
            0.0,  0.0,  0.0,  1.0,
        ])
    }

    #[rustfmt::skip]
    pub fn from_translation(t: Vector3) -> Self {
        Self::from_row_major([
            1.0, 0.0, 0.0, t.x,
            0.0, 1.0, 0.0, t.y,
            0.0, 0.0, 1.0, t.z,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    pub fn from_scale(s: Vector3) -> Self {
        Self::from_basis(
            Vector3::UNIT_X * s.x,
            Vector3::UNIT_Y * s.y,
            Vector3::UNIT_Z * s.z,
        )
    }

    /// Right-handed rotation about the X axis.
    #[rustfmt::skip]
    pub fn from_rotation_x(angle_rad: f32) -> Self {
        let (s, c) = angle_rad.sin_cos();
        Self::from_row_major([
            1.0, 0.0, 0.0, 0.0,
            0.0, c,   -s,  0.0,
            0.0, s,   c,   0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Right-handed rotation about the Y axis.
    #[rustfmt::skip]
    pub fn from_rotation_y(angle_rad: f32) -> Self {
        let (s, c) = angle_rad.sin_cos();
        Self::from_row_major([
            c,   0.0, s,   0.0,
            0.0, 1.0, 0.0, 0.0,
            -s,  0.0, c,   0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Right-handed rotation about the Z axis.
    #[rustfmt::skip]
    pub fn from_rotation_z(angle_rad: f32) -> Self {
        let (s, c) = angle_rad.sin_cos();
        Self::from_row_major([
            c,   -s,  0.0, 0.0,
            s,   c,   0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Euler rotation in YXZ order: `Ry(yaw) * Rx(pitch) * Rz(roll)`.
    ///
    /// Roll is applied to the vertex first and yaw last.
    pub fn from_euler_yxz(yaw_rad: f32, pitch_rad: f32, roll_rad: f32) -> Self {
        Self::from_rotation_y(yaw_rad)
            * Self::from_rotation_x(pitch_rad)
            * Self::from_rotation_z(roll_rad)
    }

    /// Right-handed view matrix looking from `eye` towards `target`.
    ///
    /// Fails when `eye == target` or when the view direction is parallel to
    /// `up`, since no orthonormal basis exists in either case.
    #[rustfmt::skip]
    pub fn look_at_rh(eye: Vector3, target: Vector3, up: Vector3) -> Result<Self, MathError> {
        let f = (target - eye).normalize()?;
        let s = f.cross(up).normalize()?;
        let u = s.cross(f);

        Ok(Self::from_row_major([
            s.x,  s.y,  s.z,  -s.dot(eye),
            u.x,  u.y,  u.z,  -u.dot(eye),
            -f.x, -f.y, -f.z, f.dot(eye),
            0.0,  0.0,  0.0,  1.0,
        ]))
    }

    /// OpenGL-style perspective projection (clip depth -1..1).
    ///
    /// `aspect` must be positive; callers obtain it from a validated
    /// [`Viewport`](crate::gfx::camera::Viewport).
    #[rustfmt::skip]
    pub fn perspective(fovy_rad: f32, aspect: f32, near: f32, far: f32) -> Self {
        let f = 1.0 / (fovy_rad / 2.0).tan();
        let depth = near - far;

        Self::from_row_major([
            f / aspect, 0.0, 0.0,                 0.0,
            0.0,        f,   0.0,                 0.0,
            0.0,        0.0, (far + near) / depth, 2.0 * far * near / depth,
            0.0,        0.0, -1.0,                0.0,
        ])
    }

    /// Reads an entry by linear index, rejecting anything outside `0..16`.
    pub fn get(&self, index: usize) -> Result<f32, MathError> {
        self.m
            .get(index)
            .copied()
            .ok_or(MathError::IndexOutOfRange { index })
    }

    pub fn at(&self, row: usize, col: usize) -> f32 {
        self[row * 4 + col]
    }

    pub fn row(&self, r: usize) -> [f32; 4] {
        [self.at(r, 0), self.at(r, 1), self.at(r, 2), self.at(r, 3)]
    }

    pub fn column(&self, c: usize) -> [f32; 4] {
        [self.at(0, c), self.at(1, c), self.at(2, c), self.at(3, c)]
    }

    pub fn transpose(&self) -> Self {
        let mut out = [0.0; 16];
        for r in 0..4 {
            for c in 0..4 {
                out[c * 4 + r] = self.m[r * 4 + c];
            }
        }
        Self::from_row_major(out)
    }

    /// Full 4x4 determinant by Laplace expansion over the 2x2 minors of the
    /// top and bottom row pairs. Translation and projective entries count.
    pub fn determinant(&self) -> f32 {
        let a = &self.m;

        let b00 = a[0] * a[5] - a[1] * a[4];
        let b01 = a[0] * a[6] - a[2] * a[4];
        let b02 = a[0] * a[7] - a[3] * a[4];
        let b03 = a[1] * a[6] - a[2] * a[5];
        let b04 = a[1] * a[7] - a[3] * a[5];
        let b05 = a[2] * a[7] - a[3] * a[6];
        let b06 = a[8] * a[13] - a[9] * a[12];
        let b07 = a[8] * a[14] - a[10] * a[12];
        let b08 = a[8] * a[15] - a[11] * a[12];
        let b09 = a[9] * a[14] - a[10] * a[13];
        let b10 = a[9] * a[15] - a[11] * a[13];
        let b11 = a[10] * a[15] - a[11] * a[14];

        b00 * b11 - b01 * b10 + b02 * b09 + b03 * b08 - b04 * b07 + b05 * b06
    }

    /// Inverse by Gauss-Jordan elimination with partial pivoting.
    pub fn inverse(&self) -> Result<Self, MathError> {
        let determinant = self.determinant();
        if determinant == 0.0 || !determinant.is_finite() {
            return Err(MathError::SingularMatrix { determinant });
        }

        let mut a: [f64; 16] = self.m.map(f64::from);
        let mut inv: [f64; 16] = Self::IDENTITY.m.map(f64::from);

        for col in 0..4 {
            let pivot = (col..4)
                .max_by(|&i, &j| a[i * 4 + col].abs().total_cmp(&a[j * 4 + col].abs()))
                .unwrap_or(col);

            if a[pivot * 4 + col].abs() < f64::EPSILON {
                return Err(MathError::SingularMatrix { determinant });
            }

            if pivot != col {
                for k in 0..4 {
                    a.swap(pivot * 4 + k, col * 4 + k);
                    inv.swap(pivot * 4 + k, col * 4 + k);
                }
            }

            let scale = 1.0 / a[col * 4 + col];
            for k in 0..4 {
                a[col * 4 + k] *= scale;
                inv[col * 4 + k] *= scale;
            }

            for row in (0..4).filter(|&r| r != col) {
                let factor = a[row * 4 + col];
                if factor == 0.0 {
                    continue;
                }
                for k in 0..4 {
                    a[row * 4 + k] -= factor * a[col * 4 + k];
                    inv[row * 4 + k] -= factor * inv[col * 4 + k];
                }
            }
        }

        Ok(Self::from_row_major(inv.map(|v| v as f32)))
    }

    /// Transforms a point (w = 1) including the perspective divide.
    pub fn transform_point(&self, p: Vector3) -> Vector3 {
        let [x, y, z, w] = self.mul_vec4([p.x, p.y, p.z, 1.0]);
        if w == 0.0 || w == 1.0 {
            Vector3::new(x, y, z)
        } else {
            Vector3::new(x / w, y / w, z / w)
        }
    }

    /// Transforms a direction (w = 0); translation is ignored.
    pub fn transform_vector(&self, v: Vector3) -> Vector3 {
        let [x, y, z, _] = self.mul_vec4([v.x, v.y, v.z, 0.0]);
        Vector3::new(x, y, z)
    }

    pub fn mul_vec4(&self, v: [f32; 4]) -> [f32; 4] {
        let mut out = [0.0; 4];
        for (r, slot) in out.iter_mut().enumerate() {
            *slot = (0..4).map(|c| self.m[r * 4 + c] * v[c]).sum();
        }
        out
    }

    /// The 16 entries in row-major order, ready for a row-major upload.
    pub fn to_row_major(&self) -> [f32; 16] {
        self.m
    }

    /// Column-major nested array, the layout WGSL and GLSL `mat4x4` expect.
    pub fn to_cols_array_2d(&self) -> [[f32; 4]; 4] {
        [self.column(0), self.column(1), self.column(2), self.column(3)]
    }

    pub fn is_finite(&self) -> bool {
        self.m.iter().all(|v| v.is_finite())
    }

    /// Entry-wise comparison within `epsilon`.
    pub fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.m
            .iter()
            .zip(other.m.iter())
            .all(|(a, b)| (a - b).abs() <= epsilon)
    }
}

impl Index<usize> for Matrix4 {
    type Output = f32;

    /// Panics when `index >= 16`; use [`Matrix4::get`] for a checked read.
    fn index(&self, index: usize) -> &f32 {
        match self.m.get(index) {
            Some(v) => v,
            None => panic!("matrix index {index} out of range 0..16"),
        }
    }
}

/// `A * B`: `B` is applied first, then `A`.
impl Mul for Matrix4 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let mut out = [0.0; 16];
        for i in 0..4 {
            for j in 0..4 {
                let mut total = 0.0;
                for h in 0..4 {
                    total += self.m[i * 4 + h] * rhs.m[h * 4 + j];
                }
                out[i * 4 + j] = total;
            }
        }
        Self::from_row_major(out)
    }
}

impl Add for Matrix4 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let mut out = self.m;
        for (o, r) in out.iter_mut().zip(rhs.m.iter()) {
            *o += r;
        }
        Self::from_row_major(out)
    }
}

impl Sub for Matrix4 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        let mut out = self.m;
        for (o, r) in out.iter_mut().zip(rhs.m.iter()) {
            *o -= r;
        }
        Self::from_row_major(out)
    }
}
