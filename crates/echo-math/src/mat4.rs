// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use bytemuck::{Pod, Zeroable};

use crate::error::MathError;
use crate::scalar::{clamp_index, deg_to_rad, fisqrt};
use crate::{Quat, Vec3, Vec4};

/// 4×4 matrix stored as four row vectors `a`, `b`, `c`, `d`.
///
/// - Acts on column vectors from the left: `M * v` is the vector of row·`v`
///   dot products, and `M * N` combines rows of `M` with columns of `N`.
/// - Affine transforms keep their translation in column 3; perspective
///   transforms produce the homogeneous `w` from row `d`.
/// - The same 64 bytes are also viewable as a `[[f32; 4]; 4]` grid
///   ([`Mat4::as_grid`]) and a flat row-major `[f32; 16]`
///   ([`Mat4::as_array`]).
///
/// # Examples
/// ```
/// use echo_math::{Mat4, Vec3};
/// let t = Mat4::translate(Vec3::new(5.0, -3.0, 2.0));
/// let p = Vec3::new(2.0, 4.0, -1.0);
/// assert_eq!(t.transform_point(p).to_array(), [7.0, 1.0, 1.0]);
/// ```
///
/// # Precision
/// - Uses `f32`; repeated multiplies and transforms accumulate rounding.
/// - [`Mat4::to_rotation`] goes through [`fisqrt`] and carries its error.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Mat4 {
    rows: [Vec4; 4],
}

impl Mat4 {
    /// The identity matrix.
    pub const IDENTITY: Self = Self::from_rows(
        Vec4::new(1.0, 0.0, 0.0, 0.0),
        Vec4::new(0.0, 1.0, 0.0, 0.0),
        Vec4::new(0.0, 0.0, 1.0, 0.0),
        Vec4::new(0.0, 0.0, 0.0, 1.0),
    );

    /// Returns the identity matrix.
    #[inline]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Creates a matrix from its four rows.
    #[inline]
    pub const fn from_rows(a: Vec4, b: Vec4, c: Vec4, d: Vec4) -> Self {
        Self { rows: [a, b, c, d] }
    }

    /// Creates a matrix from row-major array data.
    ///
    /// Callers must supply 16 values laid out row by row.
    pub fn new(data: [f32; 16]) -> Self {
        bytemuck::cast(data)
    }

    /// The four rows.
    #[inline]
    pub const fn rows(&self) -> &[Vec4; 4] {
        &self.rows
    }

    /// Row `index`, clamped to `0..=3`.
    #[inline]
    pub const fn row(&self, index: usize) -> Vec4 {
        self.rows[clamp_index(index, 0, 3)]
    }

    /// Overwrites row `index` (clamped to `0..=3`).
    pub fn set_row(&mut self, index: usize, value: Vec4) -> &mut Self {
        self.rows[clamp_index(index, 0, 3)] = value;
        self
    }

    /// Column `index`, clamped to `0..=3`.
    pub fn column(&self, index: usize) -> Vec4 {
        let col = clamp_index(index, 0, 3);
        let m = self.as_grid();
        Vec4::new(m[0][col], m[1][col], m[2][col], m[3][col])
    }

    /// Overwrites column `index` (clamped to `0..=3`).
    pub fn set_column(&mut self, index: usize, value: Vec4) -> &mut Self {
        let col = clamp_index(index, 0, 3);
        for (row, v) in self.rows.iter_mut().zip(value.to_array()) {
            row[col] = v;
        }
        self
    }

    /// Element at `(row, col)`; both indices clamp to `0..=3`.
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> f32 {
        self.as_grid()[clamp_index(row, 0, 3)][clamp_index(col, 0, 3)]
    }

    /// Overwrites the element at `(row, col)` (indices clamped).
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        self.as_grid_mut()[clamp_index(row, 0, 3)][clamp_index(col, 0, 3)] = value;
    }

    /// 4×4 grid view, indexed `[row][col]`.
    #[inline]
    pub fn as_grid(&self) -> &[[f32; 4]; 4] {
        bytemuck::cast_ref(&self.rows)
    }

    /// Mutable 4×4 grid view, indexed `[row][col]`.
    #[inline]
    pub fn as_grid_mut(&mut self) -> &mut [[f32; 4]; 4] {
        bytemuck::cast_mut(&mut self.rows)
    }

    /// Flat row-major view of the 16 elements.
    #[inline]
    pub fn as_array(&self) -> &[f32; 16] {
        bytemuck::cast_ref(&self.rows)
    }

    /// Mutable flat row-major view of the 16 elements.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [f32; 16] {
        bytemuck::cast_mut(&mut self.rows)
    }

    /// Returns the matrix as a row-major array.
    #[inline]
    pub fn to_array(self) -> [f32; 16] {
        bytemuck::cast(self.rows)
    }

    /// Multiplies the matrix with another matrix (`self * rhs`).
    ///
    /// # Examples
    /// ```
    /// use echo_math::{Mat4, Vec3};
    /// let a = Mat4::identity();
    /// let b = Mat4::scale(Vec3::new(2.0, 3.0, 4.0));
    /// assert_eq!(a.multiply(&b), b);
    /// ```
    pub fn multiply(&self, rhs: &Self) -> Self {
        let cols = [rhs.column(0), rhs.column(1), rhs.column(2), rhs.column(3)];
        let mut out = Self::IDENTITY;
        for (dst, row) in out.rows.iter_mut().zip(self.rows) {
            *dst = Vec4::new(
                row.dot(cols[0]),
                row.dot(cols[1]),
                row.dot(cols[2]),
                row.dot(cols[3]),
            );
        }
        out
    }

    /// Transposes in place.
    pub fn transpose(&mut self) -> &mut Self {
        *self = self.transposed();
        self
    }

    /// Returns the transpose. Also callable as `Mat4::transposed(&m)`.
    pub fn transposed(&self) -> Self {
        Self::from_rows(self.column(0), self.column(1), self.column(2), self.column(3))
    }

    /// Matrix holding only this matrix's translation column (identity
    /// rotation and scale).
    pub fn translation(&self) -> Self {
        let m = self.as_grid();
        Self::translate(Vec3::new(m[0][3], m[1][3], m[2][3]))
    }

    /// Upper-left 3×3 block with translation and projection terms dropped.
    pub fn rotation_and_scale(&self) -> Self {
        Self::from_rows(
            self.rows[0].to_vec3().to_vec4(),
            self.rows[1].to_vec3().to_vec4(),
            self.rows[2].to_vec3().to_vec4(),
            Vec4::new(0.0, 0.0, 0.0, 1.0),
        )
    }

    /// `M * v`: four row·`v` dot products.
    #[inline]
    pub fn transform_vec4(&self, v: Vec4) -> Vec4 {
        let [a, b, c, d] = self.rows;
        Vec4::new(a.dot(v), b.dot(v), c.dot(v), d.dot(v))
    }

    /// Transforms a point (`w = 1`, no perspective divide).
    #[inline]
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        self.transform_vec4(point.extend(1.0)).to_vec3()
    }

    /// Transforms a direction (`w = 0`, translation ignored).
    #[inline]
    pub fn transform_direction(&self, direction: Vec3) -> Vec3 {
        self.transform_vec4(direction.extend(0.0)).to_vec3()
    }

    /// Transforms a point (`w = 1`) and divides `x`, `y`, `z` by the `w`
    /// produced by row `d`.
    ///
    /// This is the only multiply that divides; a zero `w` yields infinities
    /// or NaNs.
    pub fn perspective_mul(&self, point: Vec3) -> Vec3 {
        let clip = self.transform_vec4(point.extend(1.0));
        clip.to_vec3() * (1.0 / clip.w())
    }

    /// Non-uniform scale matrix.
    pub const fn scale(s: Vec3) -> Self {
        Self::from_rows(
            Vec4::new(s.x(), 0.0, 0.0, 0.0),
            Vec4::new(0.0, s.y(), 0.0, 0.0),
            Vec4::new(0.0, 0.0, s.z(), 0.0),
            Vec4::new(0.0, 0.0, 0.0, 1.0),
        )
    }

    /// Translation matrix; the offset occupies column 3.
    pub const fn translate(t: Vec3) -> Self {
        Self::from_rows(
            Vec4::new(1.0, 0.0, 0.0, t.x()),
            Vec4::new(0.0, 1.0, 0.0, t.y()),
            Vec4::new(0.0, 0.0, 1.0, t.z()),
            Vec4::new(0.0, 0.0, 0.0, 1.0),
        )
    }

    /// Rotation matrix for `q` via the double-angle expansion; maps vectors
    /// exactly as [`Quat::rotate`] does, up to rounding.
    ///
    /// `q` is used as given; a non-unit quaternion also scales.
    pub fn from_rotation(q: Quat) -> Self {
        let [a, b, c] = q.rotation_rows();
        Self::from_rows(a.to_vec4(), b.to_vec4(), c.to_vec4(), Vec4::new(0.0, 0.0, 0.0, 1.0))
    }

    /// Rotation around the X axis by `angle` radians.
    #[rustfmt::skip]
    pub fn rotation_x(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([
            1.0, 0.0, 0.0, 0.0,
            0.0, c,   -s,  0.0,
            0.0, s,   c,   0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Rotation around the Y axis by `angle` radians.
    #[rustfmt::skip]
    pub fn rotation_y(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([
            c,   0.0, s,   0.0,
            0.0, 1.0, 0.0, 0.0,
            -s,  0.0, c,   0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Rotation around the Z axis by `angle` radians.
    #[rustfmt::skip]
    pub fn rotation_z(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([
            c,   -s,  0.0, 0.0,
            s,   c,   0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Rotation `Rx * Ry * Rz` built directly from Euler angles in
    /// **degrees**.
    ///
    /// Matches [`Quat::from_euler_angles`] (which takes radians) up to
    /// rounding.
    pub fn euler_angles(angles: Vec3) -> Self {
        let (sx, cx) = deg_to_rad(angles.x()).sin_cos();
        let (sy, cy) = deg_to_rad(angles.y()).sin_cos();
        let (sz, cz) = deg_to_rad(angles.z()).sin_cos();

        Self::new([
            cy * cz,
            -cy * sz,
            sy,
            0.0,
            sx * sy * cz + cx * sz,
            -sx * sy * sz + cx * cz,
            -sx * cy,
            0.0,
            -cx * sy * cz + sx * sz,
            cx * sy * sz + sx * cz,
            cx * cy,
            0.0,
            0.0,
            0.0,
            0.0,
            1.0,
        ])
    }

    /// Extracts the rotation from the upper-left 3×3 block.
    ///
    /// Uses the trace-based four-branch method: the branch is picked from the
    /// trace and the diagonal so the square-rooted term stays large near 180°
    /// rotations. `Mat4::from_rotation(q).to_rotation()` yields `q` or `-q`.
    pub fn to_rotation(&self) -> Quat {
        let m = self.as_grid();
        let trace = m[0][0] + m[1][1] + m[2][2];

        if trace > 0.0 {
            let t = trace + 1.0;
            let root = fisqrt(t) * 0.5;
            return Quat::new(
                (m[2][1] - m[1][2]) * root,
                (m[0][2] - m[2][0]) * root,
                (m[1][0] - m[0][1]) * root,
                root * t,
            );
        }

        if m[0][0] > m[1][1] && m[0][0] > m[2][2] {
            let t = m[0][0] - m[1][1] - m[2][2] + 1.0;
            let root = fisqrt(t) * 0.5;
            return Quat::new(
                root * t,
                (m[0][1] + m[1][0]) * root,
                (m[0][2] + m[2][0]) * root,
                (m[2][1] - m[1][2]) * root,
            );
        }

        if m[1][1] > m[2][2] {
            let t = -m[0][0] + m[1][1] - m[2][2] + 1.0;
            let root = fisqrt(t) * 0.5;
            return Quat::new(
                (m[0][1] + m[1][0]) * root,
                root * t,
                (m[1][2] + m[2][1]) * root,
                (m[0][2] - m[2][0]) * root,
            );
        }

        let t = -m[0][0] - m[1][1] + m[2][2] + 1.0;
        let root = fisqrt(t) * 0.5;
        Quat::new(
            (m[0][2] + m[2][0]) * root,
            (m[1][2] + m[2][1]) * root,
            root * t,
            (m[1][0] - m[0][1]) * root,
        )
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<[f32; 16]> for Mat4 {
    fn from(value: [f32; 16]) -> Self {
        Self::new(value)
    }
}

impl From<[[f32; 4]; 4]> for Mat4 {
    fn from(value: [[f32; 4]; 4]) -> Self {
        bytemuck::cast(value)
    }
}

impl From<Mat4> for [f32; 16] {
    fn from(value: Mat4) -> Self {
        value.to_array()
    }
}

impl TryFrom<&[f32]> for Mat4 {
    type Error = MathError;

    fn try_from(slice: &[f32]) -> Result<Self, Self::Error> {
        <[f32; 16]>::try_from(slice)
            .map(Self::new)
            .map_err(|_| MathError::LengthMismatch {
                expected: 16,
                actual: slice.len(),
            })
    }
}

impl core::ops::Add for Mat4 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        let [a, b, c, d] = self.rows;
        let [ra, rb, rc, rd] = rhs.rows;
        Self::from_rows(a + ra, b + rb, c + rc, d + rd)
    }
}

impl core::ops::AddAssign for Mat4 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl core::ops::Sub for Mat4 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        let [a, b, c, d] = self.rows;
        let [ra, rb, rc, rd] = rhs.rows;
        Self::from_rows(a - ra, b - rb, c - rc, d - rd)
    }
}

impl core::ops::SubAssign for Mat4 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl core::ops::Mul<f32> for Mat4 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self {
            rows: self.rows.map(|row| row * rhs),
        }
    }
}

impl core::ops::MulAssign<f32> for Mat4 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl core::ops::Div<f32> for Mat4 {
    type Output = Self;
    fn div(self, rhs: f32) -> Self {
        Self {
            rows: self.rows.map(|row| row / rhs),
        }
    }
}

impl core::ops::DivAssign<f32> for Mat4 {
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}

impl core::ops::Mul for Mat4 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl core::ops::MulAssign for Mat4 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.multiply(&rhs);
    }
}

impl core::ops::MulAssign<&Mat4> for Mat4 {
    fn mul_assign(&mut self, rhs: &Mat4) {
        *self = self.multiply(rhs);
    }
}

impl core::ops::Mul<Vec4> for Mat4 {
    type Output = Vec4;
    fn mul(self, rhs: Vec4) -> Vec4 {
        self.transform_vec4(rhs)
    }
}

impl core::ops::Mul<Vec3> for Mat4 {
    type Output = Vec3;
    fn mul(self, rhs: Vec3) -> Vec3 {
        self.transform_point(rhs)
    }
}

impl core::fmt::Display for Mat4 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let [a, b, c, d] = self.rows;
        write!(f, "[{a}, {b}, {c}, {d}]")
    }
}
