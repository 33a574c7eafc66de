// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use bytemuck::{Pod, Zeroable};
use tracing::trace;

use crate::error::MathError;
use crate::scalar::{fisqrt, nearly_equal, sign, TAU};
use crate::vector::impl_accessors;
use crate::{Mat4, Vec3};

/// Below this `1 - w²` the rotation axis is too short to rescale reliably.
const AXIS_DEGENERACY: f32 = 0.001;

/// Quaternion stored as `(x, y, z, w)`, i.e. `w + xi + yj + zk`.
///
/// * All angles are expressed in radians.
/// * Unit length is not enforced. Normalise before treating a value as a pure
///   rotation or extracting an angle/axis.
/// * The default value is the identity rotation.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Quat {
    data: [f32; 4],
}

impl_accessors!(Quat {
    0 => x, set_x, "x (vector part)";
    1 => y, set_y, "y (vector part)";
    2 => z, set_z, "z (vector part)";
    3 => w, set_w, "w (scalar part)";
});

impl Quat {
    /// The identity rotation `(0, 0, 0, 1)`.
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Creates a quaternion from components.
    ///
    /// Callers should provide finite components; use
    /// [`Quat::from_angle_axis`] for axis/angle construction.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self {
            data: [x, y, z, w],
        }
    }

    /// Returns the identity quaternion.
    #[inline]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Returns the quaternion as an array.
    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        self.data
    }

    /// Flat view of the components.
    #[inline]
    pub const fn as_array(&self) -> &[f32; 4] {
        &self.data
    }

    /// The vector part `(x, y, z)`.
    #[inline]
    pub const fn vector(self) -> Vec3 {
        Vec3::new(self.x(), self.y(), self.z())
    }

    /// The scalar part `w`.
    #[inline]
    pub const fn scalar(self) -> f32 {
        self.w()
    }

    /// Returns the conjugate `(-x, -y, -z, w)`.
    ///
    /// This is the inverse only for unit quaternions; it does not divide by
    /// the squared magnitude.
    #[inline]
    pub fn conjugate(self) -> Self {
        Self::new(-self.x(), -self.y(), -self.z(), self.w())
    }

    /// Alias of [`Quat::conjugate`].
    #[inline]
    pub fn inversed(self) -> Self {
        self.conjugate()
    }

    /// Conjugates in place. See [`Quat::conjugate`] for the unit-length
    /// caveat.
    #[inline]
    pub fn inverse(&mut self) -> &mut Self {
        *self = self.conjugate();
        self
    }

    /// Hamilton product (`self * other`).
    ///
    /// When rotating a vector, `other` is applied first and `self` second.
    /// Quaternion multiplication is non-commutative.
    ///
    /// # Examples
    /// ```
    /// use core::f32::consts::FRAC_PI_2;
    /// use echo_math::{Quat, Vec3};
    /// let yaw = Quat::from_angle_axis(FRAC_PI_2, Vec3::up());
    /// let pitch = Quat::from_angle_axis(FRAC_PI_2, Vec3::right());
    /// assert_ne!(yaw.multiply(&pitch), pitch.multiply(&yaw));
    /// ```
    pub fn multiply(&self, other: &Self) -> Self {
        let [ax, ay, az, aw] = self.data;
        let [bx, by, bz, bw] = other.data;

        Self::new(
            aw * bx + ax * bw + ay * bz - az * by,
            aw * by + ay * bw + az * bx - ax * bz,
            aw * bz + az * bw + ax * by - ay * bx,
            aw * bw - ax * bx - ay * by - az * bz,
        )
    }

    /// Four-component dot product.
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x() * other.x() + self.y() * other.y() + self.z() * other.z() + self.w() * other.w()
    }

    /// Squared magnitude.
    #[inline]
    pub fn sqr_magnitude(self) -> f32 {
        self.dot(self)
    }

    /// Normalises in place using [`fisqrt`].
    pub fn normalize(&mut self) -> &mut Self {
        *self = self.normalized();
        self
    }

    /// Returns a normalised copy using [`fisqrt`].
    pub fn normalized(self) -> Self {
        let root = fisqrt(self.sqr_magnitude());
        Self {
            data: self.data.map(|c| c * root),
        }
    }

    /// Rows of the rotation matrix this quaternion encodes (column-vector
    /// convention). Algebraically the same map as [`Quat::rotate`].
    pub(crate) fn rotation_rows(self) -> [Vec3; 3] {
        let [x, y, z, w] = self.data;
        let x2 = x + x;
        let y2 = y + y;
        let z2 = z + z;

        let xx = x * x2;
        let yy = y * y2;
        let zz = z * z2;
        let xy = x * y2;
        let xz = x * z2;
        let yz = y * z2;
        let wx = w * x2;
        let wy = w * y2;
        let wz = w * z2;

        [
            Vec3::new(1.0 - yy - zz, xy - wz, xz + wy),
            Vec3::new(xy + wz, 1.0 - xx - zz, yz - wx),
            Vec3::new(xz - wy, yz + wx, 1.0 - xx - yy),
        ]
    }

    /// Rotates `v` without building an intermediate matrix:
    /// `v + w·t + u × t` with `u = (x, y, z)` and `t = 2 (u × v)`.
    #[inline]
    pub fn rotate(self, v: Vec3) -> Vec3 {
        let u = self.vector();
        let t = u.cross(v) * 2.0;
        v + t * self.w() + u.cross(t)
    }

    /// Rotation matrix for this quaternion. Forwards to
    /// [`Mat4::from_rotation`].
    #[inline]
    pub fn to_mat4(self) -> Mat4 {
        Mat4::from_rotation(self)
    }

    /// Builds a rotation of `angle` radians around `axis`.
    ///
    /// The axis is normalised with [`fisqrt`] first; a zero axis is not
    /// special-cased.
    pub fn from_angle_axis(angle: f32, axis: Vec3) -> Self {
        let axis = axis.normalized();
        let (sin_half, cos_half) = (angle * 0.5).sin_cos();
        let v = axis * sin_half;
        Self::new(v.x(), v.y(), v.z(), cos_half)
    }

    /// Splits the rotation into `(angle, axis)`.
    ///
    /// Normalises first only when `w > 1` (round-off guard for `acos`). When
    /// `1 - w²` is within `0.001` of zero the rotation is near identity and the
    /// axis is returned as the raw `(x, y, z)` part, unscaled.
    pub fn to_angle_axis(self) -> (f32, Vec3) {
        let q = if self.w() > 1.0 { self.normalized() } else { self };
        let angle = 2.0 * q.w().acos();
        let sin_sq = 1.0 - q.w() * q.w();
        let axis = q.vector();
        if nearly_equal(sin_sq, 0.0, AXIS_DEGENERACY) {
            trace!(w = q.w(), "near-identity rotation, axis left unscaled");
            return (angle, axis);
        }
        (angle, axis * fisqrt(sin_sq))
    }

    /// Builds `Rx(angles.x) * Ry(angles.y) * Rz(angles.z)` (radians).
    pub fn from_euler_angles(angles: Vec3) -> Self {
        let x = Self::from_angle_axis(angles.x(), Vec3::right());
        let y = Self::from_angle_axis(angles.y(), Vec3::up());
        let z = Self::from_angle_axis(angles.z(), Vec3::forward());
        x * y * z
    }

    /// Inverse of [`Quat::from_euler_angles`], in radians.
    ///
    /// When the sine of the Y angle reaches `±1` the Y angle is pinned to
    /// `±90°` instead of calling `asin` outside its domain.
    pub fn to_euler_angles(self) -> Vec3 {
        let [x, y, z, w] = self.data;

        let x_angle = (2.0 * (w * x - y * z)).atan2(1.0 - 2.0 * (x * x + y * y));

        let sin_y = 2.0 * (w * y + x * z);
        let y_angle = if sin_y.abs() >= 1.0 {
            trace!(sin_y, "gimbal lock, pinning y angle");
            (TAU / 4.0) * sign(sin_y)
        } else {
            sin_y.asin()
        };

        let z_angle = (2.0 * (w * z - x * y)).atan2(1.0 - 2.0 * (y * y + z * z));

        Vec3::new(x_angle, y_angle, z_angle)
    }

    /// Orientation whose forward axis (`+Z`) points from `eye` toward
    /// `point`, with `up` resolving the roll.
    ///
    /// Builds [`Mat4::look_at`] and extracts the world orientation from its
    /// rotation block.
    pub fn look_rotation(point: Vec3, eye: Vec3, up: Vec3) -> Self {
        Mat4::look_at(point, eye, up).transposed().to_rotation()
    }

    /// [`Quat::look_rotation`] from the origin with [`Vec3::up`] as the up
    /// hint.
    pub fn look_rotation_from_origin(point: Vec3) -> Self {
        Self::look_rotation(point, Vec3::ZERO, Vec3::up())
    }
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Converts a 4-element `[f32; 4]` array `(x, y, z, w)` into a `Quat`.
/// The components are taken verbatim; normalization is not enforced.
impl From<[f32; 4]> for Quat {
    fn from(value: [f32; 4]) -> Self {
        Self { data: value }
    }
}

impl From<Quat> for [f32; 4] {
    fn from(value: Quat) -> Self {
        value.data
    }
}

impl TryFrom<&[f32]> for Quat {
    type Error = MathError;

    fn try_from(slice: &[f32]) -> Result<Self, Self::Error> {
        <[f32; 4]>::try_from(slice)
            .map(Self::from)
            .map_err(|_| MathError::LengthMismatch {
                expected: 4,
                actual: slice.len(),
            })
    }
}

impl core::ops::Mul for Quat {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl core::ops::MulAssign for Quat {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.multiply(&rhs);
    }
}

impl core::ops::Mul<Vec3> for Quat {
    type Output = Vec3;
    fn mul(self, rhs: Vec3) -> Vec3 {
        self.rotate(rhs)
    }
}

impl core::fmt::Display for Quat {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x(), self.y(), self.z(), self.w())
    }
}
