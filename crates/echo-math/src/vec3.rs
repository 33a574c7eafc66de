// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use bytemuck::{Pod, Zeroable};

use crate::vector::{impl_accessors, impl_vector};
use crate::{Vec2, Vec4};

/// 3D vector used for positions, directions, Euler angles and RGB colors.
///
/// * `x`/`y`/`z` and `r`/`g`/`b` name the same three floats.
/// * The basis is right-handed with `right × up = forward`, where forward is
///   `+Z`.
/// * Use [`crate::Mat4::transform_point`] for points (homogeneous `w = 1`) and
///   [`crate::Mat4::transform_direction`] for directions (`w = 0`).
///
/// # Examples
/// ```
/// use echo_math::Vec3;
/// assert_eq!(Vec3::right().cross(Vec3::up()), Vec3::forward());
/// ```
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Default, Pod, Zeroable)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Vec3 {
    data: [f32; 3],
}

impl_vector!(Vec3, 3);

impl_accessors!(Vec3 {
    0 => x, set_x, "x";
    1 => y, set_y, "y";
    2 => z, set_z, "z";
    0 => r, set_r, "red (alias of x)";
    1 => g, set_g, "green (alias of y)";
    2 => b, set_b, "blue (alias of z)";
});

impl Vec3 {
    /// `(0, 0, 0)`.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// `(1, 1, 1)`.
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    /// Unit vector pointing along the positive X axis.
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit vector pointing along the positive Y axis.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit vector pointing along the positive Z axis.
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a vector from components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { data: [x, y, z] }
    }

    /// `(0, 0, 0)`.
    pub const fn zero() -> Self {
        Self::ZERO
    }

    /// `(1, 1, 1)`.
    pub const fn one() -> Self {
        Self::ONE
    }

    /// `+Y`.
    pub const fn up() -> Self {
        Self::UNIT_Y
    }

    /// `-Y`.
    pub const fn down() -> Self {
        Self::new(0.0, -1.0, 0.0)
    }

    /// `+X`.
    pub const fn right() -> Self {
        Self::UNIT_X
    }

    /// `-X`.
    pub const fn left() -> Self {
        Self::new(-1.0, 0.0, 0.0)
    }

    /// `+Z`.
    pub const fn forward() -> Self {
        Self::UNIT_Z
    }

    /// `-Z`.
    pub const fn back() -> Self {
        Self::new(0.0, 0.0, -1.0)
    }

    /// Cross product. Also callable as `Vec3::cross(a, b)`.
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        let [ax, ay, az] = self.data;
        let [bx, by, bz] = other.data;
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }

    /// Truncates to `(x, y)`.
    #[inline]
    pub const fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x(), self.y())
    }

    /// Widens to `(x, y, z, 0)`.
    #[inline]
    pub const fn to_vec4(self) -> Vec4 {
        self.extend(0.0)
    }

    /// Widens to `(x, y, z, w)`.
    #[inline]
    pub const fn extend(self, w: f32) -> Vec4 {
        Vec4::new(self.x(), self.y(), self.z(), w)
    }
}

impl From<Vec3> for Vec4 {
    fn from(value: Vec3) -> Self {
        value.to_vec4()
    }
}
