// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use bytemuck::{Pod, Zeroable};

use crate::vector::{impl_accessors, impl_vector};
use crate::{Vec3, Vec4};

/// 2D vector, also used as a `width`/`height` size.
///
/// Position (`x`, `y`) and size (`width`, `height`) are two names for the same
/// two floats.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Default, Pod, Zeroable)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Vec2 {
    data: [f32; 2],
}

impl_vector!(Vec2, 2);

impl_accessors!(Vec2 {
    0 => x, set_x, "x";
    1 => y, set_y, "y";
    0 => width, set_width, "width (alias of x)";
    1 => height, set_height, "height (alias of y)";
});

impl Vec2 {
    /// `(0, 0)`.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// `(1, 1)`.
    pub const ONE: Self = Self::new(1.0, 1.0);

    /// Creates a vector from components.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { data: [x, y] }
    }

    /// `(0, 0)`.
    pub const fn zero() -> Self {
        Self::ZERO
    }

    /// `(1, 1)`.
    pub const fn one() -> Self {
        Self::ONE
    }

    /// `(0, 1)`.
    pub const fn up() -> Self {
        Self::new(0.0, 1.0)
    }

    /// `(0, -1)`.
    pub const fn down() -> Self {
        Self::new(0.0, -1.0)
    }

    /// `(1, 0)`.
    pub const fn right() -> Self {
        Self::new(1.0, 0.0)
    }

    /// `(-1, 0)`.
    pub const fn left() -> Self {
        Self::new(-1.0, 0.0)
    }

    /// `a.x * b.x - a.y * b.y`.
    ///
    /// This is not the 2D determinant; see [`Vec2::perp_dot`] for that.
    #[inline]
    pub fn det(self, other: Self) -> f32 {
        self.x() * other.x() - self.y() * other.y()
    }

    /// 2D cross product / determinant `a.x * b.y - a.y * b.x`.
    #[inline]
    pub fn perp_dot(self, other: Self) -> f32 {
        self.x() * other.y() - self.y() * other.x()
    }

    /// Widens to `(x, y, 0)`.
    #[inline]
    pub const fn to_vec3(self) -> Vec3 {
        Vec3::new(self.x(), self.y(), 0.0)
    }

    /// Widens to `(x, y, 0, 0)`.
    #[inline]
    pub const fn to_vec4(self) -> Vec4 {
        Vec4::new(self.x(), self.y(), 0.0, 0.0)
    }
}

impl From<Vec2> for Vec3 {
    fn from(value: Vec2) -> Self {
        value.to_vec3()
    }
}

impl From<Vec2> for Vec4 {
    fn from(value: Vec2) -> Self {
        value.to_vec4()
    }
}
