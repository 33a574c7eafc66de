// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use bytemuck::{Pod, Zeroable};

use crate::vector::{impl_accessors, impl_vector};
use crate::{Vec2, Vec3};

/// 4D vector: homogeneous points, matrix rows and RGBA colors.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Default, Pod, Zeroable)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Vec4 {
    data: [f32; 4],
}

impl_vector!(Vec4, 4);

impl_accessors!(Vec4 {
    0 => x, set_x, "x";
    1 => y, set_y, "y";
    2 => z, set_z, "z";
    3 => w, set_w, "w";
    0 => r, set_r, "red (alias of x)";
    1 => g, set_g, "green (alias of y)";
    2 => b, set_b, "blue (alias of z)";
    3 => a, set_a, "alpha (alias of w)";
});

impl Vec4 {
    /// `(0, 0, 0, 0)`.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// `(1, 1, 1, 1)`.
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    /// Creates a vector from components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self {
            data: [x, y, z, w],
        }
    }

    /// `(0, 0, 0, 0)`.
    pub const fn zero() -> Self {
        Self::ZERO
    }

    /// `(1, 1, 1, 1)`.
    pub const fn one() -> Self {
        Self::ONE
    }

    /// Truncates to `(x, y)`.
    #[inline]
    pub const fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x(), self.y())
    }

    /// Truncates to `(x, y, z)`, dropping `w`.
    #[inline]
    pub const fn to_vec3(self) -> Vec3 {
        Vec3::new(self.x(), self.y(), self.z())
    }
}
