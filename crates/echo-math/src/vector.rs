// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Shared plumbing for the fixed-width vector types.
//!
//! `Vec2`, `Vec3` and `Vec4` all store a flat `[f32; N]`. The named views
//! (`x`/`r`/`width`, ...) are accessor pairs over that one array, so a write
//! through any view is visible through every other view immediately.

// Generates getter/setter pairs for named views over `self.data`.
macro_rules! impl_accessors {
    ($name:ident { $($idx:literal => $get:ident, $set:ident, $doc:literal);* $(;)? }) => {
        impl $name {
            $(
                #[doc = concat!("Returns the ", $doc, " component.")]
                #[inline]
                pub const fn $get(&self) -> f32 {
                    self.data[$idx]
                }

                #[doc = concat!("Overwrites the ", $doc, " component.")]
                #[inline]
                pub fn $set(&mut self, value: f32) {
                    self.data[$idx] = value;
                }
            )*
        }
    };
}

// Generates the arithmetic, conversions and common methods every vector
// width shares.
macro_rules! impl_vector {
    ($name:ident, $n:literal) => {
        impl $name {
            /// Returns the components as an array.
            #[inline]
            pub const fn to_array(self) -> [f32; $n] {
                self.data
            }

            /// Flat view of the components.
            #[inline]
            pub const fn as_array(&self) -> &[f32; $n] {
                &self.data
            }

            /// Mutable flat view of the components.
            #[inline]
            pub fn as_mut_array(&mut self) -> &mut [f32; $n] {
                &mut self.data
            }

            /// Component at `index`; indices past the end clamp to the last
            /// component.
            #[inline]
            pub const fn component(&self, index: usize) -> f32 {
                self.data[$crate::scalar::clamp_index(index, 0, $n - 1)]
            }

            /// Overwrites the component at `index` (clamped like
            /// [`Self::component`]).
            #[inline]
            pub fn set_component(&mut self, index: usize, value: f32) {
                self.data[$crate::scalar::clamp_index(index, 0, $n - 1)] = value;
            }

            /// Scales the vector by a scalar.
            #[inline]
            pub fn scale(self, scalar: f32) -> Self {
                self.map(|c| c * scalar)
            }

            /// Dot product. Also callable as `Self::dot(a, b)`.
            #[inline]
            pub fn dot(self, other: Self) -> f32 {
                self.data
                    .iter()
                    .zip(other.data)
                    .fold(0.0, |acc, (a, b)| acc + a * b)
            }

            /// Squared magnitude (exact).
            #[inline]
            pub fn sqr_magnitude(self) -> f32 {
                self.dot(self)
            }

            /// Magnitude via the platform square root.
            #[inline]
            pub fn magnitude(self) -> f32 {
                self.sqr_magnitude().sqrt()
            }

            /// Normalises in place using [`fisqrt`](crate::fisqrt).
            ///
            /// A zero vector is not special-cased; the result is meaningless.
            #[inline]
            pub fn normalize(&mut self) -> &mut Self {
                let root = $crate::scalar::fisqrt(self.sqr_magnitude());
                *self = self.scale(root);
                self
            }

            /// Returns a normalised copy using [`fisqrt`](crate::fisqrt).
            #[inline]
            pub fn normalized(self) -> Self {
                self.scale($crate::scalar::fisqrt(self.sqr_magnitude()))
            }

            /// Linear interpolation `(1 - t) * a + t * b`; `t` is not clamped.
            #[inline]
            pub fn lerp(a: Self, b: Self, t: f32) -> Self {
                (1.0 - t) * a + t * b
            }

            /// Fractional position of `c` projected onto the `a -> b`
            /// direction.
            ///
            /// Returns `0.0` when `a == b` or when either `a -> b` or `a -> c`
            /// has zero length.
            pub fn inverse_lerp(a: Self, b: Self, c: Self) -> f32 {
                if a == b {
                    return 0.0;
                }
                let ab = b - a;
                if ab.sqr_magnitude() == 0.0 {
                    return 0.0;
                }
                let ac = c - a;
                if ac.sqr_magnitude() == 0.0 {
                    return 0.0;
                }
                ac.dot(ab) / ab.dot(ab)
            }

            #[inline]
            fn map(self, f: impl Fn(f32) -> f32) -> Self {
                Self {
                    data: self.data.map(f),
                }
            }

            #[inline]
            fn zip_with(self, other: Self, f: impl Fn(f32, f32) -> f32) -> Self {
                let mut data = self.data;
                for (lhs, rhs) in data.iter_mut().zip(other.data) {
                    *lhs = f(*lhs, rhs);
                }
                Self { data }
            }
        }

        impl From<[f32; $n]> for $name {
            fn from(value: [f32; $n]) -> Self {
                Self { data: value }
            }
        }

        impl From<$name> for [f32; $n] {
            fn from(value: $name) -> Self {
                value.data
            }
        }

        impl TryFrom<&[f32]> for $name {
            type Error = $crate::error::MathError;

            fn try_from(slice: &[f32]) -> Result<Self, Self::Error> {
                <[f32; $n]>::try_from(slice).map(Self::from).map_err(|_| {
                    $crate::error::MathError::LengthMismatch {
                        expected: $n,
                        actual: slice.len(),
                    }
                })
            }
        }

        impl core::ops::Index<usize> for $name {
            type Output = f32;

            // Clamped like `component`; never panics.
            fn index(&self, index: usize) -> &f32 {
                &self.data[$crate::scalar::clamp_index(index, 0, $n - 1)]
            }
        }

        impl core::ops::IndexMut<usize> for $name {
            fn index_mut(&mut self, index: usize) -> &mut f32 {
                &mut self.data[$crate::scalar::clamp_index(index, 0, $n - 1)]
            }
        }

        impl core::ops::Add for $name {
            type Output = Self;
            fn add(self, rhs: Self) -> Self {
                self.zip_with(rhs, |a, b| a + b)
            }
        }

        impl core::ops::AddAssign for $name {
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl core::ops::Sub for $name {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self {
                self.zip_with(rhs, |a, b| a - b)
            }
        }

        impl core::ops::SubAssign for $name {
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl core::ops::Mul<f32> for $name {
            type Output = Self;
            fn mul(self, rhs: f32) -> Self {
                self.scale(rhs)
            }
        }

        impl core::ops::Mul<$name> for f32 {
            type Output = $name;
            fn mul(self, rhs: $name) -> $name {
                rhs.scale(self)
            }
        }

        impl core::ops::MulAssign<f32> for $name {
            fn mul_assign(&mut self, rhs: f32) {
                *self = self.scale(rhs);
            }
        }

        impl core::ops::Div<f32> for $name {
            type Output = Self;
            fn div(self, rhs: f32) -> Self {
                self.map(|c| c / rhs)
            }
        }

        /// `scalar / v` divides each component of `v` by `scalar`, the same
        /// as `v / scalar`.
        impl core::ops::Div<$name> for f32 {
            type Output = $name;
            fn div(self, rhs: $name) -> $name {
                rhs / self
            }
        }

        impl core::ops::DivAssign<f32> for $name {
            fn div_assign(&mut self, rhs: f32) {
                *self = *self / rhs;
            }
        }

        impl core::ops::Neg for $name {
            type Output = Self;
            fn neg(self) -> Self {
                self.map(|c| -c)
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "(")?;
                for (i, c) in self.data.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{c}")?;
                }
                write!(f, ")")
            }
        }
    };
}

pub(crate) use impl_accessors;
pub(crate) use impl_vector;
