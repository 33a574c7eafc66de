// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Scalar helpers shared by the vector, quaternion and matrix types.
//!
//! Everything here is a total function over `f32`/`i32` inputs. Nothing is
//! validated: inverted ranges, zero-length segments and NaNs flow through the
//! arithmetic as IEEE-754 dictates (see the per-function contracts).

/// Full turn in radians.
pub const TAU: f32 = core::f32::consts::TAU;

/// Multiply degrees by this to get radians.
pub const DEG_TO_RAD: f32 = TAU / 360.0;

/// Multiply radians by this to get degrees.
pub const RAD_TO_DEG: f32 = 360.0 / TAU;

/// Euler's number.
pub const E: f32 = core::f32::consts::E;

/// Global epsilon used when detecting degenerate values.
pub const EPSILON: f32 = 1e-6;

/// Magic constant for the initial guess of [`fisqrt`].
const FISQRT_MAGIC: u32 = 0x5F1F_FFF9;

/// Fast approximate `1 / sqrt(n)`.
///
/// Builds an initial guess from the bit pattern of `n` and refines it with a
/// single Newton-Raphson step. Relative error stays below `1e-3` for positive
/// normal inputs; every `normalize`/`normalized` in this crate goes through
/// it and inherits that error.
///
/// `fisqrt(0.0)` yields a large finite value and negative inputs yield
/// meaningless results; neither is trapped.
///
/// # Examples
/// ```
/// use echo_math::fisqrt;
/// assert!((fisqrt(4.0) - 0.5).abs() < 5e-4);
/// ```
#[inline]
pub fn fisqrt(n: f32) -> f32 {
    let guess = f32::from_bits(FISQRT_MAGIC.wrapping_sub(n.to_bits() >> 1));
    guess * (0.703_952_253 * (2.389_244_56 - n * guess * guess))
}

/// Returns `1.0` for `n >= 0.0` and `-1.0` otherwise (zero maps to `+1`).
#[inline]
pub fn sign(n: f32) -> f32 {
    if n >= 0.0 {
        1.0
    } else {
        -1.0
    }
}

/// Absolute value by comparison (`-0.0` stays `-0.0`).
#[inline]
pub fn abs(n: f32) -> f32 {
    if n < 0.0 {
        -n
    } else {
        n
    }
}

/// Returns `true` when `a == b` or `|a - b| < epsilon`.
#[inline]
pub fn nearly_equal(a: f32, b: f32, epsilon: f32) -> bool {
    if a == b {
        return true;
    }
    abs(a - b) < epsilon
}

/// Larger of `a` and `b`; returns `b` on ties and when either is NaN.
#[inline]
pub fn max(a: f32, b: f32) -> f32 {
    if a > b {
        a
    } else {
        b
    }
}

/// Smaller of `a` and `b`; returns `a` on ties and when either is NaN.
#[inline]
pub fn min(a: f32, b: f32) -> f32 {
    if a > b {
        b
    } else {
        a
    }
}

/// Saturates `a` to `[min, max]`.
///
/// `min > max` is a caller error and is not checked; the result is then
/// whichever bound the comparisons hit first.
#[inline]
pub fn clamp(a: f32, min: f32, max: f32) -> f32 {
    if a > max {
        max
    } else if a < min {
        min
    } else {
        a
    }
}

/// Saturates `a` to `[0, 1]`.
#[inline]
pub fn clamp01(a: f32) -> f32 {
    clamp(a, 0.0, 1.0)
}

/// Integer clamp used by every clamped index accessor in the crate.
#[inline]
pub const fn clamp_index(index: usize, min: usize, max: usize) -> usize {
    if index > max {
        max
    } else if index < min {
        min
    } else {
        index
    }
}

/// Linear interpolation `(1 - t) * a + t * b`; `t` is not clamped.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    (1.0 - t) * a + t * b
}

/// [`lerp`] with `t` clamped to `[0, 1]` first.
#[inline]
pub fn lerp_clamped(a: f32, b: f32, t: f32) -> f32 {
    lerp(a, b, clamp01(t))
}

/// Position of `c` along `a..b` as a fraction; unclamped.
///
/// A degenerate segment (`a == b`) yields `0.0`.
#[inline]
pub fn inverse_lerp(a: f32, b: f32, c: f32) -> f32 {
    if a == b {
        return 0.0;
    }
    (c - a) / (b - a)
}

/// [`inverse_lerp`] with the result clamped to `[0, 1]`.
#[inline]
pub fn inverse_lerp_clamped(a: f32, b: f32, c: f32) -> f32 {
    if a == b {
        return 0.0;
    }
    clamp01((c - a) / (b - a))
}

/// Maps `c` from `in_min..in_max` onto `out_min..out_max`; unclamped.
#[inline]
pub fn remap(in_min: f32, in_max: f32, out_min: f32, out_max: f32, c: f32) -> f32 {
    lerp(out_min, out_max, inverse_lerp(in_min, in_max, c))
}

/// [`remap`] with the interpolation parameter clamped to `[0, 1]`.
#[inline]
pub fn remap_clamped(in_min: f32, in_max: f32, out_min: f32, out_max: f32, c: f32) -> f32 {
    lerp(out_min, out_max, inverse_lerp_clamped(in_min, in_max, c))
}

/// Wraps `n` into `[min, max]` as `(n - min + 1) % range + min`.
///
/// The `+ 1` advances by one step (`wrap(max, min, max) == min`). Requires
/// `n >= min - 1`; below that the remainder goes negative and the result
/// falls outside the range. Prefer [`wrapr`] unless the input is known to
/// satisfy the precondition.
///
/// Arithmetic is carried in `i64`, so extreme bounds do not overflow.
///
/// # Panics
/// Panics when `max < min` (empty range).
#[inline]
pub fn wrap(n: i32, min: i32, max: i32) -> i32 {
    let (n, min, max) = (i64::from(n), i64::from(min), i64::from(max));
    let range = max - min + 1;
    narrow((n - min + 1) % range + min)
}

/// Wraps `n` into `[min, max]` with a Euclidean remainder, correct for any
/// `n` including values below `min`.
///
/// # Examples
/// ```
/// use echo_math::wrapr;
/// assert_eq!(wrapr(-1, 0, 3), 3);
/// assert_eq!(wrapr(9, 2, 5), 5);
/// assert_eq!(wrapr(5, i32::MIN, i32::MAX), 5);
/// ```
///
/// # Panics
/// Panics when `max < min` (empty range).
#[inline]
pub fn wrapr(n: i32, min: i32, max: i32) -> i32 {
    let (n, min, max) = (i64::from(n), i64::from(min), i64::from(max));
    let range = max - min + 1;
    narrow((n - min).rem_euclid(range) + min)
}

// In-range results fit exactly; `wrap` outside its precondition truncates
// two's-complement style.
#[inline]
#[allow(clippy::cast_possible_truncation)]
const fn narrow(value: i64) -> i32 {
    value as i32
}

/// Converts degrees to radians with float32 precision.
#[inline]
pub fn deg_to_rad(value: f32) -> f32 {
    value * DEG_TO_RAD
}

/// Converts radians to degrees with float32 precision.
#[inline]
pub fn rad_to_deg(value: f32) -> f32 {
    value * RAD_TO_DEG
}
