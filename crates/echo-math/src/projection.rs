// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! View and projection builders for [`Mat4`].
//!
//! All builders produce column-vector matrices: depth terms live in row `c`
//! and row `d` yields the homogeneous `w` consumed by
//! [`Mat4::perspective_mul`]. View space looks down `+Z`. Inputs are not
//! validated; `near == far`, zero extents or a zero field of view produce
//! infinities.

use crate::scalar::deg_to_rad;
use crate::{Mat4, Vec3, Vec4};

impl Mat4 {
    /// Perspective projection with depth mapped to `[0, 1]`.
    ///
    /// `fov` is the vertical field of view in **degrees**.
    ///
    /// # Examples
    /// ```
    /// use echo_math::{Mat4, Vec3};
    /// let p = Mat4::perspective_dx(90.0, 1.0, 1.0, 100.0);
    /// assert!(p.perspective_mul(Vec3::new(0.0, 0.0, 1.0)).z().abs() < 1e-4);
    /// assert!((p.perspective_mul(Vec3::new(0.0, 0.0, 100.0)).z() - 1.0).abs() < 1e-4);
    /// ```
    pub fn perspective_dx(fov: f32, aspect_ratio: f32, near: f32, far: f32) -> Self {
        let y_scale = 1.0 / (deg_to_rad(fov) * 0.5).tan();
        let x_scale = y_scale / aspect_ratio;
        let depth = far / (far - near);

        Self::from_rows(
            Vec4::new(x_scale, 0.0, 0.0, 0.0),
            Vec4::new(0.0, y_scale, 0.0, 0.0),
            Vec4::new(0.0, 0.0, depth, -depth * near),
            Vec4::new(0.0, 0.0, 1.0, 0.0),
        )
    }

    /// Perspective projection with depth mapped to `[-1, 1]`.
    ///
    /// `fov` is the vertical field of view in **radians**.
    pub fn perspective_gl(fov: f32, aspect_ratio: f32, near: f32, far: f32) -> Self {
        let y_scale = 1.0 / (fov * 0.5).tan();
        let x_scale = y_scale / aspect_ratio;
        let range = far - near;

        Self::from_rows(
            Vec4::new(x_scale, 0.0, 0.0, 0.0),
            Vec4::new(0.0, y_scale, 0.0, 0.0),
            Vec4::new(0.0, 0.0, (far + near) / range, -2.0 * far * near / range),
            Vec4::new(0.0, 0.0, 1.0, 0.0),
        )
    }

    /// Centered orthographic projection of a `width × height` view volume,
    /// depth mapped to `[0, 1]`.
    pub fn ortho_dx(width: f32, height: f32, near: f32, far: f32) -> Self {
        let depth = 1.0 / (far - near);

        Self::from_rows(
            Vec4::new(2.0 / width, 0.0, 0.0, 0.0),
            Vec4::new(0.0, 2.0 / height, 0.0, 0.0),
            Vec4::new(0.0, 0.0, depth, -depth * near),
            Vec4::new(0.0, 0.0, 0.0, 1.0),
        )
    }

    /// Off-center orthographic projection, depth mapped to `[-1, 1]`.
    ///
    /// `z = near` maps to `-1` and `z = far` to `+1`, matching
    /// [`Mat4::perspective_gl`].
    pub fn ortho_gl(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Self {
        let width = right - left;
        let height = top - bottom;
        let depth = far - near;

        Self::from_rows(
            Vec4::new(2.0 / width, 0.0, 0.0, -(right + left) / width),
            Vec4::new(0.0, 2.0 / height, 0.0, -(top + bottom) / height),
            Vec4::new(0.0, 0.0, 2.0 / depth, -(far + near) / depth),
            Vec4::new(0.0, 0.0, 0.0, 1.0),
        )
    }

    /// View matrix looking from `eye` toward `point`.
    ///
    /// Rows `a`, `b`, `c` hold the right, up and forward axes of an
    /// orthonormal right-handed basis (`right = up × forward`,
    /// `up' = forward × right`); column 3 holds each axis dotted with `-eye`,
    /// so `eye` maps to the origin and `point` lands on `+Z`.
    ///
    /// `up` parallel to `point - eye` degenerates to a zero axis.
    pub fn look_at(point: Vec3, eye: Vec3, up: Vec3) -> Self {
        let up = up.normalized();
        let forward = (point - eye).normalized();
        let right = up.cross(forward).normalized();
        let up = forward.cross(right);

        Self::from_rows(
            right.extend(-right.dot(eye)),
            up.extend(-up.dot(eye)),
            forward.extend(-forward.dot(eye)),
            Vec4::new(0.0, 0.0, 0.0, 1.0),
        )
    }

    /// [`Mat4::look_at`] from the origin with [`Vec3::up`] resolving the roll.
    pub fn look_at_from_origin(point: Vec3) -> Self {
        Self::look_at(point, Vec3::ZERO, Vec3::up())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn look_at_rows_are_orthogonal() {
        let m = Mat4::look_at(Vec3::new(3.0, 1.0, -2.0), Vec3::new(0.0, 2.0, 5.0), Vec3::up());
        let [a, b, c, _] = *m.rows();
        let (a, b, c) = (a.to_vec3(), b.to_vec3(), c.to_vec3());
        assert!(a.dot(b).abs() < 1e-3);
        assert!(a.dot(c).abs() < 1e-3);
        assert!(b.dot(c).abs() < 1e-3);
    }
}
