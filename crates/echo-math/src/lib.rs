// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! echo-math: float32 linear algebra for rendering and simulation.
//!
//! Provides scalar helpers, `Vec2`/`Vec3`/`Vec4` with aliased component views,
//! a `Quat` rotation type, and a row-stored `Mat4` with projection and look-at
//! builders. Everything is `f32`, `Copy`, and total: degenerate inputs flow
//! through as IEEE-754 values instead of errors.
//!
//! Conventions:
//! - Right-handed basis: `right × up = forward`, forward is `+Z`.
//! - Angles are radians except [`Mat4::euler_angles`] and
//!   [`Mat4::perspective_dx`], which take degrees.
//! - Matrices act on column vectors from the left.
//! - Normalisation uses the fast inverse square root [`fisqrt`].
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::unreadable_literal,
    clippy::missing_const_for_fn,
    clippy::suboptimal_flops,
    clippy::redundant_pub_crate,
    clippy::many_single_char_names,
    clippy::module_name_repetitions,
    clippy::use_self
)]
// Exact comparisons are part of the degenerate-input contracts (`a == b`).
#![allow(clippy::float_cmp)]

mod error;
/// Scalar helpers and constants (also re-exported at the crate root).
pub mod scalar;
mod vector;

mod mat4;
mod projection;
mod quat;
mod vec2;
mod vec3;
mod vec4;

pub use error::MathError;
pub use mat4::Mat4;
pub use quat::Quat;
pub use scalar::*;
pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vec4::Vec4;
