// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use thiserror::Error;

/// Errors raised when building math values from untyped data.
///
/// Arithmetic never fails; only slice conversions report errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    /// The slice did not hold exactly the number of `f32` components the
    /// target type stores.
    #[error("expected {expected} components, got {actual}")]
    LengthMismatch {
        /// Component count of the target type.
        expected: usize,
        /// Length of the supplied slice.
        actual: usize,
    },
}
