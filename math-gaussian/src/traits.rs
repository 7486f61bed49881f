//! Scalar abstraction for the dense solver
//!
//! [`RealField`] is the set of real number types the elimination kernel is
//! generic over. It is implemented for `f64` (the default everywhere) and
//! `f32` (for memory-constrained callers).

use num_traits::{Float, FromPrimitive, NumAssign, ToPrimitive};
use std::fmt::Debug;

/// Trait for real scalar types that can be used by the Gaussian solver.
///
/// # Implementations
///
/// Provided for:
/// - `f64` (default)
/// - `f32`
pub trait RealField:
    Float + NumAssign + FromPrimitive + ToPrimitive + Send + Sync + Debug + 'static
{
    /// Convert a `f64` constant into this type, rounding if necessary
    fn from_f64_lossy(value: f64) -> Self;

    /// Widen to `f64` for logging and diagnostics
    fn to_f64_lossy(self) -> f64;

    /// Check if this value is below `tol` in magnitude
    ///
    /// Exact zeros and NaN always count as zero, whatever `tol` is.
    #[inline]
    fn is_zero_approx(self, tol: Self) -> bool {
        !(self.abs() >= tol) || self.is_zero()
    }
}

impl RealField for f64 {
    #[inline]
    fn from_f64_lossy(value: f64) -> Self {
        value
    }

    #[inline]
    fn to_f64_lossy(self) -> f64 {
        self
    }
}

impl RealField for f32 {
    #[inline]
    fn from_f64_lossy(value: f64) -> Self {
        value as f32
    }

    #[inline]
    fn to_f64_lossy(self) -> f64 {
        self as f64
    }
}
