//! Dense linear system solver based on Gaussian elimination
//!
//! This crate solves square systems `Ax = b` by forward elimination with
//! partial pivoting, followed by back substitution. Inputs are validated
//! before any arithmetic and every failure is reported as a
//! [`GaussianError`] value.
//!
//! # Features
//!
//! - **Direct solver**: Gaussian elimination with partial pivoting
//! - **Flat storage**: the augmented matrix `[A | b]` lives in one buffer
//! - **Input formats**: nested rows (`&[Vec<T>]`) or `ndarray` arrays
//! - **Generic scalar types**: works with f64 and f32
//!
//! # Example
//!
//! ```
//! use math_audio_gaussian::{GaussianError, solve};
//!
//! let a = vec![vec![3.0, 2.0, -1.0], vec![2.0, -2.0, 4.0], vec![-1.0, 0.5, -1.0]];
//! let b = vec![1.0, -2.0, 0.0];
//! let x = solve(&a, &b)?;
//! assert!((x[0] - 1.0).abs() < 1e-9);
//!
//! let singular = vec![vec![1.0, 2.0], vec![2.0, 4.0]];
//! assert_eq!(solve(&singular, &[3.0, 6.0]), Err(GaussianError::SingularMatrix));
//! # Ok::<(), GaussianError>(())
//! ```

pub mod dense;
pub mod direct;
pub mod error;
pub mod traits;

// Re-export main types
pub use dense::AugmentedMatrix;
pub use error::{GaussianError, Result};
pub use traits::RealField;

// Re-export the solver
pub use direct::{
    DEFAULT_PIVOT_TOLERANCE, GaussianConfig, residual_norm, solve, solve_array, solve_with_config,
    validate,
};
