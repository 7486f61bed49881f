//! Gaussian elimination solver
//!
//! Solves dense square systems `Ax = b` by forward elimination with partial
//! pivoting and row normalization, followed by back substitution on the
//! resulting unit upper triangular system.

use crate::dense::AugmentedMatrix;
use crate::error::{GaussianError, Result};
use crate::traits::RealField;
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

/// Pivot magnitude below which a column is treated as singular
pub const DEFAULT_PIVOT_TOLERANCE: f64 = 1e-12;

/// Gaussian solver configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaussianConfig {
    /// Absolute pivot magnitude below which the system is reported singular
    pub pivot_tolerance: f64,
    /// Log every pivot choice at debug level
    pub log_pivots: bool,
}

impl Default for GaussianConfig {
    fn default() -> Self {
        Self {
            pivot_tolerance: DEFAULT_PIVOT_TOLERANCE,
            log_pivots: false,
        }
    }
}

/// Check the shape of `A` and `b` without touching their values
///
/// Checks run in order and the first failure is returned: empty `b`,
/// row count of `A` different from `b.len()`, then any row of `A` whose
/// length differs from `b.len()`.
pub fn validate<T>(a: &[Vec<T>], b: &[T]) -> Result<usize> {
    let n = b.len();
    if n == 0 {
        return Err(GaussianError::EmptyInput);
    }
    if a.len() != n {
        return Err(GaussianError::InconsistentDimensions);
    }
    if a.iter().any(|row| row.len() != n) {
        return Err(GaussianError::RectangularMatrix);
    }
    Ok(n)
}

/// Solve Ax = b with the default configuration
///
/// # Example
///
/// ```
/// use math_audio_gaussian::solve;
///
/// let a = vec![vec![2.0, 1.0], vec![5.0, 7.0]];
/// let b = vec![5.0, 8.0];
/// let x = solve(&a, &b).unwrap();
/// assert!((x[0] - 3.0).abs() < 1e-9);
/// assert!((x[1] + 1.0).abs() < 1e-9);
/// ```
pub fn solve(a: &[Vec<f64>], b: &[f64]) -> Result<Vec<f64>> {
    solve_with_config(a, b, &GaussianConfig::default())
}

/// Solve Ax = b for nested-row input
///
/// `a` and `b` are copied into a private augmented matrix and never
/// modified.
pub fn solve_with_config<T: RealField>(
    a: &[Vec<T>],
    b: &[T],
    config: &GaussianConfig,
) -> Result<Vec<T>> {
    validate(a, b)?;
    let aug = AugmentedMatrix::from_rows(a, b);
    eliminate(aug, config)
}

/// Solve Ax = b for ndarray input
pub fn solve_array<T: RealField>(
    a: &Array2<T>,
    b: &Array1<T>,
    config: &GaussianConfig,
) -> Result<Array1<T>> {
    let n = b.len();
    if n == 0 {
        return Err(GaussianError::EmptyInput);
    }
    if a.nrows() != n {
        return Err(GaussianError::InconsistentDimensions);
    }
    if a.ncols() != n {
        return Err(GaussianError::RectangularMatrix);
    }

    let aug = AugmentedMatrix::from_arrays(a.view(), b.view());
    eliminate(aug, config).map(Array1::from_vec)
}

/// Largest absolute entry of `Ax - b`
///
/// Shapes are assumed to be valid; extra entries on either side are ignored.
/// A NaN in any row makes the result NaN.
pub fn residual_norm<T: RealField>(a: &[Vec<T>], x: &[T], b: &[T]) -> T {
    a.iter()
        .zip(b.iter())
        .map(|(row, &bi)| {
            let ax = row
                .iter()
                .zip(x.iter())
                .fold(T::zero(), |acc, (&aij, &xj)| acc + aij * xj);
            (ax - bi).abs()
        })
        .fold(T::zero(), |acc, r| if r.is_nan() || r > acc { r } else { acc })
}

/// Forward elimination with partial pivoting, then back substitution
///
/// A zero or NaN pivot is singular under any tolerance, so a zero, negative
/// or NaN `pivot_tolerance` can never let a division by zero through.
fn eliminate<T: RealField>(
    mut aug: AugmentedMatrix<T>,
    config: &GaussianConfig,
) -> Result<Vec<T>> {
    let n = aug.n();
    let tol = T::from_f64_lossy(config.pivot_tolerance);

    for i in 0..n {
        let max_row = aug.pivot_row(i);
        let pivot = aug[(max_row, i)];

        if pivot.is_zero_approx(tol) {
            log::debug!(
                "Gaussian elimination: pivot {:.3e} in column {} is below tolerance {:.3e}",
                pivot.to_f64_lossy(),
                i,
                config.pivot_tolerance
            );
            return Err(GaussianError::SingularMatrix);
        }

        if config.log_pivots {
            log::debug!(
                "Gaussian elimination: column {}: pivot {:.6e} from row {}",
                i,
                pivot.to_f64_lossy(),
                max_row
            );
        }

        aug.swap_rows(i, max_row);
        aug.normalize_row(i, pivot);
        aug.eliminate_below(i);
    }

    Ok(aug.back_substitute())
}
