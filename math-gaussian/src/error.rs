//! Error types for the Gaussian elimination solver.
//!
//! Structural problems with the input are reported before any arithmetic is
//! done; numerical breakdown is reported as [`GaussianError::SingularMatrix`].

use thiserror::Error;

/// Errors that can occur while solving `Ax = b`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GaussianError {
    /// The right-hand side has no entries.
    #[error("input cannot be empty")]
    EmptyInput,

    /// The number of rows of `A` differs from the length of `b`.
    #[error("matrix and vector sizes do not match")]
    InconsistentDimensions,

    /// Some row of `A` does not have exactly `n` columns.
    #[error("matrix must be square")]
    RectangularMatrix,

    /// No pivot above the tolerance was found in some column.
    #[error("singular matrix")]
    SingularMatrix,
}

/// A specialized `Result` type for solver operations.
pub type Result<T> = std::result::Result<T, GaussianError>;

impl GaussianError {
    /// Returns `true` if the input was rejected on its shape alone.
    ///
    /// This includes `EmptyInput`, `InconsistentDimensions` and
    /// `RectangularMatrix`.
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            GaussianError::EmptyInput
                | GaussianError::InconsistentDimensions
                | GaussianError::RectangularMatrix
        )
    }

    /// Returns `true` if elimination broke down on a small pivot.
    pub fn is_numerical_error(&self) -> bool {
        matches!(self, GaussianError::SingularMatrix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(GaussianError::EmptyInput.to_string(), "input cannot be empty");
        assert_eq!(
            GaussianError::InconsistentDimensions.to_string(),
            "matrix and vector sizes do not match"
        );
        assert_eq!(
            GaussianError::RectangularMatrix.to_string(),
            "matrix must be square"
        );
        assert_eq!(GaussianError::SingularMatrix.to_string(), "singular matrix");
    }

    #[test]
    fn test_is_validation_error() {
        assert!(GaussianError::EmptyInput.is_validation_error());
        assert!(GaussianError::InconsistentDimensions.is_validation_error());
        assert!(GaussianError::RectangularMatrix.is_validation_error());
        assert!(!GaussianError::SingularMatrix.is_validation_error());
    }

    #[test]
    fn test_is_numerical_error() {
        assert!(GaussianError::SingularMatrix.is_numerical_error());
        assert!(!GaussianError::EmptyInput.is_numerical_error());
    }
}
