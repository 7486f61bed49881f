//! Direct solvers for linear systems
//!
//! This module provides direct (non-iterative) solvers:
//! - [`solve`]: Gaussian elimination with partial pivoting

mod gaussian;

pub use gaussian::{
    DEFAULT_PIVOT_TOLERANCE, GaussianConfig, residual_norm, solve, solve_array, solve_with_config,
    validate,
};
