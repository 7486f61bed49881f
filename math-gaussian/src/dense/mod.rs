//! Dense matrix storage
//!
//! This module provides the flat, fixed-stride augmented matrix that the
//! direct solver eliminates in place.

mod augmented;

pub use augmented::AugmentedMatrix;
