//! Augmented matrix `[A | b]` in a flat row-major buffer
//!
//! Storage layout:
//! - `data`: `n` rows of `n + 1` entries each, row-major
//! - entry `(row, col)` lives at `row * (n + 1) + col`
//! - column `n` holds the right-hand side

use crate::traits::RealField;
use ndarray::{ArrayView1, ArrayView2};
use std::ops::{Index, IndexMut};

/// Working copy of a square system and its right-hand side
///
/// Owned by a single solve; rows are swapped and rewritten in place during
/// elimination.
#[derive(Debug, Clone, PartialEq)]
pub struct AugmentedMatrix<T: RealField> {
    /// System dimension
    n: usize,
    /// Row-major entries, `n * (n + 1)` of them
    data: Vec<T>,
}

impl<T: RealField> AugmentedMatrix<T> {
    /// Build `[A | b]` from nested rows
    ///
    /// # Panics
    ///
    /// Panics if the shapes are inconsistent:
    /// - `a` must have `b.len()` rows
    /// - every row of `a` must have `b.len()` entries
    pub fn from_rows(a: &[Vec<T>], b: &[T]) -> Self {
        let n = b.len();
        assert_eq!(a.len(), n, "matrix must have one row per rhs entry");

        let mut data = Vec::with_capacity(n * (n + 1));
        for (row, &rhs) in a.iter().zip(b.iter()) {
            assert_eq!(row.len(), n, "matrix rows must have n entries");
            data.extend_from_slice(row);
            data.push(rhs);
        }

        Self { n, data }
    }

    /// Build `[A | b]` from ndarray views
    ///
    /// # Panics
    ///
    /// Panics unless `a` is `b.len() x b.len()`.
    pub fn from_arrays(a: ArrayView2<'_, T>, b: ArrayView1<'_, T>) -> Self {
        let n = b.len();
        assert_eq!(a.dim(), (n, n), "matrix must be n x n");

        let mut data = Vec::with_capacity(n * (n + 1));
        for (row, &rhs) in a.rows().into_iter().zip(b.iter()) {
            data.extend(row.iter().copied());
            data.push(rhs);
        }

        Self { n, data }
    }

    /// System dimension `n`
    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    /// Distance between consecutive rows in the buffer (`n + 1`)
    #[inline]
    pub fn stride(&self) -> usize {
        self.n + 1
    }

    /// Entry at `(row, col)`, or `None` if out of range
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        if row < self.n && col <= self.n {
            Some(self.data[row * self.stride() + col])
        } else {
            None
        }
    }

    /// Full row `i`, including the right-hand side entry
    #[inline]
    pub fn row(&self, i: usize) -> &[T] {
        let stride = self.stride();
        &self.data[i * stride..(i + 1) * stride]
    }

    /// Right-hand side entry of row `i`
    #[inline]
    pub fn rhs(&self, i: usize) -> T {
        self[(i, self.n)]
    }

    /// Exchange rows `i` and `j`
    pub fn swap_rows(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        let (lo, hi) = if i < j { (i, j) } else { (j, i) };
        let stride = self.stride();
        let (head, tail) = self.data.split_at_mut(hi * stride);
        head[lo * stride..(lo + 1) * stride].swap_with_slice(&mut tail[..stride]);
    }

    /// Row index in `col..n` holding the largest magnitude in column `col`
    ///
    /// Ties keep the lowest row index.
    pub fn pivot_row(&self, col: usize) -> usize {
        let mut max_row = col;
        let mut max_val = self[(col, col)].abs();

        for r in (col + 1)..self.n {
            let val = self[(r, col)].abs();
            if val > max_val {
                max_val = val;
                max_row = r;
            }
        }

        max_row
    }

    /// Divide columns `i..=n` of row `i` by `pivot`
    pub fn normalize_row(&mut self, i: usize, pivot: T) {
        let stride = self.stride();
        let row = &mut self.data[i * stride..(i + 1) * stride];
        for value in &mut row[i..] {
            *value /= pivot;
        }
    }

    /// Subtract multiples of row `i` from every row below it
    ///
    /// Row `r` loses `aug[r][i]` times row `i` over columns `i..=n`, which
    /// zeroes column `i` below the diagonal once row `i` is normalized.
    pub fn eliminate_below(&mut self, i: usize) {
        let stride = self.stride();
        let (head, tail) = self.data.split_at_mut((i + 1) * stride);
        let pivot_row = &head[i * stride..];

        for row in tail.chunks_exact_mut(stride) {
            let factor = row[i];
            for (value, &p) in row[i..].iter_mut().zip(&pivot_row[i..]) {
                *value -= factor * p;
            }
        }
    }

    /// Solve the unit upper triangular system left by elimination
    pub fn back_substitute(&self) -> Vec<T> {
        let n = self.n;
        let mut x = vec![T::zero(); n];

        for i in (0..n).rev() {
            let row = self.row(i);
            let mut xi = row[n];
            for j in (i + 1)..n {
                xi -= row[j] * x[j];
            }
            x[i] = xi;
        }

        x
    }
}

impl<T: RealField> Index<(usize, usize)> for AugmentedMatrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(col <= self.n, "column {col} out of range");
        &self.data[row * (self.n + 1) + col]
    }
}

impl<T: RealField> IndexMut<(usize, usize)> for AugmentedMatrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(col <= self.n, "column {col} out of range");
        &mut self.data[row * (self.n + 1) + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    fn sample() -> AugmentedMatrix<f64> {
        AugmentedMatrix::from_rows(
            &[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0], vec![7.0, 8.0, 10.0]],
            &[1.0, 2.0, 3.0],
        )
    }

    #[test]
    fn test_layout() {
        let aug = sample();
        assert_eq!(aug.n(), 3);
        assert_eq!(aug.stride(), 4);
        assert_eq!(aug.row(1), &[4.0, 5.0, 6.0, 2.0]);
        assert_eq!(aug[(2, 2)], 10.0);
        assert_eq!(aug.rhs(2), 3.0);
        assert_eq!(aug.get(0, 3), Some(1.0));
        assert_eq!(aug.get(0, 4), None);
        assert_eq!(aug.get(3, 0), None);
    }

    #[test]
    #[should_panic(expected = "column 4 out of range")]
    fn test_index_past_rhs_column_panics() {
        let aug = sample();
        let _ = aug[(0, 4)];
    }

    #[test]
    #[should_panic(expected = "column 5 out of range")]
    fn test_index_mut_past_rhs_column_panics() {
        let mut aug = sample();
        aug[(0, 5)] = 1.0;
    }

    #[test]
    fn test_from_arrays_matches_rows() {
        let a = array![[1.0_f64, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 10.0]];
        let b = array![1.0_f64, 2.0, 3.0];
        assert_eq!(AugmentedMatrix::from_arrays(a.view(), b.view()), sample());
    }

    #[test]
    fn test_swap_rows() {
        let mut aug = sample();
        aug.swap_rows(2, 0);
        assert_eq!(aug.row(0), &[7.0, 8.0, 10.0, 3.0]);
        assert_eq!(aug.row(2), &[1.0, 2.0, 3.0, 1.0]);

        let before = aug.clone();
        aug.swap_rows(1, 1);
        assert_eq!(aug, before);
    }

    #[test]
    fn test_pivot_row_picks_largest_magnitude() {
        let aug = AugmentedMatrix::from_rows(&[vec![1.0, 0.0], vec![-3.0, 1.0]], &[0.0, 0.0]);
        assert_eq!(aug.pivot_row(0), 1);
    }

    #[test]
    fn test_pivot_row_ties_keep_first() {
        let aug = AugmentedMatrix::from_rows(
            &[
                vec![0.0, 1.0, 0.0],
                vec![2.0, 0.0, 0.0],
                vec![-2.0, 0.0, 1.0],
            ],
            &[0.0, 0.0, 0.0],
        );
        assert_eq!(aug.pivot_row(0), 1);
    }

    #[test]
    fn test_normalize_and_eliminate() {
        let mut aug = AugmentedMatrix::from_rows(&[vec![2.0, 4.0], vec![3.0, 1.0]], &[6.0, 5.0]);
        let pivot = aug[(0, 0)];
        aug.normalize_row(0, pivot);
        assert_eq!(aug.row(0), &[1.0, 2.0, 3.0]);

        aug.eliminate_below(0);
        assert_relative_eq!(aug[(1, 0)], 0.0);
        assert_relative_eq!(aug[(1, 1)], -5.0);
        assert_relative_eq!(aug[(1, 2)], -4.0);
    }

    #[test]
    fn test_back_substitute() {
        // x + 2y = 5, y = 2
        let aug = AugmentedMatrix::from_rows(&[vec![1.0, 2.0], vec![0.0, 1.0]], &[5.0, 2.0]);
        let x = aug.back_substitute();
        assert_relative_eq!(x[0], 1.0);
        assert_relative_eq!(x[1], 2.0);
    }
}
