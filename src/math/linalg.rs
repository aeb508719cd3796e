//! Dense matrix products and transposition.
//!
//! ## Purpose
//!
//! This module provides the dense kernels the fit is composed from:
//! transpose, matrix-matrix product, and matrix-vector product.
//!
//! ## Design notes
//!
//! * Plain triple loops accumulating in `T`; sizes here are at most a few
//!   hundred entries per side.
//! * Shape contracts are checked and reported as `DimensionMismatch`,
//!   never truncated.
//! * Pure: inputs are borrowed, results are freshly allocated.
//!
//! ## Non-goals
//!
//! * Blocking, SIMD, or any cache-aware reordering.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::FitError;
use crate::primitives::matrix::Matrix;

// ============================================================================
// Matrix Operations
// ============================================================================

impl<T: Float> Matrix<T> {
    /// Transpose: `result[(j, i)] = self[(i, j)]`.
    pub fn transpose(&self) -> Matrix<T> {
        let (rows, cols) = self.shape();
        let mut data = Vec::with_capacity(rows * cols);
        for j in 0..cols {
            for i in 0..rows {
                data.push(self[(i, j)]);
            }
        }
        Matrix::from_parts(cols, rows, data)
    }

    /// Matrix product `self (m1 x m2) * rhs (m2 x m3)`.
    pub fn multiply(&self, rhs: &Matrix<T>) -> Result<Matrix<T>, FitError> {
        let (m1, m2) = self.shape();
        let (r2, m3) = rhs.shape();
        if m2 != r2 {
            return Err(FitError::DimensionMismatch {
                operation: "multiply",
                left: self.shape(),
                right: rhs.shape(),
            });
        }

        let mut out = Matrix::zeros(m1, m3)?;
        for i in 0..m1 {
            let lhs_row = self.row(i);
            for j in 0..m3 {
                let mut acc = T::zero();
                for (m, &a) in lhs_row.iter().enumerate() {
                    acc = acc + a * rhs[(m, j)];
                }
                out[(i, j)] = acc;
            }
        }
        Ok(out)
    }

    /// Matrix-vector product `self (m1 x m2) * v (m2)`.
    pub fn multiply_vector(&self, v: &[T]) -> Result<Vec<T>, FitError> {
        if self.cols() != v.len() {
            return Err(FitError::DimensionMismatch {
                operation: "multiply_vector",
                left: self.shape(),
                right: (v.len(), 1),
            });
        }

        Ok((0..self.rows())
            .map(|i| {
                self.row(i)
                    .iter()
                    .zip(v.iter())
                    .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
            })
            .collect())
    }
}

// ============================================================================
// Free Functions
// ============================================================================

/// Allocate a zero-filled `rows x cols` matrix.
#[inline]
pub fn allocate<T: Float>(rows: usize, cols: usize) -> Result<Matrix<T>, FitError> {
    Matrix::zeros(rows, cols)
}

/// Transpose of `a`.
#[inline]
pub fn transpose<T: Float>(a: &Matrix<T>) -> Matrix<T> {
    a.transpose()
}

/// Product `a * b`.
#[inline]
pub fn multiply<T: Float>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, FitError> {
    a.multiply(b)
}

/// Product `a * v`.
#[inline]
pub fn multiply_vector<T: Float>(a: &Matrix<T>, v: &[T]) -> Result<Vec<T>, FitError> {
    a.multiply_vector(v)
}
