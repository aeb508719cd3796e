//! Dense row-major matrix storage.
//!
//! ## Purpose
//!
//! This module provides `Matrix`, the owned dense container every other layer
//! works with: design matrices, weight matrices, normal equations, cofactors,
//! and inverses.
//!
//! ## Design notes
//!
//! * **Storage**: One contiguous `Vec<T>` in row-major order.
//! * **Fixed shape**: `rows x cols` is set at construction and never changes.
//! * **Bounds-checked**: `get` returns `Option`, indexing panics on out-of-range
//!   access instead of reading foreign memory.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * `rows > 0`, `cols > 0` and `data.len() == rows * cols`, also for
//!   deserialized matrices.
//!
//! ## Non-goals
//!
//! * Sparse or strided views.
//! * Resizing after construction.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result as FmtResult};
use core::ops::{Index, IndexMut};
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::FitError;

// ============================================================================
// Matrix
// ============================================================================

/// Dense, row-major matrix with a fixed shape.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "RawMatrix<T>",
        bound(deserialize = "T: Float + serde::Deserialize<'de>")
    )
)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

/// Unchecked wire form; converted through `from_row_slice`.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawMatrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

#[cfg(feature = "serde")]
impl<T: Float> TryFrom<RawMatrix<T>> for Matrix<T> {
    type Error = FitError;

    fn try_from(raw: RawMatrix<T>) -> Result<Self, Self::Error> {
        Self::from_row_slice(raw.rows, raw.cols, &raw.data)
    }
}

impl<T: Float> Matrix<T> {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Allocate a `rows x cols` matrix with every entry set to zero.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self, FitError> {
        if rows == 0 || cols == 0 {
            return Err(FitError::InvalidDimensions { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            data: vec![T::zero(); rows * cols],
        })
    }

    /// Allocate an `n x n` identity matrix.
    pub fn identity(n: usize) -> Result<Self, FitError> {
        let mut m = Self::zeros(n, n)?;
        for i in 0..n {
            m[(i, i)] = T::one();
        }
        Ok(m)
    }

    /// Build a square diagonal matrix from the given entries.
    pub fn from_diagonal(diagonal: &[T]) -> Result<Self, FitError> {
        let n = diagonal.len();
        let mut m = Self::zeros(n, n)?;
        for (i, &d) in diagonal.iter().enumerate() {
            m[(i, i)] = d;
        }
        Ok(m)
    }

    /// Build a matrix from a row-major slice.
    pub fn from_row_slice(rows: usize, cols: usize, data: &[T]) -> Result<Self, FitError> {
        if rows == 0 || cols == 0 {
            return Err(FitError::InvalidDimensions { rows, cols });
        }
        if data.len() != rows * cols {
            return Err(FitError::DimensionMismatch {
                operation: "from_row_slice",
                left: (rows, cols),
                right: (data.len(), 1),
            });
        }
        Ok(Self {
            rows,
            cols,
            data: data.to_vec(),
        })
    }

    /// Assemble a matrix from parts whose shape the caller already guarantees.
    #[inline]
    pub(crate) fn from_parts(rows: usize, cols: usize, data: Vec<T>) -> Self {
        debug_assert!(rows > 0 && cols > 0 && data.len() == rows * cols);
        Self { rows, cols, data }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Shape as `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Whether the matrix has as many rows as columns.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Entry at `(row, col)`, or `None` when out of range.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// Borrow one row as a slice.
    #[inline]
    pub fn row(&self, row: usize) -> &[T] {
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Borrow the row-major backing storage.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Diagonal entries of a square (or the leading square part of a rectangular) matrix.
    pub fn diagonal(&self) -> Vec<T> {
        (0..self.rows.min(self.cols)).map(|i| self[(i, i)]).collect()
    }

    // ========================================================================
    // Derived Matrices
    // ========================================================================

    /// Copy of this matrix without row `skip_row` and column `skip_col`.
    ///
    /// Requires at least a 2x2 matrix; the minor of a 1x1 matrix is empty
    /// and is handled by the callers.
    pub(crate) fn minor(&self, skip_row: usize, skip_col: usize) -> Self {
        debug_assert!(self.rows > 1 && self.cols > 1);
        let mut data = Vec::with_capacity((self.rows - 1) * (self.cols - 1));
        for i in (0..self.rows).filter(|&i| i != skip_row) {
            for j in (0..self.cols).filter(|&j| j != skip_col) {
                data.push(self[(i, j)]);
            }
        }
        Self::from_parts(self.rows - 1, self.cols - 1, data)
    }

    /// Divide every entry by `divisor` in place.
    pub(crate) fn div_scalar_mut(&mut self, divisor: T) {
        for v in self.data.iter_mut() {
            *v = *v / divisor;
        }
    }
}

// ============================================================================
// Indexing
// ============================================================================

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.rows && col < self.cols,
            "matrix index ({row}, {col}) out of range for {}x{}",
            self.rows,
            self.cols
        );
        &self.data[row * self.cols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(
            row < self.rows && col < self.cols,
            "matrix index ({row}, {col}) out of range for {}x{}",
            self.rows,
            self.cols
        );
        &mut self.data[row * self.cols + col]
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for Matrix<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for i in 0..self.rows {
            write!(f, "[")?;
            for j in 0..self.cols {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{:>12.6}", self[(i, j)])?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}
