//! Determinant by recursive cofactor expansion.
//!
//! ## Purpose
//!
//! This module computes the determinant of the small square matrices that
//! appear in polynomial fitting (the normal equations and their minors).
//!
//! ## Design notes
//!
//! * **Algorithm**: Laplace expansion along the first row, alternating sign
//!   starting at `+1`.
//! * **Cost**: Factorial in the order. Bounded by [`MAX_COFACTOR_ORDER`];
//!   larger matrices are refused rather than expanded.
//! * **Stack**: Recursion depth equals the order.
//!
//! ## Invariants
//!
//! * `det([[a]]) == a`.
//! * The input is never mutated.
//!
//! ## Non-goals
//!
//! * LU or any pivoting scheme; the expansion is kept for its exact
//!   arithmetic on integer-valued inputs at these sizes.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::FitError;
use crate::primitives::matrix::Matrix;

/// Largest matrix order accepted by the cofactor engines.
///
/// A degree-5 fit needs order 6; two orders of headroom are allowed.
pub const MAX_COFACTOR_ORDER: usize = 8;

/// Determinant of a square matrix of order at most [`MAX_COFACTOR_ORDER`].
pub fn determinant<T: Float>(a: &Matrix<T>) -> Result<T, FitError> {
    check_cofactor_operand(a)?;
    Ok(expand_first_row(a))
}

/// Check squareness and the order bound shared by the determinant and inverse engines.
pub(crate) fn check_cofactor_operand<T: Float>(a: &Matrix<T>) -> Result<(), FitError> {
    if !a.is_square() {
        return Err(FitError::NotSquare {
            rows: a.rows(),
            cols: a.cols(),
        });
    }
    if a.rows() > MAX_COFACTOR_ORDER {
        return Err(FitError::MatrixTooLarge {
            order: a.rows(),
            max: MAX_COFACTOR_ORDER,
        });
    }
    Ok(())
}

/// Laplace expansion; assumes a validated square operand.
pub(crate) fn expand_first_row<T: Float>(a: &Matrix<T>) -> T {
    let k = a.rows();
    if k == 1 {
        return a[(0, 0)];
    }

    let mut det = T::zero();
    let mut sign = T::one();
    for c in 0..k {
        let entry = a[(0, c)];
        // Zero entries contribute nothing; skip the recursive work.
        if entry != T::zero() {
            det = det + sign * entry * expand_first_row(&a.minor(0, c));
        }
        sign = -sign;
    }
    det
}
