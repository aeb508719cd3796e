//! Matrix inverse through the adjugate.
//!
//! ## Purpose
//!
//! This module inverts the normal-equations matrix X'WX: it builds the matrix
//! of signed minors (cofactors), transposes it into the adjugate, and divides
//! by the determinant of the original matrix.
//!
//! ## Design notes
//!
//! * **Formula**: `inverse = adj(A) / det(A)`, `adj(A) = cofactor(A)'`.
//! * **Singularity**: A zero or non-finite determinant is rejected before
//!   dividing. After dividing, an equilibrated condition estimate above
//!   `1 / eps` is rejected too. The estimate does not depend on time units.
//! * **Order 1**: The cofactor of a 1x1 matrix is `[[1]]`.
//!
//! ## Invariants
//!
//! * `A * cofactor_inverse(A)` is the identity up to rounding for
//!   non-singular `A`.
//!
//! ## Non-goals
//!
//! * Pseudo-inverses or any rank-deficient fallback.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;
use tracing::warn;

// Internal dependencies
use crate::math::determinant::{check_cofactor_operand, expand_first_row};
use crate::primitives::errors::FitError;
use crate::primitives::matrix::Matrix;

// ============================================================================
// Cofactors and Adjugate
// ============================================================================

/// Matrix of cofactors: `C[(q, p)] = (-1)^(q + p) * det(minor(q, p))`.
pub fn cofactor_matrix<T: Float>(a: &Matrix<T>) -> Result<Matrix<T>, FitError> {
    check_cofactor_operand(a)?;
    Ok(cofactors_unchecked(a))
}

/// Adjugate (classical adjoint): the transpose of the cofactor matrix.
pub fn adjugate<T: Float>(a: &Matrix<T>) -> Result<Matrix<T>, FitError> {
    Ok(cofactor_matrix(a)?.transpose())
}

fn cofactors_unchecked<T: Float>(a: &Matrix<T>) -> Matrix<T> {
    let k = a.rows();
    let mut fac = Matrix::from_parts(k, k, vec![T::zero(); k * k]);
    if k == 1 {
        fac[(0, 0)] = T::one();
        return fac;
    }

    for q in 0..k {
        for p in 0..k {
            let minor_det = expand_first_row(&a.minor(q, p));
            fac[(q, p)] = if (q + p) % 2 == 0 {
                minor_det
            } else {
                -minor_det
            };
        }
    }
    fac
}

// ============================================================================
// Inverse
// ============================================================================

/// Inverse of a square, non-singular matrix via `adj(A) / det(A)`.
pub fn cofactor_inverse<T: Float>(a: &Matrix<T>) -> Result<Matrix<T>, FitError> {
    invert_with_determinant(a).map(|(inverse, _)| inverse)
}

/// Inverse together with the determinant it was divided by.
pub fn invert_with_determinant<T: Float>(a: &Matrix<T>) -> Result<(Matrix<T>, T), FitError> {
    check_cofactor_operand(a)?;

    let det = expand_first_row(a);
    if det == T::zero() || !det.is_finite() {
        return Err(singular(a, det));
    }

    let mut inverse = cofactors_unchecked(a).transpose();
    inverse.div_scalar_mut(det);

    if is_singular(a, &inverse, det) {
        return Err(singular(a, det));
    }
    Ok((inverse, det))
}

fn singular<T: Float>(a: &Matrix<T>, det: T) -> FitError {
    let determinant = det.to_f64().unwrap_or(f64::NAN);
    warn!("singular {}x{} matrix, determinant {determinant:e}", a.rows(), a.cols());
    FitError::SingularNormalEquations { determinant }
}

// ============================================================================
// Conditioning
// ============================================================================

/// One-norm condition number of `a` after symmetric diagonal equilibration.
///
/// With `D = diag(1 / sqrt|a_ii|)` this is `||DAD||_1 * ||(DAD)^-1||_1`,
/// where `(DAD)^-1 = D^-1 A^-1 D^-1`. Rescaling the time axis scales the
/// normal equations by a diagonal matrix, which leaves this estimate
/// unchanged. Zero or non-finite diagonal entries are left unscaled.
pub fn condition_estimate<T: Float>(a: &Matrix<T>, inverse: &Matrix<T>) -> T {
    let k = a.rows();
    let scale: Vec<T> = (0..k)
        .map(|i| {
            let d = a[(i, i)].abs().sqrt();
            if d > T::zero() && d.is_finite() {
                d
            } else {
                T::one()
            }
        })
        .collect();

    let mut norm_a = T::zero();
    let mut norm_inv = T::zero();
    for j in 0..k {
        let mut col_a = T::zero();
        let mut col_inv = T::zero();
        for i in 0..k {
            col_a = col_a + (a[(i, j)] / (scale[i] * scale[j])).abs();
            col_inv = col_inv + (inverse[(i, j)] * scale[i] * scale[j]).abs();
        }
        norm_a = norm_a.max(col_a);
        norm_inv = norm_inv.max(col_inv);
    }
    norm_a * norm_inv
}

/// Whether `inverse` (computed from `det`) is too inaccurate to use.
///
/// Exact zero and non-finite determinants are always singular. Otherwise
/// the matrix is singular when [`condition_estimate`] is non-finite or
/// exceeds `1 / eps`, the point where the inverse carries no correct digits.
pub fn is_singular<T: Float>(a: &Matrix<T>, inverse: &Matrix<T>, det: T) -> bool {
    if det == T::zero() || !det.is_finite() {
        return true;
    }
    let cond = condition_estimate(a, inverse);
    !cond.is_finite() || cond > T::one() / T::epsilon()
}
