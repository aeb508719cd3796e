//! Weighted polynomial least squares.
//!
//! ## Purpose
//!
//! This module provides the fitting algorithm: a global polynomial in time is
//! fit to a set of samples by solving the weighted normal equations
//! `(X'WX) beta = X'WY` with the cofactor inverse.
//!
//! ## Design notes
//!
//! * **Design matrix**: `X[(i, j)] = t_i^j` for `j = 0..=degree`.
//! * **Fixed intercept**: Column 0 of `X` stays zero, `X'WX[(0, 0)]` is forced
//!   to 1 so the system stays invertible, targets are shifted by the pinned
//!   value, and `beta[0]` is overwritten with it afterwards.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Normal equations**: `beta = (X'WX)^-1 X'WY`.
//! * **Evaluation**: Horner's scheme over the coefficients.
//!
//! ## Invariants
//!
//! * `coefficients.len() == degree + 1`.
//! * With `Intercept::Fixed(v)`, `coefficients[0] == v` exactly.
//!
//! ## Non-goals
//!
//! * This module does not validate inputs (handled by the engine).
//! * This module does not rebase timestamps; callers keep powers well scaled.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::inverse::invert_with_determinant;
use crate::primitives::errors::FitError;
use crate::primitives::matrix::Matrix;

// ============================================================================
// Polynomial Degree
// ============================================================================

/// Polynomial degree of the fitted curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PolynomialDegree {
    /// Degree 0: weighted mean
    Constant,

    /// Degree 1: straight line (default)
    #[default]
    Linear,

    /// Degree 2
    Quadratic,

    /// Degree 3
    Cubic,

    /// Degree 4
    Quartic,

    /// Degree 5
    Quintic,
}

impl PolynomialDegree {
    /// Highest supported degree.
    pub const MAX: usize = 5;

    /// Get the numeric degree value.
    #[inline]
    pub const fn value(&self) -> usize {
        match self {
            PolynomialDegree::Constant => 0,
            PolynomialDegree::Linear => 1,
            PolynomialDegree::Quadratic => 2,
            PolynomialDegree::Cubic => 3,
            PolynomialDegree::Quartic => 4,
            PolynomialDegree::Quintic => 5,
        }
    }

    /// Number of polynomial coefficients (`degree + 1`).
    #[inline]
    pub const fn num_coefficients(&self) -> usize {
        self.value() + 1
    }

    /// Degree from its numeric value.
    pub fn from_value(degree: usize) -> Result<Self, FitError> {
        match degree {
            0 => Ok(PolynomialDegree::Constant),
            1 => Ok(PolynomialDegree::Linear),
            2 => Ok(PolynomialDegree::Quadratic),
            3 => Ok(PolynomialDegree::Cubic),
            4 => Ok(PolynomialDegree::Quartic),
            5 => Ok(PolynomialDegree::Quintic),
            got => Err(FitError::InvalidDegree {
                got,
                max: Self::MAX,
            }),
        }
    }
}

impl TryFrom<usize> for PolynomialDegree {
    type Error = FitError;

    fn try_from(degree: usize) -> Result<Self, FitError> {
        Self::from_value(degree)
    }
}

// ============================================================================
// Intercept
// ============================================================================

/// Treatment of the constant term.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Intercept<T> {
    /// Estimate the intercept from the data.
    #[default]
    Free,

    /// Pin the intercept to the given value.
    Fixed(T),
}

impl<T: Float> Intercept<T> {
    /// Whether the intercept is pinned.
    #[inline]
    pub fn is_fixed(&self) -> bool {
        matches!(self, Intercept::Fixed(_))
    }

    /// Number of coefficients actually estimated from data for `degree`.
    #[inline]
    pub fn estimated_coefficients(&self, degree: PolynomialDegree) -> usize {
        match self {
            Intercept::Free => degree.num_coefficients(),
            Intercept::Fixed(_) => degree.value(),
        }
    }
}

// ============================================================================
// Weighted Fit
// ============================================================================

/// Raw output of the normal-equations solve.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedFit<T> {
    /// Polynomial coefficients, constant term first.
    pub coefficients: Vec<T>,

    /// `(X'WX)^-1`.
    pub normal_inverse: Matrix<T>,

    /// `det(X'WX)` as inverted (after the fixed-intercept adjustment).
    pub determinant: T,
}

/// Build the `n x (degree + 1)` design matrix.
///
/// Column 0 is left at zero when the intercept is fixed.
pub fn design_matrix<T: Float>(
    times: &[T],
    degree: PolynomialDegree,
    fixed_intercept: bool,
) -> Result<Matrix<T>, FitError> {
    let k1 = degree.num_coefficients();
    let mut x = Matrix::zeros(times.len(), k1)?;
    let begin = usize::from(fixed_intercept);
    for (i, &t) in times.iter().enumerate() {
        for j in begin..k1 {
            x[(i, j)] = t.powi(j as i32);
        }
    }
    Ok(x)
}

/// Solve the weighted normal equations for a polynomial in time.
///
/// `weights` must be `n x n` where `n = times.len()`; shape violations
/// surface as `DimensionMismatch` from the products.
pub fn fit_weighted<T: Float>(
    times: &[T],
    values: &[T],
    degree: PolynomialDegree,
    weights: &Matrix<T>,
    intercept: Intercept<T>,
) -> Result<WeightedFit<T>, FitError> {
    let fixed = intercept.is_fixed();

    // Step 1: Design matrix and its transpose
    let x = design_matrix(times, degree, fixed)?;
    let xt = x.transpose();

    // Step 2: X'W and X'WX
    let xtw = xt.multiply(weights)?;
    let mut xtwx = xtw.multiply(&x)?;

    // Step 3: Keep the pinned column invertible
    if fixed {
        xtwx[(0, 0)] = T::one();
    }

    // Step 4: (X'WX)^-1
    let (normal_inverse, determinant) = invert_with_determinant(&xtwx)?;

    // Step 5: Targets
    let y: Vec<T> = match intercept {
        Intercept::Fixed(v) => values.iter().map(|&yi| yi - v).collect(),
        Intercept::Free => values.to_vec(),
    };

    // Step 6: beta = (X'WX)^-1 X'WY
    let xtwy = xtw.multiply_vector(&y)?;
    let mut coefficients = normal_inverse.multiply_vector(&xtwy)?;

    // Step 7: Pin the intercept
    if let Intercept::Fixed(v) = intercept {
        coefficients[0] = v;
    }

    Ok(WeightedFit {
        coefficients,
        normal_inverse,
        determinant,
    })
}

/// Evaluate `sum_i coefficients[i] * t^i` with Horner's scheme.
#[inline]
pub fn evaluate_polynomial<T: Float>(coefficients: &[T], t: T) -> T {
    coefficients
        .iter()
        .rev()
        .fold(T::zero(), |acc, &c| acc * t + c)
}
