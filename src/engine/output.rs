//! Output types for polynomial fits.
//!
//! ## Purpose
//!
//! This module defines `FitResult`, the value every fit returns: the
//! coefficient vector, the inverse of the normal equations, and the metadata
//! needed to interpret them.
//!
//! ## Design notes
//!
//! * **Self-describing**: Carries the degree, sample count, and intercept mode.
//! * **Optional outputs**: Fitted values, residuals, and diagnostics are only
//!   present when requested.
//! * **Evaluation**: `evaluate` applies the polynomial in the time coordinates
//!   the fit was computed in.
//!
//! ## Invariants
//!
//! * `coefficients.len() == degree.num_coefficients()`.
//! * `normal_inverse` is `coefficients.len()` square.
//! * `fitted` and `residuals`, when present, have `n_samples` entries.
//!
//! ## Non-goals
//!
//! * This module does not perform any fitting.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::algorithms::regression::{Intercept, PolynomialDegree, evaluate_polynomial};
use crate::evaluation::diagnostics::Diagnostics;
use crate::primitives::matrix::Matrix;

// ============================================================================
// Fit Result
// ============================================================================

/// Result of a weighted polynomial fit.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(deserialize = "T: Float + serde::Deserialize<'de>"))
)]
pub struct FitResult<T> {
    /// Polynomial coefficients, constant term first.
    pub coefficients: Vec<T>,

    /// Inverse of the normal-equations matrix `X'WX`.
    pub normal_inverse: Matrix<T>,

    /// Polynomial degree that was fit.
    pub degree: PolynomialDegree,

    /// Number of samples the fit used.
    pub n_samples: usize,

    /// Intercept treatment.
    pub intercept: Intercept<T>,

    /// Determinant of `X'WX` as inverted.
    pub determinant: T,

    /// Fitted values at the input times (if diagnostics were requested).
    pub fitted: Option<Vec<T>>,

    /// Residuals `values - fitted` (if diagnostics were requested).
    pub residuals: Option<Vec<T>>,

    /// Goodness-of-fit metrics (if requested).
    pub diagnostics: Option<Diagnostics<T>>,
}

impl<T: Float> FitResult<T> {
    /// Evaluate the fitted polynomial at `t`.
    #[inline]
    pub fn evaluate(&self, t: T) -> T {
        evaluate_polynomial(&self.coefficients, t)
    }

    /// Evaluate the fitted polynomial at each of `ts`.
    pub fn evaluate_many(&self, ts: &[T]) -> Vec<T> {
        ts.iter().map(|&t| self.evaluate(t)).collect()
    }

    /// Coefficient of `t^power`, or zero above the fitted degree.
    pub fn coefficient(&self, power: usize) -> T {
        self.coefficients.get(power).copied().unwrap_or_else(T::zero)
    }

    /// Whether diagnostics were computed.
    pub fn has_diagnostics(&self) -> bool {
        self.diagnostics.is_some()
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for FitResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Samples:     {}", self.n_samples)?;
        writeln!(f, "  Degree:      {}", self.degree.value())?;
        match self.intercept {
            Intercept::Free => writeln!(f, "  Intercept:   free")?,
            Intercept::Fixed(v) => writeln!(f, "  Intercept:   fixed at {:.6}", v)?,
        }
        writeln!(
            f,
            "  det(X'WX):   {:.6e}",
            self.determinant.to_f64().unwrap_or(f64::NAN)
        )?;

        writeln!(f)?;
        writeln!(f, "Coefficients:")?;
        for (power, c) in self.coefficients.iter().enumerate() {
            writeln!(f, "  t^{}: {:>14.6}", power, c)?;
        }

        if let Some(diag) = &self.diagnostics {
            writeln!(f)?;
            write!(f, "{}", diag)?;
        }

        Ok(())
    }
}
