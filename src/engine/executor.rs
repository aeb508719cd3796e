//! Execution engine for weighted polynomial fits.
//!
//! ## Purpose
//!
//! This module orchestrates a single fit: it validates the inputs, builds the
//! weight matrix when none is supplied, solves the normal equations, and
//! optionally computes fitted values, residuals, and diagnostics.
//!
//! ## Design notes
//!
//! * Provides both configuration-based and parameter-based entry points.
//! * Sample counts are checked before any matrix is allocated.
//! * Timestamps are used as given; rebasing belongs to the adapters.
//! * Generic over `Float` types to support f32 and f64.
//!
//! ## Key concepts
//!
//! * **Execution order**: Validate -> Weights -> Solve -> Diagnose.
//! * **Default weights**: The identity matrix (ordinary least squares).
//!
//! ## Invariants
//!
//! * A returned `FitResult` always has `degree + 1` coefficients.
//! * No error is recovered here; every failure is returned to the caller.
//!
//! ## Non-goals
//!
//! * This module does not own any sample window (handled by `adapters::online`).
//! * This module does not provide public-facing result formatting.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;
use tracing::debug;

// Internal dependencies
use crate::algorithms::regression::{Intercept, PolynomialDegree, fit_weighted};
use crate::engine::output::FitResult;
use crate::engine::validator::Validator;
use crate::evaluation::diagnostics::Diagnostics;
use crate::primitives::errors::FitError;
use crate::primitives::matrix::Matrix;

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for a single fit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitConfig<T> {
    /// Polynomial degree.
    pub degree: PolynomialDegree,

    /// Intercept treatment.
    pub intercept: Intercept<T>,

    /// Whether to compute fitted values, residuals, and diagnostics.
    pub return_diagnostics: bool,
}

impl<T> Default for FitConfig<T> {
    fn default() -> Self {
        Self {
            degree: PolynomialDegree::default(),
            intercept: Intercept::Free,
            return_diagnostics: false,
        }
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Runs validated weighted polynomial fits.
pub struct FitExecutor;

impl FitExecutor {
    /// Fit `values` against `times` using a `FitConfig` payload.
    ///
    /// When `weights` is `None` the identity matrix is used.
    pub fn run_with_config<T: Float>(
        times: &[T],
        values: &[T],
        weights: Option<&Matrix<T>>,
        config: FitConfig<T>,
    ) -> Result<FitResult<T>, FitError> {
        let n = times.len();

        // Check 1: Enough samples for the estimated coefficients
        Validator::validate_sample_count(n, config.degree, &config.intercept)?;

        // Check 2: Shape and finiteness of the inputs
        Validator::validate_inputs(times, values)?;
        if let Intercept::Fixed(v) = config.intercept {
            Validator::validate_scalar(v, "intercept", 0)?;
        }
        if let Some(w) = weights {
            Validator::validate_weights(w, n)?;
        }

        // Check 3: Powers of the timestamps stay exact
        Validator::validate_precision(times, config.degree)?;

        // Default to ordinary least squares
        let identity;
        let w = match weights {
            Some(w) => w,
            None => {
                identity = Matrix::identity(n)?;
                &identity
            }
        };

        let solved = fit_weighted(times, values, config.degree, w, config.intercept)?;
        debug!(
            n_samples = n,
            degree = config.degree.value(),
            fixed_intercept = config.intercept.is_fixed(),
            "weighted polynomial fit solved"
        );

        let mut result = FitResult {
            coefficients: solved.coefficients,
            normal_inverse: solved.normal_inverse,
            degree: config.degree,
            n_samples: n,
            intercept: config.intercept,
            determinant: solved.determinant,
            fitted: None,
            residuals: None,
            diagnostics: None,
        };

        if config.return_diagnostics {
            let fitted = result.evaluate_many(times);
            let residuals: Vec<T> = values
                .iter()
                .zip(fitted.iter())
                .map(|(&y, &f)| y - f)
                .collect();
            result.diagnostics = Some(Diagnostics::compute(values, &fitted, w)?);
            result.fitted = Some(fitted);
            result.residuals = Some(residuals);
        }

        Ok(result)
    }
}

// ============================================================================
// Parameter-based Entry Point
// ============================================================================

/// Fit a degree-`degree` polynomial to `(times, values)` under the weight matrix `weights`.
///
/// Returns the coefficients (constant term first) together with the inverse
/// of the normal equations.
///
/// # Errors
///
/// * `InsufficientSamples` when fewer samples than estimated coefficients.
/// * `DimensionMismatch` when `weights` is not `n x n`.
/// * `PrecisionLoss` when a timestamp raised to `degree` exceeds the float mantissa.
/// * `SingularNormalEquations` when `X'WX` cannot be inverted.
pub fn fit<T: Float>(
    times: &[T],
    values: &[T],
    degree: PolynomialDegree,
    weights: &Matrix<T>,
    intercept: Intercept<T>,
) -> Result<FitResult<T>, FitError> {
    let config = FitConfig {
        degree,
        intercept,
        return_diagnostics: false,
    };
    FitExecutor::run_with_config(times, values, Some(weights), config)
}
