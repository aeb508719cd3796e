//! Batch adapter for one-shot polynomial fits.
//!
//! ## Purpose
//!
//! This module provides the batch execution adapter. It fits a single
//! polynomial over complete `times` / `values` arrays held in memory.
//!
//! ## Design notes
//!
//! * **Processing**: Processes the entire dataset in a single pass.
//! * **Delegation**: Delegates computation to the execution engine.
//! * **Weights**: Uses the identity matrix unless an explicit one is configured.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * Input arrays `times` and `values` must have the same length.
//! * All values must be finite.
//! * At least as many samples as estimated coefficients are required.
//!
//! ## Non-goals
//!
//! * This adapter does not rebase timestamps.
//! * This adapter does not handle incremental updates (use online adapter).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::regression::{Intercept, PolynomialDegree};
use crate::engine::executor::{FitConfig, FitExecutor};
use crate::engine::output::FitResult;
use crate::engine::validator::Validator;
use crate::primitives::errors::FitError;
use crate::primitives::matrix::Matrix;

// ============================================================================
// Batch Fit Builder
// ============================================================================

/// Builder for the batch fit processor.
#[derive(Debug, Clone)]
pub struct BatchFitBuilder<T> {
    /// Polynomial degree
    pub degree: PolynomialDegree,

    /// Intercept treatment
    pub intercept: Intercept<T>,

    /// Explicit `n x n` weight matrix (identity when `None`)
    pub weights: Option<Matrix<T>>,

    /// Whether to compute fitted values, residuals, and diagnostics
    pub return_diagnostics: bool,

    /// Tracks if any parameter was set multiple times (for validation)
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for BatchFitBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> BatchFitBuilder<T> {
    /// Create a new batch builder with default parameters.
    fn new() -> Self {
        Self {
            degree: PolynomialDegree::default(),
            intercept: Intercept::Free,
            weights: None,
            return_diagnostics: false,
            duplicate_param: None,
        }
    }

    /// Set the polynomial degree.
    pub fn degree(mut self, degree: PolynomialDegree) -> Self {
        self.degree = degree;
        self
    }

    /// Pin the constant term to `value`.
    pub fn fixed_intercept(mut self, value: T) -> Self {
        self.intercept = Intercept::Fixed(value);
        self
    }

    /// Set the weight matrix.
    pub fn weights(mut self, weights: Matrix<T>) -> Self {
        self.weights = Some(weights);
        self
    }

    /// Enable fitted values, residuals, and diagnostics in the output.
    pub fn return_diagnostics(mut self, enabled: bool) -> Self {
        self.return_diagnostics = enabled;
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the batch processor.
    pub fn build(self) -> Result<BatchFit<T>, FitError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        // Validate the pinned intercept and the weight matrix shape early
        if let Intercept::Fixed(v) = self.intercept {
            Validator::validate_scalar(v, "intercept", 0)?;
        }
        if let Some(ref w) = self.weights {
            if !w.is_square() {
                return Err(FitError::NotSquare {
                    rows: w.rows(),
                    cols: w.cols(),
                });
            }
        }

        Ok(BatchFit { config: self })
    }
}

// ============================================================================
// Batch Fit Processor
// ============================================================================

/// Batch polynomial fit processor.
#[derive(Debug, Clone)]
pub struct BatchFit<T> {
    config: BatchFitBuilder<T>,
}

impl<T: Float> BatchFit<T> {
    /// Fit the configured polynomial to `(times, values)`.
    pub fn fit(&self, times: &[T], values: &[T]) -> Result<FitResult<T>, FitError> {
        let config = FitConfig {
            degree: self.config.degree,
            intercept: self.config.intercept,
            return_diagnostics: self.config.return_diagnostics,
        };
        FitExecutor::run_with_config(times, values, self.config.weights.as_ref(), config)
    }

    /// Configured polynomial degree.
    pub fn degree(&self) -> PolynomialDegree {
        self.config.degree
    }

    /// Configured intercept treatment.
    pub fn intercept(&self) -> Intercept<T> {
        self.config.intercept
    }
}
