//! Input validation for fit configuration and data.
//!
//! ## Purpose
//!
//! This module provides the checks that run before any matrix is allocated:
//! input lengths, finite values, sample counts against the degree, weight
//! matrix shape, and the precision of powered timestamps.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Sample count**: At least as many samples as estimated coefficients.
//! * **Finite Checks**: Ensures all inputs are finite (no NaN/Inf).
//! * **Precision**: `|t|^degree` must stay within the contiguous integer range of `T`.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not rebase or rescale inputs.
//! * This module does not detect singular designs (handled by the inverse engine).

// External dependencies
use num_traits::Float;
use tracing::warn;

// Internal dependencies
use crate::algorithms::regression::{Intercept, PolynomialDegree};
use crate::primitives::errors::FitError;
use crate::primitives::matrix::Matrix;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for fit configuration and input data.
///
/// Provides static methods that return `Result<(), FitError>` and fail fast
/// upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate the `times` and `values` arrays of a fit.
    pub fn validate_inputs<T: Float>(times: &[T], values: &[T]) -> Result<(), FitError> {
        // Check 1: Non-empty arrays
        if times.is_empty() || values.is_empty() {
            return Err(FitError::EmptyInput);
        }

        // Check 2: Matching lengths
        if times.len() != values.len() {
            return Err(FitError::MismatchedInputs {
                x_len: times.len(),
                y_len: values.len(),
            });
        }

        // Check 3: All values finite
        for (i, &val) in times.iter().enumerate() {
            Self::validate_scalar(val, "times", i)?;
        }
        for (i, &val) in values.iter().enumerate() {
            Self::validate_scalar(val, "values", i)?;
        }

        Ok(())
    }

    /// Validate a single numeric value for finiteness.
    pub fn validate_scalar<T: Float>(val: T, name: &str, index: usize) -> Result<(), FitError> {
        if !val.is_finite() {
            return Err(FitError::InvalidNumericValue(format!(
                "{}[{}]={}",
                name,
                index,
                val.to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(())
    }

    /// Validate that there are enough samples for the coefficients being estimated.
    pub fn validate_sample_count<T: Float>(
        n: usize,
        degree: PolynomialDegree,
        intercept: &Intercept<T>,
    ) -> Result<(), FitError> {
        let min = intercept.estimated_coefficients(degree).max(1);
        if n < min {
            return Err(FitError::InsufficientSamples { got: n, min });
        }
        Ok(())
    }

    /// Validate that the weight matrix is `n x n`.
    pub fn validate_weights<T: Float>(weights: &Matrix<T>, n: usize) -> Result<(), FitError> {
        if weights.shape() != (n, n) {
            return Err(FitError::DimensionMismatch {
                operation: "weights",
                left: weights.shape(),
                right: (n, n),
            });
        }
        for i in 0..n {
            for (j, &w) in weights.row(i).iter().enumerate() {
                if !w.is_finite() {
                    return Err(FitError::InvalidNumericValue(format!(
                        "weights[{}][{}]={}",
                        i,
                        j,
                        w.to_f64().unwrap_or(f64::NAN)
                    )));
                }
            }
        }
        Ok(())
    }

    /// Validate that every `|t|^degree` is exactly representable in `T`'s mantissa.
    ///
    /// Beyond `1 / eps` consecutive integers are no longer distinguishable
    /// and the normal equations silently lose the low-order information.
    pub fn validate_precision<T: Float>(times: &[T], degree: PolynomialDegree) -> Result<(), FitError> {
        let k = degree.value();
        if k == 0 {
            return Ok(());
        }

        let limit = T::one() / T::epsilon();
        for &t in times {
            let p = t.abs().powi(k as i32);
            if !p.is_finite() || p > limit {
                let time = t.to_f64().unwrap_or(f64::NAN);
                warn!("time {time} at degree {k} exceeds float precision");
                return Err(FitError::PrecisionLoss { time, degree: k });
            }
        }
        Ok(())
    }

    // ========================================================================
    // Adapter-Specific Validation
    // ========================================================================

    /// Validate the maximum capacity of the sliding window.
    pub fn validate_window_capacity(window_capacity: usize, min: usize) -> Result<(), FitError> {
        if window_capacity < min {
            return Err(FitError::InvalidWindowCapacity {
                got: window_capacity,
                min,
            });
        }
        Ok(())
    }

    /// Validate an exponential-decay half-life.
    pub fn validate_half_life(half_life: f64) -> Result<(), FitError> {
        if !half_life.is_finite() || half_life <= 0.0 {
            return Err(FitError::InvalidHalfLife(half_life));
        }
        Ok(())
    }

    /// Validate the divisor applied to timestamps.
    pub fn validate_time_scale<T: Float>(scale: T) -> Result<(), FitError> {
        if !scale.is_finite() || scale <= T::zero() {
            return Err(FitError::InvalidTimeScale(
                scale.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), FitError> {
        if let Some(param) = duplicate_param {
            return Err(FitError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
