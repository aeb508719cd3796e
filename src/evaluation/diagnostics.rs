//! Goodness-of-fit diagnostics for polynomial fits.
//!
//! ## Purpose
//!
//! This module summarises how well a fitted polynomial reproduces the samples
//! it was fit to.
//!
//! ## Design notes
//!
//! * **Unweighted metrics**: RMSE, MAE and R^2 treat every sample equally.
//! * **Weighted metric**: `r' W r` is the quantity the weighted fit minimises.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * RMSE, MAE and the weighted RSS are non-negative for non-negative weights.
//! * R^2 is 1 for a perfect fit, including fits to constant data.
//!
//! ## Non-goals
//!
//! * Confidence or prediction intervals.
//! * Model selection criteria.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::FitError;
use crate::primitives::matrix::Matrix;

// ============================================================================
// Diagnostics
// ============================================================================

/// Fit quality metrics.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Diagnostics<T> {
    /// Root mean squared error.
    pub rmse: T,

    /// Mean absolute error.
    pub mae: T,

    /// Coefficient of determination.
    pub r_squared: T,

    /// Weighted residual sum of squares `r' W r`.
    pub weighted_rss: T,
}

impl<T: Float> Diagnostics<T> {
    /// Compute diagnostics from observed values, fitted values, and the weight matrix.
    pub fn compute(values: &[T], fitted: &[T], weights: &Matrix<T>) -> core::result::Result<Self, FitError> {
        let residuals: Vec<T> = values
            .iter()
            .zip(fitted.iter())
            .map(|(&y, &f)| y - f)
            .collect();

        Ok(Self {
            rmse: Self::calculate_rmse(&residuals),
            mae: Self::calculate_mae(&residuals),
            r_squared: Self::calculate_r_squared(values, &residuals),
            weighted_rss: Self::calculate_weighted_rss(&residuals, weights)?,
        })
    }

    // ========================================================================
    // Error Metrics
    // ========================================================================

    /// RMSE = sqrt((1/n) * sum r_i^2).
    pub fn calculate_rmse(residuals: &[T]) -> T {
        if residuals.is_empty() {
            return T::zero();
        }
        let n_t = T::from(residuals.len()).unwrap_or_else(T::one);
        let rss = residuals.iter().fold(T::zero(), |acc, &r| acc + r * r);
        (rss / n_t).sqrt()
    }

    /// MAE = (1/n) * sum |r_i|.
    pub fn calculate_mae(residuals: &[T]) -> T {
        if residuals.is_empty() {
            return T::zero();
        }
        let n_t = T::from(residuals.len()).unwrap_or_else(T::one);
        residuals.iter().fold(T::zero(), |acc, &r| acc + r.abs()) / n_t
    }

    /// R^2 = 1 - SS_res / SS_tot.
    pub fn calculate_r_squared(values: &[T], residuals: &[T]) -> T {
        let n = values.len();
        if n <= 1 {
            return T::one();
        }

        let n_t = T::from(n).unwrap_or_else(T::one);
        let mean = values.iter().fold(T::zero(), |acc, &v| acc + v) / n_t;
        let ss_tot = values.iter().fold(T::zero(), |acc, &v| {
            let d = v - mean;
            acc + d * d
        });
        let ss_res = residuals.iter().fold(T::zero(), |acc, &r| acc + r * r);

        if ss_tot == T::zero() {
            // All values identical
            if ss_res == T::zero() {
                T::one()
            } else {
                T::zero()
            }
        } else {
            T::one() - ss_res / ss_tot
        }
    }

    /// Weighted residual sum of squares `r' W r`.
    pub fn calculate_weighted_rss(
        residuals: &[T],
        weights: &Matrix<T>,
    ) -> core::result::Result<T, FitError> {
        let wr = weights.multiply_vector(residuals)?;
        Ok(residuals
            .iter()
            .zip(wr.iter())
            .fold(T::zero(), |acc, (&r, &w)| acc + r * w))
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for Diagnostics<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Fit Diagnostics:")?;
        writeln!(f, "  RMSE:         {:.6}", self.rmse)?;
        writeln!(f, "  MAE:          {:.6}", self.mae)?;
        writeln!(f, "  R²:           {:.6}", self.r_squared)?;
        writeln!(f, "  Weighted RSS: {:.6}", self.weighted_rss)?;
        Ok(())
    }
}
