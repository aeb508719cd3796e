//! Configuration types for the rolling prediction window.
//!
//! ## Purpose
//!
//! This module defines the policies the online adapter uses to decide what
//! enters the window after a prediction, how samples are weighted, and how
//! timestamps are expressed before fitting.
//!
//! ## Design notes
//!
//! * **Encapsulated**: Each policy is a small enum with a clear default.
//! * **Trait Implementation**: All types implement `Debug`, `Clone`, `Copy`, and `PartialEq`.
//! * **Re-exported**: Accessible via the `api` module and the prelude.
//!
//! ## Key concepts
//!
//! 1. **Feeding**: Whether a prediction is written back into the window.
//! 2. **Weighting**: Uniform or recency-weighted least squares.
//! 3. **Time base**: Absolute timestamps or offsets from the oldest sample.
//!
//! ## Non-goals
//!
//! * This module does not implement the window logic itself (handled by `adapters`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

/// What the rolling window receives after each prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FeedMode {
    /// Evict the oldest sample and append `(now, prediction)`.
    ///
    /// The fit then tracks its own extrapolation rather than fresh readings.
    #[default]
    SelfFeeding,

    /// Leave the window untouched; the caller appends observed readings.
    Observed,
}

/// Per-sample weighting applied to the window before fitting.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WindowWeighting {
    /// Identity weight matrix (ordinary least squares).
    #[default]
    Uniform,

    /// Newest sample has weight 1; the weight halves every `half_life` samples back.
    ExponentialDecay {
        /// Half-life measured in samples.
        half_life: f64,
    },
}

impl WindowWeighting {
    /// Diagonal weights for a window of `n` samples, oldest first.
    pub fn diagonal<T: Float>(&self, n: usize) -> Vec<T> {
        match *self {
            WindowWeighting::Uniform => vec![T::one(); n],
            WindowWeighting::ExponentialDecay { half_life } => {
                let h = T::from(half_life).unwrap_or_else(T::one);
                let lambda = (-T::one() / h).exp2();
                (0..n)
                    .map(|i| {
                        let age = (n - 1 - i) as i32;
                        lambda.powi(age)
                    })
                    .collect()
            }
        }
    }
}

/// Origin used for timestamps before they enter the design matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimeBase {
    /// Measure times relative to the oldest sample in the window.
    #[default]
    WindowStart,

    /// Use timestamps as given.
    Absolute,
}
