//! Bounded FIFO window of time-stamped samples.
//!
//! ## Purpose
//!
//! This module provides `SampleWindow`, the owned buffer of recent
//! `(time, value)` readings that feeds the rolling predictor. It replaces any
//! process-wide queue: the orchestrator owns the window and passes it in.
//!
//! ## Design notes
//!
//! * **Storage**: Two parallel `VecDeque`s (times, values).
//! * **Eviction**: Pushing into a full window drops the oldest sample first.
//! * **Ordering**: Timestamps must be non-decreasing; out-of-order samples are rejected.
//!
//! ## Invariants
//!
//! * `times.len() == values.len() <= capacity` after every operation.
//! * Samples are kept in insertion order (oldest first).
//!
//! ## Non-goals
//!
//! * Random-access mutation of stored samples.
//! * Reordering of late samples.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{collections::VecDeque, vec::Vec};
#[cfg(feature = "std")]
use std::{collections::VecDeque, vec::Vec};

// External dependencies
use num_traits::Float;
use tracing::trace;

// Internal dependencies
use crate::primitives::errors::FitError;

// ============================================================================
// Sample
// ============================================================================

/// A single reading: an unsigned timestamp and a scalar value.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sample<T> {
    /// Timestamp in caller-defined ticks (e.g. milliseconds).
    pub time: u64,
    /// Observed (or predicted) value.
    pub value: T,
}

impl<T> Sample<T> {
    /// Create a sample.
    pub const fn new(time: u64, value: T) -> Self {
        Self { time, value }
    }
}

// ============================================================================
// Sample Window
// ============================================================================

/// Fixed-capacity first-in-first-out window of samples.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleWindow<T> {
    capacity: usize,
    times: VecDeque<u64>,
    values: VecDeque<T>,
}

impl<T: Float> SampleWindow<T> {
    /// Create an empty window holding at most `capacity` samples.
    pub fn new(capacity: usize) -> Result<Self, FitError> {
        if capacity == 0 {
            return Err(FitError::InvalidWindowCapacity { got: 0, min: 1 });
        }
        Ok(Self {
            capacity,
            times: VecDeque::with_capacity(capacity),
            values: VecDeque::with_capacity(capacity),
        })
    }

    /// Create a window pre-seeded with samples; only the newest `capacity` are kept.
    pub fn from_samples<I>(capacity: usize, samples: I) -> Result<Self, FitError>
    where
        I: IntoIterator<Item = Sample<T>>,
    {
        let mut window = Self::new(capacity)?;
        for s in samples {
            window.push(s.time, s.value)?;
        }
        Ok(window)
    }

    /// Append a sample, evicting the oldest one when the window is full.
    ///
    /// Returns the evicted sample, if any.
    pub fn push(&mut self, time: u64, value: T) -> Result<Option<Sample<T>>, FitError> {
        self.check_incoming(time, value)?;

        let evicted = if self.times.len() == self.capacity {
            self.pop_oldest()
        } else {
            None
        };

        self.times.push_back(time);
        self.values.push_back(value);
        Ok(evicted)
    }

    /// Drop the oldest sample and append a new one, keeping the length unchanged.
    ///
    /// On an empty window this is a plain push.
    pub fn slide(&mut self, time: u64, value: T) -> Result<Option<Sample<T>>, FitError> {
        self.check_incoming(time, value)?;

        let evicted = self.pop_oldest();
        self.times.push_back(time);
        self.values.push_back(value);
        Ok(evicted)
    }

    fn check_incoming(&self, time: u64, value: T) -> Result<(), FitError> {
        if !value.is_finite() {
            return Err(FitError::InvalidNumericValue(format!(
                "value={} at time {}",
                value.to_f64().unwrap_or(f64::NAN),
                time
            )));
        }
        match self.times.back() {
            Some(&previous) if time < previous => Err(FitError::NonMonotonicTime {
                previous,
                got: time,
            }),
            _ => Ok(()),
        }
    }

    fn pop_oldest(&mut self) -> Option<Sample<T>> {
        let time = self.times.pop_front()?;
        let value = self.values.pop_front()?;
        trace!("evicted sample at time {time}");
        Some(Sample { time, value })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Maximum number of samples retained.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of samples currently held.
    #[inline]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Whether the window holds no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Whether the window holds `capacity` samples.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.times.len() == self.capacity
    }

    /// Oldest sample.
    pub fn oldest(&self) -> Option<Sample<T>> {
        Some(Sample::new(*self.times.front()?, *self.values.front()?))
    }

    /// Newest sample.
    pub fn newest(&self) -> Option<Sample<T>> {
        Some(Sample::new(*self.times.back()?, *self.values.back()?))
    }

    /// Iterate over timestamps, oldest first.
    pub fn times(&self) -> impl Iterator<Item = u64> + '_ {
        self.times.iter().copied()
    }

    /// Iterate over values, oldest first.
    pub fn values(&self) -> impl Iterator<Item = T> + '_ {
        self.values.iter().copied()
    }

    /// Iterate over samples, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = Sample<T>> + '_ {
        self.times
            .iter()
            .zip(self.values.iter())
            .map(|(&time, &value)| Sample { time, value })
    }

    /// Copy the samples out as a vector, oldest first.
    pub fn to_vec(&self) -> Vec<Sample<T>> {
        self.iter().collect()
    }

    /// Remove every sample; capacity is kept.
    pub fn clear(&mut self) {
        self.times.clear();
        self.values.clear();
    }
}
