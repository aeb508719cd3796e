//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer provides the fitting algorithm itself: the design matrix, the
//! weighted normal-equations solve, and polynomial evaluation.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Weighted polynomial least squares.
pub mod regression;
