//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the primitive data structures used throughout the
//! crate: the dense matrix container, the sample window, window policies,
//! and the shared error type. It has zero internal dependencies within the
//! crate beyond its own modules.
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
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
pub mod errors;

/// Dense matrix storage.
pub mod matrix;

/// Bounded sample window.
pub mod window;

/// Window policies.
pub mod partition;
