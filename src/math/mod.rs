//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the dense linear-algebra kernel used by the fit:
//! - Transpose and matrix/vector products
//! - Determinant by cofactor expansion
//! - Inverse through the adjugate
//!
//! These are reusable mathematical building blocks with no fitting-specific logic.
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
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Transpose and dense products.
pub mod linalg;

/// Recursive cofactor-expansion determinant.
pub mod determinant;

/// Cofactor / adjugate inverse.
pub mod inverse;
