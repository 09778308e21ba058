//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions used throughout the
//! herding pipeline:
//! - Euclidean distance with SIMD acceleration and search-bound derivation
//! - The radial kernel and its analytic gradient
//! - The linear-algebra backend for the quasi-Newton minimizer
//!
//! These are reusable mathematical building blocks with no algorithm-specific
//! logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
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

/// Euclidean distance and search bounds.
pub mod distance;

/// Radial kernel evaluation and gradient.
pub mod kernel;

/// Linear algebra backend for the quasi-Newton minimizer.
pub mod linalg;
