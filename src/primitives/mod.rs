//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the fundamental types shared by every other layer:
//! the error taxonomy for configuration validation and run failures.
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Error types for configuration validation and herding runs.
pub mod errors;
