//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer provides post-run diagnostics: the running mean-estimation
//! error used to compare a herded sequence against an independently drawn
//! sequence of the same length. Nothing here feeds back into the herding
//! loop.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Running mean-estimation error diagnostics.
pub mod diagnostics;
