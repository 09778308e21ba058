//! # Kernel Herding for Rust
//!
//! A deterministic, sequential super-sampling procedure that compresses an
//! empirical sample set into a short sequence of "super-samples" whose
//! running mean converges to the target distribution's mean faster than
//! independent random draws.
//!
//! ## What is kernel herding?
//!
//! Given `M` points drawn from a target density `p(x)`, kernel herding
//! selects `N ≪ M` points one at a time. Each new point maximizes kernel
//! similarity to the full sample set (attraction toward high-density
//! regions) while minimizing kernel similarity to the points already chosen
//! (repulsion away from what is already covered). The resulting sequence is
//! a compact summary of the distribution, useful for:
//!
//! - Low-dimensional numerical integration (error decays roughly as `1/N`
//!   instead of the `1/√N` of Monte Carlo)
//! - Memory-efficient distribution summarization
//! - Deterministic, reproducible sub-sampling of large empirical datasets
//!
//! **How a run proceeds:**
//!
//! 1. The first super-sample is pre-seated (the origin, clamped into the
//!    sample bounding range) without optimization.
//! 2. Each following point is found by a bounded quasi-Newton descent on
//!    the objective `−attraction(x) + repulsion(x)`, constrained to the
//!    coordinate range of the sample set.
//! 3. A candidate that escapes the bounds is discarded; the search restarts
//!    from a randomly drawn sample point (counted in the `failures`
//!    diagnostic).
//! 4. After each acceptance the next search is warm-started from whichever
//!    accepted point currently scores best under the updated objective.
//!
//! ## Quick Start
//!
//! ```rust
//! use herding_rs::prelude::*;
//!
//! // 2-D samples, flattened row-major: [x0, y0, x1, y1, ...]
//! let samples = vec![
//!     0.0, 0.0, 0.2, 0.1, -0.1, 0.3, 4.0, 4.2, 3.9, 4.1, 4.1, 3.8,
//! ];
//!
//! let model = Herding::new()
//!     .gamma(1.0)       // kernel width
//!     .count(4)         // number of super-samples
//!     .dimensions(2)
//!     .seed(42)         // reseed draws only; the loop itself is deterministic
//!     .build()?;
//!
//! let result = model.herd(&samples)?;
//!
//! assert_eq!(result.len(), 4);
//! println!("{}", result);
//! # Result::<(), HerdingError>::Ok(())
//! ```
//!
//! ## Parameters
//!
//! All builder parameters have defaults; configure only what you need.
//!
//! | Parameter          | Default     | Range            | Description                                   |
//! |--------------------|-------------|------------------|-----------------------------------------------|
//! | **gamma**          | 1.0         | (0, ∞)           | Radial kernel width                           |
//! | **count**          | 100         | [1, ∞)           | Number of super-samples to produce (N)        |
//! | **dimensions**     | 1           | [1, ∞)           | Coordinates per point                         |
//! | **seed**           | 0           | u64              | Seed for reseed draws after failed attempts   |
//! | **retry_cap**      | 10 × count  | [1, ∞)           | Max consecutive failed attempts per iteration |
//! | **tolerance**      | 1e-10       | (0, ∞)           | Objective convergence tolerance               |
//! | **max_iterations** | 200         | [1, ∞)           | Quasi-Newton iteration cap per sub-problem    |
//!
//! ## The kernel
//!
//! Similarity is measured with the radial kernel
//!
//! ```text
//! k(a, b) = exp(−‖a − b‖ / γ²)
//! ```
//!
//! Note the exponent uses the plain Euclidean distance scaled by `1/γ²`,
//! not the squared distance of the classical RBF kernel. This is the form
//! the method is calibrated against and it is preserved exactly.
//!
//! ## Error handling
//!
//! `herd` returns `Result<HerdingResult<T>, HerdingError>`. Preconditions
//! (empty input, non-positive gamma, zero count) fail fast before any
//! computation. Out-of-bounds optimizer results are retried transparently
//! from a random sample point; only when `retry_cap` consecutive attempts
//! fail for one iteration does the run abort with
//! [`HerdingError::RetryExhausted`](prelude::HerdingError::RetryExhausted).
//! Non-finite values encountered mid-run abort immediately rather than
//! corrupting later super-samples.
//!
//! ```rust
//! use herding_rs::prelude::*;
//!
//! let model = Herding::new().gamma(0.5).count(8).build()?;
//! match model.herd(&[1.0, 2.0, 3.0, 2.5]) {
//!     Ok(result) => println!("selected {} points", result.len()),
//!     Err(e) => eprintln!("herding failed: {}", e),
//! }
//! # Result::<(), HerdingError>::Ok(())
//! ```
//!
//! ## Diagnostics
//!
//! The evaluation helpers compute the running mean-estimation error
//! `‖μ − mean(first i points)‖` for comparing a herded sequence against an
//! independently drawn one of the same length:
//!
//! ```rust
//! use herding_rs::prelude::*;
//!
//! let points = vec![0.0, 0.0, 2.0, 2.0]; // two 2-D points
//! let errors = running_mean_error(&points, 2, &[1.0, 1.0]);
//! assert_eq!(errors.len(), 2);
//! ```
//!
//! ## `no_std`
//!
//! The crate is `no_std`-capable (requires `alloc`). Disable default
//! features to drop the standard library:
//!
//! ```toml
//! [dependencies]
//! herding-rs = { version = "0.1", default-features = false }
//! ```
//!
//! ## References
//!
//! - Chen, Y., Welling, M. & Smola, A. (2010). "Super-Samples from Kernel
//!   Herding"
//! - Welling, M. (2009). "Herding Dynamical Weights to Learn"

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - error taxonomy.
mod primitives;

// Layer 2: Math - pure mathematical functions.
//
// Contains the radial kernel and its gradient, Euclidean distance with
// SIMD acceleration, search-bound derivation, and the linear-algebra
// backend trait used by the quasi-Newton minimizer.
mod math;

// Layer 3: Algorithms - the herding objective and the bounded minimizer.
//
// Contains the attraction/repulsion terms, their analytic gradients, and
// the box-constrained projected-BFGS local minimizer behind the pluggable
// `BoundedMinimizer` trait.
mod algorithms;

// Layer 4: Evaluation - post-run diagnostics.
//
// Contains the running mean-estimation error used to compare herded
// sequences against independent draws.
mod evaluation;

// Layer 5: Engine - orchestration and execution control.
//
// Contains input validation, the sequential herding loop with its
// warm-start and reseed policies, and result assembly.
mod engine;

// High-level fluent API for kernel herding.
//
// Provides the `Herding` builder for configuring and running a herding
// pass over a sample set.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard kernel-herding prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use herding_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::algorithms::objective::{
        attraction, repulsion, HerdingObjective, ObjectiveFunction,
    };
    pub use crate::algorithms::optimizer::{BoundedMinimizer, ProjectedBfgs};
    pub use crate::api::{Herder, HerdingBuilder as Herding};
    pub use crate::engine::executor::HerdingConfig;
    pub use crate::engine::output::HerdingResult;
    pub use crate::evaluation::diagnostics::{mean_point, running_mean_error};
    pub use crate::math::distance::SearchBounds;
    pub use crate::primitives::errors::HerdingError;
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing
/// purposes. It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change
/// without notice. Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal core algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal evaluation and diagnostics.
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
