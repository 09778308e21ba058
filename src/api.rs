//! High-level API for kernel herding.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point: a fluent
//! builder for configuring a herding run, validated at `build()`, and the
//! [`Herder`] model that executes runs over sample sets.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all
//!   parameters.
//! * **Validated**: Parameters are checked once, when `build()` is called;
//!   sample data is checked per run.
//! * **Type-Safe**: Generic over float types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`HerdingBuilder`] via `Herding::new()`.
//! 2. Chain configuration methods (`.gamma()`, `.count()`, etc.).
//! 3. Call `.build()` to obtain a validated [`Herder`].
//! 4. Call `.herd(&samples)` to run.

// Internal dependencies
use crate::algorithms::optimizer::{BoundedMinimizer, ProjectedBfgs};
use crate::engine::executor::{HerdingConfig, HerdingExecutor};
use crate::engine::validator::Validator;
use crate::math::distance::DistanceLinalg;
use crate::math::linalg::FloatLinalg;

// Publicly re-exported types
pub use crate::engine::output::HerdingResult;
pub use crate::primitives::errors::HerdingError;

// ============================================================================
// Herding Builder
// ============================================================================

/// Fluent builder for configuring a kernel-herding run.
#[derive(Debug, Clone)]
pub struct HerdingBuilder<T: FloatLinalg + DistanceLinalg> {
    /// Radial kernel width.
    pub gamma: Option<T>,

    /// Number of super-samples to produce.
    pub count: Option<usize>,

    /// Coordinates per point (default: 1).
    pub dimensions: Option<usize>,

    /// Seed for reseed draws after failed attempts.
    pub seed: Option<u64>,

    /// Maximum consecutive failed attempts per iteration.
    pub retry_cap: Option<usize>,

    /// Objective convergence tolerance.
    pub tolerance: Option<T>,

    /// Quasi-Newton iteration cap per optimization sub-problem.
    pub max_iterations: Option<usize>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: FloatLinalg + DistanceLinalg> Default for HerdingBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FloatLinalg + DistanceLinalg> HerdingBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            gamma: None,
            count: None,
            dimensions: None,
            seed: None,
            retry_cap: None,
            tolerance: None,
            max_iterations: None,
            duplicate_param: None,
        }
    }

    /// Set the radial kernel width (must be finite and positive).
    pub fn gamma(mut self, gamma: T) -> Self {
        if self.gamma.is_some() {
            self.duplicate_param = Some("gamma");
        }
        self.gamma = Some(gamma);
        self
    }

    /// Set the number of super-samples to produce.
    pub fn count(mut self, count: usize) -> Self {
        if self.count.is_some() {
            self.duplicate_param = Some("count");
        }
        self.count = Some(count);
        self
    }

    /// Set the number of coordinates per point.
    pub fn dimensions(mut self, dimensions: usize) -> Self {
        if self.dimensions.is_some() {
            self.duplicate_param = Some("dimensions");
        }
        self.dimensions = Some(dimensions);
        self
    }

    /// Set the seed for reseed draws.
    ///
    /// The seed only affects recovery from failed optimization attempts;
    /// with the same inputs and seed, runs are bit-identical.
    pub fn seed(mut self, seed: u64) -> Self {
        if self.seed.is_some() {
            self.duplicate_param = Some("seed");
        }
        self.seed = Some(seed);
        self
    }

    /// Set the maximum consecutive failed attempts per iteration
    /// (default: 10 × count).
    pub fn retry_cap(mut self, retry_cap: usize) -> Self {
        if self.retry_cap.is_some() {
            self.duplicate_param = Some("retry_cap");
        }
        self.retry_cap = Some(retry_cap);
        self
    }

    /// Set the objective convergence tolerance.
    pub fn tolerance(mut self, tolerance: T) -> Self {
        if self.tolerance.is_some() {
            self.duplicate_param = Some("tolerance");
        }
        self.tolerance = Some(tolerance);
        self
    }

    /// Set the quasi-Newton iteration cap per optimization sub-problem.
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        if self.max_iterations.is_some() {
            self.duplicate_param = Some("max_iterations");
        }
        self.max_iterations = Some(max_iterations);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Validate the configuration and build a [`Herder`].
    pub fn build(self) -> Result<Herder<T>, HerdingError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let defaults = HerdingConfig::<T>::default();

        let count = self.count.unwrap_or(defaults.count);
        let config = HerdingConfig {
            gamma: self.gamma.unwrap_or(defaults.gamma),
            count,
            dimensions: self.dimensions.unwrap_or(defaults.dimensions),
            seed: self.seed.unwrap_or(defaults.seed),
            retry_cap: self.retry_cap.unwrap_or(10 * count.max(1)),
            tolerance: self.tolerance.unwrap_or(defaults.tolerance),
        };

        Validator::validate_gamma(config.gamma)?;
        Validator::validate_count(config.count)?;
        Validator::validate_tolerance(config.tolerance)?;
        Validator::validate_retry_cap(config.retry_cap)?;
        if config.dimensions == 0 {
            return Err(HerdingError::MismatchedDimensions {
                len: 0,
                dimensions: 0,
            });
        }

        let minimizer = ProjectedBfgs::new(self.max_iterations.unwrap_or(200).max(1));

        Ok(Herder { config, minimizer })
    }
}

// ============================================================================
// Herder
// ============================================================================

/// A validated kernel-herding model.
#[derive(Debug, Clone)]
pub struct Herder<T> {
    config: HerdingConfig<T>,
    minimizer: ProjectedBfgs,
}

impl<T: FloatLinalg + DistanceLinalg> Herder<T> {
    /// Run herding over a flattened row-major sample buffer.
    ///
    /// `samples.len()` must be a non-zero multiple of the configured
    /// dimensions, with every coordinate finite.
    pub fn herd(&self, samples: &[T]) -> Result<HerdingResult<T>, HerdingError> {
        self.herd_with_minimizer(samples, &self.minimizer)
    }

    /// Run herding with a caller-supplied bounded minimizer.
    ///
    /// Any box-constrained gradient-based method can be substituted here
    /// without touching the engine.
    pub fn herd_with_minimizer<M: BoundedMinimizer<T>>(
        &self,
        samples: &[T],
        minimizer: &M,
    ) -> Result<HerdingResult<T>, HerdingError> {
        Validator::validate_samples(samples, self.config.dimensions)?;
        HerdingExecutor::new(self.config.clone(), samples).run(samples, minimizer)
    }

    /// The run configuration this model was built with.
    pub fn config(&self) -> &HerdingConfig<T> {
        &self.config
    }
}
