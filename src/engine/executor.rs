//! Execution engine for the sequential herding loop.
//!
//! ## Purpose
//!
//! This module owns the herding run: the growing super-sample sequence, the
//! seed-selection policy that warm-starts each optimization, and the
//! reseed-on-failure policy that recovers from optimizer divergence. Each
//! iteration builds the current objective, invokes the bounded minimizer as
//! an opaque blocking call, and either accepts the candidate or retries
//! from a randomly drawn sample point.
//!
//! ## Design notes
//!
//! * **Explicit state**: Accumulating buffers and counters live in
//!   `HerdingExecutor` fields so a single iteration (`step`) is
//!   independently testable.
//! * **Strictly sequential**: Iteration `i + 1`'s objective depends on every
//!   point accepted through iteration `i`; there is no intra-run
//!   parallelism.
//! * **Bounded retries**: The reseed loop carries a consecutive-failure cap
//!   so a divergent minimizer surfaces `RetryExhausted` instead of hanging.
//! * **Warm start**: After each acceptance, the objective (now including
//!   the new point) is re-evaluated at every accepted point and the arg-min
//!   becomes the next seed. This re-evaluation is O(i²) over a full run and
//!   is kept as-is; replacing it could change which seed is selected.
//!
//! ## Key concepts
//!
//! * **Pre-seated origin**: Super-sample 0 is the origin clamped into the
//!   search bounds, accepted without optimization.
//! * **Degenerate bounds**: When the sample range collapses to a single
//!   value, every iteration succeeds immediately at the sole feasible point
//!   and the minimizer is never invoked.
//!
//! ## Invariants
//!
//! * Every accepted coordinate lies within the closed search bounds.
//! * The accepted sequence grows monotonically by append; entries are
//!   immutable once accepted.
//! * No point produced by a failed attempt ever enters the sequence.
//! * Runs with identical inputs and seed are bit-identical.
//!
//! ## Non-goals
//!
//! * This module does not validate input data (handled by `validator`).
//! * This module does not construct sample sets or estimate densities.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::objective::{HerdingObjective, ObjectiveFunction};
use crate::algorithms::optimizer::BoundedMinimizer;
use crate::engine::output::HerdingResult;
use crate::math::distance::{DistanceLinalg, SearchBounds};
use crate::math::linalg::FloatLinalg;
use crate::primitives::errors::HerdingError;

// ============================================================================
// Internal PRNG
// ============================================================================

/// Minimal PRNG for reseed draws.
///
/// Uses an LCG (Linear Congruential Generator) with constants from PCG/MQL.
#[derive(Debug, Clone)]
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_u32(&mut self) -> u32 {
        // LCG constants for 64-bit state
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for a herding run.
#[derive(Debug, Clone, PartialEq)]
pub struct HerdingConfig<T> {
    /// Radial kernel width (`γ > 0`).
    pub gamma: T,

    /// Number of super-samples to produce (N ≥ 1).
    pub count: usize,

    /// Coordinates per point.
    pub dimensions: usize,

    /// Seed for reseed draws after failed attempts.
    pub seed: u64,

    /// Maximum consecutive failed attempts for a single iteration.
    pub retry_cap: usize,

    /// Objective convergence tolerance passed to the minimizer.
    pub tolerance: T,
}

impl<T: Float> Default for HerdingConfig<T> {
    fn default() -> Self {
        Self {
            gamma: T::one(),
            count: 100,
            dimensions: 1,
            seed: 0,
            retry_cap: 1000,
            tolerance: T::from(1e-10).unwrap(),
        }
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Sequential kernel-herding executor.
///
/// Owns the growing super-sample sequence for the duration of a run and
/// hands it off immutably inside [`HerdingResult`].
#[derive(Debug, Clone)]
pub struct HerdingExecutor<T> {
    config: HerdingConfig<T>,
    bounds: SearchBounds<T>,
    /// Flattened accepted super-samples; grows by `dimensions` per append.
    accepted: Vec<T>,
    seed_point: Vec<T>,
    failures: usize,
    rng: SimpleRng,
}

impl<T: FloatLinalg + DistanceLinalg> HerdingExecutor<T> {
    /// Create an executor with super-sample 0 pre-seated.
    ///
    /// The initial point is the origin clamped per-coordinate into the
    /// search bounds derived from `samples`; it doubles as the first seed.
    pub fn new(config: HerdingConfig<T>, samples: &[T]) -> Self {
        let bounds = SearchBounds::from_samples(samples);

        let mut seed_point = vec![T::zero(); config.dimensions];
        bounds.clamp_point(&mut seed_point);

        let mut accepted = Vec::with_capacity(config.count * config.dimensions);
        accepted.extend_from_slice(&seed_point);

        let rng = SimpleRng::new(config.seed);
        Self {
            config,
            bounds,
            accepted,
            seed_point,
            failures: 0,
            rng,
        }
    }

    /// Number of super-samples accepted so far.
    pub fn accepted_count(&self) -> usize {
        self.accepted.len() / self.config.dimensions
    }

    /// Total failed attempts recovered by reseeding so far.
    pub fn failures(&self) -> usize {
        self.failures
    }

    /// Search bounds derived from the sample set.
    pub fn bounds(&self) -> SearchBounds<T> {
        self.bounds
    }

    /// Run the loop to completion and hand off the result.
    pub fn run<M: BoundedMinimizer<T>>(
        mut self,
        samples: &[T],
        minimizer: &M,
    ) -> Result<HerdingResult<T>, HerdingError> {
        while self.accepted_count() < self.config.count {
            self.step(samples, minimizer)?;
        }
        Ok(HerdingResult {
            super_samples: self.accepted,
            dimensions: self.config.dimensions,
            gamma: self.config.gamma,
            failures: self.failures,
        })
    }

    /// Produce the next super-sample: one full iteration, including any
    /// reseed retries.
    pub fn step<M: BoundedMinimizer<T>>(
        &mut self,
        samples: &[T],
        minimizer: &M,
    ) -> Result<(), HerdingError> {
        let dimensions = self.config.dimensions;
        let iteration = self.accepted_count();

        // Degenerate box: the sole feasible point is accepted outright.
        if self.bounds.is_degenerate() {
            let point = vec![self.bounds.min; dimensions];
            self.accepted.extend_from_slice(&point);
            return Ok(());
        }

        let slack = self.bounds.slack();
        let mut attempts = 0usize;

        loop {
            let candidate = {
                let objective = HerdingObjective::new(
                    samples,
                    &self.accepted,
                    iteration,
                    dimensions,
                    self.config.gamma,
                );
                let candidate = minimizer.minimize(
                    &objective,
                    &self.seed_point,
                    self.bounds,
                    self.config.tolerance,
                );

                // Corrupted numerics would invalidate every later point.
                if candidate.iter().any(|c| !c.is_finite())
                    || !objective.value(&candidate).is_finite()
                {
                    return Err(HerdingError::NumericalFailure { iteration });
                }
                candidate
            };

            if self.bounds.contains(&candidate, slack) {
                let mut point = candidate;
                self.bounds.clamp_point(&mut point);
                self.accepted.extend_from_slice(&point);
                self.select_next_seed(samples);
                return Ok(());
            }

            // Divergent attempt: count it, reseed, retry this iteration.
            self.failures += 1;
            attempts += 1;
            if attempts >= self.config.retry_cap {
                return Err(HerdingError::RetryExhausted {
                    iteration,
                    attempts,
                });
            }
            self.reseed_from_samples(samples);
        }
    }

    /// Warm-start policy: evaluate the updated objective (inclusive of the
    /// point just accepted) at every accepted super-sample and seed the
    /// next search from the arg-min.
    fn select_next_seed(&mut self, samples: &[T]) {
        let dimensions = self.config.dimensions;
        let count = self.accepted_count();

        let objective = HerdingObjective::new(
            samples,
            &self.accepted,
            count,
            dimensions,
            self.config.gamma,
        );

        let mut best_value = T::infinity();
        let mut best_index = 0;
        for j in 0..count {
            let point = &self.accepted[j * dimensions..(j + 1) * dimensions];
            let value = objective.value(point);
            if value < best_value {
                best_value = value;
                best_index = j;
            }
        }

        let offset = best_index * dimensions;
        for d in 0..dimensions {
            self.seed_point[d] = self.accepted[offset + d];
        }
    }

    /// Reseed the next attempt from a uniformly drawn sample point.
    fn reseed_from_samples(&mut self, samples: &[T]) {
        let dimensions = self.config.dimensions;
        let m = samples.len() / dimensions;
        let j = (self.rng.next_u32() as usize) % m;

        let offset = j * dimensions;
        for d in 0..dimensions {
            self.seed_point[d] = samples[offset + d];
        }
    }
}
