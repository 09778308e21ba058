//! Bounded local minimization.
//!
//! ## Purpose
//!
//! This module provides the box-constrained local minimizer invoked once per
//! herding iteration. The minimizer is an abstract capability (objective
//! in, bounds in, candidate point out), so any box-constrained
//! gradient-based method can be substituted without touching the engine.
//!
//! ## Design notes
//!
//! * **Default strategy**: projected BFGS. The inverse-Hessian
//!   approximation supplies a quasi-Newton descent direction; a backtracking
//!   line search clamps every trial point into the box.
//! * **Termination**: the search stops when the objective improvement drops
//!   to the configured tolerance, when backtracking can no longer improve,
//!   or at a hard iteration cap. The cap is the deterministic stand-in for
//!   a per-call timeout.
//! * **Curvature guard**: the rank-two update is skipped (and the
//!   approximation reset to the identity) when `sᵀy` is not positive.
//!
//! ## Invariants
//!
//! * Returned candidates always lie inside the closed box.
//! * Identical inputs produce identical outputs; there is no internal
//!   randomness.
//!
//! ## Non-goals
//!
//! * Global optimality: this is a local method; the engine's reseed policy
//!   supplies restarts.
//! * Convergence reporting: the engine infers failure from its own bounds
//!   check, not from an optimizer flag.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::objective::ObjectiveFunction;
use crate::math::distance::SearchBounds;
use crate::math::linalg::FloatLinalg;

// ============================================================================
// BoundedMinimizer Trait
// ============================================================================

/// A box-constrained local scalar-function minimizer.
pub trait BoundedMinimizer<T: Float> {
    /// Minimize `objective` starting from `start`, constraining every
    /// coordinate of the result to `bounds`, with convergence measured on
    /// the objective value against `tolerance`.
    fn minimize<F: ObjectiveFunction<T>>(
        &self,
        objective: &F,
        start: &[T],
        bounds: SearchBounds<T>,
        tolerance: T,
    ) -> Vec<T>;
}

// ============================================================================
// Projected BFGS
// ============================================================================

/// Projected BFGS with backtracking line search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectedBfgs {
    /// Hard cap on quasi-Newton iterations per call.
    pub max_iterations: usize,
}

impl Default for ProjectedBfgs {
    fn default() -> Self {
        Self {
            max_iterations: 200,
        }
    }
}

impl ProjectedBfgs {
    /// Create a minimizer with the given iteration cap.
    pub fn new(max_iterations: usize) -> Self {
        Self { max_iterations }
    }
}

#[inline]
fn dot<T: Float>(a: &[T], b: &[T]) -> T {
    a.iter()
        .zip(b.iter())
        .map(|(&ai, &bi)| ai * bi)
        .fold(T::zero(), |acc, v| acc + v)
}

impl<T: FloatLinalg> BoundedMinimizer<T> for ProjectedBfgs {
    fn minimize<F: ObjectiveFunction<T>>(
        &self,
        objective: &F,
        start: &[T],
        bounds: SearchBounds<T>,
        tolerance: T,
    ) -> Vec<T> {
        let n = objective.dimensions();
        debug_assert_eq!(start.len(), n);

        let half = T::from(0.5).unwrap();
        let alpha_min = T::from(1e-12).unwrap();

        let mut x = start.to_vec();
        bounds.clamp_point(&mut x);

        let mut value = objective.value(&x);
        let mut grad = vec![T::zero(); n];
        objective.gradient(&x, &mut grad);

        let mut h_inv = T::identity(n);
        let mut x_new = vec![T::zero(); n];
        let mut grad_new = vec![T::zero(); n];
        let mut s = vec![T::zero(); n];
        let mut y = vec![T::zero(); n];

        for _ in 0..self.max_iterations {
            let mut direction = T::descent_direction(&h_inv, &grad, n);

            // A stale approximation can propose an ascent direction; fall
            // back to steepest descent and start the curvature model over.
            if !(dot(&grad, &direction) < T::zero()) {
                h_inv = T::identity(n);
                for (d, &g) in direction.iter_mut().zip(grad.iter()) {
                    *d = -g;
                }
            }

            // Backtracking line search with projection into the box.
            let mut alpha = T::one();
            let mut value_new = value;
            let mut improved = false;
            while alpha >= alpha_min {
                for dim in 0..n {
                    x_new[dim] = x[dim] + alpha * direction[dim];
                }
                bounds.clamp_point(&mut x_new);

                let trial = objective.value(&x_new);
                if trial < value {
                    value_new = trial;
                    improved = true;
                    break;
                }
                alpha = alpha * half;
            }

            if !improved {
                // No descent step exists at this resolution; x is locally
                // optimal within the box.
                break;
            }

            objective.gradient(&x_new, &mut grad_new);

            for dim in 0..n {
                s[dim] = x_new[dim] - x[dim];
                y[dim] = grad_new[dim] - grad[dim];
            }
            let curvature = dot(&s, &y);
            if curvature > T::epsilon() {
                T::bfgs_update(&mut h_inv, &s, &y, n);
            } else {
                h_inv = T::identity(n);
            }

            let improvement = value - value_new;
            x.copy_from_slice(&x_new);
            grad.copy_from_slice(&grad_new);
            value = value_new;

            if improvement <= tolerance {
                break;
            }
        }

        x
    }
}
