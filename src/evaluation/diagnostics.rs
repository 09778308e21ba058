//! Running mean-estimation error diagnostics.
//!
//! ## Purpose
//!
//! This module quantifies how quickly the running mean of a point sequence
//! converges to a target mean, the standard way to compare a herded
//! sequence against independent draws of the same length. It is pure
//! reporting: nothing here influences the herding loop.
//!
//! ## Key concepts
//!
//! * **Running error**: `errᵢ = ‖μ − (1/i) Σ_{j<i} xⱼ‖` for `i = 1..=n`.
//!
//! ## Non-goals
//!
//! * This module does not estimate the target mean from a model; callers
//!   supply it (typically the empirical mean of the full sample set).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::distance::{euclidean, DistanceLinalg};

// ============================================================================
// Diagnostics
// ============================================================================

/// Empirical mean of a flattened row-major point sequence.
///
/// Returns the zero vector for an empty sequence.
pub fn mean_point<T: Float>(points: &[T], dimensions: usize) -> Vec<T> {
    debug_assert!(dimensions > 0);
    debug_assert_eq!(points.len() % dimensions, 0);

    let n = points.len() / dimensions;
    let mut mean = vec![T::zero(); dimensions];
    if n == 0 {
        return mean;
    }

    for i in 0..n {
        for d in 0..dimensions {
            mean[d] = mean[d] + points[i * dimensions + d];
        }
    }
    let inv = T::one() / T::from(n).unwrap();
    for m in mean.iter_mut() {
        *m = *m * inv;
    }
    mean
}

/// Running mean-estimation error of a point sequence against `target_mean`.
///
/// Entry `i` (0-indexed) is the Euclidean distance between `target_mean`
/// and the mean of the first `i + 1` points.
pub fn running_mean_error<T: DistanceLinalg>(
    points: &[T],
    dimensions: usize,
    target_mean: &[T],
) -> Vec<T> {
    debug_assert!(dimensions > 0);
    debug_assert_eq!(points.len() % dimensions, 0);
    debug_assert_eq!(target_mean.len(), dimensions);

    let n = points.len() / dimensions;
    let mut accumulated = vec![T::zero(); dimensions];
    let mut mean = vec![T::zero(); dimensions];
    let mut errors = Vec::with_capacity(n);

    for i in 0..n {
        for d in 0..dimensions {
            accumulated[d] = accumulated[d] + points[i * dimensions + d];
        }
        let inv = T::one() / T::from(i + 1).unwrap();
        for d in 0..dimensions {
            mean[d] = accumulated[d] * inv;
        }
        errors.push(euclidean(&mean, target_mean));
    }
    errors
}
