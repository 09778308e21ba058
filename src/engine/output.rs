//! Result type returned by a herding run.
//!
//! ## Purpose
//!
//! This module defines [`HerdingResult`], the immutable artifact handed to
//! the caller once a run completes: the super-sample sequence plus run
//! metadata and the reseed diagnostic counter.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt;
use num_traits::Float;

// ============================================================================
// Herding Result
// ============================================================================

/// The outcome of a completed herding run.
#[derive(Debug, Clone, PartialEq)]
pub struct HerdingResult<T> {
    /// Flattened row-major super-samples, in acceptance order.
    pub super_samples: Vec<T>,

    /// Coordinates per point.
    pub dimensions: usize,

    /// Kernel width used for the run.
    pub gamma: T,

    /// Total failed optimization attempts recovered by reseeding.
    ///
    /// Diagnostic only; not part of the primary contract.
    pub failures: usize,
}

impl<T: Float> HerdingResult<T> {
    /// Number of super-samples in the sequence.
    pub fn len(&self) -> usize {
        self.super_samples.len() / self.dimensions
    }

    /// Whether the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.super_samples.is_empty()
    }

    /// The `i`-th super-sample as a coordinate slice.
    pub fn point(&self, i: usize) -> &[T] {
        &self.super_samples[i * self.dimensions..(i + 1) * self.dimensions]
    }

    /// Iterate over super-samples in acceptance order.
    pub fn iter_points(&self) -> impl Iterator<Item = &[T]> {
        self.super_samples.chunks_exact(self.dimensions)
    }
}

impl<T: Float + fmt::Display> fmt::Display for HerdingResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const MAX_ROWS: usize = 10;

        writeln!(f, "Summary:")?;
        writeln!(f, "  Super-samples: {}", self.len())?;
        writeln!(f, "  Dimensions: {}", self.dimensions)?;
        writeln!(f, "  Gamma: {}", self.gamma)?;
        writeln!(f, "  Reseeds: {}", self.failures)?;
        writeln!(f)?;
        writeln!(f, "Super-Samples:")?;

        let shown = self.len().min(MAX_ROWS);
        for (i, point) in self.iter_points().take(shown).enumerate() {
            write!(f, "  {:>4}", i)?;
            for coord in point {
                write!(f, "  {:>12.5}", coord)?;
            }
            writeln!(f)?;
        }
        if self.len() > shown {
            writeln!(f, "  ... ({} more rows)", self.len() - shown)?;
        }
        Ok(())
    }
}
