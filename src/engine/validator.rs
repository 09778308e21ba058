//! Input validation for herding configuration and data.
//!
//! ## Purpose
//!
//! This module provides validation functions for herding configuration
//! parameters and input data. It checks requirements such as sample-buffer
//! shape, finite values, and parameter bounds.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not transform or filter input data.
//! * This module does not perform the herding loop itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::HerdingError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for herding configuration and input data.
///
/// Provides static methods returning `Result<(), HerdingError>` that fail
/// fast upon the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate the flattened sample buffer against the configured
    /// dimensionality.
    pub fn validate_samples<T: Float>(
        samples: &[T],
        dimensions: usize,
    ) -> Result<(), HerdingError> {
        // Check 1: A point needs at least one coordinate
        if dimensions == 0 {
            return Err(HerdingError::MismatchedDimensions {
                len: samples.len(),
                dimensions,
            });
        }

        // Check 2: Non-empty sample set
        if samples.is_empty() {
            return Err(HerdingError::EmptyInput);
        }

        // Check 3: Whole number of points
        if samples.len() % dimensions != 0 {
            return Err(HerdingError::MismatchedDimensions {
                len: samples.len(),
                dimensions,
            });
        }

        // Check 4: All coordinates finite
        for (i, &val) in samples.iter().enumerate() {
            if !val.is_finite() {
                return Err(HerdingError::InvalidNumericValue(format!(
                    "sample[{}]={}",
                    i,
                    val.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the kernel width hyperparameter.
    pub fn validate_gamma<T: Float>(gamma: T) -> Result<(), HerdingError> {
        if !gamma.is_finite() || gamma <= T::zero() {
            return Err(HerdingError::InvalidGamma(
                gamma.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate the requested super-sample count.
    pub fn validate_count(count: usize) -> Result<(), HerdingError> {
        if count < 1 {
            return Err(HerdingError::InvalidCount(count));
        }
        Ok(())
    }

    /// Validate the objective convergence tolerance.
    pub fn validate_tolerance<T: Float>(tolerance: T) -> Result<(), HerdingError> {
        if !tolerance.is_finite() || tolerance <= T::zero() {
            return Err(HerdingError::InvalidTolerance(
                tolerance.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate the consecutive-failure retry cap.
    pub fn validate_retry_cap(retry_cap: usize) -> Result<(), HerdingError> {
        if retry_cap < 1 {
            return Err(HerdingError::InvalidRetryCap(retry_cap));
        }
        Ok(())
    }

    /// Validate that no builder parameters were set multiple times.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), HerdingError> {
        if let Some(parameter) = duplicate_param {
            return Err(HerdingError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
