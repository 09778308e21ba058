//! Error types for kernel herding.
//!
//! ## Purpose
//!
//! This module defines the crate-wide error taxonomy. Errors split into two
//! families: precondition violations detected before any computation starts
//! (empty input, bad hyperparameters), and run failures surfaced while the
//! herding loop is executing (retry exhaustion, non-finite values).
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Precondition errors are produced by the validator before
//!   the loop touches the data.
//! * **No Silent Recovery**: Numerical failures abort the run; an invalid
//!   super-sample would silently corrupt every later one.
//! * **no_std**: `Display` is hand-written; `std::error::Error` is
//!   implemented only when the `std` feature is enabled.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;

// External dependencies
use core::fmt;

// ============================================================================
// Error Type
// ============================================================================

/// Errors produced by configuration validation or by a herding run.
#[derive(Debug, Clone, PartialEq)]
pub enum HerdingError {
    /// The sample set is empty.
    EmptyInput,

    /// The sample buffer length is incompatible with the configured number
    /// of dimensions.
    MismatchedDimensions {
        /// Length of the flattened sample buffer.
        len: usize,
        /// Configured coordinates per point.
        dimensions: usize,
    },

    /// The kernel width gamma is not finite or not positive.
    InvalidGamma(f64),

    /// The requested super-sample count is zero.
    InvalidCount(usize),

    /// The convergence tolerance is not finite or not positive.
    InvalidTolerance(f64),

    /// The retry cap is zero.
    InvalidRetryCap(usize),

    /// A non-finite value was found in the input.
    InvalidNumericValue(String),

    /// The optimizer produced a non-finite candidate or objective value.
    NumericalFailure {
        /// Index of the super-sample being searched for when the failure
        /// occurred.
        iteration: usize,
    },

    /// Consecutive reseed attempts were exhausted for a single iteration.
    RetryExhausted {
        /// Index of the super-sample being searched for.
        iteration: usize,
        /// Number of consecutive failed attempts.
        attempts: usize,
    },

    /// A builder parameter was set more than once.
    DuplicateParameter {
        /// Name of the duplicated parameter.
        parameter: &'static str,
    },
}

impl fmt::Display for HerdingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "Input sample set is empty"),
            Self::MismatchedDimensions { len, dimensions } => write!(
                f,
                "Sample buffer of length {} is not divisible into {}-dimensional points",
                len, dimensions
            ),
            Self::InvalidGamma(gamma) => {
                write!(f, "Invalid gamma: {} (must be finite and > 0)", gamma)
            }
            Self::InvalidCount(count) => {
                write!(f, "Invalid count: {} (must be at least 1)", count)
            }
            Self::InvalidTolerance(tol) => {
                write!(f, "Invalid tolerance: {} (must be finite and > 0)", tol)
            }
            Self::InvalidRetryCap(cap) => {
                write!(f, "Invalid retry_cap: {} (must be at least 1)", cap)
            }
            Self::InvalidNumericValue(detail) => {
                write!(f, "Invalid numeric value: {}", detail)
            }
            Self::NumericalFailure { iteration } => write!(
                f,
                "Non-finite value produced while searching for super-sample {}",
                iteration
            ),
            Self::RetryExhausted {
                iteration,
                attempts,
            } => write!(
                f,
                "Retry cap exhausted at super-sample {}: {} consecutive failed attempts",
                iteration, attempts
            ),
            Self::DuplicateParameter { parameter } => write!(
                f,
                "Parameter '{}' was set multiple times. Each parameter can only be configured once.",
                parameter
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for HerdingError {}
