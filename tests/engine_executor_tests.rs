#![cfg(feature = "dev")]

use std::cell::Cell;

use herding_rs::internals::algorithms::objective::ObjectiveFunction;
use herding_rs::internals::algorithms::optimizer::{BoundedMinimizer, ProjectedBfgs};
use herding_rs::internals::engine::executor::{HerdingConfig, HerdingExecutor};
use herding_rs::internals::math::distance::SearchBounds;
use herding_rs::internals::primitives::errors::HerdingError;

// ============================================================================
// Mock Minimizers
// ============================================================================

/// Panics when invoked; proves the optimizer is never reached.
struct PanickingMinimizer;

impl BoundedMinimizer<f64> for PanickingMinimizer {
    fn minimize<F: ObjectiveFunction<f64>>(
        &self,
        _objective: &F,
        _start: &[f64],
        _bounds: SearchBounds<f64>,
        _tolerance: f64,
    ) -> Vec<f64> {
        panic!("minimizer must not be invoked");
    }
}

/// Always returns a point far outside the feasible box.
struct DivergentMinimizer;

impl BoundedMinimizer<f64> for DivergentMinimizer {
    fn minimize<F: ObjectiveFunction<f64>>(
        &self,
        objective: &F,
        _start: &[f64],
        bounds: SearchBounds<f64>,
        _tolerance: f64,
    ) -> Vec<f64> {
        vec![bounds.max + 100.0; objective.dimensions()]
    }
}

/// Diverges on the first `bad_calls` invocations, then returns the box
/// midpoint.
struct FlakyMinimizer {
    bad_calls: usize,
    calls: Cell<usize>,
}

impl BoundedMinimizer<f64> for FlakyMinimizer {
    fn minimize<F: ObjectiveFunction<f64>>(
        &self,
        objective: &F,
        _start: &[f64],
        bounds: SearchBounds<f64>,
        _tolerance: f64,
    ) -> Vec<f64> {
        let call = self.calls.get();
        self.calls.set(call + 1);
        if call < self.bad_calls {
            vec![bounds.max + 1.0; objective.dimensions()]
        } else {
            vec![(bounds.min + bounds.max) / 2.0; objective.dimensions()]
        }
    }
}

/// Returns a NaN coordinate.
struct NanMinimizer;

impl BoundedMinimizer<f64> for NanMinimizer {
    fn minimize<F: ObjectiveFunction<f64>>(
        &self,
        objective: &F,
        _start: &[f64],
        _bounds: SearchBounds<f64>,
        _tolerance: f64,
    ) -> Vec<f64> {
        vec![f64::NAN; objective.dimensions()]
    }
}

fn config(count: usize, dimensions: usize) -> HerdingConfig<f64> {
    HerdingConfig {
        count,
        dimensions,
        ..HerdingConfig::default()
    }
}

// ============================================================================
// Boundary Behavior
// ============================================================================

#[test]
fn test_single_super_sample_skips_optimizer() {
    // samples in [1, 3]: the pre-seated origin clamps to 1 per coordinate
    let samples = [1.0, 2.0, 3.0, 1.5, 2.5, 1.0];
    let executor = HerdingExecutor::new(config(1, 2), &samples);

    let result = executor.run(&samples, &PanickingMinimizer).unwrap();

    assert_eq!(result.len(), 1);
    assert_eq!(result.point(0), &[1.0, 1.0]);
    assert_eq!(result.failures, 0);
}

#[test]
fn test_origin_kept_when_inside_bounds() {
    let samples = [-2.0, -1.0, 1.0, 2.0];
    let executor = HerdingExecutor::new(config(1, 1), &samples);

    let result = executor.run(&samples, &PanickingMinimizer).unwrap();
    assert_eq!(result.point(0), &[0.0]);
}

#[test]
fn test_degenerate_sample_set_terminates() {
    // a single repeated point collapses the box to zero width; every
    // iteration must succeed immediately without the optimizer
    let samples = [4.0, 4.0, 4.0, 4.0, 4.0, 4.0];
    let executor = HerdingExecutor::new(config(5, 2), &samples);

    let result = executor.run(&samples, &PanickingMinimizer).unwrap();

    assert_eq!(result.len(), 5);
    for point in result.iter_points() {
        assert_eq!(point, &[4.0, 4.0]);
    }
    assert_eq!(result.failures, 0);
}

// ============================================================================
// Invariants
// ============================================================================

#[test]
fn test_all_points_within_bounds() {
    let samples: Vec<f64> = (0..40).map(|i| (i as f64 * 0.37).sin() * 3.0).collect();
    let executor = HerdingExecutor::new(config(12, 1), &samples);
    let bounds = executor.bounds();

    let result = executor.run(&samples, &ProjectedBfgs::default()).unwrap();

    assert_eq!(result.len(), 12);
    for point in result.iter_points() {
        for &coord in point {
            assert!(coord >= bounds.min && coord <= bounds.max);
        }
    }
}

#[test]
fn test_step_appends_exactly_one_point() {
    let samples = [0.0, 1.0, 2.0, 3.0, 4.0];
    let mut executor = HerdingExecutor::new(config(10, 1), &samples);
    assert_eq!(executor.accepted_count(), 1);

    executor.step(&samples, &ProjectedBfgs::default()).unwrap();
    assert_eq!(executor.accepted_count(), 2);

    executor.step(&samples, &ProjectedBfgs::default()).unwrap();
    assert_eq!(executor.accepted_count(), 3);
}

#[test]
fn test_deterministic_for_fixed_seed() {
    let samples: Vec<f64> = (0..60).map(|i| ((i * 31 + 7) % 23) as f64 / 4.0).collect();

    let run = || {
        HerdingExecutor::new(config(8, 2), &samples)
            .run(&samples, &ProjectedBfgs::default())
            .unwrap()
    };

    let first = run();
    let second = run();

    assert_eq!(first.super_samples, second.super_samples);
    assert_eq!(first.failures, second.failures);
}

// ============================================================================
// Failure Policy
// ============================================================================

#[test]
fn test_reseed_recovers_from_divergence() {
    let samples = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
    let mut cfg = config(3, 1);
    cfg.retry_cap = 10;

    let minimizer = FlakyMinimizer {
        bad_calls: 4,
        calls: Cell::new(0),
    };
    let result = HerdingExecutor::new(cfg, &samples)
        .run(&samples, &minimizer)
        .unwrap();

    assert_eq!(result.len(), 3);
    // every divergent call was counted, none entered the sequence
    assert_eq!(result.failures, 4);
    for point in result.iter_points() {
        assert!(point[0] >= 0.0 && point[0] <= 5.0);
    }
}

#[test]
fn test_retry_exhaustion_is_fatal() {
    let samples = [0.0, 1.0, 2.0];
    let mut cfg = config(3, 1);
    cfg.retry_cap = 5;

    let err = HerdingExecutor::new(cfg, &samples)
        .run(&samples, &DivergentMinimizer)
        .unwrap_err();

    assert_eq!(
        err,
        HerdingError::RetryExhausted {
            iteration: 1,
            attempts: 5
        }
    );
}

#[test]
fn test_nan_candidate_is_fatal_not_retried() {
    let samples = [0.0, 1.0, 2.0];
    let err = HerdingExecutor::new(config(3, 1), &samples)
        .run(&samples, &NanMinimizer)
        .unwrap_err();

    assert_eq!(err, HerdingError::NumericalFailure { iteration: 1 });
}
