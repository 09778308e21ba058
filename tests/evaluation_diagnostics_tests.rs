#![cfg(feature = "dev")]

use approx::assert_relative_eq;
use herding_rs::internals::evaluation::diagnostics::{mean_point, running_mean_error};

// ============================================================================
// Mean Point Tests
// ============================================================================

#[test]
fn test_mean_point_2d() {
    let points = [0.0, 0.0, 2.0, 4.0, 4.0, 2.0];
    let mean = mean_point(&points, 2);
    assert_relative_eq!(mean[0], 2.0);
    assert_relative_eq!(mean[1], 2.0);
}

#[test]
fn test_mean_point_single() {
    let points = [3.0, -1.0, 0.5];
    let mean = mean_point(&points, 3);
    assert_eq!(mean, vec![3.0, -1.0, 0.5]);
}

#[test]
fn test_mean_point_empty() {
    let points: [f64; 0] = [];
    assert_eq!(mean_point(&points, 2), vec![0.0, 0.0]);
}

// ============================================================================
// Running Error Tests
// ============================================================================

#[test]
fn test_running_error_hand_computed_1d() {
    // target mean 0; points 2, -2:
    //   i=1: mean 2,  err 2
    //   i=2: mean 0,  err 0
    let points = [2.0, -2.0];
    let errors = running_mean_error(&points, 1, &[0.0]);

    assert_eq!(errors.len(), 2);
    assert_relative_eq!(errors[0], 2.0);
    assert_relative_eq!(errors[1], 0.0);
}

#[test]
fn test_running_error_hand_computed_2d() {
    // target mean (1, 1); points (0,0), (2,2):
    //   i=1: mean (0,0),  err √2
    //   i=2: mean (1,1),  err 0
    let points = [0.0, 0.0, 2.0, 2.0];
    let errors = running_mean_error(&points, 2, &[1.0, 1.0]);

    assert_relative_eq!(errors[0], 2.0f64.sqrt());
    assert_relative_eq!(errors[1], 0.0);
}

#[test]
fn test_running_error_constant_sequence() {
    // every prefix mean equals the repeated point itself
    let points = [5.0, 5.0, 5.0];
    let errors = running_mean_error(&points, 1, &[3.0]);
    for &err in &errors {
        assert_relative_eq!(err, 2.0);
    }
}
