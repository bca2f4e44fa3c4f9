//! Shared test utilities for the math operations.
//!
//! This module provides common helper functions used across test modules to reduce
//! code duplication and provide a consistent testing interface.

use rand::Rng;
use rand::rngs::StdRng;

/// Relative error of `actual` against a nonzero `expected`.
pub fn relative_error(actual: f64, expected: f64) -> f64 {
    ((actual - expected) / expected).abs()
}

/// Asserts that `actual` is within `tolerance` relative error of `expected`.
///
/// # Panics
/// Panics with both values and the observed error if the check fails.
pub fn assert_relative_eq(actual: f64, expected: f64, tolerance: f64) {
    let error = relative_error(actual, expected);
    assert!(
        error <= tolerance,
        "expected {expected:e}, got {actual:e} (relative error {error:e} > {tolerance:e})"
    );
}

/// Draws a positive value whose binary exponent is uniform in `min_exp..max_exp`.
///
/// Sampling the exponent rather than the value covers every binade evenly.
///
/// # Examples
/// ```ignore
/// let mut rng = StdRng::seed_from_u64(7);
/// let x = log_uniform(&mut rng, -10, 10); // somewhere in [2^-10, 2^10)
/// ```
pub fn log_uniform(rng: &mut StdRng, min_exp: i32, max_exp: i32) -> f64 {
    let exponent = rng.gen_range(min_exp..max_exp);
    let fraction: f64 = rng.gen_range(1.0..2.0);
    fraction * 2f64.powi(exponent)
}
