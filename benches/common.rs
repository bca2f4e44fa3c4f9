#![allow(dead_code)]

use std::env;

use rand::Rng;
use rand::rngs::StdRng;

/// Returns true when `MINIMATH_BENCH_VERBOSE` is set, to print accuracy alongside timings.
pub fn verbose() -> bool {
    env::var_os("MINIMATH_BENCH_VERBOSE").is_some()
}

/// Draws positive values whose binary exponent is uniform in `min_exp..max_exp`.
pub fn log_uniform_inputs(
    rng: &mut StdRng,
    count: usize,
    min_exp: i32,
    max_exp: i32,
) -> Vec<f64> {
    (0..count)
        .map(|_| {
            let fraction: f64 = rng.gen_range(1.0..2.0);
            fraction * 2f64.powi(rng.gen_range(min_exp..max_exp))
        })
        .collect()
}

/// Largest relative error of `actual` against `reference` over all inputs.
pub fn max_relative_error(
    inputs: &[f64],
    actual: impl Fn(f64) -> f64,
    reference: impl Fn(f64) -> f64,
) -> f64 {
    inputs
        .iter()
        .map(|&x| {
            let expected = reference(x);
            ((actual(x) - expected) / expected).abs()
        })
        .fold(0.0, f64::max)
}
