use rand::rngs::StdRng;
use tracing::info;

use crate::common::{accuracy, log_uniform, print_report, time_sum};

pub const SQRT_SAMPLE_COUNT: usize = 100_000;

pub fn run_sqrt_benchmark(rng: &mut StdRng) {
    // every binade of the positive normal range, rescaled inputs included
    let inputs: Vec<f64> = (0..SQRT_SAMPLE_COUNT)
        .map(|_| log_uniform(rng, -1022, 1023))
        .collect();
    info!(samples = inputs.len(), "running sqrt benchmark");

    let float_result = time_sum(&inputs, f64::sqrt);
    let minimath_result = time_sum(&inputs, minimath::sqrt);
    let accuracy_result = accuracy(&inputs, minimath::sqrt, f64::sqrt);

    print_report(
        "sqrt (Newton-Raphson) benchmark",
        inputs.len(),
        &float_result,
        &minimath_result,
        &accuracy_result,
    );
}
