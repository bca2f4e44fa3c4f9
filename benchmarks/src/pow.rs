use rand::Rng;
use rand::rngs::StdRng;
use tracing::info;

use crate::common::{accuracy, print_report, time_sum};

pub const POW_SAMPLE_COUNT: usize = 100_000;

fn pow_pair((base, exponent): (f64, f64)) -> f64 {
    minimath::pow(base, exponent)
}

fn powf_pair((base, exponent): (f64, f64)) -> f64 {
    base.powf(exponent)
}

/// Fractional exponents: the `exp(y * ln(x))` path.
pub fn run_pow_benchmark(rng: &mut StdRng) {
    let inputs: Vec<(f64, f64)> = (0..POW_SAMPLE_COUNT)
        .map(|_| (rng.gen_range(1e-3..1e3), rng.gen_range(-20.0..20.0)))
        .collect();
    info!(samples = inputs.len(), "running pow benchmark");

    let float_result = time_sum(&inputs, powf_pair);
    let minimath_result = time_sum(&inputs, pow_pair);
    let accuracy_result = accuracy(&inputs, pow_pair, powf_pair);

    print_report(
        "pow (log/exp) benchmark",
        inputs.len(),
        &float_result,
        &minimath_result,
        &accuracy_result,
    );
}

/// Integer exponents: the exponentiation-by-squaring path.
pub fn run_pow_integer_benchmark(rng: &mut StdRng) {
    let inputs: Vec<(f64, f64)> = (0..POW_SAMPLE_COUNT)
        .map(|_| (rng.gen_range(1e-3..1e3), f64::from(rng.gen_range(-40_i32..40))))
        .collect();
    info!(samples = inputs.len(), "running pow-integer benchmark");

    let float_result = time_sum(&inputs, powf_pair);
    let minimath_result = time_sum(&inputs, pow_pair);
    let accuracy_result = accuracy(&inputs, pow_pair, powf_pair);

    print_report(
        "pow (integer exponent) benchmark",
        inputs.len(),
        &float_result,
        &minimath_result,
        &accuracy_result,
    );
}
