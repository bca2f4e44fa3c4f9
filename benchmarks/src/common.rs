use std::fmt::Debug;
use std::hint::black_box;
use std::time::{Duration, Instant};

use rand::Rng;
use rand::rngs::StdRng;

/// Result of timing one implementation over a batch of inputs.
#[derive(Debug)]
pub struct BenchmarkResult {
    pub duration: Duration,
    pub total: f64,
}

/// Accuracy of minimath against the standard library over the same inputs.
#[derive(Debug)]
pub struct Accuracy {
    pub max_relative_error: f64,
    pub mean_relative_error: f64,
    pub worst_input: String,
}

/// Draws a positive value whose binary exponent is uniform in `min_exp..max_exp`.
pub fn log_uniform(rng: &mut StdRng, min_exp: i32, max_exp: i32) -> f64 {
    let fraction: f64 = rng.gen_range(1.0..2.0);
    fraction * 2f64.powi(rng.gen_range(min_exp..max_exp))
}

/// Sums `f` over `inputs` and times it.
pub fn time_sum<T: Copy>(inputs: &[T], f: impl Fn(T) -> f64) -> BenchmarkResult {
    let start = Instant::now();
    let mut total = 0.0;
    for &input in inputs {
        total += black_box(f(black_box(input)));
    }
    BenchmarkResult {
        duration: start.elapsed(),
        total,
    }
}

/// Compares `actual` with `reference` input by input.
pub fn accuracy<T: Copy + Debug>(
    inputs: &[T],
    actual: impl Fn(T) -> f64,
    reference: impl Fn(T) -> f64,
) -> Accuracy {
    let mut max_relative_error = 0.0;
    let mut sum = 0.0;
    let mut worst_input = String::from("-");

    for &input in inputs {
        let expected = reference(input);
        let error = if expected == 0.0 {
            actual(input).abs()
        } else {
            ((actual(input) - expected) / expected).abs()
        };
        sum += error;
        if error > max_relative_error {
            max_relative_error = error;
            worst_input = format!("{input:?}");
        }
    }

    Accuracy {
        max_relative_error,
        mean_relative_error: sum / inputs.len().max(1) as f64,
        worst_input,
    }
}

pub fn print_report(
    title: &str,
    samples: usize,
    float: &BenchmarkResult,
    minimath: &BenchmarkResult,
    accuracy: &Accuracy,
) {
    let slowdown = minimath.duration.as_secs_f64() / float.duration.as_secs_f64();

    println!("== {title} ==");
    println!("samples: {samples}");
    println!("float time:    {:?}", float.duration);
    println!("minimath time: {:?}", minimath.duration);
    println!("slowdown factor: {slowdown:.2}x");
    println!("float total:    {:e}", float.total);
    println!("minimath total: {:e}", minimath.total);
    println!("max relative error:  {:e}", accuracy.max_relative_error);
    println!("mean relative error: {:e}", accuracy.mean_relative_error);
    println!("worst input: {}", accuracy.worst_input);
}
