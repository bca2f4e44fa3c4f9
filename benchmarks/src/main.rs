use std::collections::HashSet;
use std::env;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

mod common;
mod logging;
mod pow;
mod sqrt;

use logging::init_tracing;
use pow::{run_pow_benchmark, run_pow_integer_benchmark};
use sqrt::run_sqrt_benchmark;

/// Available benchmark names
const BENCHMARK_NAMES: &[&str] = &["sqrt", "pow", "pow-integer"];

const SEED_ENV: &str = "MINIMATH_SEED";
const DEFAULT_SEED: u64 = 7;

fn print_usage() {
    println!("Usage: benchmarks [OPTIONS] [BENCHMARK...]");
    println!();
    println!("Compare minimath's pow and sqrt against the standard library.");
    println!();
    println!("Options:");
    println!("  --help, -h       Show this help message");
    println!("  --list, -l       List available benchmarks");
    println!();
    println!("Arguments:");
    println!("  BENCHMARK        Benchmark(s) to run, by name or index (0-based)");
    println!("                   If no benchmarks specified, runs all benchmarks.");
    println!();
    println!("Environment:");
    println!("  {SEED_ENV}    RNG seed for the inputs (default {DEFAULT_SEED})");
    println!("  MINIMATH_LOG     tracing filter, e.g. 'minimath=trace'");
    println!();
    println!("Examples:");
    println!("  benchmarks                      # Run all benchmarks");
    println!("  benchmarks sqrt                 # Run only 'sqrt' benchmark");
    println!("  benchmarks 1 2                  # Run benchmarks 1 and 2");
}

fn print_benchmark_list() {
    println!("Available benchmarks:");
    for (i, name) in BENCHMARK_NAMES.iter().enumerate() {
        println!("  {}: {}", i, name);
    }
}

fn parse_benchmark_selection(args: &[String]) -> HashSet<usize> {
    let mut selected = HashSet::new();

    for arg in args {
        // Try parsing as index first
        if let Ok(index) = arg.parse::<usize>() {
            if index < BENCHMARK_NAMES.len() {
                selected.insert(index);
            } else {
                eprintln!(
                    "Warning: benchmark index {} out of range (0-{})",
                    index,
                    BENCHMARK_NAMES.len() - 1
                );
            }
        } else if let Some(index) = BENCHMARK_NAMES.iter().position(|&name| name == arg) {
            selected.insert(index);
        } else {
            eprintln!("Warning: unknown benchmark '{}'", arg);
        }
    }

    selected
}

fn seed_from_env() -> u64 {
    match env::var(SEED_ENV) {
        Ok(value) => value.parse().unwrap_or_else(|_| {
            eprintln!("Warning: {SEED_ENV}='{value}' is not a u64, using {DEFAULT_SEED}");
            DEFAULT_SEED
        }),
        Err(_) => DEFAULT_SEED,
    }
}

fn main() {
    init_tracing();

    let args: Vec<String> = env::args().skip(1).collect();

    // Handle help and list options
    for arg in &args {
        match arg.as_str() {
            "--help" | "-h" => {
                print_usage();
                return;
            }
            "--list" | "-l" => {
                print_benchmark_list();
                return;
            }
            _ => {}
        }
    }

    // Filter out options and parse benchmark selection
    let benchmark_args: Vec<String> = args
        .into_iter()
        .filter(|arg| !arg.starts_with('-'))
        .collect();

    let selected = if benchmark_args.is_empty() {
        (0..BENCHMARK_NAMES.len()).collect()
    } else {
        parse_benchmark_selection(&benchmark_args)
    };

    if selected.is_empty() {
        eprintln!("No valid benchmarks selected. Use --list to see available benchmarks.");
        return;
    }

    let seed = seed_from_env();
    debug!(seed, selected = ?selected, "starting benchmarks");
    let mut rng = StdRng::seed_from_u64(seed);
    let mut first = true;

    for i in 0..BENCHMARK_NAMES.len() {
        if selected.contains(&i) {
            if !first {
                println!();
            }
            first = false;

            match i {
                0 => run_sqrt_benchmark(&mut rng),
                1 => run_pow_benchmark(&mut rng),
                2 => run_pow_integer_benchmark(&mut rng),
                _ => unreachable!(),
            }
        }
    }
}
