//! The two arithmetic entry points of the crate.
//!
//! - `pow`: real power through `a^x = e^(x * ln(a))`, with an integer fast path
//! - `sqrt`: square root through a bit-level reciprocal-square-root seed and fixed
//!   Newton-Raphson refinement
//!
//! Each comes in a legacy form that reports domain errors through the thread-local
//! [`errno`](crate::errno) indicator and a checked `try_` form that returns
//! [`MathError`](crate::MathError).

pub mod pow;
pub mod sqrt;

pub use pow::{pow, try_pow};
pub use sqrt::{NEWTON_ITERATIONS, sqrt, try_sqrt};
