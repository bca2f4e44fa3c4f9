//! Natural log, exponential and floating-point modulo.
//!
//! Thin wrappers over the `libm` crate so the crate does not depend on the
//! platform's C math library for these.

/// Natural logarithm of `x`.
#[inline]
pub fn ln(x: f64) -> f64 {
    libm::log(x)
}

/// `e` raised to `x`.
#[inline]
pub fn exp(x: f64) -> f64 {
    libm::exp(x)
}

/// Remainder of `x / y` truncated toward zero; the result has the sign of `x`.
#[inline]
pub fn fmod(x: f64, y: f64) -> f64 {
    libm::fmod(x, y)
}
