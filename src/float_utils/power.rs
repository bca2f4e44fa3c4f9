//! Integer power and integer predicates for `f64`.

use super::elementary::fmod;

/// Computes `base^n` for an integer exponent by repeated squaring.
///
/// Takes O(log |n|) multiplications. A negative exponent yields `1 / base^|n|`;
/// `n == 0` yields `1.0` for every base, NaN included.
///
/// # Examples
///
/// ```
/// use minimath::quick_pow;
///
/// assert_eq!(quick_pow(3.0, 4), 81.0);
/// assert_eq!(quick_pow(2.0, -2), 0.25);
/// ```
pub fn quick_pow(base: f64, n: i32) -> f64 {
    // x^n = (x^2)^(n/2) if n is even, x * (x^2)^((n-1)/2) if n is odd
    let mut result = 1.0;
    let mut square = base;
    let mut exp = n.unsigned_abs();

    while exp > 0 {
        if exp & 1 == 1 {
            result *= square;
        }
        exp >>= 1;
        if exp > 0 {
            square *= square;
        }
    }

    if n < 0 { 1.0 / result } else { result }
}

/// Returns true if `value` is finite and has no fractional part.
///
/// Every finite `f64` with magnitude at least 2^52 is an integer. NaN and the
/// infinities are not.
pub fn is_integer(value: f64) -> bool {
    value.is_finite() && value == value.trunc()
}

/// Returns true if `value` is an odd mathematical integer.
pub fn is_odd_integer(value: f64) -> bool {
    is_integer(value) && fmod(value, 2.0) != 0.0
}
