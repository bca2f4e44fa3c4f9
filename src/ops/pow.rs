//! Real power `base^exponent` for doubles.
//!
//! Uses the identity `a^x = e^(x * ln(a))`, with short-circuits for zero operands and
//! an exponentiation-by-squaring fast path for integer exponents that fit in `i32`.
//!
//! Two entry points share the same decision order:
//! - [`pow`]: total, never signals. A negative base with a non-integer exponent yields
//!   a number whose sign comes from `fmod(exponent, 2) > 0`, and negative odd integer
//!   exponents keep a positive sign under that rule.
//! - [`try_pow`]: rejects a negative base with a finite non-integer exponent as a
//!   [`MathError::DomainError`] and takes the sign from the true parity of integer
//!   exponents.

use num_traits::ToPrimitive;
use tracing::debug;

use crate::error::MathError;
use crate::float_utils::elementary::{exp, fmod, ln};
use crate::float_utils::power::{is_integer, is_odd_integer, quick_pow};

/// Raises `base` to `exponent`.
///
/// # Special cases
/// - `pow(±0, ±0) == 1`
/// - `pow(+0, y < 0) == +∞`, `pow(-0, y < 0) == -∞`
/// - `pow(±0, y > 0) == 0`
/// - `pow(x, ±0) == 1` for any nonzero `x`, NaN included
///
/// NaN and infinite operands propagate through the underlying log/exp primitives.
///
/// # Examples
///
/// ```
/// use minimath::pow;
///
/// assert_eq!(pow(2.0, 10.0), 1024.0);
/// assert_eq!(pow(-2.0, 3.0), -8.0);
/// assert_eq!(pow(-0.0, -1.0), f64::NEG_INFINITY);
/// ```
pub fn pow(base: f64, exponent: f64) -> f64 {
    if let Some(result) = zero_operand(base, exponent) {
        return result;
    }

    let (magnitude, sign) = if base < 0.0 {
        let sign = if fmod(exponent, 2.0) > 0.0 { -1.0 } else { 1.0 };
        (-base, sign)
    } else {
        (base, 1.0)
    };

    sign * pow_magnitude(magnitude, exponent)
}

/// Raises `base` to `exponent`, rejecting results with no real value.
///
/// Behaves like [`pow`] except for negative bases:
/// - a finite non-integer exponent is a [`MathError::DomainError`];
/// - an odd integer exponent gives a negative result, whatever its sign;
/// - an infinite exponent gives the result for `|base|`.
///
/// Does not touch the [`errno`](crate::errno) indicator.
///
/// # Examples
///
/// ```
/// use minimath::{MathError, try_pow};
///
/// assert_eq!(try_pow(-2.0, -3.0), Ok(-0.125));
/// assert_eq!(try_pow(-8.0, 1.0 / 3.0), Err(MathError::DomainError));
/// ```
pub fn try_pow(base: f64, exponent: f64) -> Result<f64, MathError> {
    if let Some(result) = zero_operand(base, exponent) {
        return Ok(result);
    }

    if base < 0.0 {
        if exponent.is_finite() && !is_integer(exponent) {
            debug!(base, exponent, "pow: negative base with non-integer exponent");
            return Err(MathError::DomainError);
        }
        let sign = if is_odd_integer(exponent) { -1.0 } else { 1.0 };
        return Ok(sign * pow_magnitude(-base, exponent));
    }

    Ok(pow_magnitude(base, exponent))
}

/// Resolves the cases where either operand is a signed zero.
fn zero_operand(base: f64, exponent: f64) -> Option<f64> {
    if base == 0.0 {
        return Some(if exponent == 0.0 {
            1.0
        } else if exponent < 0.0 {
            if base.is_sign_negative() {
                f64::NEG_INFINITY
            } else {
                f64::INFINITY
            }
        } else {
            0.0
        });
    }

    if exponent == 0.0 {
        return Some(1.0);
    }

    None
}

/// `magnitude^exponent` for a base that is not negative (NaN passes through).
fn pow_magnitude(magnitude: f64, exponent: f64) -> f64 {
    if is_integer(exponent) {
        if let Some(n) = exponent.to_i32() {
            return quick_pow(magnitude, n);
        }
    }

    exp(exponent * ln(magnitude))
}
