//! Square root without a hardware square-root instruction.
//!
//! The root is computed through the reciprocal square root:
//! 1. a cheap inverse seed `1/x` is taken in single precision,
//! 2. its exponent and mantissa fields are halved to get a closed-form estimate of
//!    `x^(-1/2)`,
//! 3. the estimate is refined with exactly [`NEWTON_ITERATIONS`] Newton-Raphson steps
//!    `y <- y * (1.5 - 0.5 * x * y^2)`, which need no division,
//! 4. the result is `y * x`.
//!
//! The seed is only well formed while `1/x` is a normal `f32`. Inputs outside that
//! band are first scaled by an even power of two through the bit view, so every
//! positive finite input is answered to within a few ulps. Results are not correctly
//! rounded.

use num_integer::Integer;
use tracing::{debug, trace};

use crate::errno::set_errno;
use crate::error::MathError;
use crate::float_bits::{FloatBits, FloatClass};

/// Number of Newton-Raphson refinement steps applied to the seed.
pub const NEWTON_ITERATIONS: usize = 4;

/// Binary exponents for which `1 / (x as f32)` is a normal `f32`.
const SEED_MIN_EXP: i64 = -126;
const SEED_MAX_EXP: i64 = 125;

/// Exponent of the exact scale that lifts a subnormal into the normal range.
const SUBNORMAL_SCALE_EXP: i64 = 54;
const SUBNORMAL_SCALE: f64 = pow2(SUBNORMAL_SCALE_EXP);
/// Undoes [`SUBNORMAL_SCALE`] on the root: `sqrt(2^54) = 2^27`. The scale exponent
/// must stay even.
const SUBNORMAL_ROOT_SHIFT: i64 = -SUBNORMAL_SCALE_EXP / 2;

/// Square root of `x`.
///
/// # Special cases
/// - `x < 0`: stores [`Errno::Domain`](crate::Errno::Domain) in the thread-local
///   indicator and returns NaN with the sign bit set
/// - `±0`: returned unchanged, sign included
/// - `+∞` and NaN: returned unchanged
///
/// # Examples
///
/// ```
/// use minimath::{Errno, sqrt, take_errno};
///
/// assert_eq!(sqrt(4.0), 2.0);
/// assert!(sqrt(-0.0).is_sign_negative());
///
/// let root = sqrt(-1.0);
/// assert!(root.is_nan() && root.is_sign_negative());
/// assert_eq!(take_errno(), Some(Errno::Domain));
/// ```
pub fn sqrt(x: f64) -> f64 {
    match try_sqrt(x) {
        Ok(root) => root,
        Err(error) => {
            debug!(x, %error, "sqrt: negative input");
            set_errno(error.errno());
            -f64::NAN
        }
    }
}

/// Square root of `x`, returning [`MathError::DomainError`] for negative input.
///
/// Produces exactly the same values as [`sqrt`] and does not touch the
/// [`errno`](crate::errno) indicator.
pub fn try_sqrt(x: f64) -> Result<f64, MathError> {
    if x < 0.0 {
        return Err(MathError::DomainError);
    }

    let bits = FloatBits::new(x);
    match bits.class() {
        FloatClass::Zero | FloatClass::Nan | FloatClass::Infinite => Ok(x),
        FloatClass::Subnormal => Ok(sqrt_rescaled(x * SUBNORMAL_SCALE, SUBNORMAL_ROOT_SHIFT)),
        FloatClass::Normal => {
            let exponent = bits.unbiased_exponent();
            if (SEED_MIN_EXP..=SEED_MAX_EXP).contains(&exponent) {
                Ok(sqrt_in_band(x))
            } else {
                Ok(sqrt_rescaled(x, 0))
            }
        }
    }
}

/// Square root of a positive `x` whose reciprocal fits a normal `f32`.
fn sqrt_in_band(x: f64) -> f64 {
    match rsqrt_estimate(x) {
        Some(estimate) => refine_rsqrt(x, estimate) * x,
        None => x,
    }
}

/// Square root of a positive normal `x` scaled by `2^root_shift`.
///
/// Splits `x = r * 2^(2k)` with `r` in `[1, 4)` by rewriting the exponent field, so
/// the root is `sqrt(r) * 2^k` and both scalings are exact.
fn sqrt_rescaled(x: f64, root_shift: i64) -> f64 {
    let mut bits = FloatBits::new(x);
    let exponent = bits.unbiased_exponent();
    let half = Integer::div_floor(&exponent, &2);
    let reduced_exponent = exponent - 2 * half;
    bits.set_exponent((reduced_exponent + FloatBits::EXP_BIAS as i64) as u64);

    let scale = half + root_shift;
    trace!(x, exponent, scale, "sqrt: rescaled into seed band");
    sqrt_in_band(bits.to_f64()) * pow2(scale)
}

/// Closed-form estimate of `x^(-1/2)` read off the bits of a single-precision `1/x`.
///
/// Returns `None` when the seed saturates to infinity; the caller then hands `x`
/// back unchanged.
pub(crate) fn rsqrt_estimate(x: f64) -> Option<f64> {
    let narrowed = x as f32;
    let seed = f64::from(1.0 / narrowed);
    let mut bits = FloatBits::new(seed);

    if bits.class() == FloatClass::Infinite {
        return None;
    }

    if bits.exponent() == 0 {
        bits.set_exponent(1);
    }

    let exponent = bits.exponent();
    bits.set_mantissa(bits.mantissa() >> 1);
    if exponent.is_odd() {
        bits.set_exponent((exponent >> 1) + 0x200);
    } else {
        bits.set_exponent((exponent >> 1) + 0x1FF);
        bits.set_mantissa(bits.mantissa() | (1 << (FloatBits::MANTISSA_BITS - 1)));
    }

    Some(bits.to_f64())
}

/// Newton-Raphson steps for `x^(-1/2)` starting from `estimate`.
fn refine_rsqrt(x: f64, estimate: f64) -> f64 {
    let mut xn = estimate;
    for _ in 0..NEWTON_ITERATIONS {
        xn *= 1.5 - 0.5 * x * xn * xn;
    }
    xn
}

/// `2^k` for `k` in the normal exponent range.
const fn pow2(k: i64) -> f64 {
    FloatBits::from_parts(false, (k + FloatBits::EXP_BIAS as i64) as u64, 0).to_f64()
}
