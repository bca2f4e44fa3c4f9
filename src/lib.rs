#![warn(
    clippy::shadow_reuse,
    clippy::shadow_same,
    clippy::shadow_unrelated,
    clippy::dbg_macro,
    clippy::expect_used,
    clippy::panic,
    clippy::print_stderr,
    clippy::print_stdout,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used
)]

//! `pow` and `sqrt` for a minimal operating-system math library.
//!
//! Neither function needs a hardware square-root instruction:
//! - [`pow`] evaluates `a^x = e^(x * ln(a))`, short-circuits zero operands and takes
//!   an exponentiation-by-squaring fast path for integer exponents;
//! - [`sqrt`] reads an estimate of `x^(-1/2)` off the IEEE-754 bits of a
//!   single-precision reciprocal and refines it with four Newton-Raphson steps.
//!
//! Results carry a few ulps of error and are not correctly rounded.
//!
//! Domain errors are reported two ways. The legacy functions ([`pow`], [`sqrt`]) set
//! a thread-local indicator ([`errno`]) and return a NaN sentinel. The checked
//! functions ([`try_pow`], [`try_sqrt`]) return [`MathError`].
//!
//! ```
//! use minimath::{Errno, MathError, clear_errno, errno, pow, sqrt, try_sqrt};
//!
//! assert_eq!(pow(2.0, 10.0), 1024.0);
//! assert_eq!(sqrt(4.0), 2.0);
//!
//! clear_errno();
//! assert!(sqrt(-1.0).is_nan());
//! assert_eq!(errno(), Some(Errno::Domain));
//! assert_eq!(try_sqrt(-1.0), Err(MathError::DomainError));
//! ```

pub mod errno;
pub mod error;
pub mod float_bits;
pub mod float_utils;
pub mod ops;

#[cfg(test)]
mod test_utils;

pub use errno::{Errno, clear_errno, errno, set_errno, take_errno};
pub use error::MathError;
pub use float_bits::{FloatBits, FloatClass};
pub use float_utils::power::{is_integer, quick_pow};
pub use ops::{NEWTON_ITERATIONS, pow, sqrt, try_pow, try_sqrt};
