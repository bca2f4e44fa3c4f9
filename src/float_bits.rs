//! Bit-level view of an IEEE-754 double.
//!
//! [`FloatBits`] reinterprets the 64 bits of an `f64` as a record of
//! `{sign, biased exponent, mantissa}` fields. Both views always describe the same
//! bits: writing a field through the record changes the float value, and vice versa.
//!
//! ```text
//!  63 62        52 51                                                0
//! +--+-----------+---------------------------------------------------+
//! |s | exponent  |                     mantissa                      |
//! +--+-----------+---------------------------------------------------+
//! ```

use std::fmt;

/// Category of a double-precision value, as read from its exponent and mantissa fields.
///
/// The sign is not part of the category; query it with [`FloatBits::is_sign_negative`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FloatClass {
    /// Exponent and mantissa both zero (`+0.0` or `-0.0`).
    Zero,
    /// Exponent zero, mantissa nonzero.
    Subnormal,
    /// Exponent strictly between zero and all ones.
    Normal,
    /// Exponent all ones, mantissa zero.
    Infinite,
    /// Exponent all ones, mantissa nonzero.
    Nan,
}

/// A 64-bit float pattern with field accessors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FloatBits(u64);

impl FloatBits {
    /// Width of the mantissa (fraction) field.
    pub const MANTISSA_BITS: u32 = 52;
    /// Width of the biased exponent field.
    pub const EXP_BITS: u32 = 11;
    /// Saturated exponent field: infinities and NaNs.
    pub const EXP_SAT: u64 = (1 << Self::EXP_BITS) - 1;
    /// Exponent bias; `biased - EXP_BIAS` is the true binary exponent.
    pub const EXP_BIAS: u64 = Self::EXP_SAT >> 1;

    pub const SIGN_MASK: u64 = 1 << 63;
    pub const EXP_MASK: u64 = Self::EXP_SAT << Self::MANTISSA_BITS;
    pub const MANTISSA_MASK: u64 = (1 << Self::MANTISSA_BITS) - 1;

    pub const fn new(value: f64) -> Self {
        Self(value.to_bits())
    }

    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    /// Assembles a pattern from its fields. Each field is masked to its width.
    pub const fn from_parts(negative: bool, exponent: u64, mantissa: u64) -> Self {
        let sign = if negative { Self::SIGN_MASK } else { 0 };
        Self(
            sign | ((exponent & Self::EXP_SAT) << Self::MANTISSA_BITS)
                | (mantissa & Self::MANTISSA_MASK),
        )
    }

    pub const fn to_f64(self) -> f64 {
        f64::from_bits(self.0)
    }

    pub const fn to_bits(self) -> u64 {
        self.0
    }

    /// The raw sign bit (0 or 1).
    pub const fn sign(self) -> u64 {
        self.0 >> 63
    }

    pub fn set_sign(&mut self, negative: bool) {
        if negative {
            self.0 |= Self::SIGN_MASK;
        } else {
            self.0 &= !Self::SIGN_MASK;
        }
    }

    pub const fn is_sign_negative(self) -> bool {
        self.sign() == 1
    }

    /// The biased exponent field.
    pub const fn exponent(self) -> u64 {
        (self.0 & Self::EXP_MASK) >> Self::MANTISSA_BITS
    }

    pub fn set_exponent(&mut self, exponent: u64) {
        self.0 = (self.0 & !Self::EXP_MASK) | ((exponent & Self::EXP_SAT) << Self::MANTISSA_BITS);
    }

    /// The true binary exponent of a normal value (`exponent - 1023`).
    ///
    /// Meaningless for zeros, subnormals, infinities and NaNs.
    pub const fn unbiased_exponent(self) -> i64 {
        self.exponent() as i64 - Self::EXP_BIAS as i64
    }

    /// The mantissa (fraction) field, without the implicit leading bit.
    pub const fn mantissa(self) -> u64 {
        self.0 & Self::MANTISSA_MASK
    }

    pub fn set_mantissa(&mut self, mantissa: u64) {
        self.0 = (self.0 & !Self::MANTISSA_MASK) | (mantissa & Self::MANTISSA_MASK);
    }

    pub const fn class(self) -> FloatClass {
        match (self.exponent(), self.mantissa()) {
            (0, 0) => FloatClass::Zero,
            (0, _) => FloatClass::Subnormal,
            (Self::EXP_SAT, 0) => FloatClass::Infinite,
            (Self::EXP_SAT, _) => FloatClass::Nan,
            _ => FloatClass::Normal,
        }
    }
}

impl From<f64> for FloatBits {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<FloatBits> for f64 {
    fn from(bits: FloatBits) -> Self {
        bits.to_f64()
    }
}

impl fmt::Display for FloatBits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "sign={} exponent={:#05x} mantissa={:#015x}",
            self.sign(),
            self.exponent(),
            self.mantissa()
        )
    }
}
