//! Scalar helpers that the power and square-root operations build on.
//!
//! These do not depend on the bit-level view and carry no algorithmic tricks of
//! their own.
//!
//! # Modules
//!
//! - [`power`]: Exponentiation by squaring and integer predicates for `f64`
//! - [`elementary`]: Natural log, exponential and floating modulo

pub mod elementary;
pub mod power;
