/*
    Top-level
*/

//! A bit-level codec for IEEE-754 binary floating-point encodings.
//!
//! Encoding builds the sign, biased exponent and mantissa fields
//! explicitly: the magnitude is written out in binary, normalized to
//! `1.mantissa × 2^exponent` and then fitted to the format. Decoding
//! classifies a bit pattern and rebuilds its value.
//!
//! Mantissas are truncated by default; see [`RoundingMode`].

mod error;
mod number;
mod round;

pub mod ieee754;
pub use error::*;
pub use number::*;
pub use round::*;

use ieee754::{BitField32, NormalizedForm};

/// Encodes `x` in single precision with the default [`Context`].
pub fn encode(x: f64) -> BitField32 {
    BitField32::encode(x)
}

/// Decodes a single-precision encoding.
pub fn decode(field: &BitField32) -> DecodedValue {
    field.decode()
}

/// Normalizes the magnitude of `x` with a single-precision mantissa width.
pub fn normalize(x: f64) -> Option<NormalizedForm> {
    ieee754::normalize(x, BitField32::M)
}
