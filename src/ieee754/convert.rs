/*
    Conversions to and from `Fields<E, N>`
*/

use std::fmt;
use std::str::FromStr;

use bitvec::field::BitField as _;

use crate::{Context, DecodedValue, Error, Result};

use super::*;

/// Splits `x` into its sign bit and magnitude.
///
/// The sign bit is set for negative numbers and for negative zero.
pub fn split_sign(x: f64) -> (bool, f64) {
    (x.is_sign_negative(), x.abs())
}

// Encoding
impl<const E: usize, const N: usize> Fields<E, N> {
    /// Encodes `x` using the default context: truncated mantissa,
    /// gradual underflow.
    pub fn encode(x: f64) -> Self {
        Self::encode_with(x, &Context::default())
    }

    /// Encodes `x` using the rounding behavior of `ctx`.
    pub fn encode_with(x: f64, ctx: &Context) -> Self {
        Self::encode_with_flags(x, ctx).0
    }

    /// Encodes `x` using the rounding behavior of `ctx`, also returning
    /// the exceptions raised along the way.
    pub fn encode_with_flags(x: f64, ctx: &Context) -> (Self, Exceptions) {
        if x.is_nan() {
            return (Self::nan(), Exceptions::default());
        }

        let (s, magnitude) = split_sign(x);
        if magnitude.is_infinite() {
            return (Self::infinity(s), Exceptions::default());
        }

        match normalize(magnitude, Self::M) {
            Some(form) => Self::round_finite(s, &form, ctx),
            None => (Self::zero(s), Exceptions::default()),
        }
    }
}

// Decoding
impl<const E: usize, const N: usize> Fields<E, N> {
    /// Classifies this encoding and extracts the value it carries.
    /// Every bit pattern decodes to exactly one category.
    pub fn decode(&self) -> DecodedValue {
        let s = self.sign();
        let biased = self.biased_exponent();
        let m = self.mantissa_bits();

        match (biased, m.any()) {
            (0, false) => DecodedValue::Zero(s),
            (0, true) => DecodedValue::Subnormal(s, Self::EMIN, m),
            (e, false) if e == Self::EXP_SPECIAL => DecodedValue::Infinity(s),
            (e, true) if e == Self::EXP_SPECIAL => DecodedValue::Nan,
            (e, _) => DecodedValue::Normal(s, e as i64 - Self::BIAS, m),
        }
    }

    /// Returns the real value of this encoding as an `f64`.
    pub fn value(&self) -> f64 {
        self.decode().value()
    }
}

// Integer views
impl<const E: usize, const N: usize> Fields<E, N> {
    /// Creates an encoding from the low `N` bits of `bits`.
    pub fn from_bits(bits: u64) -> Self {
        let mut f = Self::new();
        f.bits.store_le(bits & (u64::MAX >> (64 - N)));
        f
    }

    /// Returns the encoding as an unsigned integer.
    pub fn to_bits(&self) -> u64 {
        self.bits.load_le()
    }
}

impl From<u32> for BitField32 {
    fn from(bits: u32) -> Self {
        Self::from_bits(bits as u64)
    }
}

impl From<BitField32> for u32 {
    fn from(f: BitField32) -> Self {
        f.to_bits() as u32
    }
}

impl From<u64> for BitField64 {
    fn from(bits: u64) -> Self {
        Self::from_bits(bits)
    }
}

impl From<BitField64> for u64 {
    fn from(f: BitField64) -> Self {
        f.to_bits()
    }
}

impl<const E: usize, const N: usize> From<f64> for Fields<E, N> {
    fn from(x: f64) -> Self {
        Self::encode(x)
    }
}

// Implementing `TryFrom<BitVec>` for `Fields`
impl<const E: usize, const N: usize> TryFrom<BitVec> for Fields<E, N> {
    type Error = Error;

    fn try_from(bv: BitVec) -> Result<Self> {
        if bv.len() != N {
            return Err(Error::InvalidLength {
                expected: N,
                actual: bv.len(),
            });
        }

        let mut f = Self::new();
        f.bits.copy_from_bitslice(&bv);
        Ok(f)
    }
}

// Parses `N` binary digits, most significant bit first
impl<const E: usize, const N: usize> FromStr for Fields<E, N> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let len = s.chars().count();
        if len != N {
            return Err(Error::InvalidLength {
                expected: N,
                actual: len,
            });
        }

        let mut f = Self::new();
        for (position, digit) in s.chars().enumerate() {
            let b = match digit {
                '0' => false,
                '1' => true,
                _ => return Err(Error::InvalidDigit { digit, position }),
            };
            f.bits.set(N - 1 - position, b);
        }
        Ok(f)
    }
}

// `{}` prints the `N` digits, `{:#}` separates sign, exponent and mantissa
impl<const E: usize, const N: usize> fmt::Display for Fields<E, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = if self.sign() { '1' } else { '0' };
        if f.alternate() {
            write!(f, "{} {} {}", s, self.exponent_string(), self.mantissa_string())
        } else {
            write!(f, "{}{}{}", s, self.exponent_string(), self.mantissa_string())
        }
    }
}
