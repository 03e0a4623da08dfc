/*
    Defines a decoded number
*/

use std::fmt;

use bitvec::field::BitField as _;

use crate::ieee754::{exp2i, BitVec};

/// The value carried by an encoding, grouped by classification.
///
/// Mantissas are the raw mantissa field (index 0 is the least
/// significant bit), so their length is the format's mantissa width.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DecodedValue {
    /// signed zero
    /// => (sign)
    Zero(bool),
    /// `(-1)^s × 0.m × 2^e` where `e` is the smallest normal exponent
    /// => (sign, exponent, mantissa)
    Subnormal(bool, i64, BitVec),
    /// `(-1)^s × 1.m × 2^e`
    /// => (sign, unbiased exponent, mantissa)
    Normal(bool, i64, BitVec),
    /// infinity (+/-)
    /// => (sign)
    Infinity(bool),
    /// not-a-number; sign and payload carry no meaning
    Nan,
}

impl DecodedValue {
    /// Returns the sign of this value.
    /// NaN is reported as positive.
    pub fn sign(&self) -> bool {
        match self {
            DecodedValue::Zero(s) => *s,
            DecodedValue::Subnormal(s, _, _) => *s,
            DecodedValue::Normal(s, _, _) => *s,
            DecodedValue::Infinity(s) => *s,
            DecodedValue::Nan => false,
        }
    }

    /// Returns the exponent of this value.
    /// The result is wrapped in an option since only nonzero
    /// finite numbers have a meaningful exponent.
    pub fn exponent(&self) -> Option<i64> {
        match self {
            DecodedValue::Subnormal(_, e, _) | DecodedValue::Normal(_, e, _) => Some(*e),
            _ => None,
        }
    }

    /// Returns the mantissa field of this value.
    /// The result is wrapped in an option since only nonzero
    /// finite numbers have a meaningful mantissa.
    pub fn mantissa(&self) -> Option<&BitVec> {
        match self {
            DecodedValue::Subnormal(_, _, m) | DecodedValue::Normal(_, _, m) => Some(m),
            _ => None,
        }
    }

    /// Returns the mantissa as a fraction in `[0, 1)`, i.e. `m / 2^M`.
    pub fn fraction(&self) -> Option<f64> {
        let m = self.mantissa()?;
        Some(m.load_le::<u64>() as f64 * exp2i(-(m.len() as i64)))
    }

    /// Returns true if this encodes a zero.
    pub fn is_zero(&self) -> bool {
        matches!(self, DecodedValue::Zero(_))
    }

    /// Returns true if this encodes a subnormal number.
    pub fn is_subnormal(&self) -> bool {
        matches!(self, DecodedValue::Subnormal(_, _, _))
    }

    /// Returns true if this encodes a normal number.
    pub fn is_normal(&self) -> bool {
        matches!(self, DecodedValue::Normal(_, _, _))
    }

    /// Returns true if this encodes an infinity.
    pub fn is_infinity(&self) -> bool {
        matches!(self, DecodedValue::Infinity(_))
    }

    /// Returns true if this does not encode a number.
    pub fn is_nan(&self) -> bool {
        matches!(self, DecodedValue::Nan)
    }

    /// Returns true if this encodes a finite number.
    pub fn is_finite(&self) -> bool {
        !self.is_infinity() && !self.is_nan()
    }

    /// Returns the name of the classification.
    pub fn category(&self) -> &'static str {
        match self {
            DecodedValue::Zero(_) => "zero",
            DecodedValue::Subnormal(_, _, _) => "subnormal",
            DecodedValue::Normal(_, _, _) => "normal",
            DecodedValue::Infinity(_) => "infinity",
            DecodedValue::Nan => "NaN",
        }
    }

    /// Reconstructs the real value as an `f64`.
    ///
    /// The significand is rebuilt as an integer and scaled by an exact
    /// power of two, so the result is exact for every format up to binary64.
    pub fn value(&self) -> f64 {
        let v = match self {
            DecodedValue::Zero(_) => 0.0,
            DecodedValue::Subnormal(_, e, m) => {
                let c = m.load_le::<u64>();
                c as f64 * exp2i(e - m.len() as i64)
            }
            DecodedValue::Normal(_, e, m) => {
                let c = m.load_le::<u64>() | (1 << m.len());
                c as f64 * exp2i(e - m.len() as i64)
            }
            DecodedValue::Infinity(_) => f64::INFINITY,
            DecodedValue::Nan => return f64::NAN,
        };

        if self.sign() {
            -v
        } else {
            v
        }
    }
}

impl fmt::Display for DecodedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value(), f)
    }
}
