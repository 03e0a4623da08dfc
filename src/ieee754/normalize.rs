/*
    Binary expansion and normalization of a magnitude
*/

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};

use super::*;

/// The binary expansion of a non-negative magnitude, split at the binary point.
///
/// Digits are stored in the order they are written, most significant first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expansion {
    /// Digits of the integer part, `0` when the integer part is zero.
    pub integer: BitVec,
    /// Digits of the fractional part, produced by repeated doubling.
    pub fraction: BitVec,
    /// True if the fractional part ran out of nonzero digits.
    pub terminated: bool,
}

/// A magnitude rewritten as `1.mantissa × 2^exponent`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NormalizedForm {
    /// The unbiased exponent.
    pub exponent: i64,
    /// Digits after the implicit leading `1`, most significant first.
    /// Always exactly as long as the requested width: truncated
    /// on the right, or padded with zeros.
    pub mantissa: BitVec,
    /// True if no nonzero digit was dropped by truncation.
    pub exact: bool,
    // first digit dropped by truncation
    pub(crate) half: bool,
    // any later digit dropped by truncation
    pub(crate) sticky: bool,
}

// Splits a finite, nonzero `f64` into an integer `c` and exponent `e`
// such that the magnitude is exactly `c × 2^e`.
fn integer_decode(x: f64) -> Option<(u64, i64)> {
    let bits = x.to_bits();
    let exponent = ((bits >> 52) & 0x7ff) as i64;
    let fraction = bits & 0x000f_ffff_ffff_ffff;
    match exponent {
        0x7ff => None,
        0 if fraction == 0 => None,
        0 => Some((fraction, -1074)),
        _ => Some((fraction | (1 << 52), exponent - 1075)),
    }
}

/// Writes the magnitude of `x` in binary.
///
/// The integer part is written out in full. The fractional part is
/// produced one digit at a time by doubling the remaining fraction and
/// taking its integer part, stopping when the fraction is exhausted or
/// once `width + 1` digits follow the leading `1` of the whole expansion.
/// Leading zeros of a pure fraction do not count against `width`.
///
/// The sign of `x` is ignored. Returns `None` for infinities and NaNs.
pub fn expand(x: f64, width: usize) -> Option<Expansion> {
    if !x.is_finite() {
        return None;
    }

    // exact split into integer part and `num / 2^scale`
    let (int, mut num, scale) = match integer_decode(x) {
        None => (BigUint::zero(), BigUint::zero(), 0),
        Some((c, e)) if e >= 0 => (BigUint::from(c) << e as usize, BigUint::zero(), 0),
        Some((c, e)) => {
            let scale = e.unsigned_abs();
            let (int, num) = BigUint::from(c).div_rem(&(BigUint::one() << scale));
            (int, num, scale)
        }
    };

    let mut integer = BitVec::new();
    if int.is_zero() {
        integer.push(false);
    } else {
        for i in (0..int.bits()).rev() {
            integer.push(int.bit(i));
        }
    }

    let mut seen_one = !int.is_zero();
    let mut following = if seen_one { integer.len() - 1 } else { 0 };
    let mut fraction = BitVec::new();
    while !num.is_zero() && !(seen_one && following > width) {
        num <<= 1;
        let digit = num.bit(scale);
        if digit {
            num.set_bit(scale, false);
        }
        fraction.push(digit);

        if seen_one {
            following += 1;
        } else {
            seen_one = digit;
        }
    }

    Some(Expansion {
        integer,
        fraction,
        terminated: num.is_zero(),
    })
}

/// Rewrites the magnitude of `x` in normalized scientific binary form
/// with a mantissa of exactly `width` digits.
///
/// Digits past `width` are truncated, never rounded; the dropped digits
/// are remembered so a caller may round afterwards.
///
/// The sign of `x` is ignored. Returns `None` when there is no leading `1`
/// to normalize against: zeros, infinities and NaNs.
pub fn normalize(x: f64, width: usize) -> Option<NormalizedForm> {
    let Expansion {
        integer,
        fraction,
        terminated,
    } = expand(x, width)?;

    let (exponent, digits) = if integer[0] {
        let mut digits: BitVec = integer[1..].into();
        digits.extend_from_bitslice(&fraction);
        ((integer.len() - 1) as i64, digits)
    } else {
        let k = fraction.first_one()?;
        (-(k as i64 + 1), BitVec::from(&fraction[k + 1..]))
    };

    let mut mantissa: BitVec = digits[..usize::min(width, digits.len())].into();
    mantissa.resize(width, false);
    let half = digits.get(width).map_or(false, |b| *b);
    let sticky = (digits.len() > width + 1 && digits[width + 1..].any()) || !terminated;

    log::trace!(
        "normalize {:e}: 1.{} x 2^{} (exact: {})",
        x,
        digits_to_string(&mantissa),
        exponent,
        !half && !sticky
    );

    Some(NormalizedForm {
        exponent,
        mantissa,
        exact: !half && !sticky,
        half,
        sticky,
    })
}
