/*
    IEEE-754 binary interchange formats
*/

use bitvec::prelude::Lsb0;

mod convert;
mod exceptions;
mod normalize;
mod number;
mod round;
mod util;

pub use convert::split_sign;
pub use normalize::*;
pub(crate) use util::*;

/// Bit storage used throughout the codec.
///
/// Packed encodings are indexed by bit position (index 0 is the
/// least significant bit). Digit sequences produced by the normalizer
/// are indexed in the order the digits were written (index 0 is the
/// most significant digit).
pub type BitVec = bitvec::vec::BitVec<u32, Lsb0>;

/** Exception flags raised while encoding a value.
 *
 * Encoding is total: every input produces an encoding. The flags
 * record how far the encoding is from the input:
 *
 *  - overflow: the magnitude was too large for the exponent field
 *      and the result saturated to infinity;
 *  - underflow: the result is below the normal range and
 *      either inexact or flushed to zero;
 *  - inexact: the encoded value differs from the input.
 *
 */
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Exceptions {
    overflow: bool,
    underflow: bool,
    inexact: bool,
}

/** A packed floating-point encoding as specified by the IEEE-754 standard.
 *
 * The generics `E` and `N` specify the number of bits in the
 * exponent field and in the entire encoding overall. The layout
 * is positional: bit `N - 1` is the sign, the next `E` bits
 * are the biased exponent and the low `N - E - 1` bits are
 * the mantissa (the fraction after the implicit leading digit).
 *
 * Any `E` from 2 to 11 and any mantissa width up to 52 bits is
 * accepted, so every encodable value is also an `f64`.
 *
 */
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Fields<const E: usize, const N: usize> {
    bits: BitVec,
}

/// Alias for `Fields<11, 64>` (double-precision encoding)
pub type BitField64 = Fields<11, 64>;
/// Alias for `Fields<8, 32>` (single-precision encoding)
pub type BitField32 = Fields<8, 32>;
/// Alias for `Fields<5, 16>` (half-precision encoding)
pub type Half = Fields<5, 16>;
