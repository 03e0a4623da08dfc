/*
    Definition of `Fields<E, N>` struct
*/

use bitvec::field::BitField as _;

use super::*;

macro_rules! assert_valid_format {
    ($E:expr, $N:expr) => {
        assert!(
            (2 <= $E) && ($E <= 11),
            "invalid exponent width, must be 2 <= E <= 11: {}",
            $E
        );
        assert!(
            (2 <= ($N - $E)) && ($N - $E <= 53),
            "invalid total width, must be E + 2 <= N <= E + 53: {}",
            $N
        );
    };
}

// Format parameters
impl<const E: usize, const N: usize> Fields<E, N> {
    /// Bitwidth of the representation.
    pub const N: usize = N;

    /// Bitwidth of the exponent field.
    pub const E: usize = E;

    /// Number of (binary) digits in a normal significand,
    /// counting the implicit leading digit. This is just `Self::M + 1`.
    pub const PREC: usize = N - E;

    /// Bitwidth of the mantissa field.
    pub const M: usize = Self::PREC - 1;

    /// Largest unbiased exponent of a finite value.
    pub const EMAX: i64 = i64::pow(2, (E - 1) as u32) - 1;

    /// Smallest unbiased exponent of a normal value.
    /// This is just `1 - Self::EMAX`.
    pub const EMIN: i64 = 1 - Self::EMAX;

    /// The exponent field bias.
    /// This is just `Self::EMAX`.
    pub const BIAS: i64 = Self::EMAX;

    /// The all-ones exponent field reserved for infinities and NaNs.
    pub const EXP_SPECIAL: u64 = (1 << E) - 1;
}

// Constructors and getters
impl<const E: usize, const N: usize> Fields<E, N> {
    /// Creates a new encoding with `E` exponent bits and `N` total bits.
    /// Initializes the encoding to +0.
    pub fn new() -> Self {
        assert_valid_format!(E, N);
        Self {
            bits: BitVec::repeat(false, N),
        }
    }

    /// Returns a zero with a particular sign.
    pub fn zero(sign: bool) -> Self {
        let mut f = Self::new();
        f.bits.set(N - 1, sign);
        f
    }

    /// Returns an infinity with a particular sign.
    pub fn infinity(sign: bool) -> Self {
        Self::from_parts(sign, Self::EXP_SPECIAL, 0)
    }

    /// Returns the canonical NaN: positive sign, highest
    /// mantissa bit set and an empty payload.
    pub fn nan() -> Self {
        Self::from_parts(false, Self::EXP_SPECIAL, 1 << (Self::M - 1))
    }

    /// Assembles an encoding from a sign, a biased exponent field
    /// and a mantissa field. Bits of `exponent` and `mantissa`
    /// above their field widths are ignored.
    pub fn from_parts(sign: bool, exponent: u64, mantissa: u64) -> Self {
        let mut f = Self::new();
        f.bits[..Self::M].store_le(mantissa & ((1 << Self::M) - 1));
        f.bits[Self::M..N - 1].store_le(exponent & Self::EXP_SPECIAL);
        f.bits.set(N - 1, sign);
        f
    }

    /// Returns the sign bit of this encoding.
    pub fn sign(&self) -> bool {
        self.bits[N - 1]
    }

    /// Returns the biased exponent field as an integer.
    pub fn biased_exponent(&self) -> u64 {
        self.bits[Self::M..N - 1].load_le()
    }

    /// Returns the exponent the field represents once the bias is removed,
    /// that is, `biased_exponent() - BIAS`.
    pub fn actual_exponent(&self) -> i64 {
        self.biased_exponent() as i64 - Self::BIAS
    }

    /// Returns the mantissa field as an integer.
    pub fn mantissa_field(&self) -> u64 {
        self.bits[..Self::M].load_le()
    }

    /// Returns the exponent field as a `BitVec` (index 0 is the least significant bit).
    pub fn exponent_bits(&self) -> BitVec {
        self.bits[Self::M..N - 1].into()
    }

    /// Returns the mantissa field as a `BitVec` (index 0 is the least significant bit).
    pub fn mantissa_bits(&self) -> BitVec {
        self.bits[..Self::M].into()
    }

    /// Returns the exponent field as a string of `E` binary digits, MSB first.
    pub fn exponent_string(&self) -> String {
        bits_to_string(&self.bits[Self::M..N - 1])
    }

    /// Returns the mantissa field as a string of `M` binary digits, MSB first.
    pub fn mantissa_string(&self) -> String {
        bits_to_string(&self.bits[..Self::M])
    }

    /// Returns the packed representation (index 0 is the least significant bit).
    pub fn as_bitvec(&self) -> &BitVec {
        &self.bits
    }

    /// Returns true if the exponent field is all ones.
    fn exponent_saturated(&self) -> bool {
        self.bits[Self::M..N - 1].all()
    }

    /// Returns true if this encodes a zero of either sign.
    pub fn is_zero(&self) -> bool {
        self.bits[..N - 1].not_any()
    }

    /// Returns true if this encodes a subnormal number.
    pub fn is_subnormal(&self) -> bool {
        self.bits[Self::M..N - 1].not_any() && self.bits[..Self::M].any()
    }

    /// Returns true if this encodes a normal number.
    pub fn is_normal(&self) -> bool {
        self.bits[Self::M..N - 1].any() && !self.exponent_saturated()
    }

    /// Returns true if this encodes an infinity.
    pub fn is_infinity(&self) -> bool {
        self.exponent_saturated() && self.bits[..Self::M].not_any()
    }

    /// Returns true if this encodes a NaN.
    pub fn is_nan(&self) -> bool {
        self.exponent_saturated() && self.bits[..Self::M].any()
    }
}

// Implementing `Default` for `Fields`
impl<const E: usize, const N: usize> Default for Fields<E, N> {
    fn default() -> Self {
        Self::new()
    }
}
