use bitvec::prelude::{BitSlice, Lsb0};
use num_bigint::BigUint;
use std::ops::ShlAssign;

use super::*;

// Converts a packed `BitSlice` (index 0 is the least significant bit) to `BigUint`
pub(crate) fn bitvec_to_biguint(bv: &BitSlice<u32, Lsb0>) -> BigUint {
    let mut i = BigUint::default();
    for b in bv.iter().rev() {
        i.shl_assign(1);
        i.set_bit(0, *b);
    }
    i
}

// Converts a `BigUint` to a packed `BitVec` of exactly `width` bits,
// dropping any bits above `width`
pub(crate) fn biguint_to_bitvec(i: &BigUint, width: usize) -> BitVec {
    let mut bv = BitVec::from_vec(i.to_u32_digits());
    bv.resize(width, false);
    bv
}

// Shifts a packed significand right by `by` places, folding the bits
// shifted off into the `half` and `sticky` rounding bits
pub(crate) fn shift_right_sticky(
    c: &mut BitVec,
    by: usize,
    half: &mut bool,
    sticky: &mut bool,
) {
    if by == 0 {
        return;
    }

    *sticky |= *half;
    if by > c.len() {
        *sticky |= c.any();
        *half = false;
    } else {
        *half = c[by - 1];
        *sticky |= c[..by - 1].any();
    }

    if by < c.len() {
        c.shift_left(by);
    } else {
        c.fill(false);
    }
}

// Renders a packed slice as binary digits, most significant bit first
pub(crate) fn bits_to_string(bv: &BitSlice<u32, Lsb0>) -> String {
    bv.iter().rev().map(|b| if *b { '1' } else { '0' }).collect()
}

// Renders a digit sequence in emission order
pub(crate) fn digits_to_string(bv: &BitSlice<u32, Lsb0>) -> String {
    bv.iter().map(|b| if *b { '1' } else { '0' }).collect()
}

/// Returns `2^k` as an `f64`, built directly from its bit pattern.
/// `k` must lie in `[-1074, 1023]`; the result is exact.
pub(crate) fn exp2i(k: i64) -> f64 {
    debug_assert!((-1074..=1023).contains(&k), "exp2i out of range: {}", k);
    if k >= -1022 {
        f64::from_bits(((k + 1023) as u64) << 52)
    } else {
        f64::from_bits(1 << (k + 1074))
    }
}
