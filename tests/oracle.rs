/*
    Cross-checks against the platform's native IEEE-754 conversions
*/

use ieee754_codec::ieee754::*;
use ieee754_codec::{Context, RoundingMode};

// xorshift64, deterministic across runs
fn next(state: &mut u64) -> u64 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 7;
    x ^= x << 17;
    *state = x;
    x
}

// A random `f64` whose exponent lies around the single-precision range
fn random_near_single(state: &mut u64) -> f64 {
    let r = next(state);
    let sign = r >> 63;
    let exponent = 1023 - 160 + (r >> 52 & 0x1ff) % 300;
    let fraction = next(state) & 0x000f_ffff_ffff_ffff;
    f64::from_bits(sign << 63 | exponent << 52 | fraction)
}

#[test]
fn single_matches_native_bits() {
    let specials = [
        0x0000_0000,
        0x8000_0000,
        0x0000_0001,
        0x007f_ffff,
        0x0080_0000,
        0x7f7f_ffff,
        0x7f80_0000,
        0xff80_0000,
        0x3f80_0000,
    ];
    let sweep = (0..=u32::MAX).step_by(65_521);

    for bits in specials.into_iter().chain(sweep) {
        let native = f32::from_bits(bits);
        let decoded = BitField32::from(bits).decode();
        if native.is_nan() {
            assert!(decoded.is_nan(), "decode failed (class): {:#010x}", bits);
            assert!(BitField32::encode(native as f64).is_nan());
            continue;
        }

        assert_eq!(
            decoded.value().to_bits(),
            (native as f64).to_bits(),
            "decode failed (value): {:#010x}",
            bits
        );
        assert_eq!(
            u32::from(BitField32::encode(native as f64)),
            bits,
            "encode failed: {:e} ({:#010x})",
            native,
            bits
        );
    }
}

#[test]
fn double_matches_native_bits() {
    let mut state = 0x9e37_79b9_7f4a_7c15;
    let specials = [
        0.0f64.to_bits(),
        (-0.0f64).to_bits(),
        f64::MAX.to_bits(),
        f64::MIN_POSITIVE.to_bits(),
        1,
        f64::INFINITY.to_bits(),
    ];
    let randoms: Vec<u64> = (0..2000).map(|_| next(&mut state)).collect();

    for bits in specials.into_iter().chain(randoms) {
        let native = f64::from_bits(bits);
        if native.is_nan() {
            continue;
        }

        let field = BitField64::encode(native);
        assert_eq!(field.to_bits(), bits, "encode failed: {:e}", native);
        assert_eq!(
            field.value().to_bits(),
            bits,
            "decode failed: {:#018x}",
            bits
        );
    }
}

#[test]
fn nearest_even_matches_native_cast() {
    let ctx = Context::new().rounding_mode(RoundingMode::NearestEven);
    let mut state = 0x2545_f491_4f6c_dd1d;

    for _ in 0..5000 {
        let x = random_near_single(&mut state);
        let (field, flags) = BitField32::encode_with_flags(x, &ctx);
        let native = x as f32;
        assert_eq!(
            u32::from(field),
            native.to_bits(),
            "round to nearest failed: {:e}",
            x
        );
        assert_eq!(flags.inexact(), native as f64 != x, "inexact flag wrong: {:e}", x);
        assert_eq!(flags.overflow(), native.is_infinite(), "overflow flag wrong: {:e}", x);
    }
}

#[test]
fn truncation_never_rounds_up() {
    let trunc = Context::default();
    let rne = Context::new().rounding_mode(RoundingMode::NearestEven);
    let mut state = 0xdead_beef_cafe_f00d;

    for _ in 0..5000 {
        let x = random_near_single(&mut state);
        let t = BitField32::encode_with(x, &trunc);
        let r = BitField32::encode_with(x, &rne);

        // same sign, so the encodings order like their magnitudes
        assert_eq!(t.sign(), r.sign());
        let step = r.to_bits() - t.to_bits();
        assert!(step <= 1, "truncation is not rounding toward zero: {:e}", x);
        if !t.is_infinity() {
            assert!(t.value().abs() <= x.abs(), "truncation grew the magnitude: {:e}", x);
        }
    }
}

#[test]
fn flush_to_zero() {
    let ctx = Context::new().flush_subnormals(true);
    let mut state = 0x0123_4567_89ab_cdef;

    for _ in 0..2000 {
        let x = random_near_single(&mut state);
        let (field, flags) = BitField32::encode_with_flags(x, &ctx);
        if x.abs() < f32::MIN_POSITIVE as f64 {
            assert!(field.is_zero(), "not flushed: {:e}", x);
            assert_eq!(field.sign(), x < 0.0);
            assert!(flags.underflow());
        } else {
            assert!(!field.is_subnormal(), "subnormal result: {:e}", x);
        }
    }
}
