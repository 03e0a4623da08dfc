/*
    Fitting a normalized magnitude into a format
*/

use bitvec::field::BitField as _;

use crate::Context;

use super::*;

impl<const E: usize, const N: usize> Fields<E, N> {
    // Encodes a nonzero magnitude in normalized form with sign `s`.
    // The mantissa of `form` must be exactly `Self::M` digits.
    pub(crate) fn round_finite(
        s: bool,
        form: &NormalizedForm,
        ctx: &Context,
    ) -> (Self, Exceptions) {
        assert_eq!(
            form.mantissa.len(),
            Self::M,
            "trying to encode a mantissa of width: {}, expected {}",
            form.mantissa.len(),
            Self::M
        );

        // Significand as an integer: the implicit leading 1
        // at the top, then the mantissa digits
        let mut c = BitVec::repeat(false, Self::PREC);
        c.set(Self::M, true);
        for (i, b) in form.mantissa.iter().enumerate() {
            c.set(Self::M - 1 - i, *b);
        }

        let mut exp = form.exponent;
        let mut half_bit = form.half;
        let mut sticky_bit = form.sticky;

        // Below the normal range: flush, or denormalize by
        // shifting the significand right until `exp == EMIN`
        let tiny = exp < Self::EMIN;
        if tiny {
            if ctx.ftz() {
                log::debug!("exponent {} below {}: flushed to zero", exp, Self::EMIN);
                let flags = Exceptions::default()
                    .with_underflow(true)
                    .with_inexact(true);
                return (Self::zero(s), flags);
            }

            let by = usize::try_from(Self::EMIN - exp).unwrap_or(usize::MAX);
            shift_right_sticky(&mut c, by, &mut half_bit, &mut sticky_bit);
            exp = Self::EMIN;
        }

        // Increment the significand if the rounding mode asks for it,
        // possibly carrying into the exponent
        let increment = ctx.rm().requires_increment(c[0], half_bit, sticky_bit);
        if increment {
            let i = bitvec_to_biguint(&c) + 1u8;
            let c_ext = biguint_to_bitvec(&i, Self::PREC + 1);
            if c_ext[Self::PREC] {
                c = c_ext[1..].into();
                exp += 1;
            } else {
                c = c_ext[..Self::PREC].into();
            }
        }

        let inexact = half_bit || sticky_bit;
        if exp > Self::EMAX {
            log::debug!("exponent {} above {}: saturated to infinity", exp, Self::EMAX);
            let flags = Exceptions::default()
                .with_overflow(true)
                .with_inexact(true);
            return (Self::infinity(s), flags);
        }

        let flags = Exceptions::default()
            .with_underflow(tiny && inexact)
            .with_inexact(inexact);

        // A significand without its leading 1 is subnormal,
        // with a zero exponent field
        let biased = if c[Self::M] {
            (exp + Self::BIAS) as u64
        } else {
            0
        };

        if c.not_any() {
            log::debug!("magnitude below the subnormal range: saturated to zero");
        } else if inexact {
            log::debug!("mantissa rounded ({:?}): encoding is inexact", ctx.rm());
        }

        let mantissa: u64 = c[..Self::M].load_le();
        log::trace!(
            "assembled: sign {}, biased exponent {}, mantissa {:#x}",
            s as u8,
            biased,
            mantissa
        );

        (Self::from_parts(s, biased, mantissa), flags)
    }
}
