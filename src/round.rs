/*
    Rounding behavior of the encoder
*/

/// How digits beyond the mantissa width are disposed of.
///
/// The default is `Truncate`: excess digits are simply dropped, so an
/// encoded magnitude never exceeds the input magnitude. This is the
/// textbook conversion and is not what IEEE-754 prescribes;
/// `NearestEven` gives the standard's default rounding instead.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Drop excess digits (round toward zero).
    #[default]
    Truncate,
    /// Round to the nearest representable value, ties to an even mantissa.
    NearestEven,
}

impl RoundingMode {
    /// Returns true if the rounding information implies the significand,
    /// viewed as an integer, should be incremented by 1.
    pub(crate) fn requires_increment(&self, lsb: bool, half_bit: bool, sticky_bit: bool) -> bool {
        match self {
            RoundingMode::Truncate => false,
            // no half bit => truncate
            // half bit and sticky bit => increment
            // tie => increment if lsb since we want it to be 0
            RoundingMode::NearestEven => half_bit && (sticky_bit || lsb),
        }
    }
}

/// Configuration of the encoder.
///
/// By default, mantissas are truncated and values below the normal
/// range are encoded as subnormals until nothing representable remains.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Context {
    rm: RoundingMode,
    ftz: bool,
}

impl Context {
    /// Creates a new encoding context with `rm` set to
    /// `RoundingMode::Truncate` and `ftz` set to false.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the rounding mode.
    pub fn rounding_mode(mut self, rm: RoundingMode) -> Self {
        self.rm = rm;
        self
    }

    /// Sets the flush-to-zero option: when set, every value
    /// below the normal range encodes as a signed zero.
    pub fn flush_subnormals(mut self, ftz: bool) -> Self {
        self.ftz = ftz;
        self
    }

    /// Returns the rounding mode.
    pub fn rm(&self) -> RoundingMode {
        self.rm
    }

    /// Returns true if subnormal results are flushed to zero.
    pub fn ftz(&self) -> bool {
        self.ftz
    }
}
