/*
    Exceptions
*/

use super::*;

impl Exceptions {
    /// Clears all exceptions.
    pub fn clear(&mut self) {
        self.overflow = false;
        self.underflow = false;
        self.inexact = false;
    }

    /// Sets the `overflow` field.
    pub fn with_overflow(mut self, raised: bool) -> Self {
        self.overflow = raised;
        self
    }

    /// Sets the `underflow` field.
    pub fn with_underflow(mut self, raised: bool) -> Self {
        self.underflow = raised;
        self
    }

    /// Sets the `inexact` field.
    pub fn with_inexact(mut self, raised: bool) -> Self {
        self.inexact = raised;
        self
    }

    /// Returns true if the encoding saturated to infinity.
    pub fn overflow(&self) -> bool {
        self.overflow
    }

    /// Returns true if the encoding is tiny and inexact, or was flushed to zero.
    pub fn underflow(&self) -> bool {
        self.underflow
    }

    /// Returns true if the encoded value differs from the input.
    pub fn inexact(&self) -> bool {
        self.inexact
    }

    /// Returns true if any exception was raised.
    pub fn any(&self) -> bool {
        self.overflow || self.underflow || self.inexact
    }
}
