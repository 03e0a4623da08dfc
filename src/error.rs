/// An encoding whose written representation is malformed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid encoding length: expected {expected} bits, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("invalid binary digit {digit:?} at position {position}")]
    InvalidDigit { digit: char, position: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<Error> for String {
    fn from(err: Error) -> Self { err.to_string() }
}
