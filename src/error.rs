use thiserror::Error;

/// Why a token could not be read as an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenErrorKind {
    /// The token was the empty string
    Empty,
    /// The token contained something other than an optional sign and decimal digits
    InvalidDigit,
    /// The value does not fit in an `i32`
    Overflow,
}

/// A token that failed integer parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid token '{token}': {kind:?}")]
pub struct InvalidToken {
    pub token: String,
    pub kind: TokenErrorKind,
}

impl InvalidToken {
    pub fn new(token: impl Into<String>, kind: TokenErrorKind) -> Self {
        Self {
            token: token.into(),
            kind,
        }
    }
}
