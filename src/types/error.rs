//! Error types for digit input

use thiserror::Error;

/// Why a digit sequence was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PinError {
    /// Nothing left after stripping non-digits
    #[error("no digits given")]
    Empty,

    /// Fewer digits than the lock can meaningfully have
    #[error("need at least {min} digits, got {len}")]
    TooShort { len: usize, min: usize },

    /// Raw digit outside 0-9
    #[error("digit {value} at position {position} is outside 0-9")]
    DigitOutOfRange { position: usize, value: u8 },

    /// Non-digit character in strict parsing
    #[error("character {ch:?} at position {position} is not a digit")]
    InvalidCharacter { position: usize, ch: char },
}

impl PinError {
    /// Stable code string (for logs and API bodies)
    pub fn code(&self) -> &'static str {
        match self {
            Self::Empty => "E001_EMPTY",
            Self::TooShort { .. } => "E002_TOO_SHORT",
            Self::DigitOutOfRange { .. } => "E003_DIGIT_OUT_OF_RANGE",
            Self::InvalidCharacter { .. } => "E004_INVALID_CHARACTER",
        }
    }
}
