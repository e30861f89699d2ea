//! Digit sequence read off the witness holes

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::types::PinError;
use crate::{MIN_DIGITS, WHEEL_POSITIONS};

/// Validated wheel digits, left to right.
///
/// Always at least `MIN_DIGITS` long with every digit in 0-9.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct DigitSequence(Vec<u8>);

impl DigitSequence {
    /// Validate raw digits
    pub fn new(digits: Vec<u8>) -> Result<Self, PinError> {
        if digits.is_empty() {
            return Err(PinError::Empty);
        }
        if let Some((position, &value)) = digits
            .iter()
            .enumerate()
            .find(|&(_, &d)| d >= WHEEL_POSITIONS)
        {
            return Err(PinError::DigitOutOfRange { position, value });
        }
        if digits.len() < MIN_DIGITS {
            return Err(PinError::TooShort {
                len: digits.len(),
                min: MIN_DIGITS,
            });
        }
        Ok(Self(digits))
    }

    /// Digits as a slice
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Number of wheels
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true for a constructed sequence
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Rotate every wheel forward by `offset` positions
    pub fn shifted(&self, offset: usize) -> Self {
        let step = (offset % WHEEL_POSITIONS as usize) as u8;
        Self(
            self.0
                .iter()
                .map(|&d| (d + step) % WHEEL_POSITIONS)
                .collect(),
        )
    }
}

impl fmt::Display for DigitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in &self.0 {
            write!(f, "{}", d)?;
        }
        Ok(())
    }
}

/// Strict parse: every character must be a digit.
/// Use `InputSanitizer` for free text.
impl FromStr for DigitSequence {
    type Err = PinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .chars()
            .enumerate()
            .map(|(position, ch)| {
                ch.to_digit(10)
                    .map(|d| d as u8)
                    .ok_or(PinError::InvalidCharacter { position, ch })
            })
            .collect::<Result<Vec<u8>, _>>()?;
        Self::new(digits)
    }
}

impl TryFrom<Vec<u8>> for DigitSequence {
    type Error = PinError;

    fn try_from(digits: Vec<u8>) -> Result<Self, Self::Error> {
        Self::new(digits)
    }
}

impl From<DigitSequence> for Vec<u8> {
    fn from(seq: DigitSequence) -> Self {
        seq.0
    }
}
