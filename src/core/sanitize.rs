//! Input sanitizer: free text to set digits
//!
//! Anything that is not 0-9 is dropped before validation, so
//! "2 0 8", "2-0-8" and "208" all read the same.

use lazy_static::lazy_static;
use regex::Regex;

use crate::types::{DigitSequence, PinError};

lazy_static! {
    static ref RE_NON_DIGIT: Regex = Regex::new(r"[^0-9]").unwrap();
}

/// Sanitizer for user-typed digits
#[derive(Debug, Default, Clone, Copy)]
pub struct InputSanitizer;

impl InputSanitizer {
    /// Create new sanitizer
    pub fn new() -> Self {
        Self
    }

    /// Strip everything except ASCII digits
    pub fn sanitize(&self, text: &str) -> String {
        RE_NON_DIGIT.replace_all(text, "").into_owned()
    }

    /// Strip, then validate into a digit sequence
    pub fn parse(&self, text: &str) -> Result<DigitSequence, PinError> {
        self.sanitize(text).parse()
    }
}
