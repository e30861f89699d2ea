//! Combination generator: every wheel turned together by the same offset
//!
//! Candidate n = each set digit shifted forward by n (mod 10).
//! Candidate 7 (three steps backward) is flagged as most likely.

use tracing::debug;

use crate::types::{Candidate, CandidateSet, DigitSequence, PinError};
use crate::{CANDIDATE_COUNT, MOST_LIKELY_OFFSET};

/// Generator for the ten candidate combinations
#[derive(Debug, Default, Clone, Copy)]
pub struct CombinationGenerator;

impl CombinationGenerator {
    /// Create new generator
    pub fn new() -> Self {
        Self
    }

    /// All ten candidates for validated set digits, indexed by forward offset
    pub fn generate(&self, digits: &DigitSequence) -> CandidateSet {
        let candidates = (0..CANDIDATE_COUNT)
            .map(|n| Candidate::from(&digits.shifted(n)))
            .collect();

        debug!(input = %digits, wheels = digits.len(), "generated candidates");
        CandidateSet::from_candidates(candidates)
    }

    /// Validate raw digits, then generate
    pub fn generate_from_digits(&self, digits: &[u8]) -> Result<CandidateSet, PinError> {
        let digits = DigitSequence::new(digits.to_vec())?;
        Ok(self.generate(&digits))
    }
}

/// Candidate at forward offset 7, or `None` if the slice is too short
pub fn most_likely(candidates: &[Candidate]) -> Option<&Candidate> {
    candidates.get(MOST_LIKELY_OFFSET)
}

// =============================================================================
// TESTS
// =============================================================================
