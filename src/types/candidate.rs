//! Candidate combinations

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;

use crate::types::{DigitSequence, PinError};
use crate::{CANDIDATE_COUNT, MOST_LIKELY_OFFSET};

/// One full rotation state of the lock, e.g. "975"
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Candidate(String);

impl Candidate {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parse back into wheel digits
    pub fn to_digits(&self) -> Result<DigitSequence, PinError> {
        self.0.parse()
    }
}

impl From<&DigitSequence> for Candidate {
    fn from(digits: &DigitSequence) -> Self {
        Self(digits.to_string())
    }
}

/// Only strings that read back as a digit sequence are candidates
impl TryFrom<String> for Candidate {
    type Error = PinError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse::<DigitSequence>()?;
        Ok(Self(value))
    }
}

impl From<Candidate> for String {
    fn from(candidate: Candidate) -> Self {
        candidate.0
    }
}

impl PartialEq<str> for Candidate {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Candidate {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The ten candidates, indexed by forward offset.
///
/// Only `CombinationGenerator` builds these, so the length is always
/// `CANDIDATE_COUNT`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CandidateSet(Vec<Candidate>);

impl CandidateSet {
    pub(crate) fn from_candidates(candidates: Vec<Candidate>) -> Self {
        debug_assert_eq!(candidates.len(), CANDIDATE_COUNT);
        Self(candidates)
    }

    pub fn as_slice(&self) -> &[Candidate] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, offset: usize) -> Option<&Candidate> {
        self.0.get(offset)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Candidate> {
        self.0.iter()
    }

    /// Index of the cell to highlight
    pub fn most_likely_index(&self) -> usize {
        MOST_LIKELY_OFFSET
    }

    /// Candidate at forward offset 7
    pub fn most_likely(&self) -> Option<&Candidate> {
        crate::core::most_likely(&self.0)
    }

    /// Candidate reached by turning every wheel `steps` positions backward
    pub fn backward(&self, steps: usize) -> Option<&Candidate> {
        let n = CANDIDATE_COUNT;
        self.0.get((n - steps % n) % n)
    }

    /// Offsets in the order they should be tried on the lock:
    /// most likely first, then the rest ascending.
    pub fn trial_order(&self) -> Vec<usize> {
        std::iter::once(MOST_LIKELY_OFFSET)
            .chain((0..self.0.len()).filter(|&n| n != MOST_LIKELY_OFFSET))
            .collect()
    }
}

impl Index<usize> for CandidateSet {
    type Output = Candidate;

    fn index(&self, offset: usize) -> &Candidate {
        &self.0[offset]
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a Candidate;
    type IntoIter = std::slice::Iter<'a, Candidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CombinationGenerator;

    fn set_for(text: &str) -> CandidateSet {
        let digits: DigitSequence = text.parse().unwrap();
        CombinationGenerator::new().generate(&digits)
    }

    #[test]
    fn test_backward_three_is_most_likely() {
        let set = set_for("208");
        assert_eq!(set.backward(3), set.most_likely());
        assert_eq!(set.backward(3).unwrap(), "975");
    }

    #[test]
    fn test_backward_zero_and_ten_are_identity() {
        let set = set_for("208");
        assert_eq!(set.backward(0).unwrap(), "208");
        assert_eq!(set.backward(10).unwrap(), "208");
        assert_eq!(set.backward(1).unwrap(), "197");
    }

    #[test]
    fn test_trial_order_starts_with_most_likely() {
        let set = set_for("000");
        let order = set.trial_order();
        assert_eq!(order, vec![7, 0, 1, 2, 3, 4, 5, 6, 8, 9]);
    }

    #[test]
    fn test_candidate_to_digits() {
        let set = set_for("019");
        assert_eq!(set[5].to_digits().unwrap().as_slice(), &[5u8, 6, 4][..]);
    }

    #[test]
    fn test_deserialize_rejects_non_digits() {
        assert!(serde_json::from_str::<Candidate>(r#""abc""#).is_err());
        assert!(serde_json::from_str::<Candidate>(r#""9a5""#).is_err());
        assert!(serde_json::from_str::<Candidate>(r#""""#).is_err());
    }

    #[test]
    fn test_deserialize_accepts_digits() {
        let c: Candidate = serde_json::from_str(r#""086""#).unwrap();
        assert_eq!(c, "086");
        assert_eq!(c.to_digits().unwrap().as_slice(), &[0u8, 8, 6][..]);
    }

    #[test]
    fn test_serializes_as_string_array() {
        let set = set_for("000");
        let json = serde_json::to_string(&set).unwrap();
        assert!(json.starts_with(r#"["000","111""#));
    }
}
