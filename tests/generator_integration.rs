//! Integration tests for the combination generator
//!
//! Tests the full path: free text → sanitizer → generator → output

use pretty_assertions::assert_eq;
use proptest::prelude::*;

use luggage_pin::core::{most_likely, CombinationGenerator, InputSanitizer};
use luggage_pin::types::{DigitSequence, GenerationOutput, PinError};
use luggage_pin::{CANDIDATE_COUNT, MOST_LIKELY_OFFSET};

fn candidates_for(text: &str) -> Vec<String> {
    let digits = InputSanitizer::new().parse(text).unwrap();
    CombinationGenerator::new()
        .generate(&digits)
        .iter()
        .map(|c| c.to_string())
        .collect()
}

// =============================================================================
// KNOWN EXAMPLES
// =============================================================================

#[test]
fn test_example_208() {
    assert_eq!(
        candidates_for("208"),
        vec!["208", "319", "420", "531", "642", "753", "864", "975", "086", "197"]
    );
}

#[test]
fn test_example_000_most_likely() {
    let digits: DigitSequence = "000".parse().unwrap();
    let set = CombinationGenerator::new().generate(&digits);
    assert_eq!(set.most_likely().unwrap(), "777");
    assert_eq!(set[9], "999");
}

#[test]
fn test_example_019_wraps() {
    assert_eq!(candidates_for("019")[5], "564");
}

#[test]
fn test_four_wheel_lock() {
    let out = candidates_for("9 9 0 1");
    assert_eq!(out[0], "9901");
    assert_eq!(out[1], "0012");
    assert_eq!(out[7], "6678");
}

// =============================================================================
// INPUT BOUNDARY
// =============================================================================

#[test]
fn test_separators_ignored() {
    assert_eq!(candidates_for("2-0-8"), candidates_for("208"));
}

#[test]
fn test_empty_rejected() {
    let sanitizer = InputSanitizer::new();
    assert_eq!(sanitizer.parse(""), Err(PinError::Empty));
    assert_eq!(sanitizer.parse("---"), Err(PinError::Empty));
}

#[test]
fn test_two_digits_rejected() {
    assert_eq!(
        InputSanitizer::new().parse("42"),
        Err(PinError::TooShort { len: 2, min: 3 })
    );
}

#[test]
fn test_output_highlights_offset_seven() {
    let digits = InputSanitizer::new().parse("208").unwrap();
    let set = CombinationGenerator::new().generate(&digits);
    let output = GenerationOutput::new(&digits, &set);

    assert_eq!(output.input, "208");
    assert_eq!(output.most_likely_index, MOST_LIKELY_OFFSET);
    assert_eq!(output.most_likely, "975");
    assert_eq!(output.trial_order[0], MOST_LIKELY_OFFSET);
}

// =============================================================================
// PROPERTIES
// =============================================================================

fn digit_vec() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..10, 3..16)
}

proptest! {
    #[test]
    fn prop_ten_candidates_of_input_length(raw in digit_vec()) {
        let set = CombinationGenerator::new().generate_from_digits(&raw).unwrap();
        prop_assert_eq!(set.len(), CANDIDATE_COUNT);
        for c in &set {
            prop_assert_eq!(c.len(), raw.len());
        }
    }

    #[test]
    fn prop_offset_zero_is_identity(raw in digit_vec()) {
        let digits = DigitSequence::new(raw).unwrap();
        let set = CombinationGenerator::new().generate(&digits);
        prop_assert_eq!(set[0].to_string(), digits.to_string());
    }

    #[test]
    fn prop_each_digit_shifted_mod_ten(raw in digit_vec()) {
        let set = CombinationGenerator::new().generate_from_digits(&raw).unwrap();
        for (n, c) in set.iter().enumerate() {
            for (i, ch) in c.as_str().chars().enumerate() {
                let expected = (raw[i] as usize + n) % 10;
                prop_assert_eq!(ch.to_digit(10), Some(expected as u32));
            }
        }
    }

    #[test]
    fn prop_full_cycle_closes(raw in digit_vec()) {
        let set = CombinationGenerator::new().generate_from_digits(&raw).unwrap();
        let last = set[9].to_digits().unwrap();
        prop_assert_eq!(last.shifted(1).to_string(), set[0].to_string());
    }

    #[test]
    fn prop_most_likely_is_offset_seven(raw in digit_vec()) {
        let set = CombinationGenerator::new().generate_from_digits(&raw).unwrap();
        prop_assert_eq!(most_likely(set.as_slice()), Some(&set[7]));
        prop_assert_eq!(set.backward(3), Some(&set[7]));
    }

    #[test]
    fn prop_trial_order_is_permutation(raw in digit_vec()) {
        let set = CombinationGenerator::new().generate_from_digits(&raw).unwrap();
        let mut order = set.trial_order();
        prop_assert_eq!(order[0], MOST_LIKELY_OFFSET);
        order.sort();
        prop_assert_eq!(order, (0..CANDIDATE_COUNT).collect::<Vec<_>>());
    }
}
