//! Luggage Pin: recover a rotary luggage lock combination
//!
//! The witness holes on each wheel show the manufacturing set digits.
//! Rotating every wheel together by the same offset yields ten candidate
//! combinations; offset 7 (three steps backward) is the usual winner.

pub mod core;
pub mod types;

// =============================================================================
// INPUT LIMITS
// =============================================================================

/// Fewest set digits accepted from the witness holes
pub const MIN_DIGITS: usize = 3;

/// Positions on every wheel
pub const WHEEL_POSITIONS: u8 = 10;

// =============================================================================
// CANDIDATES
// =============================================================================

/// One candidate per forward offset 0..9
pub const CANDIDATE_COUNT: usize = WHEEL_POSITIONS as usize;

/// Forward offset of the most likely combination.
/// Forward 7 is the same wheel state as backward 3.
pub const MOST_LIKELY_OFFSET: usize = 7;

/// Candidates per row when rendered as a grid
pub const GRID_COLUMNS: usize = 5;

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
