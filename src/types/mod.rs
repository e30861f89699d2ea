//! Core types for Luggage Pin

mod error;
mod digits;
mod candidate;
mod output;

pub use error::PinError;
pub use digits::DigitSequence;
pub use candidate::{Candidate, CandidateSet};
pub use output::GenerationOutput;
