//! Output structures for terminal display and JSON

use chrono::{DateTime, Utc};
use colored::Colorize;
use serde::{Deserialize, Serialize};

use crate::types::{Candidate, CandidateSet, DigitSequence};
use crate::GRID_COLUMNS;

/// Result of one submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationOutput {
    /// Timestamp
    pub timestamp: DateTime<Utc>,
    /// Set digits as entered (after sanitizing)
    pub input: String,
    /// All ten candidates by forward offset
    pub candidates: Vec<Candidate>,
    /// Highlighted candidate
    pub most_likely: Candidate,
    /// Offset of the highlighted candidate
    pub most_likely_index: usize,
    /// Offsets in the order to try them
    pub trial_order: Vec<usize>,
}

impl GenerationOutput {
    /// Build from a generated set
    pub fn new(digits: &DigitSequence, candidates: &CandidateSet) -> Self {
        let most_likely_index = candidates.most_likely_index();
        Self {
            timestamp: Utc::now(),
            input: digits.to_string(),
            candidates: candidates.as_slice().to_vec(),
            most_likely: candidates[most_likely_index].clone(),
            most_likely_index,
            trial_order: candidates.trial_order(),
        }
    }

    /// Grid with the most likely cell highlighted
    pub fn to_terminal_string(&self) -> String {
        self.grid(|i, cell| {
            if i == self.most_likely_index {
                cell.green().bold().to_string()
            } else {
                cell.dimmed().to_string()
            }
        })
    }

    /// Grid without colors, most likely cell in brackets
    pub fn to_parseable_string(&self) -> String {
        self.grid(|i, cell| {
            if i == self.most_likely_index {
                format!("[{}]", cell)
            } else {
                format!(" {} ", cell)
            }
        })
    }

    /// Candidate offsets in trial order with their combinations
    pub fn trial_lines(&self) -> Vec<String> {
        self.trial_order
            .iter()
            .filter_map(|&n| self.candidates.get(n).map(|c| (n, c)))
            .enumerate()
            .map(|(step, (offset, c))| format!("{:>2}. {} (offset +{})", step + 1, c, offset))
            .collect()
    }

    fn grid<F>(&self, mut cell: F) -> String
    where
        F: FnMut(usize, &str) -> String,
    {
        self.candidates
            .chunks(GRID_COLUMNS)
            .enumerate()
            .map(|(row, chunk)| {
                chunk
                    .iter()
                    .enumerate()
                    .map(|(col, c)| cell(row * GRID_COLUMNS + col, c.as_str()))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
