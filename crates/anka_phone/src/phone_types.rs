//! Types for phone numerology results.

use std::collections::BTreeMap;

use anka_core::NumberResult;
use serde::{Deserialize, Serialize};

/// One step of the positional walk over the in-scope digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionalDigit {
    /// 1-based position within the scope.
    pub position: usize,
    /// The digit at this position.
    pub digit: char,
    /// Cumulative digit sum up to and including this position.
    pub running_total: u64,
    /// Single-digit reduction of `running_total` (masters not preserved).
    pub running_reduced: u64,
}

/// Sum of one adjacent digit pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairSum {
    /// The two digits, in order.
    pub pair: String,
    /// Raw sum of the pair.
    pub raw: u64,
    /// Single-digit reduction of the sum.
    pub reduced: u64,
}

/// Full output of the phone numerology calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneNumerologyResult {
    /// Reduction of the sum of all in-scope digits.
    pub core_number: NumberResult,
    /// Occurrence count per digit character in scope.
    pub repeated_digits: BTreeMap<char, u32>,
    /// Most frequent digit; ties go to the earliest first occurrence.
    pub dominant_digit: char,
    /// Left-to-right walk with running totals.
    pub positional_sequence: Vec<PositionalDigit>,
    /// Adjacent-pair sums, left to right.
    pub pair_sums: Vec<PairSum>,
    /// Labeled E1-E5 prose summaries for the downstream explanation
    /// generator.
    pub evidence_map: BTreeMap<String, String>,
}

/// Outcome of comparing two phone numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneCompatibility {
    /// Core number of the first phone.
    pub core_number_1: NumberResult,
    /// Core number of the second phone.
    pub core_number_2: NumberResult,
    /// Absolute difference of the reduced cores.
    pub difference: u64,
    /// 0-100; identical cores score 100.
    pub compatibility_score: u64,
}
