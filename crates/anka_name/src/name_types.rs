//! Types for name numerology results.

use anka_core::NumberResult;
use serde::{Deserialize, Serialize};

/// Per-letter entry of the name breakdown.
///
/// Exactly one of `is_vowel`/`is_consonant` is set for every entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterBreakdownEntry {
    /// The letter (lowercase a-z).
    pub letter: char,
    /// Digit value under the selected system.
    pub value: u8,
    /// Whether the letter is a vowel.
    pub is_vowel: bool,
    /// Whether the letter is a consonant.
    pub is_consonant: bool,
    /// 1-based position counted over letters only (spaces skipped).
    pub position: usize,
}

/// Raw and reduced total for one whitespace-delimited word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordTotal {
    /// The normalized word.
    pub word: String,
    /// Sum of the word's letter values.
    pub raw_total: u64,
    /// Reduction of `raw_total`.
    pub reduced: u64,
}

/// Full output of the name numerology calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameNumerologyResult {
    /// The name after normalization; every other field derives from this.
    pub normalized_name: String,
    /// Reduction of the total letter sum.
    pub expression: NumberResult,
    /// Reduction of the vowel letter sum.
    pub soul_urge: NumberResult,
    /// Reduction of the consonant letter sum.
    pub personality: NumberResult,
    /// Reduction of the sum of per-word reduced totals. This is a distinct
    /// aggregation from `expression` and the two may disagree.
    pub name_vibration: NumberResult,
    /// One entry per letter of the normalized name.
    pub breakdown: Vec<LetterBreakdownEntry>,
    /// One entry per word of the normalized name.
    pub word_totals: Vec<WordTotal>,
}
