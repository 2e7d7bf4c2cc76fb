//! Name numerology calculator.
//!
//! Turns a name into its expression, soul-urge, personality, and
//! name-vibration numbers with letter-by-letter and word-by-word breakdowns.

use anka_core::{LetterSystem, is_vowel, letter_value, reduce};

use crate::error::NameError;
use crate::name_types::{LetterBreakdownEntry, NameNumerologyResult, WordTotal};
use crate::normalize::normalize;

/// Compute all name numbers for `name` under the given letter system.
///
/// The name is normalized first; a name with no letters left is an
/// input-validation failure. `keep_master` is honored by every reduction,
/// including per-word totals.
///
/// `name_vibration` reduces the sum of the per-word *reduced* totals, which
/// is deliberately a different aggregation from `expression` (the reduction
/// of the grand letter sum); the two are independent outputs.
pub fn compute_name_numbers(
    name: &str,
    system: LetterSystem,
    keep_master: bool,
) -> Result<NameNumerologyResult, NameError> {
    let normalized = normalize(name, true);
    if normalized.is_empty() {
        return Err(NameError::EmptyName);
    }

    let mut breakdown = Vec::new();
    let mut word_totals = Vec::new();
    let mut total = 0u64;
    let mut vowel_sum = 0u64;
    let mut consonant_sum = 0u64;
    let mut position = 0usize;

    for word in normalized.split(' ') {
        let mut word_sum = 0u64;
        for c in word.chars() {
            let Some(value) = letter_value(c, system) else {
                continue;
            };
            position += 1;
            let vowel = is_vowel(c);
            breakdown.push(LetterBreakdownEntry {
                letter: c,
                value,
                is_vowel: vowel,
                is_consonant: !vowel,
                position,
            });
            let value = u64::from(value);
            word_sum += value;
            total += value;
            if vowel {
                vowel_sum += value;
            } else {
                consonant_sum += value;
            }
        }
        let reduced = reduce(word_sum, keep_master);
        word_totals.push(WordTotal {
            word: word.to_string(),
            raw_total: word_sum,
            reduced: reduced.reduced,
        });
    }

    let vibration_sum = word_totals.iter().map(|w| w.reduced).sum();

    Ok(NameNumerologyResult {
        normalized_name: normalized,
        expression: reduce(total, keep_master),
        soul_urge: reduce(vowel_sum, keep_master),
        personality: reduce(consonant_sum, keep_master),
        name_vibration: reduce(vibration_sum, keep_master),
        breakdown,
        word_totals,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn john_doe_pythagorean() {
        let r = compute_name_numbers("John Doe", LetterSystem::Pythagorean, true).unwrap();
        assert_eq!(r.normalized_name, "john doe");
        // j1 o6 h8 n5 d4 o6 e5
        assert_eq!(r.expression.raw_total, 35);
        assert_eq!(r.expression.reduced, 8);
        assert_eq!(r.soul_urge.raw_total, 17); // o6 o6 e5
        assert_eq!(r.soul_urge.reduced, 8);
        assert_eq!(r.personality.raw_total, 18); // j1 h8 n5 d4
        assert_eq!(r.personality.reduced, 9);
        assert_eq!(r.word_totals.len(), 2);
        assert_eq!(r.word_totals[0].raw_total, 20);
        assert_eq!(r.word_totals[0].reduced, 2);
        assert_eq!(r.word_totals[1].raw_total, 15);
        assert_eq!(r.word_totals[1].reduced, 6);
        // vibration reduces 2 + 6
        assert_eq!(r.name_vibration.raw_total, 8);
        assert_eq!(r.name_vibration.reduced, 8);
    }

    #[test]
    fn john_doe_chaldean() {
        let r = compute_name_numbers("John Doe", LetterSystem::Chaldean, true).unwrap();
        // j1 o7 h5 n5 d4 o7 e5
        assert_eq!(r.expression.raw_total, 34);
        assert_eq!(r.expression.reduced, 7);
        assert_eq!(r.soul_urge.raw_total, 19);
        assert_eq!(r.soul_urge.reduced, 1);
        assert_eq!(r.personality.raw_total, 15);
        assert_eq!(r.personality.reduced, 6);
        assert_eq!(r.name_vibration.reduced, 7); // words 18->9, 16->7; 9+7=16->7
    }

    #[test]
    fn vowel_consonant_sums_partition_total() {
        for name in ["John Doe", "Mary-Jane O'Brien", "José García", "y"] {
            for system in anka_core::ALL_SYSTEMS {
                let r = compute_name_numbers(name, system, true).unwrap();
                assert_eq!(
                    r.soul_urge.raw_total + r.personality.raw_total,
                    r.expression.raw_total,
                    "name {name:?} system {system}"
                );
            }
        }
    }

    #[test]
    fn breakdown_positions_and_classification() {
        let r = compute_name_numbers("Amy Lee", LetterSystem::Pythagorean, true).unwrap();
        let positions: Vec<usize> = r.breakdown.iter().map(|e| e.position).collect();
        assert_eq!(positions, vec![1, 2, 3, 4, 5, 6]);
        for entry in &r.breakdown {
            assert!(entry.is_vowel ^ entry.is_consonant, "letter {}", entry.letter);
        }
        assert!(r.breakdown[0].is_vowel); // a
        assert!(r.breakdown[1].is_consonant); // m
        assert!(r.breakdown[2].is_consonant); // y
    }

    #[test]
    fn empty_name_is_validation_error() {
        for input in ["", "   ", "1234", "!!!"] {
            let err = compute_name_numbers(input, LetterSystem::Pythagorean, true).unwrap_err();
            assert_eq!(err, NameError::EmptyName, "input {input:?}");
        }
    }

    #[test]
    fn master_preserved_in_word_totals() {
        // "aak" = 1+1+2 = 4; craft a word summing to 11: "aai" = 1+1+9
        let r = compute_name_numbers("aai", LetterSystem::Pythagorean, true).unwrap();
        assert_eq!(r.word_totals[0].raw_total, 11);
        assert_eq!(r.word_totals[0].reduced, 11);
        let r = compute_name_numbers("aai", LetterSystem::Pythagorean, false).unwrap();
        assert_eq!(r.word_totals[0].reduced, 2);
    }
}
