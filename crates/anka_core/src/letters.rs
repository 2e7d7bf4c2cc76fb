//! Letter-to-digit mapping tables for the two supported naming systems.
//!
//! Two fixed 26-entry tables:
//! - **Pythagorean** (cyclic-9): `value = (alphabet_index % 9) + 1`, so the
//!   values cycle a=1 .. i=9, j=1 .. r=9, s=1 .. z=8.
//! - **Chaldean** (fixed table): the traditional non-cyclic assignment with
//!   no value of 9 (9 is held sacred and never assigned to a letter).
//!
//! Vowels are {a, e, i, o, u}. The letter 'y' is classified as a consonant;
//! context-sensitive vowel treatment of 'y' is a documented simplification.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Pythagorean values for a..z: `(index % 9) + 1`.
const PYTHAGOREAN_VALUES: [u8; 26] = [
    1, 2, 3, 4, 5, 6, 7, 8, 9, // a-i
    1, 2, 3, 4, 5, 6, 7, 8, 9, // j-r
    1, 2, 3, 4, 5, 6, 7, 8, // s-z
];

/// Chaldean values for a..z. No letter maps to 9.
const CHALDEAN_VALUES: [u8; 26] = [
    1, 2, 3, 4, 5, 8, 3, 5, 1, // a-i
    1, 2, 3, 4, 5, 7, 8, 1, 2, // j-r
    3, 4, 6, 6, 6, 5, 1, 7, // s-z
];

/// The two supported letter-mapping systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterSystem {
    /// Cyclic-9 table ("System A").
    Pythagorean,
    /// Fixed 1-8 table ("System B").
    Chaldean,
}

/// Both systems in order, for iteration and indexing.
pub const ALL_SYSTEMS: [LetterSystem; 2] = [LetterSystem::Pythagorean, LetterSystem::Chaldean];

impl LetterSystem {
    /// Canonical lowercase name of the system.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pythagorean => "pythagorean",
            Self::Chaldean => "chaldean",
        }
    }

    /// 0-based index (Pythagorean=0, Chaldean=1).
    pub const fn index(self) -> u8 {
        match self {
            Self::Pythagorean => 0,
            Self::Chaldean => 1,
        }
    }

    /// Parse a system name, case-insensitively.
    ///
    /// Accepts the canonical names plus the short aliases "a"/"cyclic9" and
    /// "b"/"fixed8". Anything else is a configuration error.
    pub fn from_name(name: &str) -> Result<Self, CoreError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "pythagorean" | "cyclic9" | "cyclic-9" | "a" => Ok(Self::Pythagorean),
            "chaldean" | "fixed8" | "fixed-8" | "b" => Ok(Self::Chaldean),
            _ => Err(CoreError::UnknownSystem(name.to_string())),
        }
    }

    /// The 26-entry value table for this system.
    pub const fn table(self) -> &'static [u8; 26] {
        match self {
            Self::Pythagorean => &PYTHAGOREAN_VALUES,
            Self::Chaldean => &CHALDEAN_VALUES,
        }
    }
}

impl std::fmt::Display for LetterSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// 0-based alphabet index for an ASCII letter, case-insensitive.
pub fn letter_index(c: char) -> Option<usize> {
    if c.is_ascii_alphabetic() {
        Some((c.to_ascii_lowercase() as u8 - b'a') as usize)
    } else {
        None
    }
}

/// Digit value of a letter under the given system, case-insensitive.
///
/// Returns `None` for anything that is not an ASCII letter.
pub fn letter_value(c: char, system: LetterSystem) -> Option<u8> {
    letter_index(c).map(|i| system.table()[i])
}

/// Whether the letter is a vowel (a, e, i, o, u), case-insensitive.
///
/// 'y' is never a vowel here.
pub fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Whether the character is a consonant: any ASCII letter that is not a vowel.
pub fn is_consonant(c: char) -> bool {
    c.is_ascii_alphabetic() && !is_vowel(c)
}
