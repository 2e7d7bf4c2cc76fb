//! Name and birth-date numerology calculators.
//!
//! This crate provides:
//! - Unicode name normalization (whitespace, punctuation, diacritics,
//!   transliteration) down to lowercase a-z words
//! - The name numerology calculator: expression, soul urge, personality,
//!   and name vibration with letter and word breakdowns
//! - The birth/life-path calculator covering all nine core factors
//!
//! All calculators are pure functions of their inputs; "today" enters only
//! as an explicit reference date.

pub mod birth;
pub mod error;
pub mod name;
pub mod name_types;
pub mod normalize;

pub use birth::{
    ALL_FACTORS, CoreNumbers, Factor, NumerologyCalculator, parse_birth_date,
};
pub use error::NameError;
pub use name::compute_name_numbers;
pub use name_types::{LetterBreakdownEntry, NameNumerologyResult, WordTotal};
pub use normalize::normalize;
