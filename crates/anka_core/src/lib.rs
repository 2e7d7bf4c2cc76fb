//! Core numerology primitives: digit reduction and letter mapping tables.
//!
//! This crate provides:
//! - Digit reduction with optional master-number preservation
//! - The two letter-to-digit mapping systems (Pythagorean and Chaldean)
//! - Vowel/consonant classification
//!
//! Everything here is pure and allocation-light; the higher-level name,
//! phone, and matching crates build on these primitives.

pub mod error;
pub mod letters;
pub mod reduction;

pub use error::CoreError;
pub use letters::{
    ALL_SYSTEMS, LetterSystem, is_consonant, is_vowel, letter_index, letter_value,
};
pub use reduction::{MASTER_NUMBERS, NumberResult, digit_sum, is_master, reduce, reduce_value};
