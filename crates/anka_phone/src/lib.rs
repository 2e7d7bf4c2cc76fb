//! Phone number sanitization and numerology.
//!
//! This crate provides:
//! - A sanitizer/validator that turns raw phone text into E.164 form,
//!   extracting extensions and optionally converting vanity letters
//! - A pluggable country dial-code recognizer with a built-in table
//! - The phone numerology calculator: core number, repetition statistics,
//!   positional running sums, adjacent-pair sums, and the E1-E5 evidence map
//! - Phone-to-phone compatibility scoring
//!
//! Sanitization never fails with an error: an invalid number is a result
//! (`valid = false` plus a reason), because downstream layers store and
//! display invalidity rather than unwinding.

pub mod error;
pub mod numerology;
pub mod phone_types;
pub mod sanitize;

pub use error::PhoneError;
pub use numerology::{
    CoreMethod, DigitScope, PhoneOptions, compute_compatibility_score, compute_phone_numerology,
};
pub use phone_types::{PairSum, PhoneCompatibility, PhoneNumerologyResult, PositionalDigit};
pub use sanitize::{
    CountryRecognizer, DialCodeTable, PhoneSanitizationResult, SanitizeOptions,
    sanitize_and_validate, sanitize_and_validate_with,
};
