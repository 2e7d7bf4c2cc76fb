//! Phone numerology calculator.
//!
//! Derives the core number and the supporting digit statistics from a
//! sanitized phone number, and scores two phones against each other.

use std::collections::BTreeMap;

use anka_core::{reduce, reduce_value};

use crate::error::PhoneError;
use crate::phone_types::{PairSum, PhoneCompatibility, PhoneNumerologyResult, PositionalDigit};
use crate::sanitize::{CountryRecognizer, DialCodeTable, SanitizeOptions, sanitize_and_validate};

/// Points of compatibility lost per unit of core-number difference.
const COMPATIBILITY_SCALE: u64 = 10;

/// How the core number is reduced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoreMethod {
    /// Preserve master numbers (11, 22, 33) in the core reduction.
    Core,
    /// Always reduce to a single digit.
    Single,
}

impl CoreMethod {
    /// Canonical lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Core => "core",
            Self::Single => "single",
        }
    }

    /// Parse a method name, case-insensitively. Unknown names are
    /// configuration errors.
    pub fn from_name(name: &str) -> Result<Self, PhoneError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "core" => Ok(Self::Core),
            "single" => Ok(Self::Single),
            _ => Err(PhoneError::UnknownMethod(name.to_string())),
        }
    }

    /// Whether this method preserves master numbers.
    pub const fn keep_master(self) -> bool {
        matches!(self, Self::Core)
    }
}

/// Which digits of the sanitized number feed the calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DigitScope {
    /// Exclude the recognized country dial code.
    National,
    /// Include every digit.
    Full,
}

impl DigitScope {
    /// Canonical lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::National => "national",
            Self::Full => "full",
        }
    }

    /// Parse a scope name, case-insensitively. Unknown names are
    /// configuration errors.
    pub fn from_name(name: &str) -> Result<Self, PhoneError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "national" => Ok(Self::National),
            "full" => Ok(Self::Full),
            _ => Err(PhoneError::UnknownScope(name.to_string())),
        }
    }
}

/// Options for phone numerology.
#[derive(Debug, Clone, Default)]
pub struct PhoneOptions {
    /// Core reduction method.
    pub method: CoreMethod,
    /// Digit scope.
    pub scope: DigitScope,
    /// Sanitization options applied before any calculation.
    pub sanitize: SanitizeOptions,
}

impl Default for CoreMethod {
    fn default() -> Self {
        Self::Core
    }
}

impl Default for DigitScope {
    fn default() -> Self {
        Self::National
    }
}

/// Compute phone numerology for raw phone text.
///
/// Sanitizes first; a number the sanitizer rejects fails the whole call
/// with an input-validation error carrying the sanitizer's reason.
pub fn compute_phone_numerology(
    raw: &str,
    options: &PhoneOptions,
) -> Result<PhoneNumerologyResult, PhoneError> {
    let sanitized = sanitize_and_validate(raw, &options.sanitize);
    if !sanitized.valid {
        return Err(PhoneError::Invalid {
            reason: sanitized
                .reason
                .unwrap_or_else(|| "sanitization failed".to_string()),
        });
    }

    let digits = sanitized.digits_only;
    let scope_digits = match options.scope {
        DigitScope::Full => digits.as_str(),
        DigitScope::National => DialCodeTable
            .recognize(&digits)
            .map_or(digits.as_str(), |(code, _)| &digits[code.len()..]),
    };

    let keep_master = options.method.keep_master();
    let total: u64 = scope_digits
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(u64::from)
        .sum();
    let core_number = reduce(total, keep_master);

    let mut repeated_digits: BTreeMap<char, u32> = BTreeMap::new();
    for c in scope_digits.chars() {
        *repeated_digits.entry(c).or_insert(0) += 1;
    }

    // Ties resolve to the digit whose first occurrence comes earliest,
    // because a later digit only wins with a strictly higher count.
    let mut dominant_digit = scope_digits.chars().next().unwrap_or('0');
    let mut best = 0u32;
    for c in scope_digits.chars() {
        let count = repeated_digits.get(&c).copied().unwrap_or(0);
        if count > best {
            best = count;
            dominant_digit = c;
        }
    }

    let mut positional_sequence = Vec::with_capacity(scope_digits.len());
    let mut running_total = 0u64;
    for (i, c) in scope_digits.chars().enumerate() {
        running_total += u64::from(c.to_digit(10).unwrap_or(0));
        positional_sequence.push(PositionalDigit {
            position: i + 1,
            digit: c,
            running_total,
            running_reduced: reduce_value(running_total, false),
        });
    }

    let scope_bytes = scope_digits.as_bytes();
    let mut pair_sums = Vec::with_capacity(scope_bytes.len().saturating_sub(1));
    for w in scope_bytes.windows(2) {
        let a = u64::from(w[0] - b'0');
        let b = u64::from(w[1] - b'0');
        pair_sums.push(PairSum {
            pair: format!("{}{}", w[0] as char, w[1] as char),
            raw: a + b,
            reduced: reduce_value(a + b, false),
        });
    }

    let evidence_map = build_evidence(
        &core_number,
        &repeated_digits,
        dominant_digit,
        &positional_sequence,
        &pair_sums,
        options,
        scope_digits.len(),
    );

    tracing::debug!(
        core = core_number.reduced,
        dominant = %dominant_digit,
        scope = options.scope.name(),
        "computed phone numerology"
    );
    Ok(PhoneNumerologyResult {
        core_number,
        repeated_digits,
        dominant_digit,
        positional_sequence,
        pair_sums,
        evidence_map,
    })
}

fn build_evidence(
    core: &anka_core::NumberResult,
    repeated: &BTreeMap<char, u32>,
    dominant: char,
    positions: &[PositionalDigit],
    pairs: &[PairSum],
    options: &PhoneOptions,
    digit_count: usize,
) -> BTreeMap<String, String> {
    let mut map = BTreeMap::new();
    map.insert(
        "E1".to_string(),
        format!(
            "Core number {} from a digit total of {} across {} digits ({} scope, {} method).",
            core.reduced,
            core.raw_total,
            digit_count,
            options.scope.name(),
            options.method.name(),
        ),
    );
    let dominant_count = repeated.get(&dominant).copied().unwrap_or(0);
    map.insert(
        "E2".to_string(),
        format!(
            "Digit {} dominates with {} occurrences; {} distinct digits are present.",
            dominant,
            dominant_count,
            repeated.len(),
        ),
    );
    let trend = positions
        .last()
        .map(|p| format!("climbs to {} and settles on {}", p.running_total, p.running_reduced))
        .unwrap_or_else(|| "is empty".to_string());
    map.insert(
        "E3".to_string(),
        format!("The positional running total {trend}."),
    );
    let echoes = pairs.iter().filter(|p| p.reduced == core.reduced).count();
    map.insert(
        "E4".to_string(),
        format!(
            "{} of {} adjacent pairs reduce back to the core number.",
            echoes,
            pairs.len(),
        ),
    );
    map.insert(
        "E5".to_string(),
        format!(
            "Overall the number carries core {} with dominant digit {}; repetition and pair flow above support the reading.",
            core.reduced, dominant,
        ),
    );
    map
}

/// Score two phone numbers against each other.
///
/// Both numbers go through the full sanitize-and-compute pipeline; the
/// score falls off linearly with the difference of the reduced cores and
/// identical inputs always score the maximum.
pub fn compute_compatibility_score(
    phone1: &str,
    phone2: &str,
    options: &PhoneOptions,
) -> Result<PhoneCompatibility, PhoneError> {
    let first = compute_phone_numerology(phone1, options)?;
    let second = compute_phone_numerology(phone2, options)?;
    let difference = first.core_number.reduced.abs_diff(second.core_number.reduced);
    let compatibility_score = 100u64.saturating_sub(difference * COMPATIBILITY_SCALE);
    Ok(PhoneCompatibility {
        core_number_1: first.core_number,
        core_number_2: second.core_number,
        difference,
        compatibility_score,
    })
}
