//! Phone number sanitization and validation.
//!
//! Normalizes raw phone text into E.164 form: folds Unicode digit variants
//! to ASCII, strips formatting, extracts extension suffixes, converts a
//! leading `00` international prefix to `+`, optionally converts vanity
//! keypad letters, and validates digit count and country-code presence.
//!
//! Invalidity is a result, never an error: every failure path still carries
//! whatever digits were recovered, so callers can store and display the
//! rejected input.

use serde::{Deserialize, Serialize};

/// Options for sanitization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SanitizeOptions {
    /// Convert keypad letters (2=ABC .. 9=WXYZ) instead of rejecting them.
    pub convert_vanity: bool,
    /// Minimum acceptable digit count, country code included.
    pub min_digits: usize,
    /// Maximum acceptable digit count, country code included.
    pub max_digits: usize,
    /// Country label to report on success, overriding the recognizer.
    pub country_hint: Option<String>,
}

impl Default for SanitizeOptions {
    /// E.164 bounds: 8 to 15 digits, no vanity conversion, no hint.
    fn default() -> Self {
        Self {
            convert_vanity: false,
            min_digits: 8,
            max_digits: 15,
            country_hint: None,
        }
    }
}

/// Outcome of sanitization. Created for every input, valid or not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneSanitizationResult {
    /// `+` followed by all digits; only set when valid.
    pub e164: Option<String>,
    /// The digits recovered so far, even on failure.
    pub digits_only: String,
    /// Whether the number passed every check.
    pub valid: bool,
    /// Failure reason when invalid.
    pub reason: Option<String>,
    /// Extension digits, when an `ext`/`x` suffix was detected.
    pub extension: Option<String>,
    /// Country label from the hint or the recognizer.
    pub country: Option<String>,
}

impl PhoneSanitizationResult {
    fn invalid(reason: impl Into<String>, digits_only: String, extension: Option<String>) -> Self {
        Self {
            e164: None,
            digits_only,
            valid: false,
            reason: Some(reason.into()),
            extension,
            country: None,
        }
    }
}

/// Leading dial-code recognition, pluggable so deployments can swap in a
/// full ITU table without touching the sanitizer.
pub trait CountryRecognizer {
    /// Recognize the leading dial code of `digits` (no `+` included).
    /// Returns the matched code and a country label. The match must leave at
    /// least one national digit behind.
    fn recognize<'d>(&self, digits: &'d str) -> Option<(&'d str, &'static str)>;
}

/// Common ITU dial codes, longest match first.
const DIAL_CODES: &[(&str, &str)] = &[
    ("1", "US/CA"),
    ("7", "RU/KZ"),
    ("20", "EG"),
    ("27", "ZA"),
    ("30", "GR"),
    ("31", "NL"),
    ("32", "BE"),
    ("33", "FR"),
    ("34", "ES"),
    ("39", "IT"),
    ("40", "RO"),
    ("41", "CH"),
    ("43", "AT"),
    ("44", "GB"),
    ("45", "DK"),
    ("46", "SE"),
    ("47", "NO"),
    ("48", "PL"),
    ("49", "DE"),
    ("51", "PE"),
    ("52", "MX"),
    ("55", "BR"),
    ("61", "AU"),
    ("62", "ID"),
    ("63", "PH"),
    ("64", "NZ"),
    ("65", "SG"),
    ("66", "TH"),
    ("81", "JP"),
    ("82", "KR"),
    ("84", "VN"),
    ("86", "CN"),
    ("90", "TR"),
    ("91", "IN"),
    ("92", "PK"),
    ("94", "LK"),
    ("95", "MM"),
    ("98", "IR"),
    ("212", "MA"),
    ("234", "NG"),
    ("254", "KE"),
    ("351", "PT"),
    ("353", "IE"),
    ("358", "FI"),
    ("380", "UA"),
    ("420", "CZ"),
    ("880", "BD"),
    ("966", "SA"),
    ("971", "AE"),
    ("972", "IL"),
    ("977", "NP"),
];

/// Built-in recognizer over [`DIAL_CODES`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DialCodeTable;

impl CountryRecognizer for DialCodeTable {
    fn recognize<'d>(&self, digits: &'d str) -> Option<(&'d str, &'static str)> {
        for len in (1..=3).rev() {
            if digits.len() <= len {
                continue;
            }
            let prefix = &digits[..len];
            if let Some((_, name)) = DIAL_CODES.iter().find(|(code, _)| *code == prefix) {
                return Some((prefix, name));
            }
        }
        None
    }
}

/// Fold Unicode decimal digit variants to their ASCII digit.
fn fold_digit(c: char) -> char {
    let base = match c {
        '0'..='9' => return c,
        '\u{0660}'..='\u{0669}' => 0x0660, // Arabic-Indic
        '\u{06F0}'..='\u{06F9}' => 0x06F0, // Extended Arabic-Indic
        '\u{0966}'..='\u{096F}' => 0x0966, // Devanagari
        '\u{09E6}'..='\u{09EF}' => 0x09E6, // Bengali
        '\u{0A66}'..='\u{0A6F}' => 0x0A66, // Gurmukhi
        '\u{0AE6}'..='\u{0AEF}' => 0x0AE6, // Gujarati
        '\u{0BE6}'..='\u{0BEF}' => 0x0BE6, // Tamil
        '\u{FF10}'..='\u{FF19}' => 0xFF10, // fullwidth
        _ => return c,
    };
    char::from_digit(c as u32 - base, 10).unwrap_or(c)
}

/// Keypad digit for a vanity letter.
fn keypad_digit(c: char) -> Option<char> {
    let d = match c.to_ascii_lowercase() {
        'a' | 'b' | 'c' => '2',
        'd' | 'e' | 'f' => '3',
        'g' | 'h' | 'i' => '4',
        'j' | 'k' | 'l' => '5',
        'm' | 'n' | 'o' => '6',
        'p' | 'q' | 'r' | 's' => '7',
        't' | 'u' | 'v' => '8',
        'w' | 'x' | 'y' | 'z' => '9',
        _ => return None,
    };
    Some(d)
}

/// Split a trailing extension off the number body.
///
/// Markers are scanned case-insensitively in priority order; a marker only
/// counts when everything after it is digits and light formatting. A
/// leading `x` is never a marker, so vanity numbers survive.
fn split_extension(text: &str) -> (String, Option<String>) {
    let lower = text.to_ascii_lowercase();
    for marker in [";ext=", "extension", "ext", "x"] {
        let Some(idx) = lower.rfind(marker) else {
            continue;
        };
        if idx == 0 {
            continue;
        }
        let after = &text[idx + marker.len()..];
        let ext: String = after.chars().filter(char::is_ascii_digit).collect();
        let clean = after
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '.' | ':' | '=' | '-' | '(' | ')'));
        if !ext.is_empty() && clean {
            return (text[..idx].to_string(), Some(ext));
        }
    }
    (text.to_string(), None)
}

/// Characters treated as pure formatting and dropped.
fn is_formatting(c: char) -> bool {
    c.is_whitespace() || matches!(c, '(' | ')' | '-' | '.' | '/' | '\u{2010}'..='\u{2015}')
}

/// Sanitize and validate with the built-in dial-code recognizer.
pub fn sanitize_and_validate(raw: &str, options: &SanitizeOptions) -> PhoneSanitizationResult {
    sanitize_and_validate_with(raw, options, &DialCodeTable)
}

/// Sanitize and validate raw phone text.
///
/// Checks run in a fixed order so the reported reason is the earliest
/// failure: empty input, unexpected characters, letters (without vanity
/// conversion), digit count, missing country code.
pub fn sanitize_and_validate_with(
    raw: &str,
    options: &SanitizeOptions,
    recognizer: &dyn CountryRecognizer,
) -> PhoneSanitizationResult {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return PhoneSanitizationResult::invalid("empty phone number", String::new(), None);
    }

    let folded: String = trimmed.chars().map(fold_digit).collect();
    let (body, extension) = split_extension(&folded);

    let compact: String = body.chars().filter(|c| !is_formatting(*c)).collect();

    let (has_plus, rest) = if let Some(r) = compact.strip_prefix('+') {
        (true, r)
    } else if let Some(r) = compact.strip_prefix("00") {
        (true, r)
    } else {
        (false, compact.as_str())
    };

    let mut digits = String::with_capacity(rest.len());
    let mut letters = false;
    for c in rest.chars() {
        if c.is_ascii_digit() {
            digits.push(c);
        } else if c.is_ascii_alphabetic() {
            if options.convert_vanity {
                if let Some(d) = keypad_digit(c) {
                    digits.push(d);
                }
            } else {
                letters = true;
            }
        } else {
            return PhoneSanitizationResult::invalid(
                format!("unexpected character {c:?}"),
                digits,
                extension,
            );
        }
    }
    if letters {
        return PhoneSanitizationResult::invalid(
            "contains letters and vanity conversion is off",
            digits,
            extension,
        );
    }

    if digits.len() < options.min_digits {
        return PhoneSanitizationResult::invalid(
            format!("too short: {} digits, minimum {}", digits.len(), options.min_digits),
            digits,
            extension,
        );
    }
    if digits.len() > options.max_digits {
        return PhoneSanitizationResult::invalid(
            format!("too long: {} digits, maximum {}", digits.len(), options.max_digits),
            digits,
            extension,
        );
    }
    if !has_plus {
        return PhoneSanitizationResult::invalid(
            "missing country code: no leading + or 00 prefix",
            digits,
            extension,
        );
    }

    let country = options
        .country_hint
        .clone()
        .or_else(|| recognizer.recognize(&digits).map(|(_, name)| name.to_string()));

    tracing::trace!(digits = %digits, country = ?country, "sanitized phone number");
    PhoneSanitizationResult {
        e164: Some(format!("+{digits}")),
        digits_only: digits,
        valid: true,
        reason: None,
        extension,
        country,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formatted_nanp_number() {
        let r = sanitize_and_validate("+1 (415) 555-2671", &SanitizeOptions::default());
        assert!(r.valid, "reason: {:?}", r.reason);
        assert_eq!(r.e164.as_deref(), Some("+14155552671"));
        assert_eq!(r.digits_only, "14155552671");
        assert_eq!(r.country.as_deref(), Some("US/CA"));
        assert_eq!(r.extension, None);
    }

    #[test]
    fn empty_input() {
        for raw in ["", "   "] {
            let r = sanitize_and_validate(raw, &SanitizeOptions::default());
            assert!(!r.valid);
            assert!(r.reason.as_deref().unwrap_or_default().contains("empty"));
        }
    }

    #[test]
    fn double_zero_prefix_becomes_plus() {
        let r = sanitize_and_validate("0044 20 7946 0958", &SanitizeOptions::default());
        assert!(r.valid, "reason: {:?}", r.reason);
        assert_eq!(r.e164.as_deref(), Some("+442079460958"));
        assert_eq!(r.country.as_deref(), Some("GB"));
    }

    #[test]
    fn missing_country_code() {
        let r = sanitize_and_validate("415 555 2671", &SanitizeOptions::default());
        assert!(!r.valid);
        assert!(r.reason.as_deref().unwrap_or_default().contains("country code"));
        assert_eq!(r.digits_only, "4155552671");
    }

    #[test]
    fn vanity_conversion() {
        let options = SanitizeOptions {
            convert_vanity: true,
            ..SanitizeOptions::default()
        };
        let r = sanitize_and_validate("1-800-FLOWERS", &options);
        assert!(r.digits_only.contains("3569377"), "digits: {}", r.digits_only);
        assert_eq!(r.digits_only, "18003569377");
        // still invalid: no country-code prefix
        assert!(!r.valid);
        assert!(r.reason.as_deref().unwrap_or_default().contains("country code"));
    }

    #[test]
    fn letters_rejected_without_vanity() {
        let r = sanitize_and_validate("+1-800-FLOWERS", &SanitizeOptions::default());
        assert!(!r.valid);
        assert!(r.reason.as_deref().unwrap_or_default().contains("letters"));
    }

    #[test]
    fn extension_markers() {
        for raw in [
            "+1 415 555 2671 ext 42",
            "+1 415 555 2671 x42",
            "+1 415 555 2671;ext=42",
            "+1 415 555 2671 extension 42",
        ] {
            let r = sanitize_and_validate(raw, &SanitizeOptions::default());
            assert!(r.valid, "raw {raw:?} reason {:?}", r.reason);
            assert_eq!(r.extension.as_deref(), Some("42"), "raw {raw:?}");
            assert_eq!(r.e164.as_deref(), Some("+14155552671"), "raw {raw:?}");
        }
    }

    #[test]
    fn length_bounds() {
        let r = sanitize_and_validate("+12345", &SanitizeOptions::default());
        assert!(!r.valid);
        assert!(r.reason.as_deref().unwrap_or_default().contains("too short"));

        let r = sanitize_and_validate("+1234567890123456", &SanitizeOptions::default());
        assert!(!r.valid);
        assert!(r.reason.as_deref().unwrap_or_default().contains("too long"));
    }

    #[test]
    fn unicode_digits_fold() {
        // Devanagari ९१ then ASCII, a plausible Indian mobile
        let r = sanitize_and_validate("+९१ 98765 43210", &SanitizeOptions::default());
        assert!(r.valid, "reason: {:?}", r.reason);
        assert_eq!(r.e164.as_deref(), Some("+919876543210"));
        assert_eq!(r.country.as_deref(), Some("IN"));
    }

    #[test]
    fn country_hint_wins() {
        let options = SanitizeOptions {
            country_hint: Some("IN".to_string()),
            ..SanitizeOptions::default()
        };
        let r = sanitize_and_validate("+14155552671", &options);
        assert_eq!(r.country.as_deref(), Some("IN"));
    }

    #[test]
    fn unexpected_character_rejected() {
        let r = sanitize_and_validate("+1415555#671", &SanitizeOptions::default());
        assert!(!r.valid);
        assert!(r.reason.as_deref().unwrap_or_default().contains("unexpected"));
    }

    #[test]
    fn recognizer_prefers_longest_match() {
        // 971 (AE) must win over 9 + 7...
        let (code, name) = DialCodeTable.recognize("971501234567").unwrap();
        assert_eq!(code, "971");
        assert_eq!(name, "AE");
        let (code, name) = DialCodeTable.recognize("14155552671").unwrap();
        assert_eq!(code, "1");
        assert_eq!(name, "US/CA");
    }

    #[test]
    fn recognizer_requires_national_remainder() {
        assert!(DialCodeTable.recognize("1").is_none());
    }
}
