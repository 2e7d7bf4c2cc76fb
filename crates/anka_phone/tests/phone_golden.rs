//! End-to-end phone pipeline tests: raw text through sanitization into
//! numerology and compatibility.

use anka_phone::{
    CoreMethod, DigitScope, PhoneError, PhoneOptions, SanitizeOptions, compute_compatibility_score,
    compute_phone_numerology, sanitize_and_validate,
};

#[test]
fn formatted_number_reaches_numerology_unchanged() {
    let plain = compute_phone_numerology("+14155552671", &PhoneOptions::default()).unwrap();
    let formatted =
        compute_phone_numerology("+1 (415) 555-2671", &PhoneOptions::default()).unwrap();
    assert_eq!(plain, formatted);
}

#[test]
fn extension_does_not_leak_into_digits() {
    let with_ext =
        compute_phone_numerology("+1 415 555 2671 ext 99", &PhoneOptions::default()).unwrap();
    let without = compute_phone_numerology("+14155552671", &PhoneOptions::default()).unwrap();
    assert_eq!(with_ext.core_number, without.core_number);
}

#[test]
fn vanity_number_full_pipeline() {
    let options = PhoneOptions {
        method: CoreMethod::Core,
        scope: DigitScope::Full,
        sanitize: SanitizeOptions {
            convert_vanity: true,
            ..SanitizeOptions::default()
        },
    };
    let r = compute_phone_numerology("+1-800-FLOWERS", &options).unwrap();
    // digits 18003569377
    assert_eq!(r.core_number.raw_total, 1 + 8 + 0 + 0 + 3 + 5 + 6 + 9 + 3 + 7 + 7);
    assert_eq!(r.positional_sequence.len(), 11);
}

#[test]
fn sanitizer_never_errors_on_garbage() {
    for raw in ["", "     ", "@@@", "abc", "+", "00", "++44"] {
        let r = sanitize_and_validate(raw, &SanitizeOptions::default());
        assert!(!r.valid, "raw {raw:?} should be invalid");
        assert!(r.reason.is_some(), "raw {raw:?} needs a reason");
    }
}

#[test]
fn numerology_rejects_what_the_sanitizer_rejects() {
    let err = compute_phone_numerology("415 555 2671", &PhoneOptions::default()).unwrap_err();
    let PhoneError::Invalid { reason } = err else {
        panic!("expected Invalid");
    };
    assert!(reason.contains("country code"));
}

#[test]
fn compatibility_is_symmetric() {
    let options = PhoneOptions::default();
    let ab = compute_compatibility_score("+14155552671", "+31206241111", &options).unwrap();
    let ba = compute_compatibility_score("+31206241111", "+14155552671", &options).unwrap();
    assert_eq!(ab.difference, ba.difference);
    assert_eq!(ab.compatibility_score, ba.compatibility_score);
    assert!(ab.compatibility_score <= 100);
}
