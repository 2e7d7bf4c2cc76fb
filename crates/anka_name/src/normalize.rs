//! Unicode name normalization.
//!
//! Reduces arbitrary name text to lowercase a-z words separated by single
//! spaces: trims, collapses whitespace, turns punctuation into word breaks,
//! strips combining marks, transliterates known accented and special Latin
//! characters to their closest base letters, and drops everything else.
//!
//! The pipeline is idempotent: normalizing already-normalized text is a
//! no-op. No Unicode crate appears in the stack; the transliteration table
//! below covers the Latin-1 and Latin Extended-A characters that actually
//! show up in names, plus a handful of special letters (ß, æ, œ, þ, ð).

/// Combining-mark ranges stripped during diacritic removal.
fn is_combining_mark(c: char) -> bool {
    matches!(
        c,
        '\u{0300}'..='\u{036F}'
            | '\u{1AB0}'..='\u{1AFF}'
            | '\u{1DC0}'..='\u{1DFF}'
            | '\u{20D0}'..='\u{20FF}'
            | '\u{FE20}'..='\u{FE2F}'
    )
}

/// Punctuation that acts as a word break (hyphenated and quoted names).
fn is_punctuation_like(c: char) -> bool {
    c.is_ascii_punctuation()
        || matches!(
            c,
            '\u{2010}'..='\u{2015}' // hyphens and dashes
                | '’' | '‘' | '“' | '”' | '·' | '•' | '…'
        )
}

/// Closest Latin base letters for accented and special characters.
///
/// Keys are lowercase; callers lowercase before lookup. Unmapped non-ASCII
/// letters are dropped by the pipeline.
fn transliterate_char(c: char) -> Option<&'static str> {
    let mapped = match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => "a",
        'æ' => "ae",
        'ç' | 'ć' | 'ĉ' | 'ċ' | 'č' => "c",
        'ď' | 'đ' | 'ð' => "d",
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ĕ' | 'ė' | 'ę' | 'ě' => "e",
        'ĝ' | 'ğ' | 'ġ' | 'ģ' => "g",
        'ĥ' | 'ħ' => "h",
        'ì' | 'í' | 'î' | 'ï' | 'ĩ' | 'ī' | 'ĭ' | 'į' | 'ı' => "i",
        'ĵ' => "j",
        'ķ' => "k",
        'ĺ' | 'ļ' | 'ľ' | 'ł' => "l",
        'ñ' | 'ń' | 'ņ' | 'ň' => "n",
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ŏ' | 'ő' => "o",
        'œ' => "oe",
        'ŕ' | 'ŗ' | 'ř' => "r",
        'ś' | 'ŝ' | 'ş' | 'š' => "s",
        'ß' => "ss",
        'ţ' | 'ť' | 'ŧ' => "t",
        'þ' => "th",
        'ù' | 'ú' | 'û' | 'ü' | 'ũ' | 'ū' | 'ŭ' | 'ů' | 'ű' | 'ų' => "u",
        'ŵ' => "w",
        'ý' | 'ÿ' | 'ŷ' => "y",
        'ź' | 'ż' | 'ž' => "z",
        _ => return None,
    };
    Some(mapped)
}

/// Normalize a name to lowercase a-z words separated by single spaces.
///
/// With `transliterate` set, known accented and special Latin characters map
/// to their base letters before mark stripping; without it they are dropped
/// along with any other character outside a-z. Digits never survive. Empty
/// or all-whitespace input normalizes to the empty string.
pub fn normalize(name: &str, transliterate: bool) -> String {
    let mut out = String::with_capacity(name.len());
    for raw in name.chars() {
        for c in raw.to_lowercase() {
            if c.is_ascii_alphabetic() {
                out.push(c);
            } else if c.is_whitespace() || is_punctuation_like(c) {
                out.push(' ');
            } else if is_combining_mark(c) || c.is_numeric() {
                // diacritic marks and digits vanish without a word break
            } else if transliterate {
                if let Some(mapped) = transliterate_char(c) {
                    out.push_str(mapped);
                }
            }
        }
    }
    let mut collapsed = String::with_capacity(out.len());
    for word in out.split_whitespace() {
        if !collapsed.is_empty() {
            collapsed.push(' ');
        }
        collapsed.push_str(word);
    }
    collapsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_collapses() {
        assert_eq!(normalize("  John Doe  ", true), "john doe");
        assert_eq!(normalize("John \t\n  Doe", true), "john doe");
    }

    #[test]
    fn empty_inputs() {
        assert_eq!(normalize("", true), "");
        assert_eq!(normalize("   \t ", true), "");
        assert_eq!(normalize("123 456", true), "");
    }

    #[test]
    fn punctuation_becomes_word_break() {
        assert_eq!(normalize("Mary-Jane O'Brien", true), "mary jane o brien");
        assert_eq!(normalize("J. R. R. Tolkien", true), "j r r tolkien");
        assert_eq!(normalize("Anne–Sophie", true), "anne sophie");
    }

    #[test]
    fn digits_are_dropped_without_break() {
        assert_eq!(normalize("Jo4hn", true), "john");
    }

    #[test]
    fn transliterates_accented_letters() {
        assert_eq!(normalize("José García", true), "jose garcia");
        assert_eq!(normalize("Łukasz Dvořák", true), "lukasz dvorak");
        assert_eq!(normalize("Seán Ó Sé", true), "sean o se");
        assert_eq!(normalize("Größe", true), "grosse");
        assert_eq!(normalize("Þóra", true), "thora");
    }

    #[test]
    fn strips_decomposed_combining_marks() {
        // "e" + combining acute
        assert_eq!(normalize("Jose\u{0301}", true), "jose");
        assert_eq!(normalize("Jose\u{0301}", false), "jose");
    }

    #[test]
    fn without_transliteration_accents_are_dropped() {
        assert_eq!(normalize("José", false), "jos");
        assert_eq!(normalize("ß", false), "");
    }

    #[test]
    fn unknown_scripts_are_dropped() {
        assert_eq!(normalize("राम Smith", true), "smith");
    }

    #[test]
    fn idempotent() {
        for input in [
            "  John Doe  ",
            "Mary-Jane O'Brien",
            "José García",
            "Größe",
            "",
            "राम Smith 42",
        ] {
            let once = normalize(input, true);
            assert_eq!(normalize(&once, true), once, "input {input:?}");
        }
    }

    #[test]
    fn uppercase_accents_fold() {
        assert_eq!(normalize("ÉMILE ZOLA", true), "emile zola");
    }
}
