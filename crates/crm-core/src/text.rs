//! Text normalization helpers
//!
//! Pure, stateless functions over free-text chat input: phone formatting and
//! validation, accent stripping, the name-likeness heuristic, and message-id
//! generation. No I/O, no side effects.

use rand::Rng;
use unicode_normalization::UnicodeNormalization;

use crm_shared::constants::{
    MAX_NAME_LENGTH, MAX_NAME_TOKENS, MIN_NAME_LENGTH, PHONE_DIGITS_LANDLINE, PHONE_DIGITS_MOBILE,
};

/// Strips every non-digit character.
pub fn extract_digits(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// A Brazilian phone number is valid iff it carries 10 or 11 digits.
pub fn is_valid_brazilian_phone(raw: &str) -> bool {
    let count = extract_digits(raw).len();
    count == PHONE_DIGITS_LANDLINE || count == PHONE_DIGITS_MOBILE
}

/// Formats a phone number for display: `(DD) DDDDD-DDDD` for 11 digits,
/// `(DD) DDDD-DDDD` for 10. Anything else is returned unchanged; this is a
/// display fallback, not an error.
pub fn format_phone_display(raw: &str) -> String {
    let digits = extract_digits(raw);
    match digits.len() {
        11 => format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..]),
        10 => format!("({}) {}-{}", &digits[..2], &digits[2..6], &digits[6..]),
        _ => raw.to_string(),
    }
}

/// Uppercases the first letter of every word. Other characters keep their
/// original casing.
pub fn capitalize_words(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut at_word_start = true;
    for c in raw.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            out.push(c);
        } else if at_word_start {
            out.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Heuristic for deciding whether a free-text chat message reads like a
/// person's name: trimmed length within [2, 30], no digits, at most 4
/// whitespace-delimited tokens, and only Unicode letters and spaces (covers
/// accented Latin characters).
pub fn looks_like_name(raw: &str) -> bool {
    let trimmed = raw.trim();
    let len = trimmed.chars().count();
    if len < MIN_NAME_LENGTH || len > MAX_NAME_LENGTH {
        return false;
    }
    if trimmed.chars().any(|c| c.is_numeric()) {
        return false;
    }
    if trimmed.split_whitespace().count() > MAX_NAME_TOKENS {
        return false;
    }
    trimmed.chars().all(|c| c.is_alphabetic() || c == ' ')
}

/// NFD-normalizes and drops combining marks, for accent-insensitive
/// comparisons.
pub fn remove_accents(raw: &str) -> String {
    raw.nfd()
        .filter(|c| !unicode_normalization::char::is_combining_mark(*c))
        .collect()
}

/// Builds a reasonably-unique message id from the current time plus a random
/// suffix. Collisions are negligible, not impossible; callers must not treat
/// this as a cryptographic identifier.
pub fn generate_message_id() -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let suffix: u32 = rand::rng().random();
    format!("{:x}-{:08x}", millis, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_digits() {
        assert_eq!(extract_digits("(61) 99999-8888"), "61999998888");
        assert_eq!(extract_digits("abc"), "");
    }

    #[test]
    fn test_is_valid_brazilian_phone() {
        assert!(is_valid_brazilian_phone("11999998888"));
        assert!(is_valid_brazilian_phone("1133334444"));
        assert!(is_valid_brazilian_phone("(11) 99999-8888"));
        assert!(!is_valid_brazilian_phone("123"));
        assert!(!is_valid_brazilian_phone(""));
        assert!(!is_valid_brazilian_phone("119999988887"));
    }

    #[test]
    fn test_format_phone_display() {
        assert_eq!(format_phone_display("61999998888"), "(61) 99999-8888");
        assert_eq!(format_phone_display("6133334444"), "(61) 3333-4444");
        // display fallback: unchanged
        assert_eq!(format_phone_display("123"), "123");
    }

    #[test]
    fn test_digit_round_trip_through_display() {
        for raw in ["61999998888", "1133334444", "(11) 98765-4321"] {
            let formatted = format_phone_display(raw);
            assert_eq!(extract_digits(&formatted), extract_digits(raw));
        }
    }

    #[test]
    fn test_capitalize_words() {
        assert_eq!(capitalize_words("maria silva"), "Maria Silva");
        assert_eq!(capitalize_words("josé das couves"), "José Das Couves");
        // other casing untouched
        assert_eq!(capitalize_words("mcDonald"), "McDonald");
    }

    #[test]
    fn test_looks_like_name() {
        assert!(looks_like_name("Maria Silva"));
        assert!(looks_like_name("José"));
        assert!(looks_like_name("  Ana Clara  "));
        assert!(!looks_like_name("Maria123"));
        assert!(!looks_like_name("a b c d e")); // 5 tokens
        assert!(!looks_like_name("M"));
        assert!(!looks_like_name("quero saber o preço do plano anual completo"));
        assert!(!looks_like_name("maria@email.com"));
    }

    #[test]
    fn test_remove_accents() {
        assert_eq!(remove_accents("João Conceição"), "Joao Conceicao");
        assert_eq!(remove_accents("sem acento"), "sem acento");
    }

    #[test]
    fn test_generate_message_id_varies() {
        // uniqueness is probabilistic; two consecutive ids sharing the same
        // millisecond still differ in the random suffix (barring a 1-in-2^32
        // collision, which this test accepts as negligible)
        let a = generate_message_id();
        let b = generate_message_id();
        assert_ne!(a, b);
    }
}
