// Case pattern detection with Turkish casing rules.

use crate::alphabet::{is_letter, is_upper};

/// Classification of character casing within a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseType {
    /// No letters found in the word (only digits, punctuation, etc.).
    NoLetters,
    /// All letters are lowercase: "kitap".
    AllLower,
    /// First letter is uppercase, rest are lowercase: "Ankara".
    FirstUpper,
    /// Mixed case that does not fit other patterns: "iPhone".
    Complex,
    /// All letters are uppercase: "TBMM".
    AllUpper,
}

/// Detect the case pattern of a word.
///
/// Non-letter characters (digits, apostrophes, hyphens) are ignored, so
/// "Ankara'ya" is `Complex` only if a letter after the apostrophe is
/// uppercase.
pub fn detect_case(word: &str) -> CaseType {
    let mut letters = word.chars().filter(|&c| is_letter(c));
    let Some(first) = letters.next() else {
        return CaseType::NoLetters;
    };

    let first_upper = is_upper(first);
    let mut rest_lower = true;
    let mut rest_upper = true;
    let mut rest_count = 0;
    for c in letters {
        rest_count += 1;
        if is_upper(c) {
            rest_lower = false;
        } else {
            rest_upper = false;
        }
    }

    match (first_upper, rest_lower, rest_upper) {
        (true, _, true) if rest_count > 0 => CaseType::AllUpper,
        (true, true, _) => CaseType::FirstUpper,
        (false, true, _) => CaseType::AllLower,
        _ => CaseType::Complex,
    }
}

/// Check whether a word starts with an uppercase letter.
pub fn starts_with_upper(word: &str) -> bool {
    word.chars().next().is_some_and(is_upper)
}
