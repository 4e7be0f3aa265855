// Turkish number-to-words spelling for numeral literals.

use turkmorph_core::PhoneticAttributes;

use crate::phonetics::resolve;

/// Error for numeral literals that cannot be spelled out.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NumeralError {
    #[error("malformed numeral literal: {0:?}")]
    Malformed(String),
    #[error("numeral magnitude too large: {0:?}")]
    MagnitudeTooLarge(String),
}

const ONES: [&str; 10] = [
    "",
    "bir",
    "iki",
    "\u{00FC}\u{00E7}",
    "d\u{00F6}rt",
    "be\u{015F}",
    "alt\u{0131}",
    "yedi",
    "sekiz",
    "dokuz",
];

const TENS: [&str; 10] = [
    "",
    "on",
    "yirmi",
    "otuz",
    "k\u{0131}rk",
    "elli",
    "altm\u{0131}\u{015F}",
    "yetmi\u{015F}",
    "seksen",
    "doksan",
];

/// Short-scale names for successive powers of one thousand.
const SCALES: [&str; 22] = [
    "",
    "bin",
    "milyon",
    "milyar",
    "trilyon",
    "katrilyon",
    "kentilyon",
    "seksilyon",
    "septilyon",
    "oktilyon",
    "nonilyon",
    "desilyon",
    "undesilyon",
    "dodesilyon",
    "tredesilyon",
    "katordesilyon",
    "kendesilyon",
    "seksdesilyon",
    "septendesilyon",
    "oktodesilyon",
    "novemdesilyon",
    "vigintilyon",
];

const ZERO: &str = "s\u{0131}f\u{0131}r";

/// Spell out a cardinal literal: optional sign, digits with optional `.`
/// thousands separators, optional `,` decimal fraction.
///
/// "-1.234,05" → "eksi bin iki yüz otuz dört virgül sıfır beş"
pub fn spell_out(literal: &str) -> Result<String, NumeralError> {
    let malformed = || NumeralError::Malformed(literal.to_string());
    let too_large = |_| NumeralError::MagnitudeTooLarge(literal.to_string());

    let (negative, unsigned) = match literal.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, literal.strip_prefix('+').unwrap_or(literal)),
    };
    let (integer, fraction) = match unsigned.split_once(',') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };
    let digits = strip_thousands_separators(integer).ok_or_else(malformed)?;

    let mut words = Vec::new();
    if negative {
        words.push("eksi".to_string());
    }
    words.push(spell_integer(&digits).map_err(too_large)?);

    if let Some(fraction) = fraction {
        if fraction.is_empty() || !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }
        words.push("virg\u{00FC}l".to_string());
        let significant = fraction.trim_start_matches('0');
        for _ in 0..fraction.len() - significant.len() {
            words.push(ZERO.to_string());
        }
        if !significant.is_empty() {
            words.push(spell_integer(significant).map_err(too_large)?);
        }
    }
    Ok(words.join(" "))
}

/// Spell out an ordinal: the cardinal words with the ordinal suffix on the
/// last word ("4" → "dördüncü").
pub fn spell_ordinal(digits: &str) -> Result<String, NumeralError> {
    let cardinal = spell_out(digits)?;
    Ok(ordinal_words(&cardinal))
}

/// Turn spelled cardinal words into their ordinal.
pub fn ordinal_words(cardinal: &str) -> String {
    let (head, last) = match cardinal.rsplit_once(' ') {
        Some((head, last)) => (Some(head), last),
        None => (None, cardinal),
    };
    // "dört" is the only number word whose final stop voices.
    let stem = match last {
        "d\u{00F6}rt" => "d\u{00F6}rd",
        other => other,
    };
    let suffix = resolve("+IncI", PhoneticAttributes::of(stem)).unwrap_or_default();
    match head {
        Some(head) => format!("{head} {stem}{suffix}"),
        None => format!("{stem}{suffix}"),
    }
}

/// Spell out a range of unsigned integers joined by `-` ("1-2-3" → "bir
/// iki üç").
pub fn spell_range(literal: &str) -> Result<String, NumeralError> {
    let mut words = Vec::new();
    for part in literal.split('-') {
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(NumeralError::Malformed(literal.to_string()));
        }
        words.push(spell_out(part)?);
    }
    if words.len() < 2 {
        return Err(NumeralError::Malformed(literal.to_string()));
    }
    Ok(words.join(" "))
}

/// Remove `.` thousands separators, checking group sizes. Returns `None`
/// when the integer part is not a valid digit sequence.
fn strip_thousands_separators(integer: &str) -> Option<String> {
    let groups: Vec<&str> = integer.split('.').collect();
    let valid = groups.iter().enumerate().all(|(i, group)| {
        let len_ok = if i == 0 {
            !group.is_empty() && (groups.len() == 1 || group.len() <= 3)
        } else {
            group.len() == 3
        };
        len_ok && group.bytes().all(|b| b.is_ascii_digit())
    });
    valid.then(|| groups.concat())
}

/// Spell out a plain digit string. `Err(())` when it exceeds the scale
/// table.
fn spell_integer(digits: &str) -> Result<String, ()> {
    let digits = digits.trim_start_matches('0');
    if digits.is_empty() {
        return Ok(ZERO.to_string());
    }
    let bytes = digits.as_bytes();
    let group_count = bytes.len().div_ceil(3);
    if group_count > SCALES.len() {
        return Err(());
    }

    let mut words: Vec<&str> = Vec::new();
    let first_len = bytes.len() - (group_count - 1) * 3;
    let mut start = 0;
    for group in 0..group_count {
        let len = if group == 0 { first_len } else { 3 };
        let value = bytes[start..start + len]
            .iter()
            .fold(0usize, |acc, b| acc * 10 + usize::from(b - b'0'));
        start += len;
        if value == 0 {
            continue;
        }
        let scale = SCALES[group_count - 1 - group];
        // "bin", not "bir bin".
        if !(value == 1 && scale == "bin") {
            push_below_thousand(value, &mut words);
        }
        if !scale.is_empty() {
            words.push(scale);
        }
    }
    Ok(words.join(" "))
}

fn push_below_thousand(value: usize, words: &mut Vec<&'static str>) {
    let (hundreds, tens, ones) = (value / 100, value / 10 % 10, value % 10);
    if hundreds > 1 {
        words.push(ONES[hundreds]);
    }
    if hundreds > 0 {
        words.push("y\u{00FC}z");
    }
    if tens > 0 {
        words.push(TENS[tens]);
    }
    if ones > 0 {
        words.push(ONES[ones]);
    }
}
