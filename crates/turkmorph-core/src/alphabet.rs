// Turkish alphabet and letter classification.
//
// Everything here works on single `char`s. Turkish has two distinct `i`
// letters (dotted `i`/`İ` and dotless `ı`/`I`), so case conversion must never
// go through the ASCII or default Unicode mappings for those four letters.

// ---------------------------------------------------------------------------
// Letter tables
// ---------------------------------------------------------------------------

/// Turkish vowels (lowercase), including the circumflexed loanword vowels.
const VOWELS: &[char] = &[
    'a', 'e', '\u{0131}', 'i', 'o', '\u{00F6}', 'u', '\u{00FC}', '\u{00E2}', '\u{00EE}',
    '\u{00FB}',
];

/// Front vowels: e i ö ü î.
const FRONTAL_VOWELS: &[char] = &['e', 'i', '\u{00F6}', '\u{00FC}', '\u{00EE}'];

/// Rounded vowels: o ö u ü û.
const ROUNDED_VOWELS: &[char] = &['o', '\u{00F6}', 'u', '\u{00FC}', '\u{00FB}'];

/// Voiceless consonants: ç f h k p s ş t.
const VOICELESS_CONSONANTS: &[char] = &['\u{00E7}', 'f', 'h', 'k', 'p', 's', '\u{015F}', 't'];

/// Voiceless stops (the consonants that alternate under voicing): ç k p t.
const VOICELESS_STOPS: &[char] = &['\u{00E7}', 'k', 'p', 't'];

/// Characters accepted as the orthographic apostrophe between a proper noun
/// or numeral and its suffixes.
pub const APOSTROPHES: &[char] = &['\'', '\u{2019}'];

// ---------------------------------------------------------------------------
// Case conversion
// ---------------------------------------------------------------------------

/// Convert a character to lowercase using Turkish rules (`I`→`ı`, `İ`→`i`).
pub fn turkish_lower(c: char) -> char {
    match c {
        'I' => '\u{0131}',
        '\u{0130}' => 'i',
        _ => c.to_lowercase().next().unwrap_or(c),
    }
}

/// Convert a character to uppercase using Turkish rules (`ı`→`I`, `i`→`İ`).
pub fn turkish_upper(c: char) -> char {
    match c {
        '\u{0131}' => 'I',
        'i' => '\u{0130}',
        _ => c.to_uppercase().next().unwrap_or(c),
    }
}

/// Lowercase a whole string with Turkish rules.
pub fn to_turkish_lower(s: &str) -> String {
    s.chars().map(turkish_lower).collect()
}

/// Check whether a character is an uppercase letter.
pub fn is_upper(c: char) -> bool {
    c.is_alphabetic() && c != turkish_lower(c)
}

// ---------------------------------------------------------------------------
// Phonological classification
// ---------------------------------------------------------------------------

/// Check whether a character is a letter (any script letter counts; the
/// phonological predicates below only recognize Turkish ones).
pub fn is_letter(c: char) -> bool {
    c.is_alphabetic()
}

/// Check whether a character is a Turkish vowel (case-insensitive).
pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&turkish_lower(c))
}

/// Check whether a character is a consonant: a letter that is not a vowel.
pub fn is_consonant(c: char) -> bool {
    is_letter(c) && !is_vowel(c)
}

/// Check whether a vowel is frontal. Returns `false` for non-vowels.
pub fn is_frontal(c: char) -> bool {
    FRONTAL_VOWELS.contains(&turkish_lower(c))
}

/// Check whether a vowel is rounded. Returns `false` for non-vowels.
pub fn is_rounded(c: char) -> bool {
    ROUNDED_VOWELS.contains(&turkish_lower(c))
}

/// Check whether a consonant is voiceless.
pub fn is_voiceless(c: char) -> bool {
    VOICELESS_CONSONANTS.contains(&turkish_lower(c))
}

/// Check whether a consonant is a voiceless stop (ç, k, p, t).
pub fn is_voiceless_stop(c: char) -> bool {
    VOICELESS_STOPS.contains(&turkish_lower(c))
}

/// The voiced counterpart a voiceless stop takes before a vowel-initial
/// suffix: p→b, ç→c, t→d, k→ğ. Returns `None` for other letters.
///
/// `k` after `n` voices to `g` (renk → rengi); pass the preceding letter to
/// get that behavior.
pub fn voice(c: char, previous: Option<char>) -> Option<char> {
    match turkish_lower(c) {
        'p' => Some('b'),
        '\u{00E7}' => Some('c'),
        't' => Some('d'),
        'k' if previous.map(turkish_lower) == Some('n') => Some('g'),
        'k' => Some('\u{011F}'),
        _ => None,
    }
}

/// The voiceless counterpart of a voiced stop: b→p, c→ç, d→t, ğ→k, g→k.
/// Returns `None` for letters that do not take part in the alternation.
pub fn devoice(c: char) -> Option<char> {
    match turkish_lower(c) {
        'b' => Some('p'),
        'c' => Some('\u{00E7}'),
        'd' => Some('t'),
        '\u{011F}' | 'g' => Some('k'),
        _ => None,
    }
}

/// Check whether a character is an orthographic apostrophe.
pub fn is_apostrophe(c: char) -> bool {
    APOSTROPHES.contains(&c)
}

/// Resolve a harmonic high vowel (`I` placeholder) from the frontness and
/// roundedness of the preceding vowel.
pub fn high_vowel(frontal: bool, rounded: bool) -> char {
    match (frontal, rounded) {
        (false, false) => '\u{0131}',
        (false, true) => 'u',
        (true, false) => 'i',
        (true, true) => '\u{00FC}',
    }
}

/// Resolve a harmonic low unrounded vowel (`A` placeholder).
pub fn low_vowel(frontal: bool) -> char {
    if frontal { 'e' } else { 'a' }
}

/// The name of a letter as read aloud in an abbreviation ("TBMM" is read
/// "te-be-me-me"). Vowels are read as themselves.
pub fn letter_name(c: char) -> Option<&'static str> {
    let name = match turkish_lower(c) {
        'a' => "a",
        'b' => "be",
        'c' => "ce",
        '\u{00E7}' => "\u{00E7}e",
        'd' => "de",
        'e' => "e",
        'f' => "fe",
        'g' => "ge",
        '\u{011F}' => "yumu\u{015F}akge",
        'h' => "he",
        '\u{0131}' => "\u{0131}",
        'i' => "i",
        'j' => "je",
        'k' => "ka",
        'l' => "le",
        'm' => "me",
        'n' => "ne",
        'o' => "o",
        '\u{00F6}' => "\u{00F6}",
        'p' => "pe",
        'q' => "kyu",
        'r' => "re",
        's' => "se",
        '\u{015F}' => "\u{015F}e",
        't' => "te",
        'u' => "u",
        '\u{00FC}' => "\u{00FC}",
        'v' => "ve",
        'w' => "ve",
        'x' => "iks",
        'y' => "ye",
        'z' => "ze",
        _ => return None,
    };
    Some(name)
}

/// Count the vowels in a word.
pub fn vowel_count(word: &str) -> usize {
    word.chars().filter(|&c| is_vowel(c)).count()
}

/// Return the last vowel in a word, if any.
pub fn last_vowel(word: &str) -> Option<char> {
    word.chars().rev().find(|&c| is_vowel(c))
}
