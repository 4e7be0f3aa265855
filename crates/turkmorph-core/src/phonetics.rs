// Phonetic boundary features of a character sequence.
//
// Suffix allomorph selection only ever looks at the edges of the stem: the
// last letter, the last vowel and (for roots) the first letter. These are
// captured in a small immutable bit set that is cheap to copy and hash, so it
// can double as a cache key for resolved suffix forms.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::alphabet::{
    is_frontal, is_letter, is_rounded, is_vowel, is_voiceless, is_voiceless_stop, turkish_lower,
};

/// A single phonetic boundary feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PhoneticAttribute {
    FirstLetterVowel,
    FirstLetterConsonant,
    LastLetterVowel,
    LastLetterConsonant,
    LastVowelFrontal,
    LastVowelBack,
    LastVowelRounded,
    LastVowelUnrounded,
    LastLetterVoiceless,
    LastLetterVoicelessStop,
    LastLetterNotVoiceless,
}

impl PhoneticAttribute {
    /// All attributes in declaration order.
    pub const ALL: [PhoneticAttribute; 11] = [
        PhoneticAttribute::FirstLetterVowel,
        PhoneticAttribute::FirstLetterConsonant,
        PhoneticAttribute::LastLetterVowel,
        PhoneticAttribute::LastLetterConsonant,
        PhoneticAttribute::LastVowelFrontal,
        PhoneticAttribute::LastVowelBack,
        PhoneticAttribute::LastVowelRounded,
        PhoneticAttribute::LastVowelUnrounded,
        PhoneticAttribute::LastLetterVoiceless,
        PhoneticAttribute::LastLetterVoicelessStop,
        PhoneticAttribute::LastLetterNotVoiceless,
    ];

    const fn bit(self) -> u16 {
        1 << (self as u16)
    }

    /// Short mnemonic used in debug output (`LLV`, `LVF`, ...).
    pub fn abbreviation(self) -> &'static str {
        match self {
            PhoneticAttribute::FirstLetterVowel => "FLV",
            PhoneticAttribute::FirstLetterConsonant => "FLC",
            PhoneticAttribute::LastLetterVowel => "LLV",
            PhoneticAttribute::LastLetterConsonant => "LLC",
            PhoneticAttribute::LastVowelFrontal => "LVF",
            PhoneticAttribute::LastVowelBack => "LVB",
            PhoneticAttribute::LastVowelRounded => "LVR",
            PhoneticAttribute::LastVowelUnrounded => "LVU",
            PhoneticAttribute::LastLetterVoiceless => "LLVless",
            PhoneticAttribute::LastLetterVoicelessStop => "LLVlessStop",
            PhoneticAttribute::LastLetterNotVoiceless => "LLNotVless",
        }
    }
}

/// Immutable set of [`PhoneticAttribute`]s.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PhoneticAttributes(u16);

impl PhoneticAttributes {
    /// The empty set.
    pub const EMPTY: PhoneticAttributes = PhoneticAttributes(0);

    /// Build a set from a slice of attributes.
    pub fn from_slice(attrs: &[PhoneticAttribute]) -> Self {
        PhoneticAttributes(attrs.iter().fold(0, |acc, a| acc | a.bit()))
    }

    /// Compute the features of a text. See [`calculate_phonetic_attributes`].
    pub fn of(text: &str) -> Self {
        calculate_phonetic_attributes(text)
    }

    pub fn contains(self, attr: PhoneticAttribute) -> bool {
        self.0 & attr.bit() != 0
    }

    /// Return a copy with `attr` added.
    #[must_use]
    pub fn with(self, attr: PhoneticAttribute) -> Self {
        PhoneticAttributes(self.0 | attr.bit())
    }

    /// Return a copy with `attr` removed.
    #[must_use]
    pub fn without(self, attr: PhoneticAttribute) -> Self {
        PhoneticAttributes(self.0 & !attr.bit())
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterate the attributes in declaration order.
    pub fn iter(self) -> impl Iterator<Item = PhoneticAttribute> {
        PhoneticAttribute::ALL
            .into_iter()
            .filter(move |a| self.contains(*a))
    }

    /// Swap the frontness of the last vowel.
    ///
    /// Used for roots carrying the InverseHarmony lexical attribute (saat →
    /// saati): the first suffix harmonizes as if the last vowel were front.
    #[must_use]
    pub fn with_inverse_harmony(self) -> Self {
        let frontal = self.contains(PhoneticAttribute::LastVowelFrontal);
        let back = self.contains(PhoneticAttribute::LastVowelBack);
        let mut flipped = self
            .without(PhoneticAttribute::LastVowelFrontal)
            .without(PhoneticAttribute::LastVowelBack);
        if frontal {
            flipped = flipped.with(PhoneticAttribute::LastVowelBack);
        }
        if back {
            flipped = flipped.with(PhoneticAttribute::LastVowelFrontal);
        }
        flipped
    }
}

impl fmt::Debug for PhoneticAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.iter().map(PhoneticAttribute::abbreviation))
            .finish()
    }
}

impl FromIterator<PhoneticAttribute> for PhoneticAttributes {
    fn from_iter<T: IntoIterator<Item = PhoneticAttribute>>(iter: T) -> Self {
        PhoneticAttributes(iter.into_iter().fold(0, |acc, a| acc | a.bit()))
    }
}

/// What the first letter of the next non-empty suffix must be.
///
/// Roots produced by voicing or doubling (kitab, hakk) only exist before a
/// vowel; their unvoiced twins (kitap) only before a consonant or at the end
/// of the word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhoneticExpectation {
    VowelStart,
    ConsonantStart,
}

impl PhoneticExpectation {
    /// Check whether a non-empty surface satisfies the expectation.
    pub fn is_satisfied_by(self, surface: &str) -> bool {
        match surface.chars().find(|&c| is_letter(c)) {
            Some(c) => match self {
                PhoneticExpectation::VowelStart => is_vowel(c),
                PhoneticExpectation::ConsonantStart => !is_vowel(c),
            },
            None => self == PhoneticExpectation::ConsonantStart,
        }
    }

    /// Whether the word may end while this expectation is still pending.
    pub fn allows_word_end(self) -> bool {
        self == PhoneticExpectation::ConsonantStart
    }
}

/// Compute the phonetic boundary features of `text`.
///
/// Only letters are considered: apostrophes, spaces and digits are skipped,
/// so "bin'" has the same features as "bin". Returns the empty set when the
/// text contains no letters.
pub fn calculate_phonetic_attributes(text: &str) -> PhoneticAttributes {
    let mut letters = text.chars().filter(|&c| is_letter(c)).map(turkish_lower);
    let Some(first) = letters.next() else {
        return PhoneticAttributes::EMPTY;
    };

    let mut attrs = PhoneticAttributes::EMPTY;
    attrs = attrs.with(if is_vowel(first) {
        PhoneticAttribute::FirstLetterVowel
    } else {
        PhoneticAttribute::FirstLetterConsonant
    });

    let mut last = first;
    let mut last_vowel = is_vowel(first).then_some(first);
    for c in letters {
        if is_vowel(c) {
            last_vowel = Some(c);
        }
        last = c;
    }

    if is_vowel(last) {
        attrs = attrs
            .with(PhoneticAttribute::LastLetterVowel)
            .with(PhoneticAttribute::LastLetterNotVoiceless);
    } else {
        attrs = attrs.with(PhoneticAttribute::LastLetterConsonant);
        if is_voiceless(last) {
            attrs = attrs.with(PhoneticAttribute::LastLetterVoiceless);
            if is_voiceless_stop(last) {
                attrs = attrs.with(PhoneticAttribute::LastLetterVoicelessStop);
            }
        } else {
            attrs = attrs.with(PhoneticAttribute::LastLetterNotVoiceless);
        }
    }

    if let Some(v) = last_vowel {
        attrs = attrs.with(if is_frontal(v) {
            PhoneticAttribute::LastVowelFrontal
        } else {
            PhoneticAttribute::LastVowelBack
        });
        attrs = attrs.with(if is_rounded(v) {
            PhoneticAttribute::LastVowelRounded
        } else {
            PhoneticAttribute::LastVowelUnrounded
        });
    }

    attrs
}

#[cfg(test)]
mod tests {
    use super::*;
    use PhoneticAttribute::*;

    #[test]
    fn empty_input_has_no_features() {
        assert!(calculate_phonetic_attributes("").is_empty());
        assert!(calculate_phonetic_attributes("123'").is_empty());
    }

    #[test]
    fn consonant_final_word() {
        let attrs = calculate_phonetic_attributes("kitap");
        assert_eq!(
            attrs,
            PhoneticAttributes::from_slice(&[
                FirstLetterConsonant,
                LastLetterConsonant,
                LastVowelBack,
                LastVowelUnrounded,
                LastLetterVoiceless,
                LastLetterVoicelessStop,
            ])
        );
    }

    #[test]
    fn vowel_final_word() {
        let attrs = calculate_phonetic_attributes("elma");
        assert!(attrs.contains(FirstLetterVowel));
        assert!(attrs.contains(LastLetterVowel));
        assert!(attrs.contains(LastLetterNotVoiceless));
        assert!(attrs.contains(LastVowelBack));
        assert!(!attrs.contains(LastLetterConsonant));
    }

    #[test]
    fn voiced_consonant_is_not_voiceless() {
        let attrs = calculate_phonetic_attributes("bin");
        assert!(attrs.contains(LastLetterNotVoiceless));
        assert!(attrs.contains(LastVowelFrontal));
        assert!(attrs.contains(LastVowelUnrounded));
        assert!(!attrs.contains(LastLetterVoiceless));
    }

    #[test]
    fn voiceless_fricative_is_not_a_stop() {
        let attrs = calculate_phonetic_attributes("ba\u{015F}");
        assert!(attrs.contains(LastLetterVoiceless));
        assert!(!attrs.contains(LastLetterVoicelessStop));
    }

    #[test]
    fn non_letters_are_skipped() {
        assert_eq!(
            calculate_phonetic_attributes("bin'"),
            calculate_phonetic_attributes("bin")
        );
        assert_eq!(
            calculate_phonetic_attributes("bir iki"),
            calculate_phonetic_attributes("biriki")
        );
    }

    #[test]
    fn uppercase_dotless_i_is_back() {
        let attrs = calculate_phonetic_attributes("KIR");
        assert!(attrs.contains(LastVowelBack));
        let attrs = calculate_phonetic_attributes("B\u{0130}R");
        assert!(attrs.contains(LastVowelFrontal));
    }

    #[test]
    fn inverse_harmony_flips_frontness_only() {
        let attrs = calculate_phonetic_attributes("saat");
        let flipped = attrs.with_inverse_harmony();
        assert!(flipped.contains(LastVowelFrontal));
        assert!(!flipped.contains(LastVowelBack));
        assert!(flipped.contains(LastVowelUnrounded));
        assert_eq!(flipped.with_inverse_harmony(), attrs);
    }

    #[test]
    fn expectation_checks_first_letter() {
        assert!(PhoneticExpectation::VowelStart.is_satisfied_by("\u{0131}"));
        assert!(!PhoneticExpectation::VowelStart.is_satisfied_by("da"));
        assert!(PhoneticExpectation::ConsonantStart.is_satisfied_by("ta"));
        assert!(PhoneticExpectation::ConsonantStart.allows_word_end());
        assert!(!PhoneticExpectation::VowelStart.allows_word_end());
    }

    #[test]
    fn debug_uses_abbreviations() {
        let attrs = PhoneticAttributes::from_slice(&[LastLetterVowel, LastVowelBack]);
        assert_eq!(format!("{attrs:?}"), "{\"LLV\", \"LVB\"}");
    }
}
