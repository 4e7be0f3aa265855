// Root hypotheses: a literal prefix of the input paired with a lexeme.

use std::sync::Arc;

use crate::alphabet::{is_vowel, turkish_lower};
use crate::lexeme::{Lexeme, LexemeAttribute, SyntacticCategory};
use crate::phonetics::{PhoneticAttributes, PhoneticExpectation, calculate_phonetic_attributes};

/// Where a root hypothesis came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RootOrigin {
    /// Generated from a lexicon entry.
    Dictionary,
    /// Synthesized on the fly (brute force, proper nouns, punctuation).
    Dynamic,
    /// Synthesized from a numeral literal; carries a spelled-out form.
    Numeral,
}

/// A root hypothesis.
///
/// `surface` is the literal input prefix the root consumes ("kitab" for
/// "kitabı"); the lexeme says which dictionary sense it is an inflected
/// root of. Many roots may share a surface.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Root {
    pub surface: String,
    pub lexeme: Arc<Lexeme>,
    pub phonetic_attributes: PhoneticAttributes,
    /// Constraint on the first letter of the next non-empty suffix.
    pub phonetic_expectation: Option<PhoneticExpectation>,
    pub origin: RootOrigin,
    /// How the root is pronounced when that differs from its spelling:
    /// the spelled-out words of a numeral, letter names of an abbreviation.
    pub spelled_form: Option<String>,
}

impl Root {
    /// Create a root whose phonetic attributes are computed from its surface.
    ///
    /// InverseHarmony on the lexeme flips the frontness of the last vowel.
    pub fn new(surface: impl Into<String>, lexeme: Arc<Lexeme>, origin: RootOrigin) -> Self {
        let surface = surface.into();
        let mut phonetic_attributes = calculate_phonetic_attributes(&surface);
        if lexeme.has_attribute(LexemeAttribute::InverseHarmony) {
            phonetic_attributes = phonetic_attributes.with_inverse_harmony();
        }
        Self {
            surface,
            lexeme,
            phonetic_attributes,
            phonetic_expectation: None,
            origin,
            spelled_form: None,
        }
    }

    /// Create a root pronounced as `spelled`: phonetic attributes come from
    /// the spelled form rather than the literal surface ("3" reads "üç").
    pub fn spelled(
        surface: impl Into<String>,
        spelled: impl Into<String>,
        lexeme: Arc<Lexeme>,
        origin: RootOrigin,
    ) -> Self {
        let spelled = spelled.into();
        Self {
            surface: surface.into(),
            phonetic_attributes: calculate_phonetic_attributes(&spelled),
            lexeme,
            phonetic_expectation: None,
            origin,
            spelled_form: Some(spelled),
        }
    }

    #[must_use]
    pub fn with_expectation(mut self, expectation: PhoneticExpectation) -> Self {
        self.phonetic_expectation = Some(expectation);
        self
    }

    /// The text suffix allomorphs are resolved against.
    pub fn phonetic_base(&self) -> &str {
        self.spelled_form.as_deref().unwrap_or(&self.surface)
    }

    /// Length of the surface in characters.
    pub fn char_len(&self) -> usize {
        self.surface.chars().count()
    }

    pub fn has_attribute(&self, attr: LexemeAttribute) -> bool {
        self.lexeme.has_attribute(attr)
    }

    /// Whether this is the truncated root of a vowel-dropping verb
    /// ("ar" of "aramak", only valid before the progressive "-Iyor").
    pub fn is_progressive_vowel_dropped(&self) -> bool {
        self.lexeme.primary == SyntacticCategory::Verb
            && self.has_attribute(LexemeAttribute::ProgressiveVowelDrop)
            && self.surface != self.lexeme.lemma_root
            && self.lexeme.lemma_root.starts_with(&self.surface)
    }

    /// Whether this root is the full surface of a CompoundP3sg lexeme, that
    /// is it already contains the possessive marker ("zeytinyağı").
    pub fn is_compound_full_form(&self) -> bool {
        self.has_attribute(LexemeAttribute::CompoundP3sg) && self.surface == self.lexeme.lemma
    }

    /// The compound stem of a full-form CompoundP3sg root: the surface minus
    /// its possessive marker ("zeytinyağı" → "zeytinyağ", "elarabası" →
    /// "elaraba"). Returns `None` for other roots.
    pub fn compound_stem(&self) -> Option<&str> {
        if !self.is_compound_full_form() {
            return None;
        }
        strip_p3sg_marker(&self.surface)
    }

    /// The stem variant of a full-form CompoundP3sg root, used when the
    /// possessive marker is replaced by another suffix chain.
    pub fn to_compound_stem(&self) -> Option<Root> {
        let stem = self.compound_stem()?;
        let mut root = Root::new(stem, Arc::clone(&self.lexeme), self.origin);
        if stem != self.lexeme.lemma_root {
            root = root.with_expectation(PhoneticExpectation::VowelStart);
        }
        Some(root)
    }
}

/// Strip a third person singular possessive marker (`+sI`) from the end of
/// a word: "ağzı" → "ağz", "arabası" → "araba".
pub fn strip_p3sg_marker(word: &str) -> Option<&str> {
    let mut chars = word.char_indices().rev();
    let (marker_idx, marker) = chars.next()?;
    if !matches!(turkish_lower(marker), '\u{0131}' | 'i' | 'u' | '\u{00FC}') {
        return None;
    }
    let stem = &word[..marker_idx];
    let mut before = stem.char_indices().rev();
    if let (Some((s_idx, 's')), Some((_, prev))) = (before.next(), before.next()) {
        if is_vowel(prev) {
            return Some(&word[..s_idx]);
        }
    }
    if stem.chars().count() < 2 {
        return None;
    }
    Some(stem)
}
