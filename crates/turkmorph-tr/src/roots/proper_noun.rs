// Proper noun and abbreviation root finder.

use std::sync::Arc;

use turkmorph_core::alphabet::{is_apostrophe, is_letter, is_vowel, letter_name, turkish_lower};
use turkmorph_core::case::{CaseType, detect_case, starts_with_upper};
use turkmorph_core::{
    Lexeme, LexemeAttributes, Root, RootOrigin, SecondaryCategory, SyntacticCategory,
};

use super::{RootFinder, RootFinderError, check_invocation, lookahead};

/// Which surfaces a [`ProperNounFinder`] accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProperNounVariant {
    /// The prefix is followed by an apostrophe: "Ankara" in "Ankara'ya".
    Apostrophe,
    /// The prefix is the whole surface, which has no apostrophe: "Ankara".
    WholeWord,
}

/// Capitalized words not in the lexicon.
///
/// All-caps prefixes of two or more letters are abbreviations. A
/// consonant-final abbreviation is pronounced by its letter names, so
/// "TBMM'ye" takes the suffix allomorph of "te be me me".
#[derive(Debug, Clone, Copy)]
pub struct ProperNounFinder {
    variant: ProperNounVariant,
}

impl ProperNounFinder {
    pub fn new(variant: ProperNounVariant) -> Self {
        Self { variant }
    }

    pub fn variant(&self) -> ProperNounVariant {
        self.variant
    }
}

fn is_abbreviation(partial: &str) -> bool {
    partial.chars().count() >= 2 && detect_case(partial) == CaseType::AllUpper
}

/// How an abbreviation is read aloud: letter names when it ends in a
/// consonant, otherwise as written.
fn pronunciation(abbreviation: &str) -> String {
    let last = abbreviation.chars().last().map(turkish_lower);
    if last.is_some_and(is_vowel) {
        return abbreviation.chars().map(turkish_lower).collect();
    }
    abbreviation
        .chars()
        .filter_map(letter_name)
        .collect::<Vec<_>>()
        .join(" ")
}

impl RootFinder for ProperNounFinder {
    fn name(&self) -> &'static str {
        match self.variant {
            ProperNounVariant::Apostrophe => "proper-noun-apostrophe",
            ProperNounVariant::WholeWord => "proper-noun",
        }
    }

    fn handles(&self, partial: &str, whole: &str) -> bool {
        if !starts_with_upper(partial) || !partial.chars().all(is_letter) {
            return false;
        }
        match self.variant {
            ProperNounVariant::Apostrophe => lookahead(partial, whole).starts_with(is_apostrophe),
            ProperNounVariant::WholeWord => partial == whole,
        }
    }

    fn find_roots(&self, partial: &str, whole: &str) -> Result<Vec<Root>, RootFinderError> {
        check_invocation(partial, whole)?;
        if !self.handles(partial, whole) {
            return Ok(Vec::new());
        }
        let secondary = if is_abbreviation(partial) {
            SecondaryCategory::Abbreviation
        } else {
            SecondaryCategory::Prop
        };
        let lexeme = Arc::new(Lexeme::new(
            partial,
            partial,
            SyntacticCategory::Noun,
            Some(secondary),
            LexemeAttributes::EMPTY,
        ));
        let root = match secondary {
            SecondaryCategory::Abbreviation => {
                let spoken = pronunciation(partial);
                Root::spelled(partial, spoken, lexeme, RootOrigin::Dynamic)
            }
            _ => Root::new(partial, lexeme, RootOrigin::Dynamic),
        };
        Ok(vec![root])
    }
}
