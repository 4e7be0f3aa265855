// Root finders: producers of root hypotheses for a prefix of the input.
//
// Every finder is asked about every prefix of the surface being parsed. A
// finder answers two questions: whether it has anything to say about this
// prefix (`handles`), and which roots it proposes (`find_roots`). Roots may
// consume less than the prefix they were found for; the parser runs them
// through `gate` before seeding.

pub mod brute_force;
pub mod dictionary;
pub mod numeral;
pub mod proper_noun;
pub mod punctuation;

pub use brute_force::{BruteForceCompoundNounFinder, BruteForceNounFinder, BruteForceVerbFinder};
pub use dictionary::DictionaryRootFinder;
pub use numeral::{CardinalDigitsFinder, DigitRangeFinder, OrdinalDigitsFinder};
pub use proper_noun::{ProperNounFinder, ProperNounVariant};
pub use punctuation::PunctuationFinder;

use turkmorph_core::{LexemeAttribute, Root};

use crate::numbers::NumeralError;

/// Error type for root finder failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RootFinderError {
    /// `partial` is not a non-empty prefix of `whole`.
    #[error("invalid root finder invocation: {partial:?} is not a prefix of {whole:?}")]
    InvalidInvocation { partial: String, whole: String },

    /// A numeral literal could not be spelled out.
    #[error(transparent)]
    Numeral(#[from] NumeralError),
}

/// A producer of root hypotheses.
///
/// Implementations are stateless or hold read-only data, so one finder can
/// serve any number of concurrent parses.
pub trait RootFinder: Send + Sync {
    /// Short identifier used in log events.
    fn name(&self) -> &'static str;

    /// Whether this finder may produce roots for `partial`, a prefix of
    /// `whole`.
    fn handles(&self, partial: &str, whole: &str) -> bool;

    /// Root hypotheses for `partial`, in a deterministic order.
    fn find_roots(&self, partial: &str, whole: &str) -> Result<Vec<Root>, RootFinderError>;

    /// Whether this finder guesses roots missing from the lexicon. Guessing
    /// finders are not consulted for a prefix another finder has a root for.
    fn guesses(&self) -> bool {
        false
    }
}

/// Reject calls where `partial` is empty or not a prefix of `whole`.
pub fn check_invocation(partial: &str, whole: &str) -> Result<(), RootFinderError> {
    if partial.is_empty() || !whole.starts_with(partial) {
        return Err(RootFinderError::InvalidInvocation {
            partial: partial.to_string(),
            whole: whole.to_string(),
        });
    }
    Ok(())
}

/// The text of `whole` following `partial`.
pub(crate) fn lookahead<'a>(partial: &str, whole: &'a str) -> &'a str {
    whole.get(partial.len()..).unwrap_or("")
}

/// Decide whether a root found for `partial` can be seeded.
///
/// A root is usable when `partial` starts with its surface. A CompoundP3sg
/// full-form root is also usable when `partial` only starts with its
/// compound stem; the stem variant is seeded instead.
pub fn gate(root: &Root, partial: &str) -> Option<Root> {
    if partial.starts_with(root.surface.as_str()) {
        return Some(root.clone());
    }
    if !root.has_attribute(LexemeAttribute::CompoundP3sg) {
        return None;
    }
    let stem = root.compound_stem()?;
    if partial.starts_with(stem) {
        root.to_compound_stem()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use turkmorph_core::PhoneticExpectation::VowelStart;
    use turkmorph_core::{Lexeme, LexemeAttributes, RootOrigin, SyntacticCategory};

    use super::*;

    fn noun(lemma: &str, root: &str, attrs: &[LexemeAttribute]) -> Arc<Lexeme> {
        let attrs = LexemeAttributes::from_slice(attrs);
        Arc::new(Lexeme::new(
            lemma,
            root,
            SyntacticCategory::Noun,
            None,
            attrs,
        ))
    }

    #[test]
    fn invocation_must_be_a_prefix() {
        assert!(check_invocation("ki", "kitap").is_ok());
        assert!(check_invocation("kitap", "kitap").is_ok());
        assert!(matches!(
            check_invocation("ab", "ac"),
            Err(RootFinderError::InvalidInvocation { .. })
        ));
        assert!(check_invocation("", "kitap").is_err());
        assert!(check_invocation("kitaplar", "kitap").is_err());
    }

    #[test]
    fn plain_roots_need_their_surface() {
        let root = Root::new("kitab", noun("kitap", "kitap", &[]), RootOrigin::Dictionary);
        assert!(gate(&root, "kitab\u{0131}").is_some());
        assert!(gate(&root, "kita").is_none());
    }

    #[test]
    fn compound_roots_gate_to_their_stem() {
        let lexeme = noun(
            "atkuyru\u{011F}u",
            "atkuyruk",
            &[LexemeAttribute::CompoundP3sg],
        );
        let full = Root::new("atkuyru\u{011F}u", lexeme, RootOrigin::Dictionary);
        assert_eq!(gate(&full, "atkuyru\u{011F}u").unwrap(), full);

        let stem = gate(&full, "atkuyru\u{011F}").unwrap();
        assert_eq!(stem.surface, "atkuyru\u{011F}");
        assert_eq!(stem.phonetic_expectation, Some(VowelStart));
        assert!(gate(&full, "atkuy").is_none());
    }

    #[test]
    fn lookahead_is_the_rest_of_the_word() {
        assert_eq!(lookahead("kitab", "kitab\u{0131}"), "\u{0131}");
        assert_eq!(lookahead("ev", "ev"), "");
    }
}
