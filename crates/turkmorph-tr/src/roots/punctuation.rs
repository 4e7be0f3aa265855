// Punctuation root finder.

use std::sync::Arc;

use turkmorph_core::{Lexeme, LexemeAttributes, Root, RootOrigin, SyntacticCategory};

use super::{RootFinder, RootFinderError, check_invocation, lookahead};

fn is_punctuation(c: char) -> bool {
    !c.is_alphanumeric() && !c.is_whitespace() && !c.is_control()
}

/// Maximal runs of punctuation characters ("...", "?!", "«").
#[derive(Debug, Clone, Copy, Default)]
pub struct PunctuationFinder;

impl RootFinder for PunctuationFinder {
    fn name(&self) -> &'static str {
        "punctuation"
    }

    fn handles(&self, partial: &str, whole: &str) -> bool {
        !partial.is_empty()
            && partial.chars().all(is_punctuation)
            && !lookahead(partial, whole).starts_with(is_punctuation)
    }

    fn find_roots(&self, partial: &str, whole: &str) -> Result<Vec<Root>, RootFinderError> {
        check_invocation(partial, whole)?;
        if !self.handles(partial, whole) {
            return Ok(Vec::new());
        }
        let lexeme = Arc::new(Lexeme::new(
            partial,
            partial,
            SyntacticCategory::Punc,
            None,
            LexemeAttributes::EMPTY,
        ));
        Ok(vec![Root::new(partial, lexeme, RootOrigin::Dynamic)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maximal_runs_only() {
        assert!(PunctuationFinder.handles("...", "..."));
        assert!(!PunctuationFinder.handles("..", "..."));
        assert!(PunctuationFinder.handles("?!", "?!"));
        assert!(!PunctuationFinder.handles("a", "a"));
        assert!(!PunctuationFinder.handles("\u{0007}", "\u{0007}"));
    }

    #[test]
    fn punctuation_root() {
        let quote = "\u{00AB}";
        let roots = PunctuationFinder.find_roots(quote, quote).unwrap();
        assert_eq!(roots.len(), 1);
        assert_eq!(roots[0].lexeme.primary, SyntacticCategory::Punc);
    }

    #[test]
    fn invalid_invocation() {
        assert!(matches!(
            PunctuationFinder.find_roots("..", ".,"),
            Err(RootFinderError::InvalidInvocation { .. })
        ));
        assert!(matches!(
            PunctuationFinder.find_roots("...", ".."),
            Err(RootFinderError::InvalidInvocation { .. })
        ));
    }
}
