// Numeral root finders: digit literals read as Turkish number words.
//
// A numeral root always covers a maximal literal: "1000" in "1000'i" is
// found, "100" is not. Phonetic attributes come from the spelled-out words,
// so "3'e" resolves its dative against "üç".

use std::sync::Arc;

use turkmorph_core::{
    Lexeme, LexemeAttributes, Root, RootOrigin, SecondaryCategory, SyntacticCategory,
};

use super::{RootFinder, RootFinderError, check_invocation, lookahead};
use crate::numbers::{spell_ordinal, spell_out, spell_range};

fn numeral_root(literal: &str, spelled: String, secondary: SecondaryCategory) -> Root {
    let lexeme = Arc::new(Lexeme::new(
        literal,
        literal,
        SyntacticCategory::Num,
        Some(secondary),
        LexemeAttributes::EMPTY,
    ));
    Root::spelled(literal, spelled, lexeme, RootOrigin::Numeral)
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Whether `rest` continues a numeral literal: a digit, or a separator
/// followed by a digit.
fn continues_number(rest: &str, separators: &[u8]) -> bool {
    match rest.as_bytes() {
        [first, ..] if first.is_ascii_digit() => true,
        [sep, next, ..] => separators.contains(sep) && next.is_ascii_digit(),
        _ => false,
    }
}

/// Syntax of a cardinal literal: optional sign, digits with optional `.`
/// thousands groups, optional `,` fraction.
fn is_cardinal_literal(literal: &str) -> bool {
    let unsigned = literal.strip_prefix(['-', '+']).unwrap_or(literal);
    let (integer, fraction) = match unsigned.split_once(',') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };
    if fraction.is_some_and(|f| !all_digits(f)) {
        return false;
    }
    is_integer_literal(integer)
}

/// Unsigned digits with optional `.` thousands groups: "12", "1.000".
fn is_integer_literal(integer: &str) -> bool {
    let mut groups = integer.split('.');
    let Some(head) = groups.next() else {
        return false;
    };
    let grouped = integer.contains('.');
    all_digits(head)
        && (!grouped || head.len() <= 3)
        && groups.all(|group| group.len() == 3 && all_digits(group))
}

/// Cardinal digit literals: "3", "-12", "1.000", "3,14".
#[derive(Debug, Clone, Copy, Default)]
pub struct CardinalDigitsFinder;

impl RootFinder for CardinalDigitsFinder {
    fn name(&self) -> &'static str {
        "cardinal-digits"
    }

    fn handles(&self, partial: &str, whole: &str) -> bool {
        is_cardinal_literal(partial) && !continues_number(lookahead(partial, whole), b".,")
    }

    fn find_roots(&self, partial: &str, whole: &str) -> Result<Vec<Root>, RootFinderError> {
        check_invocation(partial, whole)?;
        if !self.handles(partial, whole) {
            return Ok(Vec::new());
        }
        let spelled = spell_out(partial)?;
        Ok(vec![numeral_root(partial, spelled, SecondaryCategory::Digits)])
    }
}

/// Ordinal digit literals: "3." read "üçüncü", "1.000." read "bininci".
#[derive(Debug, Clone, Copy, Default)]
pub struct OrdinalDigitsFinder;

impl RootFinder for OrdinalDigitsFinder {
    fn name(&self) -> &'static str {
        "ordinal-digits"
    }

    fn handles(&self, partial: &str, whole: &str) -> bool {
        partial.strip_suffix('.').is_some_and(is_integer_literal)
            && !continues_number(lookahead(partial, whole), b"")
    }

    fn find_roots(&self, partial: &str, whole: &str) -> Result<Vec<Root>, RootFinderError> {
        check_invocation(partial, whole)?;
        if !self.handles(partial, whole) {
            return Ok(Vec::new());
        }
        let Some(digits) = partial.strip_suffix('.') else {
            return Ok(Vec::new());
        };
        let spelled = spell_ordinal(digits)?;
        Ok(vec![numeral_root(partial, spelled, SecondaryCategory::Ord)])
    }
}

/// Digit ranges: two or more unsigned integers joined by `-` ("1-2-3").
#[derive(Debug, Clone, Copy, Default)]
pub struct DigitRangeFinder;

impl RootFinder for DigitRangeFinder {
    fn name(&self) -> &'static str {
        "digit-range"
    }

    fn handles(&self, partial: &str, whole: &str) -> bool {
        let mut parts = 0;
        let well_formed = partial.split('-').all(|part| {
            parts += 1;
            all_digits(part)
        });
        well_formed && parts >= 2 && !continues_number(lookahead(partial, whole), b"-")
    }

    fn find_roots(&self, partial: &str, whole: &str) -> Result<Vec<Root>, RootFinderError> {
        check_invocation(partial, whole)?;
        if !self.handles(partial, whole) {
            return Ok(Vec::new());
        }
        let spelled = spell_range(partial)?;
        Ok(vec![numeral_root(partial, spelled, SecondaryCategory::Range)])
    }
}
