// Conditions restricting where a suffix form may apply.
//
// Preconditions look backwards at the parse built so far. Postconditions
// look forward and can only be decided once the parse is complete, so the
// parser checks them on acceptance.

use turkmorph_core::alphabet::turkish_lower;
use turkmorph_core::{LexemeAttribute, PhoneticAttribute};

use crate::{MorphemeContext, SuffixId};

/// A precondition on a suffix form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    /// The suffix was applied since the last derivation.
    ComesAfter(SuffixId),
    /// One of the suffixes was applied since the last derivation.
    ComesAfterAny(Vec<SuffixId>),
    /// The lexeme carries the attribute and no derivation has been applied
    /// (derived stems no longer follow the root's idiosyncrasies).
    RootAttribute(LexemeAttribute),
    /// Default allomorph rules apply for an attribute family: either a
    /// derivation has been applied, or the lexeme carries none of `family`.
    DefaultsApply(&'static [LexemeAttribute]),
    /// The root is the full surface of a CompoundP3sg lexeme and no
    /// derivation has been applied.
    CompoundFullForm,
    /// The root's lemma is one of the given words.
    LemmaIn(&'static [&'static str]),
    /// The current phonetic attributes contain the attribute.
    Phonetic(PhoneticAttribute),
    /// The pronounced text so far ends with one of the given letters.
    EndsWithAny(&'static [char]),
    /// A derivational transition has been applied.
    Derived,
    Not(Box<Condition>),
    And(Vec<Condition>),
    Or(Vec<Condition>),
}

impl Condition {
    pub fn comes_after(suffix: SuffixId) -> Self {
        Condition::ComesAfter(suffix)
    }

    pub fn comes_after_any(suffixes: &[SuffixId]) -> Self {
        Condition::ComesAfterAny(suffixes.to_vec())
    }

    pub fn doesnt_come_after(suffix: SuffixId) -> Self {
        Condition::Not(Box::new(Condition::ComesAfter(suffix)))
    }

    pub fn doesnt_come_after_any(suffixes: &[SuffixId]) -> Self {
        Condition::Not(Box::new(Condition::ComesAfterAny(suffixes.to_vec())))
    }

    #[must_use]
    pub fn negate(self) -> Self {
        Condition::Not(Box::new(self))
    }

    #[must_use]
    pub fn and(self, other: Condition) -> Self {
        match self {
            Condition::And(mut conds) => {
                conds.push(other);
                Condition::And(conds)
            }
            first => Condition::And(vec![first, other]),
        }
    }

    #[must_use]
    pub fn or(self, other: Condition) -> Self {
        match self {
            Condition::Or(mut conds) => {
                conds.push(other);
                Condition::Or(conds)
            }
            first => Condition::Or(vec![first, other]),
        }
    }

    /// Evaluate the condition against a partial parse.
    pub fn is_satisfied_by<C: MorphemeContext + ?Sized>(&self, ctx: &C) -> bool {
        match self {
            Condition::ComesAfter(suffix) => ctx.suffixes_since_derivation().contains(suffix),
            Condition::ComesAfterAny(suffixes) => {
                let applied = ctx.suffixes_since_derivation();
                suffixes.iter().any(|s| applied.contains(s))
            }
            Condition::RootAttribute(attr) => {
                !ctx.has_derivation() && ctx.root().has_attribute(*attr)
            }
            Condition::DefaultsApply(family) => {
                ctx.has_derivation() || !ctx.root().lexeme.attributes.contains_any(family)
            }
            Condition::CompoundFullForm => {
                !ctx.has_derivation() && ctx.root().is_compound_full_form()
            }
            Condition::LemmaIn(lemmas) => lemmas.contains(&ctx.root().lexeme.lemma.as_str()),
            Condition::Phonetic(attr) => ctx.phonetic_attributes().contains(*attr),
            Condition::EndsWithAny(letters) => ctx
                .phonetic_surface()
                .chars()
                .rev()
                .find(|c| c.is_alphabetic())
                .is_some_and(|c| letters.contains(&turkish_lower(c))),
            Condition::Derived => ctx.has_derivation(),
            Condition::Not(inner) => !inner.is_satisfied_by(ctx),
            Condition::And(conds) => conds.iter().all(|c| c.is_satisfied_by(ctx)),
            Condition::Or(conds) => conds.iter().any(|c| c.is_satisfied_by(ctx)),
        }
    }
}

/// A postcondition on a suffix form, checked against the transitions that
/// follow it once the parse is complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Postcondition {
    /// Some later suffix has a non-empty surface.
    FollowedByNonEmpty,
    /// The next suffix with a non-empty surface is the given one.
    FollowedBy(SuffixId),
}

impl Postcondition {
    /// Evaluate against the `(suffix, surface)` pairs that follow the
    /// suffix carrying this postcondition, in order.
    pub fn is_satisfied_by(&self, following: &[(SuffixId, &str)]) -> bool {
        match self {
            Postcondition::FollowedByNonEmpty => following.iter().any(|(_, s)| !s.is_empty()),
            Postcondition::FollowedBy(suffix) => following
                .iter()
                .find(|(_, s)| !s.is_empty())
                .is_some_and(|(id, _)| id == suffix),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use turkmorph_core::{
        Lexeme, LexemeAttributes, PhoneticAttributes, Root, RootOrigin, SyntacticCategory,
    };

    use super::*;

    struct FakeContext {
        root: Root,
        applied: Vec<SuffixId>,
        derived: bool,
        surface: String,
    }

    impl MorphemeContext for FakeContext {
        fn root(&self) -> &Root {
            &self.root
        }
        fn suffixes_since_derivation(&self) -> Vec<SuffixId> {
            self.applied.clone()
        }
        fn has_derivation(&self) -> bool {
            self.derived
        }
        fn phonetic_attributes(&self) -> PhoneticAttributes {
            PhoneticAttributes::of(&self.surface)
        }
        fn phonetic_surface(&self) -> &str {
            &self.surface
        }
    }

    fn context(
        lemma: &str,
        attrs: &[LexemeAttribute],
        applied: &[u16],
        derived: bool,
    ) -> FakeContext {
        let lexeme = Arc::new(Lexeme::new(
            format!("{lemma}mak"),
            lemma,
            SyntacticCategory::Verb,
            None,
            LexemeAttributes::from_slice(attrs),
        ));
        FakeContext {
            root: Root::new(lemma, lexeme, RootOrigin::Dictionary),
            applied: applied.iter().map(|&i| SuffixId(i)).collect(),
            derived,
            surface: lemma.to_string(),
        }
    }

    #[test]
    fn comes_after_checks_applied_suffixes() {
        let ctx = context("yap", &[], &[1, 2], false);
        assert!(Condition::comes_after(SuffixId(1)).is_satisfied_by(&ctx));
        assert!(!Condition::comes_after(SuffixId(3)).is_satisfied_by(&ctx));
        assert!(Condition::comes_after_any(&[SuffixId(3), SuffixId(2)]).is_satisfied_by(&ctx));
        assert!(Condition::doesnt_come_after(SuffixId(3)).is_satisfied_by(&ctx));
    }

    #[test]
    fn root_attribute_is_lost_after_derivation() {
        let attrs = [LexemeAttribute::CausativeT];
        let cond = Condition::RootAttribute(LexemeAttribute::CausativeT);
        assert!(cond.is_satisfied_by(&context("oku", &attrs, &[], false)));
        assert!(!cond.is_satisfied_by(&context("oku", &attrs, &[], true)));
    }

    #[test]
    fn defaults_apply_without_family_members() {
        let cond = Condition::DefaultsApply(LexemeAttribute::CAUSATIVES);
        assert!(cond.is_satisfied_by(&context("yap", &[], &[], false)));
        let attrs = [LexemeAttribute::CausativeDIr];
        assert!(!cond.is_satisfied_by(&context("yap", &attrs, &[], false)));
        assert!(cond.is_satisfied_by(&context("yap", &attrs, &[], true)));
    }

    #[test]
    fn phonetic_and_letter_conditions() {
        let ctx = context("al", &[], &[], false);
        assert!(Condition::Phonetic(PhoneticAttribute::LastLetterConsonant).is_satisfied_by(&ctx));
        assert!(Condition::EndsWithAny(&['l', 'r']).is_satisfied_by(&ctx));
        assert!(!Condition::EndsWithAny(&['r']).is_satisfied_by(&ctx));
    }

    #[test]
    fn combinators() {
        let ctx = context("al", &[], &[1], false);
        let yes = Condition::comes_after(SuffixId(1));
        let no = Condition::comes_after(SuffixId(9));
        assert!(yes.clone().or(no.clone()).is_satisfied_by(&ctx));
        assert!(!yes.clone().and(no.clone()).is_satisfied_by(&ctx));
        assert!(no.negate().is_satisfied_by(&ctx));
        assert!(Condition::LemmaIn(&["almak"]).is_satisfied_by(&ctx));
    }

    #[test]
    fn postconditions() {
        let following = [(SuffixId(1), ""), (SuffixId(2), "yor")];
        assert!(Postcondition::FollowedByNonEmpty.is_satisfied_by(&following));
        assert!(Postcondition::FollowedBy(SuffixId(2)).is_satisfied_by(&following));
        assert!(!Postcondition::FollowedBy(SuffixId(1)).is_satisfied_by(&following));
        assert!(!Postcondition::FollowedByNonEmpty.is_satisfied_by(&[(SuffixId(1), "")]));
    }
}
