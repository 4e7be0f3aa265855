// Brute-force root finders: reverse phonology for words missing from the
// lexicon.
//
// Each finder guesses which lexemes could surface as the given prefix,
// undoing voicing, doubling and vowel drop as the following letters allow.

use std::sync::Arc;

use turkmorph_core::alphabet::{
    devoice, high_vowel, is_consonant, is_frontal, is_letter, is_rounded, is_upper, is_vowel,
    last_vowel,
};
use turkmorph_core::root::strip_p3sg_marker;
use turkmorph_core::{
    Lexeme, LexemeAttribute, LexemeAttributes, PhoneticAttributes, PhoneticExpectation, Root,
    RootOrigin, SyntacticCategory,
};

use super::{RootFinder, RootFinderError, check_invocation, lookahead};
use crate::phonetics::resolve;

/// Whether `partial` looks like a lower-case word stem worth guessing on.
fn is_guessable(partial: &str, min_chars: usize) -> bool {
    partial.chars().count() >= min_chars
        && partial.chars().all(|c| is_letter(c) && !is_upper(c))
        && last_vowel(partial).is_some()
}

/// `word` with its last letter replaced by the devoiced counterpart.
fn devoiced(word: &str) -> Option<String> {
    let last = word.chars().last()?;
    let replacement = devoice(last)?;
    let mut out = word[..word.len() - last.len_utf8()].to_string();
    out.push(replacement);
    Some(out)
}

fn without_last(word: &str) -> &str {
    match word.char_indices().last() {
        Some((index, _)) => &word[..index],
        None => word,
    }
}

fn dynamic_lexeme(
    lemma: &str,
    lemma_root: &str,
    primary: SyntacticCategory,
    attributes: LexemeAttributes,
) -> Arc<Lexeme> {
    Arc::new(Lexeme::new(lemma, lemma_root, primary, None, attributes))
}

/// Guesses noun roots.
///
/// For a prefix followed by a vowel, the lemma may have a voiceless final
/// stop (ad → at), a single final consonant (tıbb → tıb), or inverse vowel
/// harmony. Roots are emitted in a fixed order: plain, Voicing, Doubling,
/// InverseHarmony, Doubling+Voicing, Doubling+InverseHarmony,
/// Voicing+InverseHarmony, Doubling+Voicing+InverseHarmony.
#[derive(Debug, Clone, Copy, Default)]
pub struct BruteForceNounFinder;

impl RootFinder for BruteForceNounFinder {
    fn name(&self) -> &'static str {
        "brute-force-noun"
    }

    fn handles(&self, partial: &str, _whole: &str) -> bool {
        is_guessable(partial, 2)
    }

    fn guesses(&self) -> bool {
        true
    }

    fn find_roots(&self, partial: &str, whole: &str) -> Result<Vec<Root>, RootFinderError> {
        check_invocation(partial, whole)?;
        if !self.handles(partial, whole) {
            return Ok(Vec::new());
        }

        let rest = lookahead(partial, whole);
        let before_vowel = rest.chars().next().is_some_and(is_vowel);
        let mut tail = partial.chars().rev();
        let (last, previous) = (tail.next(), tail.next());
        let doubled = matches!((last, previous), (Some(a), Some(b)) if a == b && is_consonant(a));
        let voiced_final = last.and_then(devoice).is_some();

        let voicing = before_vowel && voiced_final && !doubled;
        let doubling = before_vowel && doubled;
        let doubling_voicing = doubling && voiced_final;
        let inverse = inverse_harmony_ahead(partial, rest);

        // (applies, doubling, voicing, inverse harmony)
        let candidates = [
            (true, false, false, false),
            (voicing, false, true, false),
            (doubling, true, false, false),
            (inverse, false, false, true),
            (doubling_voicing, true, true, false),
            (doubling && inverse, true, false, true),
            (voicing && inverse, false, true, true),
            (doubling_voicing && inverse, true, true, true),
        ];

        let mut roots = Vec::new();
        for (applies, with_doubling, with_voicing, with_inverse) in candidates {
            if !applies {
                continue;
            }
            let mut lemma = partial.to_string();
            let mut attributes = LexemeAttributes::EMPTY;
            if with_doubling {
                lemma = without_last(&lemma).to_string();
                attributes.insert(LexemeAttribute::Doubling);
            }
            if with_voicing {
                let Some(unvoiced) = devoiced(&lemma) else {
                    continue;
                };
                lemma = unvoiced;
                attributes.insert(LexemeAttribute::Voicing);
            }
            if with_inverse {
                attributes.insert(LexemeAttribute::InverseHarmony);
            }
            let lexeme = dynamic_lexeme(&lemma, &lemma, SyntacticCategory::Noun, attributes);
            let mut root = Root::new(partial, lexeme, RootOrigin::Dynamic);
            if with_doubling || with_voicing {
                root = root.with_expectation(PhoneticExpectation::VowelStart);
            }
            roots.push(root);
        }
        Ok(roots)
    }
}

/// Whether the next vowel, one or two letters into `rest`, disagrees in
/// frontness with the last vowel of `partial`.
fn inverse_harmony_ahead(partial: &str, rest: &str) -> bool {
    let Some(own) = last_vowel(partial) else {
        return false;
    };
    rest.chars()
        .take(2)
        .find(|&c| is_vowel(c))
        .is_some_and(|next| is_frontal(next) != is_frontal(own))
}

/// Guesses verb roots.
///
/// Emits the plain root with inferred attributes, then a Voicing root
/// (gid → git), a vowel-dropped root when the progressive follows
/// (ar-ıyor → ara), and a variant for every aorist, causative or passive
/// allomorph that is visible in the lookahead but not already inferred.
#[derive(Debug, Clone, Copy, Default)]
pub struct BruteForceVerbFinder;

const PROGRESSIVE_ALLOMORPHS: [&str; 4] = ["\u{0131}yor", "iyor", "uyor", "\u{00FC}yor"];

/// Attribute families and the form each member selects.
const VERB_FAMILIES: [(&[LexemeAttribute], &[(LexemeAttribute, &str)]); 3] = [
    (
        LexemeAttribute::AORISTS,
        &[
            (LexemeAttribute::AoristA, "+Ar"),
            (LexemeAttribute::AoristI, "+Ir"),
        ],
    ),
    (
        LexemeAttribute::CAUSATIVES,
        &[
            (LexemeAttribute::CausativeT, "t"),
            (LexemeAttribute::CausativeIt, "It"),
            (LexemeAttribute::CausativeIr, "Ir"),
            (LexemeAttribute::CausativeAr, "Ar"),
            (LexemeAttribute::CausativeDIr, "DIr"),
        ],
    ),
    (
        LexemeAttribute::PASSIVES,
        &[
            (LexemeAttribute::PassiveIl, "Il"),
            (LexemeAttribute::PassiveIn, "+In"),
            (LexemeAttribute::PassiveInIl, "InIl"),
        ],
    ),
];

fn verb_lexeme(lemma_root: &str, attributes: LexemeAttributes) -> Lexeme {
    let front = last_vowel(lemma_root).is_some_and(is_frontal);
    let infinitive = if front { "mek" } else { "mak" };
    let mut lexeme = Lexeme::new(
        format!("{lemma_root}{infinitive}"),
        lemma_root,
        SyntacticCategory::Verb,
        None,
        attributes,
    );
    lexeme.infer_morphemic_attributes();
    lexeme
}

impl RootFinder for BruteForceVerbFinder {
    fn name(&self) -> &'static str {
        "brute-force-verb"
    }

    fn handles(&self, partial: &str, _whole: &str) -> bool {
        is_guessable(partial, 2)
    }

    fn guesses(&self) -> bool {
        true
    }

    fn find_roots(&self, partial: &str, whole: &str) -> Result<Vec<Root>, RootFinderError> {
        check_invocation(partial, whole)?;
        if !self.handles(partial, whole) {
            return Ok(Vec::new());
        }
        let rest = lookahead(partial, whole);
        let before_vowel = rest.chars().next().is_some_and(is_vowel);
        let make = |lexeme: Lexeme| Root::new(partial, Arc::new(lexeme), RootOrigin::Dynamic);

        let plain = verb_lexeme(partial, LexemeAttributes::EMPTY);
        let plain_attributes = plain.attributes;
        let mut roots = vec![make(plain)];

        if before_vowel {
            if let Some(unvoiced) = devoiced(partial) {
                let voicing = LexemeAttributes::EMPTY.with(LexemeAttribute::Voicing);
                let lexeme = verb_lexeme(&unvoiced, voicing);
                roots.push(make(lexeme).with_expectation(PhoneticExpectation::VowelStart));
            }
        }

        let ends_in_consonant = partial.chars().last().is_some_and(is_consonant);
        if ends_in_consonant && PROGRESSIVE_ALLOMORPHS.iter().any(|p| rest.starts_with(p)) {
            let front = last_vowel(partial).is_some_and(is_frontal);
            let dropped = if front { 'e' } else { 'a' };
            let lexeme = verb_lexeme(
                &format!("{partial}{dropped}"),
                LexemeAttributes::EMPTY.with(LexemeAttribute::ProgressiveVowelDrop),
            );
            roots.push(make(lexeme));
        }

        let attrs = PhoneticAttributes::of(partial);
        for (family, members) in VERB_FAMILIES {
            let inferred = members
                .iter()
                .find(|(attribute, _)| plain_attributes.contains(*attribute))
                .and_then(|&(_, form)| resolve(form, attrs));
            for &(attribute, form) in members {
                if plain_attributes.contains(attribute) {
                    continue;
                }
                let Some(surface) = resolve(form, attrs) else {
                    continue;
                };
                // Same surface as the inferred member: nothing new to parse.
                if surface.is_empty()
                    || !rest.starts_with(&surface)
                    || inferred.as_deref() == Some(surface.as_str())
                {
                    continue;
                }
                let attributes = plain_attributes
                    .iter()
                    .filter(|a| !family.contains(a))
                    .chain([attribute])
                    .collect();
                roots.push(make(verb_lexeme(partial, attributes)));
            }
        }
        Ok(roots)
    }
}

/// Guesses compound nouns that carry their own possessive marker
/// ("zeytinyağı", "atkuyruğu").
///
/// For a prefix ending in a harmonic P3sg marker, emits the full-form root
/// and its stem root. When the stem ends in a voiced stop, a second lexeme
/// with the devoiced root is emitted the same way.
#[derive(Debug, Clone, Copy, Default)]
pub struct BruteForceCompoundNounFinder;

impl RootFinder for BruteForceCompoundNounFinder {
    fn name(&self) -> &'static str {
        "brute-force-compound"
    }

    fn handles(&self, partial: &str, _whole: &str) -> bool {
        is_guessable(partial, 3) && partial.chars().last().is_some_and(is_vowel)
    }

    fn guesses(&self) -> bool {
        true
    }

    fn find_roots(&self, partial: &str, whole: &str) -> Result<Vec<Root>, RootFinderError> {
        check_invocation(partial, whole)?;
        if !self.handles(partial, whole) {
            return Ok(Vec::new());
        }
        let Some(stem) = strip_p3sg_marker(partial) else {
            return Ok(Vec::new());
        };
        let (Some(marker), Some(stem_vowel)) = (partial.chars().last(), last_vowel(stem)) else {
            return Ok(Vec::new());
        };
        if marker != high_vowel(is_frontal(stem_vowel), is_rounded(stem_vowel)) {
            return Ok(Vec::new());
        }

        let compound = LexemeAttributes::EMPTY.with(LexemeAttribute::CompoundP3sg);
        let mut lemma_roots = vec![stem.to_string()];
        // The marker attaches directly to a voiced stem: atkuyruğ-u.
        if partial.len() - stem.len() == marker.len_utf8() {
            if let Some(unvoiced) = devoiced(stem) {
                lemma_roots.push(unvoiced);
            }
        }

        let mut roots = Vec::new();
        for lemma_root in lemma_roots {
            let lexeme = dynamic_lexeme(partial, &lemma_root, SyntacticCategory::Noun, compound);
            let full = Root::new(partial, lexeme, RootOrigin::Dynamic);
            let stem_root = full.to_compound_stem();
            roots.push(full);
            roots.extend(stem_root);
        }
        Ok(roots)
    }
}
