// Dictionary senses (lexemes) and their lexical attributes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::alphabet::{is_voiceless_stop, is_vowel, last_vowel, vowel_count};

/// Error for unknown category or attribute names.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexemeError {
    #[error("unknown syntactic category: {0}")]
    UnknownCategory(String),
    #[error("unknown secondary syntactic category: {0}")]
    UnknownSecondaryCategory(String),
    #[error("unknown lexeme attribute: {0}")]
    UnknownAttribute(String),
}

/// Primary part of speech.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SyntacticCategory {
    Noun,
    Adj,
    Adv,
    Conj,
    Interj,
    Verb,
    Pron,
    Num,
    Det,
    Part,
    Ques,
    Dup,
    Postp,
    Punc,
}

impl SyntacticCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            SyntacticCategory::Noun => "Noun",
            SyntacticCategory::Adj => "Adj",
            SyntacticCategory::Adv => "Adv",
            SyntacticCategory::Conj => "Conj",
            SyntacticCategory::Interj => "Interj",
            SyntacticCategory::Verb => "Verb",
            SyntacticCategory::Pron => "Pron",
            SyntacticCategory::Num => "Num",
            SyntacticCategory::Det => "Det",
            SyntacticCategory::Part => "Part",
            SyntacticCategory::Ques => "Ques",
            SyntacticCategory::Dup => "Dup",
            SyntacticCategory::Postp => "Postp",
            SyntacticCategory::Punc => "Punc",
        }
    }
}

impl fmt::Display for SyntacticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SyntacticCategory {
    type Err = LexemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "Noun" => SyntacticCategory::Noun,
            "Adj" => SyntacticCategory::Adj,
            "Adv" => SyntacticCategory::Adv,
            "Conj" => SyntacticCategory::Conj,
            "Interj" => SyntacticCategory::Interj,
            "Verb" => SyntacticCategory::Verb,
            "Pron" => SyntacticCategory::Pron,
            "Num" => SyntacticCategory::Num,
            "Det" => SyntacticCategory::Det,
            "Part" => SyntacticCategory::Part,
            "Ques" => SyntacticCategory::Ques,
            "Dup" => SyntacticCategory::Dup,
            "Postp" => SyntacticCategory::Postp,
            "Punc" => SyntacticCategory::Punc,
            other => return Err(LexemeError::UnknownCategory(other.to_string())),
        })
    }
}

/// Secondary part of speech refining the primary one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SecondaryCategory {
    Prop,
    Abbreviation,
    Time,
    Date,
    Quant,
    Card,
    Ord,
    Dist,
    Range,
    Real,
    Digits,
    Pers,
    Demons,
    Reflex,
    Ques,
}

impl SecondaryCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            SecondaryCategory::Prop => "Prop",
            SecondaryCategory::Abbreviation => "Abbreviation",
            SecondaryCategory::Time => "Time",
            SecondaryCategory::Date => "Date",
            SecondaryCategory::Quant => "Quant",
            SecondaryCategory::Card => "Card",
            SecondaryCategory::Ord => "Ord",
            SecondaryCategory::Dist => "Dist",
            SecondaryCategory::Range => "Range",
            SecondaryCategory::Real => "Real",
            SecondaryCategory::Digits => "Digits",
            SecondaryCategory::Pers => "Pers",
            SecondaryCategory::Demons => "Demons",
            SecondaryCategory::Reflex => "Reflex",
            SecondaryCategory::Ques => "Ques",
        }
    }
}

impl fmt::Display for SecondaryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SecondaryCategory {
    type Err = LexemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "Prop" => SecondaryCategory::Prop,
            "Abbreviation" | "Abbr" => SecondaryCategory::Abbreviation,
            "Time" => SecondaryCategory::Time,
            "Date" => SecondaryCategory::Date,
            "Quant" => SecondaryCategory::Quant,
            "Card" => SecondaryCategory::Card,
            "Ord" => SecondaryCategory::Ord,
            "Dist" => SecondaryCategory::Dist,
            "Range" => SecondaryCategory::Range,
            "Real" => SecondaryCategory::Real,
            "Digits" => SecondaryCategory::Digits,
            "Pers" => SecondaryCategory::Pers,
            "Demons" => SecondaryCategory::Demons,
            "Reflex" => SecondaryCategory::Reflex,
            "Ques" => SecondaryCategory::Ques,
            other => return Err(LexemeError::UnknownSecondaryCategory(other.to_string())),
        })
    }
}

/// Idiosyncratic lexical markers that change which allomorph, or which
/// root-final consonant, is legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LexemeAttribute {
    NoVoicing,
    Voicing,
    Doubling,
    InverseHarmony,
    ProgressiveVowelDrop,
    AoristA,
    AoristI,
    CausativeT,
    CausativeIt,
    CausativeIr,
    CausativeAr,
    CausativeDIr,
    PassiveIl,
    PassiveIn,
    PassiveInIl,
    CompoundP3sg,
}

impl LexemeAttribute {
    pub const ALL: [LexemeAttribute; 16] = [
        LexemeAttribute::NoVoicing,
        LexemeAttribute::Voicing,
        LexemeAttribute::Doubling,
        LexemeAttribute::InverseHarmony,
        LexemeAttribute::ProgressiveVowelDrop,
        LexemeAttribute::AoristA,
        LexemeAttribute::AoristI,
        LexemeAttribute::CausativeT,
        LexemeAttribute::CausativeIt,
        LexemeAttribute::CausativeIr,
        LexemeAttribute::CausativeAr,
        LexemeAttribute::CausativeDIr,
        LexemeAttribute::PassiveIl,
        LexemeAttribute::PassiveIn,
        LexemeAttribute::PassiveInIl,
        LexemeAttribute::CompoundP3sg,
    ];

    /// Aorist allomorph selectors.
    pub const AORISTS: &'static [LexemeAttribute] =
        &[LexemeAttribute::AoristA, LexemeAttribute::AoristI];

    /// Causative allomorph selectors.
    pub const CAUSATIVES: &'static [LexemeAttribute] = &[
        LexemeAttribute::CausativeT,
        LexemeAttribute::CausativeIt,
        LexemeAttribute::CausativeIr,
        LexemeAttribute::CausativeAr,
        LexemeAttribute::CausativeDIr,
    ];

    /// Passive allomorph selectors.
    pub const PASSIVES: &'static [LexemeAttribute] = &[
        LexemeAttribute::PassiveIl,
        LexemeAttribute::PassiveIn,
        LexemeAttribute::PassiveInIl,
    ];

    const fn bit(self) -> u32 {
        1 << (self as u32)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LexemeAttribute::NoVoicing => "NoVoicing",
            LexemeAttribute::Voicing => "Voicing",
            LexemeAttribute::Doubling => "Doubling",
            LexemeAttribute::InverseHarmony => "InverseHarmony",
            LexemeAttribute::ProgressiveVowelDrop => "ProgressiveVowelDrop",
            LexemeAttribute::AoristA => "Aorist_A",
            LexemeAttribute::AoristI => "Aorist_I",
            LexemeAttribute::CausativeT => "Causative_t",
            LexemeAttribute::CausativeIt => "Causative_It",
            LexemeAttribute::CausativeIr => "Causative_Ir",
            LexemeAttribute::CausativeAr => "Causative_Ar",
            LexemeAttribute::CausativeDIr => "Causative_dIr",
            LexemeAttribute::PassiveIl => "Passive_Il",
            LexemeAttribute::PassiveIn => "Passive_In",
            LexemeAttribute::PassiveInIl => "Passive_InIl",
            LexemeAttribute::CompoundP3sg => "CompoundP3sg",
        }
    }
}

impl fmt::Display for LexemeAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LexemeAttribute {
    type Err = LexemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LexemeAttribute::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| LexemeError::UnknownAttribute(s.to_string()))
    }
}

/// Set of [`LexemeAttribute`]s, iterated in declaration order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LexemeAttributes(u32);

impl LexemeAttributes {
    pub const EMPTY: LexemeAttributes = LexemeAttributes(0);

    pub fn from_slice(attrs: &[LexemeAttribute]) -> Self {
        attrs.iter().copied().collect()
    }

    pub fn contains(self, attr: LexemeAttribute) -> bool {
        self.0 & attr.bit() != 0
    }

    pub fn contains_any(self, attrs: &[LexemeAttribute]) -> bool {
        attrs.iter().any(|&a| self.contains(a))
    }

    #[must_use]
    pub fn with(self, attr: LexemeAttribute) -> Self {
        LexemeAttributes(self.0 | attr.bit())
    }

    pub fn insert(&mut self, attr: LexemeAttribute) {
        self.0 |= attr.bit();
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(self) -> impl Iterator<Item = LexemeAttribute> {
        LexemeAttribute::ALL
            .into_iter()
            .filter(move |a| self.contains(*a))
    }
}

impl fmt::Debug for LexemeAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.iter().map(LexemeAttribute::as_str))
            .finish()
    }
}

impl FromIterator<LexemeAttribute> for LexemeAttributes {
    fn from_iter<T: IntoIterator<Item = LexemeAttribute>>(iter: T) -> Self {
        LexemeAttributes(iter.into_iter().fold(0, |acc, a| acc | a.bit()))
    }
}

/// A dictionary sense.
///
/// `lemma` is the citation form ("kitap", "yapmak"); `lemma_root` is the
/// canonical root spelling suffixes attach to ("kitap", "yap").
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Lexeme {
    pub lemma: String,
    pub lemma_root: String,
    pub primary: SyntacticCategory,
    pub secondary: Option<SecondaryCategory>,
    pub attributes: LexemeAttributes,
}

impl Lexeme {
    pub fn new(
        lemma: impl Into<String>,
        lemma_root: impl Into<String>,
        primary: SyntacticCategory,
        secondary: Option<SecondaryCategory>,
        attributes: LexemeAttributes,
    ) -> Self {
        Self {
            lemma: lemma.into(),
            lemma_root: lemma_root.into(),
            primary,
            secondary,
            attributes,
        }
    }

    pub fn has_attribute(&self, attr: LexemeAttribute) -> bool {
        self.attributes.contains(attr)
    }

    /// Fill in the morphemic attributes a dictionary entry leaves implicit.
    ///
    /// Nouns and adjectives with more than one syllable ending in a
    /// voiceless stop voice before vowels unless marked NoVoicing. Verbs get
    /// default aorist, causative and passive allomorph selectors, and
    /// ProgressiveVowelDrop when the root ends in `a`/`e`.
    pub fn infer_morphemic_attributes(&mut self) {
        let root = self.lemma_root.as_str();
        let Some(last) = root.chars().last() else {
            return;
        };
        let attrs = &mut self.attributes;

        match self.primary {
            SyntacticCategory::Noun | SyntacticCategory::Adj => {
                if vowel_count(root) > 1
                    && is_voiceless_stop(last)
                    && !attrs.contains(LexemeAttribute::NoVoicing)
                    && !attrs.contains(LexemeAttribute::CompoundP3sg)
                    && self.secondary != Some(SecondaryCategory::Prop)
                {
                    attrs.insert(LexemeAttribute::Voicing);
                }
            }
            SyntacticCategory::Verb => {
                let vowel_final = is_vowel(last);
                if vowel_final && matches!(last, 'a' | 'e') {
                    attrs.insert(LexemeAttribute::ProgressiveVowelDrop);
                }
                if !attrs.contains_any(LexemeAttribute::AORISTS) {
                    if vowel_count(root) == 1 && !vowel_final {
                        attrs.insert(LexemeAttribute::AoristA);
                    } else {
                        attrs.insert(LexemeAttribute::AoristI);
                    }
                }
                if !attrs.contains_any(LexemeAttribute::CAUSATIVES) {
                    let polysyllabic_liquid = vowel_count(root) > 1 && matches!(last, 'l' | 'r');
                    if vowel_final || polysyllabic_liquid {
                        attrs.insert(LexemeAttribute::CausativeT);
                    } else {
                        attrs.insert(LexemeAttribute::CausativeDIr);
                    }
                }
                if !attrs.contains_any(LexemeAttribute::PASSIVES) {
                    if vowel_final || last == 'l' {
                        attrs.insert(LexemeAttribute::PassiveIn);
                    } else {
                        attrs.insert(LexemeAttribute::PassiveIl);
                    }
                }
            }
            _ => {}
        }
    }

    /// Whether the last vowel of the lemma root is frontal.
    pub fn has_frontal_root(&self) -> bool {
        last_vowel(&self.lemma_root).is_some_and(crate::alphabet::is_frontal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noun(lemma: &str) -> Lexeme {
        Lexeme::new(
            lemma,
            lemma,
            SyntacticCategory::Noun,
            None,
            LexemeAttributes::EMPTY,
        )
    }

    fn verb(root: &str) -> Lexeme {
        Lexeme::new(
            format!("{root}mak"),
            root,
            SyntacticCategory::Verb,
            None,
            LexemeAttributes::EMPTY,
        )
    }

    #[test]
    fn parses_names() {
        let primary = "Noun".parse::<SyntacticCategory>();
        assert_eq!(primary, Ok(SyntacticCategory::Noun));
        let secondary = "Card".parse::<SecondaryCategory>();
        assert_eq!(secondary, Ok(SecondaryCategory::Card));
        let attribute = "Aorist_A".parse::<LexemeAttribute>();
        assert_eq!(attribute, Ok(LexemeAttribute::AoristA));
        assert_eq!(
            "Causative_dIr".parse::<LexemeAttribute>(),
            Ok(LexemeAttribute::CausativeDIr)
        );
        assert!("Bogus".parse::<LexemeAttribute>().is_err());
    }

    #[test]
    fn attribute_set_iterates_in_order() {
        let set = [LexemeAttribute::Voicing, LexemeAttribute::Doubling];
        let set = LexemeAttributes::from_slice(&set);
        assert_eq!(
            set.iter().collect::<Vec<_>>(),
            vec![LexemeAttribute::Voicing, LexemeAttribute::Doubling]
        );
        assert!(set.contains_any(&[LexemeAttribute::Doubling, LexemeAttribute::AoristA]));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn polysyllabic_stop_final_noun_voices() {
        let mut lexeme = noun("kitap");
        lexeme.infer_morphemic_attributes();
        assert!(lexeme.has_attribute(LexemeAttribute::Voicing));
    }

    #[test]
    fn monosyllabic_noun_does_not_voice() {
        let mut lexeme = noun("at");
        lexeme.infer_morphemic_attributes();
        assert!(!lexeme.has_attribute(LexemeAttribute::Voicing));
    }

    #[test]
    fn no_voicing_marker_is_respected() {
        let mut lexeme = noun("sanat");
        lexeme.attributes.insert(LexemeAttribute::NoVoicing);
        lexeme.infer_morphemic_attributes();
        assert!(!lexeme.has_attribute(LexemeAttribute::Voicing));
    }

    #[test]
    fn verb_defaults() {
        let mut yap = verb("yap");
        yap.infer_morphemic_attributes();
        assert!(yap.has_attribute(LexemeAttribute::AoristA));
        assert!(yap.has_attribute(LexemeAttribute::CausativeDIr));
        assert!(yap.has_attribute(LexemeAttribute::PassiveIl));
        assert!(!yap.has_attribute(LexemeAttribute::ProgressiveVowelDrop));

        let mut ara = verb("ara");
        ara.infer_morphemic_attributes();
        assert!(ara.has_attribute(LexemeAttribute::ProgressiveVowelDrop));
        assert!(ara.has_attribute(LexemeAttribute::CausativeT));
        assert!(ara.has_attribute(LexemeAttribute::PassiveIn));
        assert!(ara.has_attribute(LexemeAttribute::AoristI));

        let mut otur = verb("otur");
        otur.infer_morphemic_attributes();
        assert!(otur.has_attribute(LexemeAttribute::CausativeT));
        assert!(otur.has_attribute(LexemeAttribute::AoristI));
    }

    #[test]
    fn explicit_aorist_is_kept() {
        let mut gel = verb("gel");
        gel.attributes.insert(LexemeAttribute::AoristI);
        gel.infer_morphemic_attributes();
        assert!(gel.has_attribute(LexemeAttribute::AoristI));
        assert!(!gel.has_attribute(LexemeAttribute::AoristA));
        assert!(gel.has_attribute(LexemeAttribute::PassiveIn));
    }
}
