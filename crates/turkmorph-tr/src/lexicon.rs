// Lexicon loading and root generation.
//
// A lexicon is a plain text file with one lexeme per line:
//
//     kitap
//     saat [A:InverseHarmony]
//     gitmek [A:Voicing, Aorist_A]
//     ben [P:Pron, Pers]
//     atkuyruğu [A:CompoundP3sg; R:atkuyruk]
//
// `P:` gives the primary (and optionally secondary) category, `A:` the
// lexical attributes, `R:` the lemma root. Blank lines and lines starting
// with `#` are skipped.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, warn};
use turkmorph_core::alphabet::{last_vowel, voice};
use turkmorph_core::root::strip_p3sg_marker;
use turkmorph_core::{
    Lexeme, LexemeAttribute, LexemeAttributes, LexemeError, PhoneticExpectation, Root, RootOrigin,
    SecondaryCategory, SyntacticCategory,
};

/// The lexicon compiled into the crate: closed classes, numeral words and a
/// small set of common open-class words.
const BUILTIN_LEXICON: &str = include_str!("../data/builtin_lexicon.txt");

const INFINITIVE_ENDINGS: [&str; 2] = ["mak", "mek"];

/// Error type for lexicon loading.
#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    /// Malformed line structure. `line` and `column` are 1-based.
    #[error("line {line}, column {column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },

    /// Unknown category or attribute name.
    #[error("line {line}: {source}")]
    Lexeme {
        line: usize,
        #[source]
        source: LexemeError,
    },

    #[error("failed to read lexicon: {0}")]
    Io(#[from] std::io::Error),
}

/// An ordered collection of lexemes.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    lexemes: Vec<Arc<Lexeme>>,
}

impl Lexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse lexicon text, failing on the first malformed line.
    pub fn parse(text: &str) -> Result<Self, LexiconError> {
        let mut lexemes = Vec::new();
        for (index, line) in text.lines().enumerate() {
            if let Some(lexeme) = parse_line(line, index + 1)? {
                lexemes.push(Arc::new(lexeme));
            }
        }
        debug!(lexemes = lexemes.len(), "parsed lexicon");
        Ok(Self { lexemes })
    }

    /// Parse lexicon text, skipping malformed lines with a warning.
    pub fn parse_lenient(text: &str) -> Self {
        let mut lexemes = Vec::new();
        let mut skipped = 0usize;
        for (index, line) in text.lines().enumerate() {
            match parse_line(line, index + 1) {
                Ok(Some(lexeme)) => lexemes.push(Arc::new(lexeme)),
                Ok(None) => {}
                Err(err) => {
                    skipped += 1;
                    warn!(error = %err, "skipping lexicon line");
                }
            }
        }
        debug!(lexemes = lexemes.len(), skipped, "parsed lexicon leniently");
        Self { lexemes }
    }

    /// Read and parse a lexicon file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LexiconError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let lexicon = Self::parse(&text)?;
        let lexemes = lexicon.len();
        debug!(path = %path.display(), lexemes, "loaded lexicon");
        Ok(lexicon)
    }

    /// The lexicon compiled into the crate.
    pub fn builtin() -> Self {
        Self::parse_lenient(BUILTIN_LEXICON)
    }

    /// Append the lexemes of `other`.
    pub fn extend(&mut self, other: Lexicon) {
        self.lexemes.extend(other.lexemes);
    }

    pub fn push(&mut self, lexeme: Lexeme) {
        self.lexemes.push(Arc::new(lexeme));
    }

    pub fn lexemes(&self) -> &[Arc<Lexeme>] {
        &self.lexemes
    }

    pub fn len(&self) -> usize {
        self.lexemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lexemes.is_empty()
    }

    /// Every root of every lexeme, in lexicon order.
    pub fn roots(&self) -> Vec<Root> {
        self.lexemes.iter().flat_map(generate_roots).collect()
    }
}

/// Parse one lexicon line. Returns `Ok(None)` for blank and comment lines.
///
/// Morphemic attributes the line leaves implicit are inferred.
pub fn parse_line(line: &str, line_no: usize) -> Result<Option<Lexeme>, LexiconError> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }
    let syntax = |offset: usize, message: &str| LexiconError::Syntax {
        line: line_no,
        column: line[..offset].chars().count() + 1,
        message: message.to_string(),
    };
    let lexeme_error = |source| LexiconError::Lexeme {
        line: line_no,
        source,
    };
    let base = line.len() - line.trim_start().len();

    let (lemma, meta) = match trimmed.find('[') {
        Some(open) => {
            let Some(inner) = trimmed[open + 1..].strip_suffix(']') else {
                return Err(syntax(base + open, "unterminated '['"));
            };
            (trimmed[..open].trim(), Some((base + open + 1, inner)))
        }
        None => (trimmed, None),
    };
    if lemma.is_empty() {
        return Err(syntax(base, "missing lemma"));
    }
    if lemma.contains(char::is_whitespace) {
        return Err(syntax(base, "lemma contains whitespace"));
    }

    let mut primary = None;
    let mut secondary = None;
    let mut attributes = LexemeAttributes::EMPTY;
    let mut lemma_root = None;
    if let Some((meta_offset, meta)) = meta {
        let mut offset = meta_offset;
        for part in meta.split(';') {
            let field = part.trim();
            let field_offset = offset + (part.len() - part.trim_start().len());
            offset += part.len() + 1;
            if field.is_empty() {
                continue;
            }
            let Some((key, value)) = field.split_once(':') else {
                return Err(syntax(field_offset, "expected 'key:value'"));
            };
            let mut values = value.split(',').map(str::trim).filter(|v| !v.is_empty());
            match key.trim() {
                "P" => {
                    let Some(category) = values.next() else {
                        return Err(syntax(field_offset, "missing primary category"));
                    };
                    primary = Some(category.parse::<SyntacticCategory>().map_err(lexeme_error)?);
                    secondary = values
                        .next()
                        .map(str::parse::<SecondaryCategory>)
                        .transpose()
                        .map_err(lexeme_error)?;
                }
                "A" => {
                    for name in values {
                        attributes.insert(name.parse::<LexemeAttribute>().map_err(lexeme_error)?);
                    }
                }
                "R" => {
                    let Some(root) = values.next() else {
                        return Err(syntax(field_offset, "missing root"));
                    };
                    lemma_root = Some(root.to_string());
                }
                other => {
                    return Err(syntax(field_offset, &format!("unknown key {other:?}")));
                }
            }
        }
    }

    let infinitive = INFINITIVE_ENDINGS
        .iter()
        .find(|ending| lemma.ends_with(*ending));
    let primary = match primary {
        Some(primary) => primary,
        None if infinitive.is_some() => SyntacticCategory::Verb,
        None => SyntacticCategory::Noun,
    };
    let lemma_root = match lemma_root {
        Some(root) => root,
        None if primary == SyntacticCategory::Verb => match infinitive {
            Some(ending) => lemma[..lemma.len() - ending.len()].to_string(),
            None => return Err(syntax(base, "verb lemma must end in -mak or -mek")),
        },
        None if attributes.contains(LexemeAttribute::CompoundP3sg) => {
            strip_p3sg_marker(lemma).unwrap_or(lemma).to_string()
        }
        None => lemma.to_string(),
    };
    if lemma_root.is_empty() {
        return Err(syntax(base, "empty lemma root"));
    }

    let mut lexeme = Lexeme::new(lemma, lemma_root, primary, secondary, attributes);
    lexeme.infer_morphemic_attributes();
    Ok(Some(lexeme))
}

/// Expand a lexeme into the roots it can surface as.
///
/// Voicing and doubling lexemes yield a plain root that only precedes
/// consonants (or ends the word) and a modified root that only precedes
/// vowels: kitap/kitab, hak/hakk, tıp/tıbb. Vowel-dropping verbs add their
/// truncated root; compound nouns yield their full form and their stem.
pub fn generate_roots(lexeme: &Arc<Lexeme>) -> Vec<Root> {
    let make = |surface: &str| Root::new(surface, Arc::clone(lexeme), RootOrigin::Dictionary);
    let lemma_root = lexeme.lemma_root.as_str();

    if lexeme.has_attribute(LexemeAttribute::CompoundP3sg) {
        let mut roots = vec![make(&lexeme.lemma)];
        if lemma_root != lexeme.lemma {
            let mut stem = make(lemma_root);
            // "atkuyruk" only precedes consonants; "atkuyruğ" is reached
            // from the full form.
            if strip_p3sg_marker(&lexeme.lemma) != Some(lemma_root) {
                stem = stem.with_expectation(PhoneticExpectation::ConsonantStart);
            }
            roots.push(stem);
        }
        return roots;
    }

    let voicing = lexeme.has_attribute(LexemeAttribute::Voicing);
    let doubling = lexeme.has_attribute(LexemeAttribute::Doubling);
    let mut roots = Vec::with_capacity(2);
    if voicing || doubling {
        let mut modified = lemma_root.to_string();
        if voicing {
            modified = voiced(lemma_root).unwrap_or(modified);
        }
        if doubling {
            if let Some(last) = modified.chars().last() {
                modified.push(last);
            }
        }
        if modified == lemma_root {
            roots.push(make(lemma_root));
        } else {
            roots.push(make(lemma_root).with_expectation(PhoneticExpectation::ConsonantStart));
            roots.push(make(&modified).with_expectation(PhoneticExpectation::VowelStart));
        }
    } else {
        roots.push(make(lemma_root));
    }

    let drops_vowel = lexeme.has_attribute(LexemeAttribute::ProgressiveVowelDrop);
    if lexeme.primary == SyntacticCategory::Verb && drops_vowel {
        if let Some((last_index, _)) = lemma_root.char_indices().last() {
            if last_index > 0 && last_vowel(&lemma_root[..last_index]).is_some() {
                roots.push(make(&lemma_root[..last_index]));
            }
        }
    }
    roots
}

/// `word` with its final voiceless stop voiced, or `None` when it does not
/// end in one.
pub(crate) fn voiced(word: &str) -> Option<String> {
    let mut chars = word.chars().rev();
    let last = chars.next()?;
    let previous = chars.next();
    let replacement = voice(last, previous)?;
    let mut out = word[..word.len() - last.len_utf8()].to_string();
    out.push(replacement);
    Some(out)
}

#[cfg(test)]
mod tests {
    use turkmorph_core::PhoneticExpectation::{ConsonantStart, VowelStart};

    use super::*;

    fn lexeme(line: &str) -> Lexeme {
        parse_line(line, 1).unwrap().unwrap()
    }

    fn assert_surfaces(line: &str, expected: &[(&str, Option<PhoneticExpectation>)]) {
        let roots = generate_roots(&Arc::new(lexeme(line)));
        let surfaces: Vec<_> = roots
            .iter()
            .map(|root| (root.surface.as_str(), root.phonetic_expectation))
            .collect();
        assert_eq!(surfaces, expected, "{line}");
    }

    #[test]
    fn bare_lemma_is_a_noun() {
        let lex = lexeme("ev");
        assert_eq!(lex.primary, SyntacticCategory::Noun);
        assert_eq!(lex.lemma_root, "ev");
        assert!(lex.attributes.is_empty());
    }

    #[test]
    fn verbs_lose_their_infinitive() {
        let lex = lexeme("gelmek [A:Aorist_I]");
        assert_eq!(lex.primary, SyntacticCategory::Verb);
        assert_eq!(lex.lemma_root, "gel");
        assert!(lex.has_attribute(LexemeAttribute::AoristI));
        assert!(!lex.has_attribute(LexemeAttribute::AoristA));

        let lex = lexeme("aramak");
        assert_eq!(lex.lemma_root, "ara");
        assert!(lex.has_attribute(LexemeAttribute::ProgressiveVowelDrop));
    }

    #[test]
    fn categories_and_roots_are_read() {
        let lex = lexeme("  ben [P:Pron, Pers]");
        assert_eq!(lex.primary, SyntacticCategory::Pron);
        assert_eq!(lex.secondary, Some(SecondaryCategory::Pers));

        let lex = lexeme("atkuyru\u{011F}u [A:CompoundP3sg; R:atkuyruk]");
        assert_eq!(lex.lemma_root, "atkuyruk");

        let lex = lexeme("zeytinya\u{011F}\u{0131} [A:CompoundP3sg]");
        assert_eq!(lex.lemma_root, "zeytinya\u{011F}");
        assert!(!lex.has_attribute(LexemeAttribute::Voicing));
    }

    #[test]
    fn polysyllabic_stop_final_nouns_voice() {
        assert!(lexeme("kitap").has_attribute(LexemeAttribute::Voicing));
        assert!(!lexeme("top").has_attribute(LexemeAttribute::Voicing));
        assert!(!lexeme("hukuk [A:NoVoicing]").has_attribute(LexemeAttribute::Voicing));
    }

    #[test]
    fn blank_and_comment_lines() {
        assert!(parse_line("", 1).unwrap().is_none());
        assert!(parse_line("   # pronouns", 1).unwrap().is_none());
    }

    #[test]
    fn syntax_errors_carry_positions() {
        match parse_line("kitap [P:Noun", 7) {
            Err(LexiconError::Syntax { line, column, .. }) => {
                assert_eq!(line, 7);
                assert_eq!(column, 7);
            }
            other => panic!("unexpected {other:?}"),
        }
        match parse_line("ev [X:1]", 2) {
            Err(LexiconError::Syntax { column, .. }) => assert_eq!(column, 5),
            other => panic!("unexpected {other:?}"),
        }
        assert!(matches!(
            parse_line("ev [P:Thing]", 3),
            Err(LexiconError::Lexeme {
                line: 3,
                source: LexemeError::UnknownCategory(_)
            })
        ));
        assert!(matches!(
            parse_line("gel [P:Verb]", 1),
            Err(LexiconError::Syntax { .. })
        ));
    }

    #[test]
    fn strict_and_lenient_parsing() {
        let text = "kitap\nev [P:Thing]\ngelmek\n";
        assert!(Lexicon::parse(text).is_err());
        let lexicon = Lexicon::parse_lenient(text);
        assert_eq!(lexicon.len(), 2);
    }

    #[test]
    fn builtin_lexicon_parses_cleanly() {
        let strict = Lexicon::parse(BUILTIN_LEXICON).unwrap();
        assert_eq!(strict.len(), Lexicon::builtin().len());
        assert!(strict.len() > 100);
    }

    #[test]
    fn voicing_roots_carry_expectations() {
        assert_surfaces(
            "kitap",
            &[("kitap", Some(ConsonantStart)), ("kitab", Some(VowelStart))],
        );
        assert_surfaces(
            "renk [A:Voicing]",
            &[("renk", Some(ConsonantStart)), ("reng", Some(VowelStart))],
        );
        assert_surfaces(
            "gitmek [A:Voicing, Aorist_A]",
            &[("git", Some(ConsonantStart)), ("gid", Some(VowelStart))],
        );
        assert_surfaces("ev", &[("ev", None)]);
    }

    #[test]
    fn doubling_roots() {
        assert_surfaces(
            "hak [A:Doubling]",
            &[("hak", Some(ConsonantStart)), ("hakk", Some(VowelStart))],
        );
        assert_surfaces(
            "t\u{0131}p [A:Doubling, Voicing]",
            &[
                ("t\u{0131}p", Some(ConsonantStart)),
                ("t\u{0131}bb", Some(VowelStart)),
            ],
        );
    }

    #[test]
    fn vowel_dropping_verbs_get_a_short_root() {
        assert_surfaces("aramak", &[("ara", None), ("ar", None)]);
        assert_surfaces("okumak", &[("oku", None)]);
    }

    #[test]
    fn compound_roots() {
        assert_surfaces(
            "zeytinya\u{011F}\u{0131} [A:CompoundP3sg]",
            &[
                ("zeytinya\u{011F}\u{0131}", None),
                ("zeytinya\u{011F}", None),
            ],
        );
        assert_surfaces(
            "atkuyru\u{011F}u [A:CompoundP3sg; R:atkuyruk]",
            &[
                ("atkuyru\u{011F}u", None),
                ("atkuyruk", Some(ConsonantStart)),
            ],
        );
    }
}
