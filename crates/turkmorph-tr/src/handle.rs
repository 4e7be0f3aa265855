// TurkishAnalyzer: top-level integration point.
//
// Owns the suffix graph, the root finders and the parser, and turns parses
// into formatted strings or analysis records. Which overlays and finders
// are active is decided once, at construction, from `AnalyzerOptions`.

use std::sync::Arc;

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};
use tracing::debug;
use turkmorph_graph::basic::basic_suffix_graph;
use turkmorph_graph::copula::copula_overlay;
use turkmorph_graph::numeral::numeral_overlay;
use turkmorph_graph::proper_noun::proper_noun_overlay;
use turkmorph_graph::punctuation::punctuation_overlay;
use turkmorph_graph::{GraphError, SuffixGraph};

use crate::formatter::{Analysis, format_grouped, format_parse};
use crate::lexicon::{Lexicon, LexiconError};
use crate::parse_state::ParseState;
use crate::parser::{ParseError, Parser};
use crate::roots::{
    BruteForceCompoundNounFinder, BruteForceNounFinder, BruteForceVerbFinder, CardinalDigitsFinder,
    DictionaryRootFinder, DigitRangeFinder, OrdinalDigitsFinder, ProperNounFinder,
    ProperNounVariant, PunctuationFinder, RootFinder,
};

/// Error type for analyzer construction and analysis failures.
#[derive(Debug, thiserror::Error)]
pub enum AnalyzerError {
    /// The suffix graph could not be built.
    #[error("failed to build suffix graph: {0}")]
    Graph(#[from] GraphError),

    /// The lexicon could not be loaded.
    #[error("failed to load lexicon: {0}")]
    Lexicon(#[from] LexiconError),

    /// A root finder failed while parsing.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Which parts of the grammar and which root finders are active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerOptions {
    /// Spelled numerals and digit literals.
    pub numerals: bool,
    /// Capitalized words and abbreviations not in the lexicon.
    pub proper_nouns: bool,
    pub punctuation: bool,
    /// Zero-derived copular readings of nominals ("evdeyim").
    pub copula: bool,
    /// Guess noun roots missing from the lexicon.
    pub brute_force_nouns: bool,
    /// Guess verb roots missing from the lexicon.
    pub brute_force_verbs: bool,
    /// Guess compound nouns missing from the lexicon.
    pub brute_force_compounds: bool,
    /// Keep at most this many parses per word.
    pub max_results: Option<usize>,
}

impl Default for AnalyzerOptions {
    fn default() -> Self {
        Self {
            numerals: true,
            proper_nouns: true,
            punctuation: true,
            copula: true,
            brute_force_nouns: false,
            brute_force_verbs: false,
            brute_force_compounds: false,
            max_results: None,
        }
    }
}

impl AnalyzerOptions {
    /// Defaults plus every brute-force finder.
    pub fn with_brute_force() -> Self {
        Self {
            brute_force_nouns: true,
            brute_force_verbs: true,
            brute_force_compounds: true,
            ..Self::default()
        }
    }
}

fn build_graph(options: &AnalyzerOptions) -> Result<SuffixGraph, GraphError> {
    let mut graph = basic_suffix_graph()?;
    if options.numerals {
        graph = numeral_overlay(graph)?;
    }
    if options.proper_nouns {
        graph = proper_noun_overlay(graph)?;
    }
    if options.punctuation {
        graph = punctuation_overlay(graph)?;
    }
    if options.copula {
        graph = copula_overlay(graph)?;
    }
    Ok(graph)
}

fn build_finders(lexicon: &Lexicon, options: &AnalyzerOptions) -> Vec<Box<dyn RootFinder>> {
    let dictionary = DictionaryRootFinder::from_lexicon(lexicon);
    let mut finders: Vec<Box<dyn RootFinder>> = vec![Box::new(dictionary)];
    if options.numerals {
        finders.push(Box::new(CardinalDigitsFinder));
        finders.push(Box::new(OrdinalDigitsFinder));
        finders.push(Box::new(DigitRangeFinder));
    }
    if options.proper_nouns {
        finders.push(Box::new(ProperNounFinder::new(ProperNounVariant::Apostrophe)));
        finders.push(Box::new(ProperNounFinder::new(ProperNounVariant::WholeWord)));
    }
    if options.punctuation {
        finders.push(Box::new(PunctuationFinder));
    }
    if options.brute_force_nouns {
        finders.push(Box::new(BruteForceNounFinder));
    }
    if options.brute_force_verbs {
        finders.push(Box::new(BruteForceVerbFinder));
    }
    if options.brute_force_compounds {
        finders.push(Box::new(BruteForceCompoundNounFinder));
    }
    finders
}

/// Turkish morphological analyzer.
///
/// Cheap to share: all methods take `&self` and the analyzer is
/// `Send + Sync`.
pub struct TurkishAnalyzer {
    parser: Parser,
    options: AnalyzerOptions,
}

impl TurkishAnalyzer {
    /// Create an analyzer over `lexicon`.
    pub fn new(lexicon: &Lexicon, options: AnalyzerOptions) -> Result<Self, AnalyzerError> {
        let graph = build_graph(&options)?;
        let finders = build_finders(lexicon, &options);
        debug!(
            lexemes = lexicon.len(),
            states = graph.state_count(),
            transitions = graph.transition_count(),
            finders = finders.len(),
            "created analyzer"
        );
        Ok(Self {
            parser: Parser::new(Arc::new(graph), finders),
            options,
        })
    }

    /// Create an analyzer over the built-in lexicon.
    pub fn with_builtin_lexicon(options: AnalyzerOptions) -> Result<Self, AnalyzerError> {
        Self::new(&Lexicon::builtin(), options)
    }

    /// Every parse of `word`, capped at `max_results`. Parses that format
    /// identically are reported once.
    pub fn analyze(&self, word: &str) -> Result<Vec<ParseState>, AnalyzerError> {
        let mut parses = self.parser.parse(word)?;
        let graph = self.parser.graph();
        let mut rendered = HashSet::new();
        parses.retain(|parse| rendered.insert(format_parse(graph, parse)));
        if let Some(max) = self.options.max_results {
            parses.truncate(max);
        }
        Ok(parses)
    }

    /// Parses of `word` rendered on one line each.
    pub fn analyze_formatted(&self, word: &str) -> Result<Vec<String>, AnalyzerError> {
        let graph = self.parser.graph();
        let parses = self.analyze(word)?;
        Ok(parses.iter().map(|p| format_parse(graph, p)).collect())
    }

    /// Parses of `word` split at derivation boundaries.
    pub fn analyze_grouped(&self, word: &str) -> Result<Vec<Vec<String>>, AnalyzerError> {
        let graph = self.parser.graph();
        let parses = self.analyze(word)?;
        Ok(parses.iter().map(|p| format_grouped(graph, p)).collect())
    }

    /// Parses of `word` as analysis records.
    pub fn analyze_detailed(&self, word: &str) -> Result<Vec<Analysis>, AnalyzerError> {
        let graph = self.parser.graph();
        Ok(self
            .analyze(word)?
            .iter()
            .map(|p| Analysis::from_parse(graph, p))
            .collect())
    }

    pub fn graph(&self) -> &SuffixGraph {
        self.parser.graph()
    }

    pub fn parser(&self) -> &Parser {
        &self.parser
    }

    pub fn options(&self) -> &AnalyzerOptions {
        &self.options
    }

    /// Change the result cap. Other options are fixed at construction.
    pub fn set_max_results(&mut self, max: Option<usize>) {
        self.options.max_results = max;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzer(options: AnalyzerOptions) -> TurkishAnalyzer {
        TurkishAnalyzer::with_builtin_lexicon(options).unwrap()
    }

    #[test]
    fn analyzer_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TurkishAnalyzer>();
    }

    #[test]
    fn default_options() {
        let options = AnalyzerOptions::default();
        assert!(options.numerals && options.proper_nouns && options.punctuation && options.copula);
        assert!(!options.brute_force_nouns && !options.brute_force_verbs);
        assert!(!options.brute_force_compounds);
        assert_eq!(options.max_results, None);
    }

    #[test]
    fn finders_follow_options() {
        let names = analyzer(AnalyzerOptions::default()).parser().finder_names();
        assert_eq!(
            names,
            [
                "dictionary",
                "cardinal-digits",
                "ordinal-digits",
                "digit-range",
                "proper-noun-apostrophe",
                "proper-noun",
                "punctuation"
            ]
        );
        let bare = AnalyzerOptions {
            numerals: false,
            proper_nouns: false,
            punctuation: false,
            copula: false,
            ..AnalyzerOptions::default()
        };
        assert_eq!(analyzer(bare).parser().finder_names(), ["dictionary"]);
        let brute = analyzer(AnalyzerOptions::with_brute_force());
        assert_eq!(brute.parser().finder_names().len(), 10);
    }

    #[test]
    fn disabled_overlays_are_absent() {
        let bare = AnalyzerOptions {
            numerals: false,
            copula: false,
            ..AnalyzerOptions::default()
        };
        let analyzer = analyzer(bare);
        assert!(analyzer.graph().state_id("DIGITS_CARDINAL_ROOT").is_err());
        assert!(analyzer.graph().state_id("VERB_COPULA_ROOT").is_err());
        assert!(analyzer.analyze("1000").unwrap().is_empty());
    }

    #[test]
    fn max_results_caps_output() {
        let mut analyzer = analyzer(AnalyzerOptions::default());
        let all = analyzer.analyze("evde").unwrap().len();
        assert!(all > 1);
        analyzer.set_max_results(Some(1));
        assert_eq!(analyzer.analyze("evde").unwrap().len(), 1);
    }

    #[test]
    fn unknown_words_have_no_parse_without_brute_force() {
        let analyzer = analyzer(AnalyzerOptions::default());
        assert!(analyzer.analyze("zzkrt").unwrap().is_empty());
    }
}
