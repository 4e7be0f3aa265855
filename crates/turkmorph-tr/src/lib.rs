//! Turkish morphological parser.
//!
//! Given a surface word, the parser finds every way to split it into a root
//! and a chain of suffixes licensed by the suffix graph, with suffix
//! allomorphs resolved against the phonetics of the word so far.
//!
//! # Architecture
//!
//! - [`phonetics`] -- allomorph resolution ("+yI" after "bin" is "i") and its cache
//! - [`roots`] -- root finders: dictionary, numerals, proper nouns,
//!   punctuation and brute-force guessers
//! - [`numbers`] -- digit literals spelled out as Turkish words
//! - [`lexicon`] -- lexicon text format and root generation
//! - [`parse_state`] -- persistent partial parses
//! - [`parser`] -- the depth-first search driver
//! - [`formatter`] -- flat and derivation-grouped parse strings
//! - [`handle`] -- [`TurkishAnalyzer`], which owns all of the above
//!
//! ```no_run
//! use turkmorph_tr::{AnalyzerOptions, TurkishAnalyzer};
//!
//! let analyzer = TurkishAnalyzer::with_builtin_lexicon(AnalyzerOptions::default())?;
//! for parse in analyzer.analyze_formatted("kitab\u{0131}")? {
//!     println!("{parse}");
//! }
//! # Ok::<(), turkmorph_tr::AnalyzerError>(())
//! ```

pub mod formatter;
pub mod handle;
pub mod lexicon;
pub mod numbers;
pub mod parse_state;
pub mod parser;
pub mod phonetics;
pub mod roots;

pub use formatter::{Analysis, format_grouped, format_parse};
pub use handle::{AnalyzerError, AnalyzerOptions, TurkishAnalyzer};
pub use lexicon::{Lexicon, LexiconError};
pub use numbers::{NumeralError, spell_out};
pub use parse_state::{AppliedTransition, ParseState};
pub use parser::{ParseError, Parser};
pub use roots::{RootFinder, RootFinderError};
