//! Shared types for Turkish morphological analysis.
//!
//! - [`alphabet`] -- Turkish letter classification and case conversion
//! - [`case`] -- word case pattern detection
//! - [`phonetics`] -- phonetic boundary features of a character sequence
//! - [`lexeme`] -- dictionary senses, parts of speech, lexical attributes
//! - [`root`] -- root hypotheses (a consumed prefix paired with a lexeme)

pub mod alphabet;
pub mod case;
pub mod lexeme;
pub mod phonetics;
pub mod root;

pub use lexeme::{
    Lexeme, LexemeAttribute, LexemeAttributes, LexemeError, SecondaryCategory, SyntacticCategory,
};
pub use phonetics::{PhoneticAttribute, PhoneticAttributes, PhoneticExpectation};
pub use root::{Root, RootOrigin};

/// Maximum number of characters in a word the analyzer will look at.
pub const MAX_WORD_CHARS: usize = 255;
