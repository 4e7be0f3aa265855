//! Suffix automaton (morphotactics) for Turkish.
//!
//! The automaton is a directed graph of morphosyntactic states connected by
//! suffix-labeled transitions. It is built once at startup and shared
//! read-only by every parse.
//!
//! # Architecture
//!
//! - [`state`] -- states and their kinds (transfer, derivational, terminal)
//! - [`suffix`] -- suffixes and their abstract allomorph spellings
//! - [`condition`] -- pre/postconditions on suffix forms
//! - [`graph`] -- the graph container and root-state resolution
//! - [`basic`] -- the base grammar (nouns, verbs, adjectives, closed classes)
//! - [`numeral`], [`proper_noun`], [`punctuation`], [`copula`] -- overlays
//!   that take a graph and return it extended with new states and edges

pub mod basic;
pub mod condition;
pub mod copula;
pub mod graph;
pub mod numeral;
pub mod proper_noun;
pub mod punctuation;
pub mod state;
pub mod suffix;

pub use condition::{Condition, Postcondition};
pub use graph::{RootShape, SuffixGraph, Transition};
pub use state::{State, StateKind};
pub use suffix::{Suffix, SuffixForm};

use turkmorph_core::{PhoneticAttributes, Root};

/// Error type for graph construction and lookups.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("unknown state: {0}")]
    UnknownState(String),
    #[error("unknown suffix: {0}")]
    UnknownSuffix(String),
    #[error("duplicate state name: {0}")]
    DuplicateState(String),
    #[error("duplicate suffix name: {0}")]
    DuplicateSuffix(String),
}

/// Index of a state in a [`SuffixGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateId(pub(crate) u16);

/// Index of a suffix in a [`SuffixGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SuffixId(pub(crate) u16);

/// Index of a transition in a [`SuffixGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TransitionId(pub(crate) u32);

impl StateId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl SuffixId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl TransitionId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Read access to a partial parse, as seen by suffix form conditions.
///
/// The parser's search state implements this; conditions never see the
/// parser's own types.
pub trait MorphemeContext {
    /// The root hypothesis the parse started from.
    fn root(&self) -> &Root;

    /// Suffixes applied since the last derivational boundary, oldest first.
    fn suffixes_since_derivation(&self) -> Vec<SuffixId>;

    /// Whether any derivational transition has been applied.
    fn has_derivation(&self) -> bool;

    /// Phonetic attributes of everything consumed so far.
    fn phonetic_attributes(&self) -> PhoneticAttributes;

    /// The pronounced text consumed so far (root phonetic base plus suffix
    /// surfaces).
    fn phonetic_surface(&self) -> &str;
}
