// Morphosyntactic states of the suffix automaton.

use turkmorph_core::{SecondaryCategory, SyntacticCategory};

use crate::TransitionId;

/// How a state behaves during search and formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateKind {
    /// Inflectional state; more suffixes may follow.
    Transfer,
    /// Marks a derivation boundary: transitions leaving it change the word's
    /// category and reset suffix bookkeeping.
    Derivational,
    /// A parse may end here.
    Terminal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    pub name: String,
    pub kind: StateKind,
    pub category: SyntacticCategory,
    pub secondary: Option<SecondaryCategory>,
    pub(crate) outputs: Vec<TransitionId>,
}

impl State {
    pub fn new(
        name: impl Into<String>,
        kind: StateKind,
        category: SyntacticCategory,
        secondary: Option<SecondaryCategory>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            category,
            secondary,
            outputs: Vec::new(),
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.kind == StateKind::Terminal
    }

    pub fn is_derivational(&self) -> bool {
        self.kind == StateKind::Derivational
    }

    /// Category tag used in formatted parses: "Noun", "Num+Digits".
    pub fn pretty_name(&self) -> String {
        match self.secondary {
            Some(secondary) => format!("{}+{}", self.category, secondary),
            None => self.category.to_string(),
        }
    }

    /// Outgoing transitions in insertion order.
    pub fn outputs(&self) -> &[TransitionId] {
        &self.outputs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pretty_name_includes_secondary_category() {
        let state = State::new(
            "DIGITS_CARDINAL_ROOT",
            StateKind::Transfer,
            SyntacticCategory::Num,
            Some(SecondaryCategory::Digits),
        );
        assert_eq!(state.pretty_name(), "Num+Digits");
        let noun = SyntacticCategory::Noun;
        let state = State::new("NOUN_ROOT", StateKind::Transfer, noun, None);
        assert_eq!(state.pretty_name(), "Noun");
        assert!(!state.is_terminal());
    }
}
