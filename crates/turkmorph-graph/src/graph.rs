// The suffix graph: arena storage for states, suffixes and transitions,
// plus the rules mapping a root to its entry state.

use hashbrown::HashMap;
use turkmorph_core::{LexemeAttribute, Root, SecondaryCategory, SyntacticCategory};

use crate::state::{State, StateKind};
use crate::suffix::Suffix;
use crate::{GraphError, StateId, SuffixId, TransitionId};

/// A suffix-labeled edge between two states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub id: TransitionId,
    pub from: StateId,
    pub suffix: SuffixId,
    pub to: StateId,
    /// When a mandatory transition of a state applies, the other outgoing
    /// transitions of that state are not explored.
    pub mandatory: bool,
}

/// Shape of a root, used together with its category to pick a root state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RootShape {
    Plain,
    /// Full surface of a CompoundP3sg lexeme ("zeytinyağı").
    CompoundFull,
    /// Stem of a CompoundP3sg lexeme ("zeytinyağ").
    CompoundStem,
    /// Truncated root of a vowel-dropping verb ("ar" of "aramak").
    VowelDropped,
}

impl RootShape {
    pub fn of(root: &Root) -> Self {
        if root.is_compound_full_form() {
            RootShape::CompoundFull
        } else if root.has_attribute(LexemeAttribute::CompoundP3sg) {
            RootShape::CompoundStem
        } else if root.is_progressive_vowel_dropped() {
            RootShape::VowelDropped
        } else {
            RootShape::Plain
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct RootStateRule {
    category: SyntacticCategory,
    /// `None` matches any secondary category.
    secondary: Option<SecondaryCategory>,
    shape: RootShape,
    state: StateId,
}

impl RootStateRule {
    fn matches(&self, root: &Root, shape: RootShape) -> bool {
        self.category == root.lexeme.primary
            && self.shape == shape
            && self
                .secondary
                .is_none_or(|s| root.lexeme.secondary == Some(s))
    }
}

/// The suffix automaton.
///
/// Built once and then shared read-only. Overlays take a graph by value and
/// return it extended, so a base graph is never modified behind the back of
/// another holder; clone it first to keep both.
#[derive(Debug, Clone, Default)]
pub struct SuffixGraph {
    states: Vec<State>,
    suffixes: Vec<Suffix>,
    transitions: Vec<Transition>,
    state_names: HashMap<String, StateId>,
    suffix_names: HashMap<String, SuffixId>,
    root_rules: Vec<RootStateRule>,
}

impl SuffixGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_state(
        &mut self,
        name: &str,
        kind: StateKind,
        category: SyntacticCategory,
        secondary: Option<SecondaryCategory>,
    ) -> Result<StateId, GraphError> {
        if self.state_names.contains_key(name) {
            return Err(GraphError::DuplicateState(name.to_string()));
        }
        let id = StateId(self.states.len() as u16);
        let state = State::new(name, kind, category, secondary);
        self.states.push(state);
        self.state_names.insert(name.to_string(), id);
        Ok(id)
    }

    pub fn add_suffix(&mut self, suffix: Suffix) -> Result<SuffixId, GraphError> {
        if self.suffix_names.contains_key(&suffix.name) {
            return Err(GraphError::DuplicateSuffix(suffix.name));
        }
        let id = SuffixId(self.suffixes.len() as u16);
        self.suffix_names.insert(suffix.name.clone(), id);
        self.suffixes.push(suffix);
        Ok(id)
    }

    /// Add an edge `from --suffix--> to`. Outgoing edges are explored in
    /// insertion order.
    pub fn connect(&mut self, from: StateId, suffix: SuffixId, to: StateId) -> TransitionId {
        self.push_transition(from, suffix, to, false)
    }

    /// Add a mandatory edge; see [`Transition::mandatory`].
    pub fn connect_mandatory(
        &mut self,
        from: StateId,
        suffix: SuffixId,
        to: StateId,
    ) -> TransitionId {
        self.push_transition(from, suffix, to, true)
    }

    fn push_transition(
        &mut self,
        from: StateId,
        suffix: SuffixId,
        to: StateId,
        mandatory: bool,
    ) -> TransitionId {
        let id = TransitionId(self.transitions.len() as u32);
        self.transitions.push(Transition {
            id,
            from,
            suffix,
            to,
            mandatory,
        });
        self.states[from.index()].outputs.push(id);
        id
    }

    /// Register the entry state for roots of a category and shape.
    ///
    /// Rules added later take precedence, so an overlay can claim a
    /// secondary category ("Noun+Prop") that an earlier rule also covers.
    pub fn add_root_rule(
        &mut self,
        category: SyntacticCategory,
        secondary: Option<SecondaryCategory>,
        shape: RootShape,
        state: StateId,
    ) {
        self.root_rules.push(RootStateRule {
            category,
            secondary,
            shape,
            state,
        });
    }

    /// The state a root hypothesis starts from, or `None` when the graph
    /// has no entry point for it.
    pub fn root_state(&self, root: &Root) -> Option<StateId> {
        let shape = RootShape::of(root);
        self.root_rules
            .iter()
            .rev()
            .find(|rule| rule.matches(root, shape))
            .map(|rule| rule.state)
    }

    pub fn state(&self, id: StateId) -> &State {
        &self.states[id.index()]
    }

    pub fn suffix(&self, id: SuffixId) -> &Suffix {
        &self.suffixes[id.index()]
    }

    /// Mutable access for adding forms to a suffix after the suffixes its
    /// conditions refer to exist.
    pub fn suffix_mut(&mut self, id: SuffixId) -> &mut Suffix {
        &mut self.suffixes[id.index()]
    }

    pub fn transition(&self, id: TransitionId) -> &Transition {
        &self.transitions[id.index()]
    }

    /// Outgoing transitions of a state in insertion order.
    pub fn outgoing(&self, state: StateId) -> impl Iterator<Item = &Transition> + '_ {
        self.states[state.index()]
            .outputs
            .iter()
            .map(|&id| &self.transitions[id.index()])
    }

    pub fn state_id(&self, name: &str) -> Result<StateId, GraphError> {
        self.state_names
            .get(name)
            .copied()
            .ok_or_else(|| GraphError::UnknownState(name.to_string()))
    }

    pub fn suffix_id(&self, name: &str) -> Result<SuffixId, GraphError> {
        self.suffix_names
            .get(name)
            .copied()
            .ok_or_else(|| GraphError::UnknownSuffix(name.to_string()))
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    pub fn suffix_count(&self) -> usize {
        self.suffixes.len()
    }

    pub fn transition_count(&self) -> usize {
        self.transitions.len()
    }
}
