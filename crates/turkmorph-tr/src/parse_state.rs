// Persistent parse states.
//
// A parse state is a node in a tree rooted at a root hypothesis; each child
// adds exactly one transition. Nodes are immutable and shared behind `Arc`,
// so extending a state never copies its ancestors.

use std::fmt;
use std::sync::Arc;

use turkmorph_core::alphabet::is_letter;
use turkmorph_core::{PhoneticAttributes, PhoneticExpectation, Root};
use turkmorph_graph::{MorphemeContext, StateId, SuffixId, Transition, TransitionId};

/// A transition as applied in a parse, with the surface it consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedTransition {
    pub transition: TransitionId,
    pub suffix: SuffixId,
    /// Which form of the suffix matched.
    pub form_index: usize,
    pub from: StateId,
    pub to: StateId,
    pub surface: String,
    /// The transition left a derivational state.
    pub derivational: bool,
}

#[derive(Debug)]
struct Node {
    root: Arc<Root>,
    root_state: StateId,
    state: StateId,
    parent: Option<ParseState>,
    applied: Option<AppliedTransition>,
    input: Arc<str>,
    /// Byte offset of the unconsumed input.
    offset: usize,
    phonetic_surface: String,
    phonetic_attributes: PhoneticAttributes,
    /// Constraint on the first letter of the next lettered suffix.
    pending: Option<PhoneticExpectation>,
    derived: bool,
    since_derivation: Vec<SuffixId>,
    /// States entered since the last suffix with a non-empty surface.
    visited: Vec<StateId>,
}

/// A (possibly partial) parse: a root, the transitions applied to it, and
/// the input left to consume.
#[derive(Clone)]
pub struct ParseState(Arc<Node>);

impl ParseState {
    /// Start a parse from `root` at `state`. `input` must start with the
    /// root's surface.
    pub fn seed(root: Root, state: StateId, input: Arc<str>) -> Self {
        let offset = root.surface.len().min(input.len());
        Self(Arc::new(Node {
            phonetic_surface: root.phonetic_base().to_string(),
            phonetic_attributes: root.phonetic_attributes,
            pending: root.phonetic_expectation,
            root: Arc::new(root),
            root_state: state,
            state,
            parent: None,
            applied: None,
            input,
            offset,
            derived: false,
            since_derivation: Vec::new(),
            visited: vec![state],
        }))
    }

    /// Extend the parse with `transition`, which consumed `surface`.
    pub fn advance(
        &self,
        transition: &Transition,
        form_index: usize,
        surface: String,
        derivational: bool,
        expectation: Option<PhoneticExpectation>,
    ) -> Self {
        let node = &self.0;
        let lettered = surface.chars().any(is_letter);

        let capacity = node.phonetic_surface.len() + surface.len();
        let mut phonetic_surface = String::with_capacity(capacity);
        phonetic_surface.push_str(&node.phonetic_surface);
        phonetic_surface.push_str(&surface);
        let phonetic_attributes = if lettered {
            PhoneticAttributes::of(&phonetic_surface)
        } else {
            node.phonetic_attributes
        };
        let pending = if lettered {
            expectation
        } else {
            expectation.or(node.pending)
        };

        let since_derivation = if derivational {
            vec![transition.suffix]
        } else {
            let mut list = node.since_derivation.clone();
            list.push(transition.suffix);
            list
        };
        let visited = if surface.is_empty() {
            let mut list = node.visited.clone();
            list.push(transition.to);
            list
        } else {
            vec![transition.to]
        };

        Self(Arc::new(Node {
            root: Arc::clone(&node.root),
            root_state: node.root_state,
            state: transition.to,
            parent: Some(self.clone()),
            input: Arc::clone(&node.input),
            offset: (node.offset + surface.len()).min(node.input.len()),
            applied: Some(AppliedTransition {
                transition: transition.id,
                suffix: transition.suffix,
                form_index,
                from: transition.from,
                to: transition.to,
                surface,
                derivational,
            }),
            phonetic_surface,
            phonetic_attributes,
            pending,
            derived: node.derived || derivational,
            since_derivation,
            visited,
        }))
    }

    pub fn root(&self) -> &Root {
        &self.0.root
    }

    /// The state the root was seeded at.
    pub fn root_state(&self) -> StateId {
        self.0.root_state
    }

    pub fn state(&self) -> StateId {
        self.0.state
    }

    pub fn parent(&self) -> Option<&ParseState> {
        self.0.parent.as_ref()
    }

    /// The transition that produced this state; `None` for a seed.
    pub fn last_transition(&self) -> Option<&AppliedTransition> {
        self.0.applied.as_ref()
    }

    /// Applied transitions, oldest first.
    pub fn transitions(&self) -> Vec<&AppliedTransition> {
        let mut out = Vec::new();
        let mut current = Some(self);
        while let Some(state) = current {
            if let Some(applied) = state.last_transition() {
                out.push(applied);
            }
            current = state.parent();
        }
        out.reverse();
        out
    }

    /// The whole input being parsed.
    pub fn input(&self) -> &str {
        &self.0.input
    }

    /// Input not consumed yet.
    pub fn remaining(&self) -> &str {
        self.0.input.get(self.0.offset..).unwrap_or("")
    }

    pub fn is_consumed(&self) -> bool {
        self.remaining().is_empty()
    }

    pub fn pending_expectation(&self) -> Option<PhoneticExpectation> {
        self.0.pending
    }

    /// Whether `state` was entered since the last non-empty suffix.
    pub fn visited_since_nonempty(&self, state: StateId) -> bool {
        self.0.visited.contains(&state)
    }

    /// Whether `suffix` was applied since the last derivation.
    pub fn applied_since_derivation(&self, suffix: SuffixId) -> bool {
        self.0.since_derivation.contains(&suffix)
    }
}

impl MorphemeContext for ParseState {
    fn root(&self) -> &Root {
        &self.0.root
    }

    fn suffixes_since_derivation(&self) -> Vec<SuffixId> {
        self.0.since_derivation.clone()
    }

    fn has_derivation(&self) -> bool {
        self.0.derived
    }

    fn phonetic_attributes(&self) -> PhoneticAttributes {
        self.0.phonetic_attributes
    }

    fn phonetic_surface(&self) -> &str {
        &self.0.phonetic_surface
    }
}

impl fmt::Debug for ParseState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParseState")
            .field("root", &self.0.root.surface)
            .field("lemma", &self.0.root.lexeme.lemma)
            .field("state", &self.0.state)
            .field("transitions", &self.transitions().len())
            .field("remaining", &self.remaining())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use turkmorph_core::PhoneticExpectation::VowelStart;
    use turkmorph_core::{
        Lexeme, LexemeAttributes, PhoneticAttribute, RootOrigin, SyntacticCategory,
    };
    use turkmorph_graph::SuffixGraph;
    use turkmorph_graph::basic::basic_suffix_graph;

    use super::*;

    fn seed(graph: &SuffixGraph, surface: &str, input: &str) -> ParseState {
        let lexeme = Arc::new(Lexeme::new(
            surface,
            surface,
            SyntacticCategory::Noun,
            None,
            LexemeAttributes::EMPTY,
        ));
        let root = Root::new(surface, lexeme, RootOrigin::Dictionary);
        let state = graph.root_state(&root).unwrap();
        ParseState::seed(root, state, Arc::from(input))
    }

    fn transition<'g>(graph: &'g SuffixGraph, from: StateId, suffix: &str) -> &'g Transition {
        let suffix = graph.suffix_id(suffix).unwrap();
        graph.outgoing(from).find(|t| t.suffix == suffix).unwrap()
    }

    #[test]
    fn seed_consumes_the_root() {
        let graph = basic_suffix_graph().unwrap();
        let state = seed(&graph, "ev", "evler");
        assert_eq!(state.remaining(), "ler");
        assert!(state.transitions().is_empty());
        assert_eq!(state.phonetic_surface(), "ev");
        assert_eq!(state.root_state(), state.state());
    }

    #[test]
    fn advancing_shares_the_parent() {
        let graph = basic_suffix_graph().unwrap();
        let root = seed(&graph, "ev", "evler");
        let plural = transition(&graph, root.state(), "A3pl_Noun");
        let next = root.advance(plural, 0, "ler".to_string(), false, None);

        assert!(next.is_consumed());
        assert_eq!(next.phonetic_surface(), "evler");
        let attrs = next.phonetic_attributes();
        assert!(attrs.contains(PhoneticAttribute::LastLetterConsonant));
        assert_eq!(next.transitions().len(), 1);
        assert_eq!(next.transitions()[0].surface, "ler");
        assert!(Arc::ptr_eq(&next.parent().unwrap().0, &root.0));
        assert!(next.applied_since_derivation(plural.suffix));
        // The parent is unchanged.
        assert_eq!(root.remaining(), "ler");
    }

    #[test]
    fn empty_surfaces_keep_features_and_track_visits() {
        let graph = basic_suffix_graph().unwrap();
        let root = seed(&graph, "ev", "ev");
        let a3sg = transition(&graph, root.state(), "A3sg_Noun");
        let next = root.advance(a3sg, 0, String::new(), false, None);
        assert_eq!(next.phonetic_attributes(), root.phonetic_attributes());
        assert!(next.visited_since_nonempty(root.state()));
        assert!(next.visited_since_nonempty(a3sg.to));
    }

    #[test]
    fn derivation_resets_suffix_bookkeeping() {
        let graph = basic_suffix_graph().unwrap();
        let root = seed(&graph, "ev", "ev");
        let a3sg = transition(&graph, root.state(), "A3sg_Noun");
        let next = root.advance(a3sg, 0, String::new(), true, None);
        assert!(next.has_derivation());
        assert_eq!(next.suffixes_since_derivation(), vec![a3sg.suffix]);
    }

    #[test]
    fn expectations_wait_for_a_lettered_surface() {
        let graph = basic_suffix_graph().unwrap();
        let root = seed(&graph, "ev", "ev");
        let a3sg = transition(&graph, root.state(), "A3sg_Noun");
        let next = root.advance(a3sg, 0, String::new(), false, Some(VowelStart));
        assert_eq!(next.pending_expectation(), Some(VowelStart));
        let pnon = transition(&graph, next.state(), "Pnon_Noun");
        let after = next.advance(pnon, 0, String::new(), false, None);
        assert_eq!(after.pending_expectation(), Some(VowelStart));
    }
}
