// Search driver: seeds root hypotheses and explores the suffix graph
// depth-first until every input character is accounted for.

use std::sync::Arc;

use hashbrown::HashSet;
use tracing::{debug, trace};
use turkmorph_core::alphabet::is_letter;
use turkmorph_core::{Lexeme, MAX_WORD_CHARS};
use turkmorph_graph::{MorphemeContext, SuffixGraph, SuffixId, Transition};

use crate::parse_state::ParseState;
use crate::phonetics::AllomorphCache;
use crate::roots::{RootFinder, RootFinderError, gate};

/// Error type for parse failures.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("root finder failed: {0}")]
    RootFinder(#[from] RootFinderError),
}

/// A morphological parser over a fixed suffix graph and set of root
/// finders.
///
/// The parser holds no per-parse state beyond its allomorph cache, which is
/// internally synchronized, so `parse` can be called from many threads.
pub struct Parser {
    graph: Arc<SuffixGraph>,
    finders: Vec<Box<dyn RootFinder>>,
    cache: AllomorphCache,
}

impl Parser {
    pub fn new(graph: Arc<SuffixGraph>, finders: Vec<Box<dyn RootFinder>>) -> Self {
        Self {
            graph,
            finders,
            cache: AllomorphCache::new(),
        }
    }

    pub fn graph(&self) -> &SuffixGraph {
        &self.graph
    }

    /// Names of the registered root finders, in consultation order.
    pub fn finder_names(&self) -> Vec<&'static str> {
        self.finders.iter().map(|f| f.name()).collect()
    }

    pub fn cache(&self) -> &AllomorphCache {
        &self.cache
    }

    /// Every complete parse of `input`.
    ///
    /// Returns an empty list for empty input, input containing control
    /// characters and input longer than [`MAX_WORD_CHARS`]. Parses come out
    /// grouped by root (shorter roots first) and, within a root, in
    /// depth-first order over the graph's transition order.
    pub fn parse(&self, input: &str) -> Result<Vec<ParseState>, ParseError> {
        if !is_parseable(input) {
            debug!(len = input.len(), "rejected input");
            return Ok(Vec::new());
        }
        let seeds = self.seed(input)?;
        debug!(word = input, roots = seeds.len(), "seeded parse");

        let mut results = Vec::new();
        let mut stack: Vec<ParseState> = seeds.into_iter().rev().collect();
        let mut expanded = 0usize;
        while let Some(state) = stack.pop() {
            expanded += 1;
            if self.is_complete(&state) {
                results.push(state.clone());
            }
            let children = self.expand(&state);
            stack.extend(children.into_iter().rev());
        }
        let parses = results.len();
        debug!(word = input, expanded, parses, "parse finished");
        Ok(results)
    }

    /// Root hypotheses for every prefix of `input`, already placed at their
    /// root states.
    ///
    /// For each prefix the guessing finders run after the others, and only
    /// when no other finder produced a root spelled exactly as the prefix.
    fn seed(&self, input: &str) -> Result<Vec<ParseState>, ParseError> {
        let whole: Arc<str> = Arc::from(input);
        let mut seen: HashSet<(String, Arc<Lexeme>)> = HashSet::new();
        let mut seeds = Vec::new();

        let ordered = || {
            let known = self.finders.iter().filter(|f| !f.guesses());
            known.chain(self.finders.iter().filter(|f| f.guesses()))
        };
        let prefix_ends = input.char_indices().map(|(i, c)| i + c.len_utf8());
        for end in prefix_ends {
            let partial = &input[..end];
            let mut known_prefix = false;
            for finder in ordered() {
                let name = finder.name();
                if finder.guesses() && known_prefix {
                    trace!(finder = name, partial, "known prefix, not guessing");
                    continue;
                }
                if !finder.handles(partial, input) {
                    continue;
                }
                for root in finder.find_roots(partial, input)? {
                    let Some(root) = gate(&root, partial) else {
                        continue;
                    };
                    if !finder.guesses() && root.surface == partial {
                        known_prefix = true;
                    }
                    if !seen.insert((root.surface.clone(), Arc::clone(&root.lexeme))) {
                        continue;
                    }
                    let Some(state) = self.graph.root_state(&root) else {
                        trace!(finder = name, root = %root.surface, "no root state");
                        continue;
                    };
                    trace!(
                        finder = name,
                        root = %root.surface,
                        lemma = %root.lexeme.lemma,
                        "root"
                    );
                    seeds.push(ParseState::seed(root, state, Arc::clone(&whole)));
                }
            }
        }
        Ok(seeds)
    }

    /// Children of `state`. When a mandatory transition applies, only
    /// mandatory transitions are followed.
    fn expand(&self, state: &ParseState) -> Vec<ParseState> {
        let outgoing = self.graph.outgoing(state.state());
        let (mandatory, optional): (Vec<_>, Vec<_>) = outgoing.partition(|t| t.mandatory);

        let mut children = Vec::new();
        for transition in mandatory {
            self.apply(state, transition, &mut children);
        }
        if children.is_empty() {
            for transition in optional {
                self.apply(state, transition, &mut children);
            }
        }
        children
    }

    fn apply(
        &self,
        state: &ParseState,
        transition: &Transition,
        children: &mut Vec<ParseState>,
    ) {
        let suffix = self.graph.suffix(transition.suffix);
        if !suffix.allow_repetition && state.applied_since_derivation(transition.suffix) {
            return;
        }
        let derivational = self.graph.state(transition.from).is_derivational();
        let remaining = state.remaining();
        let attributes = state.phonetic_attributes();
        let mut surfaces: Vec<String> = Vec::new();

        for (index, form) in suffix.forms.iter().enumerate() {
            if let Some(condition) = &form.precondition {
                if !condition.is_satisfied_by(state) {
                    continue;
                }
            }
            let id = transition.id;
            let resolved = self.cache.resolve(id, index, &form.form, attributes);
            let Some(surface) = resolved else {
                continue;
            };
            if !remaining.starts_with(surface.as_str()) || surfaces.contains(&surface) {
                continue;
            }
            if surface.is_empty() && state.visited_since_nonempty(transition.to) {
                continue;
            }
            let lettered = surface.chars().any(is_letter);
            if lettered
                && state
                    .pending_expectation()
                    .is_some_and(|e| !e.is_satisfied_by(&surface))
            {
                continue;
            }
            surfaces.push(surface.clone());
            let expectation = form.expectation;
            children.push(state.advance(transition, index, surface, derivational, expectation));
        }
    }

    /// A state is a complete parse when the input is consumed, the state is
    /// terminal, no vowel expectation is left open and every postcondition
    /// along the path holds.
    fn is_complete(&self, state: &ParseState) -> bool {
        if !state.is_consumed() || !self.graph.state(state.state()).is_terminal() {
            return false;
        }
        if let Some(expectation) = state.pending_expectation() {
            if !expectation.allows_word_end() {
                return false;
            }
        }
        let transitions = state.transitions();
        let pairs: Vec<(SuffixId, &str)> = transitions
            .iter()
            .map(|t| (t.suffix, t.surface.as_str()))
            .collect();
        transitions.iter().enumerate().all(|(i, applied)| {
            let form = &self.graph.suffix(applied.suffix).forms[applied.form_index];
            form.postcondition
                .as_ref()
                .is_none_or(|post| post.is_satisfied_by(&pairs[i + 1..]))
        })
    }
}

fn is_parseable(input: &str) -> bool {
    !input.is_empty()
        && !input.chars().any(char::is_control)
        && input.chars().count() <= MAX_WORD_CHARS
}
