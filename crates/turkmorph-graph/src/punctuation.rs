// Punctuation overlay.

use tracing::debug;
use turkmorph_core::SyntacticCategory;

use crate::GraphError;
use crate::graph::{RootShape, SuffixGraph};
use crate::state::StateKind;

/// Extend `graph` with a terminal root state for punctuation roots.
pub fn punctuation_overlay(mut graph: SuffixGraph) -> Result<SuffixGraph, GraphError> {
    let category = SyntacticCategory::Punc;
    let punc = graph.add_state("PUNC_ROOT", StateKind::Terminal, category, None)?;
    graph.add_root_rule(category, None, RootShape::Plain, punc);
    debug!(states = graph.state_count(), "applied punctuation overlay");
    Ok(graph)
}
