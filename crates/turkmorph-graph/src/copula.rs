// Copula overlay: nominal predicates ("evdeyim", "güzeldi", "kitaptır").

use tracing::debug;
use turkmorph_core::SyntacticCategory;

use crate::GraphError;
use crate::condition::Condition;
use crate::graph::SuffixGraph;
use crate::state::StateKind;
use crate::suffix::{Suffix, SuffixForm};

/// Extend `graph` with a zero-derived copular verb after nouns, pronouns
/// and adjectives.
pub fn copula_overlay(mut graph: SuffixGraph) -> Result<SuffixGraph, GraphError> {
    let g = &mut graph;
    let noun_with_case = g.state_id("NOUN_WITH_CASE")?;
    let pron_with_case = g.state_id("PRONOUN_WITH_CASE")?;
    let adj_deriv = g.state_id("ADJECTIVE_DERIV")?;
    let with_tense = g.state_id("VERB_WITH_TENSE")?;
    let with_past = g.state_id("VERB_WITH_PAST_TENSE")?;
    let with_agreement = g.state_id("VERB_WITH_AGREEMENT")?;
    let accusatives = [g.suffix_id("Acc_Noun")?, g.suffix_id("Acc_Pron")?];

    use SyntacticCategory::{Noun, Pron, Verb};
    let derivational = StateKind::Derivational;
    let noun_deriv = g.add_state("NOUN_COPULA_DERIV", derivational, Noun, None)?;
    let pron_deriv = g.add_state("PRONOUN_COPULA_DERIV", derivational, Pron, None)?;
    let copula_root = g.add_state("VERB_COPULA_ROOT", StateKind::Transfer, Verb, None)?;
    let copula_tense = g.add_state("VERB_COPULA_WITH_TENSE", StateKind::Transfer, Verb, None)?;

    let free = g.add_suffix(Suffix::free("Free_Copula"))?;
    let not_object = Condition::doesnt_come_after_any(&accusatives);
    let zero = Suffix::new("Zero_Copula", "Zero").form(SuffixForm::new("").when(not_object));
    let zero = g.add_suffix(zero)?;
    g.connect(noun_with_case, free, noun_deriv);
    g.connect(pron_with_case, free, pron_deriv);
    g.connect(noun_deriv, zero, copula_root);
    g.connect(pron_deriv, zero, copula_root);
    g.connect(adj_deriv, zero, copula_root);

    let pres = g.add_suffix(Suffix::new("Pres_Copula", "Pres").form(""))?;
    let past = g.add_suffix(Suffix::new("Past_Copula", "Past").form("+ydI"))?;
    let narr = g.add_suffix(Suffix::new("Narr_Copula", "Narr").form("+ymI\u{015F}"))?;
    let cond = g.add_suffix(Suffix::new("Cond_Copula", "Cond").form("+ysA"))?;
    g.connect(copula_root, pres, copula_tense);
    g.connect(copula_root, past, with_past);
    g.connect(copula_root, narr, with_tense);
    g.connect(copula_root, cond, with_past);

    for name in ["A1sg", "A2sg", "A3sg", "A1pl", "A2pl", "A3pl"] {
        let agreement = g.suffix_id(&format!("{name}_Verb"))?;
        g.connect(copula_tense, agreement, with_agreement);
    }

    debug!(states = graph.state_count(), "applied copula overlay");
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic::basic_suffix_graph;

    #[test]
    fn copula_hangs_off_nominal_states() {
        let g = copula_overlay(basic_suffix_graph().unwrap()).unwrap();
        let with_case = g.state_id("NOUN_WITH_CASE").unwrap();
        let copula_deriv = g.state_id("NOUN_COPULA_DERIV").unwrap();
        assert!(g.outgoing(with_case).any(|t| t.to == copula_deriv));
        assert!(g.state(copula_deriv).is_derivational());

        let adj_deriv = g.state_id("ADJECTIVE_DERIV").unwrap();
        let copula_root = g.state_id("VERB_COPULA_ROOT").unwrap();
        assert!(g.outgoing(adj_deriv).any(|t| t.to == copula_root));
    }

    #[test]
    fn copula_requires_base_grammar() {
        assert!(matches!(
            copula_overlay(SuffixGraph::new()),
            Err(GraphError::UnknownState(_))
        ));
    }
}
