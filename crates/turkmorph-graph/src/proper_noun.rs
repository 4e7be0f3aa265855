// Proper noun and abbreviation overlay.

use tracing::debug;
use turkmorph_core::{SecondaryCategory, SyntacticCategory};

use crate::GraphError;
use crate::condition::Postcondition;
use crate::graph::{RootShape, SuffixGraph};
use crate::state::StateKind;
use crate::suffix::{Suffix, SuffixForm};

/// Extend `graph` with proper noun and abbreviation roots.
///
/// A bare proper noun only takes the zero inflections ("Ankara"); any
/// audible suffix goes after an apostrophe ("Ankara'ya").
pub fn proper_noun_overlay(mut graph: SuffixGraph) -> Result<SuffixGraph, GraphError> {
    let g = &mut graph;
    let noun = SyntacticCategory::Noun;
    let with_agreement = g.state_id("NOUN_WITH_AGREEMENT")?;
    let with_case = g.state_id("NOUN_WITH_CASE")?;
    let a3sg = g.suffix_id("A3sg_Noun")?;
    let a3pl = g.suffix_id("A3pl_Noun")?;
    let pnon = g.suffix_id("Pnon_Noun")?;
    let nom = g.suffix_id("Nom_Noun")?;

    let transfer = StateKind::Transfer;
    let bare_agreement = g.add_state("PROPER_NOUN_WITH_AGREEMENT", transfer, noun, None)?;
    let bare_possession = g.add_state("PROPER_NOUN_WITH_POSSESSION", transfer, noun, None)?;
    g.connect(bare_agreement, pnon, bare_possession);
    g.connect(bare_possession, nom, with_case);

    let apos = g.add_suffix(
        Suffix::new("Apos_Proper_Noun", "Apos")
            .form(SuffixForm::new("'").followed_by(Postcondition::FollowedByNonEmpty)),
    )?;

    for (secondary, root_name, apos_name) in [
        (SecondaryCategory::Prop, "PROPER_NOUN_ROOT", "PROPER_NOUN_APOS"),
        (SecondaryCategory::Abbreviation, "ABBREVIATION_ROOT", "ABBREVIATION_APOS"),
    ] {
        let root = g.add_state(root_name, StateKind::Transfer, noun, Some(secondary))?;
        let after_apos = g.add_state(apos_name, StateKind::Transfer, noun, Some(secondary))?;
        g.connect(root, a3sg, bare_agreement);
        g.connect(root, apos, after_apos);
        g.connect(after_apos, a3sg, with_agreement);
        g.connect(after_apos, a3pl, with_agreement);
        g.add_root_rule(noun, Some(secondary), RootShape::Plain, root);
    }

    debug!(states = graph.state_count(), "applied proper noun overlay");
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use turkmorph_core::{Lexeme, LexemeAttributes, Root, RootOrigin};

    use super::*;
    use crate::basic::basic_suffix_graph;

    fn noun(surface: &str, secondary: Option<SecondaryCategory>) -> Root {
        let lexeme = Arc::new(Lexeme::new(
            surface,
            surface,
            SyntacticCategory::Noun,
            secondary,
            LexemeAttributes::EMPTY,
        ));
        Root::new(surface, lexeme, RootOrigin::Dynamic)
    }

    #[test]
    fn proper_nouns_get_their_own_root_state() {
        let g = proper_noun_overlay(basic_suffix_graph().unwrap()).unwrap();
        let ankara = noun("Ankara", Some(SecondaryCategory::Prop));
        assert_eq!(g.root_state(&ankara), g.state_id("PROPER_NOUN_ROOT").ok());
        let tbmm = noun("TBMM", Some(SecondaryCategory::Abbreviation));
        assert_eq!(g.root_state(&tbmm), g.state_id("ABBREVIATION_ROOT").ok());
        let ev = noun("ev", None);
        assert_eq!(g.root_state(&ev), g.state_id("NOUN_ROOT").ok());
    }

    #[test]
    fn base_graph_is_left_untouched_by_cloning() {
        let base = basic_suffix_graph().unwrap();
        let extended = proper_noun_overlay(base.clone()).unwrap();
        assert!(base.state_id("PROPER_NOUN_ROOT").is_err());
        assert!(extended.state_id("PROPER_NOUN_ROOT").is_ok());
    }
}
