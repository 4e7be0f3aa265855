// Numeral overlay: spelled cardinals, ordinals, distributives and digit
// literals (plain, ranges, with apostrophe suffixes).

use tracing::debug;
use turkmorph_core::{SecondaryCategory, SyntacticCategory};

use crate::GraphError;
use crate::condition::Postcondition;
use crate::graph::{RootShape, SuffixGraph};
use crate::state::StateKind;
use crate::suffix::{Suffix, SuffixForm};

use SecondaryCategory as Sec;
use StateKind::{Derivational, Transfer};

/// Extend `graph` with numeral states and edges.
pub fn numeral_overlay(mut graph: SuffixGraph) -> Result<SuffixGraph, GraphError> {
    let g = &mut graph;
    let adj_root = g.state_id("ADJECTIVE_ROOT")?;

    let num = |g: &mut SuffixGraph, name: &str, kind, secondary| {
        g.add_state(name, kind, SyntacticCategory::Num, Some(secondary))
    };
    let cardinal = num(g, "NUMERAL_CARDINAL_ROOT", Transfer, Sec::Card)?;
    let cardinal_deriv = num(g, "NUMERAL_CARDINAL_DERIV", Derivational, Sec::Card)?;
    let ordinal = num(g, "NUMERAL_ORDINAL_ROOT", Transfer, Sec::Ord)?;
    let ordinal_deriv = num(g, "NUMERAL_ORDINAL_DERIV", Derivational, Sec::Ord)?;
    let distributive = num(g, "NUMERAL_DISTRIBUTIVE_ROOT", Transfer, Sec::Dist)?;
    let distributive_deriv = num(g, "NUMERAL_DISTRIBUTIVE_DERIV", Derivational, Sec::Dist)?;
    let digits = num(g, "DIGITS_CARDINAL_ROOT", Transfer, Sec::Digits)?;
    let digits_deriv = num(g, "DIGITS_CARDINAL_DERIV", Derivational, Sec::Digits)?;
    let digits_apos = num(g, "DIGITS_CARDINAL_APOS", Transfer, Sec::Digits)?;
    let apos_deriv = num(g, "DIGITS_APOS_DERIV", Derivational, Sec::Digits)?;
    let range = num(g, "DIGITS_RANGE_ROOT", Transfer, Sec::Range)?;
    let range_apos = num(g, "DIGITS_RANGE_APOS", Transfer, Sec::Range)?;

    let zero = g.add_suffix(Suffix::new("Zero_Num_Adj", "Zero").form(""))?;
    let ord = g.add_suffix(Suffix::new("Ord_Num", "Ord").form("+IncI"))?;
    let dist = g.add_suffix(Suffix::new("Dist_Num", "Dist").form("+\u{015F}Ar"))?;
    let numbers_of = g.add_suffix(Suffix::new("NumbersOf_Num", "NumbersOf").form("lArcA"))?;
    // An apostrophe never ends a word.
    let apostrophe = SuffixForm::new("'").followed_by(Postcondition::FollowedByNonEmpty);
    let apos = g.add_suffix(Suffix::new("Apos_Num", "Apos").form(apostrophe))?;
    let free = g.add_suffix(Suffix::free("Free_Num"))?;

    // Spelled numerals.
    g.connect(cardinal, ord, ordinal);
    g.connect(cardinal, dist, distributive);
    g.connect(cardinal, free, cardinal_deriv);
    g.connect(cardinal_deriv, zero, adj_root);
    g.connect(cardinal_deriv, numbers_of, adj_root);
    g.connect(ordinal, free, ordinal_deriv);
    g.connect(ordinal_deriv, zero, adj_root);
    g.connect(distributive, free, distributive_deriv);
    g.connect(distributive_deriv, zero, adj_root);

    // Digit literals.
    g.connect(digits, apos, digits_apos);
    g.connect(digits, free, digits_deriv);
    g.connect(digits_deriv, zero, adj_root);
    g.connect(digits_apos, ord, ordinal);
    g.connect(digits_apos, dist, distributive);
    g.connect(digits_apos, free, apos_deriv);
    g.connect_mandatory(apos_deriv, zero, adj_root);

    g.connect(range, apos, range_apos);
    g.connect(range, free, digits_deriv);
    g.connect(range_apos, ord, ordinal);
    g.connect(range_apos, free, apos_deriv);

    let num = SyntacticCategory::Num;
    g.add_root_rule(num, Some(Sec::Card), RootShape::Plain, cardinal);
    g.add_root_rule(num, Some(Sec::Ord), RootShape::Plain, ordinal);
    g.add_root_rule(num, Some(Sec::Dist), RootShape::Plain, distributive);
    g.add_root_rule(num, Some(Sec::Digits), RootShape::Plain, digits);
    g.add_root_rule(num, Some(Sec::Range), RootShape::Plain, range);

    debug!(states = graph.state_count(), "applied numeral overlay");
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use turkmorph_core::{Lexeme, LexemeAttributes, Root, RootOrigin};

    use super::*;
    use crate::basic::basic_suffix_graph;

    fn numeral(surface: &str, spelled: &str, secondary: SecondaryCategory) -> Root {
        let lexeme = Arc::new(Lexeme::new(
            surface,
            surface,
            SyntacticCategory::Num,
            Some(secondary),
            LexemeAttributes::EMPTY,
        ));
        Root::spelled(surface, spelled, lexeme, RootOrigin::Numeral)
    }

    #[test]
    fn overlay_adds_numeral_root_states() {
        let g = numeral_overlay(basic_suffix_graph().unwrap()).unwrap();
        let root = numeral("1000", "bin", Sec::Digits);
        assert_eq!(g.root_state(&root), g.state_id("DIGITS_CARDINAL_ROOT").ok());
        let root = numeral("1-2", "bir iki", Sec::Range);
        assert_eq!(g.root_state(&root), g.state_id("DIGITS_RANGE_ROOT").ok());
    }

    #[test]
    fn apostrophe_derivation_is_mandatory() {
        let g = numeral_overlay(basic_suffix_graph().unwrap()).unwrap();
        let apos_deriv = g.state_id("DIGITS_APOS_DERIV").unwrap();
        let outgoing: Vec<_> = g.outgoing(apos_deriv).collect();
        assert_eq!(outgoing.len(), 1);
        assert!(outgoing[0].mandatory);
        assert_eq!(Some(outgoing[0].to), g.state_id("ADJECTIVE_ROOT").ok());
    }

    #[test]
    fn overlay_does_not_apply_twice() {
        let g = numeral_overlay(basic_suffix_graph().unwrap()).unwrap();
        assert!(matches!(numeral_overlay(g), Err(GraphError::DuplicateState(_))));
    }
}
