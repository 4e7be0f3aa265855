// Parse rendering: the flat "root(lemma)+POS+Suffix(form[surface])" string,
// its derivation-grouped variant and a serializable analysis record.

use serde::Serialize;
use turkmorph_core::alphabet::is_letter;
use turkmorph_graph::SuffixGraph;

use crate::parse_state::{AppliedTransition, ParseState};

/// Tags of one applied transition, or `None` for a free suffix.
fn transition_tags(
    graph: &SuffixGraph,
    applied: &AppliedTransition,
) -> Option<(Option<String>, String)> {
    let suffix = graph.suffix(applied.suffix);
    if suffix.free {
        return None;
    }
    let category = applied
        .derivational
        .then(|| graph.state(applied.to).pretty_name());
    let mut tag = suffix.pretty_name.clone();
    if applied.surface.chars().any(is_letter) {
        let form = &suffix.forms[applied.form_index].form;
        tag.push_str(&format!("({form}[{}])", applied.surface));
    }
    Some((category, tag))
}

/// Render the derivation groups of a parse. The first group starts with
/// the root and its category; each later group starts with the category a
/// derivation led to.
pub fn format_grouped(graph: &SuffixGraph, parse: &ParseState) -> Vec<String> {
    let root = parse.root();
    let mut groups = vec![format!(
        "{}({})+{}",
        root.surface,
        root.lexeme.lemma_root,
        graph.state(parse.root_state()).pretty_name()
    )];
    for applied in parse.transitions() {
        let Some((category, tag)) = transition_tags(graph, applied) else {
            continue;
        };
        if let Some(category) = category {
            groups.push(category);
        }
        if let Some(current) = groups.last_mut() {
            current.push('+');
            current.push_str(&tag);
        }
    }
    groups
}

/// Render a parse on one line: `1000(1000)+Num+Digits+Apos+Adj+Zero+...`.
pub fn format_parse(graph: &SuffixGraph, parse: &ParseState) -> String {
    format_grouped(graph, parse).join("+")
}

/// A parse as plain data, for JSON output and callers that do not want to
/// hold on to the graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    /// The analyzed word.
    pub surface: String,
    /// The part of the word consumed by the root.
    pub root: String,
    pub lemma: String,
    pub lemma_root: String,
    /// Pronunciation the suffixes were resolved against, when it differs
    /// from the root's spelling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spelled: Option<String>,
    pub root_category: String,
    pub final_category: String,
    /// Pretty names of the non-free suffixes, in order.
    pub suffixes: Vec<String>,
    pub formatted: String,
    pub groups: Vec<String>,
}

impl Analysis {
    pub fn from_parse(graph: &SuffixGraph, parse: &ParseState) -> Self {
        let root = parse.root();
        let groups = format_grouped(graph, parse);
        let suffixes = parse
            .transitions()
            .into_iter()
            .map(|t| graph.suffix(t.suffix))
            .filter(|s| !s.free)
            .map(|s| s.pretty_name.clone())
            .collect();
        Self {
            surface: parse.input().to_string(),
            root: root.surface.clone(),
            lemma: root.lexeme.lemma.clone(),
            lemma_root: root.lexeme.lemma_root.clone(),
            spelled: root.spelled_form.clone(),
            root_category: graph.state(parse.root_state()).pretty_name(),
            final_category: graph.state(parse.state()).pretty_name(),
            suffixes,
            formatted: groups.join("+"),
            groups,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use turkmorph_graph::basic::basic_suffix_graph;
    use turkmorph_graph::numeral::numeral_overlay;

    use super::*;
    use crate::lexicon::Lexicon;
    use crate::parser::Parser;
    use crate::roots::{CardinalDigitsFinder, DictionaryRootFinder};

    fn parser() -> Parser {
        let lexicon = Lexicon::parse("kitap\ngelmek [A:Aorist_I]\n").unwrap();
        let graph = numeral_overlay(basic_suffix_graph().unwrap()).unwrap();
        Parser::new(
            Arc::new(graph),
            vec![
                Box::new(DictionaryRootFinder::from_lexicon(&lexicon)),
                Box::new(CardinalDigitsFinder),
            ],
        )
    }

    fn formatted(word: &str) -> Vec<String> {
        let parser = parser();
        parser
            .parse(word)
            .unwrap()
            .iter()
            .map(|p| format_parse(parser.graph(), p))
            .collect()
    }

    #[test]
    fn root_shows_surface_and_lemma_root() {
        let parses = formatted("kitab\u{0131}");
        assert!(parses.contains(&"kitab(kitap)+Noun+A3sg+Pnon+Acc(+yI[\u{0131}])".to_string()));
        assert!(parses.contains(&"kitab(kitap)+Noun+A3sg+P3sg(+sI[\u{0131}])+Nom".to_string()));
    }

    #[test]
    fn derivations_insert_the_new_category() {
        let parses = formatted("gelmek");
        assert!(parses.contains(&"gel(gel)+Verb+Pos+Noun+Inf(mAk[mek])+A3sg+Pnon+Nom".to_string()));
    }

    #[test]
    fn digits_with_apostrophe() {
        let parser = parser();
        let parses = parser.parse("1000'i").unwrap();
        let expected = "1000(1000)+Num+Digits+Apos+Adj+Zero+Noun+Zero+A3sg+Pnon+Acc(+yI[i])";
        let parse = parses
            .iter()
            .find(|p| format_parse(parser.graph(), p) == expected)
            .unwrap();
        assert_eq!(
            format_grouped(parser.graph(), parse),
            [
                "1000(1000)+Num+Digits+Apos",
                "Adj+Zero",
                "Noun+Zero+A3sg+Pnon+Acc(+yI[i])"
            ]
        );
    }

    #[test]
    fn analysis_record() {
        let parser = parser();
        let parses = parser.parse("1000'i").unwrap();
        let graph = parser.graph();
        let analyses: Vec<_> = parses
            .iter()
            .map(|p| Analysis::from_parse(graph, p))
            .collect();
        let acc = analyses
            .iter()
            .find(|a| a.suffixes.last().map(String::as_str) == Some("Acc"))
            .unwrap();
        assert_eq!(acc.surface, "1000'i");
        assert_eq!(acc.root, "1000");
        assert_eq!(acc.spelled.as_deref(), Some("bin"));
        assert_eq!(acc.root_category, "Num+Digits");
        assert_eq!(acc.final_category, "Noun");
        let suffixes = ["Apos", "Zero", "Zero", "A3sg", "Pnon", "Acc"];
        assert_eq!(acc.suffixes, suffixes);
        assert_eq!(acc.formatted, acc.groups.join("+"));
    }
}
