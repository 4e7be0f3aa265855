// JSON rendering of analyses and options.

use serde_json::{Value, json};
use turkmorph_tr::{AnalyzerOptions, TurkishAnalyzer};

#[test]
fn analyses_serialize_to_json() {
    let analyzer = TurkishAnalyzer::with_builtin_lexicon(AnalyzerOptions::default()).unwrap();
    let analyses = analyzer.analyze_detailed("1000'i").unwrap();
    let value = serde_json::to_value(&analyses).unwrap();
    let Value::Array(items) = value else {
        panic!("expected an array");
    };
    let formatted = "1000(1000)+Num+Digits+Apos+Adj+Zero+Noun+Zero+A3sg+Pnon+Acc(+yI[i])";
    let acc = items
        .iter()
        .find(|item| item["formatted"] == formatted)
        .unwrap();
    assert_eq!(acc["surface"], "1000'i");
    assert_eq!(acc["root"], "1000");
    assert_eq!(acc["spelled"], "bin");
    assert_eq!(acc["root_category"], "Num+Digits");
    assert_eq!(acc["final_category"], "Noun");
    let groups = json!([
        "1000(1000)+Num+Digits+Apos",
        "Adj+Zero",
        "Noun+Zero+A3sg+Pnon+Acc(+yI[i])",
    ]);
    assert_eq!(acc["groups"], groups);
}

#[test]
fn spelled_form_is_omitted_for_plain_words() {
    let analyzer = TurkishAnalyzer::with_builtin_lexicon(AnalyzerOptions::default()).unwrap();
    let analyses = analyzer.analyze_detailed("evde").unwrap();
    let value = serde_json::to_value(&analyses[0]).unwrap();
    assert!(value.get("spelled").is_none());
    assert_eq!(value["lemma"], "ev");
}

#[test]
fn options_read_from_json_fill_in_defaults() {
    let text = r#"{"brute_force_nouns": true, "max_results": 3}"#;
    let options: AnalyzerOptions = serde_json::from_str(text).unwrap();
    assert!(options.brute_force_nouns);
    assert!(!options.brute_force_verbs);
    assert!(options.numerals && options.copula);
    assert_eq!(options.max_results, Some(3));

    let empty: AnalyzerOptions = serde_json::from_str("{}").unwrap();
    assert_eq!(empty, AnalyzerOptions::default());
}

#[test]
fn options_round_trip() {
    let options = AnalyzerOptions::with_brute_force();
    let text = serde_json::to_string(&options).unwrap();
    let read: AnalyzerOptions = serde_json::from_str(&text).unwrap();
    assert_eq!(read, options);
}
