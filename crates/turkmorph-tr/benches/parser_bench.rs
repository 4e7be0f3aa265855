// Criterion benchmarks for turkmorph-tr.
//
// Uses the built-in lexicon, so no data files are needed.
//
// Run:
//   cargo bench -p turkmorph-tr

use criterion::{Criterion, criterion_group, criterion_main};
use turkmorph_tr::{AnalyzerOptions, TurkishAnalyzer};

const WORDS: &[&str] = &[
    "kitab\u{0131}",
    "evlerimizde",
    "geliyorum",
    "gidiyorlar",
    "ar\u{0131}yor",
    "arabalar\u{0131}n",
    "kitapt\u{0131}r",
    "evdeyim",
    "g\u{00FC}zeldi",
    "zeytinya\u{011F}\u{0131}",
    "Ankara'ya",
    "TBMM'ye",
    "1000'i",
    "1-2'nci",
    "3.",
    "...",
];

fn analyzer(options: AnalyzerOptions) -> TurkishAnalyzer {
    TurkishAnalyzer::with_builtin_lexicon(options).expect("TurkishAnalyzer")
}

/// Full analysis of a mixed word list.
fn bench_analyze_words(c: &mut Criterion) {
    let analyzer = analyzer(AnalyzerOptions::default());
    c.bench_function("analyze_16_words", |b| {
        b.iter(|| {
            for word in WORDS {
                std::hint::black_box(analyzer.analyze(word).ok());
            }
        });
    });
}

/// Same words rendered as strings.
fn bench_analyze_formatted(c: &mut Criterion) {
    let analyzer = analyzer(AnalyzerOptions::default());
    c.bench_function("analyze_formatted_16_words", |b| {
        b.iter(|| {
            for word in WORDS {
                std::hint::black_box(analyzer.analyze_formatted(word).ok());
            }
        });
    });
}

/// Unknown words with every brute-force finder on.
fn bench_brute_force(c: &mut Criterion) {
    let analyzer = analyzer(AnalyzerOptions::with_brute_force());
    let unknown = [
        "defterlerimizden",
        "dolab\u{0131}",
        "ko\u{015F}uyorum",
        "masac\u{0131}klar",
    ];
    c.bench_function("brute_force_4_words", |b| {
        b.iter(|| {
            for word in &unknown {
                std::hint::black_box(analyzer.analyze(word).ok());
            }
        });
    });
}

/// Graph construction and lexicon loading.
fn bench_build_analyzer(c: &mut Criterion) {
    c.bench_function("build_analyzer", |b| {
        b.iter(|| std::hint::black_box(analyzer(AnalyzerOptions::default())));
    });
}

criterion_group!(
    benches,
    bench_analyze_words,
    bench_analyze_formatted,
    bench_brute_force,
    bench_build_analyzer,
);
criterion_main!(benches);
