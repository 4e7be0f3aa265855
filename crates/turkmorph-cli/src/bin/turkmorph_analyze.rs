// turkmorph-analyze: Morphological analysis of Turkish words.
//
// Analyzes the words given as arguments, or reads words from stdin (one per
// line). Prints one parse per line, or one JSON record per word.
//
// Usage:
//   turkmorph-analyze [-d LEXICON] [--brute-force] [--json] [--group] [WORD...]
//
// Options:
//   -d, --dictionary PATH  Lexicon file (or directory containing lexicon.txt)
//   --brute-force          Guess roots of words missing from the lexicon
//   --json                 Print JSON records
//   --group                Split parses at derivation boundaries
//   -h, --help             Print help

use std::io::{self, BufRead, Write};

use turkmorph_cli::{
    CliArgs, fatal, init_tracing, load_analyzer, parse_args, render_json, render_text,
};
use turkmorph_tr::TurkishAnalyzer;

fn print_help() {
    println!("turkmorph-analyze: Morphological analysis of Turkish words.");
    println!();
    println!("Usage: turkmorph-analyze [-d LEXICON] [--brute-force] [--json] [--group] [WORD...]");
    println!();
    println!("If WORD arguments are given, analyzes each word.");
    println!("Otherwise reads words from stdin (one per line).");
    println!();
    println!("Options:");
    println!("  -d, --dictionary PATH  Lexicon file (or directory containing lexicon.txt)");
    println!("  --brute-force          Guess roots of words missing from the lexicon");
    println!("  --json                 Print JSON records");
    println!("  --group                Split parses at derivation boundaries");
    println!("  -h, --help             Print this help");
    println!();
    println!("Environment:");
    println!("  TURKMORPH_LEXICON      Lexicon path used when -d is not given");
    println!("  TURKMORPH_LOG          Log filter (default: warn)");
}

fn analyze_word(
    word: &str,
    analyzer: &TurkishAnalyzer,
    cli: &CliArgs,
    out: &mut impl Write,
) -> io::Result<()> {
    let rendered = if cli.json {
        render_json(analyzer, word).map(|line| vec![line])
    } else {
        render_text(analyzer, word, cli.group)
    };
    match rendered {
        Ok(lines) => {
            for line in lines {
                writeln!(out, "{line}")?;
            }
        }
        Err(e) => eprintln!("error: {e}"),
    }
    Ok(())
}

fn main() {
    init_tracing();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let cli = parse_args(&args).unwrap_or_else(|e| fatal(&e));
    if cli.help {
        print_help();
        return;
    }

    let analyzer = load_analyzer(&cli).unwrap_or_else(|e| fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let result = if cli.words.is_empty() {
        let stdin = io::stdin();
        let mut result = Ok(());
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            result = analyze_word(word, &analyzer, &cli, &mut out);
            if result.is_err() {
                break;
            }
        }
        result
    } else {
        cli.words
            .iter()
            .try_for_each(|word| analyze_word(word, &analyzer, &cli, &mut out))
    };

    if let Err(e) = result.and_then(|()| out.flush()) {
        fatal(&format!("failed to write output: {e}"));
    }
}
