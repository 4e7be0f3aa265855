// turkmorph-cli: shared utilities for the command-line tools.

use std::path::{Path, PathBuf};
use std::process;

use tracing::debug;
use tracing_subscriber::EnvFilter;
use turkmorph_tr::{AnalyzerError, AnalyzerOptions, Lexicon, TurkishAnalyzer};

/// Lexicon file name looked up in each search directory.
const LEXICON_FILE: &str = "lexicon.txt";

/// Environment variable naming a lexicon file or directory.
const LEXICON_ENV: &str = "TURKMORPH_LEXICON";

/// Environment variable holding the log filter.
const LOG_ENV: &str = "TURKMORPH_LOG";

/// Parsed command line of `turkmorph-analyze`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub dictionary: Option<String>,
    pub brute_force: bool,
    pub json: bool,
    pub group: bool,
    pub help: bool,
    pub words: Vec<String>,
}

impl CliArgs {
    pub fn options(&self) -> AnalyzerOptions {
        if self.brute_force {
            AnalyzerOptions::with_brute_force()
        } else {
            AnalyzerOptions::default()
        }
    }
}

/// Parse command line arguments (without the program name).
pub fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    let mut parsed = CliArgs::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => parsed.help = true,
            "--brute-force" => parsed.brute_force = true,
            "--json" => parsed.json = true,
            "--group" => parsed.group = true,
            "-d" | "--dictionary" => {
                let value = iter.next().ok_or_else(|| format!("{arg} requires a value"))?;
                parsed.dictionary = Some(value.clone());
            }
            "--" => parsed.words.extend(iter.by_ref().cloned()),
            other => {
                if let Some(value) = other.strip_prefix("--dictionary=") {
                    parsed.dictionary = Some(value.to_string());
                } else if other.starts_with("--") {
                    return Err(format!("unknown option: {other}"));
                } else {
                    parsed.words.push(other.to_string());
                }
            }
        }
    }
    Ok(parsed)
}

/// Candidate lexicon files, in search order:
/// 1. `TURKMORPH_LEXICON` environment variable
/// 2. `~/.turkmorph/lexicon.txt`
/// 3. `lexicon.txt` in the current working directory
fn build_search_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Ok(env_path) = std::env::var(LEXICON_ENV) {
        paths.push(lexicon_file(Path::new(&env_path)));
    }
    if let Some(home) = home_dir() {
        paths.push(home.join(".turkmorph").join(LEXICON_FILE));
    }
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(LEXICON_FILE));
    }
    paths
}

/// A path naming a directory means the lexicon file inside it.
fn lexicon_file(path: &Path) -> PathBuf {
    if path.is_dir() {
        path.join(LEXICON_FILE)
    } else {
        path.to_path_buf()
    }
}

fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Find and load a lexicon.
///
/// An explicit `dictionary` path must exist. Otherwise the search paths are
/// tried in order; a lexicon found there extends the built-in one, and with
/// none found the built-in lexicon is used alone.
pub fn load_lexicon(dictionary: Option<&str>) -> Result<Lexicon, String> {
    let mut lexicon = Lexicon::builtin();
    let found = match dictionary {
        Some(path) => {
            let file = lexicon_file(Path::new(path));
            if !file.is_file() {
                return Err(format!("lexicon not found: {}", file.display()));
            }
            Some(file)
        }
        None => build_search_paths().into_iter().find(|p| p.is_file()),
    };
    match found {
        Some(file) => {
            let extra = Lexicon::load(&file)
                .map_err(|e| format!("failed to load {}: {e}", file.display()))?;
            lexicon.extend(extra);
        }
        None => debug!("no lexicon file found, using the built-in lexicon"),
    }
    Ok(lexicon)
}

/// Load a lexicon and create an analyzer over it.
pub fn load_analyzer(args: &CliArgs) -> Result<TurkishAnalyzer, String> {
    let lexicon = load_lexicon(args.dictionary.as_deref())?;
    TurkishAnalyzer::new(&lexicon, args.options())
        .map_err(|e| format!("failed to create analyzer: {e}"))
}

/// Render the analyses of one word as text lines.
pub fn render_text(
    analyzer: &TurkishAnalyzer,
    word: &str,
    group: bool,
) -> Result<Vec<String>, String> {
    let failed = |e: AnalyzerError| format!("{word}: {e}");
    let parses: Vec<String> = if group {
        let groups = analyzer.analyze_grouped(word).map_err(failed)?;
        groups.iter().map(|g| g.join(" | ")).collect()
    } else {
        analyzer.analyze_formatted(word).map_err(failed)?
    };

    if parses.is_empty() {
        return Ok(vec![format!("{word}: (no analysis)")]);
    }
    let mut lines = vec![format!("{word}:")];
    lines.extend(parses.into_iter().map(|p| format!("  {p}")));
    Ok(lines)
}

/// Render the analyses of one word as a single JSON line.
pub fn render_json(analyzer: &TurkishAnalyzer, word: &str) -> Result<String, String> {
    let failed = |e: &dyn std::fmt::Display| format!("{word}: {e}");
    let analyses = analyzer.analyze_detailed(word).map_err(|e| failed(&e))?;
    let record = serde_json::json!({ "word": word, "analyses": analyses });
    serde_json::to_string(&record).map_err(|e| failed(&e))
}

/// Install a stderr log subscriber filtered by `TURKMORPH_LOG` (default
/// `warn`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}
