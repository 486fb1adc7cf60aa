//! VerseScope CLI entry point.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use tracing::info;
use versescope_index::CorpusIndex;
use versescope_runtime::{Repl, RuntimeConfig, format, logging};

/// Corpus file looked up when no path is given.
const DEFAULT_CORPUS: &str = "NIV.xml";

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    file: Option<PathBuf>,
    batch_mode: bool,
    show_help: bool,
    show_version: bool,
    pace: bool,
    no_banner: bool,
    limit: Option<usize>,
    label: Option<String>,
    log_level: Option<String>,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();
    let mut args = args.into_iter().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-b" | "--batch" => config.batch_mode = true,
            "--pace" => config.pace = true,
            "--no-banner" => config.no_banner = true,
            "--limit" => {
                let value = args.next().ok_or("--limit requires a value")?;
                config.limit = Some(
                    value
                        .parse()
                        .map_err(|_| format!("invalid --limit value: {value}"))?,
                );
            }
            "--label" => {
                config.label = Some(args.next().ok_or("--label requires a value")?);
            }
            "--log-level" => {
                config.log_level = Some(args.next().ok_or("--log-level requires a value")?);
            }
            arg if arg.starts_with('-') => {
                return Err(format!("unknown option: {arg}").into());
            }
            path => {
                if config.file.is_some() {
                    return Err(format!("unexpected argument: {path}").into());
                }
                config.file = Some(PathBuf::from(path));
            }
        }
    }

    Ok(config)
}

/// Resolves the corpus path: the given file, or `NIV.xml` next to the
/// executable, or `NIV.xml` in the working directory.
fn corpus_path(config: &CliConfig) -> PathBuf {
    if let Some(file) = &config.file {
        return file.clone();
    }

    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(DEFAULT_CORPUS)))
        .filter(|candidate| candidate.exists())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CORPUS))
}

fn runtime_config(config: &CliConfig) -> RuntimeConfig {
    let base = if config.pace {
        RuntimeConfig::demo()
    } else {
        RuntimeConfig::default()
    };
    let mut runtime = base
        .with_banner(!config.no_banner)
        .with_location_limit(config.limit);
    if let Some(label) = &config.label {
        runtime = runtime.with_corpus_label(label.clone());
    }
    runtime
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("versescope {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    logging::init(config.log_level.as_deref().unwrap_or(logging::DEFAULT_LEVEL));

    let path = corpus_path(&config);
    info!(path = %path.display(), "loading corpus");
    let verses = versescope_reader::load_corpus(&path).map_err(|e| e.report())?;
    let index = CorpusIndex::build(verses);

    // If batch mode, print the summary and exit
    if config.batch_mode {
        let stats = index.stats();
        println!("Unique word count: {}", format::count(stats.unique_words));
        println!("Total word count: {}", format::count(stats.total_words));
        println!("Total verse count: {}", format::count(stats.total_verses));
        return Ok(());
    }

    let mut repl = Repl::new(index)?.with_config(runtime_config(&config));
    repl.run()?;
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mVerseScope\x1b[0m - Scripture word-frequency and word-location explorer

\x1b[1mUSAGE:\x1b[0m
    versescope [OPTIONS] [FILE]

\x1b[1mARGUMENTS:\x1b[0m
    [FILE]    Corpus XML (default: {DEFAULT_CORPUS} next to the executable)

\x1b[1mOPTIONS:\x1b[0m
    -h, --help           Print help information
    -V, --version        Print version information
    -b, --batch          Load the corpus, print statistics, and exit
    --pace               Slow listings down for live reading
    --limit N            Show at most N verses per word in `wl`
    --label NAME         Name used for the corpus in messages (default: bible)
    --log-level LEVEL    Log filter when RUST_LOG is unset (default: warn)
    --no-banner          Do not print the welcome banner

\x1b[1mEXAMPLES:\x1b[0m
    versescope                     Explore NIV.xml
    versescope kjv.xml             Explore kjv.xml
    versescope -b kjv.xml          Print corpus statistics and exit
    versescope --limit 20 kjv.xml  Cap location listings at 20 verses

\x1b[1mCOMMANDS:\x1b[0m
    wf                   Word frequency explorer
    wl                   Word location explorer
    pf                   Print word frequencies
    all                  Print all verses
    (blank line)         Go back / exit
    Ctrl+D               Exit"
    );
}
