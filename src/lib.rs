//! Formulate library crate
//!
//! This crate provides the core functionality for the `formulate` CLI. It
//! turns loosely typed chemical formulas such as `h2so4` into subscripted
//! formulas (`H₂SO₄`), lists every interpretation when the input is ambiguous
//! (`co` is both cobalt `Co` and carbon monoxide `CO`), and copies the chosen
//! one to the clipboard.
//!
//! Modules:
//!
//! - `elements` — the fixed element symbol table.
//! - `subscript` — digit to subscript glyph conversion.
//! - `enumerate` — the backtracking tokenizer (`enumerate`, `format_single`).
//! - `session`, `history`, `clipboard` — the copy flow with disambiguation and
//!   recent history.
//! - `repl` — interactive mode.
//! - `config`, `logging`, `error` — ambient plumbing.
//!
//! The binary `src/main.rs` calls `formulate_lib::run()` to execute the CLI.

pub mod clipboard;
pub mod config;
pub mod elements;
pub mod enumerate;
pub mod error;
pub mod history;
pub mod logging;
pub mod repl;
pub mod session;
pub mod subscript;

use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::clipboard::{CopyTarget, NoClipboard, SystemClipboard};
use crate::config::Config;
use crate::enumerate::{candidate_count, enumerate_limited, format_single};
use crate::error::{Error, Result};
use crate::session::{Session, Submission};

/// Top-level CLI types and runner. Keep `main.rs` thin.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Config file (default: <config dir>/formulate/config.toml)
    #[arg(long = "config", global = true)]
    config: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Print formulas only, never touch the clipboard
    #[arg(long = "no-clipboard", action = ArgAction::SetTrue, global = true)]
    no_clipboard: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List every interpretation of a formula, numbered from 1
    List {
        /// Formula text, e.g. h2so4
        input: String,

        /// Maximum number of interpretations to print
        #[arg(short = 'l', long = "limit")]
        limit: Option<usize>,
    },
    /// Print the single best-guess interpretation
    Format {
        /// Formula text, e.g. h2so4
        input: String,
    },
    /// Copy a formula to the clipboard
    Copy {
        /// Formula text, e.g. h2so4
        input: String,

        /// Which interpretation to copy when there are several (1-based)
        #[arg(short = 'p', long = "pick")]
        pick: Option<usize>,
    },
    /// Read formulas line by line and copy them
    Interactive,
}

/// Run the Formulate CLI.
///
/// Parses arguments, loads the config and dispatches. Errors are printed to
/// stderr and exit with code 1; a clipboard failure is only a warning.
///
/// ```no_run
/// formulate_lib::run(); // called from src/main.rs
/// ```
pub fn run() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut config = Config::load(cli.config.as_deref()).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(1);
    });
    if cli.no_clipboard {
        config.clipboard = false;
    }

    let outcome = if config.clipboard {
        dispatch(cli.command, Session::new(SystemClipboard, &config), &config)
    } else {
        dispatch(cli.command, Session::new(NoClipboard, &config), &config)
    };

    if !finish(outcome, &mut io::stdout(), &mut io::stderr()) {
        std::process::exit(1);
    }
}

/// Report the outcome of a command. A formula that could not be copied is
/// still printed, followed by a warning. Returns false for real failures.
fn finish<W: Write, E: Write>(outcome: Result<()>, out: &mut W, err: &mut E) -> bool {
    match outcome {
        Ok(()) => true,
        Err(Error::NotCopied { formula, source }) => {
            let _ = writeln!(out, "{}", formula);
            let _ = writeln!(err, "warning: failed to copy to clipboard: {}", source);
            true
        }
        Err(e) => {
            let _ = writeln!(err, "error: {}", e);
            false
        }
    }
}

/// Print numbered interpretations of `input`, at most `limit` (at least one).
fn list<W: Write, E: Write>(input: &str, limit: usize, out: &mut W, err: &mut E) -> Result<()> {
    let candidates = enumerate_limited(input, limit.max(1));
    for (i, c) in candidates.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, c)?;
    }
    let total = candidate_count(input);
    if total > candidates.len() as u128 {
        writeln!(err, "({} of {} interpretations shown)", candidates.len(), total)?;
    }
    Ok(())
}

fn dispatch<C: CopyTarget>(
    command: Commands,
    mut session: Session<C>,
    config: &Config,
) -> Result<()> {
    match command {
        Commands::List { input, limit } => {
            let limit = limit.unwrap_or_else(|| config.effective_candidate_limit());
            list(&input, limit, &mut io::stdout(), &mut io::stderr())
        }
        Commands::Format { input } => {
            println!("{}", format_single(&input));
            Ok(())
        }
        Commands::Copy { input, pick } => {
            let formula = match session.submit(&input)? {
                Submission::Copied(formula) => formula,
                Submission::Choose(candidates) => match pick {
                    Some(n) => session.select_index(n)?,
                    None => {
                        for (i, c) in candidates.iter().enumerate() {
                            println!("{}. {}", i + 1, c);
                        }
                        return Err(Error::Ambiguous {
                            count: candidates.len(),
                        });
                    }
                },
            };
            println!("{}", formula);
            Ok(())
        }
        Commands::Interactive => {
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            if stdin.is_terminal() {
                repl::run_loop(&mut session, &mut repl::Terminal::new()?, &mut stdout)
            } else {
                repl::run_loop(&mut session, &mut repl::Piped::new(stdin.lock()), &mut stdout)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClipboardError;

    fn run_finish(outcome: Result<()>) -> (bool, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let ok = finish(outcome, &mut out, &mut err);
        (
            ok,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_failed_copy_still_prints_formula() {
        let (ok, out, err) = run_finish(Err(Error::NotCopied {
            formula: "H₂SO₄".into(),
            source: ClipboardError::Init("no display".into()),
        }));
        assert!(ok);
        assert_eq!(out, "H₂SO₄\n");
        assert!(err.starts_with("warning: failed to copy to clipboard"));
    }

    #[test]
    fn test_other_errors_fail() {
        let (ok, out, err) = run_finish(Err(Error::Ambiguous { count: 2 }));
        assert!(!ok);
        assert!(out.is_empty());
        assert!(err.contains("pass --pick N"));
    }

    #[test]
    fn test_list_zero_limit_shows_one() {
        let config = Config {
            candidate_limit: 0,
            ..Config::default()
        };
        let mut out = Vec::new();
        let mut err = Vec::new();
        list("nacl", config.effective_candidate_limit(), &mut out, &mut err).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "1. NaCl\n");
        assert_eq!(String::from_utf8(err).unwrap(), "(1 of 5 interpretations shown)\n");

        let mut out = Vec::new();
        list("nacl", 0, &mut out, &mut Vec::new()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "1. NaCl\n");
    }
}
