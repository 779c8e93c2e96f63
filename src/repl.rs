//! Line-oriented interactive mode.
//!
//! Each line is a query. A single interpretation is copied at once; several
//! are listed with numbers and the next line picks one (`1`-`9`) or cancels
//! (`q`, an empty line or Ctrl-C). `:history` lists recent copies and `:quit`
//! (or Ctrl-D) leaves.
//!
//! On a terminal lines come from a `rustyline` editor, which gives line
//! editing and recall of earlier queries. Piped input is read plainly.

use std::io::{BufRead, Write};

use rustyline::config::Config as EditorConfig;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, EditMode};

use crate::clipboard::CopyTarget;
use crate::error::{Error, Result};
use crate::session::{MAX_SELECTION_KEYS, Session, Submission};

const PROMPT: &str = "formula> ";

/// One read from a [`LineSource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Text(String),
    /// Ctrl-C.
    Interrupted,
    /// Ctrl-D or end of input.
    Eof,
}

/// Where the loop gets its lines from.
pub trait LineSource {
    fn next_line(&mut self, prompt: &str) -> Result<Line>;
}

/// Interactive terminal backed by `rustyline`.
pub struct Terminal {
    editor: DefaultEditor,
}

impl Terminal {
    pub fn new() -> Result<Self> {
        let config = EditorConfig::builder()
            .history_ignore_space(true)
            .auto_add_history(false)
            .edit_mode(EditMode::Emacs)
            .build();
        let editor = DefaultEditor::with_config(config)?;
        Ok(Self { editor })
    }
}

impl LineSource for Terminal {
    fn next_line(&mut self, prompt: &str) -> Result<Line> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = self.editor.add_history_entry(line.as_str());
                }
                Ok(Line::Text(line))
            }
            Err(ReadlineError::Interrupted) => Ok(Line::Interrupted),
            Err(ReadlineError::Eof) => Ok(Line::Eof),
            Err(e) => Err(e.into()),
        }
    }
}

/// Plain reader for piped stdin; prompts are not shown.
pub struct Piped<R: BufRead> {
    input: R,
}

impl<R: BufRead> Piped<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }
}

impl<R: BufRead> LineSource for Piped<R> {
    fn next_line(&mut self, _prompt: &str) -> Result<Line> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(Line::Eof);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Line::Text(line))
    }
}

/// Run the loop until `:quit` or end of input.
pub fn run_loop<C, S, W>(session: &mut Session<C>, source: &mut S, out: &mut W) -> Result<()>
where
    C: CopyTarget,
    S: LineSource,
    W: Write,
{
    loop {
        let line = match source.next_line(PROMPT)? {
            Line::Text(line) => line,
            Line::Interrupted => continue,
            Line::Eof => break,
        };
        match line.trim() {
            "" => continue,
            ":quit" | ":q" => break,
            ":history" | ":h" => print_history(session, out)?,
            query => match session.submit(query) {
                Ok(Submission::Copied(formula)) => writeln!(out, "Copied {}", formula)?,
                Ok(Submission::Choose(candidates)) => {
                    print_candidates(&candidates, out)?;
                    if !await_selection(session, source, out)? {
                        break;
                    }
                }
                Err(e) => report(&e, out)?,
            },
        }
        out.flush()?;
    }
    Ok(())
}

/// Read selection lines until one resolves the pending list. Returns false
/// if input ended while waiting.
fn await_selection<C, S, W>(session: &mut Session<C>, source: &mut S, out: &mut W) -> Result<bool>
where
    C: CopyTarget,
    S: LineSource,
    W: Write,
{
    let selectable = session
        .pending()
        .map_or(0, |p| p.len().min(MAX_SELECTION_KEYS));
    let prompt = format!("select 1-{} (q to cancel)> ", selectable);
    loop {
        out.flush()?;
        let answer = match source.next_line(&prompt)? {
            Line::Text(answer) => answer,
            Line::Interrupted => {
                session.cancel();
                writeln!(out, "Cancelled")?;
                return Ok(true);
            }
            Line::Eof => {
                session.cancel();
                return Ok(false);
            }
        };
        let answer = answer.trim();
        if answer.is_empty() || answer.eq_ignore_ascii_case("q") {
            session.cancel();
            writeln!(out, "Cancelled")?;
            return Ok(true);
        }

        let mut chars = answer.chars();
        let result = match (chars.next(), chars.next()) {
            (Some(key), None) => session.select_key(key),
            _ => Err(Error::InvalidSelection {
                key: answer.to_string(),
                count: selectable,
            }),
        };
        match result {
            Ok(formula) => {
                writeln!(out, "Copied {}", formula)?;
                return Ok(true);
            }
            Err(e @ Error::InvalidSelection { .. }) => writeln!(out, "{}", e)?,
            Err(e) => {
                report(&e, out)?;
                return Ok(true);
            }
        }
    }
}

fn print_candidates<W: Write>(candidates: &[String], out: &mut W) -> Result<()> {
    writeln!(out, "{} interpretations:", candidates.len())?;
    for (i, c) in candidates.iter().enumerate() {
        if i < MAX_SELECTION_KEYS {
            writeln!(out, "  {}. {}", i + 1, c)?;
        } else {
            writeln!(out, "     {}", c)?;
        }
    }
    Ok(())
}

fn print_history<C: CopyTarget, W: Write>(session: &Session<C>, out: &mut W) -> Result<()> {
    if session.history().is_empty() {
        writeln!(out, "No copies yet")?;
    }
    for entry in session.history().iter() {
        writeln!(out, "  {}  ←  {}", entry.formula, entry.query)?;
    }
    Ok(())
}

fn report<W: Write>(e: &Error, out: &mut W) -> Result<()> {
    match e {
        Error::NotCopied { formula, source } => {
            writeln!(out, "{}", formula)?;
            writeln!(out, "warning: failed to copy to clipboard: {}", source)?
        }
        other => writeln!(out, "error: {}", other)?,
    }
    Ok(())
}
