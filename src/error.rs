//! Error types for the collaborator layer.
//!
//! The enumerator itself is total and never fails; everything here belongs to
//! clipboard access, selection handling and configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Clipboard failures. Always treated as transient by callers.
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard init: {0}")]
    Init(String),

    #[error("clipboard set: {0}")]
    Set(String),
}

#[derive(Debug, Error)]
pub enum Error {
    /// The chosen formula could not be copied. It is still carried so the
    /// caller can show it.
    #[error("failed to copy {formula} to clipboard: {source}")]
    NotCopied {
        formula: String,
        #[source]
        source: ClipboardError,
    },

    /// A selection was made while no candidate list was pending.
    #[error("no candidates are waiting for a selection")]
    NoPendingSelection,

    /// The key or index does not address one of the pending candidates.
    #[error("invalid selection {key:?}: choose 1-{count}")]
    InvalidSelection { key: String, count: usize },

    /// A non-interactive copy hit several interpretations and no choice.
    #[error("input has {count} interpretations; pass --pick N")]
    Ambiguous { count: usize },

    #[error("query is empty")]
    EmptyQuery,

    #[error("failed to parse config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("terminal: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
