//! Query → candidates → copy flow shared by the CLI and the interactive loop.
//!
//! A query with a single interpretation is copied straight away. A query with
//! several is held as a pending selection until the user picks one by number
//! or cancels. Only successful copies enter the history.

use crate::clipboard::CopyTarget;
use crate::config::Config;
use crate::enumerate::{candidate_count, enumerate_limited};
use crate::error::{Error, Result};
use crate::history::History;

/// Selection keys run from '1' to '9'.
pub const MAX_SELECTION_KEYS: usize = 9;

/// Result of submitting a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Exactly one candidate; it was copied.
    Copied(String),
    /// Several candidates; waiting for a selection.
    Choose(Vec<String>),
}

#[derive(Debug)]
struct Pending {
    query: String,
    candidates: Vec<String>,
}

pub struct Session<C: CopyTarget> {
    target: C,
    history: History,
    candidate_limit: usize,
    pending: Option<Pending>,
}

impl<C: CopyTarget> Session<C> {
    pub fn new(target: C, config: &Config) -> Self {
        Self {
            target,
            history: History::with_limit(config.history_limit),
            candidate_limit: config.effective_candidate_limit(),
            pending: None,
        }
    }

    /// Enumerate `query` and either copy its only candidate or hold all of
    /// them for selection. Any earlier pending selection is discarded.
    pub fn submit(&mut self, query: &str) -> Result<Submission> {
        self.pending = None;
        let query = query.trim();
        if query.is_empty() {
            return Err(Error::EmptyQuery);
        }

        let candidates = enumerate_limited(query, self.candidate_limit);
        let total = candidate_count(query);
        if total > candidates.len() as u128 {
            tracing::warn!(
                query,
                total = %total,
                shown = candidates.len(),
                "too many interpretations, keeping the first ones"
            );
        } else {
            tracing::debug!(query, total = %total, "enumerated candidates");
        }

        if candidates.len() == 1 {
            let formula = candidates.into_iter().next().unwrap_or_default();
            let formula = self.copy(query, formula)?;
            return Ok(Submission::Copied(formula));
        }

        self.pending = Some(Pending {
            query: query.to_string(),
            candidates: candidates.clone(),
        });
        Ok(Submission::Choose(candidates))
    }

    /// Resolve the pending selection with a single key press, '1' through the
    /// candidate count (at most '9').
    ///
    /// An invalid key leaves the selection pending.
    pub fn select_key(&mut self, key: char) -> Result<String> {
        let pending = self.pending.as_ref().ok_or(Error::NoPendingSelection)?;
        let selectable = pending.candidates.len().min(MAX_SELECTION_KEYS);
        let index = key
            .to_digit(10)
            .map(|d| d as usize)
            .filter(|d| (1..=selectable).contains(d))
            .ok_or_else(|| Error::InvalidSelection {
                key: key.to_string(),
                count: selectable,
            })?;
        self.choose(index)
    }

    /// Resolve the pending selection by 1-based index into the full list.
    pub fn select_index(&mut self, index: usize) -> Result<String> {
        let pending = self.pending.as_ref().ok_or(Error::NoPendingSelection)?;
        let count = pending.candidates.len();
        if !(1..=count).contains(&index) {
            return Err(Error::InvalidSelection {
                key: index.to_string(),
                count,
            });
        }
        self.choose(index)
    }

    /// Drop the pending selection. Returns whether there was one.
    pub fn cancel(&mut self) -> bool {
        let had = self.pending.take().is_some();
        if had {
            tracing::debug!("selection cancelled");
        }
        had
    }

    pub fn pending(&self) -> Option<&[String]> {
        self.pending.as_ref().map(|p| p.candidates.as_slice())
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn target(&self) -> &C {
        &self.target
    }

    fn choose(&mut self, index: usize) -> Result<String> {
        let Some(Pending { query, candidates }) = self.pending.take() else {
            return Err(Error::NoPendingSelection);
        };
        let formula = candidates
            .into_iter()
            .nth(index - 1)
            .ok_or(Error::NoPendingSelection)?;
        self.copy(&query, formula)
    }

    fn copy(&mut self, query: &str, formula: String) -> Result<String> {
        if let Err(source) = self.target.copy(&formula) {
            tracing::warn!(%formula, error = %source, "copy failed, not recorded");
            return Err(Error::NotCopied { formula, source });
        }
        tracing::info!(query, %formula, "copied");
        self.history.record(query, formula.clone());
        Ok(formula)
    }
}
