//! Bounded in-memory history of copied formulas, most recent first.

use std::collections::VecDeque;

/// Default number of entries kept.
pub const DEFAULT_HISTORY_LIMIT: usize = 5;

/// One successful copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// What the user typed.
    pub query: String,
    /// The formatted formula that was copied.
    pub formula: String,
}

#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    limit: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::with_limit(DEFAULT_HISTORY_LIMIT)
    }
}

impl History {
    pub fn with_limit(limit: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(limit),
            limit,
        }
    }

    /// Prepend an entry, evicting the oldest one past the limit.
    pub fn record(&mut self, query: impl Into<String>, formula: impl Into<String>) {
        self.entries.push_front(HistoryEntry {
            query: query.into(),
            formula: formula.into(),
        });
        self.entries.truncate(self.limit);
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newest_first() {
        let mut h = History::default();
        h.record("h2o", "H₂O");
        h.record("co", "Co");
        let formulas: Vec<_> = h.iter().map(|e| e.formula.as_str()).collect();
        assert_eq!(formulas, vec!["Co", "H₂O"]);
        assert_eq!(h.latest().unwrap().query, "co");
    }

    #[test]
    fn test_cap_evicts_oldest() {
        let mut h = History::default();
        for i in 0..7 {
            h.record(format!("q{}", i), format!("F{}", i));
        }
        assert_eq!(h.len(), DEFAULT_HISTORY_LIMIT);
        let queries: Vec<_> = h.iter().map(|e| e.query.clone()).collect();
        assert_eq!(queries, vec!["q6", "q5", "q4", "q3", "q2"]);
    }

    #[test]
    fn test_zero_limit_keeps_nothing() {
        let mut h = History::with_limit(0);
        h.record("x", "X");
        assert!(h.is_empty());
    }
}
