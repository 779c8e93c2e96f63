//! Optional TOML configuration.
//!
//! Looked up at the `--config` path if given, otherwise at
//! `<config dir>/formulate/config.toml` when that file exists. Every key is
//! optional:
//!
//! ```toml
//! history_limit = 5
//! candidate_limit = 512
//! clipboard = true
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::history::DEFAULT_HISTORY_LIMIT;

/// Default cap on candidates built for a single query.
pub const DEFAULT_CANDIDATE_LIMIT: usize = 512;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Number of recent copies kept in memory.
    pub history_limit: usize,
    /// Upper bound on candidates built per query.
    pub candidate_limit: usize,
    /// Copy to the system clipboard; when false formulas are only printed.
    pub clipboard: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT,
            candidate_limit: DEFAULT_CANDIDATE_LIMIT,
            clipboard: true,
        }
    }
}

impl Config {
    /// Load from `path`, or from the default location, or fall back to
    /// defaults. An explicit `path` that cannot be read is an error; a missing
    /// default file is not.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match default_path() {
                Some(p) if p.is_file() => p,
                _ => {
                    tracing::debug!("no config file found, using defaults");
                    return Ok(Self::default());
                }
            },
        };
        let text = fs::read_to_string(&path)?;
        let config = Self::parse(&text, &path)?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// `candidate_limit`, never below one.
    pub fn effective_candidate_limit(&self) -> usize {
        self.candidate_limit.max(1)
    }

    /// Parse config text; `path` is only used in the error.
    pub fn parse(text: &str, path: &Path) -> Result<Self> {
        toml::from_str(text).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// `<config dir>/formulate/config.toml`, if the platform has a config dir.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("formulate").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = Config::default();
        assert_eq!(c.history_limit, 5);
        assert_eq!(c.candidate_limit, 512);
        assert!(c.clipboard);
    }

    #[test]
    fn test_partial_file() {
        let c = Config::parse("clipboard = false\n", Path::new("c.toml")).unwrap();
        assert!(!c.clipboard);
        assert_eq!(c.history_limit, 5);
    }

    #[test]
    fn test_zero_candidate_limit_clamped() {
        let c = Config::parse("candidate_limit = 0\n", Path::new("c.toml")).unwrap();
        assert_eq!(c.effective_candidate_limit(), 1);
        assert_eq!(Config::default().effective_candidate_limit(), 512);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = Config::parse("colour = 1\n", Path::new("c.toml")).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "history_limit = 2\ncandidate_limit = 9\n").unwrap();
        let c = Config::load(Some(path.as_path())).unwrap();
        assert_eq!(c.history_limit, 2);
        assert_eq!(c.candidate_limit, 9);
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(Some(dir.path().join("nope.toml").as_path())).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
