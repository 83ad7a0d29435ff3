//! Environment-driven configuration.

use std::path::PathBuf;

use anyhow::{Context, Result};
use lingo_core::progress::DEFAULT_HISTORY_LIMIT;

pub const DEFAULT_DATA_DIR: &str = ".lingo";
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Settings read from `LINGO_*` variables (and `.env`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory holding the progress store.
    pub data_dir: PathBuf,
    /// Maximum retained results, 0 for unbounded.
    pub history_limit: usize,
    /// Extra spelling clusters merged onto the built-in table.
    pub variants_file: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            history_limit: DEFAULT_HISTORY_LIMIT,
            variants_file: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let history_limit = match get("LINGO_HISTORY_LIMIT") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("LINGO_HISTORY_LIMIT must be a whole number, got '{raw}'"))?,
            None => defaults.history_limit,
        };

        Ok(Self {
            data_dir: get("LINGO_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            history_limit,
            variants_file: get("LINGO_VARIANTS_FILE").map(PathBuf::from),
            log_filter: get("RUST_LOG").unwrap_or(defaults.log_filter),
        })
    }
}
