//! Bot configuration.
//!
//! Optional TOML file with fully defaulted fields: a missing file means
//! defaults, a present-but-malformed one is an error. Lookup follows the
//! XDG chain: explicit path, then $XDG_CONFIG_HOME/mimir/config.toml,
//! then $HOME/.config/mimir/config.toml.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::matcher::MatcherConfig;

/// Default knowledge base filename, resolved against the working directory.
pub const DEFAULT_KB_PATH: &str = "knowledge_base.json";

/// Matching thresholds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchingSection {
    /// Minimum similarity score; 0.0 accepts any candidate.
    #[serde(default)]
    pub cutoff: f64,

    /// Candidates considered per query.
    #[serde(default = "default_max_matches")]
    pub max_matches: usize,
}

fn default_max_matches() -> usize {
    3
}

impl Default for MatchingSection {
    fn default() -> Self {
        Self {
            cutoff: 0.0,
            max_matches: default_max_matches(),
        }
    }
}

/// User configuration for mimirctl.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotConfig {
    /// Path to the knowledge base JSON file.
    #[serde(default = "default_kb_path")]
    pub knowledge_base: PathBuf,

    /// Matching thresholds.
    #[serde(default)]
    pub matching: MatchingSection,
}

fn default_kb_path() -> PathBuf {
    PathBuf::from(DEFAULT_KB_PATH)
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            knowledge_base: default_kb_path(),
            matching: MatchingSection::default(),
        }
    }
}

impl BotConfig {
    /// Parse a config file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        toml::from_str(&data).with_context(|| format!("invalid config {}", path.display()))
    }

    /// Load `explicit` if given, else the discovered user config if it
    /// exists, else defaults.
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match Self::discover() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Config file lookup chain.
    fn discover() -> Option<PathBuf> {
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            return Some(PathBuf::from(xdg).join("mimir/config.toml"));
        }
        if let Ok(home) = std::env::var("HOME") {
            return Some(PathBuf::from(home).join(".config/mimir/config.toml"));
        }
        None
    }

    /// Matcher view of this config.
    pub fn matcher_config(&self) -> MatcherConfig {
        MatcherConfig {
            max_matches: self.matching.max_matches,
            cutoff: self.matching.cutoff,
        }
    }
}
