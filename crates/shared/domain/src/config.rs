use crate::constants::{DEFAULT_DECLARATIONS_DIR, DEFAULT_PROVIDER, DEFAULT_REGISTRAR};
use serde::Deserialize;
use std::path::PathBuf;

/// Top-level configuration of a `subreg` run.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SubregConfig {
    pub declarations: DeclarationsConfig,
    pub policy: PolicyConfig,
    pub commit: CommitConfig,
    pub logging: LoggingConfig,
}

/// Where declaration files are discovered.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DeclarationsConfig {
    pub dir: PathBuf,
    pub extension: String,
}

/// Registration policy knobs on top of the built-in rules.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// Extra labels to deny, merged with the built-in denylist.
    pub denylist: Vec<String>,
}

/// Registrar and provider handed to the commit boundary.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CommitConfig {
    pub registrar: String,
    pub provider: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub json: bool,
    pub dir: Option<PathBuf>,
}

// --- Default ---

impl Default for DeclarationsConfig {
    fn default() -> Self {
        Self { dir: PathBuf::from(DEFAULT_DECLARATIONS_DIR), extension: "json".to_owned() }
    }
}

impl Default for CommitConfig {
    fn default() -> Self {
        Self { registrar: DEFAULT_REGISTRAR.to_owned(), provider: DEFAULT_PROVIDER.to_owned() }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), json: false, dir: None }
    }
}
