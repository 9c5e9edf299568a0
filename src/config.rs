use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Runtime configuration, loaded from an optional TOML file.
///
/// Missing keys fall back to the defaults, so an empty or absent file is
/// always valid.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Reserved login name of the Administrator.
    pub admin_name: String,
    /// Default tracing filter, overridable via `RUST_LOG`.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            admin_name: "admin".to_string(),
            log_filter: "crewdesk=info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from `path`, or the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        toml::from_str(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }
}
