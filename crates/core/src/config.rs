// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process-wide configuration, built once at startup and passed by reference.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

/// Tools that take over the full screen or need raw terminal access.
pub const DEFAULT_EXCLUSIONS: &[&str] = &[
    "vi", "vim", "nvim", "nano", "emacs", "htop", "top", "nvtop", "btop", "k9s", "less", "more",
    "man", "ssh", "tmux", "screen",
];

/// Errors from loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read { path: PathBuf, source: std::io::Error },
    #[error("invalid config file {path}: {source}")]
    Parse { path: PathBuf, source: toml::de::Error },
}

/// Executable names that always run in Direct mode.
///
/// Matching is exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionSet(BTreeSet<String>);

impl ExclusionSet {
    pub fn empty() -> Self {
        Self(BTreeSet::new())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.0.insert(name.into())
    }

    pub fn remove(&mut self, name: &str) -> bool {
        self.0.remove(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for ExclusionSet {
    fn default() -> Self {
        DEFAULT_EXCLUSIONS.iter().copied().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for ExclusionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Model endpoint settings consumed by the model-query adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelConfig {
    pub name: String,
    /// Normalised base URL (scheme included, no trailing slash).
    pub host: String,
    pub request_timeout: Duration,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            name: "gemma3n:latest".to_string(),
            host: "http://localhost:11434".to_string(),
            request_timeout: Duration::from_secs(120),
        }
    }
}

/// Recovery coordinator limits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecoveryConfig {
    /// Maximum recovery cycles for one user-submitted command, counting the
    /// cycle triggered by the command itself.
    pub max_depth: u32,
    /// Characters of transcript (from the end) included in a model prompt.
    pub transcript_tail: usize,
}

impl Default for RecoveryConfig {
    fn default() -> Self {
        Self { max_depth: 2, transcript_tail: 2000 }
    }
}

/// Captured executor settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureConfig {
    /// Shell used to interpret the raw command text (`<shell> -c <raw>`).
    pub shell: PathBuf,
    /// Silence allowed on the terminal after the child exits before the
    /// forwarder stops reading.
    pub drain_timeout: Duration,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self { shell: PathBuf::from("/bin/sh"), drain_timeout: Duration::from_millis(100) }
    }
}

/// Complete runtime configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub exclusions: ExclusionSet,
    /// Run suggested fixes without asking.
    pub agent_mode: bool,
    pub model: ModelConfig,
    pub recovery: RecoveryConfig,
    pub capture: CaptureConfig,
}

/// On-disk configuration file; every key is optional.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub agent: Option<bool>,
    pub model: Option<String>,
    pub host: Option<String>,
    pub request_timeout_secs: Option<u64>,
    pub max_recovery_depth: Option<u32>,
    pub transcript_tail: Option<usize>,
    pub shell: Option<PathBuf>,
    /// Names added to the exclusion set.
    #[serde(default)]
    pub exclude: Vec<String>,
    /// Names removed from the exclusion set (run captured instead).
    #[serde(default)]
    pub capture: Vec<String>,
}

impl ConfigFile {
    /// Load a config file. A missing file yields the empty config.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file");
                return Ok(Self::default());
            }
            Err(source) => return Err(ConfigError::Read { path: path.to_path_buf(), source }),
        };
        toml::from_str(&content).map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
    }
}

impl Config {
    /// Overlay values from a config file.
    pub fn apply_file(&mut self, file: ConfigFile) {
        if let Some(agent) = file.agent {
            self.agent_mode = agent;
        }
        if let Some(model) = file.model {
            self.model.name = model;
        }
        if let Some(host) = file.host {
            self.model.host = normalize_host(&host);
        }
        if let Some(secs) = file.request_timeout_secs {
            self.model.request_timeout = Duration::from_secs(secs);
        }
        if let Some(depth) = file.max_recovery_depth {
            self.recovery.max_depth = depth;
        }
        if let Some(tail) = file.transcript_tail {
            self.recovery.transcript_tail = tail;
        }
        if let Some(shell) = file.shell {
            self.capture.shell = shell;
        }
        for name in file.exclude {
            self.exclusions.insert(name);
        }
        for name in &file.capture {
            self.exclusions.remove(name);
        }
    }

    /// Overlay values from `LSH_*` / `OLLAMA_HOST` environment variables.
    pub fn apply_env(&mut self) {
        if let Some(model) = crate::env::model() {
            self.model.name = model;
        }
        if let Some(host) = crate::env::ollama_host() {
            self.model.host = normalize_host(&host);
        }
    }
}

/// Normalise an Ollama host: strip trailing `/`, default the scheme to `http://`.
///
/// Accepts both `http://host:port` and bare `host:port`.
pub fn normalize_host(host: &str) -> String {
    let host = host.trim().trim_end_matches('/');
    if host.starts_with("http://") || host.starts_with("https://") {
        host.to_string()
    } else {
        format!("http://{}", host)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
