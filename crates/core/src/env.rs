// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.

use std::path::PathBuf;

/// Resolve config file: LSH_CONFIG > XDG_CONFIG_HOME/lsh/config.toml > ~/.config/lsh/config.toml
pub fn config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("LSH_CONFIG") {
        return Some(PathBuf::from(path));
    }
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(xdg).join("lsh/config.toml"));
    }
    dirs::home_dir().map(|home| home.join(".config/lsh/config.toml"))
}

/// Resolve state directory: LSH_STATE_DIR > XDG_STATE_HOME/lsh > ~/.local/state/lsh
pub fn state_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("LSH_STATE_DIR") {
        return Some(PathBuf::from(dir));
    }
    if let Ok(xdg) = std::env::var("XDG_STATE_HOME") {
        return Some(PathBuf::from(xdg).join("lsh"));
    }
    dirs::home_dir().map(|home| home.join(".local/state/lsh"))
}

/// Model override.
pub fn model() -> Option<String> {
    non_empty("LSH_MODEL")
}

/// Ollama host override: LSH_OLLAMA_HOST > OLLAMA_HOST
pub fn ollama_host() -> Option<String> {
    non_empty("LSH_OLLAMA_HOST").or_else(|| non_empty("OLLAMA_HOST"))
}

/// Log filter directive (default `warn`).
pub fn log_filter() -> String {
    non_empty("LSH_LOG").unwrap_or_else(|| "warn".to_string())
}

/// Terminal geometry fallback from `LINES`/`COLUMNS`.
pub fn lines_columns() -> Option<(u16, u16)> {
    let rows = std::env::var("LINES").ok()?.parse().ok()?;
    let cols = std::env::var("COLUMNS").ok()?.parse().ok()?;
    Some((rows, cols))
}

/// Whether the session exports a terminal type for children to inherit.
pub fn has_term() -> bool {
    non_empty("TERM").is_some()
}

fn non_empty(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|s| !s.is_empty())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
