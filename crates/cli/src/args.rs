// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line flags and configuration assembly.

use clap::Parser;
use lsh_core::{config::normalize_host, Config, ConfigError, ConfigFile};

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("BUILD_GIT_HASH"), ")");

/// LSH - LLM-powered shell assistant
#[derive(Debug, Default, Parser)]
#[command(name = "lsh", version = VERSION, styles = crate::color::styles())]
pub struct Args {
    /// Run suggested fixes without asking first
    #[arg(long)]
    pub agent: bool,

    /// Ollama model used to analyze failures (default: gemma3n:latest)
    #[arg(long, value_name = "MODEL")]
    pub llm: Option<String>,

    /// Ollama host, as a URL or host:port (default: http://localhost:11434)
    #[arg(long, value_name = "HOST")]
    pub ollama: Option<String>,

    /// Run this program directly on the terminal, never captured (repeatable)
    #[arg(long = "exclude", value_name = "NAME")]
    pub exclude: Vec<String>,

    /// Recovery cycles allowed for one command; 0 turns recovery off
    #[arg(long, value_name = "N")]
    pub max_recovery_depth: Option<u32>,

    /// Start without checking that the model answers
    #[arg(long)]
    pub no_probe: bool,
}

impl Args {
    /// Overlay the flags; they take precedence over every other source.
    pub fn apply(&self, config: &mut Config) {
        if self.agent {
            config.agent_mode = true;
        }
        if let Some(model) = &self.llm {
            config.model.name = model.clone();
        }
        if let Some(host) = &self.ollama {
            config.model.host = normalize_host(host);
        }
        for name in &self.exclude {
            config.exclusions.insert(name.clone());
        }
        if let Some(depth) = self.max_recovery_depth {
            config.recovery.max_depth = depth;
        }
    }
}

/// Defaults, then the config file, then the environment, then `args`.
pub fn load_config(args: &Args) -> Result<Config, ConfigError> {
    let mut config = Config::default();
    if let Some(path) = lsh_core::env::config_path() {
        config.apply_file(ConfigFile::load(&path)?);
    }
    config.apply_env();
    args.apply(&mut config);
    Ok(config)
}

#[cfg(test)]
#[path = "args_tests.rs"]
mod tests;
