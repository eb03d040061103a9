// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The unit of work handed to the execution pipeline.

use crate::lexer::Lexer;

/// One submitted instruction: the verbatim text plus its words.
///
/// Immutable once parsed. The raw text is what the capture shell runs and
/// what the model sees; the words decide the execution mode and are the
/// argv for Direct-mode runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    raw: String,
    tokens: Vec<String>,
}

impl CommandLine {
    /// Parse a line. Never fails: input the lexer rejects (typically an
    /// unbalanced apostrophe in natural language) is split on whitespace.
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let tokens = match Lexer::tokenize(&raw) {
            Ok(tokens) => tokens.into_iter().map(|t| t.text).collect(),
            Err(e) => {
                tracing::debug!(
                    error = %e,
                    at = %e.diagnostic(&raw),
                    "falling back to whitespace splitting"
                );
                raw.split_whitespace().map(String::from).collect()
            }
        };
        Self { raw, tokens }
    }

    /// The text exactly as submitted.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// First word, the executable name.
    pub fn program(&self) -> Option<&str> {
        self.tokens.first().map(String::as_str)
    }

    pub fn args(&self) -> &[String] {
        self.tokens.get(1..).unwrap_or(&[])
    }

    /// True for blank input.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl std::fmt::Display for CommandLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
