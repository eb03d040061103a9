// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pull the actionable command out of a free-text model answer.

use std::sync::LazyLock;

use regex::Regex;

/// Fenced block: info string on the opening line, body up to the closing fence.
#[allow(clippy::expect_used)]
static FENCED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```[ \t]*([A-Za-z0-9_+.-]*)[^\n]*\n(.*?)```")
        .expect("constant regex pattern is valid")
});

#[allow(clippy::expect_used)]
static INLINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"`([^`\n]+)`").expect("constant regex pattern is valid")
});

/// Info strings accepted on a fenced block.
const SHELL_LANGUAGES: &[&str] = &["", "bash", "sh", "shell", "zsh", "console"];

/// Result of reading a model answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    Command(String),
    NoCommand,
}

/// Extract one command line from `response`.
///
/// Tried in order: the first fenced block tagged as shell (or untagged);
/// the first inline code span; the whole answer when it is a single line.
/// A leading `$ ` prompt marker is dropped from each line.
pub fn extract_command(response: &str) -> Extraction {
    let fenced = FENCED.captures_iter(response).find_map(|caps| {
        let info = caps.get(1).map_or("", |m| m.as_str()).to_ascii_lowercase();
        if !SHELL_LANGUAGES.contains(&info.as_str()) {
            return None;
        }
        caps.get(2).map(|body| clean(body.as_str())).filter(|body| !body.is_empty())
    });
    if let Some(command) = fenced {
        return Extraction::Command(command);
    }

    let inline = INLINE
        .captures_iter(response)
        .filter_map(|caps| caps.get(1).map(|m| clean(m.as_str())))
        .find(|span| !span.is_empty());
    if let Some(command) = inline {
        return Extraction::Command(command);
    }

    let trimmed = response.trim();
    if !trimmed.is_empty() && !trimmed.contains('\n') && !trimmed.contains("```") {
        return Extraction::Command(clean(trimmed));
    }
    Extraction::NoCommand
}

fn clean(text: &str) -> String {
    text.trim()
        .lines()
        .map(|line| line.strip_prefix("$ ").unwrap_or(line))
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

#[cfg(test)]
#[path = "extract_tests.rs"]
mod tests;
