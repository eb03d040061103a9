// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use clap::builder::styling::{Ansi256Color, Color, Style, Styles};
use std::io::IsTerminal;

pub mod codes {
    /// Help section headers: pastel cyan / steel blue
    pub const HEADER: u8 = 74;
    /// Flags and literals: light grey
    pub const LITERAL: u8 = 250;
    /// Value placeholders: medium grey
    pub const CONTEXT: u8 = 245;

    /// Bold green: the `lsh` prompt label
    pub const PROMPT: &str = "1;32";
    /// Bold blue: working directory in the prompt
    pub const CWD: &str = "1;34";
    /// Bold yellow: suggested fixes
    pub const SUGGESTION: &str = "1;33";
    /// Bold magenta: agent mode announcements
    pub const AGENT: &str = "1;35";
}

/// Determine if color output should be enabled.
///
/// Priority: `NO_COLOR=1` disables → `COLOR=1` forces → TTY check.
pub fn should_colorize() -> bool {
    if std::env::var("NO_COLOR").is_ok_and(|v| v == "1") {
        return false;
    }
    if std::env::var("COLOR").is_ok_and(|v| v == "1") {
        return true;
    }
    std::io::stdout().is_terminal()
}

/// Build clap `Styles` using the project palette.
pub fn styles() -> Styles {
    if !should_colorize() {
        return Styles::plain();
    }
    Styles::styled()
        .header(Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(codes::HEADER)))))
        .literal(Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(codes::LITERAL)))))
        .placeholder(Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(codes::CONTEXT)))))
}

const RESET: &str = "\x1b[0m";

/// Wrap `text` in the SGR sequence `sgr` when `enabled`.
pub fn paint(enabled: bool, sgr: &str, text: &str) -> String {
    if enabled {
        format!("\x1b[{sgr}m{text}{RESET}")
    } else {
        text.to_string()
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
