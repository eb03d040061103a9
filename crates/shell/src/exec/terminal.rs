// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! State of the user's terminal: modes, geometry, and restoration.

use std::os::fd::AsFd;

use nix::pty::Winsize;
use nix::sys::termios::{self, SetArg, Termios};

const DEFAULT_ROWS: u16 = 24;
const DEFAULT_COLS: u16 = 80;

/// Saves the terminal modes of stdin and restores them on drop.
///
/// Held around every child launch so a program that dies in raw mode
/// cannot leave the session's terminal unusable. A no-op when stdin is not
/// a terminal.
#[derive(Debug)]
pub struct TerminalGuard {
    saved: Option<Termios>,
}

impl TerminalGuard {
    pub fn save() -> Self {
        Self { saved: current_modes() }
    }

    /// The saved modes, used to seed a new pseudo-terminal.
    pub fn modes(&self) -> Option<&Termios> {
        self.saved.as_ref()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Some(saved) = &self.saved {
            let stdin = std::io::stdin();
            if let Err(e) = termios::tcsetattr(stdin.as_fd(), SetArg::TCSADRAIN, saved) {
                tracing::warn!(error = %e, "failed to restore terminal modes");
            }
        }
    }
}

/// Terminal modes of stdin, if stdin is a terminal.
pub fn current_modes() -> Option<Termios> {
    let stdin = std::io::stdin();
    termios::tcgetattr(stdin.as_fd()).ok()
}

/// Rows and columns of the controlling terminal.
///
/// Falls back to `LINES`/`COLUMNS`, then to 24x80.
pub fn geometry() -> Winsize {
    let (rows, cols) = crossterm::terminal::size()
        .ok()
        .filter(|(cols, rows)| *cols > 0 && *rows > 0)
        .map(|(cols, rows)| (rows, cols))
        .or_else(lsh_core::env::lines_columns)
        .unwrap_or((DEFAULT_ROWS, DEFAULT_COLS));
    Winsize { ws_row: rows, ws_col: cols, ws_xpixel: 0, ws_ypixel: 0 }
}

#[cfg(test)]
#[path = "terminal_tests.rs"]
mod tests;
