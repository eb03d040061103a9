// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal yes/no prompt for suggested fixes.

use std::io::Write;
use std::sync::Arc;

use async_trait::async_trait;
use lsh_engine::Confirm;
use lsh_shell::{OutputSink, StdoutSink};

use crate::input::{LineReader, ReadOutcome};

/// Asks on the terminal and reads the answer through the shared reader.
#[derive(Clone)]
pub struct TerminalConfirm {
    reader: LineReader,
    output: Arc<dyn OutputSink>,
}

impl TerminalConfirm {
    pub fn new(reader: LineReader) -> Self {
        Self { reader, output: Arc::new(StdoutSink) }
    }

    /// Write the question somewhere other than stdout.
    pub fn with_output(mut self, output: impl OutputSink) -> Self {
        self.output = Arc::new(output);
        self
    }
}

#[async_trait]
impl Confirm for TerminalConfirm {
    async fn confirm(&self, prompt: &str) -> bool {
        let mut out = self.output.writer();
        if let Err(e) = write!(out, "\n{prompt}").and_then(|()| out.flush()) {
            tracing::debug!(error = %e, "failed to show confirmation prompt");
        }
        drop(out);

        match self.reader.read_line().await {
            ReadOutcome::Line(answer) => is_yes(&answer),
            ReadOutcome::Interrupted => {
                echo_interrupt(self.output.as_ref());
                false
            }
            ReadOutcome::Eof => false,
        }
    }
}

fn echo_interrupt(output: &dyn OutputSink) {
    let mut out = output.writer();
    if let Err(e) = writeln!(out, "^C").and_then(|()| out.flush()) {
        tracing::debug!(error = %e, "failed to echo interrupt");
    }
}

/// Only an explicit `y` or `yes` (any case) accepts.
pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
#[path = "confirm_tests.rs"]
mod tests;
