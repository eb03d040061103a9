// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pipeline notices rendered for the terminal.

use std::io::Write;
use std::sync::Arc;

use lsh_engine::{Notice, Reporter};
use lsh_shell::{OutputSink, StdoutSink};

use crate::color::{codes, paint};

pub struct TerminalReporter {
    colorize: bool,
    output: Arc<dyn OutputSink>,
}

impl TerminalReporter {
    pub fn new(colorize: bool) -> Self {
        Self { colorize, output: Arc::new(StdoutSink) }
    }

    #[cfg(test)]
    pub fn with_output(mut self, output: impl OutputSink) -> Self {
        self.output = Arc::new(output);
        self
    }
}

impl Reporter for TerminalReporter {
    fn report(&self, notice: &Notice) {
        let mut out = self.output.writer();
        let text = render(notice, self.colorize);
        if let Err(e) = out.write_all(text.as_bytes()).and_then(|()| out.flush()) {
            tracing::debug!(error = %e, "failed to print notice");
        }
    }
}

/// Text for one notice, newline included.
pub fn render(notice: &Notice, colorize: bool) -> String {
    match notice {
        Notice::Analyzing { .. } => format!("\n{notice}\n"),
        Notice::Suggested { command } => {
            format!("\n{} {command}\n", paint(colorize, codes::SUGGESTION, "Suggested Fix:"))
        }
        Notice::AgentExecuting => format!("{}\n", paint(colorize, codes::AGENT, &notice.to_string())),
        Notice::Interrupted
        | Notice::NoSuggestion
        | Notice::QueryFailed { .. }
        | Notice::ExecFailed { .. }
        | Notice::DepthLimit { .. } => format!("{notice}\n"),
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
