// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command classifier: decides how a command line is executed.

use lsh_core::ExclusionSet;

use crate::command::CommandLine;

/// How a command line is run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    /// Child owns the user's terminal; nothing is captured.
    Direct,
    /// Child runs on a pseudo-terminal; output is forwarded and captured.
    Captured,
}

impl std::fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ExecutionMode::Direct => "direct",
            ExecutionMode::Captured => "captured",
        })
    }
}

/// Classify a command line by its first word.
///
/// Returns `None` for blank input, which the pipeline treats as a no-op.
/// Full-screen and interactive programs listed in `exclusions` run Direct;
/// everything else runs Captured.
pub fn classify(exclusions: &ExclusionSet, line: &CommandLine) -> Option<ExecutionMode> {
    let program = line.program()?;
    if exclusions.contains(program) {
        Some(ExecutionMode::Direct)
    } else {
        Some(ExecutionMode::Captured)
    }
}

#[cfg(test)]
#[path = "classifier_tests.rs"]
mod tests;
