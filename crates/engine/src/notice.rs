// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-facing progress of the pipeline.

use std::fmt;

/// Something the user should see while a command is run or recovered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// A fix is being requested from the named model.
    Analyzing { model: String },
    /// The model proposed a command.
    Suggested { command: String },
    /// Agent mode runs the suggestion without asking.
    AgentExecuting,
    /// The model answer held no usable command.
    NoSuggestion,
    /// The user interrupted the model query.
    Interrupted,
    /// The model could not be queried.
    QueryFailed { error: String },
    /// The command could not be started at all.
    ExecFailed { command: String, error: String },
    /// Recovery stopped after `max_depth` cycles for one command.
    DepthLimit { max_depth: u32 },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Analyzing { model } => write!(f, "Analyzing failure with {model}..."),
            Notice::Suggested { command } => write!(f, "Suggested Fix: {command}"),
            Notice::AgentExecuting => f.write_str("Agent Mode: executing fix..."),
            Notice::Interrupted => f.write_str("^C"),
            Notice::NoSuggestion => f.write_str("lsh: no command found in the model's answer"),
            Notice::QueryFailed { error } => write!(f, "lsh: model query failed: {error}"),
            Notice::ExecFailed { command, error } => write!(f, "lsh: {command}: {error}"),
            Notice::DepthLimit { max_depth } => write!(
                f,
                "lsh: recovery limit reached ({max_depth} attempt{}); not analyzing further",
                if *max_depth == 1 { "" } else { "s" }
            ),
        }
    }
}

/// Presents notices to the user.
pub trait Reporter: Send + Sync {
    fn report(&self, notice: &Notice);
}

#[cfg(test)]
#[path = "notice_tests.rs"]
mod tests;
