// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Recovery Coordinator: one cycle from a failed captured run to either a
//! command to re-run or nothing.
//!
//! ```text
//! Analyzing ──query ok, command found──▶ Proposed ──agent mode──▶ Executing
//!     │                                     │
//!     └──failed / interrupted / no command──▶ Idle
//!                                           └──▶ Confirming ──yes──▶ Executing
//!                                                    └──no──▶ Idle
//! ```

use lsh_core::{CapturedFailure, Transcript};
use lsh_shell::CommandRunner;

use crate::confirm::Confirm;
use crate::extract::{extract_command, Extraction};
use crate::model::{FixRequest, ModelQuery};
use crate::notice::{Notice, Reporter};
use crate::pipeline::Engine;

/// Question asked before a suggested fix runs.
pub const CONFIRM_PROMPT: &str = "Run this command? [y/N] ";

/// A command proposed by the model for a failed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecoverySuggestion {
    pub command: String,
    /// Output of the failed run the model was shown.
    pub transcript: Transcript,
    /// Recovery cycle (1-based) within the user's command that produced it.
    pub cycle: u32,
}

/// States of one recovery cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecoveryState {
    Idle,
    Analyzing(FixRequest),
    Proposed(RecoverySuggestion),
    Confirming(RecoverySuggestion),
    Executing(RecoverySuggestion),
}

impl RecoveryState {
    pub fn name(&self) -> &'static str {
        match self {
            RecoveryState::Idle => "idle",
            RecoveryState::Analyzing(_) => "analyzing",
            RecoveryState::Proposed(_) => "proposed",
            RecoveryState::Confirming(_) => "confirming",
            RecoveryState::Executing(_) => "executing",
        }
    }
}

impl<R, M, C, P> Engine<R, M, C, P>
where
    R: CommandRunner,
    M: ModelQuery,
    C: Confirm,
    P: Reporter,
{
    /// Drive one recovery cycle for `command`, which failed with `failure`.
    ///
    /// Returns the suggestion to execute, or `None` when the cycle ends in
    /// Idle.
    pub(crate) async fn recover(
        &self,
        command: &str,
        failure: CapturedFailure,
        cycle: u32,
    ) -> Option<RecoverySuggestion> {
        let request = FixRequest::new(command, failure, self.settings.recovery.transcript_tail);
        let mut state = RecoveryState::Analyzing(request);

        loop {
            tracing::debug!(state = state.name(), cycle, "recovery");
            state = match state {
                RecoveryState::Idle => return None,
                RecoveryState::Executing(suggestion) => return Some(suggestion),
                RecoveryState::Analyzing(request) => self.analyze(&request, cycle).await,
                RecoveryState::Proposed(suggestion) => {
                    self.deps
                        .reporter
                        .report(&Notice::Suggested { command: suggestion.command.clone() });
                    if self.settings.agent_mode {
                        self.deps.reporter.report(&Notice::AgentExecuting);
                        RecoveryState::Executing(suggestion)
                    } else {
                        RecoveryState::Confirming(suggestion)
                    }
                }
                RecoveryState::Confirming(suggestion) => {
                    if self.deps.confirm.confirm(CONFIRM_PROMPT).await {
                        RecoveryState::Executing(suggestion)
                    } else {
                        tracing::info!(command = %suggestion.command, "suggestion declined");
                        RecoveryState::Idle
                    }
                }
            };
        }
    }

    async fn analyze(&self, request: &FixRequest, cycle: u32) -> RecoveryState {
        let model = self.deps.model.model_name().to_string();
        self.deps.reporter.report(&Notice::Analyzing { model: model.clone() });

        let answer = tokio::select! {
            biased;
            answer = self.deps.model.query(request) => answer,
            () = self.interrupt.interrupted() => {
                tracing::info!(%model, "analysis interrupted");
                self.deps.reporter.report(&Notice::Interrupted);
                return RecoveryState::Idle;
            }
        };
        let response = match answer {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(%model, error = %e, "model query failed");
                self.deps.reporter.report(&Notice::QueryFailed { error: e.to_string() });
                return RecoveryState::Idle;
            }
        };

        match extract_command(&response) {
            Extraction::Command(command) => {
                tracing::info!(failed = %request.command, suggested = %command, "fix proposed");
                RecoveryState::Proposed(RecoverySuggestion {
                    command,
                    transcript: request.transcript.clone(),
                    cycle,
                })
            }
            Extraction::NoCommand => {
                tracing::info!(response_len = response.len(), "no command in model answer");
                self.deps.reporter.report(&Notice::NoSuggestion);
                RecoveryState::Idle
            }
        }
    }
}

#[cfg(test)]
#[path = "recovery_tests.rs"]
mod tests;
