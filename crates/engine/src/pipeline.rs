// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Classify, execute, recover.

use lsh_core::{CapturedFailure, Config, ExclusionSet, RecoveryConfig};
use lsh_shell::{classify, CommandLine, CommandRunner, ExecutionMode};

use crate::confirm::Confirm;
use crate::interrupt::{CtrlC, Interrupt};
use crate::model::ModelQuery;
use crate::notice::{Notice, Reporter};

/// Collaborators the engine drives.
pub struct EngineDeps<R, M, C, P> {
    pub runner: R,
    pub model: M,
    pub confirm: C,
    pub reporter: P,
}

/// Startup configuration the engine reads; immutable afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineSettings {
    pub exclusions: ExclusionSet,
    pub agent_mode: bool,
    pub recovery: RecoveryConfig,
}

impl EngineSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            exclusions: config.exclusions.clone(),
            agent_mode: config.agent_mode,
            recovery: config.recovery.clone(),
        }
    }
}

/// The command pipeline.
pub struct Engine<R, M, C, P> {
    pub(crate) deps: EngineDeps<R, M, C, P>,
    pub(crate) settings: EngineSettings,
    pub(crate) interrupt: Box<dyn Interrupt>,
}

impl<R, M, C, P> Engine<R, M, C, P>
where
    R: CommandRunner,
    M: ModelQuery,
    C: Confirm,
    P: Reporter,
{
    pub fn new(deps: EngineDeps<R, M, C, P>, settings: EngineSettings) -> Self {
        Self { deps, settings, interrupt: Box::new(CtrlC) }
    }

    /// Listen for interrupts somewhere other than Ctrl-C.
    pub fn with_interrupt(mut self, interrupt: impl Interrupt + 'static) -> Self {
        self.interrupt = Box::new(interrupt);
        self
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Run one user-submitted command line to completion.
    ///
    /// Blank input is a no-op. Every failure mode is reported to the user;
    /// nothing propagates to the caller.
    pub async fn run(&self, line: &CommandLine) {
        let max_depth = self.settings.recovery.max_depth;
        let mut line = line.clone();
        let mut cycles = 0;

        loop {
            let Some(failure) = self.execute(&line).await else {
                return;
            };
            if cycles >= max_depth {
                if max_depth > 0 {
                    tracing::info!(cycles, command = %line, "recovery depth cap reached");
                    self.deps.reporter.report(&Notice::DepthLimit { max_depth });
                }
                return;
            }
            cycles += 1;
            match self.recover(line.raw(), failure, cycles).await {
                Some(suggestion) => line = CommandLine::parse(suggestion.command),
                None => return,
            }
        }
    }

    /// Classify and run one line, keeping its outcome only when it is
    /// eligible for recovery.
    async fn execute(&self, line: &CommandLine) -> Option<CapturedFailure> {
        let mode = classify(&self.settings.exclusions, line)?;
        let result = match mode {
            ExecutionMode::Direct => self.deps.runner.run_direct(line).await,
            ExecutionMode::Captured => match self.deps.runner.run_captured(line).await {
                Ok(result) => result,
                Err(e) => {
                    tracing::warn!(command = %line, error = %e, "captured run aborted");
                    self.deps.reporter.report(&Notice::ExecFailed {
                        command: line.program().unwrap_or_default().to_string(),
                        error: e.to_string(),
                    });
                    return None;
                }
            },
        };
        tracing::debug!(%mode, status = %result.status(), command = %line, "command finished");
        result.into_failure()
    }
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
