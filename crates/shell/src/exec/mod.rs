// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command execution: direct on the user's terminal, or captured through a
//! pseudo-terminal.
//!
//! [`ShellRunner`] is the production [`CommandRunner`]. Both paths share the
//! same process-group semantics: children stay in the session's foreground
//! group, so a terminal interrupt reaches them directly while lsh keeps
//! running.

mod captured;
mod direct;
mod error;
mod pty;
mod terminal;

#[cfg(any(test, feature = "test-support"))]
pub mod fake;

use std::io::Write;
use std::sync::Arc;

use async_trait::async_trait;
use lsh_core::{CaptureConfig, ExecutionResult, ExitStatus};
use tokio::process::Child;

use crate::command::CommandLine;

pub use error::{spawn_error_status, ExecError};
pub use terminal::TerminalGuard;

/// Runs classified command lines.
///
/// The seam between the pipeline and the operating system; the engine only
/// ever talks to this trait.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run with the session's own standard streams. Never fails: launch
    /// problems are reported through the exit status.
    async fn run_direct(&self, line: &CommandLine) -> ExecutionResult;

    /// Run inside a fresh pseudo-terminal, forwarding output live and
    /// returning it as a transcript.
    async fn run_captured(&self, line: &CommandLine) -> Result<ExecutionResult, ExecError>;
}

/// Destination for live output of captured commands.
pub trait OutputSink: Send + Sync + 'static {
    /// A writer for one command's output. Called once per captured run.
    fn writer(&self) -> Box<dyn Write + Send>;
}

/// Forwards captured output to the process's stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn writer(&self) -> Box<dyn Write + Send> {
        Box::new(std::io::stdout())
    }
}

/// Production runner backed by real processes.
#[derive(Clone)]
pub struct ShellRunner {
    capture: CaptureConfig,
    sink: Arc<dyn OutputSink>,
}

impl ShellRunner {
    pub fn new(capture: CaptureConfig) -> Self {
        Self { capture, sink: Arc::new(StdoutSink) }
    }

    /// Replace the live output destination of captured runs.
    pub fn with_sink(mut self, sink: impl OutputSink) -> Self {
        self.sink = Arc::new(sink);
        self
    }
}

impl std::fmt::Debug for ShellRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShellRunner").field("capture", &self.capture).finish_non_exhaustive()
    }
}

#[async_trait]
impl CommandRunner for ShellRunner {
    async fn run_direct(&self, line: &CommandLine) -> ExecutionResult {
        direct::run(line).await
    }

    async fn run_captured(&self, line: &CommandLine) -> Result<ExecutionResult, ExecError> {
        captured::run(&self.capture, self.sink.as_ref(), line).await
    }
}

/// Wait for a foreground child, outliving terminal interrupts.
///
/// The interrupt is delivered by the terminal to the whole foreground group;
/// the child decides what to do with it and lsh only has to not die.
pub(crate) async fn wait_foreground(
    child: &mut Child,
    command: &str,
) -> Result<ExitStatus, ExecError> {
    let wait_error = |source: std::io::Error| ExecError::Wait { command: command.to_string(), source };
    loop {
        tokio::select! {
            status = child.wait() => {
                return status.map(ExitStatus::from).map_err(wait_error);
            }
            signal = tokio::signal::ctrl_c() => match signal {
                Ok(()) => tracing::info!(command, "interrupt delivered to foreground child"),
                Err(e) => {
                    tracing::warn!(error = %e, "cannot listen for interrupts");
                    return child.wait().await.map(ExitStatus::from).map_err(wait_error);
                }
            },
        }
    }
}

#[cfg(test)]
pub(crate) mod test_helpers {
    /// Number of open descriptors in this process.
    pub fn open_fd_count() -> usize {
        std::fs::read_dir("/proc/self/fd").map(|dir| dir.count()).unwrap_or(0)
    }
}
