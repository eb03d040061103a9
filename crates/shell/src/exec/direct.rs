// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Direct execution: the child inherits the session's terminal.

use std::time::Instant;

use lsh_core::{ExecutionResult, ExitStatus};
use tracing::Instrument;

use super::error::spawn_error_status;
use super::terminal::TerminalGuard;
use super::wait_foreground;
use crate::command::CommandLine;

/// Run `line` as program plus arguments with inherited standard streams.
pub(super) async fn run(line: &CommandLine) -> ExecutionResult {
    let Some(program) = line.program() else {
        return ExecutionResult::Direct { status: ExitStatus::SUCCESS };
    };

    let span = tracing::info_span!(
        "shell.cmd",
        mode = "direct",
        cmd = %program,
        exit_code = tracing::field::Empty,
        duration_ms = tracing::field::Empty,
    );
    let start = Instant::now();
    let status = launch(program, line.args()).instrument(span.clone()).await;

    span.record("exit_code", status.code());
    span.record("duration_ms", start.elapsed().as_millis() as u64);
    ExecutionResult::Direct { status }
}

async fn launch(program: &str, args: &[String]) -> ExitStatus {
    let _guard = TerminalGuard::save();
    let mut command = tokio::process::Command::new(program);
    command.args(args);

    let mut child = match command.spawn() {
        Ok(child) => child,
        Err(e) => {
            tracing::debug!(error = %e, "direct spawn failed");
            let status = spawn_error_status(&e);
            if status == ExitStatus::NOT_FOUND {
                eprintln!("lsh: command not found: {program}");
            } else {
                eprintln!("lsh: {program}: {e}");
            }
            return status;
        }
    };
    drop(command);

    match wait_foreground(&mut child, program).await {
        Ok(status) => status,
        Err(e) => {
            tracing::warn!(error = %e, "lost track of direct child");
            eprintln!("lsh: {e}");
            ExitStatus::FAILURE
        }
    }
}

#[cfg(test)]
#[path = "direct_tests.rs"]
mod tests;
