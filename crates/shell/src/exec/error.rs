// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Execution error types.

use lsh_core::ExitStatus;

/// Errors that abort a single command attempt.
///
/// Command failures (non-zero exits, not-found, signals) are not errors:
/// they are reported through [`ExitStatus`].
#[derive(Debug, thiserror::Error)]
pub enum ExecError {
    /// The OS could not provide a pseudo-terminal pair.
    #[error("failed to allocate pseudo-terminal: {0}")]
    PtyAllocation(#[source] nix::Error),

    /// The terminal-facing side could not be attached to the child.
    #[error("failed to attach pseudo-terminal: {0}")]
    PtyAttach(#[source] std::io::Error),

    /// Waiting on a spawned child failed.
    #[error("failed to wait for `{command}`: {source}")]
    Wait { command: String, source: std::io::Error },

    /// The output forwarding task panicked or was cancelled.
    #[error("output forwarder failed: {0}")]
    Forwarder(String),
}

/// Map a spawn failure to the status a POSIX shell would report.
pub fn spawn_error_status(err: &std::io::Error) -> ExitStatus {
    match err.kind() {
        std::io::ErrorKind::NotFound => ExitStatus::NOT_FOUND,
        std::io::ErrorKind::PermissionDenied => ExitStatus::NOT_EXECUTABLE,
        _ => ExitStatus::FAILURE,
    }
}
