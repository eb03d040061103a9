// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Execution outcomes produced by the executors and consumed by recovery.

use std::fmt;

/// Exit status of a finished command, normalised to shell conventions.
///
/// A child terminated by a signal reports `128 + signal` as its code, the
/// same value `$?` shows in POSIX shells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitStatus {
    code: i32,
    signal: Option<i32>,
}

impl ExitStatus {
    /// Status of a command that completed successfully.
    pub const SUCCESS: ExitStatus = ExitStatus { code: 0, signal: None };
    /// Conventional status for a command that could not be found.
    pub const NOT_FOUND: ExitStatus = ExitStatus { code: 127, signal: None };
    /// Conventional status for a command that was found but is not executable.
    pub const NOT_EXECUTABLE: ExitStatus = ExitStatus { code: 126, signal: None };
    /// Generic failure (spawn errors other than not-found/permission).
    pub const FAILURE: ExitStatus = ExitStatus { code: 1, signal: None };

    pub fn from_code(code: i32) -> Self {
        Self { code, signal: None }
    }

    pub fn from_signal(signal: i32) -> Self {
        Self { code: 128 + signal, signal: Some(signal) }
    }

    pub fn code(&self) -> i32 {
        self.code
    }

    /// The terminating signal, if the child was killed by one.
    pub fn signal(&self) -> Option<i32> {
        self.signal
    }

    pub fn success(&self) -> bool {
        self.code == 0 && self.signal.is_none()
    }
}

impl From<std::process::ExitStatus> for ExitStatus {
    fn from(status: std::process::ExitStatus) -> Self {
        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if let Some(signal) = status.signal() {
                return Self::from_signal(signal);
            }
        }
        Self::from_code(status.code().unwrap_or(-1))
    }
}

impl fmt::Display for ExitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.signal {
            Some(signal) => write!(f, "killed by signal {} (exit code {})", signal, self.code),
            None => write!(f, "exit code {}", self.code),
        }
    }
}

/// The exact ordered bytes emitted during one Captured-mode run.
///
/// Terminal control sequences are kept verbatim; nothing is decoded or
/// trimmed on the way in.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Transcript(Vec<u8>);

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a chunk as read from the terminal.
    pub fn extend(&mut self, chunk: &[u8]) {
        self.0.extend_from_slice(chunk);
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Lossy UTF-8 rendering of the raw bytes.
    pub fn to_string_lossy(&self) -> String {
        String::from_utf8_lossy(&self.0).into_owned()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl From<Vec<u8>> for Transcript {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for Transcript {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl fmt::Debug for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const PREVIEW: usize = 64;
        let text = String::from_utf8_lossy(&self.0);
        let preview: String = text.chars().take(PREVIEW).collect();
        f.debug_struct("Transcript").field("len", &self.0.len()).field("preview", &preview).finish()
    }
}

/// Outcome of running one command line.
///
/// The transcript exists only for Captured-mode runs; Direct-mode runs hand
/// the terminal to the child and keep nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionResult {
    Direct { status: ExitStatus },
    Captured { status: ExitStatus, transcript: Transcript },
}

impl ExecutionResult {
    pub fn status(&self) -> ExitStatus {
        match self {
            ExecutionResult::Direct { status } | ExecutionResult::Captured { status, .. } => *status,
        }
    }

    pub fn transcript(&self) -> Option<&Transcript> {
        match self {
            ExecutionResult::Direct { .. } => None,
            ExecutionResult::Captured { transcript, .. } => Some(transcript),
        }
    }

    pub fn success(&self) -> bool {
        self.status().success()
    }

    /// Consume the result, keeping it only if it is eligible for recovery.
    ///
    /// Successful runs and Direct-mode runs return `None` and their buffers
    /// are dropped here.
    pub fn into_failure(self) -> Option<CapturedFailure> {
        match self {
            ExecutionResult::Captured { status, transcript } if !status.success() => {
                Some(CapturedFailure { status, transcript })
            }
            _ => None,
        }
    }
}

/// A Captured-mode run that exited non-zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedFailure {
    status: ExitStatus,
    transcript: Transcript,
}

impl CapturedFailure {
    pub fn status(&self) -> ExitStatus {
        self.status
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn into_transcript(self) -> Transcript {
        self.transcript
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
