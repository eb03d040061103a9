// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Test doubles for the execution seam.

use std::collections::HashMap;
use std::io::Write;
use std::sync::Arc;

use async_trait::async_trait;
use lsh_core::{ExecutionResult, ExitStatus, Transcript};
use parking_lot::Mutex;

use super::{CommandRunner, ExecError, OutputSink};
use crate::classifier::ExecutionMode;
use crate::command::CommandLine;

/// In-memory output sink whose clones share one buffer.
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far.
    pub fn contents(&self) -> Vec<u8> {
        self.bytes.lock().clone()
    }

    pub fn contents_lossy(&self) -> String {
        String::from_utf8_lossy(&self.bytes.lock()).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.bytes.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl OutputSink for SharedBuffer {
    fn writer(&self) -> Box<dyn Write + Send> {
        Box::new(self.clone())
    }
}

/// One command handed to a [`FakeRunner`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunCall {
    pub mode: ExecutionMode,
    pub raw: String,
}

#[derive(Debug, Clone)]
enum Scripted {
    Exit { code: i32, output: Vec<u8> },
    PtyUnavailable,
}

#[derive(Default)]
struct FakeRunnerState {
    scripts: HashMap<String, Scripted>,
    calls: Vec<RunCall>,
}

/// Runner that returns scripted outcomes and records every call.
///
/// Unscripted commands succeed with empty output.
#[derive(Clone, Default)]
pub struct FakeRunner {
    inner: Arc<Mutex<FakeRunnerState>>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the exit code and captured output of a raw command line.
    pub fn script(&self, raw: &str, code: i32, output: &str) -> &Self {
        self.inner
            .lock()
            .scripts
            .insert(raw.to_string(), Scripted::Exit { code, output: output.as_bytes().to_vec() });
        self
    }

    /// Make captured runs of `raw` fail to allocate a pseudo-terminal.
    pub fn script_pty_unavailable(&self, raw: &str) -> &Self {
        self.inner.lock().scripts.insert(raw.to_string(), Scripted::PtyUnavailable);
        self
    }

    /// Every call so far, in order.
    pub fn calls(&self) -> Vec<RunCall> {
        self.inner.lock().calls.clone()
    }

    /// Raw command lines run so far, in order.
    pub fn raw_calls(&self) -> Vec<String> {
        self.inner.lock().calls.iter().map(|c| c.raw.clone()).collect()
    }

    fn record(&self, mode: ExecutionMode, line: &CommandLine) -> Option<Scripted> {
        let mut inner = self.inner.lock();
        inner.calls.push(RunCall { mode, raw: line.raw().to_string() });
        inner.scripts.get(line.raw()).cloned()
    }
}

impl std::fmt::Debug for FakeRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FakeRunner").field("calls", &self.inner.lock().calls.len()).finish()
    }
}

#[async_trait]
impl CommandRunner for FakeRunner {
    async fn run_direct(&self, line: &CommandLine) -> ExecutionResult {
        let status = match self.record(ExecutionMode::Direct, line) {
            Some(Scripted::Exit { code, .. }) => ExitStatus::from_code(code),
            Some(Scripted::PtyUnavailable) | None => ExitStatus::SUCCESS,
        };
        ExecutionResult::Direct { status }
    }

    async fn run_captured(&self, line: &CommandLine) -> Result<ExecutionResult, ExecError> {
        match self.record(ExecutionMode::Captured, line) {
            Some(Scripted::Exit { code, output }) => Ok(ExecutionResult::Captured {
                status: ExitStatus::from_code(code),
                transcript: Transcript::from(output),
            }),
            Some(Scripted::PtyUnavailable) => {
                Err(ExecError::PtyAllocation(nix::errno::Errno::ENOSPC))
            }
            None => Ok(ExecutionResult::Captured {
                status: ExitStatus::SUCCESS,
                transcript: Transcript::new(),
            }),
        }
    }
}
