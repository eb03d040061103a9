// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Captured execution: run through a pseudo-terminal, forward output live
//! and keep an exact copy.
//!
//! Two tasks cooperate for one command. The child runs on the
//! terminal-facing side of a fresh PTY while a blocking forwarder copies
//! every chunk from the controller to the output sink and into the
//! transcript. The transcript has one writer (the forwarder) and is only
//! read after the forwarder has returned it.

use std::fs::File;
use std::io::{ErrorKind, Read, Write};
use std::os::fd::{AsFd, OwnedFd};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use lsh_core::{CaptureConfig, ExecutionResult, Transcript};
use nix::errno::Errno;
use nix::poll::{poll, PollFd, PollFlags, PollTimeout};
use tracing::Instrument;

use super::error::{spawn_error_status, ExecError};
use super::pty::PtyPair;
use super::terminal::{geometry, TerminalGuard};
use super::{wait_foreground, OutputSink};
use crate::command::CommandLine;

const CHUNK_SIZE: usize = 4096;
const POLL_INTERVAL_MS: u16 = 100;
const DEFAULT_TERM: &str = "xterm-256color";

/// Run `line` through `<shell> -c <raw>` on a new pseudo-terminal.
pub(super) async fn run(
    capture: &CaptureConfig,
    sink: &dyn OutputSink,
    line: &CommandLine,
) -> Result<ExecutionResult, ExecError> {
    let span = tracing::info_span!(
        "shell.cmd",
        mode = "captured",
        cmd = %line.raw(),
        exit_code = tracing::field::Empty,
        transcript_bytes = tracing::field::Empty,
        duration_ms = tracing::field::Empty,
    );
    let start = Instant::now();
    let result = execute(capture, sink, line.raw()).instrument(span.clone()).await;

    if let Ok(ExecutionResult::Captured { status, transcript }) = &result {
        span.record("exit_code", status.code());
        span.record("transcript_bytes", transcript.len() as u64);
    }
    span.record("duration_ms", start.elapsed().as_millis() as u64);
    result
}

async fn execute(
    capture: &CaptureConfig,
    sink: &dyn OutputSink,
    raw: &str,
) -> Result<ExecutionResult, ExecError> {
    let guard = TerminalGuard::save();
    let pty = PtyPair::open(&geometry(), guard.modes())?;
    let (stdin, stdout, stderr) = pty.child_stdio()?;

    let mut command = tokio::process::Command::new(&capture.shell);
    command.arg("-c").arg(raw).stdin(stdin).stdout(stdout).stderr(stderr);
    if !lsh_core::env::has_term() {
        command.env("TERM", DEFAULT_TERM);
    }
    let spawned = command.spawn();
    // Only the child may keep the terminal side open, otherwise the
    // controller never reports end-of-stream.
    drop(command);
    let controller = pty.into_controller();
    let mut writer = sink.writer();

    let mut child = match spawned {
        Ok(child) => child,
        Err(e) => {
            tracing::warn!(error = %e, shell = %capture.shell.display(), "capture shell failed to start");
            let message = format!("lsh: {}: {e}\r\n", capture.shell.display());
            if let Err(write_err) = writer.write_all(message.as_bytes()).and_then(|()| writer.flush()) {
                tracing::debug!(error = %write_err, "output sink rejected diagnostic");
            }
            return Ok(ExecutionResult::Captured {
                status: spawn_error_status(&e),
                transcript: Transcript::from(message.into_bytes()),
            });
        }
    };

    let exited = Arc::new(AtomicBool::new(false));
    let forwarder = {
        let exited = Arc::clone(&exited);
        let drain_timeout = capture.drain_timeout;
        tokio::task::spawn_blocking(move || forward(controller, writer, &exited, drain_timeout))
    };

    let status = wait_foreground(&mut child, raw).await;
    exited.store(true, Ordering::Release);
    let transcript = forwarder.await.map_err(|e| ExecError::Forwarder(e.to_string()))?;
    drop(guard);

    Ok(ExecutionResult::Captured { status: status?, transcript })
}

/// Copy the controller side to `sink` until end-of-stream.
///
/// After the child has exited, keeps draining for at most `drain_timeout`:
/// a background grandchild may still hold the terminal side open and keep
/// writing to it.
fn forward(
    controller: OwnedFd,
    mut sink: Box<dyn Write + Send>,
    exited: &AtomicBool,
    drain_timeout: Duration,
) -> Transcript {
    let mut transcript = Transcript::new();
    let mut reader = File::from(controller);
    let mut buf = [0u8; CHUNK_SIZE];
    let mut deadline: Option<Instant> = None;

    loop {
        if exited.load(Ordering::Acquire) {
            let deadline = *deadline.get_or_insert_with(|| Instant::now() + drain_timeout);
            if Instant::now() >= deadline {
                tracing::debug!("stopped forwarding after child exit");
                break;
            }
        }

        match readable(&reader) {
            Ok(true) => {}
            Ok(false) => continue,
            Err(Errno::EINTR) => continue,
            Err(e) => {
                tracing::warn!(error = %e, "poll on pty controller failed");
                break;
            }
        }

        match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => {
                let chunk = &buf[..n];
                if let Err(e) = sink.write_all(chunk).and_then(|()| sink.flush()) {
                    tracing::debug!(error = %e, "output sink write failed");
                }
                transcript.extend(chunk);
            }
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            // Linux reports a closed terminal side as EIO on the controller.
            Err(e) if e.raw_os_error() == Some(Errno::EIO as i32) => break,
            Err(e) => {
                tracing::warn!(error = %e, "read from pty controller failed");
                break;
            }
        }
    }

    transcript
}

/// Wait up to one poll interval for the controller to become readable
/// (or hung up, which a subsequent read reports as end-of-stream).
fn readable(reader: &File) -> Result<bool, Errno> {
    let mut fds = [PollFd::new(reader.as_fd(), PollFlags::POLLIN)];
    let ready = poll(&mut fds, PollTimeout::from(POLL_INTERVAL_MS))?;
    Ok(ready > 0)
}

#[cfg(test)]
#[path = "captured_tests.rs"]
mod tests;
