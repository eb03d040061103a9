// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Line input read on demand by a dedicated thread.
//!
//! The thread only reads when a line is requested, so between prompts a
//! Direct-mode child is the sole reader of the terminal.

use std::io::BufRead;
use std::sync::mpsc;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::oneshot;

type Reply = std::io::Result<Option<String>>;

/// Result of asking for one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    /// A line without its terminator.
    Line(String),
    /// Input is exhausted.
    Eof,
    /// The user pressed the interrupt key while the line was pending.
    Interrupted,
}

/// Handle to the input thread. Clones share the thread.
#[derive(Clone)]
pub struct LineReader {
    requests: mpsc::Sender<oneshot::Sender<Reply>>,
    /// A request still outstanding after an interrupt; the next read
    /// picks up its answer instead of queueing another.
    pending: Arc<Mutex<Option<oneshot::Receiver<Reply>>>>,
}

impl LineReader {
    /// Read from the process's stdin.
    pub fn stdin() -> Self {
        Self::spawn_with(|| std::io::stdin().lock())
    }

    /// Read from any buffered source on a new thread.
    pub fn spawn<R: BufRead + Send + 'static>(input: R) -> Self {
        Self::spawn_with(move || input)
    }

    fn spawn_with<R, F>(open: F) -> Self
    where
        R: BufRead,
        F: FnOnce() -> R + Send + 'static,
    {
        let (requests, incoming) = mpsc::channel::<oneshot::Sender<Reply>>();
        std::thread::spawn(move || {
            let mut input = open();
            for reply in incoming {
                let mut line = String::new();
                let result = match input.read_line(&mut line) {
                    Ok(0) => Ok(None),
                    Ok(_) => Ok(Some(line)),
                    Err(e) => Err(e),
                };
                if reply.send(result).is_err() {
                    tracing::debug!("line reader: requester went away");
                }
            }
        });
        Self { requests, pending: Arc::new(Mutex::new(None)) }
    }

    /// Wait for the next line, or an interrupt.
    pub async fn read_line(&self) -> ReadOutcome {
        let pending = self.pending.lock().take();
        let mut receiver = match pending {
            Some(receiver) => receiver,
            None => {
                let (reply, receiver) = oneshot::channel();
                if self.requests.send(reply).is_err() {
                    return ReadOutcome::Eof;
                }
                receiver
            }
        };

        tokio::select! {
            reply = &mut receiver => settle(reply),
            signal = tokio::signal::ctrl_c() => match signal {
                Ok(()) => {
                    *self.pending.lock() = Some(receiver);
                    ReadOutcome::Interrupted
                }
                Err(e) => {
                    tracing::warn!(error = %e, "cannot listen for interrupts");
                    settle(receiver.await)
                }
            },
        }
    }
}

impl std::fmt::Debug for LineReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineReader").finish_non_exhaustive()
    }
}

fn settle(reply: Result<Reply, oneshot::error::RecvError>) -> ReadOutcome {
    match reply {
        Ok(Ok(Some(line))) => ReadOutcome::Line(strip_terminator(line)),
        Ok(Ok(None)) => ReadOutcome::Eof,
        Ok(Err(e)) => {
            tracing::warn!(error = %e, "failed to read input");
            ReadOutcome::Eof
        }
        Err(_) => ReadOutcome::Eof,
    }
}

fn strip_terminator(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
