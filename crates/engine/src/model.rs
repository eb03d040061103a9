// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The model-query seam.

use async_trait::async_trait;
use lsh_core::{CapturedFailure, ExitStatus, Transcript};
use thiserror::Error;

use crate::prompt;

/// Errors from querying a model for a fix
#[derive(Debug, Clone, Error)]
pub enum QueryError {
    #[error("cannot reach model endpoint: {0}")]
    Transport(String),
    #[error("model endpoint returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("malformed model response: {0}")]
    Malformed(String),
}

/// Context handed to the model for one failed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixRequest {
    pub command: String,
    pub status: ExitStatus,
    /// Exactly the bytes forwarded to the terminal during the failed run.
    pub transcript: Transcript,
    /// Characters of the cleaned transcript included in the prompt.
    pub transcript_tail: usize,
}

impl FixRequest {
    pub fn new(command: impl Into<String>, failure: CapturedFailure, transcript_tail: usize) -> Self {
        let status = failure.status();
        Self {
            command: command.into(),
            status,
            transcript: failure.into_transcript(),
            transcript_tail,
        }
    }

    /// The prompt text sent to a completion endpoint.
    pub fn prompt(&self) -> String {
        prompt::render(self)
    }
}

/// Asks a language model how to fix a failed command.
///
/// One call per failure; the engine blocks on it. Timeouts and retries are
/// the implementation's concern.
#[async_trait]
pub trait ModelQuery: Send + Sync {
    /// Name shown to the user while the query runs.
    fn model_name(&self) -> &str;

    /// The model's free-text answer.
    async fn query(&self, request: &FixRequest) -> Result<String, QueryError>;
}
