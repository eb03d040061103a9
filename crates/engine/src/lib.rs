// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! lsh-engine: the command pipeline and the Recovery Coordinator.
//!
//! [`Engine::run`] is the single entry point used by the session loop. It
//! classifies a command line, runs it, and when a captured run fails asks
//! the model for a fix, confirms it and feeds the fix back through the
//! same pipeline.

pub mod confirm;
pub mod extract;
pub mod interrupt;
pub mod model;
pub mod notice;
mod pipeline;
pub mod prompt;
pub mod recovery;

#[cfg(any(test, feature = "test-support"))]
pub mod fake;

pub use confirm::Confirm;
pub use extract::{extract_command, Extraction};
pub use interrupt::{CtrlC, Interrupt};
pub use model::{FixRequest, ModelQuery, QueryError};
pub use notice::{Notice, Reporter};
pub use pipeline::{Engine, EngineDeps, EngineSettings};
pub use recovery::{RecoveryState, RecoverySuggestion};

#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeConfirm, FakeInterrupt, FakeModel, RecordingReporter};
