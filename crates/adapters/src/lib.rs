// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! lsh-adapters: the outside world behind the engine's seams.
//!
//! - [`OllamaClient`]: model queries over Ollama's HTTP API
//! - [`LineReader`]: on-demand line input from the terminal
//! - [`TerminalConfirm`]: the yes/no prompt before a fix runs

pub mod confirm;
pub mod input;
pub mod ollama;

pub use confirm::TerminalConfirm;
pub use input::{LineReader, ReadOutcome};
pub use ollama::{OllamaClient, PROBE_PROMPT};
