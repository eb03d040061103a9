// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! lsh-shell: command-line parsing, classification, and execution.
//!
//! A submitted line is split into words by [`Lexer`], wrapped in a
//! [`CommandLine`], routed by [`classify`] and finally run by a
//! [`CommandRunner`]: either directly on the user's terminal or inside a
//! pseudo-terminal whose output is both forwarded live and captured.

pub mod classifier;
pub mod command;
mod error;
pub mod exec;
pub mod lexer;
mod span;
mod token;

pub use classifier::{classify, ExecutionMode};
pub use command::CommandLine;
pub use error::LexerError;
pub use exec::{CommandRunner, ExecError, OutputSink, ShellRunner, StdoutSink};
pub use lexer::Lexer;
pub use span::{diagnostic, Span};
pub use token::Token;

#[cfg(any(test, feature = "test-support"))]
pub use exec::fake::{FakeRunner, RunCall, SharedBuffer};
