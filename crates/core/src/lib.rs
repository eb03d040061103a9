// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! lsh-core: Shared types for the lsh (LLM shell) command shell

pub mod config;
pub mod env;
pub mod result;

pub use config::{
    CaptureConfig, Config, ConfigError, ConfigFile, ExclusionSet, ModelConfig, RecoveryConfig,
    DEFAULT_EXCLUSIONS,
};
pub use result::{CapturedFailure, ExecutionResult, ExitStatus, Transcript};
