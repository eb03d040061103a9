// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers: an isolated `lsh` invocation and output assertions.

use std::path::Path;
use std::process::Output;
use std::time::Duration;

use tempfile::TempDir;

pub use similar_asserts::assert_eq;

const TIMEOUT: Duration = Duration::from_secs(30);

/// `lsh` with its own state directory, no config file, no colour and no
/// model overrides inherited from the caller's environment.
pub fn cli() -> Cli {
    Cli::new()
}

pub struct Cli {
    cmd: assert_cmd::Command,
    state: TempDir,
}

impl Cli {
    fn new() -> Self {
        let state = tempfile::tempdir().unwrap();
        let mut cmd = assert_cmd::Command::cargo_bin("lsh").unwrap();
        cmd.env("NO_COLOR", "1")
            .env("LSH_STATE_DIR", state.path())
            .env("LSH_CONFIG", state.path().join("config.toml"))
            .env_remove("COLOR")
            .env_remove("LSH_MODEL")
            .env_remove("LSH_OLLAMA_HOST")
            .env_remove("OLLAMA_HOST")
            .env_remove("LSH_LOG")
            .timeout(TIMEOUT);
        Self { cmd, state }
    }

    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: impl AsRef<std::ffi::OsStr>) -> Self {
        self.cmd.env(key, value);
        self
    }

    /// Lines typed at the prompt.
    pub fn stdin(mut self, input: &str) -> Self {
        self.cmd.write_stdin(input.to_string());
        self
    }

    /// Write the config file `lsh` will load.
    pub fn config(self, content: &str) -> Self {
        std::fs::write(self.state.path().join("config.toml"), content).unwrap();
        self
    }

    pub fn passes(mut self) -> RunAssert {
        let output = self.cmd.output().unwrap();
        let run = RunAssert { output, state: self.state };
        assert!(run.output.status.success(), "expected success\n{}", run.describe());
        run
    }

    pub fn fails(mut self) -> RunAssert {
        let output = self.cmd.output().unwrap();
        let run = RunAssert { output, state: self.state };
        assert!(!run.output.status.success(), "expected failure\n{}", run.describe());
        run
    }
}

pub struct RunAssert {
    output: Output,
    state: TempDir,
}

impl RunAssert {
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    pub fn code(&self) -> Option<i32> {
        self.output.status.code()
    }

    pub fn state_dir(&self) -> &Path {
        self.state.path()
    }

    pub fn stdout_has(self, expected: &str) -> Self {
        assert!(self.stdout().contains(expected), "stdout lacks {expected:?}\n{}", self.describe());
        self
    }

    pub fn stdout_lacks(self, unexpected: &str) -> Self {
        assert!(!self.stdout().contains(unexpected), "stdout has {unexpected:?}\n{}", self.describe());
        self
    }

    pub fn stderr_has(self, expected: &str) -> Self {
        assert!(self.stderr().contains(expected), "stderr lacks {expected:?}\n{}", self.describe());
        self
    }

    fn describe(&self) -> String {
        format!(
            "status: {:?}\n--- stdout ---\n{}\n--- stderr ---\n{}",
            self.output.status,
            self.stdout(),
            self.stderr()
        )
    }
}
