// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Flag parsing and help output.

use crate::prelude::*;
use crate::prelude::assert_eq;

#[test]
fn help_lists_every_flag() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("Usage:")
        .stdout_has("--agent")
        .stdout_has("--llm")
        .stdout_has("--ollama")
        .stdout_has("--exclude")
        .stdout_has("--max-recovery-depth")
        .stdout_has("--no-probe");
}

#[test]
fn version_shows_package_version() {
    cli().args(&["--version"]).passes().stdout_has("lsh 0.2");
}

#[test]
fn unknown_flag_is_rejected() {
    cli().args(&["--turbo"]).fails().stderr_has("--turbo");
}

#[test]
fn non_numeric_depth_is_rejected() {
    let run = cli().args(&["--max-recovery-depth", "deep"]).fails();
    assert_eq!(run.code(), Some(2));
}
