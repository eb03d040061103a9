// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration file handling at startup.

use crate::prelude::*;

#[test]
fn malformed_config_is_fatal() {
    cli()
        .config("max_recovery_depth = [\n")
        .args(&["--no-probe"])
        .stdin("echo never\n")
        .fails()
        .stderr_has("invalid config file")
        .stdout_lacks("Welcome to LSH");
}

#[test]
fn unknown_config_key_is_fatal() {
    cli().config("colour = true\n").args(&["--no-probe"]).fails().stderr_has("colour");
}

#[test]
fn config_exclusions_run_directly() {
    // Direct children inherit stdout, so the output bypasses the terminal
    // capture and arrives without carriage returns.
    cli()
        .config("exclude = [\"printf\"]\n")
        .args(&["--no-probe"])
        .stdin("printf 'plain\\n'\nexit\n")
        .passes()
        .stdout_has("plain\n")
        .stdout_lacks("plain\r\n");
}

#[test]
fn log_file_lands_in_state_dir() {
    let run = cli().env("LSH_LOG", "info").args(&["--no-probe"]).stdin("exit\n").passes();
    let log = std::fs::read_to_string(run.state_dir().join("lsh.log")).unwrap();
    assert!(log.contains("starting"), "{log}");
}
