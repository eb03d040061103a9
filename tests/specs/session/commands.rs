// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Commands run through the captured terminal.

use crate::prelude::*;

#[test]
fn echo_output_reaches_the_user() {
    cli().args(&["--no-probe"]).stdin("echo hi\nexit\n").passes().stdout_has("hi").stdout_has("Goodbye!");
}

#[test]
fn shell_syntax_is_honoured() {
    cli()
        .args(&["--no-probe"])
        .stdin("echo one && echo two | tr a-z A-Z\nexit\n")
        .passes()
        .stdout_has("one\r\n")
        .stdout_has("TWO\r\n");
}

#[test]
fn missing_command_without_recovery() {
    cli()
        .args(&["--no-probe", "--max-recovery-depth", "0"])
        .stdin("lsh-no-such-command\nexit\n")
        .passes()
        .stdout_has("not found")
        .stdout_lacks("Analyzing")
        .stdout_has("Goodbye!");
}

#[test]
fn session_survives_failures() {
    cli()
        .args(&["--no-probe", "--max-recovery-depth", "0"])
        .stdin("false\nexit 3\necho still here\nexit\n")
        .passes()
        .stdout_has("still here");
}

#[test]
fn excluded_program_runs_directly() {
    cli()
        .args(&["--no-probe", "--exclude", "printf"])
        .stdin("printf 'direct\\n'\nexit\n")
        .passes()
        .stdout_has("direct\n")
        .stdout_lacks("direct\r\n");
}

#[test]
fn excluded_program_not_found() {
    cli()
        .args(&["--no-probe", "--exclude", "lsh-no-such-tool"])
        .stdin("lsh-no-such-tool\nexit\n")
        .passes()
        .stderr_has("lsh: command not found: lsh-no-such-tool");
}
