// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Banner, prompt and the commands the session handles itself.

use crate::prelude::*;
use crate::prelude::assert_eq;

#[test]
fn banner_and_plain_prompt() {
    cli()
        .args(&["--no-probe"])
        .stdin("exit\n")
        .passes()
        .stdout_has("Welcome to LSH (LLM Shell). Type 'exit' or 'quit' to quit.\n\nlsh:")
        .stdout_lacks("\x1b[");
}

#[test]
fn forced_colour_paints_prompt() {
    cli()
        .env("NO_COLOR", "0")
        .env("COLOR", "1")
        .args(&["--no-probe"])
        .stdin("exit\n")
        .passes()
        .stdout_has("\x1b[1;32mlsh\x1b[0m:\x1b[1;34m");
}

#[test]
fn exit_says_goodbye() {
    let run = cli().args(&["--no-probe"]).stdin("exit\n").passes().stdout_has("$ Goodbye!\n");
    assert_eq!(run.code(), Some(0));
}

#[test]
fn quit_says_goodbye() {
    cli().args(&["--no-probe"]).stdin("quit\n").passes().stdout_has("Goodbye!");
}

#[test]
fn end_of_input_says_goodbye() {
    cli().args(&["--no-probe"]).stdin("").passes().stdout_has("\nGoodbye!\n");
}

#[test]
fn cd_changes_prompt_and_later_commands() {
    cli()
        .args(&["--no-probe"])
        .stdin("cd /\npwd\nexit\n")
        .passes()
        .stdout_has("lsh:/$ ")
        .stdout_has("/\r\n");
}

#[test]
fn cd_without_argument_goes_home() {
    let home = tempfile::tempdir().unwrap();
    let home_path = home.path().canonicalize().unwrap();
    cli()
        .env("HOME", &home_path)
        .args(&["--no-probe"])
        .stdin("cd\nexit\n")
        .passes()
        .stdout_has(&format!("lsh:{}$ ", home_path.display()));
}

#[test]
fn cd_failure_is_reported() {
    cli()
        .args(&["--no-probe"])
        .stdin("cd /no/such/lsh/dir\nexit\n")
        .passes()
        .stdout_has("cd: /no/such/lsh/dir: ")
        .stdout_has("Goodbye!");
}
