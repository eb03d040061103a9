// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn parses_quoted_arguments() {
    let line = CommandLine::parse("echo 'a b' c");
    assert_eq!(line.tokens(), ["echo", "a b", "c"]);
    assert_eq!(line.program(), Some("echo"));
    assert_eq!(line.args(), ["a b", "c"]);
}

#[test]
fn raw_text_is_kept_verbatim() {
    let raw = "git  commit -m \"wip\"  ";
    let line = CommandLine::parse(raw);
    assert_eq!(line.raw(), raw);
    assert_eq!(line.to_string(), raw);
}

#[yare::parameterized(
    empty = { "" },
    spaces = { "   " },
    tabs_and_newline = { "\t\n" },
)]
fn blank_input_is_empty(raw: &str) {
    let line = CommandLine::parse(raw);
    assert!(line.is_empty());
    assert_eq!(line.program(), None);
    assert!(line.args().is_empty());
}

#[test]
fn lexer_error_falls_back_to_whitespace_split() {
    let line = CommandLine::parse("how do i list files, i don't remember");
    assert_eq!(line.program(), Some("how"));
    assert_eq!(line.tokens().last().map(String::as_str), Some("remember"));
    assert!(line.tokens().contains(&"don't".to_string()));
}

#[test]
fn empty_quoted_word_is_not_blank() {
    let line = CommandLine::parse("''");
    assert!(!line.is_empty());
    assert_eq!(line.program(), Some(""));
}
