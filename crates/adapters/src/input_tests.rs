// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::io::Cursor;

fn reader(input: &str) -> LineReader {
    LineReader::spawn(Cursor::new(input.to_string().into_bytes()))
}

#[tokio::test]
async fn lines_arrive_in_order_without_terminators() {
    let reader = reader("echo hi\r\nls -la\nexit");
    assert_eq!(reader.read_line().await, ReadOutcome::Line("echo hi".into()));
    assert_eq!(reader.read_line().await, ReadOutcome::Line("ls -la".into()));
    assert_eq!(reader.read_line().await, ReadOutcome::Line("exit".into()));
    assert_eq!(reader.read_line().await, ReadOutcome::Eof);
}

#[tokio::test]
async fn eof_is_sticky() {
    let reader = reader("");
    assert_eq!(reader.read_line().await, ReadOutcome::Eof);
    assert_eq!(reader.read_line().await, ReadOutcome::Eof);
}

#[tokio::test]
async fn clones_share_one_stream() {
    let first = reader("a\nb\n");
    let second = first.clone();
    assert_eq!(first.read_line().await, ReadOutcome::Line("a".into()));
    assert_eq!(second.read_line().await, ReadOutcome::Line("b".into()));
}

#[yare::parameterized(
    lf = { "x\n", "x" },
    crlf = { "x\r\n", "x" },
    bare = { "x", "x" },
    inner_cr = { "a\rb\n", "a\rb" },
    blank = { "\n", "" },
    keeps_spaces = { "  x  \n", "  x  " },
)]
fn terminators(raw: &str, expected: &str) {
    assert_eq!(strip_terminator(raw.to_string()), expected);
}
