// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use serial_test::serial;

async fn status_of(raw: &str) -> ExitStatus {
    match run(&CommandLine::parse(raw)).await {
        ExecutionResult::Direct { status } => status,
        other => panic!("expected a direct result, got {other:?}"),
    }
}

#[tokio::test]
#[serial(fds)]
async fn successful_program_reports_zero() {
    assert_eq!(status_of("true").await, ExitStatus::SUCCESS);
}

#[tokio::test]
#[serial(fds)]
async fn exit_code_is_passed_through() {
    assert_eq!(status_of("sh -c 'exit 3'").await.code(), 3);
}

#[tokio::test]
#[serial(fds)]
async fn missing_program_is_not_found_status() {
    assert_eq!(status_of("nonexistentcmd123 --flag").await, ExitStatus::NOT_FOUND);
}

#[tokio::test]
#[serial(fds)]
async fn signal_termination_is_a_status_not_an_error() {
    let status = status_of("sh -c 'kill -TERM $$'").await;
    assert_eq!(status.signal(), Some(15));
    assert_eq!(status.code(), 143);
    assert!(!status.success());
}

#[tokio::test]
async fn empty_line_does_nothing() {
    assert_eq!(status_of("   ").await, ExitStatus::SUCCESS);
}

#[tokio::test]
#[serial(fds)]
async fn direct_result_has_no_transcript() {
    let result = run(&CommandLine::parse("false")).await;
    assert!(result.transcript().is_none());
    assert!(result.into_failure().is_none());
}
