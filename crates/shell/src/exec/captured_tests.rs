// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::exec::fake::SharedBuffer;
use crate::exec::test_helpers::open_fd_count;
use crate::exec::{CommandRunner, ShellRunner};
use lsh_core::ExitStatus;
use serial_test::serial;

/// Run `raw` captured, returning the result and everything forwarded live.
async fn capture(raw: &str) -> (ExitStatus, Transcript, SharedBuffer) {
    let sink = SharedBuffer::new();
    let runner = ShellRunner::new(CaptureConfig::default()).with_sink(sink.clone());
    match runner.run_captured(&CommandLine::parse(raw)).await.unwrap() {
        ExecutionResult::Captured { status, transcript } => (status, transcript, sink),
        other => panic!("expected a captured result, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Status and transcript
// ---------------------------------------------------------------------------

#[tokio::test]
#[serial(fds)]
async fn echo_is_captured_and_succeeds() {
    let (status, transcript, _) = capture("echo hi").await;
    assert_eq!(status, ExitStatus::SUCCESS);
    assert!(transcript.to_string_lossy().contains("hi"), "{transcript:?}");
}

#[tokio::test]
#[serial(fds)]
async fn exit_code_is_reported() {
    for (raw, expected) in
        [("true", 0), ("false", 1), ("exit 42", 42), ("true; false", 1), ("false || true", 0)]
    {
        let (status, _, _) = capture(raw).await;
        assert_eq!(status.code(), expected, "{raw}");
    }
}

#[tokio::test]
#[serial(fds)]
async fn forwarded_bytes_equal_transcript() {
    let (_, transcript, sink) = capture("printf 'one\\ntwo\\n'; printf '\\033[31mred\\033[0m\\n' >&2").await;
    assert_eq!(sink.contents(), transcript.as_bytes());
    let text = transcript.to_string_lossy();
    assert!(text.contains("one"));
    assert!(text.contains("\u{1b}[31mred\u{1b}[0m"), "escape sequences must be kept: {text:?}");
}

#[tokio::test]
#[serial(fds)]
async fn stderr_shares_the_transcript() {
    let (status, transcript, _) = capture("echo oops >&2; exit 2").await;
    assert_eq!(status.code(), 2);
    assert!(transcript.to_string_lossy().contains("oops"));
}

#[tokio::test]
#[serial(fds)]
async fn missing_command_lands_in_transcript() {
    let (status, transcript, _) = capture("nonexistentcmd123").await;
    assert_eq!(status, ExitStatus::NOT_FOUND);
    assert!(transcript.to_string_lossy().contains("not found"), "{transcript:?}");
}

#[tokio::test]
#[serial(fds)]
async fn large_output_is_complete() {
    let (status, transcript, _) = capture("seq 1 5000").await;
    assert!(status.success());
    let text = transcript.to_string_lossy();
    assert!(text.trim_end().ends_with("5000"), "tail: {:?}", &text[text.len().saturating_sub(20)..]);
    assert!(text.contains("\n2500\r") || text.contains("\n2500\n"));
}

#[tokio::test]
#[serial(fds)]
async fn failure_is_eligible_for_recovery() {
    let sink = SharedBuffer::new();
    let runner = ShellRunner::new(CaptureConfig::default()).with_sink(sink);
    let result = runner.run_captured(&CommandLine::parse("ls /definitely/not/here")).await.unwrap();
    let failure = result.into_failure().unwrap();
    assert!(!failure.status().success());
    assert!(!failure.transcript().is_empty());
}

// ---------------------------------------------------------------------------
// Terminal behaviour
// ---------------------------------------------------------------------------

#[tokio::test]
#[serial(fds)]
async fn child_sees_a_terminal() {
    let (status, transcript, _) = capture("test -t 0 && test -t 1 && test -t 2 && echo tty").await;
    assert!(status.success());
    assert!(transcript.to_string_lossy().contains("tty"));
}

#[tokio::test]
#[serial(fds)]
async fn child_sees_a_sized_terminal() {
    let (status, transcript, _) = capture("stty size").await;
    assert!(status.success());
    let text = transcript.to_string_lossy();
    let dims: Vec<u32> = text.split_whitespace().filter_map(|w| w.parse().ok()).collect();
    assert_eq!(dims.len(), 2, "{text:?}");
    assert!(dims.iter().all(|d| *d > 0));
}

// ---------------------------------------------------------------------------
// Termination and resources
// ---------------------------------------------------------------------------

#[tokio::test]
#[serial(fds)]
async fn signal_death_is_a_status() {
    let (status, _, _) = capture("kill -9 $$").await;
    assert_eq!(status.signal(), Some(9));
    assert_eq!(status.code(), 137);
}

#[tokio::test]
#[serial(fds)]
async fn background_grandchild_does_not_hang() {
    let started = Instant::now();
    let (status, transcript, _) = capture("sleep 5 & echo started").await;
    assert!(status.success());
    assert!(transcript.to_string_lossy().contains("started"));
    assert!(started.elapsed() < Duration::from_secs(3), "took {:?}", started.elapsed());
}

#[tokio::test]
#[serial(fds)]
async fn chatty_background_grandchild_does_not_hang() {
    // Writes every 20 ms for about six seconds, well past the drain timeout.
    let raw = "(i=0; while [ $i -lt 300 ]; do echo x; sleep 0.02; i=$((i+1)); done) & echo started";
    let started = Instant::now();
    let (status, transcript, _) = tokio::time::timeout(Duration::from_secs(5), capture(raw))
        .await
        .unwrap_or_else(|_| panic!("still forwarding after {:?}", started.elapsed()));
    assert!(status.success());
    assert!(transcript.to_string_lossy().contains("started"));
    assert!(started.elapsed() < Duration::from_secs(3), "took {:?}", started.elapsed());
}

#[tokio::test]
#[serial(fds)]
async fn no_descriptor_leaks() {
    // Warm up process-wide state (signal and reaper registration).
    capture("true").await;

    let before = open_fd_count();
    for raw in ["echo ok", "exit 3", "kill -9 $$", "nonexistentcmd123"] {
        capture(raw).await;
    }
    assert_eq!(open_fd_count(), before);
}

#[tokio::test]
#[serial(fds)]
async fn missing_shell_is_reported_in_transcript() {
    let sink = SharedBuffer::new();
    let config = CaptureConfig { shell: "/nonexistent/shell".into(), ..CaptureConfig::default() };
    let line = CommandLine::parse("echo hi");
    match run(&config, &sink, &line).await.unwrap() {
        ExecutionResult::Captured { status, transcript } => {
            assert_eq!(status, ExitStatus::NOT_FOUND);
            assert!(transcript.to_string_lossy().contains("/nonexistent/shell"));
            assert_eq!(sink.contents(), transcript.as_bytes());
        }
        other => panic!("expected a captured result, got {other:?}"),
    }
}
