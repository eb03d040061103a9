// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Failed commands analysed by a model server.

use crate::prelude::*;
use crate::prelude::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn model_answering(answer: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "response": answer })))
        .mount(&server)
        .await;
    server
}

async fn run_blocking(f: impl FnOnce() + Send + 'static) {
    tokio::task::spawn_blocking(f).await.unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn agent_mode_runs_the_fix() {
    let server = model_answering("```bash\necho fixed-by-model\n```").await;
    let uri = server.uri();
    run_blocking(move || {
        cli()
            .args(&["--no-probe", "--agent", "--ollama", &uri, "--llm", "test-model"])
            .stdin("false\nexit\n")
            .passes()
            .stdout_has("Analyzing failure with test-model...")
            .stdout_has("Suggested Fix: echo fixed-by-model")
            .stdout_has("Agent Mode: executing fix...")
            .stdout_has("fixed-by-model\r\n")
            .stdout_has("Goodbye!");
    })
    .await;
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn declined_fix_is_not_run() {
    let server = model_answering("```bash\necho should-not-run\n```").await;
    let uri = server.uri();
    run_blocking(move || {
        cli()
            .args(&["--no-probe", "--ollama", &uri])
            .stdin("false\nn\nexit\n")
            .passes()
            .stdout_has("Suggested Fix: echo should-not-run")
            .stdout_has("\nRun this command? [y/N] ")
            .stdout_lacks("should-not-run\r\n");
    })
    .await;
}

#[tokio::test(flavor = "multi_thread")]
async fn accepted_fix_is_run() {
    let server = model_answering("`echo accepted`").await;
    let uri = server.uri();
    run_blocking(move || {
        cli()
            .args(&["--no-probe", "--ollama", &uri])
            .stdin("false\ny\nexit\n")
            .passes()
            .stdout_has("accepted\r\n");
    })
    .await;
}

#[tokio::test(flavor = "multi_thread")]
async fn failing_fixes_stop_at_the_depth_limit() {
    let server = model_answering("```bash\nfalse\n```").await;
    let uri = server.uri();
    run_blocking(move || {
        cli()
            .args(&["--no-probe", "--agent", "--ollama", &uri, "--max-recovery-depth", "2"])
            .stdin("false\nexit\n")
            .passes()
            .stdout_has("lsh: recovery limit reached (2 attempts); not analyzing further");
    })
    .await;
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test(flavor = "multi_thread")]
async fn unreachable_model_is_reported_not_fatal() {
    run_blocking(|| {
        cli()
            .args(&["--no-probe", "--ollama", "http://127.0.0.1:9"])
            .stdin("false\necho after\nexit\n")
            .passes()
            .stdout_has("lsh: model query failed:")
            .stdout_has("after\r\n");
    })
    .await;
}
