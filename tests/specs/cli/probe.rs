// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Startup connection check against the model server.

use crate::prelude::*;
use crate::prelude::assert_eq;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn unreachable_server_exits_with_hint() {
    let run = cli()
        .args(&["--ollama", "http://127.0.0.1:9", "--llm", "tinyllama"])
        .stdin("exit\n")
        .fails()
        .stdout_has("Connecting to Ollama at http://127.0.0.1:9 using model 'tinyllama'...")
        .stderr_has("Failed to initialize Ollama")
        .stderr_has("ollama pull tinyllama");
    assert_eq!(run.code(), Some(1));
}

#[tokio::test(flavor = "multi_thread")]
async fn reachable_server_connects() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"response":"Hi"}"#))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    tokio::task::spawn_blocking(move || {
        cli()
            .args(&["--ollama", &uri])
            .stdin("exit\n")
            .passes()
            .stdout_has("LLM connected successfully!")
            .stdout_has("Goodbye!");
    })
    .await
    .unwrap();
}
