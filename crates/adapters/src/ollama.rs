// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Ollama model-query client (`POST /api/generate`, non-streaming).

use async_trait::async_trait;
use lsh_core::ModelConfig;
use lsh_engine::{FixRequest, ModelQuery, QueryError};
use serde::{Deserialize, Serialize};

/// Warm-up prompt sent once at startup to check the endpoint and model.
pub const PROBE_PROMPT: &str = "Say 'hi' in one word.";

/// Error bodies longer than this are cut in diagnostics.
const MAX_ERROR_BODY: usize = 200;

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Deserialize)]
struct GenerateResponse {
    response: Option<String>,
}

/// Client for one model on one Ollama server.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
}

impl OllamaClient {
    pub fn new(config: &ModelConfig) -> Result<Self, QueryError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| QueryError::Transport(e.to_string()))?;
        Ok(Self { http, base_url: config.host.clone(), model: config.name.clone() })
    }

    pub fn host(&self) -> &str {
        &self.base_url
    }

    /// One non-streaming completion.
    pub async fn generate(&self, prompt: &str) -> Result<String, QueryError> {
        let url = format!("{}/api/generate", self.base_url);
        let body = GenerateRequest { model: &self.model, prompt, stream: false };
        tracing::debug!(%url, model = %self.model, prompt_len = prompt.len(), "ollama generate");

        let response = self.http.post(&url).json(&body).send().await.map_err(|e| {
            if e.is_timeout() {
                QueryError::Transport(format!("request to {url} timed out"))
            } else {
                QueryError::Transport(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(QueryError::Status { status: status.as_u16(), body: truncate(body.trim()) });
        }

        let text = response.text().await.map_err(|e| QueryError::Transport(e.to_string()))?;
        let parsed: GenerateResponse =
            serde_json::from_str(&text).map_err(|e| QueryError::Malformed(e.to_string()))?;
        parsed
            .response
            .ok_or_else(|| QueryError::Malformed("missing `response` field".to_string()))
    }

    /// Startup check that the server answers and the model is available.
    pub async fn probe(&self) -> Result<(), QueryError> {
        let answer = self.generate(PROBE_PROMPT).await?;
        tracing::info!(model = %self.model, answer = %answer.trim(), "ollama probe succeeded");
        Ok(())
    }
}

#[async_trait]
impl ModelQuery for OllamaClient {
    fn model_name(&self) -> &str {
        &self.model
    }

    async fn query(&self, request: &FixRequest) -> Result<String, QueryError> {
        self.generate(&request.prompt()).await
    }
}

fn truncate(body: &str) -> String {
    match body.char_indices().nth(MAX_ERROR_BODY) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}

#[cfg(test)]
#[path = "ollama_tests.rs"]
mod tests;
