// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Test doubles for the engine's seams.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::Notify;

use crate::confirm::Confirm;
use crate::interrupt::Interrupt;
use crate::model::{FixRequest, ModelQuery, QueryError};
use crate::notice::{Notice, Reporter};

struct FakeModelState {
    responses: VecDeque<Result<String, QueryError>>,
    fallback: Result<String, QueryError>,
    requests: Vec<FixRequest>,
    hanging: bool,
}

/// Model returning queued answers, then a fallback; records every request.
#[derive(Clone)]
pub struct FakeModel {
    inner: Arc<Mutex<FakeModelState>>,
}

impl Default for FakeModel {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakeModelState {
                responses: VecDeque::new(),
                fallback: Err(QueryError::Transport("no scripted response".to_string())),
                requests: Vec::new(),
                hanging: false,
            })),
        }
    }
}

impl FakeModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// A model that gives the same answer to every request.
    pub fn always(response: &str) -> Self {
        let model = Self::default();
        model.inner.lock().fallback = Ok(response.to_string());
        model
    }

    /// A model that records requests but never answers.
    pub fn hanging() -> Self {
        let model = Self::default();
        model.inner.lock().hanging = true;
        model
    }

    /// Queue the next answer.
    pub fn respond(&self, response: &str) -> &Self {
        self.inner.lock().responses.push_back(Ok(response.to_string()));
        self
    }

    /// Queue a failure for the next request.
    pub fn fail(&self, error: QueryError) -> &Self {
        self.inner.lock().responses.push_back(Err(error));
        self
    }

    /// Every request so far, in order.
    pub fn requests(&self) -> Vec<FixRequest> {
        self.inner.lock().requests.clone()
    }

    pub fn request_count(&self) -> usize {
        self.inner.lock().requests.len()
    }
}

#[async_trait]
impl ModelQuery for FakeModel {
    fn model_name(&self) -> &str {
        "fake-model"
    }

    async fn query(&self, request: &FixRequest) -> Result<String, QueryError> {
        let answer = {
            let mut inner = self.inner.lock();
            inner.requests.push(request.clone());
            if inner.hanging {
                None
            } else {
                Some(match inner.responses.pop_front() {
                    Some(response) => response,
                    None => inner.fallback.clone(),
                })
            }
        };
        match answer {
            Some(answer) => answer,
            None => std::future::pending().await,
        }
    }
}

struct FakeConfirmState {
    answers: VecDeque<bool>,
    prompts: Vec<String>,
}

/// Confirmation that replays queued answers and says no once they run out.
#[derive(Clone)]
pub struct FakeConfirm {
    inner: Arc<Mutex<FakeConfirmState>>,
}

impl Default for FakeConfirm {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakeConfirmState {
                answers: VecDeque::new(),
                prompts: Vec::new(),
            })),
        }
    }
}

impl FakeConfirm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer the given sequence, in order.
    pub fn answering(answers: impl IntoIterator<Item = bool>) -> Self {
        let confirm = Self::default();
        confirm.inner.lock().answers.extend(answers);
        confirm
    }

    /// Prompts shown so far.
    pub fn prompts(&self) -> Vec<String> {
        self.inner.lock().prompts.clone()
    }
}

#[async_trait]
impl Confirm for FakeConfirm {
    async fn confirm(&self, prompt: &str) -> bool {
        let mut inner = self.inner.lock();
        inner.prompts.push(prompt.to_string());
        inner.answers.pop_front().unwrap_or(false)
    }
}

/// Interrupt fired by the test; a trigger before anyone waits is kept.
#[derive(Clone, Default)]
pub struct FakeInterrupt {
    notify: Arc<Notify>,
}

impl FakeInterrupt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trigger(&self) {
        self.notify.notify_one();
    }
}

#[async_trait]
impl Interrupt for FakeInterrupt {
    async fn interrupted(&self) {
        self.notify.notified().await;
    }
}

/// Reporter that keeps every notice.
#[derive(Clone, Default)]
pub struct RecordingReporter {
    notices: Arc<Mutex<Vec<Notice>>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().clone()
    }
}

impl Reporter for RecordingReporter {
    fn report(&self, notice: &Notice) {
        self.notices.lock().push(notice.clone());
    }
}
