// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use async_trait::async_trait;

/// Yes/no question put to the user before a suggested fix runs.
#[async_trait]
pub trait Confirm: Send + Sync {
    /// `true` only on an explicit yes; empty input, interrupts and end of
    /// input all mean no.
    async fn confirm(&self, prompt: &str) -> bool;
}
