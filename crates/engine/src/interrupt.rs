// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User interrupts observed while the engine waits on the model.

use async_trait::async_trait;

/// Resolves when the user asks to abandon the current wait.
#[async_trait]
pub trait Interrupt: Send + Sync {
    /// Never resolves when interrupts cannot be observed.
    async fn interrupted(&self);
}

/// Ctrl-C on the controlling terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct CtrlC;

#[async_trait]
impl Interrupt for CtrlC {
    async fn interrupted(&self) {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "cannot listen for interrupts");
            std::future::pending::<()>().await;
        }
    }
}
