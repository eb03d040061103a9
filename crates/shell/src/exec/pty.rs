// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pseudo-terminal pair as a scoped resource.

use std::os::fd::OwnedFd;
use std::process::Stdio;

use nix::pty::{openpty, OpenptyResult, Winsize};
use nix::sys::termios::Termios;

use super::error::ExecError;

/// Controller and terminal-facing descriptors of one pseudo-terminal.
///
/// Both descriptors are owned; whichever side is still held is closed when
/// the value (or the controller returned by [`PtyPair::into_controller`]) is
/// dropped, on every exit path.
#[derive(Debug)]
pub struct PtyPair {
    controller: OwnedFd,
    terminal: OwnedFd,
}

impl PtyPair {
    /// Allocate a pair seeded with the given geometry and terminal modes.
    pub fn open(geometry: &Winsize, modes: Option<&Termios>) -> Result<Self, ExecError> {
        let OpenptyResult { master, slave } =
            openpty(Some(geometry), modes).map_err(ExecError::PtyAllocation)?;
        Ok(Self { controller: master, terminal: slave })
    }

    /// Stdin, stdout and stderr for a child, all on the terminal-facing side.
    pub fn child_stdio(&self) -> Result<(Stdio, Stdio, Stdio), ExecError> {
        let clone = || self.terminal.try_clone().map(Stdio::from).map_err(ExecError::PtyAttach);
        Ok((clone()?, clone()?, clone()?))
    }

    /// Keep only the controller, closing this process's terminal-facing
    /// descriptor so end-of-stream is seen once the child side closes.
    pub fn into_controller(self) -> OwnedFd {
        let PtyPair { controller, terminal } = self;
        drop(terminal);
        controller
    }
}

#[cfg(test)]
#[path = "pty_tests.rs"]
mod tests;
