// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::exec::test_helpers::open_fd_count;
use serial_test::serial;

fn size() -> Winsize {
    Winsize { ws_row: 30, ws_col: 100, ws_xpixel: 0, ws_ypixel: 0 }
}

#[test]
#[serial(fds)]
fn dropping_pair_closes_both_descriptors() {
    let before = open_fd_count();
    let pair = PtyPair::open(&size(), None).unwrap();
    assert_eq!(open_fd_count(), before + 2);
    drop(pair);
    assert_eq!(open_fd_count(), before);
}

#[test]
#[serial(fds)]
fn into_controller_closes_terminal_side() {
    let before = open_fd_count();
    let pair = PtyPair::open(&size(), None).unwrap();
    let controller = pair.into_controller();
    assert_eq!(open_fd_count(), before + 1);
    drop(controller);
    assert_eq!(open_fd_count(), before);
}

#[test]
#[serial(fds)]
fn child_stdio_clones_are_released_with_stdio() {
    let before = open_fd_count();
    let pair = PtyPair::open(&size(), None).unwrap();
    let stdio = pair.child_stdio().unwrap();
    assert_eq!(open_fd_count(), before + 5);
    drop(stdio);
    drop(pair);
    assert_eq!(open_fd_count(), before);
}
