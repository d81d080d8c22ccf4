// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Tests for crate-level exports.

use super::*;

#[test]
fn version_is_set() {
    assert!(!VERSION.is_empty());
}

#[test]
fn root_exports_reach_the_dispatcher() {
    let mut mock = platform::MockPlatform::new();
    let status = process_command(&mut mock, &Payload::request(ApiId::CcixEn.as_u32(), 0, 0));
    assert_eq!(status, Status::Success);
}
