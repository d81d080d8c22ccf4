// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Tests for status codes.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;

#[test]
fn status_wire_values_match_xst_codes() {
    assert_eq!(Status::Success.as_u32(), 0);
    assert_eq!(Status::Failure.as_u32(), 1);
    assert_eq!(Status::InvalidParam.as_u32(), 15);
}

#[test]
fn status_from_result() {
    assert_eq!(Status::from(Ok(())), Status::Success);
    assert_eq!(Status::from(Err(PsmError::Failure)), Status::Failure);
    assert_eq!(Status::from(Err(PsmError::InvalidParam)), Status::InvalidParam);
}

#[test]
fn status_decode_rejects_unknown_words() {
    assert_eq!(Status::from_u32(15), Some(Status::InvalidParam));
    assert!(Status::from_u32(2).is_none());
    assert!(Status::from_u32(u32::MAX).is_none());
}

#[test]
fn only_success_is_success() {
    assert!(Status::Success.is_success());
    assert!(!Status::Failure.is_success());
    assert!(!Status::InvalidParam.is_success());
}

#[test]
fn error_display() {
    assert_eq!(PsmError::Failure.to_string(), "operation failed");
    assert_eq!(Status::InvalidParam.to_string(), "invalid parameter");
}
