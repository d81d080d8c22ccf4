// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Tests for FPD housekeeping dispatch.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::platform::{Call, MockPlatform};

#[test]
fn each_phase_calls_one_routine() {
    let cases = [
        (HousecleanFunction::InitStart, Call::PreHouseClean),
        (HousecleanFunction::InitFinish, Call::PostHouseClean),
        (HousecleanFunction::Bisr, Call::Mbisr),
        (HousecleanFunction::MbistClear, Call::MbistClear),
    ];
    for (function, expected) in cases {
        let mut mock = MockPlatform::new();
        assert_eq!(fpd_house_clean(&mut mock, function.as_u32()), Ok(()));
        assert_eq!(mock.calls(), [expected], "{function}");
    }
}

#[test]
fn init_start_failure_short_circuits() {
    let mut mock = MockPlatform::new().with_pre_house_clean_result(Err(PsmError::Failure));
    assert_eq!(fpd_house_clean(&mut mock, 0), Err(PsmError::Failure));
    assert_eq!(mock.calls(), [Call::PreHouseClean]);
}

#[test]
fn init_start_failure_is_not_translated() {
    let mut mock = MockPlatform::new().with_pre_house_clean_result(Err(PsmError::InvalidParam));
    assert_eq!(
        run(&mut mock, HousecleanFunction::InitStart),
        Err(PsmError::InvalidParam)
    );
}

#[test]
fn infallible_phases_succeed_even_after_failed_init_start() {
    let mut mock = MockPlatform::new().with_pre_house_clean_result(Err(PsmError::Failure));
    assert_eq!(run(&mut mock, HousecleanFunction::InitFinish), Ok(()));
    assert_eq!(mock.calls(), [Call::PostHouseClean]);
}

#[test]
fn unsupported_functions_make_no_call() {
    let mut mock = MockPlatform::new();
    for raw in [2, 4, 5, 7, u32::MAX] {
        assert_eq!(fpd_house_clean(&mut mock, raw), Err(PsmError::InvalidParam));
    }
    assert!(mock.calls().is_empty());
}
