// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Tests for the IPI interrupt service.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::platform::{Call, MockPlatform};
use psm_abi::IpiMask;

#[test]
fn plm_request_is_dispatched_and_answered() {
    let mut mock = MockPlatform::new();
    mock.push_request(IpiMask::PMC, Payload::request(4, 0, 0));

    let status = IpiManager::default().handle_interrupt(&mut mock).unwrap();
    assert_eq!(status, Status::Success);
    assert_eq!(
        mock.calls(),
        [
            Call::ReadRequest(IpiMask::PMC),
            Call::GicP2IrqEnable,
            Call::WriteResponse {
                dest: IpiMask::PMC,
                payload: Payload::response(Status::Success),
            },
            Call::Acknowledge(IpiMask::PMC),
        ]
    );
}

#[test]
fn failing_request_is_answered_with_its_status() {
    let mut mock = MockPlatform::new();
    mock.push_request(IpiMask::PMC, Payload::request(0x99, 0, 0));

    let status = IpiManager::default().handle_interrupt(&mut mock).unwrap();
    assert_eq!(status, Status::InvalidParam);
    assert_eq!(
        mock.responses(),
        [(IpiMask::PMC, Payload::response(Status::InvalidParam))]
    );
}

#[test]
fn one_request_per_interrupt() {
    let mut mock = MockPlatform::new();
    mock.push_request(IpiMask::PMC, Payload::request(4, 0, 0));
    mock.push_request(IpiMask::PMC, Payload::request(4, 0, 0));

    IpiManager::default().handle_interrupt(&mut mock).unwrap();
    assert_eq!(mock.responses().len(), 1);
}

#[test]
fn unexpected_source_is_acknowledged_without_dispatch() {
    let mut mock = MockPlatform::new();
    mock.raise(IpiMask::new(0x20));

    let result = IpiManager::default().handle_interrupt(&mut mock);
    assert_eq!(result, Err(PsmError::InvalidParam));
    assert_eq!(mock.calls(), [Call::Acknowledge(IpiMask::new(0x20))]);
    assert!(mock.pending().is_empty());
}

#[test]
fn read_failure_skips_dispatch_but_acknowledges() {
    let mut mock = MockPlatform::new();
    mock.raise(IpiMask::PMC);

    let result = IpiManager::default().handle_interrupt(&mut mock);
    assert_eq!(result, Err(PsmError::Failure));
    assert_eq!(
        mock.calls(),
        [
            Call::ReadRequest(IpiMask::PMC),
            Call::Acknowledge(IpiMask::PMC)
        ]
    );
}

#[test]
fn configured_plm_channel_is_used() {
    let channel = IpiMask::new(0x100);
    let manager = IpiManager::new(PsmConfig::DEFAULT.with_plm_ipi(channel));
    let mut mock = MockPlatform::new();
    mock.push_request(channel, Payload::request(4, 0, 0));

    assert_eq!(manager.handle_interrupt(&mut mock), Ok(Status::Success));
    assert_eq!(mock.responses()[0].0, channel);

    manager.notify_plm(&mut mock).unwrap();
    assert_eq!(mock.sent()[0].0, channel);
}

#[test]
fn notification_goes_to_the_plm_only() {
    let mut mock = MockPlatform::new();
    IpiManager::default().notify_plm(&mut mock).unwrap();
    assert_eq!(
        mock.calls(),
        [Call::Send {
            dest: IpiMask::PMC,
            payload: Payload::pack0(psm_abi::PlmApiId::PsmToPlmEvent),
        }]
    );
}
