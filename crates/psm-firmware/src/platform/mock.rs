// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Mock platform implementation for testing.
//!
//! This module provides a simulated register file and recording stand-ins
//! for every external collaborator, allowing the dispatch path to be tested
//! without PSM hardware.

use std::collections::{BTreeMap, VecDeque};
use std::vec::Vec;

use psm_abi::{IpiMask, NodeId, Payload, PsmError, PsmResult};

use super::traits::{FpdHouseclean, GicProxy, IpiTransport, PowerSequencer, RegisterAccess};

/// One observable interaction with the mock platform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Call {
    /// A register write.
    Write {
        /// Register address.
        addr: u32,
        /// Value written.
        value: u32,
    },
    /// `direct_power_down`.
    PowerDown(NodeId),
    /// `direct_power_up`.
    PowerUp(NodeId),
    /// `pre_house_clean`.
    PreHouseClean,
    /// `post_house_clean`.
    PostHouseClean,
    /// `mbisr`.
    Mbisr,
    /// `mbist_clear`.
    MbistClear,
    /// `p2_irq_enable`.
    GicP2IrqEnable,
    /// `send`.
    Send {
        /// Destination channels.
        dest: IpiMask,
        /// Message sent.
        payload: Payload,
    },
    /// `read_request`.
    ReadRequest(IpiMask),
    /// `write_response`.
    WriteResponse {
        /// Destination channel.
        dest: IpiMask,
        /// Response written.
        payload: Payload,
    },
    /// `acknowledge`.
    Acknowledge(IpiMask),
}

/// Mock PSM backed by in-memory state.
///
/// Registers read as 0 until written. Every collaborator call is appended
/// to an ordered log; results of the fallible collaborators are
/// configurable.
pub struct MockPlatform {
    registers: BTreeMap<u32, u32>,
    calls: Vec<Call>,
    power_result: PsmResult,
    pre_house_clean_result: PsmResult,
    send_result: PsmResult,
    requests: VecDeque<Payload>,
    pending: IpiMask,
}

impl MockPlatform {
    /// Create a mock where every collaborator succeeds.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            registers: BTreeMap::new(),
            calls: Vec::new(),
            power_result: Ok(()),
            pre_house_clean_result: Ok(()),
            send_result: Ok(()),
            requests: VecDeque::new(),
            pending: IpiMask::NONE,
        }
    }

    /// Preset a register without logging a write.
    #[must_use]
    pub fn with_register(mut self, addr: u32, value: u32) -> Self {
        self.registers.insert(addr, value);
        self
    }

    /// Make both power primitives return `result`.
    #[must_use]
    pub const fn with_power_result(mut self, result: PsmResult) -> Self {
        self.power_result = result;
        self
    }

    /// Make `pre_house_clean` return `result`.
    #[must_use]
    pub const fn with_pre_house_clean_result(mut self, result: PsmResult) -> Self {
        self.pre_house_clean_result = result;
        self
    }

    /// Make `send` return `result`.
    #[must_use]
    pub const fn with_send_result(mut self, result: PsmResult) -> Self {
        self.send_result = result;
        self
    }

    /// Queue an inbound request from `src` and raise its pending bit.
    pub fn push_request(&mut self, src: IpiMask, payload: Payload) {
        self.requests.push_back(payload);
        self.pending = self.pending | src;
    }

    /// Raise pending bits without queuing a request.
    pub fn raise(&mut self, src: IpiMask) {
        self.pending = self.pending | src;
    }

    /// Current value of a register.
    #[must_use]
    pub fn register(&self, addr: u32) -> u32 {
        self.registers.get(&addr).copied().unwrap_or(0)
    }

    /// Every call so far, in order.
    #[must_use]
    pub fn calls(&self) -> &[Call] {
        &self.calls
    }

    /// Register writes so far, in order.
    #[must_use]
    pub fn writes(&self) -> Vec<(u32, u32)> {
        self.calls
            .iter()
            .filter_map(|call| match *call {
                Call::Write { addr, value } => Some((addr, value)),
                _ => None,
            })
            .collect()
    }

    /// Payloads passed to `send`, in order.
    #[must_use]
    pub fn sent(&self) -> Vec<(IpiMask, Payload)> {
        self.calls
            .iter()
            .filter_map(|call| match *call {
                Call::Send { dest, payload } => Some((dest, payload)),
                _ => None,
            })
            .collect()
    }

    /// Payloads passed to `write_response`, in order.
    #[must_use]
    pub fn responses(&self) -> Vec<(IpiMask, Payload)> {
        self.calls
            .iter()
            .filter_map(|call| match *call {
                Call::WriteResponse { dest, payload } => Some((dest, payload)),
                _ => None,
            })
            .collect()
    }

    /// Clear the call log, keeping register state.
    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }
}

impl Default for MockPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterAccess for MockPlatform {
    fn read32(&self, addr: u32) -> u32 {
        self.register(addr)
    }

    fn write32(&mut self, addr: u32, value: u32) {
        self.registers.insert(addr, value);
        self.calls.push(Call::Write { addr, value });
    }
}

impl PowerSequencer for MockPlatform {
    fn direct_power_down(&mut self, node: NodeId) -> PsmResult {
        self.calls.push(Call::PowerDown(node));
        self.power_result
    }

    fn direct_power_up(&mut self, node: NodeId) -> PsmResult {
        self.calls.push(Call::PowerUp(node));
        self.power_result
    }
}

impl FpdHouseclean for MockPlatform {
    fn pre_house_clean(&mut self) -> PsmResult {
        self.calls.push(Call::PreHouseClean);
        self.pre_house_clean_result
    }

    fn post_house_clean(&mut self) {
        self.calls.push(Call::PostHouseClean);
    }

    fn mbisr(&mut self) {
        self.calls.push(Call::Mbisr);
    }

    fn mbist_clear(&mut self) {
        self.calls.push(Call::MbistClear);
    }
}

impl GicProxy for MockPlatform {
    fn p2_irq_enable(&mut self) {
        self.calls.push(Call::GicP2IrqEnable);
    }
}

impl IpiTransport for MockPlatform {
    fn send(&mut self, dest: IpiMask, payload: &Payload) -> PsmResult {
        self.calls.push(Call::Send {
            dest,
            payload: *payload,
        });
        self.send_result
    }

    fn pending(&self) -> IpiMask {
        self.pending
    }

    fn read_request(&mut self, src: IpiMask) -> Result<Payload, PsmError> {
        self.calls.push(Call::ReadRequest(src));
        self.requests.pop_front().ok_or(PsmError::Failure)
    }

    fn write_response(&mut self, dest: IpiMask, payload: &Payload) -> PsmResult {
        self.calls.push(Call::WriteResponse {
            dest,
            payload: *payload,
        });
        Ok(())
    }

    fn acknowledge(&mut self, mask: IpiMask) {
        self.calls.push(Call::Acknowledge(mask));
        self.pending = IpiMask::new(self.pending.bits() & !mask.bits());
    }
}
