// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Tests for the default read-modify-write.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::RegisterAccess;

/// Single register that counts writes.
struct CountingRegister {
    value: u32,
    writes: usize,
}

impl RegisterAccess for CountingRegister {
    fn read32(&self, _addr: u32) -> u32 {
        self.value
    }

    fn write32(&mut self, _addr: u32, value: u32) {
        self.value = value;
        self.writes += 1;
    }
}

impl CountingRegister {
    const fn new(value: u32) -> Self {
        Self {
            value,
            writes: 0,
        }
    }
}

#[test]
fn rmw_sets_masked_bits_only() {
    let mut reg = CountingRegister::new(0xF0F0_0000);
    reg.rmw32(0, 0x0000_000F, 0xFFFF_FFFF);
    assert_eq!(reg.value, 0xF0F0_000F);
}

#[test]
fn rmw_clears_masked_bits_only() {
    let mut reg = CountingRegister::new(0xFFFF_FFFF);
    reg.rmw32(0, 0x0000_0F00, 0);
    assert_eq!(reg.value, 0xFFFF_F0FF);
}

#[test]
fn rmw_writes_exactly_once() {
    let mut reg = CountingRegister::new(0);
    reg.rmw32(0, 0x1, 0x1);
    assert_eq!(reg.writes, 1);
}

#[test]
fn every_address_is_reachable_by_default() {
    let reg = CountingRegister::new(0);
    assert!(reg.maps(0));
    assert!(reg.maps(u32::MAX));
}
