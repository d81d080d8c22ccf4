// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Tests for node ids and IPI masks.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::id::{IpiMask, NodeId};

#[test]
fn node_id_is_forwarded_verbatim() {
    let node = NodeId::new(0x1822_4002);
    assert_eq!(node.as_u32(), 0x1822_4002);
    assert_eq!(node.to_string(), "node:0x18224002");
}

#[test]
fn ipi_mask_contains() {
    let both = IpiMask::PSM | IpiMask::PMC;
    assert!(both.contains(IpiMask::PMC));
    assert!(both.contains(IpiMask::PSM));
    assert!(!IpiMask::PSM.contains(IpiMask::PMC));
}

#[test]
fn ipi_mask_never_contains_empty() {
    assert!(!IpiMask::PMC.contains(IpiMask::NONE));
    assert!(IpiMask::NONE.is_empty());
    assert!(!IpiMask::PMC.is_empty());
}

#[test]
fn ipi_channels_are_distinct_bits() {
    assert_eq!(IpiMask::PSM.bits() & IpiMask::PMC.bits(), 0);
    assert_eq!(IpiMask::PMC.bits().count_ones(), 1);
}
