// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Tests for the board configuration.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;

#[test]
fn default_targets_versal() {
    let config = PsmConfig::default();
    assert_eq!(config.misc_cntrl, 0xFFC9_1000);
    assert_eq!(config.plm_ipi, IpiMask::PMC);
}

#[test]
fn builders_override_single_fields() {
    let config = PsmConfig::DEFAULT.with_misc_cntrl(0x1000);
    assert_eq!(config.misc_cntrl, 0x1000);
    assert_eq!(config.plm_ipi, IpiMask::PMC);

    let config = PsmConfig::DEFAULT.with_plm_ipi(IpiMask::new(0x10));
    assert_eq!(config.misc_cntrl, PSM_LOCAL_MISC_CNTRL);
    assert_eq!(config.plm_ipi, IpiMask::new(0x10));
}
