// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Board configuration for the PSM core.
//!
//! The defaults describe Versal silicon. Board variants that move the
//! control register or route events to another channel override single
//! fields with the `with_*` builders.

use psm_abi::IpiMask;
use psm_abi::regs::PSM_LOCAL_MISC_CNTRL;

#[cfg(test)]
mod config_test;

/// Addresses and channels the PSM core depends on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PsmConfig {
    /// Shared control register holding the isolation fields.
    pub misc_cntrl: u32,
    /// Channel of the PLM: source of requests, destination of responses
    /// and events.
    pub plm_ipi: IpiMask,
}

impl PsmConfig {
    /// Versal defaults.
    pub const DEFAULT: Self = Self {
        misc_cntrl: PSM_LOCAL_MISC_CNTRL,
        plm_ipi: IpiMask::PMC,
    };

    /// Override the control register address.
    #[must_use]
    pub const fn with_misc_cntrl(mut self, addr: u32) -> Self {
        self.misc_cntrl = addr;
        self
    }

    /// Override the PLM channel.
    #[must_use]
    pub const fn with_plm_ipi(mut self, mask: IpiMask) -> Self {
        self.plm_ipi = mask;
        self
    }
}

impl Default for PsmConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
