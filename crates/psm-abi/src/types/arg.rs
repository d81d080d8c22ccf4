// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Closed argument enums for housekeeping and isolation requests.

use core::fmt;

/// FPD housekeeping phase selected by word 1 of an `FpdHouseclean` request.
///
/// The raw numbering is shared with the PLM's housecleaning enum, which also
/// defines `SCAN_CLEAR` (2), `LBIST` (4) and `MEM_INIT` (5). Those phases are
/// run by the PLM itself and are not accepted here.
///
/// Phases are independent requests. Nothing in this type or in the
/// sequencer orders them; the caller issues them in the right order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum HousecleanFunction {
    /// Pre-housekeeping: bring the FPD into a state where init can run.
    InitStart = 0,
    /// Post-housekeeping: finish FPD init.
    InitFinish = 1,
    /// Built-in self-repair of FPD memories.
    Bisr = 3,
    /// Clear FPD memory built-in self-test state.
    MbistClear = 6,
}

impl HousecleanFunction {
    /// Try to convert from a raw payload word.
    #[must_use]
    pub const fn from_u32(value: u32) -> Option<Self> {
        match value {
            0 => Some(Self::InitStart),
            1 => Some(Self::InitFinish),
            3 => Some(Self::Bisr),
            6 => Some(Self::MbistClear),
            _ => None,
        }
    }

    /// Returns the raw payload word.
    #[inline]
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self as u32
    }
}

impl fmt::Display for HousecleanFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InitStart => f.write_str("init-start"),
            Self::InitFinish => f.write_str("init-finish"),
            Self::Bisr => f.write_str("bisr"),
            Self::MbistClear => f.write_str("mbist-clear"),
        }
    }
}

/// Isolation barrier named by word 1 of a `DomainIso` request.
///
/// Values are indices into the XilPM isolation node table. Only the CPM5
/// barriers are owned by the PSM; every other isolation node is handled by
/// the PLM and decodes to `None`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum IsolationId {
    /// CPM5 to LPD.
    Cpm5Lpd = 27,
    /// CPM5 to LPD, DFX path.
    Cpm5LpdDfx = 28,
    /// CPM5 to PL.
    Cpm5Pl = 29,
    /// CPM5 to PL, DFX path.
    Cpm5PlDfx = 30,
}

impl IsolationId {
    /// Every isolation barrier owned by the PSM.
    pub const ALL: [Self; 4] = [Self::Cpm5Lpd, Self::Cpm5LpdDfx, Self::Cpm5Pl, Self::Cpm5PlDfx];

    /// Try to convert from a raw payload word.
    #[must_use]
    pub const fn from_u32(value: u32) -> Option<Self> {
        match value {
            27 => Some(Self::Cpm5Lpd),
            28 => Some(Self::Cpm5LpdDfx),
            29 => Some(Self::Cpm5Pl),
            30 => Some(Self::Cpm5PlDfx),
            _ => None,
        }
    }

    /// Returns the raw payload word.
    #[inline]
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self as u32
    }
}

impl fmt::Display for IsolationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cpm5Lpd => f.write_str("cpm5-lpd"),
            Self::Cpm5LpdDfx => f.write_str("cpm5-lpd-dfx"),
            Self::Cpm5Pl => f.write_str("cpm5-pl"),
            Self::Cpm5PlDfx => f.write_str("cpm5-pl-dfx"),
        }
    }
}

/// Whether to raise or drop an isolation barrier.
///
/// On the wire this is a C boolean: exactly `1` or `0`. Any other word is
/// rejected rather than treated as truthy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IsolationAction {
    /// Isolate the two domains.
    Assert,
    /// Connect the two domains.
    Deassert,
}

impl IsolationAction {
    /// Try to convert from a raw payload word.
    #[must_use]
    pub const fn from_u32(value: u32) -> Option<Self> {
        match value {
            1 => Some(Self::Assert),
            0 => Some(Self::Deassert),
            _ => None,
        }
    }

    /// Returns the raw payload word.
    #[inline]
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        match self {
            Self::Assert => 1,
            Self::Deassert => 0,
        }
    }

    /// Value written into a field of `mask` for this action.
    #[inline]
    #[must_use]
    pub const fn field_value(self, mask: u32) -> u32 {
        match self {
            Self::Assert => mask,
            Self::Deassert => 0,
        }
    }
}

impl fmt::Display for IsolationAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Assert => f.write_str("assert"),
            Self::Deassert => f.write_str("deassert"),
        }
    }
}
