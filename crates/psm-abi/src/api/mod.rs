// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! API identifiers carried in word 0 of an IPI payload.
//!
//! Inbound requests (PLM → PSM) carry the bare [`ApiId`] in word 0.
//! Outbound events (PSM → PLM) carry a packed [`Header`](crate::Header)
//! whose low byte is a [`PlmApiId`].

use core::fmt;


// =============================================================================
// Inbound API
// =============================================================================

/// Requests the PSM accepts over IPI.
///
/// The set is closed: [`ApiId::from_u32`] rejects every other value, and the
/// dispatcher matches on this enum exhaustively.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum ApiId {
    /// Power down a node directly. Word 1 = node id.
    DirectPwrDwn = 1,
    /// Power up a node directly. Word 1 = node id.
    DirectPwrUp = 2,
    /// Run one FPD housekeeping phase. Word 1 = function id.
    FpdHouseclean = 3,
    /// Enable the CCIX wake interrupt in the GIC proxy. No arguments.
    CcixEn = 4,
    /// Assert or deassert a domain isolation. Word 1 = isolation id, word 2 = action.
    DomainIso = 5,
}

impl ApiId {
    /// Lowest valid inbound API id.
    pub const MIN: Self = Self::DirectPwrDwn;

    /// Highest valid inbound API id.
    pub const MAX: Self = Self::DomainIso;

    /// Every inbound API id, in wire order.
    pub const ALL: [Self; 5] = [
        Self::DirectPwrDwn,
        Self::DirectPwrUp,
        Self::FpdHouseclean,
        Self::CcixEn,
        Self::DomainIso,
    ];

    /// Try to convert from a raw payload word.
    #[must_use]
    pub const fn from_u32(value: u32) -> Option<Self> {
        match value {
            1 => Some(Self::DirectPwrDwn),
            2 => Some(Self::DirectPwrUp),
            3 => Some(Self::FpdHouseclean),
            4 => Some(Self::CcixEn),
            5 => Some(Self::DomainIso),
            _ => None,
        }
    }

    /// Returns the raw payload word.
    #[inline]
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self as u32
    }

    /// Short name used in diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::DirectPwrDwn => "direct-pwr-dwn",
            Self::DirectPwrUp => "direct-pwr-up",
            Self::FpdHouseclean => "fpd-houseclean",
            Self::CcixEn => "ccix-en",
            Self::DomainIso => "domain-iso",
        }
    }
}

impl fmt::Debug for ApiId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiId({}={:#x})", self.name(), self.as_u32())
    }
}

impl fmt::Display for ApiId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Outbound API
// =============================================================================

/// Events the PSM raises towards the PLM.
///
/// These ids share the XilPM API numbering space and only ever appear in
/// the low byte of an outbound header.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum PlmApiId {
    /// The PSM has a pending power-management event for the PLM.
    PsmToPlmEvent = 0x40,
}

impl PlmApiId {
    /// Try to convert from the low byte of a header word.
    #[must_use]
    pub const fn from_u32(value: u32) -> Option<Self> {
        match value {
            0x40 => Some(Self::PsmToPlmEvent),
            _ => None,
        }
    }

    /// Returns the raw API id.
    #[inline]
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self as u32
    }
}

impl fmt::Display for PlmApiId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PsmToPlmEvent => f.write_str("psm-to-plm-event"),
        }
    }
}
