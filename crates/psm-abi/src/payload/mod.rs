// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! IPI payload layout.
//!
//! Every IPI message is a fixed buffer of [`PAYLOAD_ARG_CNT`] 32-bit words.
//!
//! ## Inbound request (PLM → PSM)
//!
//! | Word | Content |
//! |------|---------|
//! | 0 | `ApiId` (bare, no header packing) |
//! | 1 | argument 1 |
//! | 2 | argument 2 |
//! | 3.. | ignored |
//!
//! ## Outbound event (PSM → PLM)
//!
//! | Word | Content |
//! |------|---------|
//! | 0 | `Header`: `(len << 16) \| (module << 8) \| api` |
//! | 1 | argument, or 0 |
//! | 2.. | 0 |
//!
//! ## Response (PSM → PLM)
//!
//! | Word | Content |
//! |------|---------|
//! | 0 | `Status` |
//! | 1.. | 0 |

use core::fmt;

use crate::api::PlmApiId;
use crate::status::Status;


/// Number of words in an IPI message buffer.
pub const PAYLOAD_ARG_CNT: usize = 8;

/// Module id of the XilPM library, packed into outbound headers.
pub const LIBPM_MODULE_ID: u8 = 0x06;

// =============================================================================
// Header
// =============================================================================

/// Packed word 0 of an outbound message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Header {
    /// Number of argument words following the header.
    pub len: u16,
    /// Receiving module.
    pub module_id: u8,
    /// API id within that module.
    pub api_id: u8,
}

impl Header {
    /// Creates a header.
    #[must_use]
    pub const fn new(len: u16, module_id: u8, api_id: u8) -> Self {
        Self {
            len,
            module_id,
            api_id,
        }
    }

    /// Header addressed to the XilPM module.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "PLM api ids are defined below 0x100"
    )]
    #[must_use]
    pub const fn libpm(len: u16, api: PlmApiId) -> Self {
        Self::new(len, LIBPM_MODULE_ID, api.as_u32() as u8)
    }

    /// Packs the header into a payload word.
    #[must_use]
    pub const fn to_u32(self) -> u32 {
        ((self.len as u32) << 16) | ((self.module_id as u32) << 8) | (self.api_id as u32)
    }

    /// Unpacks a payload word.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "each field is masked to its width first"
    )]
    #[must_use]
    pub const fn from_u32(word: u32) -> Self {
        Self {
            len: (word >> 16) as u16,
            module_id: ((word >> 8) & 0xFF) as u8,
            api_id: (word & 0xFF) as u8,
        }
    }
}

// =============================================================================
// Payload
// =============================================================================

/// Fixed-size IPI message buffer.
///
/// Words past the ones a message defines are always zero when built here,
/// and ignored when decoded.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
#[repr(transparent)]
pub struct Payload([u32; PAYLOAD_ARG_CNT]);

impl Payload {
    /// An all-zero payload.
    pub const ZERO: Self = Self([0; PAYLOAD_ARG_CNT]);

    /// Builds a payload from a prefix of words, zero-filling the rest.
    ///
    /// Words beyond [`PAYLOAD_ARG_CNT`] are dropped.
    #[must_use]
    pub fn from_slice(words: &[u32]) -> Self {
        let mut payload = Self::ZERO;
        for (slot, word) in payload.0.iter_mut().zip(words) {
            *slot = *word;
        }
        payload
    }

    /// Builds an inbound request: `[api, arg1, arg2, 0, ...]`.
    #[must_use]
    pub const fn request(api: u32, arg1: u32, arg2: u32) -> Self {
        let mut words = [0; PAYLOAD_ARG_CNT];
        words[0] = api;
        words[1] = arg1;
        words[2] = arg2;
        Self(words)
    }

    /// Builds an outbound event with no argument (`len = 0`).
    #[must_use]
    pub const fn pack0(api: PlmApiId) -> Self {
        let mut words = [0; PAYLOAD_ARG_CNT];
        words[0] = Header::libpm(0, api).to_u32();
        Self(words)
    }

    /// Builds an outbound event carrying one argument (`len = 1`).
    #[must_use]
    pub const fn pack1(api: PlmApiId, arg: u32) -> Self {
        let mut words = [0; PAYLOAD_ARG_CNT];
        words[0] = Header::libpm(1, api).to_u32();
        words[1] = arg;
        Self(words)
    }

    /// Builds the response to a request: `[status, 0, ...]`.
    #[must_use]
    pub const fn response(status: Status) -> Self {
        let mut words = [0; PAYLOAD_ARG_CNT];
        words[0] = status.as_u32();
        Self(words)
    }

    /// Returns word `index`, or 0 if it lies past the buffer.
    #[inline]
    #[must_use]
    pub fn word(&self, index: usize) -> u32 {
        self.0.get(index).copied().unwrap_or(0)
    }

    /// Word 0, read as an outbound header.
    #[inline]
    #[must_use]
    pub const fn header(&self) -> Header {
        Header::from_u32(self.0[0])
    }

    /// Returns the raw buffer.
    #[inline]
    #[must_use]
    pub const fn words(&self) -> &[u32; PAYLOAD_ARG_CNT] {
        &self.0
    }
}

impl fmt::Debug for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Payload[")?;
        for (i, word) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{word:#x}")?;
        }
        write!(f, "]")
    }
}
