// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Status codes returned to IPI callers.
//!
//! Inside the firmware every operation returns a [`PsmResult`] and errors
//! travel with `?`. The wire-level [`Status`] word is produced only once, at
//! the IPI boundary, via `Status::from(result)`.

use core::fmt;

#[cfg(test)]
mod status_test;

/// Wire status word written into the response payload.
///
/// Values follow the Xilinx standalone `XST_*` codes so the PLM can compare
/// them against its own constants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Status {
    /// Operation completed.
    Success = 0,
    /// A delegated operation failed internally.
    Failure = 1,
    /// An identifier or argument was outside its closed set.
    InvalidParam = 15,
}

impl Status {
    /// Try to convert from a raw status word.
    #[must_use]
    pub const fn from_u32(value: u32) -> Option<Self> {
        match value {
            0 => Some(Self::Success),
            1 => Some(Self::Failure),
            15 => Some(Self::InvalidParam),
            _ => None,
        }
    }

    /// Returns the raw status word.
    #[inline]
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self as u32
    }

    /// Returns true for [`Status::Success`].
    #[inline]
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}

impl From<PsmResult> for Status {
    fn from(result: PsmResult) -> Self {
        match result {
            Ok(()) => Self::Success,
            Err(err) => err.status(),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Failure => write!(f, "failure"),
            Self::InvalidParam => write!(f, "invalid parameter"),
        }
    }
}

/// Error raised by a PSM operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PsmError {
    /// A delegated operation failed, or a request named something the
    /// hardware map does not contain.
    Failure,
    /// An API id, function id or argument was outside its closed set.
    InvalidParam,
}

impl PsmError {
    /// The wire status reported for this error.
    #[must_use]
    pub const fn status(self) -> Status {
        match self {
            Self::Failure => Status::Failure,
            Self::InvalidParam => Status::InvalidParam,
        }
    }
}

impl fmt::Display for PsmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Failure => write!(f, "operation failed"),
            Self::InvalidParam => write!(f, "invalid parameter"),
        }
    }
}

/// Result of a PSM operation.
pub type PsmResult = Result<(), PsmError>;
