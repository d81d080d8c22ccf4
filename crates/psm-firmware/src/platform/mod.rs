// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Platform abstraction for the PSM core.
//!
//! The core never touches a global register symbol or calls a sequencer by
//! name. Every collaborator is reached through a trait, so tests can run the
//! full dispatch path against [`MockPlatform`].


#[cfg(test)]
mod traits_test;


// Mock requires alloc, only available with std or test
#[cfg(any(test, feature = "std"))]
mod mock;
#[cfg(any(test, feature = "mmio"))]
mod mmio;
mod traits;

#[cfg(any(test, feature = "std"))]
pub use mock::{Call, MockPlatform};
#[cfg(any(test, feature = "mmio"))]
pub use mmio::MmioRegisters;
pub use traits::{FpdHouseclean, GicProxy, IpiTransport, Platform, PowerSequencer, RegisterAccess};
