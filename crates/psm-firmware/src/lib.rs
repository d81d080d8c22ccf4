// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! # PSM Firmware Core
//!
//! Command dispatch and power-domain sequencing for the platform-management
//! processor (PSM).
//!
//! This crate:
//! - Decodes inbound IPI requests and routes them to their handler
//! - Raises and drops the CPM5 domain isolation barriers
//! - Runs the FPD housekeeping phases through external sequencers
//! - Notifies the PLM of pending power-management events
//!
//! Everything that touches hardware goes through the traits in
//! [`platform`], so the whole core runs on the host against
//! [`platform::MockPlatform`].
//!
//! ## Execution model
//!
//! The PSM services one IPI at a time, to completion, from its interrupt
//! handler. Nothing here blocks, retries, or keeps state between requests.

#![cfg_attr(not(any(test, feature = "std")), no_std)]

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod config;
pub mod dispatch;
pub mod houseclean;
pub mod ipi;
pub mod isolation;
mod notify;
pub mod platform;

// Re-export commonly used types at crate root
pub use config::PsmConfig;
pub use dispatch::{Dispatcher, process_command};
pub use ipi::IpiManager;
pub use psm_abi::{ApiId, Payload, PsmError, PsmResult, Status};

/// Crate version.
pub const VERSION: &str = match option_env!("PSM_VERSION") {
    Some(v) => v,
    None => "unknown",
};

#[cfg(test)]
mod lib_test;
