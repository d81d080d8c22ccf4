// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Shared IPI ABI definitions for the PSM firmware.
//!
//! This crate defines the contract between the PSM (platform-management
//! processor) and the processors that talk to it over IPI:
//! - API identifiers for inbound requests and outbound events
//! - Wire status codes and the internal error type
//! - The fixed-size IPI payload and its packed header word
//! - Argument types (nodes, isolation domains, housekeeping phases)
//! - Register addresses and bit masks touched by the PSM
//!
//! # Design Principles
//!
//! - **No dependencies**: Pure data types, 100% host-testable
//! - **Closed enums**: Every raw word is decoded through `from_u32`, unknown
//!   values never reach a handler
//! - **32-bit words**: The IPI buffers carry `u32` words only
//!
//! # Modules
//!
//! - [`api`]: Inbound `ApiId` and outbound `PlmApiId`
//! - [`status`]: `Status`, `PsmError`, `PsmResult`
//! - [`payload`]: `Payload` and `Header`
//! - [`types`]: `NodeId`, `IsolationId`, `IsolationAction`, `HousecleanFunction`, `IpiMask`
//! - [`regs`]: Register map

#![cfg_attr(not(test), no_std)]

pub mod api;
pub mod payload;
pub mod regs;
pub mod status;
pub mod types;

// Re-export commonly used types at crate root
pub use api::{ApiId, PlmApiId};
pub use payload::{Header, LIBPM_MODULE_ID, PAYLOAD_ARG_CNT, Payload};
pub use status::{PsmError, PsmResult, Status};
pub use types::{HousecleanFunction, IpiMask, IsolationAction, IsolationId, NodeId};
