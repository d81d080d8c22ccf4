// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Shared test infrastructure for integration tests.
//!
//! This module provides:
//! - [`init_tracing`] - routes `tracing` output through the test harness
//! - [`isolation_request`] / [`houseclean_request`] - request builders
//!
//! # Design
//!
//! This module is **not** a test file, so it must comply with full clippy rules.
//! Test-specific allowances (like `unwrap_used`) are only permitted in `*_test.rs` files.

#![allow(dead_code, reason = "each test binary uses a different subset")]

use psm_abi::{ApiId, HousecleanFunction, IsolationAction, IsolationId, Payload};
use tracing_subscriber::EnvFilter;

/// Install a subscriber that writes through the test harness.
///
/// Safe to call from every test; only the first call installs. The filter
/// follows `RUST_LOG` and defaults to `debug`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init()
        .ok();
}

/// `DomainIso` request.
pub const fn isolation_request(id: IsolationId, action: IsolationAction) -> Payload {
    Payload::request(ApiId::DomainIso.as_u32(), id.as_u32(), action.as_u32())
}

/// `FpdHouseclean` request.
pub const fn houseclean_request(function: HousecleanFunction) -> Payload {
    Payload::request(ApiId::FpdHouseclean.as_u32(), function.as_u32(), 0)
}
