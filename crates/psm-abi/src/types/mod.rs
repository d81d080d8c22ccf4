// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Argument types decoded from IPI payload words.
//!
//! These newtypes and enums keep raw `u32` words from leaking into handlers.

mod arg;
mod id;

#[cfg(test)]
mod id_test;

pub use arg::{HousecleanFunction, IsolationAction, IsolationId};
pub use id::{IpiMask, NodeId};
