// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! FPD housekeeping dispatch.
//!
//! Each request runs exactly one external routine. Phases are not chained
//! and not ordered here; the PLM issues them in sequence.

use psm_abi::{HousecleanFunction, PsmError, PsmResult};
use tracing::{debug, warn};

use crate::platform::FpdHouseclean;

#[cfg(test)]
mod houseclean_test;

/// Run one housekeeping phase.
///
/// Only [`HousecleanFunction::InitStart`] can fail, and its error is
/// returned as-is. Cleanup after a failed pre-housekeeping step belongs to
/// the routine itself.
pub fn run<H: FpdHouseclean + ?Sized>(hc: &mut H, function: HousecleanFunction) -> PsmResult {
    debug!(%function, "fpd houseclean");
    match function {
        HousecleanFunction::InitStart => hc.pre_house_clean()?,
        HousecleanFunction::InitFinish => hc.post_house_clean(),
        HousecleanFunction::Bisr => hc.mbisr(),
        HousecleanFunction::MbistClear => hc.mbist_clear(),
    }
    Ok(())
}

/// Handle an `FpdHouseclean` request from its raw function word.
pub fn fpd_house_clean<H: FpdHouseclean + ?Sized>(hc: &mut H, raw_function: u32) -> PsmResult {
    let Some(function) = HousecleanFunction::from_u32(raw_function) else {
        warn!(raw_function, "unsupported houseclean function");
        return Err(PsmError::InvalidParam);
    };
    run(hc, function)
}
