// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Domain isolation control.
//!
//! Each CPM5 isolation barrier is one field of `PSM_LOCAL.MISC_CNTRL`.
//! Asserting a barrier sets its field, deasserting clears it, and every
//! other bit of the register is preserved by a single read-modify-write.
//! There is no read-back: the hardware takes the new value immediately.
//!
//! A request naming an unknown barrier or a non-boolean action is a
//! configuration error on the caller's side. It is reported as
//! [`PsmError::Failure`] and leaves the register untouched.

use psm_abi::regs::{
    PSM_LOCAL_MISC_CNTRL_CPM5_LPD, PSM_LOCAL_MISC_CNTRL_CPM5_LPD_DFX,
    PSM_LOCAL_MISC_CNTRL_CPM5_PL, PSM_LOCAL_MISC_CNTRL_CPM5_PL_DFX,
};
use psm_abi::{IsolationAction, IsolationId, PsmError, PsmResult};
use tracing::{debug, error};

use crate::platform::RegisterAccess;


/// Field of the control register owned by `id`.
#[must_use]
pub const fn isolation_mask(id: IsolationId) -> u32 {
    match id {
        IsolationId::Cpm5Lpd => PSM_LOCAL_MISC_CNTRL_CPM5_LPD,
        IsolationId::Cpm5LpdDfx => PSM_LOCAL_MISC_CNTRL_CPM5_LPD_DFX,
        IsolationId::Cpm5Pl => PSM_LOCAL_MISC_CNTRL_CPM5_PL,
        IsolationId::Cpm5PlDfx => PSM_LOCAL_MISC_CNTRL_CPM5_PL_DFX,
    }
}

/// Isolation controller bound to one control register.
pub struct DomainIsolation<'r, R: RegisterAccess + ?Sized> {
    regs: &'r mut R,
    misc_cntrl: u32,
}

impl<'r, R: RegisterAccess + ?Sized> DomainIsolation<'r, R> {
    /// Bind to the control register at `misc_cntrl`.
    pub const fn new(regs: &'r mut R, misc_cntrl: u32) -> Self {
        Self { regs, misc_cntrl }
    }

    /// Apply a decoded request: one read-modify-write of the barrier's field.
    pub fn set(&mut self, id: IsolationId, action: IsolationAction) {
        let mask = isolation_mask(id);
        let value = action.field_value(mask);
        debug!(%id, %action, mask, "domain isolation");
        self.regs.rmw32(self.misc_cntrl, mask, value);
    }

    /// Decode and apply raw payload words.
    ///
    /// The action is checked first, then the barrier, then that the
    /// control register is reachable; any failing returns
    /// [`PsmError::Failure`] before the register is touched.
    pub fn apply_raw(&mut self, raw_id: u32, raw_action: u32) -> PsmResult {
        let Some(action) = IsolationAction::from_u32(raw_action) else {
            error!(raw_action, "isolation action not defined");
            return Err(PsmError::Failure);
        };
        let Some(id) = IsolationId::from_u32(raw_id) else {
            error!(raw_id, "isolation index not identified");
            return Err(PsmError::Failure);
        };
        if !self.regs.maps(self.misc_cntrl) {
            error!(addr = self.misc_cntrl, "control register not mapped");
            return Err(PsmError::Failure);
        }
        self.set(id, action);
        Ok(())
    }
}

/// Handle a `DomainIso` request against the register at `misc_cntrl`.
pub fn domain_iso<R: RegisterAccess + ?Sized>(
    regs: &mut R,
    misc_cntrl: u32,
    raw_id: u32,
    raw_action: u32,
) -> PsmResult {
    DomainIsolation::new(regs, misc_cntrl).apply_raw(raw_id, raw_action)
}
