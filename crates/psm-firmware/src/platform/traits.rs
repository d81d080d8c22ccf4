// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Platform abstraction traits.

use psm_abi::{IpiMask, NodeId, Payload, PsmError, PsmResult};

/// Access to 32-bit memory-mapped registers.
///
/// Addresses are physical register addresses as listed in
/// [`psm_abi::regs`]; the implementation owns the translation to whatever
/// the core can dereference.
pub trait RegisterAccess {
    /// Read a register.
    fn read32(&self, addr: u32) -> u32;

    /// Write a register.
    fn write32(&mut self, addr: u32, value: u32);

    /// Returns true if `addr` names a register this backend can reach.
    ///
    /// `read32`/`write32` on an unreachable address may panic; callers that
    /// take addresses from configuration check here first.
    fn maps(&self, addr: u32) -> bool {
        let _ = addr;
        true
    }

    /// Read-modify-write: replace the bits selected by `mask` with the
    /// matching bits of `value`, leaving every other bit untouched.
    ///
    /// Issues exactly one read and one write.
    fn rmw32(&mut self, addr: u32, mask: u32, value: u32) {
        let current = self.read32(addr);
        self.write32(addr, (current & !mask) | (value & mask));
    }
}

/// Direct power up/down state machines, owned outside this core.
pub trait PowerSequencer {
    /// Power down `node`.
    fn direct_power_down(&mut self, node: NodeId) -> PsmResult;

    /// Power up `node`.
    fn direct_power_up(&mut self, node: NodeId) -> PsmResult;
}

/// FPD housekeeping routines, owned outside this core.
///
/// Only the pre-housekeeping step can fail; the others always complete.
pub trait FpdHouseclean {
    /// Pre-housekeeping for the FPD.
    fn pre_house_clean(&mut self) -> PsmResult;

    /// Post-housekeeping for the FPD.
    fn post_house_clean(&mut self);

    /// Built-in self-repair of FPD memories.
    fn mbisr(&mut self);

    /// Clear FPD MBIST state.
    fn mbist_clear(&mut self);
}

/// GIC proxy driver, owned outside this core.
pub trait GicProxy {
    /// Enable the P2 wake interrupt used by CCIX.
    fn p2_irq_enable(&mut self);
}

/// Everything the command dispatcher needs from the hardware.
pub trait Platform: RegisterAccess + PowerSequencer + FpdHouseclean + GicProxy {}

impl<T: RegisterAccess + PowerSequencer + FpdHouseclean + GicProxy> Platform for T {}

/// IPI hardware channel of the PSM.
///
/// Delivery is synchronous and reliable; a failed call is reported, never
/// retried by the caller.
pub trait IpiTransport {
    /// Send `payload` to the channels in `dest` and raise their interrupt.
    fn send(&mut self, dest: IpiMask, payload: &Payload) -> PsmResult;

    /// Source bits currently pending in the interrupt status register.
    fn pending(&self) -> IpiMask;

    /// Read the request buffer written by `src`.
    fn read_request(&mut self, src: IpiMask) -> Result<Payload, PsmError>;

    /// Write the response buffer read back by `dest`.
    fn write_response(&mut self, dest: IpiMask, payload: &Payload) -> PsmResult;

    /// Clear the pending bits in `mask`.
    fn acknowledge(&mut self, mask: IpiMask);
}
