// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Volatile MMIO register window.
//!
//! Maps a physical register range onto a virtual base pointer. On the PSM
//! the two are identical (no MMU), but keeping the translation explicit lets
//! the same code drive a remapped window or a host buffer in tests.

use core::ptr::{read_volatile, write_volatile};

use super::traits::RegisterAccess;

/// A window of 32-bit device registers.
pub struct MmioRegisters {
    /// Physical address of the first register in the window.
    phys_base: u32,
    /// Where `phys_base` is mapped.
    virt_base: *mut u32,
    /// Window size in 32-bit words.
    len_words: usize,
}

impl MmioRegisters {
    /// Create a window of `len_words` registers starting at `phys_base`,
    /// mapped at `virt_base`.
    ///
    /// # Safety
    ///
    /// `virt_base` must be valid for volatile reads and writes of
    /// `len_words` aligned `u32` values for the lifetime of the window, and
    /// nothing else may access that memory concurrently.
    #[must_use]
    pub const unsafe fn new(phys_base: u32, virt_base: *mut u32, len_words: usize) -> Self {
        Self {
            phys_base,
            virt_base,
            len_words,
        }
    }

    fn index(&self, addr: u32) -> Option<usize> {
        let offset = addr.checked_sub(self.phys_base)?;
        if offset % 4 != 0 {
            return None;
        }
        let index = (offset / 4) as usize;
        (index < self.len_words).then_some(index)
    }

    fn register_ptr(&self, addr: u32) -> *mut u32 {
        let Some(index) = self.index(addr) else {
            panic!(
                "register {addr:#010x} outside MMIO window at {:#010x}",
                self.phys_base
            );
        };
        // SAFETY: index < len_words, which the constructor guarantees is mapped
        unsafe { self.virt_base.add(index) }
    }
}

impl RegisterAccess for MmioRegisters {
    fn read32(&self, addr: u32) -> u32 {
        let ptr = self.register_ptr(addr);
        // SAFETY: ptr lies inside the mapped window
        unsafe { read_volatile(ptr) }
    }

    fn write32(&mut self, addr: u32, value: u32) {
        let ptr = self.register_ptr(addr);
        // SAFETY: ptr lies inside the mapped window
        unsafe { write_volatile(ptr, value) }
    }

    fn maps(&self, addr: u32) -> bool {
        self.index(addr).is_some()
    }
}
