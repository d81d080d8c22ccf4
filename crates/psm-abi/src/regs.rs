// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! PSM register map.
//!
//! Physical addresses of the registers the PSM core writes directly, and
//! the bit fields it owns inside them.
//!
//! ```text
//! 0xFFC9_0000  PSM_LOCAL base
//! 0xFFC9_1000    MISC_CNTRL   (CPM5 isolation fields, bits 0-3)
//! ```

/// Base address of the `PSM_LOCAL` register block.
pub const PSM_LOCAL_BASEADDR: u32 = 0xFFC9_0000;

/// Offset of `MISC_CNTRL` inside `PSM_LOCAL`.
pub const PSM_LOCAL_MISC_CNTRL_OFFSET: u32 = 0x0000_1000;

/// `PSM_LOCAL.MISC_CNTRL`: shared control register holding the CPM5
/// isolation fields. Other bits belong to unrelated PSM features and must
/// never be disturbed.
pub const PSM_LOCAL_MISC_CNTRL: u32 = PSM_LOCAL_BASEADDR + PSM_LOCAL_MISC_CNTRL_OFFSET;

/// Isolation between CPM5 and LPD.
pub const PSM_LOCAL_MISC_CNTRL_CPM5_LPD: u32 = 0x0000_0001;

/// Isolation between CPM5 and LPD, DFX path.
pub const PSM_LOCAL_MISC_CNTRL_CPM5_LPD_DFX: u32 = 0x0000_0002;

/// Isolation between CPM5 and PL.
pub const PSM_LOCAL_MISC_CNTRL_CPM5_PL: u32 = 0x0000_0004;

/// Isolation between CPM5 and PL, DFX path.
pub const PSM_LOCAL_MISC_CNTRL_CPM5_PL_DFX: u32 = 0x0000_0008;

/// All isolation fields owned by the PSM in `MISC_CNTRL`.
pub const PSM_LOCAL_MISC_CNTRL_CPM5_ISO_ALL: u32 = PSM_LOCAL_MISC_CNTRL_CPM5_LPD
    | PSM_LOCAL_MISC_CNTRL_CPM5_LPD_DFX
    | PSM_LOCAL_MISC_CNTRL_CPM5_PL
    | PSM_LOCAL_MISC_CNTRL_CPM5_PL_DFX;

// Compile-time verification that the isolation fields do not overlap
const _: () = {
    assert!(PSM_LOCAL_MISC_CNTRL_CPM5_LPD & PSM_LOCAL_MISC_CNTRL_CPM5_LPD_DFX == 0);
    assert!(PSM_LOCAL_MISC_CNTRL_CPM5_LPD & PSM_LOCAL_MISC_CNTRL_CPM5_PL == 0);
    assert!(PSM_LOCAL_MISC_CNTRL_CPM5_LPD & PSM_LOCAL_MISC_CNTRL_CPM5_PL_DFX == 0);
    assert!(PSM_LOCAL_MISC_CNTRL_CPM5_LPD_DFX & PSM_LOCAL_MISC_CNTRL_CPM5_PL == 0);
    assert!(PSM_LOCAL_MISC_CNTRL_CPM5_LPD_DFX & PSM_LOCAL_MISC_CNTRL_CPM5_PL_DFX == 0);
    assert!(PSM_LOCAL_MISC_CNTRL_CPM5_PL & PSM_LOCAL_MISC_CNTRL_CPM5_PL_DFX == 0);
    assert!(PSM_LOCAL_MISC_CNTRL % 4 == 0);
};
