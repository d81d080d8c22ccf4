// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Outbound event notification to the PLM.
//!
//! Callers go through [`crate::IpiManager::notify_plm`], which supplies the
//! board's PLM channel.

use psm_abi::{IpiMask, Payload, PlmApiId, PsmResult};
use tracing::error;

use crate::platform::IpiTransport;


/// Tell the PLM that a power-management event is pending.
///
/// Sends `[Header(len 0, LIBPM, PsmToPlmEvent), 0, ...]` to `plm` once. A
/// failed send is logged and returned; there is no retry.
pub fn notify_plm_event<T: IpiTransport + ?Sized>(transport: &mut T, plm: IpiMask) -> PsmResult {
    let payload = Payload::pack0(PlmApiId::PsmToPlmEvent);
    transport.send(plm, &payload).inspect_err(|err| {
        error!(%err, dest = ?plm, "psm to plm event send failed");
    })
}
