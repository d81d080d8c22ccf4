// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! IPI interrupt service.
//!
//! The IPI interrupt handler calls [`IpiManager::handle_interrupt`] once
//! per interrupt:
//! 1. Reads the pending source bits
//! 2. For a PLM request, reads the payload and dispatches it
//! 3. Writes `[status, 0, ...]` to the PLM response buffer
//! 4. Acknowledges every pending bit
//!
//! Requests from any other channel are acknowledged and dropped.

use psm_abi::{Payload, PsmError, PsmResult, Status};
use tracing::{debug, error, warn};

use crate::config::PsmConfig;
use crate::dispatch::Dispatcher;
use crate::notify;
use crate::platform::{IpiTransport, Platform};

#[cfg(test)]
mod ipi_test;

/// Services IPI interrupts and outbound notifications for one board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IpiManager {
    dispatcher: Dispatcher,
}

impl IpiManager {
    /// Create a manager for the given board.
    #[must_use]
    pub const fn new(config: PsmConfig) -> Self {
        Self {
            dispatcher: Dispatcher::new(config),
        }
    }

    /// The dispatcher used for PLM requests.
    #[must_use]
    pub const fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Service one IPI interrupt.
    ///
    /// Returns the dispatch status of a PLM request, or
    /// [`PsmError::InvalidParam`] if no PLM request was pending. Transport
    /// errors while reading the request or writing the response are
    /// returned as-is.
    pub fn handle_interrupt<H>(&self, hw: &mut H) -> Result<Status, PsmError>
    where
        H: Platform + IpiTransport + ?Sized,
    {
        let plm = self.dispatcher.config().plm_ipi;
        let pending = hw.pending();
        debug!(?pending, "ipi interrupt");

        let result = if pending.contains(plm) {
            self.serve_plm(hw)
        } else {
            warn!(?pending, "ipi from unexpected source");
            Err(PsmError::InvalidParam)
        };

        hw.acknowledge(pending);
        result
    }

    fn serve_plm<H>(&self, hw: &mut H) -> Result<Status, PsmError>
    where
        H: Platform + IpiTransport + ?Sized,
    {
        let plm = self.dispatcher.config().plm_ipi;
        let request = hw
            .read_request(plm)
            .inspect_err(|err| error!(%err, "failed to read plm request"))?;
        let status = self.dispatcher.process(hw, &request);
        hw.write_response(plm, &Payload::response(status))
            .inspect_err(|err| error!(%err, "failed to write plm response"))?;
        Ok(status)
    }

    /// Notify the PLM of a pending power-management event.
    pub fn notify_plm<T: IpiTransport + ?Sized>(&self, transport: &mut T) -> PsmResult {
        notify::notify_plm_event(transport, self.dispatcher.config().plm_ipi)
    }
}

impl Default for IpiManager {
    fn default() -> Self {
        Self::new(PsmConfig::DEFAULT)
    }
}
