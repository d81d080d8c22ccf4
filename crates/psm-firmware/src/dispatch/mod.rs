// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Inbound IPI command dispatch.
//!
//! Word 0 of the request selects the handler:
//!
//! | `ApiId` | Handler | Arguments |
//! |---------|---------|-----------|
//! | `DirectPwrDwn` | `direct_power_down` | word 1 = node |
//! | `DirectPwrUp` | `direct_power_up` | word 1 = node |
//! | `FpdHouseclean` | [`houseclean::fpd_house_clean`] | word 1 = function |
//! | `CcixEn` | `p2_irq_enable` | none |
//! | `DomainIso` | [`isolation::domain_iso`] | word 1 = isolation id, word 2 = action |
//!
//! Any other word 0 is rejected with [`Status::InvalidParam`] before any
//! handler runs. A handler's result is reported unchanged.

use psm_abi::{ApiId, NodeId, Payload, PsmError, PsmResult, Status};
use tracing::{debug, trace, warn};

use crate::config::PsmConfig;
use crate::houseclean;
use crate::isolation;
use crate::platform::Platform;


/// Stateless command dispatcher.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dispatcher {
    config: PsmConfig,
}

impl Dispatcher {
    /// Create a dispatcher for the given board.
    #[must_use]
    pub const fn new(config: PsmConfig) -> Self {
        Self { config }
    }

    /// The board configuration in use.
    #[must_use]
    pub const fn config(&self) -> &PsmConfig {
        &self.config
    }

    /// Process one request and return the status for the response.
    pub fn process<P: Platform + ?Sized>(&self, platform: &mut P, payload: &Payload) -> Status {
        trace!(?payload, "ipi request");
        let result = self.dispatch(platform, payload);
        if let Err(err) = result {
            debug!(%err, "ipi request failed");
        }
        Status::from(result)
    }

    fn dispatch<P: Platform + ?Sized>(&self, platform: &mut P, payload: &Payload) -> PsmResult {
        let raw_api = payload.word(0);
        let Some(api) = ApiId::from_u32(raw_api) else {
            warn!(raw_api, "unknown api id");
            return Err(PsmError::InvalidParam);
        };
        debug!(%api, arg1 = payload.word(1), arg2 = payload.word(2), "dispatch");

        match api {
            ApiId::DirectPwrDwn => platform.direct_power_down(NodeId::new(payload.word(1))),
            ApiId::DirectPwrUp => platform.direct_power_up(NodeId::new(payload.word(1))),
            ApiId::FpdHouseclean => houseclean::fpd_house_clean(platform, payload.word(1)),
            ApiId::CcixEn => {
                platform.p2_irq_enable();
                Ok(())
            }
            ApiId::DomainIso => isolation::domain_iso(
                platform,
                self.config.misc_cntrl,
                payload.word(1),
                payload.word(2),
            ),
        }
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(PsmConfig::DEFAULT)
    }
}

/// Process one request with the default board configuration.
pub fn process_command<P: Platform + ?Sized>(platform: &mut P, payload: &Payload) -> Status {
    Dispatcher::default().process(platform, payload)
}
