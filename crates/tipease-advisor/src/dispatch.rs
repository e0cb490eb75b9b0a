//! # Advisory Dispatch
//!
//! Runs advisory requests off the session task and reports back over a
//! channel.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  session task                        spawned task (one per request)     │
//! │  ────────────                        ──────────────────────────────     │
//! │  begin_advisory() ─► dispatch(ticket, request) ─► advisor.advise()      │
//! │                                                        │                │
//! │  complete_advisory(ticket, result) ◄── mpsc ◄── AdvisoryCompletion      │
//! │  (stale tickets ignored by the session)                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! In-flight calls are never cancelled. A task that panics still reports
//! the fallback text for its ticket.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error, warn};

use tipease_core::advisory::{AdvisoryRequest, AdvisoryResult};
use tipease_core::session::AdvisoryTicket;

use crate::error::AdvisorError;
use crate::service::FairSplitAdvisor;

/// Default completion channel capacity.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 16;

/// A finished advisory tagged with the ticket it was issued for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvisoryCompletion {
    pub ticket: AdvisoryTicket,
    pub result: AdvisoryResult,
}

/// Spawns advisory tasks and funnels their results into one receiver.
#[derive(Clone)]
pub struct AdvisoryDispatcher {
    advisor: FairSplitAdvisor,
    tx: mpsc::Sender<AdvisoryCompletion>,
}

impl AdvisoryDispatcher {
    pub fn new(
        advisor: FairSplitAdvisor,
        capacity: usize,
    ) -> (Self, mpsc::Receiver<AdvisoryCompletion>) {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        (AdvisoryDispatcher { advisor, tx }, rx)
    }

    /// Starts one advisory call in the background.
    pub fn dispatch(&self, ticket: AdvisoryTicket, request: AdvisoryRequest) -> JoinHandle<()> {
        let advisor = self.advisor.clone();
        let tx = self.tx.clone();

        tokio::spawn(async move {
            let fallback = advisor.fallback_message().to_string();
            let call = tokio::spawn(async move { advisor.advise(&request).await });

            let result = match call.await {
                Ok(result) => result,
                Err(e) => {
                    let err = AdvisorError::from(e);
                    error!(ticket = ticket.id(), "Advisory task failed: {}", err);
                    AdvisoryResult::fallback(fallback)
                }
            };

            debug!(ticket = ticket.id(), "Advisory finished");
            if tx.send(AdvisoryCompletion { ticket, result }).await.is_err() {
                warn!(ticket = ticket.id(), "Session gone, dropping advisory result");
            }
        })
    }
}
