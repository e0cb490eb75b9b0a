//! # Fair-Split Advisory Service
//!
//! Answers "how should we share this tip?" for one `(tip, people)` pair.
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  request_fair_split_advisory(tip, people)                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  evaluate(tip, people) ── Skip(reason) ──► fixed message (no call)     │
//! │       │                                                                 │
//! │       ▼ Request                                                         │
//! │  backend.suggest(request)  (one attempt, no retry)                      │
//! │       │                                                                 │
//! │       ├── Ok(text)  ──► Generated(text)                                │
//! │       └── Err(e)    ──► error!(...) ──► Fallback(apology)              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Callers always get text back. Backend faults are logged here and never
//! returned.

use std::sync::Arc;
use tracing::{debug, error, info};

use tipease_core::advisory::{
    evaluate, AdvisoryDecision, AdvisoryRequest, AdvisoryResult, FALLBACK_MESSAGE,
};
use tipease_core::money::Money;

use crate::backend::{build_backend, SuggestionBackend};
use crate::config::AdvisorConfig;
use crate::error::AdvisorResult;
use crate::prompt::render_instruction;

/// Advisory service over a pluggable backend.
#[derive(Clone)]
pub struct FairSplitAdvisor {
    backend: Arc<dyn SuggestionBackend>,
    fallback_message: String,
}

impl std::fmt::Debug for FairSplitAdvisor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FairSplitAdvisor")
            .field("fallback_message", &self.fallback_message)
            .finish_non_exhaustive()
    }
}

impl FairSplitAdvisor {
    pub fn new(backend: Arc<dyn SuggestionBackend>) -> Self {
        FairSplitAdvisor {
            backend,
            fallback_message: FALLBACK_MESSAGE.to_string(),
        }
    }

    /// Replaces the apology shown when the backend fails.
    pub fn with_fallback_message(mut self, message: impl Into<String>) -> Self {
        self.fallback_message = message.into();
        self
    }

    /// Builds the backend named in `config` and applies its message overrides.
    pub fn from_config(config: &AdvisorConfig) -> AdvisorResult<Self> {
        let backend = build_backend(config)?;
        Ok(Self::new(backend).with_fallback_message(config.fallback_message()))
    }

    /// Returns advisory text for a tip shared by `people`.
    ///
    /// Single person, no tip and even splits are answered locally with their
    /// fixed messages. Everything else makes one backend call.
    pub async fn request_fair_split_advisory(&self, tip_amount: Money, people: u32) -> AdvisoryResult {
        match evaluate(tip_amount, people) {
            AdvisoryDecision::Skip(reason) => {
                debug!(
                    tip_cents = tip_amount.cents(),
                    people,
                    %reason,
                    "Advisory answered without backend"
                );
                AdvisoryResult::skipped(reason)
            }
            AdvisoryDecision::Request(request) => self.advise(&request).await,
        }
    }

    /// Asks the backend about an already-gated request.
    pub async fn advise(&self, request: &AdvisoryRequest) -> AdvisoryResult {
        debug!(instruction = %render_instruction(request), "Fair-split instruction");

        match self.backend.suggest(request).await {
            Ok(text) => {
                info!(
                    tip_cents = request.tip_amount().cents(),
                    people = request.people_count(),
                    "Fair-split suggestion generated"
                );
                AdvisoryResult::generated(text)
            }
            Err(e) => {
                error!(
                    tip_cents = request.tip_amount().cents(),
                    people = request.people_count(),
                    transient = e.is_transient(),
                    "Error generating tip split suggestion: {}",
                    e
                );
                AdvisoryResult::fallback(self.fallback_message.clone())
            }
        }
    }

    pub fn fallback_message(&self) -> &str {
        &self.fallback_message
    }
}
