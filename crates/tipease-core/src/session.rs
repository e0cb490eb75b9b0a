//! # Split Session
//!
//! The state owned by one interactive calculator session: the raw form
//! fields, the split derived from them, and the advisory request lifecycle.
//!
//! ## Advisory State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │           begin_advisory()                 complete_advisory(current)   │
//! │   Idle ───────────────────► Requesting ─────────────┬──► Succeeded     │
//! │    ▲                            │   ▲               └──► Failed        │
//! │    │                            │   │ begin_advisory() again           │
//! │    │   edit that changes        │   │ (new ticket supersedes)          │
//! │    └─── (tip, people) ◄─────────┘───┘                                  │
//! │                                                                         │
//! │  complete_advisory(stale ticket) → ignored, state unchanged             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ordering Policy
//! Latest request wins. Every `begin_advisory` hands out a fresh ticket and
//! only a result carrying the current ticket is applied. Editing the bill,
//! tip or head count in a way that changes the `(tip, people)` pair drops
//! back to `Idle`, so a response for the old numbers arriving later is
//! discarded.

use serde::Serialize;
use tracing::debug;

use crate::advisory::{evaluate, AdvisoryDecision, AdvisoryRequest, AdvisoryResult};
use crate::input::BillFields;
use crate::money::Money;
use crate::split::{BillInput, SplitResult};
use crate::types::TipSelection;

/// Identifies one advisory request within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct AdvisoryTicket(u64);

impl AdvisoryTicket {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Lifecycle of the advisory shown next to the split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum AdvisoryState {
    /// Nothing requested for the current numbers.
    Idle,
    /// A request is in flight.
    Requesting {
        ticket: AdvisoryTicket,
        #[serde(skip)]
        request: AdvisoryRequest,
    },
    /// Backend text (or a fixed explanation) is available.
    Succeeded { text: String },
    /// Backend failed; `text` is the fallback message.
    Failed { text: String },
}

impl AdvisoryState {
    pub fn is_pending(&self) -> bool {
        matches!(self, AdvisoryState::Requesting { .. })
    }

    /// Text to show, if any. Succeeded and Failed read the same way.
    pub fn suggestion_text(&self) -> Option<&str> {
        match self {
            AdvisoryState::Succeeded { text } | AdvisoryState::Failed { text } => Some(text),
            _ => None,
        }
    }
}

/// One person's calculator session.
#[derive(Debug, Clone)]
pub struct SplitSession {
    fields: BillFields,
    input: BillInput,
    split: SplitResult,
    advisory: AdvisoryState,
    /// `(tip, people)` the advisory state belongs to.
    advisory_subject: Option<(Money, u32)>,
    last_ticket: u64,
}

impl Default for SplitSession {
    fn default() -> Self {
        SplitSession::new()
    }
}

impl SplitSession {
    /// Creates a session with the default form (empty bill, 15%, 1 person).
    pub fn new() -> Self {
        Self::with_fields(BillFields::default())
    }

    /// Creates a session from pre-filled form fields.
    pub fn with_fields(fields: BillFields) -> Self {
        let input = fields.to_input();
        SplitSession {
            fields,
            input,
            split: input.split(),
            advisory: AdvisoryState::Idle,
            advisory_subject: None,
            last_ticket: 0,
        }
    }

    // =========================================================================
    // Edits
    // =========================================================================

    pub fn set_bill(&mut self, text: &str) {
        self.fields.bill = text.to_string();
        self.recompute();
    }

    pub fn select_tip(&mut self, selection: TipSelection) {
        self.fields.tip = selection;
        self.recompute();
    }

    /// Typing a custom tip also selects the custom option.
    pub fn set_custom_tip(&mut self, text: &str) {
        self.fields.custom_tip = text.to_string();
        self.fields.tip = TipSelection::Custom;
        self.recompute();
    }

    pub fn set_people(&mut self, text: &str) {
        self.fields.people = text.to_string();
        self.recompute();
    }

    fn recompute(&mut self) {
        self.input = self.fields.to_input();
        self.split = self.input.split();

        let subject = (self.split.tip_amount, self.input.people);
        if self.advisory_subject.is_some_and(|previous| previous != subject) {
            debug!(
                tip_cents = subject.0.cents(),
                people = subject.1,
                "Split changed, dropping advisory"
            );
            self.advisory = AdvisoryState::Idle;
            self.advisory_subject = None;
        }
    }

    // =========================================================================
    // Advisory Lifecycle
    // =========================================================================

    /// Starts an advisory request for the current split.
    ///
    /// Returns `None` when the split is even (the suggestion action is not
    /// offered). A request already in flight is superseded.
    pub fn begin_advisory(&mut self) -> Option<(AdvisoryTicket, AdvisoryRequest)> {
        let request = match evaluate(self.split.tip_amount, self.input.people) {
            AdvisoryDecision::Request(request) => request,
            AdvisoryDecision::Skip(reason) => {
                debug!(%reason, "Advisory not offered");
                return None;
            }
        };

        self.last_ticket += 1;
        let ticket = AdvisoryTicket(self.last_ticket);
        self.advisory = AdvisoryState::Requesting { ticket, request };
        self.advisory_subject = Some((request.tip_amount(), request.people_count()));
        debug!(ticket = ticket.id(), "Advisory requested");
        Some((ticket, request))
    }

    /// Applies a finished advisory if its ticket is still current.
    ///
    /// Returns false (and changes nothing) for superseded or abandoned
    /// requests.
    pub fn complete_advisory(&mut self, ticket: AdvisoryTicket, result: AdvisoryResult) -> bool {
        let is_current = matches!(
            &self.advisory,
            AdvisoryState::Requesting { ticket: current, .. } if *current == ticket
        );
        if !is_current {
            debug!(ticket = ticket.id(), "Discarding stale advisory result");
            return false;
        }

        self.advisory = if result.is_fallback() {
            AdvisoryState::Failed {
                text: result.suggestion_text,
            }
        } else {
            AdvisoryState::Succeeded {
                text: result.suggestion_text,
            }
        };
        true
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn fields(&self) -> &BillFields {
        &self.fields
    }

    pub fn input(&self) -> BillInput {
        self.input
    }

    pub fn split(&self) -> SplitResult {
        self.split
    }

    pub fn advisory(&self) -> &AdvisoryState {
        &self.advisory
    }

    /// Whether the "get fair split suggestion" action should be shown.
    pub fn can_request_advisory(&self) -> bool {
        self.split.is_uneven
    }
}
