//! # Advisory Gate
//!
//! Decides whether a fair-split recommendation is worth asking for.
//!
//! ## Decision Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  evaluate(tip, people)                                                  │
//! │       │                                                                 │
//! │       ├── people <= 1 ?          → Skip(SinglePerson)                  │
//! │       │                                                                 │
//! │       ├── tip <= $0.00 ?         → Skip(NoTip)                         │
//! │       │                                                                 │
//! │       ├── tip.cents % people == 0 → Skip(DividesEvenly)                │
//! │       │                                                                 │
//! │       └── otherwise              → Request(AdvisoryRequest)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The same checks run in the split arithmetic (`SplitResult::is_uneven`)
//! and in the advisory service's guards. All three call [`evaluate`], so the
//! classification cannot drift between them.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

/// Shown when the tip is shared by a single person.
pub const SINGLE_PERSON_MESSAGE: &str = "Splitting is only needed for more than one person.";

/// Shown when there is no tip.
pub const NO_TIP_MESSAGE: &str = "No tip to split.";

/// Shown when the tip already splits into whole cents.
pub const DIVIDES_EVENLY_MESSAGE: &str =
    "The tip amount divides evenly, no special suggestion needed.";

/// Shown when the text-generation backend fails.
pub const FALLBACK_MESSAGE: &str =
    "Sorry, I couldn't come up with a suggestion right now. Please try again.";

// =============================================================================
// Gate
// =============================================================================

/// Why no advisory is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Zero or one person.
    SinglePerson,
    /// Tip is zero or negative.
    NoTip,
    /// Tip in cents is a multiple of the people count.
    DividesEvenly,
}

impl SkipReason {
    /// The fixed explanatory text returned instead of an advisory.
    pub fn message(&self) -> &'static str {
        match self {
            SkipReason::SinglePerson => SINGLE_PERSON_MESSAGE,
            SkipReason::NoTip => NO_TIP_MESSAGE,
            SkipReason::DividesEvenly => DIVIDES_EVENLY_MESSAGE,
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::SinglePerson => write!(f, "only one person"),
            SkipReason::NoTip => write!(f, "no tip"),
            SkipReason::DividesEvenly => write!(f, "tip divides evenly"),
        }
    }
}

/// Outcome of the advisory gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvisoryDecision {
    /// Ask the backend.
    Request(AdvisoryRequest),
    /// Answer locally with [`SkipReason::message`].
    Skip(SkipReason),
}

/// Runs the gate checks in their fixed order.
pub fn evaluate(tip_amount: Money, people: u32) -> AdvisoryDecision {
    if people <= 1 {
        return AdvisoryDecision::Skip(SkipReason::SinglePerson);
    }
    if !tip_amount.is_positive() {
        return AdvisoryDecision::Skip(SkipReason::NoTip);
    }
    if tip_amount.remainder_among(people) == 0 {
        return AdvisoryDecision::Skip(SkipReason::DividesEvenly);
    }
    AdvisoryDecision::Request(AdvisoryRequest {
        tip_amount,
        people_count: people,
    })
}

/// Returns true iff a fair-split advisory should be offered.
///
/// ## Example
/// ```rust
/// use tipease_core::advisory::should_offer_advisory;
/// use tipease_core::money::Money;
///
/// assert!(should_offer_advisory(Money::from_cents(750), 4));   // 750 % 4 = 2
/// assert!(!should_offer_advisory(Money::from_cents(750), 3));  // 750 % 3 = 0
/// assert!(!should_offer_advisory(Money::from_cents(750), 1));
/// ```
pub fn should_offer_advisory(tip_amount: Money, people: u32) -> bool {
    matches!(evaluate(tip_amount, people), AdvisoryDecision::Request(_))
}

// =============================================================================
// Request / Result
// =============================================================================

/// A validated (tip, people) pair that is worth sending to the backend.
///
/// ## Invariant
/// `people_count > 1`, `tip_amount > 0`, and the tip in cents is not a
/// multiple of `people_count`. The only ways to obtain one are
/// [`evaluate`] and [`AdvisoryRequest::new`], both of which enforce it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvisoryRequest {
    tip_amount: Money,
    people_count: u32,
}

impl AdvisoryRequest {
    /// Builds a request, rejecting pairs the gate would skip.
    pub fn new(tip_amount: Money, people_count: u32) -> CoreResult<Self> {
        match evaluate(tip_amount, people_count) {
            AdvisoryDecision::Request(request) => Ok(request),
            AdvisoryDecision::Skip(reason) => Err(CoreError::AdvisoryNotNeeded { reason }),
        }
    }

    pub fn tip_amount(&self) -> Money {
        self.tip_amount
    }

    pub fn people_count(&self) -> u32 {
        self.people_count
    }
}

/// How an advisory text came to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvisoryOutcome {
    /// Produced by the text-generation backend.
    Generated,
    /// A fixed explanation; the backend was not called.
    Skipped(SkipReason),
    /// The backend failed; fixed apology text.
    Fallback,
}

/// The text shown to the person. Opaque prose, never numerically checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvisoryResult {
    pub suggestion_text: String,
    pub outcome: AdvisoryOutcome,
}

impl AdvisoryResult {
    pub fn generated(text: impl Into<String>) -> Self {
        AdvisoryResult {
            suggestion_text: text.into(),
            outcome: AdvisoryOutcome::Generated,
        }
    }

    pub fn skipped(reason: SkipReason) -> Self {
        AdvisoryResult {
            suggestion_text: reason.message().to_string(),
            outcome: AdvisoryOutcome::Skipped(reason),
        }
    }

    pub fn fallback(text: impl Into<String>) -> Self {
        AdvisoryResult {
            suggestion_text: text.into(),
            outcome: AdvisoryOutcome::Fallback,
        }
    }

    /// Returns true if the backend failed and the text is the apology.
    pub fn is_fallback(&self) -> bool {
        matches!(self.outcome, AdvisoryOutcome::Fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_order_single_person_first() {
        // Zero tip with one person reports the person count, not the tip
        assert_eq!(
            evaluate(Money::zero(), 1),
            AdvisoryDecision::Skip(SkipReason::SinglePerson)
        );
        assert_eq!(
            evaluate(Money::from_cents(751), 0),
            AdvisoryDecision::Skip(SkipReason::SinglePerson)
        );
    }

    #[test]
    fn test_gate_no_tip() {
        assert_eq!(
            evaluate(Money::zero(), 4),
            AdvisoryDecision::Skip(SkipReason::NoTip)
        );
        assert_eq!(
            evaluate(Money::from_cents(-10), 3),
            AdvisoryDecision::Skip(SkipReason::NoTip)
        );
    }

    #[test]
    fn test_gate_divides_evenly() {
        assert_eq!(
            evaluate(Money::from_cents(750), 3),
            AdvisoryDecision::Skip(SkipReason::DividesEvenly)
        );
    }

    #[test]
    fn test_gate_requests_for_remainder() {
        match evaluate(Money::from_cents(750), 4) {
            AdvisoryDecision::Request(request) => {
                assert_eq!(request.tip_amount().cents(), 750);
                assert_eq!(request.people_count(), 4);
                assert_eq!(request.tip_amount().remainder_among(request.people_count()), 2);
            }
            other => panic!("expected request, got {:?}", other),
        }
    }

    #[test]
    fn test_request_new_rejects_skips() {
        assert!(AdvisoryRequest::new(Money::from_cents(750), 4).is_ok());
        let err = AdvisoryRequest::new(Money::from_cents(750), 3).unwrap_err();
        assert!(matches!(
            err,
            CoreError::AdvisoryNotNeeded {
                reason: SkipReason::DividesEvenly
            }
        ));
    }

    #[test]
    fn test_skip_messages_are_fixed() {
        assert_eq!(
            AdvisoryResult::skipped(SkipReason::SinglePerson).suggestion_text,
            "Splitting is only needed for more than one person."
        );
        assert_eq!(AdvisoryResult::skipped(SkipReason::NoTip).suggestion_text, "No tip to split.");
        assert!(AdvisoryResult::skipped(SkipReason::DividesEvenly)
            .suggestion_text
            .contains("divides evenly"));
    }

    #[test]
    fn test_fallback_flag() {
        assert!(AdvisoryResult::fallback(FALLBACK_MESSAGE).is_fallback());
        assert!(!AdvisoryResult::generated("Alice pays 2 extra cents").is_fallback());
    }
}
