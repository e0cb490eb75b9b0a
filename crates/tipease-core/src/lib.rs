//! # tipease-core: Pure Business Logic for TipEase
//!
//! This crate holds the bill-splitting rules as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         TipEase Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                Presentation (apps/tipease-cli)                  │   │
//! │  │      bill text ─► tip choice ─► people text ─► suggestion       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ tipease-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐  ┌──────────┐  ┌──────────┐  ┌──────────────┐   │   │
//! │  │   │  input   │─►│  split   │─►│ advisory │  │   session    │   │   │
//! │  │   │normalize │  │  tip,    │  │   gate   │  │ state machine│   │   │
//! │  │   │  fields  │  │  total   │  │          │  │   tickets    │   │   │
//! │  │   └──────────┘  └──────────┘  └──────────┘  └──────────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ AdvisoryRequest                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            tipease-advisor (text-generation backend)            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`types`] - Tip rate and tip selection
//! - [`input`] - Normalization of raw form text
//! - [`split`] - Split arithmetic (tip, total, per-person share)
//! - [`advisory`] - Advisory gate, request and result types
//! - [`session`] - Interactive session state and advisory ordering
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use tipease_core::input::BillFields;
//! use tipease_core::types::TipSelection;
//!
//! let fields = BillFields {
//!     bill: "50.00".to_string(),
//!     tip: TipSelection::Preset(15),
//!     custom_tip: String::new(),
//!     people: "4".to_string(),
//! };
//!
//! let split = fields.to_input().split();
//! assert_eq!(split.tip_amount.cents(), 750);
//! assert!(split.is_uneven); // 750 cents do not split four ways
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod advisory;
pub mod error;
pub mod input;
pub mod money;
pub mod session;
pub mod split;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use advisory::{
    evaluate, should_offer_advisory, AdvisoryDecision, AdvisoryOutcome, AdvisoryRequest,
    AdvisoryResult, SkipReason,
};
pub use error::{CoreError, CoreResult, ValidationError};
pub use input::BillFields;
pub use money::Money;
pub use session::{AdvisoryState, AdvisoryTicket, SplitSession};
pub use split::{compute_split, BillInput, SplitResult};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Quick-pick tip percentages.
pub const TIP_PRESETS: [u32; 3] = [10, 15, 20];

/// Tip percentage selected when a session starts.
pub const DEFAULT_TIP_PERCENT: u32 = 15;

/// Head count used when the people field is empty or unusable.
pub const DEFAULT_PEOPLE: u32 = 1;
