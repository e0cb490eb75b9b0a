//! # tipease-advisor: Fair-Split Advisory Service
//!
//! Asks a text-generation backend how to share a tip that does not split
//! into whole cents, and never lets a backend fault reach the caller.
//!
//! ## Modules
//!
//! - [`service`] - `FairSplitAdvisor`, the gate guards and the fallback
//! - [`dispatch`] - Background tasks that report results by ticket
//! - [`backend`] - `SuggestionBackend` trait, HTTP and offline backends
//! - [`protocol`] - `{ tipAmount, peopleCount }` / `{ suggestion }` bodies
//! - [`prompt`] - Instruction template for the backend flow
//! - [`config`] - TOML + environment configuration
//! - [`error`] - Advisor error types
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use tipease_advisor::{AdvisorConfig, FairSplitAdvisor};
//! use tipease_core::money::Money;
//!
//! # async fn run() -> tipease_advisor::AdvisorResult<()> {
//! let config = AdvisorConfig::load_or_default(None);
//! let advisor = FairSplitAdvisor::from_config(&config)?;
//!
//! let advice = advisor
//!     .request_fair_split_advisory(Money::from_cents(750), 4)
//!     .await;
//! println!("{}", advice.suggestion_text);
//! # Ok(())
//! # }
//! ```

pub mod backend;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod prompt;
pub mod protocol;
pub mod service;

pub use backend::{build_backend, HttpBackend, OfflineBackend, SuggestionBackend};
pub use config::{AdvisorConfig, BackendKind};
pub use dispatch::{AdvisoryCompletion, AdvisoryDispatcher, DEFAULT_CHANNEL_CAPACITY};
pub use error::{AdvisorError, AdvisorResult};
pub use prompt::{render_instruction, FAIR_SPLIT_TEMPLATE};
pub use protocol::{FairSplitInput, FairSplitOutput};
pub use service::FairSplitAdvisor;
