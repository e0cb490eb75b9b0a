//! # Error Types
//!
//! Domain-specific error types for tipease-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tipease-core errors (this file)                                       │
//! │  ├── CoreError        - Advisory invariant violations                  │
//! │  └── ValidationError  - Rejected option values                         │
//! │                                                                         │
//! │  tipease-advisor errors (separate crate)                               │
//! │  └── AdvisorError     - Backend / transport / config failures          │
//! │                                                                         │
//! │  Flow: AdvisorError → logged → fallback text → presentation layer      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Numeric field text never produces an error: it is normalized to a safe
//! default in [`crate::input`].

use thiserror::Error;

use crate::advisory::SkipReason;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An advisory request was built for a split that needs no advice.
    ///
    /// ## When This Occurs
    /// - One person (or none) sharing the tip
    /// - No tip at all
    /// - Tip already divides into whole cents per person
    #[error("Advisory request not valid: {reason}")]
    AdvisoryNotNeeded { reason: SkipReason },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors for option-style values (not numeric fields).
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::AdvisoryNotNeeded {
            reason: SkipReason::DividesEvenly,
        };
        assert!(err.to_string().contains("divides evenly"));

        let err = ValidationError::NotAllowed {
            field: "tip".to_string(),
            allowed: vec!["10".to_string(), "custom".to_string()],
        };
        assert_eq!(err.to_string(), "tip must be one of: [\"10\", \"custom\"]");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::NotAllowed {
            field: "tip".to_string(),
            allowed: vec![],
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
