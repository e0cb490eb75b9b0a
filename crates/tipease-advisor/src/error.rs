//! # Advisor Error Types
//!
//! Error types for advisory operations.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Advisor Error Categories                           │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │  Configuration  │  │   Transport     │  │     Response            │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  InvalidConfig  │  │  Connection     │  │  InvalidResponse        │ │
//! │  │  InvalidUrl     │  │  Timeout        │  │  EmptySuggestion        │ │
//! │  │  ConfigLoad/Save│  │  HttpStatus     │  │                         │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! │                                                                         │
//! │  None of these reach the presentation layer: the advisory service      │
//! │  logs them and substitutes the fallback message.                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Result type alias for advisor operations.
pub type AdvisorResult<T> = Result<T, AdvisorError>;

/// Advisor error type covering configuration and backend failures.
#[derive(Debug, Error)]
pub enum AdvisorError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Invalid advisor configuration.
    #[error("Invalid advisor configuration: {0}")]
    InvalidConfig(String),

    /// Invalid backend endpoint URL.
    #[error("Invalid backend endpoint: {0}")]
    InvalidUrl(String),

    /// Failed to load config file.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    /// Failed to save config file.
    #[error("Failed to save config: {0}")]
    ConfigSaveFailed(String),

    // =========================================================================
    // Transport Errors
    // =========================================================================
    /// Could not reach the backend.
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Backend did not answer in time.
    #[error("Backend timeout after {0} seconds")]
    Timeout(u64),

    /// Backend answered with a non-success status.
    #[error("Backend returned HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    // =========================================================================
    // Response Errors
    // =========================================================================
    /// Response body was not `{ "suggestion": string }`.
    #[error("Invalid backend response: {0}")]
    InvalidResponse(String),

    /// Response carried a blank suggestion.
    #[error("Backend returned an empty suggestion")]
    EmptySuggestion,

    // =========================================================================
    // Internal Errors
    // =========================================================================
    /// The advisory task itself failed (panicked or was cancelled).
    #[error("Internal error: {0}")]
    Internal(String),
}

// =============================================================================
// Error Conversions
// =============================================================================

impl From<serde_json::Error> for AdvisorError {
    fn from(err: serde_json::Error) -> Self {
        AdvisorError::InvalidResponse(err.to_string())
    }
}

impl From<std::io::Error> for AdvisorError {
    fn from(err: std::io::Error) -> Self {
        AdvisorError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::de::Error> for AdvisorError {
    fn from(err: toml::de::Error) -> Self {
        AdvisorError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::ser::Error> for AdvisorError {
    fn from(err: toml::ser::Error) -> Self {
        AdvisorError::ConfigSaveFailed(err.to_string())
    }
}

impl From<tokio::task::JoinError> for AdvisorError {
    fn from(err: tokio::task::JoinError) -> Self {
        AdvisorError::Internal(err.to_string())
    }
}

// =============================================================================
// Error Categorization
// =============================================================================

impl AdvisorError {
    /// Maps a reqwest failure, attaching the configured timeout.
    pub fn from_transport(err: reqwest::Error, timeout_secs: u64) -> Self {
        if err.is_timeout() {
            AdvisorError::Timeout(timeout_secs)
        } else if err.is_decode() {
            AdvisorError::InvalidResponse(err.to_string())
        } else if let Some(status) = err.status() {
            AdvisorError::HttpStatus {
                status: status.as_u16(),
                body: err.to_string(),
            }
        } else {
            AdvisorError::ConnectionFailed(err.to_string())
        }
    }

    /// Returns true if asking again later might succeed.
    ///
    /// The service never retries on its own; this only feeds the log line so
    /// operators can tell an outage from a broken integration.
    pub fn is_transient(&self) -> bool {
        match self {
            AdvisorError::ConnectionFailed(_) | AdvisorError::Timeout(_) => true,
            AdvisorError::HttpStatus { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }

    /// Returns true if this error indicates a configuration problem.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            AdvisorError::InvalidConfig(_)
                | AdvisorError::InvalidUrl(_)
                | AdvisorError::ConfigLoadFailed(_)
                | AdvisorError::ConfigSaveFailed(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_errors() {
        assert!(AdvisorError::ConnectionFailed("refused".into()).is_transient());
        assert!(AdvisorError::Timeout(30).is_transient());
        assert!(AdvisorError::HttpStatus {
            status: 503,
            body: String::new()
        }
        .is_transient());
        assert!(AdvisorError::HttpStatus {
            status: 429,
            body: String::new()
        }
        .is_transient());

        assert!(!AdvisorError::HttpStatus {
            status: 400,
            body: String::new()
        }
        .is_transient());
        assert!(!AdvisorError::EmptySuggestion.is_transient());
        assert!(!AdvisorError::InvalidConfig("bad".into()).is_transient());
    }

    #[test]
    fn test_config_errors() {
        assert!(AdvisorError::InvalidUrl("ftp://x".into()).is_config_error());
        assert!(!AdvisorError::Timeout(5).is_config_error());
    }

    #[test]
    fn test_error_display() {
        let err = AdvisorError::HttpStatus {
            status: 502,
            body: "bad gateway".into(),
        };
        assert_eq!(err.to_string(), "Backend returned HTTP 502: bad gateway");
        assert_eq!(
            AdvisorError::Timeout(30).to_string(),
            "Backend timeout after 30 seconds"
        );
    }

    #[test]
    fn test_json_error_is_invalid_response() {
        let err: AdvisorError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, AdvisorError::InvalidResponse(_)));
    }
}
