//! # Suggestion Backends
//!
//! The text generator behind the advisory service.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    trait SuggestionBackend                              │
//! │                 suggest(&AdvisoryRequest) -> String                     │
//! │                                                                         │
//! │         ┌────────────────────┐           ┌────────────────────┐         │
//! │         │    HttpBackend     │           │   OfflineBackend   │         │
//! │         │  POST JSON, reqwest│           │  local prose from  │         │
//! │         │  bearer + timeout  │           │  integer shares    │         │
//! │         └────────────────────┘           └────────────────────┘         │
//! │                                                                         │
//! │  Chosen once from AdvisorConfig by build_backend().                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod http;
mod offline;

pub use http::HttpBackend;
pub use offline::OfflineBackend;

use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use tipease_core::advisory::AdvisoryRequest;

use crate::config::{AdvisorConfig, BackendKind};
use crate::error::{AdvisorError, AdvisorResult};

/// Produces fair-split prose for one request.
///
/// Implementations make at most one attempt. The returned text is shown as
/// is; nobody checks that its amounts add up.
#[async_trait]
pub trait SuggestionBackend: Send + Sync {
    async fn suggest(&self, request: &AdvisoryRequest) -> AdvisorResult<String>;
}

/// Builds the backend named by the configuration.
pub fn build_backend(config: &AdvisorConfig) -> AdvisorResult<Arc<dyn SuggestionBackend>> {
    match config.backend_kind() {
        BackendKind::Offline => {
            info!("Using offline suggestion backend");
            Ok(Arc::new(OfflineBackend::new()))
        }
        BackendKind::Http => {
            let endpoint = config.endpoint().ok_or_else(|| {
                AdvisorError::InvalidConfig("http backend requires an endpoint".into())
            })?;
            info!(endpoint, "Using HTTP suggestion backend");
            let backend = HttpBackend::new(
                endpoint,
                config.timeout(),
                config.backend.api_key.clone(),
            )?;
            Ok(Arc::new(backend))
        }
    }
}
