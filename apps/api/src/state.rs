use std::sync::Arc;

use crate::llm_client::LlmClient;
use crate::profile::ProfileContext;

/// Shared application state injected into all route handlers via Axum
/// extractors. The profile context is loaded once at startup and never
/// mutated; everything per-request lives in the request itself.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    pub profile: Arc<ProfileContext>,
}
