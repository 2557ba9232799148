use crate::config::Config;
use crate::db::Store;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub llm: LlmClient,
    pub config: Config,
}
