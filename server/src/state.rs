//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the optional upstream LLM client and the assist tunables.
//! Nothing in it is mutated after startup.

use std::sync::Arc;

use crate::llm::LlmChat;
use crate::services::assist::AssistConfig;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped or Copy.
#[derive(Clone)]
pub struct AppState {
    /// Optional LLM client. `None` if no API key is configured.
    pub llm: Option<Arc<dyn LlmChat>>,
    pub assist: AssistConfig,
}

impl AppState {
    #[must_use]
    pub fn new(llm: Option<Arc<dyn LlmChat>>, assist: AssistConfig) -> Self {
        Self { llm, assist }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
