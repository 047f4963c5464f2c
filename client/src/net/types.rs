//! Wire DTOs for the assist endpoint.
//!
//! DESIGN
//! ======
//! These mirror the server's `POST /api/assist` body and response. Response
//! fields default when absent so a partial fallback payload still decodes.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Body of `POST /api/assist`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistRequest {
    pub text: String,
}

/// A citation-like record attached to an assistant reply.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceItem {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub quote: Option<String>,
}

/// Response of `POST /api/assist`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistResponse {
    #[serde(default)]
    pub reasoning: String,
    #[serde(default)]
    pub reply: String,
    #[serde(default)]
    pub sources: Vec<SourceItem>,
}
