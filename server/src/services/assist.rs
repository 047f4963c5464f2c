//! Assist service: user question → reasoning hint, reply, and sources.
//!
//! DESIGN
//! ======
//! Every path returns an [`AssistResponse`]. With no upstream client the
//! answer is canned placeholder content. With one, a first completion
//! produces the reply (its first line doubles as the reasoning hint) and a
//! second, JSON-mode completion produces up to five sources. Upstream
//! failures and timeouts fold into fallback text; they never become HTTP
//! errors.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

use crate::llm::LlmChat;
use crate::llm::config::env_parse;
use crate::llm::types::{ChatOptions, LlmError, Message, ResponseFormat};

pub const MAX_SOURCES: usize = 5;
const DEFAULT_ASSIST_MAX_DURATION_SECS: u64 = 15;
const DEFAULT_ASSIST_MAX_TOKENS: u32 = 1024;

const REPLY_SYSTEM_PROMPT: &str =
    "You are a concise assistant. First provide a short one-sentence internal reasoning summary, then the final answer.";
const SOURCES_SYSTEM_PROMPT: &str = "Return JSON with an array of 5 credible sources with {title,url,description,quote} about the user topic. Only return JSON.";

const REPLY_TEMPERATURE: f32 = 0.7;
const SOURCES_TEMPERATURE: f32 = 0.5;

const TOPIC_PREVIEW_CHARS: usize = 120;
const REASONING_MAX_CHARS: usize = 200;
const ERROR_PREVIEW_CHARS: usize = 120;
const EMPTY_REPLY: &str = "Here is a demo response.";

// =============================================================================
// TYPES
// =============================================================================

/// Body of `POST /api/assist`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssistRequest {
    #[serde(default)]
    pub text: String,
}

/// Citation-like record attached to an assistant reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceItem {
    pub title: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote: Option<String>,
}

impl SourceItem {
    fn canned(title: &str, url: &str, description: &str, quote: &str) -> Self {
        Self {
            title: title.to_owned(),
            url: url.to_owned(),
            description: Some(description.to_owned()),
            quote: Some(quote.to_owned()),
        }
    }
}

/// Response of `POST /api/assist`. `reply` is never empty and
/// `sources.len() <= MAX_SOURCES`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistResponse {
    pub reasoning: String,
    pub reply: String,
    pub sources: Vec<SourceItem>,
}

#[derive(Debug, thiserror::Error)]
pub enum AssistError {
    #[error("upstream error: {0}")]
    Upstream(#[from] LlmError),
    #[error("upstream timed out")]
    TimedOut,
}

/// Tunables for the upstream exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssistConfig {
    pub max_tokens: u32,
    pub max_duration: Duration,
}

impl Default for AssistConfig {
    fn default() -> Self {
        Self {
            max_tokens: DEFAULT_ASSIST_MAX_TOKENS,
            max_duration: Duration::from_secs(DEFAULT_ASSIST_MAX_DURATION_SECS),
        }
    }
}

impl AssistConfig {
    /// Read `ASSIST_MAX_TOKENS` and `ASSIST_MAX_DURATION_SECS`.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            max_tokens: env_parse("ASSIST_MAX_TOKENS", DEFAULT_ASSIST_MAX_TOKENS),
            max_duration: Duration::from_secs(env_parse("ASSIST_MAX_DURATION_SECS", DEFAULT_ASSIST_MAX_DURATION_SECS)),
        }
    }
}

// =============================================================================
// MAIN ENTRY POINT
// =============================================================================

/// Answer a user question. Never fails.
pub async fn answer(llm: Option<&dyn LlmChat>, text: &str, config: &AssistConfig) -> AssistResponse {
    info!(text_len = text.len(), upstream = llm.is_some(), "assist: request received");
    let Some(llm) = llm else {
        return placeholder_response(text);
    };

    let outcome = tokio::time::timeout(config.max_duration, upstream_answer(llm, text, config.max_tokens))
        .await
        .unwrap_or_else(|_| Err(AssistError::TimedOut));

    outcome.unwrap_or_else(|e| {
        warn!(error = %e, "assist: upstream failed; serving fallback");
        fallback_response(&e, text)
    })
}

async fn upstream_answer(llm: &dyn LlmChat, text: &str, max_tokens: u32) -> Result<AssistResponse, AssistError> {
    let messages = [Message::user(text)];
    let reply_options = ChatOptions { temperature: REPLY_TEMPERATURE, response_format: ResponseFormat::Text };
    let completion = llm
        .chat(max_tokens, REPLY_SYSTEM_PROMPT, &messages, reply_options)
        .await?;
    info!(
        model = %completion.model,
        stop_reason = %completion.stop_reason,
        input_tokens = completion.input_tokens,
        output_tokens = completion.output_tokens,
        "assist: reply completion"
    );
    let (reasoning, reply) = split_reasoning(&completion.text, text);

    let sources_options = ChatOptions { temperature: SOURCES_TEMPERATURE, response_format: ResponseFormat::JsonObject };
    let sources = match llm
        .chat(max_tokens, SOURCES_SYSTEM_PROMPT, &messages, sources_options)
        .await
    {
        Ok(resp) => parse_sources(&resp.text),
        Err(e) => {
            warn!(error = %e, "assist: sources call failed");
            Vec::new()
        }
    };
    let sources = if sources.is_empty() { fallback_sources() } else { sources };

    info!(reply_len = reply.len(), sources = sources.len(), "assist: upstream answered");
    Ok(AssistResponse { reasoning, reply, sources })
}

/// Generic error fallback, also used for request bodies that cannot be read.
#[must_use]
pub fn error_fallback_response(detail: &str) -> AssistResponse {
    AssistResponse {
        reasoning: "Thinking…".to_owned(),
        reply: format!("Demo response (error fallback): {detail}"),
        sources: Vec::new(),
    }
}

// =============================================================================
// SHAPING HELPERS
// =============================================================================

fn thinking_about(text: &str) -> String {
    format!("Thinking about: \"{}\"", clip(text, TOPIC_PREVIEW_CHARS))
}

/// First `max_chars` characters of `s`.
fn clip(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Split a completion into (reasoning hint, reply).
///
/// The first line is the reasoning; the rest is the reply. A single-line
/// completion is used as the reply too.
fn split_reasoning(full: &str, text: &str) -> (String, String) {
    let (first_line, rest) = full.split_once('\n').unwrap_or((full, ""));
    let line = clip(first_line, REASONING_MAX_CHARS);
    let reasoning = if line.trim().is_empty() { thinking_about(text) } else { line.to_owned() };
    let reply = match rest.trim() {
        "" if full.trim().is_empty() => EMPTY_REPLY.to_owned(),
        "" => full.to_owned(),
        body => body.to_owned(),
    };
    (reasoning, reply)
}

/// Parse `{"sources": [...]}`, keeping at most [`MAX_SOURCES`] entries that
/// carry a string `title` and `url`.
fn parse_sources(json_text: &str) -> Vec<SourceItem> {
    let root: Value = match serde_json::from_str(json_text) {
        Ok(v) => v,
        Err(e) => {
            warn!(error = %e, "assist: sources payload is not JSON");
            return Vec::new();
        }
    };
    let Some(items) = root.get("sources").and_then(Value::as_array) else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|item| serde_json::from_value::<SourceItem>(item.clone()).ok())
        .take(MAX_SOURCES)
        .collect()
}

fn fallback_response(err: &AssistError, text: &str) -> AssistResponse {
    match err {
        AssistError::Upstream(e @ LlmError::ApiResponse { .. }) => AssistResponse {
            reasoning: thinking_about(text),
            reply: format!("Demo response (fallback). Upstream error: {}", clip(&e.detail(), ERROR_PREVIEW_CHARS)),
            sources: Vec::new(),
        },
        AssistError::Upstream(e) => error_fallback_response(&e.detail()),
        AssistError::TimedOut => error_fallback_response(&err.to_string()),
    }
}

fn placeholder_response(text: &str) -> AssistResponse {
    AssistResponse {
        reasoning: thinking_about(text),
        reply: format!(
            "Here is a demo answer to: \"{text}\"\n\n- Key point 1\n- Key point 2\n\nThis is placeholder content generated locally."
        ),
        sources: vec![
            SourceItem::canned(
                "AI SDK",
                "https://ai-sdk.dev",
                "The AI Toolkit for TypeScript",
                "AI SDK streamlines LLM apps with sensible defaults.",
            ),
            SourceItem::canned("Vercel", "https://vercel.com", "Frontend cloud", "Deploy previews and global edge network."),
            SourceItem::canned("Next.js", "https://nextjs.org", "React framework", "Hybrid static & server rendering."),
            SourceItem::canned(
                "DeepSeek",
                "https://deepseek.com",
                "Reasoning model provider",
                "Reasoning-first models for complex tasks.",
            ),
            SourceItem::canned("OpenAI", "https://openai.com", "Models and APIs", "GPT models for text and multimodal."),
        ],
    }
}

fn fallback_sources() -> Vec<SourceItem> {
    vec![
        SourceItem::canned("AI SDK", "https://ai-sdk.dev", "The AI Toolkit for TypeScript", "AI SDK streamlines LLM apps."),
        SourceItem::canned("Vercel", "https://vercel.com", "Frontend cloud", "Global edge network."),
        SourceItem::canned("Next.js", "https://nextjs.org", "React framework", "Hybrid rendering."),
        SourceItem::canned("OpenAI", "https://openai.com", "Models and APIs", "GPT models."),
        SourceItem::canned("MDN", "https://developer.mozilla.org", "Web docs", "Authoritative web platform docs."),
    ]
}

#[cfg(test)]
#[path = "assist_test.rs"]
mod tests;
