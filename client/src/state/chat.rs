//! Chat panel conversation state.
//!
//! DESIGN
//! ======
//! The panel runs a small state machine per submission:
//!
//! ```text
//! Ready --begin_submission--> Submitted (thinking shown)
//!   Submitted --receive_response--> Submitted (sources shown, reply held)
//!   Submitted --finish_thinking---> Ready (assistant reply appended)
//!   Submitted --fail_submission---> Ready (network fallback appended)
//! ```
//!
//! Each submission gets a ticket. A new submission supersedes the previous
//! one and `cancel_pending` abandons it, so late timers and responses that
//! carry a stale ticket are ignored. The view layer owns the timer and the
//! network call; everything here is synchronous and unit-testable.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::thinking::{ThinkingPlan, plan_for};
use crate::net::types::{AssistResponse, SourceItem};

/// How long the thinking indicator stays up before a reply is revealed.
pub const THINKING_DELAY: Duration = Duration::from_millis(3500);

/// Upper bound on the sources shown for a reply.
pub const MAX_SOURCES: usize = 5;

/// Reply text used when the server answered with an empty reply.
pub const EMPTY_REPLY_FALLBACK: &str = "Here is a demo response.";

/// Reply text used when the assist request never produced a response.
pub const NETWORK_ERROR_REPLY: &str = "Demo response (network error).";

/// Suggestions offered before the user has clicked any.
pub const INITIAL_SUGGESTIONS: [&str; 5] = [
    "What research methods did you use?",
    "What were the key user insights?",
    "Show the impact and success metrics",
    "Explain the design decisions and trade\u{2011}offs",
    "Walk me through the process and timeline",
];

/// Author of a chat message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
    System,
}

impl ChatRole {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
            Self::System => "system",
        }
    }
}

/// One typed piece of a message body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum MessagePart {
    Text { text: String },
    Reasoning { text: String },
    SourceUrl { url: String },
}

/// A single conversation message. Lives only for the page session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub role: ChatRole,
    pub parts: Vec<MessagePart>,
}

impl ChatMessage {
    fn new(role: ChatRole, parts: Vec<MessagePart>) -> Self {
        Self { id: uuid::Uuid::new_v4().to_string(), role, parts }
    }

    fn user(text: String) -> Self {
        Self::new(ChatRole::User, vec![MessagePart::Text { text }])
    }

    /// First text part, if any.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.parts.iter().find_map(|p| match p {
            MessagePart::Text { text } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Reasoning part, if any.
    #[must_use]
    pub fn reasoning(&self) -> Option<&str> {
        self.parts.iter().find_map(|p| match p {
            MessagePart::Reasoning { text } => Some(text.as_str()),
            _ => None,
        })
    }

    #[must_use]
    pub fn source_urls(&self) -> Vec<&str> {
        self.parts
            .iter()
            .filter_map(|p| match p {
                MessagePart::SourceUrl { url } => Some(url.as_str()),
                _ => None,
            })
            .collect()
    }
}

/// Prompt submit state, mirrored by the submit button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChatStatus {
    #[default]
    Ready,
    Submitted,
}

/// A started submission. The caller runs the timer and network call for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    pub ticket: u64,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct PendingReply {
    reasoning: String,
    reply: String,
}

/// State for the chat-assistant panel.
#[derive(Clone, Debug)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    /// Current prompt textarea contents.
    pub input: String,
    /// Thinking indicator; `Some` while a submission is pending.
    pub thinking: Option<ThinkingPlan>,
    /// Sources from the most recent response, at most [`MAX_SOURCES`].
    pub last_sources: Vec<SourceItem>,
    /// Remaining suggestions. Only ever shrinks.
    pub suggestions: Vec<String>,
    pub status: ChatStatus,
    next_ticket: u64,
    in_flight: Option<u64>,
    pending: Option<PendingReply>,
}

impl Default for ChatState {
    fn default() -> Self {
        Self {
            messages: Vec::new(),
            input: String::new(),
            thinking: None,
            last_sources: Vec::new(),
            suggestions: INITIAL_SUGGESTIONS.iter().map(|s| (*s).to_owned()).collect(),
            status: ChatStatus::Ready,
            next_ticket: 0,
            in_flight: None,
            pending: None,
        }
    }
}

impl ChatState {
    #[must_use]
    pub fn is_thinking(&self) -> bool {
        self.thinking.is_some()
    }

    fn is_current(&self, ticket: u64) -> bool {
        self.in_flight == Some(ticket)
    }

    /// Start a submission: append the user message and show the thinking
    /// plan. Returns `None` for blank text. Supersedes any in-flight
    /// submission.
    pub fn begin_submission(&mut self, text: String) -> Option<Submission> {
        if text.trim().is_empty() {
            return None;
        }

        self.thinking = Some(plan_for(&text));
        self.messages.push(ChatMessage::user(text.clone()));
        self.status = ChatStatus::Submitted;
        self.next_ticket += 1;
        self.in_flight = Some(self.next_ticket);
        self.pending = None;

        Some(Submission { ticket: self.next_ticket, text })
    }

    /// Submit the prompt input. Blank input is left untouched.
    pub fn submit_input(&mut self) -> Option<Submission> {
        if self.input.trim().is_empty() {
            return None;
        }
        let text = std::mem::take(&mut self.input);
        self.begin_submission(text)
    }

    /// Remove a suggestion for good and submit it.
    pub fn pick_suggestion(&mut self, text: &str) -> Option<Submission> {
        self.suggestions.retain(|s| s != text);
        self.begin_submission(text.to_owned())
    }

    /// Resubmit the most recent user message.
    pub fn regenerate(&mut self) -> Option<Submission> {
        let text = self
            .messages
            .iter()
            .rev()
            .find(|m| m.role == ChatRole::User)
            .and_then(ChatMessage::text)?
            .to_owned();
        self.begin_submission(text)
    }

    /// Record the assist response. Sources show immediately; the reply waits
    /// for [`ChatState::finish_thinking`]. Returns `false` for stale tickets.
    pub fn receive_response(&mut self, ticket: u64, response: AssistResponse) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.last_sources = response.sources.into_iter().take(MAX_SOURCES).collect();
        self.pending = Some(PendingReply { reasoning: response.reasoning, reply: response.reply });
        true
    }

    /// Clear the thinking indicator and append the held reply as one
    /// assistant message. Returns `false` when the ticket is stale or no
    /// response has arrived yet.
    pub fn finish_thinking(&mut self, ticket: u64) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        let Some(pending) = self.pending.take() else {
            return false;
        };

        let mut parts = Vec::with_capacity(2 + self.last_sources.len());
        if !pending.reasoning.trim().is_empty() {
            parts.push(MessagePart::Reasoning { text: pending.reasoning });
        }
        let reply = if pending.reply.trim().is_empty() { EMPTY_REPLY_FALLBACK.to_owned() } else { pending.reply };
        parts.push(MessagePart::Text { text: reply });
        parts.extend(
            self.last_sources
                .iter()
                .map(|s| MessagePart::SourceUrl { url: s.url.clone() }),
        );

        self.messages.push(ChatMessage::new(ChatRole::Assistant, parts));
        self.settle();
        true
    }

    /// The request failed before any response: drop the thinking indicator
    /// and append the network fallback reply at once.
    pub fn fail_submission(&mut self, ticket: u64) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.messages.push(ChatMessage::new(
            ChatRole::Assistant,
            vec![MessagePart::Text { text: NETWORK_ERROR_REPLY.to_owned() }],
        ));
        self.settle();
        true
    }

    /// Abandon the in-flight submission, e.g. when the panel unmounts.
    pub fn cancel_pending(&mut self) {
        self.settle();
    }

    fn settle(&mut self) {
        self.thinking = None;
        self.status = ChatStatus::Ready;
        self.in_flight = None;
        self.pending = None;
    }

    /// Index of the newest assistant message; actions and the citation
    /// carousel attach to it.
    #[must_use]
    pub fn latest_assistant_index(&self) -> Option<usize> {
        self.messages
            .iter()
            .rposition(|m| m.role == ChatRole::Assistant)
    }
}
