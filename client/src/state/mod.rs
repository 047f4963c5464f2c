//! Client-side state for the chat panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! `chat` holds the conversation state machine provided as a
//! `RwSignal<ChatState>` context; `thinking` picks the canned thinking plan;
//! `reveal` applies the timer and assist results of one submission.

pub mod chat;
pub mod reveal;
pub mod thinking;
