//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the workspace panes and read/write the shared
//! `RwSignal<ChatState>` provided by the app root.

pub mod chat_panel;
pub mod citation;
pub mod conversation;
pub mod document_pane;
pub mod suggestions;
pub mod thinking_task;
