//! Workspace page: document pane beside the chat-assistant panel.

use leptos::prelude::*;

use crate::components::chat_panel::ChatPanel;
use crate::components::document_pane::DocumentPane;

#[component]
pub fn WorkspacePage() -> impl IntoView {
    view! {
        <main class="workspace">
            <div class="workspace__document">
                <DocumentPane/>
            </div>
            <aside class="workspace__chat">
                <ChatPanel/>
            </aside>
        </main>
    }
}
