//! Conversation list for the chat panel.
//!
//! Assistant replies render their reasoning disclosure, markdown body and
//! source list. The newest reply additionally carries the citation carousel
//! over the latest sources plus the Retry and Copy actions.

#[cfg(test)]
#[path = "conversation_test.rs"]
mod conversation_test;

use leptos::prelude::*;

use crate::components::chat_panel::run_submission;
use crate::components::citation::InlineCitation;
use crate::net::types::SourceItem;
use crate::state::chat::{ChatMessage, ChatRole, ChatState};
use crate::util::clipboard::copy_text;
use crate::util::markdown::render_markdown_html;

/// Latest response sources, notifying only when the list itself changes.
///
/// The carousel keeps its position in a local signal, so it must not be
/// rebuilt by unrelated state changes such as prompt keystrokes.
fn latest_sources(chat: RwSignal<ChatState>) -> Memo<Vec<SourceItem>> {
    Memo::new(move |_| chat.with(|c| c.last_sources.clone()))
}

#[component]
pub fn Conversation() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let messages = Memo::new(move |_| chat.with(|c| c.messages.clone()));
    let latest = Memo::new(move |_| chat.with(ChatState::latest_assistant_index));
    let sources = latest_sources(chat);

    move || {
        let messages = messages.get();
        if messages.is_empty() {
            return view! {
                <div class="conversation__empty">"Ask anything about this case study."</div>
            }
            .into_any();
        }

        let latest = latest.get();
        messages
            .into_iter()
            .enumerate()
            .map(|(i, message)| match message.role {
                ChatRole::Assistant => {
                    let is_latest = latest == Some(i);
                    view! { <AssistantMessage message=message latest=is_latest sources=sources/> }.into_any()
                }
                ChatRole::User | ChatRole::System => {
                    let class = format!("conversation__message conversation__message--{}", message.role.as_str());
                    let text = message.text().unwrap_or_default().to_owned();
                    view! {
                        <div class=class>
                            <div class="conversation__bubble">{text}</div>
                        </div>
                    }
                    .into_any()
                }
            })
            .collect::<Vec<_>>()
            .into_any()
    }
}

#[component]
fn AssistantMessage(message: ChatMessage, latest: bool, sources: Memo<Vec<SourceItem>>) -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    let reasoning = message.reasoning().map(str::to_owned);
    let text = message.text().unwrap_or_default().to_owned();
    let urls: Vec<String> = message.source_urls().into_iter().map(str::to_owned).collect();
    let rendered = render_markdown_html(&text);
    let copied = RwSignal::new(false);

    let sources_list = (!urls.is_empty()).then(|| {
        let summary = format!("Used {} sources", urls.len());
        view! {
            <details class="sources">
                <summary class="sources__trigger">{summary}</summary>
                <ul class="sources__list">
                    {urls
                        .into_iter()
                        .map(|url| {
                            view! {
                                <li>
                                    <a href=url.clone() target="_blank" rel="noreferrer">{url.clone()}</a>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </details>
        }
    });

    let reasoning_view = reasoning.map(|r| {
        view! {
            <details class="reasoning">
                <summary class="reasoning__trigger">"Reasoning"</summary>
                <div class="reasoning__content">{r}</div>
            </details>
        }
    });

    let citation = latest.then(|| {
        move || {
            let sources = sources.get();
            (!sources.is_empty()).then(|| view! { <InlineCitation sources=sources/> })
        }
    });

    let actions = latest.then(|| {
        let on_retry = move |_| {
            if let Some(submission) = chat.try_update(ChatState::regenerate).flatten() {
                run_submission(chat, submission);
            }
        };
        let on_copy = move |_| {
            if copy_text(&text) {
                copied.set(true);
            }
        };
        view! {
            <div class="actions">
                <button class="actions__item" type="button" on:click=on_retry title="Retry">
                    "Retry"
                </button>
                <button class="actions__item" type="button" on:click=on_copy title="Copy">
                    {move || if copied.get() { "Copied" } else { "Copy" }}
                </button>
            </div>
        }
    });

    view! {
        <div class="conversation__message conversation__message--assistant">
            {sources_list}
            {reasoning_view}
            <div class="conversation__content">
                <div class="conversation__markdown" inner_html=rendered></div>
                {citation}
            </div>
            {actions}
        </div>
    }
}
