//! Chat-assistant panel: conversation, thinking indicator, suggestions and
//! the prompt box.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every submission path (prompt, suggestion, retry) funnels into
//! [`run_submission`]. It starts the thinking timer and the assist request
//! together and reveals the reply once both are done. A failed request
//! short-circuits to the network fallback reply.

use leptos::prelude::*;

use crate::components::conversation::Conversation;
use crate::components::suggestions::Suggestions;
use crate::components::thinking_task::ThinkingTask;
use crate::state::chat::{ChatState, ChatStatus, Submission};

/// Drive one submission to completion in the background.
///
/// Results are applied through `try_update`, so a panel that has been
/// unmounted (and its signal disposed) is left alone.
pub(crate) fn run_submission(chat: RwSignal<ChatState>, submission: Submission) {
    #[cfg(feature = "hydrate")]
    {
        use crate::state::chat::THINKING_DELAY;
        use crate::state::reveal::reveal_when_ready;

        leptos::task::spawn_local(async move {
            let Submission { ticket, text } = submission;
            log::debug!("assist submission {ticket} ({} chars)", text.len());
            let timer = gloo_timers::future::sleep(THINKING_DELAY);
            reveal_when_ready(chat, ticket, timer, crate::net::api::post_assist(&text)).await;
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (chat, submission);
    }
}

/// Right-hand chat panel.
#[component]
pub fn ChatPanel() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    let messages_ref = NodeRef::<leptos::html::Div>::new();

    let thinking = Memo::new(move |_| chat.with(|c| c.thinking.clone()));
    let input_blank = Memo::new(move |_| chat.with(|c| c.input.trim().is_empty()));
    let status = Memo::new(move |_| chat.with(|c| c.status));

    // Keep the newest message in view.
    Effect::new(move || {
        let _ = chat.with(|c| c.messages.len());
        let _ = thinking.get();

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    on_cleanup(move || {
        let _ = chat.try_update(ChatState::cancel_pending);
    });

    let do_submit = move || {
        if let Some(submission) = chat.try_update(ChatState::submit_input).flatten() {
            run_submission(chat, submission);
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        do_submit();
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_submit();
        }
    };

    view! {
        <section class="chat-panel">
            <div class="chat-panel__messages" node_ref=messages_ref>
                <Conversation/>
                {move || thinking.get().map(|plan| view! { <ThinkingTask plan=plan/> })}
            </div>

            <Suggestions/>

            <form class="chat-panel__prompt" on:submit=on_submit>
                <textarea
                    class="chat-panel__input"
                    rows="3"
                    placeholder="Ask about this case study..."
                    prop:value=move || chat.with(|c| c.input.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        chat.update(|c| c.input = value);
                    }
                    on:keydown=on_keydown
                ></textarea>
                <button
                    class="btn btn--primary chat-panel__send"
                    type="submit"
                    disabled=move || input_blank.get()
                    class:chat-panel__send--busy=move || status.get() == ChatStatus::Submitted
                >
                    {move || if status.get() == ChatStatus::Submitted { "Thinking..." } else { "Send" }}
                </button>
            </form>
        </section>
    }
}
