//! Suggestions strip. Clicking a suggestion submits it and removes it.

use leptos::prelude::*;

use crate::components::chat_panel::run_submission;
use crate::state::chat::ChatState;

#[component]
pub fn Suggestions() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let suggestions = Memo::new(move |_| chat.with(|c| c.suggestions.clone()));

    move || {
        let items = suggestions.get();
        (!items.is_empty()).then(|| {
            view! {
                <div class="suggestions">
                    {items
                        .into_iter()
                        .map(|text| {
                            let label = text.clone();
                            let on_click = move |_| {
                                if let Some(submission) = chat.try_update(|c| c.pick_suggestion(&text)).flatten() {
                                    run_submission(chat, submission);
                                }
                            };
                            view! {
                                <button class="suggestions__item" type="button" on:click=on_click>
                                    {label}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            }
        })
    }
}
