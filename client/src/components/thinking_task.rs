//! Thinking indicator: the canned plan title and its steps.

use leptos::prelude::*;

use crate::state::thinking::ThinkingPlan;

/// Renders one thinking plan while a submission is pending.
#[component]
pub fn ThinkingTask(plan: ThinkingPlan) -> impl IntoView {
    let ThinkingPlan { title, steps } = plan;

    view! {
        <div class="thinking-task" role="status" aria-live="polite">
            <div class="thinking-task__title">
                <span class="thinking-task__spinner"></span>
                {title}
            </div>
            <ul class="thinking-task__steps">
                {steps
                    .into_iter()
                    .map(|step| view! { <li class="thinking-task__step">{step}</li> })
                    .collect::<Vec<_>>()}
            </ul>
        </div>
    }
}
