//! Editable document pane seeded with the case-study text.
//!
//! A plain `contenteditable` article. Edits live only in the DOM and are
//! gone on reload.

use leptos::prelude::*;

const TITLE: &str = "Redesigning Slack: a simpler, more organized workspace";

const CASE_STUDY: &[&str] = &[
    "Today, we’re launching a significant update to Slack’s design. It’s not just one change, but a constellation of them: some shiny new things (channel sections!), some old things in new places and a general spring cleaning of information architecture.",
    "These changes address a basic challenge that has grown naturally with Slack: with size comes complexity. As different product teams added new capabilities piecemeal, Slack started to feel not intuitive for people trying it out for the first time.",
    "Even people who had used Slack for years often didn’t know about powerful features because they were buried away in odd places. And this growing tangle made it harder for us to build new things; we couldn’t find places to put them.",
    "This type of problem is hard to quantify and measure. We weren’t going to solve it through A/B testing tiny changes or intellectualizing over it in a room with a bunch of sticky notes. Instead, we took it to people in the real world.",
    "We tried a new way of working with our users, bringing them into every stage of the design process. Together we were able to prototype, build and refine our designs to create a simpler and more organized Slack.",
    "Assembling the team",
    "We put together a small team of designers, engineers, researchers and product managers to create rough, “throw-away” prototypes. Because Slack’s mission is to make work easier for people, our guiding principle was to limit the choices someone using Slack might have to make.",
    "Co-designing with customers",
    "In order to collect feedback, we worked with customers the best way we knew how: through a shared channel. It was eventually shared with around 100 users from our champion network, representing dozens of organizations around the world.",
    "Member count is critical",
    "As we attempted to strip down the UI, we thought that channel member count could be safely tucked behind a click. In practice, member count provides a crucial sense of “reading the room,” which gives an important clue about how to behave.",
    "People will find the things they really want",
    "When we introduced the ability to organize channels, we were concerned that people wouldn’t easily find out about it. With just a bit of education, we saw members of the pilot learn to create custom sections despite the fact that it was tucked away.",
];

/// Short lines in the seed text are section headings.
fn is_heading(paragraph: &str) -> bool {
    paragraph.len() < 60 && !paragraph.ends_with('.')
}

#[component]
pub fn DocumentPane() -> impl IntoView {
    view! {
        <article class="document-pane" contenteditable="true" spellcheck="true">
            <h1 class="document-pane__title">{TITLE}</h1>
            {CASE_STUDY
                .iter()
                .map(|paragraph| {
                    if is_heading(paragraph) {
                        view! { <h2 class="document-pane__heading">{*paragraph}</h2> }.into_any()
                    } else {
                        view! { <p class="document-pane__paragraph">{*paragraph}</p> }.into_any()
                    }
                })
                .collect::<Vec<_>>()}
        </article>
    }
}
