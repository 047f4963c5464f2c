//! Inline citation carousel over the latest response sources.
//!
//! DESIGN
//! ======
//! The carousel owns only its index. Sources come in as a snapshot; a new
//! response re-renders the parent message and therefore resets the index.

#[cfg(test)]
#[path = "citation_test.rs"]
mod citation_test;

use leptos::prelude::*;

use crate::net::types::SourceItem;
use crate::util::carousel::{position_label, step};

/// Host part of a source URL, used as the citation badge.
fn source_host(url: &str) -> String {
    let rest = url.split_once("://").map_or(url, |(_, rest)| rest);
    let host = rest.split(['/', '?', '#']).next().unwrap_or(rest);
    host.strip_prefix("www.").unwrap_or(host).to_owned()
}

/// Badge text for the carousel trigger: first host plus a count of the rest.
fn badge_label(sources: &[SourceItem]) -> String {
    match sources {
        [] => String::new(),
        [only] => source_host(&only.url),
        [first, rest @ ..] => format!("{} +{}", source_host(&first.url), rest.len()),
    }
}

/// Carousel card with prev/next controls and a `current/total` index.
#[component]
pub fn InlineCitation(sources: Vec<SourceItem>) -> impl IntoView {
    let len = sources.len();
    let badge = badge_label(&sources);
    let sources = StoredValue::new(sources);
    let index = RwSignal::new(0_usize);
    let single = len < 2;

    let on_prev = move |_| index.update(|i| *i = step(*i, len, -1));
    let on_next = move |_| index.update(|i| *i = step(*i, len, 1));

    let card = move || {
        let i = index.get();
        sources.with_value(|all| {
            all.get(i).cloned().map(|source| {
                let host = source_host(&source.url);
                view! {
                    <div class="citation__card">
                        <a class="citation__title" href=source.url.clone() target="_blank" rel="noreferrer">
                            {source.title}
                        </a>
                        <div class="citation__host">{host}</div>
                        {source.description.map(|d| view! { <p class="citation__description">{d}</p> })}
                        {source.quote.map(|q| view! { <blockquote class="citation__quote">{q}</blockquote> })}
                    </div>
                }
            })
        })
    };

    view! {
        <div class="citation">
            <span class="citation__badge">{badge}</span>
            <div class="citation__header">
                <button class="btn citation__prev" on:click=on_prev disabled=single aria-label="Previous source">
                    "‹"
                </button>
                <span class="citation__index">{move || position_label(index.get(), len)}</span>
                <button class="btn citation__next" on:click=on_next disabled=single aria-label="Next source">
                    "›"
                </button>
            </div>
            {card}
        </div>
    }
}
