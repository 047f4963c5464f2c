use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;
use crate::net::types::AssistResponse;

fn source(i: usize) -> SourceItem {
    SourceItem { title: format!("Source {i}"), url: format!("https://example.test/{i}"), description: None, quote: None }
}

/// Counts how often a view reading `sources` would be rebuilt.
fn rebuild_counter(sources: Memo<Vec<SourceItem>>) -> (Memo<usize>, Arc<AtomicUsize>) {
    let runs = Arc::new(AtomicUsize::new(0));
    let counted = Arc::clone(&runs);
    let view = Memo::new(move |_| {
        counted.fetch_add(1, Ordering::SeqCst);
        sources.get().len()
    });
    (view, runs)
}

#[test]
fn typing_in_prompt_does_not_rebuild_citation() {
    let chat = RwSignal::new(ChatState::default());
    let sub = chat.try_update(|c| c.begin_submission("impact?".to_owned())).flatten().unwrap();
    chat.update(|c| {
        c.receive_response(sub.ticket, AssistResponse { sources: (0..5).map(source).collect(), ..AssistResponse::default() });
    });

    let (view, runs) = rebuild_counter(latest_sources(chat));
    assert_eq!(view.get(), 5);
    assert_eq!(runs.load(Ordering::SeqCst), 1);

    chat.update(|c| c.input = "w".to_owned());
    chat.update(|c| c.input = "wh".to_owned());
    assert_eq!(view.get(), 5);
    assert_eq!(runs.load(Ordering::SeqCst), 1, "keystrokes leave the carousel alone");
}

#[test]
fn new_sources_rebuild_citation() {
    let chat = RwSignal::new(ChatState::default());
    let (view, runs) = rebuild_counter(latest_sources(chat));
    assert_eq!(view.get(), 0);

    let sub = chat.try_update(|c| c.begin_submission("q".to_owned())).flatten().unwrap();
    chat.update(|c| {
        c.receive_response(sub.ticket, AssistResponse { sources: vec![source(0), source(1)], ..AssistResponse::default() });
    });
    assert_eq!(view.get(), 2);
    assert_eq!(runs.load(Ordering::SeqCst), 2);
}
